//! Colors, and their 16-bit scRGBA encoding

use std::str::FromStr;

use crate::{
    error::Error,
    write::{IconWrite, IconWriter},
};

/// The basic named colors, and their sRGB hex equivalents.
pub static NAMED_COLORS: &[(&str, &str)] = &[
    ("black", "#000000"),
    ("green", "#008000"),
    ("silver", "#C0C0C0"),
    ("lime", "#00FF00"),
    ("gray", "#808080"),
    ("olive", "#808000"),
    ("white", "#FFFFFF"),
    ("yellow", "#FFFF00"),
    ("maroon", "#800000"),
    ("navy", "#000080"),
    ("red", "#FF0000"),
    ("blue", "#0000FF"),
    ("purple", "#800080"),
    ("teal", "#008080"),
    ("fuchsia", "#FF00FF"),
    ("aqua", "#00FFFF"),
];

/// A color in scRGBA: linear-light red, green and blue, plus linear alpha.
///
/// Components are not clamped; the encoding can represent red, green and
/// blue values between -0.5 and 7.5.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    /// Fully transparent black, the color of an absent `fill` or `stroke`.
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    /// Create a color from linear components.
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Color {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Parse an optional color attribute.
    ///
    /// A missing or empty attribute is [`Color::TRANSPARENT`].
    pub fn from_attribute(value: Option<&str>) -> Result<Self, Error> {
        match value {
            None | Some("") => Ok(Color::TRANSPARENT),
            Some(value) => value.parse(),
        }
    }

    /// Encode the color as four little-endian 16-bit words.
    pub fn encode(&self) -> Result<[u8; 8], Error> {
        let mut out = [0u8; 8];
        let words = [
            encode_component(self.red)?.to_le_bytes(),
            encode_component(self.green)?.to_le_bytes(),
            encode_component(self.blue)?.to_le_bytes(),
            encode_alpha(self.alpha)?.to_le_bytes(),
        ];
        for (chunk, word) in out.chunks_exact_mut(2).zip(words) {
            chunk.copy_from_slice(&word);
        }
        Ok(out)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = lookup_named_color(s).unwrap_or(s);
        let Some(digits) = hex.strip_prefix('#') else {
            return Err(Error::InvalidColorFormat(s.to_owned()));
        };
        let [r, g, b, a] =
            parse_hex_digits(digits).ok_or_else(|| Error::InvalidColorFormat(s.to_owned()))?;
        Ok(Color::new(
            gamma_to_linear(r as f64 / 255.0),
            gamma_to_linear(g as f64 / 255.0),
            gamma_to_linear(b as f64 / 255.0),
            a as f64 / 255.0,
        ))
    }
}

impl IconWrite for Color {
    fn write_into(&self, writer: &mut IconWriter) -> Result<(), Error> {
        writer.write_slice(&self.encode()?);
        Ok(())
    }
}

fn lookup_named_color(name: &str) -> Option<&'static str> {
    NAMED_COLORS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .map(|(_, hex)| *hex)
}

/// Expand 3, 4, 6 or 8 hex digits to RGBA bytes.
fn parse_hex_digits(digits: &str) -> Option<[u8; 4]> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).ok();
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    match digits.len() {
        3 | 4 => {
            let mut out = [0xff; 4];
            for (i, component) in out.iter_mut().enumerate().take(digits.len()) {
                *component = nibble(i)? * 0x11;
            }
            Some(out)
        }
        6 => Some([byte(0)?, byte(2)?, byte(4)?, 0xff]),
        8 => Some([byte(0)?, byte(2)?, byte(4)?, byte(6)?]),
        _ => None,
    }
}

/// Convert an sRGB gamma encoded value in [0, 1] to linear light.
pub fn gamma_to_linear(u: f64) -> f64 {
    if u <= 0.04045 {
        u / 12.92
    } else {
        ((u + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode a linear red, green or blue component.
///
/// The component is mapped so that 0.0 is 4096 and 1.0 is 12288, which
/// makes the encodable range -0.5 up to (but not including) 7.5.
pub fn encode_component(value: f64) -> Result<u16, Error> {
    let raw = (value * 8192.0 + 4096.0).round();
    if !(0.0..=u16::MAX as f64).contains(&raw) {
        return Err(Error::ColorComponentOverflow { value });
    }
    Ok(raw as u16)
}

/// Encode a linear alpha value, where 1.0 is 65535.
pub fn encode_alpha(value: f64) -> Result<u16, Error> {
    let raw = (value * 65535.0).round();
    if !(0.0..=u16::MAX as f64).contains(&raw) {
        return Err(Error::AlphaOverflow { value });
    }
    Ok(raw as u16)
}
