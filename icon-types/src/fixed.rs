//! fixed-point numerical types

/// A 16-bit signed 2.14 fixed-point number whose lowest bit is a tag.
///
/// The value occupies the upper 15 bits, so the representable values are
/// multiples of `2 / 16384`. The low bit carries one bit of structural
/// information alongside the value: the kind of a curve point for
/// coordinates, and the line join style for stroke widths.
///
/// This is stored little-endian on the wire.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct TaggedF2Dot14(i16);

impl TaggedF2Dot14 {
    /// The smallest value that can be encoded.
    pub const MIN_F64: f64 = -2.0;

    /// The largest value that is guaranteed to encode.
    pub const MAX_F64: f64 = 1.9998779296875;

    const ONE: f64 = (1 << Self::FRACT_BITS) as f64;
    const FRACT_BITS: usize = 14;
    const TAG_MASK: i16 = 1;

    /// Create a value from raw bits, as read from a file.
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits as i16)
    }

    /// Attempt to encode a float together with a tag bit.
    ///
    /// The float is rounded to the nearest 2.14 value, after which the low
    /// bit is replaced by `tag`.
    ///
    /// Returns `None` if the rounded value does not fit in 16 bits, or if
    /// the input is not finite.
    pub fn checked_from_f64(value: f64, tag: bool) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let raw = (value * Self::ONE).round();
        if raw < i16::MIN as f64 || raw > i16::MAX as f64 {
            return None;
        }
        let raw = (raw as i16 & !Self::TAG_MASK) | tag as i16;
        Some(Self(raw))
    }

    /// Returns the value as an `f64`, ignoring the tag bit.
    ///
    /// This operation is lossless.
    pub fn to_f64(self) -> f64 {
        (self.0 & !Self::TAG_MASK) as f64 / Self::ONE
    }

    /// The tag bit.
    pub fn tag(self) -> bool {
        self.0 & Self::TAG_MASK != 0
    }

    /// The raw bits, as they are written to a file.
    pub const fn to_bits(self) -> u16 {
        self.0 as u16
    }

    /// The little-endian representation of this value.
    pub const fn to_le_bytes(self) -> [u8; 2] {
        self.0.to_le_bytes()
    }
}

impl std::fmt::Display for TaggedF2Dot14 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.to_f64().fmt(f)
    }
}

impl std::fmt::Debug for TaggedF2Dot14 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.tag() {
            write!(f, "{}*", self.to_f64())
        } else {
            self.to_f64().fmt(f)
        }
    }
}
