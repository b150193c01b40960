//! Errors that occur while building or writing an icon

use icon_types::TaggedF2Dot14;

/// The valid range of an encoded color component.
pub const COLOR_COMPONENT_RANGE: (f64, f64) = (-0.5, 7.5);

/// The valid range of an encoded alpha value.
pub const ALPHA_RANGE: (f64, f64) = (0.0, 1.0);

/// An error that aborts the conversion of an icon.
///
/// There is no partial output: any of these means no icon was produced.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A color was neither a known name nor a well formed hex string.
    InvalidColorFormat(String),
    /// A linear color component does not fit the 16-bit encoding.
    ColorComponentOverflow { value: f64 },
    /// An alpha value does not fit the 16-bit encoding.
    AlphaOverflow { value: f64 },
    /// A coordinate or stroke width does not fit a [`TaggedF2Dot14`].
    CoordinateOverflow { value: f64 },
    /// A path data command other than `M`, `L`, `C`, `S`, `Q` or `Z`.
    UnsupportedPathCommand(char),
    /// A drawing command appeared before any `M` command.
    NoActiveContour(char),
    /// Path data ended, or had a command, where a number was expected.
    MissingPathArgument(char),
    /// Path data had a number where a command was expected.
    UnexpectedNumber(f64),
    /// A numeric token or attribute could not be parsed.
    InvalidNumber(String),
    /// The icon bounds have zero (or non-finite) width or height.
    DegenerateBoundingBox { width: f64, height: f64 },
    /// An element lacks an attribute it cannot be drawn without.
    MissingRequiredAttribute {
        element: &'static str,
        attribute: &'static str,
    },
    /// Too many items to be counted in a 16-bit field.
    CountOverflow { what: &'static str, count: usize },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidColorFormat(color) => write!(
                f,
                "Unexpected color format '{color}', expected a color name or '#' with 3, 4, 6 or 8 hex digits"
            ),
            Error::ColorComponentOverflow { value } => write!(
                f,
                "Color component value {value} should be between {} and {}",
                COLOR_COMPONENT_RANGE.0, COLOR_COMPONENT_RANGE.1
            ),
            Error::AlphaOverflow { value } => write!(
                f,
                "Alpha value {value} should be between {} and {}",
                ALPHA_RANGE.0, ALPHA_RANGE.1
            ),
            Error::CoordinateOverflow { value } => write!(
                f,
                "{value} is not within {} and {}",
                TaggedF2Dot14::MIN_F64,
                TaggedF2Dot14::MAX_F64
            ),
            Error::UnsupportedPathCommand(command) => {
                write!(f, "Path command '{command}' is not supported")
            }
            Error::NoActiveContour(command) => {
                write!(f, "Path command '{command}' has no contour, expected 'M' first")
            }
            Error::MissingPathArgument(command) => {
                write!(f, "Path command '{command}' is missing a numeric argument")
            }
            Error::UnexpectedNumber(value) => write!(
                f,
                "Expected a path command, found number {value} (repeated commands must be explicit)"
            ),
            Error::InvalidNumber(text) => write!(f, "'{text}' is not a valid number"),
            Error::DegenerateBoundingBox { width, height } => write!(
                f,
                "Icon bounding box {width}x{height} must have a non-zero width and height"
            ),
            Error::MissingRequiredAttribute { element, attribute } => {
                write!(f, "<{element}> is missing required attribute '{attribute}'")
            }
            Error::CountOverflow { what, count } => {
                write!(f, "{count} {what} do not fit in a 16-bit count")
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_messages_report_value_and_range() {
        let msg = Error::CoordinateOverflow { value: 2.5 }.to_string();
        assert_eq!(msg, "2.5 is not within -2 and 1.9998779296875");
        let msg = Error::ColorComponentOverflow { value: -1.0 }.to_string();
        assert_eq!(
            msg,
            "Color component value -1 should be between -0.5 and 7.5"
        );
        let msg = Error::AlphaOverflow { value: 1.5 }.to_string();
        assert_eq!(msg, "Alpha value 1.5 should be between 0 and 1");
    }
}
