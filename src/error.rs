//! Errors reported by the parsing entry points.

/// An erroneous color string.
///
/// [`Color::from_string`](crate::Color::from_string) swallows these and
/// leaves the color untouched. They only surface through
/// [`Color::try_from_string`](crate::Color::try_from_string) and
/// [`str::parse`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// An empty (or all white space) string.
    Empty,

    /// A color string that does not start with `#`, `hsl`, `hsla`, `hsv`,
    /// `hsva`, `rgb`, or `rgba`.
    UnknownFormat,

    /// A functional notation without the opening parenthesis. For example,
    /// `rgb 0, 0, 0)`.
    NoOpeningParenthesis,

    /// A functional notation without the closing parenthesis. For example,
    /// `hsl(0, 50%, 50%`.
    NoClosingParenthesis,

    /// A functional notation with fewer than three coordinates. For example,
    /// `rgb(255)`.
    MissingCoordinate,

    /// A functional notation with more than four coordinates.
    TooManyCoordinates,

    /// A coordinate that is not a number. For example, `hsl(invalid)`.
    MalformedFloat,

    /// A hashed color with a digit count other than 3, 6, or 8.
    UnexpectedCharacters,

    /// A hashed color with a non-hexadecimal digit. For example, `#ggg`.
    MalformedHex,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            Empty => f.write_str("color string is empty"),
            UnknownFormat => f.write_str(
                "color format should start with `#`, `hsl`, `hsla`, `hsv`, `hsva`, `rgb`, or `rgba`",
            ),
            NoOpeningParenthesis => f.write_str("color function is missing `(`"),
            NoClosingParenthesis => f.write_str("color function is missing `)`"),
            MissingCoordinate => f.write_str("color function needs at least 3 coordinates"),
            TooManyCoordinates => f.write_str("color function takes at most 4 coordinates"),
            MalformedFloat => f.write_str("color coordinate is not a number"),
            UnexpectedCharacters => f.write_str("hashed color should have 3, 6, or 8 digits"),
            MalformedHex => f.write_str("hashed color has a non-hexadecimal digit"),
        }
    }
}

impl std::error::Error for ColorFormatError {}

/// A channel name other than `hue`, `saturation`, `value`, or `alpha`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownChannelError {
    /// The rejected name.
    pub name: String,
}

impl UnknownChannelError {
    /// Create a new unknown-channel error.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl std::fmt::Display for UnknownChannelError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "`{}` is not one of hue, saturation, value, or alpha",
            self.name
        )
    }
}

impl std::error::Error for UnknownChannelError {}
