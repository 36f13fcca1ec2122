//! Construction options for a [`Color`](crate::Color).

use crate::format::Format;

/// Options fixed at construction of a [`Color`](crate::Color).
///
/// ```rust
/// use tinct::{Color, ColorOptions, Format};
/// let color = Color::new(
///     ColorOptions::default()
///         .with_alpha(true)
///         .with_format(Format::Rgb)
///         .with_value("#ff0000"),
/// );
/// assert_eq!(color.value(), "rgba(255, 0, 0, 1)");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct ColorOptions {
    /// Whether the serialized value carries the alpha channel.
    pub enable_alpha: bool,
    /// The notation of the serialized value.
    pub format: Format,
    /// An initial color string, parsed at construction.
    pub value: Option<String>,
}

impl ColorOptions {
    /// Set whether the serialized value carries the alpha channel.
    #[must_use]
    pub fn with_alpha(mut self, enable_alpha: bool) -> Self {
        self.enable_alpha = enable_alpha;
        self
    }

    /// Set the notation of the serialized value.
    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Set the initial color string.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}
