//! A [`Color`] holds the state of a color picker: a hue, saturation, value,
//! and alpha, plus the serialized form of that color in the notation the
//! picker was configured with.

use std::str::FromStr;

use crate::components::{Changes, Channel, Component};
use crate::error::ColorFormatError;
use crate::format::{serialize, Format};
use crate::models::{Hsv, Rgb8};
use crate::options::ColorOptions;
use crate::parse::parse;

/// Two colors whose channels all differ by less than this compare equal.
pub const COMPARE_TOLERANCE: Component = 2.0;

/// A color stored as hue (degrees), saturation, value, and alpha (percent).
///
/// Every mutation regenerates the serialized [`value`](Color::value):
/// ```rust
/// use tinct::{Channel, Color};
/// let mut color = Color::default();
/// assert_eq!(color.value(), "#FF0000");
/// color.set(Channel::Hue, 120.0);
/// assert_eq!(color.value(), "#00FF00");
/// ```
///
/// Values passed to [`set`](Color::set) are stored as given. Values read by
/// [`from_string`](Color::from_string) have their hue wrapped into
/// `[0, 360)` and their saturation and value clamped into `[0, 100]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Color {
    hue: Component,
    saturation: Component,
    value: Component,
    alpha: Component,
    enable_alpha: bool,
    format: Format,
    serialized: String,
}

impl Color {
    /// Create a new color. It starts out as opaque red, or as the color in
    /// `options.value` if that parses.
    pub fn new(options: ColorOptions) -> Self {
        let mut color = Self {
            hue: 0.0,
            saturation: 100.0,
            value: 100.0,
            alpha: 100.0,
            enable_alpha: options.enable_alpha,
            format: options.format,
            serialized: String::new(),
        };

        color.from_string(options.value.as_deref());
        color.regenerate();
        color
    }

    /// Whether the serialized value carries the alpha channel.
    pub fn enable_alpha(&self) -> bool {
        self.enable_alpha
    }

    /// The notation of the serialized value.
    pub fn format(&self) -> Format {
        self.format
    }

    /// The serialized value, e.g. `#60BFBF` or `hsla(180, 43%, 56%, 0.8)`.
    pub fn value(&self) -> &str {
        &self.serialized
    }

    /// Return the stored value of `channel`. Alpha is truncated to an integer.
    pub fn get(&self, channel: Channel) -> Component {
        match channel {
            Channel::Hue => self.hue,
            Channel::Saturation => self.saturation,
            Channel::Value => self.value,
            Channel::Alpha => self.alpha.trunc(),
        }
    }

    /// Like [`get`](Color::get), with the channel given by name. Unknown
    /// names return `None`.
    pub fn get_named(&self, name: &str) -> Option<Component> {
        name.parse().ok().map(|channel| self.get(channel))
    }

    /// Store `value` in `channel`, as is.
    pub fn set(&mut self, channel: Channel, value: Component) {
        self.store(channel, value);
        self.regenerate();
    }

    /// Like [`set`](Color::set), with the channel given by name. Unknown names
    /// are ignored and return `false`.
    pub fn set_named(&mut self, name: &str, value: Component) -> bool {
        match name.parse::<Channel>() {
            Ok(channel) => {
                self.set(channel, value);
                true
            }
            Err(_) => false,
        }
    }

    /// Store all channels present in `changes`, then regenerate the
    /// serialized value once.
    pub fn set_many(&mut self, changes: Changes) {
        for (channel, value) in changes.iter() {
            self.store(channel, value);
        }
        self.regenerate();
    }

    /// Convert to 8-bit RGB.
    pub fn to_rgb(&self) -> Rgb8 {
        self.to_hsv().to_rgb().to_rgb8()
    }

    /// Update this color from a color string in one of the notations `#RGB`,
    /// `#RRGGBB`, `#RRGGBBAA`, `rgb[a](...)`, `hsl[a](...)`, or `hsv[a](...)`.
    ///
    /// Input that does not parse, including `None` and the empty string,
    /// leaves the color untouched. Returns whether the color was updated.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_string<'a>(&mut self, input: impl Into<Option<&'a str>>) -> bool {
        let Some(input) = input.into() else {
            return false;
        };

        match self.try_from_string(input) {
            Ok(()) => true,
            Err(ColorFormatError::Empty) => false,
            Err(err) => {
                log::debug!(target: "tinct::color", "ignoring color {input:?}: {err}");
                false
            }
        }
    }

    /// Like [`from_string`](Color::from_string), but report why the input was
    /// rejected. On error, the color is untouched.
    #[allow(clippy::wrong_self_convention)]
    pub fn try_from_string(&mut self, input: &str) -> Result<(), ColorFormatError> {
        let changes = parse(input)?;
        self.set_many(changes);
        Ok(())
    }

    /// Return `true` if every channel of `other` is within
    /// [`COMPARE_TOLERANCE`] of the same channel of this color.
    pub fn compare(&self, other: &Color) -> bool {
        [
            (self.hue, other.hue),
            (self.saturation, other.saturation),
            (self.value, other.value),
            (self.alpha, other.alpha),
        ]
        .into_iter()
        .all(|(a, b)| (a - b).abs() < COMPARE_TOLERANCE)
    }

    fn to_hsv(&self) -> Hsv {
        Hsv::new(self.hue, self.saturation / 100.0, self.value / 100.0)
    }

    fn store(&mut self, channel: Channel, value: Component) {
        match channel {
            Channel::Hue => self.hue = value,
            Channel::Saturation => self.saturation = value,
            Channel::Value => self.value = value,
            Channel::Alpha => self.alpha = value,
        }
    }

    fn regenerate(&mut self) {
        self.serialized = serialize(&self.to_hsv(), self.alpha, self.format, self.enable_alpha);
        log::trace!(target: "tinct::color", "color changed to {}", self.serialized);
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(ColorOptions::default())
    }
}

impl FromStr for Color {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut color = Color::default();
        color.try_from_string(s)?;
        Ok(color)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.serialized)
    }
}
