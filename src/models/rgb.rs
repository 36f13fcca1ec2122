//! Model a color in RGB, both as fractions and as 8-bit channels.

use crate::components::Component;
use crate::math::clamp;

tinct_macros::gen_model! {
    /// A color specified with red, green, and blue fractions.
    pub struct Rgb {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

impl Rgb {
    /// Scale each channel to `0..=255` and round to the nearest integer.
    pub fn to_rgb8(&self) -> Rgb8 {
        let round = |value: Component| (clamp(value, 0.0, 1.0) * 255.0).round() as u8;
        Rgb8 {
            r: round(self.red),
            g: round(self.green),
            b: round(self.blue),
        }
    }
}

/// A color with 8-bit red, green, and blue channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// The red channel.
    pub r: u8,
    /// The green channel.
    pub g: u8,
    /// The blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Create a new 8-bit color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to RGB fractions.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::new(
            self.r as Component / 255.0,
            self.g as Component / 255.0,
            self.b as Component / 255.0,
        )
    }

    /// Format as `#RRGGBB` with uppercase digits.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}
