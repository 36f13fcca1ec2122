//! Models are structs that represent a color in one of the notations a
//! [`Color`](crate::Color) reads and writes. Hue is always in degrees, all
//! other channels are fractions in `[0, 1]`.

mod hsl;
mod hsv;
mod rgb;

pub use hsl::*;
pub use hsv::*;
pub use rgb::*;

/// A trait implemented by models that have a CSS-like functional notation.
pub trait Notation {
    /// The function name without alpha, e.g. `hsl`.
    const KEYWORD: &'static str;
    /// The function name with alpha, e.g. `hsla`.
    const KEYWORD_ALPHA: &'static str;
}
