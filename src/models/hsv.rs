//! Model a color with the HSV notation.

use crate::components::Component;

tinct_macros::gen_model! {
    /// A color specified with the HSV (hue, saturation, value) notation.
    pub struct Hsv {
        /// The hue component of the color.
        pub hue: Component,
        /// The saturation component of the color.
        saturation: Component,
        /// The value (brightness) component of the color.
        value: Component,
    }
}
