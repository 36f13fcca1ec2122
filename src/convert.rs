//! Conversions between the notations. Each model only implements the
//! conversions a [`Color`](crate::Color) actually needs: HSV is the hub, RGB
//! and HSL are read into it and written out of it.
//!
//! ```rust
//! use tinct::models::{Hsl, Rgb};
//! let hsv = Rgb::new(1.0, 0.0, 0.0).to_hsv();
//! assert_eq!(hsv.hue, 0.0);
//! let hsl: Hsl = hsv.to_hsl();
//! assert_eq!(hsl.lightness, 0.5);
//! ```

use crate::models::{Hsl, Hsv, Rgb};

impl Hsv {
    /// Convert this color from the HSV notation to RGB. Saturation and value
    /// are clamped into `[0, 1]`, the hue may lie outside a full turn.
    pub fn to_rgb(&self) -> Rgb {
        util::hsv_to_rgb(&self.to_components()).into()
    }

    /// Convert this color from the HSV notation to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        util::hsv_to_hsl(&self.to_components()).into()
    }
}

impl Rgb {
    /// Convert this color from RGB to the HSV notation. The hue of a gray is
    /// 0.
    pub fn to_hsv(&self) -> Hsv {
        util::rgb_to_hsv(&self.to_components()).into()
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to the HSV notation. The
    /// result is not clamped: out of range lightness yields out of range
    /// saturation and value.
    pub fn to_hsv(&self) -> Hsv {
        util::hsl_to_hsv(&self.to_components()).into()
    }
}

mod util {
    use crate::{
        components::{Component, Components},
        math::{almost_zero, clamp, normalize_hue},
    };

    /// Convert from HSV notation to RGB notation.
    pub fn hsv_to_rgb(from: &Components) -> Components {
        let hue = from.0;
        let saturation = clamp(from.1, 0.0, 1.0);
        let value = clamp(from.2, 0.0, 1.0);

        let sector = hue / 60.0;
        let i = sector.floor();
        let f = sector - i;

        let p = value * (1.0 - saturation);
        let q = value * (1.0 - f * saturation);
        let t = value * (1.0 - (1.0 - f) * saturation);

        match (i as i64).rem_euclid(6) {
            0 => Components(value, t, p),
            1 => Components(q, value, p),
            2 => Components(p, value, t),
            3 => Components(p, q, value),
            4 => Components(t, p, value),
            _ => Components(value, p, q),
        }
    }

    /// Convert from RGB notation to HSV notation.
    pub fn rgb_to_hsv(from: &Components) -> Components {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let saturation = if max == 0.0 { 0.0 } else { delta / max };

        let hue = if almost_zero(delta) {
            0.0
        } else {
            60.0 * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            }
        };

        Components(normalize_hue(hue), saturation, max)
    }

    /// Convert from HSL notation to HSV notation.
    ///
    /// Black keeps the saturation it had at 1% lightness, so that dragging
    /// the lightness to 0 and back does not lose the saturation.
    pub fn hsl_to_hsv(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = *from;

        let lightness_min = lightness.max(0.01);
        let saturation_min =
            saturation * if lightness_min <= 1.0 { lightness_min } else { 2.0 - lightness_min };

        let lightness = lightness * 2.0;
        let saturation = saturation * if lightness <= 1.0 { lightness } else { 2.0 - lightness };

        let value = (lightness + saturation) / 2.0;
        let saturation = if lightness == 0.0 {
            (2.0 * saturation_min) / (lightness_min + saturation_min)
        } else {
            (2.0 * saturation) / (lightness + saturation)
        };

        Components(hue, finite_or_zero(saturation), finite_or_zero(value))
    }

    /// Convert from HSV notation to HSL notation.
    pub fn hsv_to_hsl(from: &Components) -> Components {
        let Components(hue, saturation, value) = *from;

        let double_lightness = (2.0 - saturation) * value;
        let divisor = if double_lightness < 1.0 {
            double_lightness
        } else {
            2.0 - double_lightness
        };

        Components(
            hue,
            finite_or_zero(saturation * value / divisor),
            double_lightness / 2.0,
        )
    }

    // White and black divide by zero.
    fn finite_or_zero(value: Component) -> Component {
        if value.is_finite() {
            value
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_component_eq;
    use crate::components::Component;
    use crate::models::{Hsl, Hsv, Rgb, Rgb8};

    #[test]
    fn primary_and_secondary_hues() {
        #[rustfmt::skip]
        const TESTS: &[(Component, Rgb8)] = &[
            (0.0,   Rgb8::new(255, 0,   0  )),
            (60.0,  Rgb8::new(255, 255, 0  )),
            (120.0, Rgb8::new(0,   255, 0  )),
            (180.0, Rgb8::new(0,   255, 255)),
            (240.0, Rgb8::new(0,   0,   255)),
            (300.0, Rgb8::new(255, 0,   255)),
            (360.0, Rgb8::new(255, 0,   0  )),
            (-60.0, Rgb8::new(255, 0,   255)),
        ];

        for &(hue, expected) in TESTS {
            let rgb = Hsv::new(hue, 1.0, 1.0).to_rgb().to_rgb8();
            assert_eq!(rgb, expected, "hue {hue}");
        }
    }

    #[test]
    fn no_saturation_is_gray() {
        for hue in [0.0, 45.0, 137.0, 200.0, 359.0] {
            assert_eq!(Hsv::new(hue, 0.0, 1.0).to_rgb().to_rgb8(), Rgb8::new(255, 255, 255));
            assert_eq!(Hsv::new(hue, 0.0, 0.0).to_rgb().to_rgb8(), Rgb8::new(0, 0, 0));
            assert_eq!(Hsv::new(hue, 0.0, 0.5).to_rgb().to_rgb8(), Rgb8::new(128, 128, 128));
        }
    }

    #[test]
    fn hsv_to_rgb_in_between() {
        // hsv(180, 50%, 75%)
        let rgb = Hsv::new(180.0, 0.5, 0.75).to_rgb();
        assert_component_eq!(rgb.red, 0.375);
        assert_component_eq!(rgb.green, 0.75);
        assert_component_eq!(rgb.blue, 0.75);
        assert_eq!(rgb.to_rgb8(), Rgb8::new(96, 191, 191));
    }

    #[test]
    fn rgb_to_hsv() {
        let hsv = Rgb::new(1.0, 0.0, 0.0).to_hsv();
        assert_eq!(hsv, Hsv::new(0.0, 1.0, 1.0));

        let hsv = Rgb::new(0.0, 0.0, 1.0).to_hsv();
        assert_eq!(hsv, Hsv::new(240.0, 1.0, 1.0));

        let hsv = Rgb::new(1.0, 0.0, 0.5).to_hsv();
        assert_component_eq!(hsv.hue, 330.0);

        let hsv = Rgb::new(0.375, 0.75, 0.75).to_hsv();
        assert_component_eq!(hsv.hue, 180.0);
        assert_component_eq!(hsv.saturation, 0.5);
        assert_component_eq!(hsv.value, 0.75);
    }

    #[test]
    fn hue_of_gray_is_zero() {
        assert_eq!(Rgb::new(1.0, 1.0, 1.0).to_hsv(), Hsv::new(0.0, 0.0, 1.0));
        assert_eq!(Rgb::new(0.0, 0.0, 0.0).to_hsv(), Hsv::new(0.0, 0.0, 0.0));
        assert_eq!(Rgb::new(0.5, 0.5, 0.5).to_hsv(), Hsv::new(0.0, 0.0, 0.5));
    }

    #[test]
    fn hsl_to_hsv() {
        let hsv = Hsl::new(0.0, 1.0, 0.5).to_hsv();
        assert_component_eq!(hsv.saturation, 1.0);
        assert_component_eq!(hsv.value, 1.0);

        // hsl(180, 50%, 75%)
        let hsv = Hsl::new(180.0, 0.5, 0.75).to_hsv();
        assert_eq!(hsv.hue, 180.0);
        assert_component_eq!(hsv.saturation, 2.0 / 7.0);
        assert_component_eq!(hsv.value, 0.875);

        let hsv = Hsl::new(90.0, 0.3, 0.0).to_hsv();
        assert_component_eq!(hsv.value, 0.0);
        assert!(hsv.saturation > 0.0);
    }

    #[test]
    fn hsv_to_hsl() {
        let hsl = Hsv::new(180.0, 0.5, 0.75).to_hsl();
        assert_component_eq!(hsl.saturation, 0.375 / 0.875);
        assert_component_eq!(hsl.lightness, 0.5625);

        // White and black have no saturation.
        assert_eq!(Hsv::new(0.0, 0.0, 1.0).to_hsl(), Hsl::new(0.0, 0.0, 1.0));
        assert_eq!(Hsv::new(0.0, 1.0, 0.0).to_hsl(), Hsl::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn hsl_round_trip() {
        let hsl = Hsl::new(180.0, 0.5, 0.75);
        let back = hsl.to_hsv().to_hsl();
        assert_component_eq!(back.saturation, hsl.saturation);
        assert_component_eq!(back.lightness, hsl.lightness);
    }
}
