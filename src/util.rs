//! Helpers on hexadecimal color strings, used by themes around the picker:
//! validation, conversion between hex and `RGB(r,g,b)`, lightness steps, and
//! text color selection by contrast.
//!
//! ```rust
//! use tinct::util::{calculate_best_text_color, darken, hex_to_rgb};
//! assert_eq!(hex_to_rgb("#fff"), "RGB(255,255,255)");
//! assert_eq!(darken("#ffffff", 10.0).unwrap(), "#e6e6e6");
//! assert_eq!(calculate_best_text_color("#ffffff").unwrap(), "#000000");
//! ```

use crate::components::Component;
use crate::error::ColorFormatError;
use crate::math::clamp;
use crate::models::Rgb8;
use crate::parse::parse_hex_digits;

/// Brightness below which a color counts as dark, on the `0..=255` scale.
const DARK_BRIGHTNESS: Component = 128.0;

/// Minimum contrast against black for black text to be preferred.
const BLACK_TEXT_CONTRAST: Component = 12.0;

/// Return `true` if `color` is a `#` followed by 3 or 6 hexadecimal digits.
pub fn is_hex_color(color: &str) -> bool {
    parse_hex(color).is_ok()
}

/// Format the channels as `#rrggbb` with lowercase digits.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Format a hex color as `RGB(r,g,b)`. Anything that is not a hex color is
/// returned unchanged.
pub fn hex_to_rgb(color: &str) -> String {
    match parse_hex(color) {
        Ok(Rgb8 { r, g, b }) => format!("RGB({r},{g},{b})"),
        Err(_) => color.to_string(),
    }
}

/// Whether the hex color is dark, judged by its perceived brightness.
/// Returns `None` if `color` is not a hex color.
pub fn color_is_dark(color: &str) -> Option<bool> {
    parse_hex(color).ok().map(|rgb| brightness(rgb) < DARK_BRIGHTNESS)
}

/// Darken the color by `percent` of the full channel range. The `#` is
/// optional, and channels stop at 0.
pub fn darken(color: &str, percent: Component) -> Result<String, ColorFormatError> {
    shift(color, -step(percent))
}

/// Lighten the color by `percent` of the full channel range. The `#` is
/// optional, and channels stop at 255.
pub fn lighten(color: &str, percent: Component) -> Result<String, ColorFormatError> {
    shift(color, step(percent))
}

/// Pick black or white text for the given background color: black when the
/// background contrasts with black by at least 12:1, white otherwise.
pub fn calculate_best_text_color(background: &str) -> Result<&'static str, ColorFormatError> {
    let background = parse_hex(background)?;
    if contrast(background, Rgb8::new(0, 0, 0)) >= BLACK_TEXT_CONTRAST {
        Ok("#000000")
    } else {
        Ok("#FFFFFF")
    }
}

/// The relative luminance of an sRGB color, from 0 for black to 1 for white.
pub fn luminance(rgb: Rgb8) -> Component {
    let linear = |c: u8| {
        let c = c as Component / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * linear(rgb.r) + 0.7152 * linear(rgb.g) + 0.0722 * linear(rgb.b)
}

/// The contrast ratio of `a` over `b`, from 1 to 21 when `a` is the lighter.
pub fn contrast(a: Rgb8, b: Rgb8) -> Component {
    (luminance(a) + 0.05) / (luminance(b) + 0.05)
}

fn brightness(rgb: Rgb8) -> Component {
    rgb.r as Component * 0.299 + rgb.g as Component * 0.587 + rgb.b as Component * 0.114
}

fn step(percent: Component) -> Component {
    (255.0 * percent / 100.0).trunc()
}

fn shift(color: &str, amount: Component) -> Result<String, ColorFormatError> {
    let digits = color.strip_prefix('#').unwrap_or(color);
    let rgb = match parse_hex_digits(digits)? {
        (rgb, None) => rgb,
        (_, Some(_)) => return Err(ColorFormatError::UnexpectedCharacters),
    };

    let channel = |c: u8| clamp(c as Component + amount, 0.0, 255.0) as u8;
    Ok(rgb_to_hex(channel(rgb.r), channel(rgb.g), channel(rgb.b)))
}

fn parse_hex(color: &str) -> Result<Rgb8, ColorFormatError> {
    let digits = color
        .strip_prefix('#')
        .ok_or(ColorFormatError::UnknownFormat)?;
    match parse_hex_digits(digits)? {
        (rgb, None) => Ok(rgb),
        (_, Some(_)) => Err(ColorFormatError::UnexpectedCharacters),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn hex_colors() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#ffffff"));
        assert!(is_hex_color("#000000"));
        assert!(is_hex_color("#123abc"));
        assert!(is_hex_color("#123ABC"));
        assert!(!is_hex_color("#xyz"));
        assert!(!is_hex_color("ffffff"));
        assert!(!is_hex_color("#"));
        assert!(!is_hex_color("#ffffff80"));
        assert!(!is_hex_color("# fff"));
    }

    #[test]
    fn rgb_to_lowercase_hex() {
        assert_eq!(rgb_to_hex(255, 255, 255), "#ffffff");
        assert_eq!(rgb_to_hex(0, 0, 0), "#000000");
        assert_eq!(rgb_to_hex(255, 0, 0), "#ff0000");
        assert_eq!(rgb_to_hex(0, 255, 0), "#00ff00");
        assert_eq!(rgb_to_hex(0, 0, 255), "#0000ff");
    }

    #[test]
    fn hex_to_rgb_notation() {
        assert_eq!(hex_to_rgb("#ffffff"), "RGB(255,255,255)");
        assert_eq!(hex_to_rgb("#000000"), "RGB(0,0,0)");
        assert_eq!(hex_to_rgb("#ff0000"), "RGB(255,0,0)");
        assert_eq!(hex_to_rgb("#00ff00"), "RGB(0,255,0)");
        assert_eq!(hex_to_rgb("#0000ff"), "RGB(0,0,255)");
        assert_eq!(hex_to_rgb("#fff"), "RGB(255,255,255)");
        assert_eq!(hex_to_rgb("#000"), "RGB(0,0,0)");

        assert_eq!(hex_to_rgb("invalid"), "invalid");
        assert_eq!(hex_to_rgb("#GGG"), "#GGG");
    }

    #[test]
    fn dark_colors() {
        assert_eq!(color_is_dark("#000000"), Some(true));
        assert_eq!(color_is_dark("#ffffff"), Some(false));
        assert_eq!(color_is_dark("#ff0000"), Some(true));
        assert_eq!(color_is_dark("#00ff00"), Some(false));
        assert_eq!(color_is_dark("invalid"), None);
    }

    #[test]
    fn darken_and_lighten_by_percent() {
        assert_eq!(darken("#ffffff", 10.0), Ok("#e6e6e6".to_string()));
        assert_eq!(darken("#000000", 10.0), Ok("#000000".to_string()));
        assert_eq!(lighten("#000000", 10.0), Ok("#191919".to_string()));
        assert_eq!(lighten("#ffffff", 10.0), Ok("#ffffff".to_string()));

        // The `#` is optional and short forms are expanded.
        assert_eq!(lighten("000", 10.0), Ok("#191919".to_string()));
        assert_eq!(darken("#FF8000", 50.0), Ok("#800100".to_string()));

        assert_eq!(darken("#12345", 10.0), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(lighten("#zzzzzz", 10.0), Err(ColorFormatError::MalformedHex));
    }

    #[test]
    fn best_text_color() {
        assert_eq!(calculate_best_text_color("#000000"), Ok("#FFFFFF"));
        assert_eq!(calculate_best_text_color("#ffffff"), Ok("#000000"));
        assert_eq!(calculate_best_text_color("#ffff00"), Ok("#000000"));
        assert_eq!(calculate_best_text_color("#0000ff"), Ok("#FFFFFF"));
        assert_eq!(
            calculate_best_text_color("white"),
            Err(ColorFormatError::UnknownFormat)
        );
    }

    #[test]
    fn luminance_and_contrast() {
        let black = Rgb8::new(0, 0, 0);
        let white = Rgb8::new(255, 255, 255);
        assert_component_eq!(luminance(black), 0.0);
        assert_component_eq!(luminance(white), 1.0);
        assert_component_eq!(contrast(white, black), 21.0);
        assert_component_eq!(contrast(black, black), 1.0);
    }
}
