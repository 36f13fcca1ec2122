//! The textual notations a [`Color`](crate::Color) serializes into.

use std::str::FromStr;

use crate::components::Component;
use crate::error::ColorFormatError;
use crate::math::clamp;
use crate::models::{Hsl, Hsv, Notation, Rgb};

/// The notation used for the serialized value of a [`Color`](crate::Color).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "&'static str")
)]
pub enum Format {
    /// `#RRGGBB`, or `#RRGGBBAA` with alpha.
    #[default]
    Hex,
    /// `rgb(R, G, B)`, or `rgba(R, G, B, A)` with alpha.
    Rgb,
    /// `hsl(H, S%, L%)`, or `hsla(H, S%, L%, A)` with alpha.
    Hsl,
    /// `hsv(H, S%, V%)`, or `hsva(H, S%, V%, A)` with alpha.
    Hsv,
}

impl Format {
    /// The lowercase name of the format.
    pub fn name(&self) -> &'static str {
        match self {
            Format::Hex => "hex",
            Format::Rgb => Rgb::KEYWORD,
            Format::Hsl => Hsl::KEYWORD,
            Format::Hsv => Hsv::KEYWORD,
        }
    }

    /// Look up a format by name, ignoring case. Any name that is not `rgb`,
    /// `hsl`, or `hsv` means hex.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl FromStr for Format {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Format::Hex, Format::Rgb, Format::Hsl, Format::Hsv]
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(ColorFormatError::UnknownFormat)
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for Format {
    fn from(value: String) -> Self {
        Format::from_name(&value)
    }
}

impl From<Format> for &'static str {
    fn from(value: Format) -> Self {
        value.name()
    }
}

/// Serialize a color. Saturation and value of `hsv` are fractions, `alpha` is
/// in percent.
pub(crate) fn serialize(hsv: &Hsv, alpha: Component, format: Format, enable_alpha: bool) -> String {
    // `+ 0.0` turns a rounded `-0` into `0`.
    let percent = |fraction: Component| (fraction * 100.0).round() + 0.0;
    let opacity = alpha / 100.0;

    match format {
        Format::Hsl => {
            let hsl = hsv.to_hsl();
            let (saturation, lightness) = (percent(hsl.saturation), percent(hsl.lightness));
            if enable_alpha {
                format!(
                    "{}({}, {saturation}%, {lightness}%, {opacity})",
                    Hsl::KEYWORD_ALPHA,
                    hsv.hue
                )
            } else {
                format!("{}({}, {saturation}%, {lightness}%)", Hsl::KEYWORD, hsv.hue)
            }
        }
        Format::Hsv => {
            let (saturation, value) = (percent(hsv.saturation), percent(hsv.value));
            if enable_alpha {
                format!(
                    "{}({}, {saturation}%, {value}%, {opacity})",
                    Hsv::KEYWORD_ALPHA,
                    hsv.hue
                )
            } else {
                format!("{}({}, {saturation}%, {value}%)", Hsv::KEYWORD, hsv.hue)
            }
        }
        Format::Rgb => {
            let rgb = hsv.to_rgb().to_rgb8();
            if enable_alpha {
                format!(
                    "{}({}, {}, {}, {opacity})",
                    Rgb::KEYWORD_ALPHA,
                    rgb.r,
                    rgb.g,
                    rgb.b
                )
            } else {
                format!("{}({}, {}, {})", Rgb::KEYWORD, rgb.r, rgb.g, rgb.b)
            }
        }
        Format::Hex => {
            let hex = hsv.to_rgb().to_rgb8().to_hex();
            if enable_alpha {
                let alpha = (clamp(alpha, 0.0, 100.0) / 100.0 * 255.0).round() as u8;
                format!("{hex}{alpha:02X}")
            } else {
                hex
            }
        }
    }
}
