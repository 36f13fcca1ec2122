//! Parsing of the textual notations a [`Color`](crate::Color) accepts.
//!
//! Every grammar yields a complete [`Changes`] record: hue wrapped into
//! `[0, 360)`, saturation and value clamped into `[0, 100]`, and alpha in
//! percent. Alpha is not clamped, and defaults to 100 when the notation has
//! no alpha coordinate.

use crate::components::{Changes, Component, Components};
use crate::error::ColorFormatError;
use crate::math::{clamp, normalize_hue, snap};
use crate::models::{Hsl, Hsv, Notation, Rgb, Rgb8};

/// Parse the string into a record of channel values.
///
/// Leading and trailing white space is ignored, and so is the case of
/// keywords and hexadecimal digits. The functional notations are tried in
/// the order `hsl`, `hsv`, `rgb`, then the hashed hexadecimal notation.
pub(crate) fn parse(s: &str) -> Result<Changes, ColorFormatError> {
    let lowercase = s.trim().to_ascii_lowercase(); // Keep around for fn scope
    let s = lowercase.as_str();

    if s.is_empty() {
        Err(ColorFormatError::Empty)
    } else if let Some(rest) = strip_keyword::<Hsl>(s) {
        parse_hsl(rest)
    } else if let Some(rest) = strip_keyword::<Hsv>(s) {
        parse_hsv(rest)
    } else if let Some(rest) = strip_keyword::<Rgb>(s) {
        parse_rgb(rest)
    } else if s.starts_with('#') {
        parse_hashed(s)
    } else {
        Err(ColorFormatError::UnknownFormat)
    }
}

fn strip_keyword<N: Notation>(s: &str) -> Option<&str> {
    s.strip_prefix(N::KEYWORD_ALPHA)
        .or_else(|| s.strip_prefix(N::KEYWORD))
}

fn parse_hsl(rest: &str) -> Result<Changes, ColorFormatError> {
    let ([hue, saturation, lightness], alpha) = parse_coordinates(rest)?;
    let hsv = Hsl::new(hue, saturation / 100.0, lightness / 100.0).to_hsv();
    Ok(to_changes(&hsv, alpha))
}

fn parse_hsv(rest: &str) -> Result<Changes, ColorFormatError> {
    let ([hue, saturation, value], alpha) = parse_coordinates(rest)?;
    let hsv = Hsv::new(hue, saturation / 100.0, value / 100.0);
    Ok(to_changes(&hsv, alpha))
}

fn parse_rgb(rest: &str) -> Result<Changes, ColorFormatError> {
    let ([red, green, blue], alpha) = parse_coordinates(rest)?;
    // Channels are whole bytes; any fraction is dropped.
    let rgb = Rgb::from(Components(red, green, blue).map(|c| clamp(c.trunc(), 0.0, 255.0) / 255.0));
    let hsv = rgb.to_hsv();
    Ok(to_changes(&hsv, alpha))
}

/// Parse a color in hashed hexadecimal format with 3, 6, or 8 digits.
fn parse_hashed(s: &str) -> Result<Changes, ColorFormatError> {
    let digits = s
        .strip_prefix('#')
        .ok_or(ColorFormatError::UnknownFormat)?;
    let (rgb, alpha) = parse_hex_digits(digits)?;
    let alpha = alpha.map(|byte| snap(byte as Component / 255.0 * 100.0));

    Ok(to_changes(&rgb.to_rgb().to_hsv(), alpha))
}

/// Parse 3, 6, or 8 hexadecimal digits without the leading `#`. The last two
/// of 8 digits are the alpha byte.
pub(crate) fn parse_hex_digits(digits: &str) -> Result<(Rgb8, Option<u8>), ColorFormatError> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorFormatError::MalformedHex);
    } else if !matches!(digits.len(), 3 | 6 | 8) {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    let factor = if digits.len() == 3 { 1 } else { 2 };
    let parse_byte = |index: usize| -> Result<u8, ColorFormatError> {
        let t = digits
            .get(factor * index..factor * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;

        Ok(if factor == 1 { 16 * n + n } else { n })
    };

    let rgb = Rgb8::new(parse_byte(0)?, parse_byte(1)?, parse_byte(2)?);
    let alpha = if digits.len() == 8 {
        Some(parse_byte(3)?)
    } else {
        None
    };

    Ok((rgb, alpha))
}

/// Parse the parenthesized coordinates of a functional notation. Coordinates
/// are separated by commas, white space, or both. A fourth coordinate is the
/// alpha, returned in percent.
fn parse_coordinates(
    rest: &str,
) -> Result<([Component; 3], Option<Component>), ColorFormatError> {
    let body = rest
        .trim_start()
        .strip_prefix('(')
        .ok_or(ColorFormatError::NoOpeningParenthesis)?
        .trim_end()
        .strip_suffix(')')
        .ok_or(ColorFormatError::NoClosingParenthesis)?;

    let mut iter = body
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty());

    let c1 = parse_coordinate(iter.next())?;
    let c2 = parse_coordinate(iter.next())?;
    let c3 = parse_coordinate(iter.next())?;
    let alpha = iter.next().map(parse_alpha).transpose()?;
    if iter.next().is_some() {
        return Err(ColorFormatError::TooManyCoordinates);
    }

    Ok(([c1, c2, c3], alpha))
}

fn parse_number(t: &str) -> Result<Component, ColorFormatError> {
    t.parse::<Component>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or(ColorFormatError::MalformedFloat)
}

/// A trailing `%` is allowed, and ignored.
fn parse_coordinate(s: Option<&str>) -> Result<Component, ColorFormatError> {
    let t = s.ok_or(ColorFormatError::MissingCoordinate)?;
    parse_number(t.strip_suffix('%').unwrap_or(t))
}

/// Alpha is a fraction scaled to percent. A trailing `%` is ignored like on
/// the other coordinates, so `50%` reads as 50 and stores 5000.
fn parse_alpha(t: &str) -> Result<Component, ColorFormatError> {
    let alpha = parse_number(t.strip_suffix('%').unwrap_or(t))? * 100.0;
    if !alpha.is_finite() {
        return Err(ColorFormatError::MalformedFloat);
    }
    Ok(snap(alpha))
}

fn to_changes(hsv: &Hsv, alpha: Option<Component>) -> Changes {
    Changes::new(
        normalize_hue(hsv.hue),
        snap(clamp(hsv.saturation * 100.0, 0.0, 100.0)),
        snap(clamp(hsv.value * 100.0, 0.0, 100.0)),
        alpha.unwrap_or(100.0),
    )
}
