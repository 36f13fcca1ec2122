//! Math utility functions.

use num_traits::Float;

/// Wrap a hue in degrees into `[0, 360)`.
pub fn normalize_hue<T: Float>(hue: T) -> T {
    let full = T::from(360.0).unwrap_or_else(T::zero);
    let hue = hue % full;
    let hue = if hue < T::zero() { hue + full } else { hue };
    // -1e-20 % 360 + 360 rounds up to 360.
    if hue >= full {
        T::zero()
    } else {
        hue
    }
}

/// Clamp `value` into `[min, max]`. NaN clamps to `min`.
pub fn clamp<T: Float>(value: T, min: T, max: T) -> T {
    if value.is_nan() {
        min
    } else {
        value.max(min).min(max)
    }
}

/// Return `true` if `value` is within a rounding error of zero.
pub fn almost_zero<T: Float>(value: T) -> bool {
    value.abs() < T::epsilon() * T::from(16.0).unwrap_or_else(T::one)
}

/// Round `value` to a multiple of 1e-9. Used on parsed percentages so that
/// `0.8 * 100` is stored as `80`.
pub fn snap<T: Float>(value: T) -> T {
    let scale = T::from(1.0e9).unwrap_or_else(T::one);
    let snapped = (value * scale).round() / scale;
    if snapped.is_finite() {
        snapped
    } else {
        value
    }
}
