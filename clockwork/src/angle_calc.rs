//! Degree-based angle helpers.
//!
//! Every function here takes and returns **degrees**. For radians, hours or a custom circle use
//! [`Circle`](crate::Circle) or the typed [`Quantity`](crate::Quantity) API instead.

use clockwork_core::{Circle, MeanOptions, Result};

/// Wrap any angle in degrees to the principal range `(-180, 180]`.
///
/// Computed as `((angle + 180) mod 360) - 180` with a non-negative modulo; a value that lands on `-180` is
/// reported as `+180`.
///
/// `NaN`, `+∞` and `-∞` return `NaN`.
///
/// ```rust
/// use clockwork::bound_to_180;
///
/// assert_eq!(bound_to_180(270.0), -90.0);
/// assert_eq!(bound_to_180(-450.0), -90.0);
/// assert_eq!(bound_to_180(-180.0), 180.0);
/// ```
#[inline]
pub fn bound_to_180(angle: f64) -> f64 {
    Circle::DEGREES.principal(angle)
}

/// Whether `angle` lies on the arc swept counter-clockwise from `first` to `second`, endpoints included.
///
/// All three are in degrees and may be unwrapped. The order of `first` and `second` matters: swapping them selects
/// the complementary arc. When `first == second` (mod 360) the arc has zero length and only `angle == first`
/// (mod 360) is between them.
///
/// Returns `false` if any argument is `NaN` or infinite.
///
/// ```rust
/// use clockwork::is_angle_between;
///
/// assert!(is_angle_between(25.0, 60.0, 92.0));
/// assert!(!is_angle_between(25.0, 100.0, 92.0));
/// assert!(is_angle_between(350.0, 0.0, 10.0));
/// ```
#[inline]
pub fn is_angle_between(first: f64, angle: f64, second: f64) -> bool {
    Circle::DEGREES.contains(first, angle, second)
}

/// Circular mean of angles in degrees, in `(-180, 180]`.
///
/// # Errors
///
/// - [`CircularError::EmptyInput`](crate::CircularError::EmptyInput) when `angles` is empty.
/// - [`CircularError::UndefinedDirection`](crate::CircularError::UndefinedDirection) when the angles cancel out
///   (e.g. `[90, 270]`). Use [`circular_mean_with`] and
///   [`ZeroResultant::Zero`](crate::ZeroResultant::Zero) to get `0` instead.
///
/// A `NaN` angle makes the result `NaN`.
///
/// ```rust
/// use clockwork::circular_mean;
///
/// let mean = circular_mean(&[350.0, 355.0, 0.0, 5.0]).unwrap();
/// assert!((mean + 2.5).abs() < 1e-9);
/// ```
pub fn circular_mean(angles: &[f64]) -> Result<f64> {
    circular_mean_with(angles, &MeanOptions::default())
}

/// Circular mean of angles in degrees with explicit [`MeanOptions`].
pub fn circular_mean_with(angles: &[f64], options: &MeanOptions) -> Result<f64> {
    Circle::DEGREES.mean(angles, options)
}

/// Circular variance of angles in degrees, in `[0, 1]`.
pub fn circular_var(angles: &[f64]) -> Result<f64> {
    Circle::DEGREES.var(angles, false)
}

/// Circular standard deviation of angles in degrees. The result is a spread in radians.
pub fn circular_std(angles: &[f64]) -> Result<f64> {
    Circle::DEGREES.std(angles, false)
}

/// Unsigned distance in degrees between two angles, in `[0, 180]`.
#[inline]
pub fn angle_difference(minuend: f64, subtrahend: f64) -> f64 {
    Circle::DEGREES.sub(minuend, subtrahend, true)
}
