//! Circular (directional) statistics.
//!
//! Every statistic here is derived from the **mean resultant vector**: the average of the unit vectors pointing at
//! each angle,
//!
//! ```text
//! C = (1/N) Σ cos θₙ      S = (1/N) Σ sin θₙ      R = √(C² + S²)
//! ```
//!
//! - the circular mean is the direction `atan2(S, C)`;
//! - the circular variance is `1 - R`, in `[0, 1]`;
//! - the circular standard deviation is `√(-2 ln R)`, in `[0, ∞]`.
//!
//! `R` close to 1 means tightly clustered angles. `R` close to 0 means the angles cancel out and the mean has no
//! meaningful direction; see [`ZeroResultant`] for how that case is reported.

use crate::angular::AngularUnit;
use crate::circle::Circle;
use crate::error::{CircularError, Result};
use crate::quantity::Quantity;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Resultant lengths at or below this value are treated as zero.
///
/// Perfectly opposed angles rarely cancel to an exact `0.0` once they go through `sin`/`cos` (`[90°, 270°]` leaves
/// about `6e-17`), so the check needs some slack.
pub const RESULTANT_EPSILON: f64 = 1e-12;

/// What a circular mean reports when the resultant vector vanishes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ZeroResultant {
    /// Fail with [`CircularError::UndefinedDirection`].
    #[default]
    Error,
    /// Return `0` and log a warning.
    Zero,
}

/// Options for computing a circular mean.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MeanOptions {
    /// Drop angles without a direction (`NaN`, `±∞`) before averaging instead of propagating them.
    pub skip_nan: bool,
    /// Policy for a vanishing resultant vector.
    pub zero_resultant: ZeroResultant,
}

/// Mean resultant vector of a sequence of angles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resultant {
    /// Mean of the cosines.
    pub mean_cos: f64,
    /// Mean of the sines.
    pub mean_sin: f64,
    /// Number of angles averaged (after skipping).
    pub count: usize,
}

impl Resultant {
    /// Averages the unit vectors of `angles`, given in radians.
    ///
    /// An angle whose unit vector is undefined (`NaN` or `±∞`) makes every component `NaN`, unless `skip_nan` is set,
    /// in which case such angles are left out. Fails with [`CircularError::EmptyInput`] when nothing is left to
    /// average.
    pub fn from_radians<I>(angles: I, skip_nan: bool) -> Result<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sum_cos = 0.0;
        let mut sum_sin = 0.0;
        let mut count = 0usize;
        let mut skipped = 0usize;

        for theta in angles {
            if skip_nan && !theta.is_finite() {
                skipped += 1;
                continue;
            }
            let (sin, cos) = theta.sin_cos();
            sum_cos += cos;
            sum_sin += sin;
            count += 1;
        }

        if skipped > 0 {
            log::debug!("Skipped {} non-finite angle(s), averaging {}", skipped, count);
        }
        if count == 0 {
            return Err(CircularError::EmptyInput);
        }

        let n = count as f64;
        Ok(Self {
            mean_cos: sum_cos / n,
            mean_sin: sum_sin / n,
            count,
        })
    }

    /// Length `R` of the mean resultant vector, in `[0, 1]`.
    #[inline]
    pub fn length(&self) -> f64 {
        self.mean_cos.hypot(self.mean_sin)
    }

    /// Direction of the resultant vector in `(-π, π]`.
    ///
    /// `None` when the length is at or below [`RESULTANT_EPSILON`]. A `NaN` resultant yields `Some(NaN)`.
    pub fn direction_radians(&self) -> Option<f64> {
        if self.length() <= RESULTANT_EPSILON {
            None
        } else {
            Some(self.mean_sin.atan2(self.mean_cos))
        }
    }

    /// `R` clamped to `[0, 1]`; rounding can push it a hair above 1. `NaN` stays `NaN`.
    #[inline]
    fn clamped_length(&self) -> f64 {
        self.length().clamp(0.0, 1.0)
    }

    /// Circular variance `1 - R`, or `NaN` when the resultant is `NaN`.
    #[inline]
    pub fn variance(&self) -> f64 {
        1.0 - self.clamped_length()
    }

    /// Circular standard deviation `√(-2 ln R)`, in radians.
    ///
    /// Not a circular quantity: it ranges over `[0, ∞]`, is `+0` when `R == 1` and `+∞` when `R == 0`. For small
    /// spreads `std² ≈ 2 · variance`. `NaN` when the resultant is `NaN`.
    #[inline]
    pub fn std_dev(&self) -> f64 {
        let r = self.clamped_length();
        if r.is_nan() {
            return f64::NAN;
        }
        // `0.0 - x` keeps `R == 1` at +0 rather than -0
        (0.0 - 2.0 * r.ln()).sqrt()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Typed helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Mean resultant vector of typed angles.
pub fn resultant<U: AngularUnit>(angles: &[Quantity<U>], skip_nan: bool) -> Result<Resultant> {
    Circle::of::<U>().resultant_iter(angles.iter().map(|a| a.value()), skip_nan)
}

/// Circular mean of typed angles, wrapped into `(-HALF_TURN, HALF_TURN]`.
///
/// ```rust
/// use clockwork_core::angular::Degrees;
/// use clockwork_core::stats::{circular_mean, MeanOptions};
///
/// let angles = [Degrees::new(350.0), Degrees::new(10.0)];
/// let mean = circular_mean(&angles, &MeanOptions::default()).unwrap();
/// assert!(mean.value().abs() < 1e-9);
/// ```
pub fn circular_mean<U: AngularUnit>(
    angles: &[Quantity<U>],
    options: &MeanOptions,
) -> Result<Quantity<U>> {
    Circle::of::<U>()
        .mean_iter(angles.iter().map(|a| a.value()), options)
        .map(Quantity::new)
}

/// Circular variance of typed angles.
pub fn circular_var<U: AngularUnit>(angles: &[Quantity<U>], skip_nan: bool) -> Result<f64> {
    Ok(resultant(angles, skip_nan)?.variance())
}

/// Circular standard deviation of typed angles, in radians.
pub fn circular_std<U: AngularUnit>(angles: &[Quantity<U>], skip_nan: bool) -> Result<f64> {
    Ok(resultant(angles, skip_nan)?.std_dev())
}
