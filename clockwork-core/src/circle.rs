//! Modular arithmetic on a circle of arbitrary circumference.
//!
//! A [`Circle`] is described only by the length of its full arc: `360` for degrees, `τ` for radians, `24` for hours
//! of a day, `365.2422` for days of a year. Every operation takes and returns plain `f64` values expressed in that
//! same scale.
//!
//! # Wrapping
//!
//! Rust's `%` is a remainder whose sign follows the dividend, so `-10.0 % 360.0 == -10.0`. All wrapping here goes
//! through a Euclidean remainder instead, which always lands in `[0, full)`.
//!
//! | Method | Range |
//! |--------|-------|
//! | [`Circle::wrap_pos`] | `[0, full)` |
//! | [`Circle::principal`] | `(-full/2, full/2]` |
//! | [`Circle::principal_lo`] | `[-full/2, full/2)` |
//!
//! # Sectors
//!
//! [`Circle::contains`] walks counter-clockwise (increasing values) from the first bound to the second, so the
//! order of the bounds matters and sectors wider than a half turn are allowed. [`Circle::within_minor_arc`] ignores
//! order and always tests the shorter of the two arcs.
//!
//! ## Edge cases
//!
//! `NaN` and `±∞` inputs wrap to `NaN`, and every sector test involving them is `false`.
//! Statistics propagate them as `NaN`, or leave them out when
//! [`MeanOptions::skip_nan`](crate::MeanOptions::skip_nan) is set.
//!
//! ```rust
//! use clockwork_core::Circle;
//!
//! let day = Circle::new(24.0).unwrap();
//! assert_eq!(day.wrap_pos(-1.0), 23.0);
//! assert!(day.contains(22.0, 1.0, 6.0));
//! ```

use crate::angular::AngularUnit;
use crate::error::{CircularError, Result};
use crate::stats::{MeanOptions, Resultant, ZeroResultant};
use core::f64::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[inline]
fn rem_euclid(x: f64, modulus: f64) -> f64 {
    let r = x.rem_euclid(modulus);
    // tiny negative inputs round up to exactly `modulus`
    if r >= modulus {
        0.0
    } else {
        r
    }
}

/// A circle identified by the length of its full arc.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct Circle {
    full_arc: f64,
}

impl Circle {
    /// Angles in degrees.
    pub const DEGREES: Circle = Circle { full_arc: 360.0 };
    /// Angles in radians.
    pub const RADIANS: Circle = Circle { full_arc: TAU };

    /// Describes a circle by its full arc.
    ///
    /// Fails with [`CircularError::InvalidFullArc`] unless `full_arc` is finite and strictly positive.
    pub fn new(full_arc: f64) -> Result<Self> {
        if full_arc.is_finite() && full_arc > 0.0 {
            Ok(Self { full_arc })
        } else {
            Err(CircularError::InvalidFullArc(full_arc))
        }
    }

    /// The circle whose full arc is one full turn of `U`.
    #[inline]
    pub fn of<U: AngularUnit>() -> Self {
        Self {
            full_arc: U::FULL_TURN,
        }
    }

    /// Length of the full arc.
    #[inline]
    pub const fn full_arc(&self) -> f64 {
        self.full_arc
    }

    /// Length of half the arc.
    #[inline]
    pub fn half_arc(&self) -> f64 {
        0.5 * self.full_arc
    }

    /// Converts a value on this circle to radians.
    #[inline]
    pub fn to_radians(&self, x: f64) -> f64 {
        x * (TAU / self.full_arc)
    }

    /// Converts radians to a value on this circle.
    #[inline]
    pub fn from_radians(&self, radians: f64) -> f64 {
        radians * (self.full_arc / TAU)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Wrapping
    // ─────────────────────────────────────────────────────────────────────────

    /// Wrap into `[0, full)`.
    #[inline]
    pub fn wrap_pos(&self, x: f64) -> f64 {
        rem_euclid(x, self.full_arc)
    }

    /// Wrap into the principal range `(-half, half]`.
    ///
    /// The upper bound is inclusive: an input that reduces to exactly `-half` comes back as `+half`.
    /// `NaN` and `±∞` yield `NaN`.
    #[inline]
    pub fn principal(&self, x: f64) -> f64 {
        let half = self.half_arc();
        let y = rem_euclid(x + half, self.full_arc) - half;
        if y <= -half {
            y + self.full_arc
        } else {
            y
        }
    }

    /// Wrap into `[-half, half)`, the principal range with the boundary flipped.
    #[inline]
    pub fn principal_lo(&self, x: f64) -> f64 {
        let y = self.principal(x);
        if y >= self.half_arc() {
            y - self.full_arc
        } else {
            y
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Sectors
    // ─────────────────────────────────────────────────────────────────────────

    /// Whether `angle` lies on the arc walked counter-clockwise from `first` to `second`, both ends included.
    ///
    /// When `first` and `second` coincide the arc has zero length and only `angle == first` matches; it is never
    /// read as the whole circle.
    pub fn contains(&self, first: f64, angle: f64, second: f64) -> bool {
        let first = self.wrap_pos(first);
        let span = self.wrap_pos(self.wrap_pos(second) - first);
        let offset = self.wrap_pos(self.wrap_pos(angle) - first);
        offset <= span
    }

    /// Whether `angle` lies on the shorter arc joining `a` and `b`, both ends included.
    ///
    /// The bounds are interchangeable. When they sit exactly half a turn apart the arc walked counter-clockwise from
    /// `a` is used.
    pub fn within_minor_arc(&self, a: f64, angle: f64, b: f64) -> bool {
        if self.wrap_pos(b - a) <= self.half_arc() {
            self.contains(a, angle, b)
        } else {
            self.contains(b, angle, a)
        }
    }

    /// Tests every angle against a single sector `[start, end]`.
    pub fn sieve(&self, angles: &[f64], start: f64, end: f64) -> Vec<bool> {
        angles
            .iter()
            .map(|&angle| self.contains(start, angle, end))
            .collect()
    }

    /// Tests angles against per-element sectors.
    ///
    /// `starts` and `ends` must have the same length. `angles` must either match that length or hold a single angle,
    /// which is then tested against every sector.
    pub fn sieve_sectors(&self, angles: &[f64], starts: &[f64], ends: &[f64]) -> Result<Vec<bool>> {
        if starts.len() != ends.len() {
            return Err(CircularError::ShapeMismatch {
                starts: starts.len(),
                ends: ends.len(),
            });
        }

        let sectors = starts.iter().zip(ends);
        match angles {
            [angle] => Ok(sectors
                .map(|(&start, &end)| self.contains(start, *angle, end))
                .collect()),
            _ if angles.len() == starts.len() => Ok(angles
                .iter()
                .zip(sectors)
                .map(|(&angle, (&start, &end))| self.contains(start, angle, end))
                .collect()),
            _ => Err(CircularError::BroadcastMismatch {
                angles: angles.len(),
                sectors: starts.len(),
            }),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Differences
    // ─────────────────────────────────────────────────────────────────────────

    /// Unsigned distance between two angles along the circle.
    ///
    /// With `closer` the shorter distance is returned, in `[0, half]`; otherwise the reflex one, `full - closer`,
    /// in `[half, full]`. Argument order does not matter.
    pub fn sub(&self, minuend: f64, subtrahend: f64, closer: bool) -> f64 {
        let delta = self.principal(minuend - subtrahend).abs();
        if closer {
            delta
        } else {
            self.full_arc - delta
        }
    }

    /// Signed shortest rotation taking `subtrahend` to `minuend`, in `(-half, half]`.
    #[inline]
    pub fn signed_sub(&self, minuend: f64, subtrahend: f64) -> f64 {
        self.principal(minuend - subtrahend)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Statistics
    // ─────────────────────────────────────────────────────────────────────────

    /// Mean resultant vector of `angles`.
    pub fn resultant(&self, angles: &[f64], skip_nan: bool) -> Result<Resultant> {
        self.resultant_iter(angles.iter().copied(), skip_nan)
    }

    /// Mean resultant vector of any sequence of angles on this circle.
    pub fn resultant_iter<I>(&self, angles: I, skip_nan: bool) -> Result<Resultant>
    where
        I: IntoIterator<Item = f64>,
    {
        Resultant::from_radians(angles.into_iter().map(|a| self.to_radians(a)), skip_nan)
    }

    /// Circular mean of `angles`, in the principal range of this circle.
    ///
    /// Fails with [`CircularError::EmptyInput`] when there is nothing to average. When the resultant vector
    /// vanishes the outcome follows [`MeanOptions::zero_resultant`].
    pub fn mean(&self, angles: &[f64], options: &MeanOptions) -> Result<f64> {
        self.mean_iter(angles.iter().copied(), options)
    }

    /// Circular mean of any sequence of angles on this circle.
    pub fn mean_iter<I>(&self, angles: I, options: &MeanOptions) -> Result<f64>
    where
        I: IntoIterator<Item = f64>,
    {
        let resultant = self.resultant_iter(angles, options.skip_nan)?;
        match resultant.direction_radians() {
            Some(theta) => Ok(self.principal(self.from_radians(theta))),
            None => match options.zero_resultant {
                ZeroResultant::Error => Err(CircularError::UndefinedDirection {
                    length: resultant.length(),
                }),
                ZeroResultant::Zero => {
                    log::warn!(
                        "Circular mean of {} angles has no direction (resultant length {:e}); using 0",
                        resultant.count,
                        resultant.length()
                    );
                    Ok(0.0)
                }
            },
        }
    }

    /// Circular variance `1 - R` of `angles`, in `[0, 1]`.
    pub fn var(&self, angles: &[f64], skip_nan: bool) -> Result<f64> {
        Ok(self.resultant(angles, skip_nan)?.variance())
    }

    /// Circular standard deviation `sqrt(-2 ln R)` of `angles`, in radians.
    ///
    /// This is a spread, not an angle on this circle; it is `+∞` when the resultant vanishes.
    pub fn std(&self, angles: &[f64], skip_nan: bool) -> Result<f64> {
        Ok(self.resultant(angles, skip_nan)?.std_dev())
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::DEGREES
    }
}

impl TryFrom<f64> for Circle {
    type Error = CircularError;

    fn try_from(full_arc: f64) -> Result<Self> {
        Self::new(full_arc)
    }
}

impl From<Circle> for f64 {
    fn from(circle: Circle) -> f64 {
        circle.full_arc
    }
}
