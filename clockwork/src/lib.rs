//! Angle wrapping, angle-between tests and circular statistics.
//!
//! `clockwork` is the user-facing crate in this workspace. It re-exports the full API from `clockwork-core` and adds
//! a degree-based helper surface plus TOML configuration loading.
//!
//! Angles are modular: 370° and 10° point the same way, and the average of 350° and 10° is 0°, not 180°. Everything
//! here respects that.
//!
//! # What this crate solves
//!
//! - Wrapping any angle into a principal range (`(-180, 180]` for degrees) without branching on sign.
//! - Deciding whether an angle lies on an arc, even when the arc crosses the wrap point.
//! - Averaging and measuring the spread of angles with the mean resultant vector.
//!
//! # What this crate does not try to solve
//!
//! - Spherical geometry: everything lives on a single circle.
//! - Reductions over n-dimensional arrays; inputs are slices.
//!
//! # Quick start
//!
//! ```rust
//! use clockwork::{bound_to_180, circular_mean, is_angle_between};
//!
//! assert_eq!(bound_to_180(270.0), -90.0);
//! assert!(is_angle_between(350.0, 5.0, 20.0));
//!
//! let mean = circular_mean(&[350.0, 10.0]).unwrap();
//! assert!(mean.abs() < 1e-9);
//! ```
//!
//! Other circles and typed angles:
//!
//! ```rust
//! use clockwork::{Circle, HourAngles};
//!
//! let hours = Circle::new(24.0).unwrap();
//! assert_eq!(hours.principal(25.0), 1.0);
//! assert!(hours.contains(22.0, 1.0, 2.0));
//!
//! let evening = HourAngles::new(23.0).wrap_signed();
//! assert_eq!(evening.value(), -1.0);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use clockwork::{Degrees, Radians};
//!
//! let a = Degrees::new(1.0);
//! let b = Radians::new(1.0);
//! let _ = a + b; // cannot add different unit types
//! ```
//!
//! # Modules
//!
//! - [`angle_calc`]: degree-based free functions (`bound_to_180`, `is_angle_between`, `circular_mean`, …).
//! - [`angular`]: unit markers (degrees, radians, gradians, turns, hour angle, day of year) and typed helpers.
//! - [`circle`]: [`Circle`], the same operations on a circle of any circumference.
//! - [`stats`]: the mean resultant vector and typed statistics.
//! - [`config`]: `clockwork.toml` loading.
//!
//! # Panics and errors
//!
//! Nothing here panics. Statistics return [`Result`] with a [`CircularError`]; configuration loading returns
//! [`ConfigError`].

#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub use clockwork_core::*;

pub mod angle_calc;
pub mod config;

pub use angle_calc::{
    angle_difference, bound_to_180, circular_mean, circular_mean_with, circular_std, circular_var,
    is_angle_between,
};
pub use config::{ClockworkConfig, ConfigError};

pub use clockwork_core::angular::{
    AngularUnit, DayOfYear, DaysOfYear, Degree, Degrees, Gradian, Gradians, HourAngle, HourAngles,
    Radian, Radians, Turn, Turns, TROPICAL_YEAR_DAYS,
};
