//! Core modular arithmetic for angles and other circular quantities.
//!
//! `clockwork-core` provides three layers:
//!
//! - [`Circle`]: plain-`f64` helpers on a circle of any circumference (wrapping, sector tests, circular
//!   differences and statistics).
//! - [`Quantity<U>`]: an `f64` angle tagged with a zero-sized unit marker ([`angular::Degree`],
//!   [`angular::Radian`], …) so units cannot be mixed by accident.
//! - [`stats`]: the mean resultant vector and the circular mean, variance and standard deviation built on it.
//!
//! Most users should depend on `clockwork` (the facade crate), which adds the degree-based `angle_calc` functions
//! (`bound_to_180`, `is_angle_between`, `circular_mean`, …) and configuration loading.
//!
//! # Quick start
//!
//! ```rust
//! use clockwork_core::{Circle, MeanOptions};
//!
//! let deg = Circle::DEGREES;
//! assert_eq!(deg.principal(270.0), -90.0);
//! assert!(deg.contains(350.0, 5.0, 20.0));
//!
//! let mean = deg.mean(&[350.0, 10.0], &MeanOptions::default()).unwrap();
//! assert!(mean.abs() < 1e-9);
//! ```
//!
//! # Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Quantity<U>`] (raw `f64`), [`Circle`] (its full arc) and the
//!   statistics options.
//!
//! # Panics and errors
//!
//! Nothing here panics. Wrapping and sector tests are total; statistics return [`Result`] with a
//! [`CircularError`] for empty input or an undefined mean direction. `NaN` and `±∞` propagate as `NaN` rather than
//! being rejected.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod error;
mod quantity;
mod unit;

pub mod angular;
pub mod circle;
pub mod stats;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use circle::Circle;
pub use error::{CircularError, Result};
pub use quantity::Quantity;
pub use stats::{MeanOptions, Resultant, ZeroResultant, RESULTANT_EPSILON};
pub use unit::Unit;

#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;
