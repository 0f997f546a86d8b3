//! Angular units and typed angle helpers.
//!
//! Every unit declares how large one revolution is when counted in it (`FULL_TURN`), and conversions pass through
//! the fraction of a turn. The [`AngularUnit`] blanket trait adds half and quarter turns, and [`Quantity<U>`] gains
//! trigonometry, wrapping and sector helpers that delegate to the matching [`Circle`].
//!
//! | Unit | Symbol | Full turn |
//! |------|--------|-----------|
//! | [`Degree`] | `Deg` | 360 |
//! | [`Radian`] | `Rad` | τ |
//! | [`Gradian`] | `Gon` | 400 |
//! | [`Turn`] | `Turn` | 1 |
//! | [`HourAngle`] | `Hms` | 24 |
//! | [`DayOfYear`] | `Doy` | 365.2422 |
//!
//! ## Edge cases
//!
//! Wrapping and trig follow IEEE‑754: `NaN` or `±∞` values come back as `NaN`.
//!
//! ```rust
//! use clockwork_core::angular::{Degrees, HourAngles};
//!
//! assert_eq!(Degrees::new(-180.0).wrap_signed().value(), 180.0);
//! assert_eq!(HourAngles::new(-3.0).wrap_pos().value(), 21.0);
//! ```

use crate::circle::Circle;
use crate::{Quantity, Unit};
use clockwork_derive::Unit;

/// Extension of [`Unit`] with turn fractions expressed in that unit.
pub trait AngularUnit: Unit {
    /// Half a revolution (180°) expressed in this unit.
    const HALF_TURN: f64;
    /// A quarter revolution (90°) expressed in this unit.
    const QUARTER_TURN: f64;
}
impl<T: Unit> AngularUnit for T {
    const HALF_TURN: f64 = T::FULL_TURN / 2.0;
    const QUARTER_TURN: f64 = T::FULL_TURN / 4.0;
}

impl<U: AngularUnit> Quantity<U> {
    /// One full revolution expressed as `Quantity<U>`.
    pub const FULL_TURN: Quantity<U> = Quantity::<U>::new(U::FULL_TURN);
    /// Half a revolution expressed as `Quantity<U>`.
    pub const HALF_TURN: Quantity<U> = Quantity::<U>::new(U::HALF_TURN);
    /// Quarter revolution expressed as `Quantity<U>`.
    pub const QUARTER_TURN: Quantity<U> = Quantity::<U>::new(U::QUARTER_TURN);

    /// Sine of the angle.
    #[inline]
    pub fn sin(&self) -> f64 {
        self.to::<Radian>().value().sin()
    }

    /// Cosine of the angle.
    #[inline]
    pub fn cos(&self) -> f64 {
        self.to::<Radian>().value().cos()
    }

    /// Tangent of the angle.
    #[inline]
    pub fn tan(&self) -> f64 {
        self.to::<Radian>().value().tan()
    }

    /// Sine and cosine in one call.
    #[inline]
    pub fn sin_cos(&self) -> (f64, f64) {
        self.to::<Radian>().value().sin_cos()
    }

    /// Wrap into `[0, FULL_TURN)`.
    #[inline]
    pub fn wrap_pos(self) -> Self {
        Self::new(Circle::of::<U>().wrap_pos(self.value()))
    }

    /// Wrap into the principal range `(-HALF_TURN, HALF_TURN]`.
    ///
    /// *Upper bound is inclusive*; lower bound is exclusive.
    #[inline]
    pub fn wrap_signed(self) -> Self {
        Self::new(Circle::of::<U>().principal(self.value()))
    }

    /// Wrap into `[-HALF_TURN, HALF_TURN)`.
    #[inline]
    pub fn wrap_signed_lo(self) -> Self {
        Self::new(Circle::of::<U>().principal_lo(self.value()))
    }

    /// Signed smallest rotation from `other` to `self`, in `(-HALF_TURN, HALF_TURN]`.
    #[inline]
    pub fn signed_separation(self, other: Self) -> Self {
        Self::new(Circle::of::<U>().signed_sub(self.value(), other.value()))
    }

    /// Absolute smallest angular separation, in `[0, HALF_TURN]`.
    #[inline]
    pub fn abs_separation(self, other: Self) -> Self {
        Self::new(Circle::of::<U>().sub(self.value(), other.value(), true))
    }

    /// Whether `self` lies on the arc walked counter-clockwise from `first` to `second`, ends included.
    ///
    /// ```rust
    /// use clockwork_core::angular::Degrees;
    ///
    /// let heading = Degrees::new(5.0);
    /// assert!(heading.is_between(Degrees::new(350.0), Degrees::new(20.0)));
    /// assert!(!heading.is_between(Degrees::new(20.0), Degrees::new(350.0)));
    /// ```
    #[inline]
    pub fn is_between(self, first: Self, second: Self) -> bool {
        Circle::of::<U>().contains(first.value(), self.value(), second.value())
    }

    /// Whether `self` lies on the shorter arc joining `a` and `b`, ends included.
    #[inline]
    pub fn is_within_minor_arc(self, a: Self, b: Self) -> bool {
        Circle::of::<U>().within_minor_arc(a.value(), self.value(), b.value())
    }
}

/// Degree.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Deg", full_turn = 360.0)]
pub struct Degree;
/// Convenience alias for a degree quantity.
pub type Degrees = Quantity<Degree>;

/// Radian.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Rad", full_turn = core::f64::consts::TAU)]
pub struct Radian;
/// Convenience alias for a radian quantity.
pub type Radians = Quantity<Radian>;

/// Gradian (gon; `1/400` of a turn).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Gon", full_turn = 400.0)]
pub struct Gradian;
/// Convenience alias for a gradian quantity.
pub type Gradians = Quantity<Gradian>;

/// Turn (full revolution).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Turn", full_turn = 1.0)]
pub struct Turn;
/// Convenience alias for a turn quantity.
pub type Turns = Quantity<Turn>;

/// Hour angle (`15` degrees), also a clock hour on a 24-hour dial.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Hms", full_turn = 24.0)]
pub struct HourAngle;
/// Convenience alias for an hour-angle quantity.
pub type HourAngles = Quantity<HourAngle>;

/// Day of a tropical year, for seasonal angles.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Doy", full_turn = TROPICAL_YEAR_DAYS)]
pub struct DayOfYear;
/// Convenience alias for a day-of-year quantity.
pub type DaysOfYear = Quantity<DayOfYear>;

/// Mean length of the tropical year, in days.
pub const TROPICAL_YEAR_DAYS: f64 = 365.2422;

const KNOWN_UNITS: [(&str, f64); 6] = [
    (Degree::SYMBOL, Degree::FULL_TURN),
    (Radian::SYMBOL, Radian::FULL_TURN),
    (Gradian::SYMBOL, Gradian::FULL_TURN),
    (Turn::SYMBOL, Turn::FULL_TURN),
    (HourAngle::SYMBOL, HourAngle::FULL_TURN),
    (DayOfYear::SYMBOL, DayOfYear::FULL_TURN),
];

/// Full turn of the unit printed as `symbol`, among the units defined in this module.
///
/// ```rust
/// use clockwork_core::angular::full_turn_for_symbol;
///
/// assert_eq!(full_turn_for_symbol("Hms"), Some(24.0));
/// assert_eq!(full_turn_for_symbol("Furlong"), None);
/// ```
pub fn full_turn_for_symbol(symbol: &str) -> Option<f64> {
    KNOWN_UNITS
        .iter()
        .find(|(known, _)| *known == symbol)
        .map(|&(_, full_turn)| full_turn)
}
