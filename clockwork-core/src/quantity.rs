//! Quantity type and its implementations.

use crate::unit::Unit;
use core::marker::PhantomData;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An angle tagged with its unit.
///
/// `Quantity<U>` wraps an `f64` value together with phantom type information about its unit `U`, so degrees and
/// radians cannot be mixed by accident. The wrapper has no runtime cost.
///
/// # Examples
///
/// ```rust
/// use clockwork_core::angular::{Degrees, Radian};
///
/// let a = Degrees::new(30.0);
/// let b = Degrees::new(60.0);
/// assert_eq!((a + b).value(), 90.0);
///
/// let r = (a + b).to::<Radian>();
/// assert!((r.value() - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent, bound = ""))]
pub struct Quantity<U: Unit>(f64, #[cfg_attr(feature = "serde", serde(skip))] PhantomData<U>);

impl<U: Unit> Quantity<U> {
    /// Creates a new quantity with the given value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the raw numeric value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns the absolute value.
    ///
    /// ```rust
    /// use clockwork_core::angular::Degrees;
    /// assert_eq!(Degrees::new(-10.0).abs().value(), 10.0);
    /// ```
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.0.abs())
    }

    /// The angle as a fraction of one revolution (unwrapped).
    ///
    /// ```rust
    /// use clockwork_core::angular::HourAngles;
    /// assert_eq!(HourAngles::new(30.0).turns(), 1.25);
    /// ```
    #[inline]
    pub fn turns(self) -> f64 {
        self.0 / U::FULL_TURN
    }

    /// Builds an angle from a fraction of one revolution.
    #[inline]
    pub fn from_turns(turns: f64) -> Self {
        Self::new(turns * U::FULL_TURN)
    }

    /// Converts this angle to another angular unit, through its fraction of a turn.
    ///
    /// ```rust
    /// use clockwork_core::angular::{HourAngle, Degrees};
    ///
    /// let h = Degrees::new(90.0).to::<HourAngle>();
    /// assert_eq!(h.value(), 6.0);
    /// ```
    #[inline]
    pub fn to<T: Unit>(self) -> Quantity<T> {
        Quantity::<T>::from_turns(self.turns())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operators
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit> Add for Quantity<U> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl<U: Unit> Sub for Quantity<U> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl<U: Unit> Mul<f64> for Quantity<U> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.0 * rhs)
    }
}

impl<U: Unit> Div<f64> for Quantity<U> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.0 / rhs)
    }
}

impl<U: Unit> Neg for Quantity<U> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl<U: Unit> From<f64> for Quantity<U> {
    #[inline]
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// Serde helper that writes the unit symbol next to the value and converts on the way back in.
///
/// Serializes as `{"value": 270.0, "unit": "Deg"}`. Deserializing accepts any unit symbol from
/// [`angular`](crate::angular) and converts the value to the field's unit, so a `Degrees` field reads
/// `{"value": 6.0, "unit": "Hms"}` as `90°`. A missing `unit` means the field's own unit; an unknown one is an error.
///
/// ```rust
/// use clockwork_core::angular::Degrees;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Heading {
///     #[serde(with = "clockwork_core::serde_with_unit")]
///     bearing: Degrees, // {"value": 270.0, "unit": "Deg"}
///     tolerance: Degrees, // 5.0
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::*;
    use crate::angular::full_turn_for_symbol;
    use serde::de::Error as _;
    use serde::{Deserializer, Serializer};

    #[derive(Serialize)]
    struct Tagged<'a> {
        value: f64,
        unit: &'a str,
    }

    #[derive(Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Incoming {
        value: f64,
        #[serde(default)]
        unit: Option<String>,
    }

    /// Serializes a `Quantity<U>` as a struct with `value` and `unit` fields.
    pub fn serialize<U, S>(quantity: &Quantity<U>, serializer: S) -> Result<S::Ok, S::Error>
    where
        U: Unit,
        S: Serializer,
    {
        Tagged {
            value: quantity.value(),
            unit: U::SYMBOL,
        }
        .serialize(serializer)
    }

    /// Deserializes a `Quantity<U>` from `value` and an optional `unit`, converting from that unit.
    pub fn deserialize<'de, U, D>(deserializer: D) -> Result<Quantity<U>, D::Error>
    where
        U: Unit,
        D: Deserializer<'de>,
    {
        let Incoming { value, unit } = Incoming::deserialize(deserializer)?;

        let full_turn = match unit.as_deref() {
            None => return Ok(Quantity::new(value)),
            Some(symbol) if symbol == U::SYMBOL => return Ok(Quantity::new(value)),
            Some(symbol) => full_turn_for_symbol(symbol)
                .ok_or_else(|| D::Error::custom(format!("unknown angle unit '{symbol}'")))?,
        };

        Ok(Quantity::from_turns(value / full_turn))
    }
}
