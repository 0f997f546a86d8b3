//! Unit marker trait.

use core::fmt::Debug;

/// Trait implemented by every angular **unit** type.
///
/// * `FULL_TURN` is the size of one revolution counted in this unit: `360` for degrees, `τ` for radians, `24` for
///   hour angles. Conversions go through the fraction of a turn, so no unit is privileged.
///
/// * `SYMBOL` is the printable string (e.g. `"Deg"` or `"Rad"`).
///
/// # Invariants
///
/// - Implementations should be zero-sized marker types.
/// - `FULL_TURN` must be finite and strictly positive.
///
/// Implement it with `#[derive(Unit)]` and a `#[unit(symbol = "...", full_turn = ...)]` attribute.
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// One revolution expressed in this unit.
    const FULL_TURN: f64;

    /// Printable symbol, shown by [`core::fmt::Display`].
    const SYMBOL: &'static str;
}
