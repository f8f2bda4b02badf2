//! The engine-wide rounding convention.
//!
//! Every monetary leaf quantity and every count in the pipeline is rounded
//! up (ceiling) and floored at zero, a conservative-toward-larger convention
//! applied uniformly so identical inputs reproduce identical outputs.

use rust_decimal::Decimal;

/// Rounds a value up to the smallest integer greater than or equal to
/// `max(value, 0)`.
///
/// Idempotent: applying it to an already-rounded value returns the value
/// unchanged.
///
/// # Example
///
/// ```
/// use roi_engine::calculation::round_up;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_up(Decimal::from_str("204.545").unwrap()), Decimal::from(205));
/// assert_eq!(round_up(Decimal::from_str("-3.2").unwrap()), Decimal::ZERO);
/// assert_eq!(round_up(Decimal::from(12)), Decimal::from(12));
/// ```
pub fn round_up(value: Decimal) -> Decimal {
    value.ceil().max(Decimal::ZERO)
}
