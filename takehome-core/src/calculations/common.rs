//! Common utility functions for tax calculations.
//!
//! Every published amount is whole yen. Japanese tax rules round in three
//! different ways depending on the figure, so each calculator picks one of
//! the helpers below explicitly:
//!
//! | Helper | Used for |
//! |--------|----------|
//! | [`round_half_up`] | Insurance premiums, employment insurance |
//! | [`floor_yen`] | Deductions computed from a rate |
//! | [`ceil_yen`] | Furusato Nozei special deduction sides |
//! | [`floor_to_unit`] | Taxable income (1,000 yen), tax amounts (100 yen) |

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to whole yen using half-up rounding.
///
/// Values at exactly 0.5 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use takehome_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(68874.5)), dec!(68875));
/// assert_eq!(round_half_up(dec!(68874.49)), dec!(68874));
/// assert_eq!(round_half_up(dec!(-0.5)), dec!(-1)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a decimal value down to whole yen.
pub fn floor_yen(value: Decimal) -> Decimal {
    value.floor()
}

/// Rounds a decimal value up to whole yen.
pub fn ceil_yen(value: Decimal) -> Decimal {
    value.ceil()
}

/// Rounds `value` down to a multiple of `unit`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use takehome_core::calculations::common::floor_to_unit;
///
/// assert_eq!(floor_to_unit(dec!(2_345_678), dec!(1000)), dec!(2_345_000));
/// assert_eq!(floor_to_unit(dec!(52_799.9), dec!(100)), dec!(52_700));
/// ```
pub fn floor_to_unit(
    value: Decimal,
    unit: Decimal,
) -> Decimal {
    (value / unit).floor() * unit
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use takehome_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100), dec!(200)), dec!(200));
/// assert_eq!(max(dec!(-100), dec!(0)), dec!(0));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Clamps a value at zero.
pub fn non_negative(value: Decimal) -> Decimal {
    max(value, Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(123.49));

        assert_eq!(result, dec!(123));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(123.5));

        assert_eq!(result, dec!(124));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        let result = round_half_up(dec!(-123.5));

        assert_eq!(result, dec!(-124));
    }

    #[test]
    fn round_half_up_preserves_whole_yen() {
        let result = round_half_up(dec!(27500));

        assert_eq!(result, dec!(27500));
    }

    // =========================================================================
    // floor / ceil tests
    // =========================================================================

    #[test]
    fn floor_yen_drops_fraction() {
        assert_eq!(floor_yen(dec!(719999.9)), dec!(719999));
    }

    #[test]
    fn ceil_yen_raises_any_fraction() {
        assert_eq!(ceil_yen(dec!(26076.0001)), dec!(26077));
        assert_eq!(ceil_yen(dec!(26076)), dec!(26076));
    }

    #[test]
    fn floor_to_unit_thousand() {
        assert_eq!(floor_to_unit(dec!(2999), dec!(1000)), dec!(2000));
        assert_eq!(floor_to_unit(dec!(3000), dec!(1000)), dec!(3000));
    }

    #[test]
    fn floor_to_unit_hundred() {
        assert_eq!(floor_to_unit(dec!(61234.56), dec!(100)), dec!(61200));
    }

    #[test]
    fn floor_to_unit_zero_is_zero() {
        assert_eq!(floor_to_unit(dec!(0), dec!(1000)), dec!(0));
    }

    // =========================================================================
    // max tests
    // =========================================================================

    #[test]
    fn max_returns_larger_value() {
        assert_eq!(max(dec!(100), dec!(200)), dec!(200));
        assert_eq!(max(dec!(200), dec!(100)), dec!(200));
    }

    #[test]
    fn max_handles_equal_values() {
        assert_eq!(max(dec!(150), dec!(150)), dec!(150));
    }

    #[test]
    fn non_negative_clamps_below_zero() {
        assert_eq!(non_negative(dec!(-1)), dec!(0));
        assert_eq!(non_negative(dec!(1)), dec!(1));
    }
}
