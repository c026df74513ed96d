//! Employment income deduction (給与所得控除) for tax year 2025.
//!
//! Salary earners deduct a statutory allowance from gross salary instead of
//! itemizing expenses. The allowance is a piecewise function of gross
//! income, evaluated top-down with the first matching row winning:
//!
//! | Gross income up to | Deduction |
//! |--------------------|-----------|
//! | 1,625,000 | 550,000 |
//! | 1,800,000 | income × 40% − 100,000 |
//! | 3,600,000 | income × 30% + 80,000 |
//! | 6,600,000 | income × 20% + 440,000 |
//! | 8,500,000 | income × 10% + 1,100,000 |
//! | above | 1,950,000 |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use takehome_core::calculations::employment_income_deduction;
//!
//! assert_eq!(employment_income_deduction(dec!(5_000_000)), dec!(1_440_000));
//! assert_eq!(employment_income_deduction(dec!(20_000_000)), dec!(1_950_000));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculations::common::floor_yen;

const MINIMUM_DEDUCTION: Decimal = dec!(550_000);
const MAXIMUM_DEDUCTION: Decimal = dec!(1_950_000);

/// Returns the employment income deduction for a gross annual salary.
///
/// Total for every input: zero and negative income fall into the first row.
pub fn employment_income_deduction(annual_income: Decimal) -> Decimal {
    let deduction = if annual_income <= dec!(1_625_000) {
        MINIMUM_DEDUCTION
    } else if annual_income <= dec!(1_800_000) {
        annual_income * dec!(0.4) - dec!(100_000)
    } else if annual_income <= dec!(3_600_000) {
        annual_income * dec!(0.3) + dec!(80_000)
    } else if annual_income <= dec!(6_600_000) {
        annual_income * dec!(0.2) + dec!(440_000)
    } else if annual_income <= dec!(8_500_000) {
        annual_income * dec!(0.1) + dec!(1_100_000)
    } else {
        MAXIMUM_DEDUCTION
    };

    floor_yen(deduction)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // =========================================================================
    // Boundary tests
    // =========================================================================

    #[test]
    fn flat_minimum_up_to_1_625_000() {
        assert_eq!(employment_income_deduction(dec!(1_000_000)), dec!(550_000));
        assert_eq!(employment_income_deduction(dec!(1_625_000)), dec!(550_000));
    }

    #[test]
    fn forty_percent_band_upper_boundary() {
        assert_eq!(employment_income_deduction(dec!(1_800_000)), dec!(620_000));
    }

    #[test]
    fn forty_percent_band_just_above_flat_minimum() {
        // 1,625,001 × 0.4 − 100,000 = 550,000.4
        assert_eq!(employment_income_deduction(dec!(1_625_001)), dec!(550_000));
    }

    #[test]
    fn thirty_percent_band() {
        assert_eq!(employment_income_deduction(dec!(3_000_000)), dec!(980_000));
        assert_eq!(employment_income_deduction(dec!(3_600_000)), dec!(1_160_000));
    }

    #[test]
    fn twenty_percent_band() {
        assert_eq!(employment_income_deduction(dec!(5_000_000)), dec!(1_440_000));
        assert_eq!(employment_income_deduction(dec!(6_600_000)), dec!(1_760_000));
    }

    #[test]
    fn ten_percent_band() {
        assert_eq!(employment_income_deduction(dec!(8_500_000)), dec!(1_950_000));
    }

    #[test]
    fn flat_maximum_above_8_500_000() {
        assert_eq!(employment_income_deduction(dec!(8_500_001)), dec!(1_950_000));
        assert_eq!(employment_income_deduction(dec!(50_000_000)), dec!(1_950_000));
    }

    // =========================================================================
    // Edge cases
    // =========================================================================

    #[test]
    fn zero_and_negative_income_use_first_row() {
        assert_eq!(employment_income_deduction(dec!(0)), dec!(550_000));
        assert_eq!(employment_income_deduction(dec!(-1_000_000)), dec!(550_000));
    }

    #[test]
    fn fractional_results_round_down() {
        // 1,700,001 × 0.4 − 100,000 = 580,000.4
        assert_eq!(employment_income_deduction(dec!(1_700_001)), dec!(580_000));
    }

    #[test]
    fn deduction_is_continuous_at_band_edges() {
        for edge in [dec!(1_800_000), dec!(3_600_000), dec!(6_600_000), dec!(8_500_000)] {
            let below = employment_income_deduction(edge);
            let above = employment_income_deduction(edge + dec!(10));
            assert!(above >= below, "deduction dropped at {edge}");
        }
    }
}
