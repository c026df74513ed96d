//! National income tax (所得税) for tax year 2025.
//!
//! # Rate Schedule
//!
//! Tax is `taxable × rate − subtraction` for the band containing the
//! taxable income:
//!
//! | Taxable income up to | Rate | Subtraction |
//! |----------------------|------|-------------|
//! | 1,949,000 | 5% | 0 |
//! | 3,299,000 | 10% | 97,500 |
//! | 6,949,000 | 20% | 427,500 |
//! | 8,999,000 | 23% | 636,000 |
//! | 17,999,000 | 33% | 1,536,000 |
//! | 39,999,000 | 40% | 2,796,000 |
//! | above | 45% | 4,796,000 |
//!
//! The 2.1% special reconstruction income tax is added to the base tax and
//! the combined amount is rounded down to the nearest 100 yen.
//!
//! # Basic Deduction
//!
//! The 2025 reform raised the basic deduction for low and middle incomes:
//!
//! | Net income up to | Deduction |
//! |------------------|-----------|
//! | 1,320,000 | 950,000 |
//! | 3,360,000 | 880,000 |
//! | 4,890,000 | 680,000 |
//! | 6,550,000 | 630,000 |
//! | 23,500,000 | 580,000 |
//! | 24,000,000 | 480,000 |
//! | 24,500,000 | 320,000 |
//! | 25,000,000 | 160,000 |
//! | above | 0 |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use takehome_core::calculations::{calculate_national_income_tax, income_tax_basic_deduction};
//!
//! let net_income = dec!(3_560_000);
//! let taxable = net_income - dec!(721_472) - income_tax_basic_deduction(net_income);
//!
//! assert_eq!(taxable, dec!(2_158_528));
//! assert_eq!(calculate_national_income_tax(taxable), dec!(120_800));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculations::common::{floor_to_unit, non_negative};

/// Special reconstruction income tax applied on top of the base tax.
pub const RECONSTRUCTION_SURTAX_RATE: Decimal = dec!(0.021);

/// One band of the national income tax rate schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncomeTaxBand {
    /// Inclusive upper bound of taxable income; `None` for the top band.
    pub upper_inclusive: Option<Decimal>,
    pub rate: Decimal,
    pub subtraction: Decimal,
}

/// The 2025 national income tax schedule, lowest band first.
pub const INCOME_TAX_BANDS: [IncomeTaxBand; 7] = [
    IncomeTaxBand {
        upper_inclusive: Some(dec!(1_949_000)),
        rate: dec!(0.05),
        subtraction: dec!(0),
    },
    IncomeTaxBand {
        upper_inclusive: Some(dec!(3_299_000)),
        rate: dec!(0.10),
        subtraction: dec!(97_500),
    },
    IncomeTaxBand {
        upper_inclusive: Some(dec!(6_949_000)),
        rate: dec!(0.20),
        subtraction: dec!(427_500),
    },
    IncomeTaxBand {
        upper_inclusive: Some(dec!(8_999_000)),
        rate: dec!(0.23),
        subtraction: dec!(636_000),
    },
    IncomeTaxBand {
        upper_inclusive: Some(dec!(17_999_000)),
        rate: dec!(0.33),
        subtraction: dec!(1_536_000),
    },
    IncomeTaxBand {
        upper_inclusive: Some(dec!(39_999_000)),
        rate: dec!(0.40),
        subtraction: dec!(2_796_000),
    },
    IncomeTaxBand {
        upper_inclusive: None,
        rate: dec!(0.45),
        subtraction: dec!(4_796_000),
    },
];

const BASIC_DEDUCTION_SCHEDULE: [(Decimal, Decimal); 8] = [
    (dec!(1_320_000), dec!(950_000)),
    (dec!(3_360_000), dec!(880_000)),
    (dec!(4_890_000), dec!(680_000)),
    (dec!(6_550_000), dec!(630_000)),
    (dec!(23_500_000), dec!(580_000)),
    (dec!(24_000_000), dec!(480_000)),
    (dec!(24_500_000), dec!(320_000)),
    (dec!(25_000_000), dec!(160_000)),
];

/// Deduction per general dependent (ages 16-18 and 23-69).
pub const DEPENDENT_DEDUCTION_FOR_INCOME_TAX: Decimal = dec!(380_000);

/// Returns the band of the rate schedule containing `taxable_income`.
///
/// Negative income falls in the lowest band.
pub fn income_tax_band(taxable_income: Decimal) -> IncomeTaxBand {
    INCOME_TAX_BANDS
        .iter()
        .copied()
        .find(|band| band.upper_inclusive.is_none_or(|upper| taxable_income <= upper))
        .unwrap_or(INCOME_TAX_BANDS[INCOME_TAX_BANDS.len() - 1])
}

/// Returns the statutory rate (without surtax) for `taxable_income`.
///
/// ```
/// use rust_decimal_macros::dec;
/// use takehome_core::calculations::marginal_income_tax_rate;
///
/// assert_eq!(marginal_income_tax_rate(dec!(1_949_000)), dec!(0.05));
/// assert_eq!(marginal_income_tax_rate(dec!(1_949_001)), dec!(0.10));
/// ```
pub fn marginal_income_tax_rate(taxable_income: Decimal) -> Decimal {
    income_tax_band(taxable_income).rate
}

/// Calculates national income tax including the reconstruction surtax.
///
/// Negative taxable income is treated as zero.
pub fn calculate_national_income_tax(taxable_income: Decimal) -> Decimal {
    let taxable_income = non_negative(taxable_income);
    let band = income_tax_band(taxable_income);

    let base_tax = taxable_income * band.rate - band.subtraction;
    let total = base_tax + base_tax * RECONSTRUCTION_SURTAX_RATE;

    non_negative(floor_to_unit(total, dec!(100)))
}

/// Returns the income tax basic deduction for a net income.
///
/// Negative net income receives the largest deduction.
pub fn income_tax_basic_deduction(net_income: Decimal) -> Decimal {
    BASIC_DEDUCTION_SCHEDULE
        .iter()
        .find(|(upper, _)| net_income <= *upper)
        .map_or(Decimal::ZERO, |&(_, deduction)| deduction)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // =========================================================================
    // calculate_national_income_tax tests
    // =========================================================================

    #[test]
    fn zero_income_has_no_tax() {
        assert_eq!(calculate_national_income_tax(dec!(0)), dec!(0));
    }

    #[test]
    fn negative_income_has_no_tax() {
        assert_eq!(calculate_national_income_tax(dec!(-1_000_000)), dec!(0));
    }

    #[test]
    fn lowest_band_with_surtax() {
        // 1,000,000 × 5% = 50,000; × 1.021 = 51,050
        assert_eq!(calculate_national_income_tax(dec!(1_000_000)), dec!(51_000));
    }

    #[test]
    fn second_band_with_surtax() {
        // 2,158,528 × 10% − 97,500 = 118,352.8; × 1.021 = 120,838.2
        assert_eq!(calculate_national_income_tax(dec!(2_158_528)), dec!(120_800));
    }

    #[test]
    fn top_band_with_surtax() {
        // 50,000,000 × 45% − 4,796,000 = 17,704,000; × 1.021 = 18,075,784
        assert_eq!(calculate_national_income_tax(dec!(50_000_000)), dec!(18_075_700));
    }

    #[test]
    fn tax_is_continuous_at_band_edges() {
        for band in INCOME_TAX_BANDS.iter().filter_map(|b| b.upper_inclusive) {
            let at = calculate_national_income_tax(band);
            let above = calculate_national_income_tax(band + dec!(1000));
            assert!(above >= at, "tax dropped above {band}");
        }
    }

    #[test]
    fn tax_is_monotonic_in_income() {
        let mut previous = Decimal::ZERO;
        let mut income = Decimal::ZERO;
        while income <= dec!(60_000_000) {
            let tax = calculate_national_income_tax(income);
            assert!(tax >= previous, "tax decreased at {income}");
            previous = tax;
            income += dec!(250_000);
        }
    }

    // =========================================================================
    // marginal_income_tax_rate tests
    // =========================================================================

    #[test]
    fn marginal_rate_at_band_boundaries() {
        assert_eq!(marginal_income_tax_rate(dec!(3_299_000)), dec!(0.10));
        assert_eq!(marginal_income_tax_rate(dec!(3_299_001)), dec!(0.20));
        assert_eq!(marginal_income_tax_rate(dec!(39_999_001)), dec!(0.45));
    }

    #[test]
    fn marginal_rate_for_negative_income_is_lowest() {
        assert_eq!(marginal_income_tax_rate(dec!(-50_000)), dec!(0.05));
    }

    // =========================================================================
    // income_tax_basic_deduction tests
    // =========================================================================

    #[test]
    fn basic_deduction_reform_tiers() {
        assert_eq!(income_tax_basic_deduction(dec!(1_320_000)), dec!(950_000));
        assert_eq!(income_tax_basic_deduction(dec!(1_320_001)), dec!(880_000));
        assert_eq!(income_tax_basic_deduction(dec!(3_560_000)), dec!(680_000));
        assert_eq!(income_tax_basic_deduction(dec!(6_000_000)), dec!(630_000));
        assert_eq!(income_tax_basic_deduction(dec!(11_050_000)), dec!(580_000));
    }

    #[test]
    fn basic_deduction_phases_out_above_23_5_million() {
        assert_eq!(income_tax_basic_deduction(dec!(24_000_000)), dec!(480_000));
        assert_eq!(income_tax_basic_deduction(dec!(24_500_000)), dec!(320_000));
        assert_eq!(income_tax_basic_deduction(dec!(25_000_000)), dec!(160_000));
        assert_eq!(income_tax_basic_deduction(dec!(25_000_001)), dec!(0));
    }

    #[test]
    fn basic_deduction_for_negative_income_is_maximum() {
        assert_eq!(income_tax_basic_deduction(dec!(-100)), dec!(950_000));
    }
}
