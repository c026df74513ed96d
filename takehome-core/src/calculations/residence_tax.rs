//! Residence tax (住民税) levied by the municipality and the prefecture.
//!
//! # Calculation Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1 | Net income ≤ 450,000: not taxable, everything is zero |
//! | 2 | Basic deduction from net income (430,000 tapering to 0 above 24M) |
//! | 3 | Taxable = net − other deductions − basic, floored to 1,000 |
//! | 4 | Income portion: city 6%, prefecture 4% |
//! | 5 | Adjustment credit, split 60/40 between city and prefecture |
//! | 6 | External credits, split 60/40 |
//! | 7 | Each side floored to 100 and clamped at 0 |
//! | 8 | Per-capita levy of 5,000 |
//!
//! The per-capita levy is 3,000 municipal, 1,000 prefectural and 1,000
//! forest environment tax. It is charged even when the taxable income
//! rounds to zero, as long as net income is above the non-taxable floor.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use takehome_core::calculations::calculate_residence_tax;
//!
//! let details = calculate_residence_tax(dec!(3_560_000), dec!(721_472), None);
//!
//! assert_eq!(details.taxable_income, dec!(2_408_000));
//! assert_eq!(details.city_income_tax, dec!(142_900));
//! assert_eq!(details.prefectural_income_tax, dec!(95_300));
//! assert_eq!(details.total_residence_tax, dec!(243_200));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculations::common::{floor_to_unit, max, non_negative};
use crate::models::ResidenceTaxDetails;

/// Net income at or below which no residence tax is charged.
pub const NON_TAXABLE_NET_INCOME_LIMIT: Decimal = dec!(450_000);

/// Municipal, prefectural and forest environment per-capita levies.
pub const PER_CAPITA_TAX: Decimal = dec!(5_000);

/// Deduction per general dependent (ages 16-18 and 23-69).
pub const DEPENDENT_DEDUCTION_FOR_RESIDENCE_TAX: Decimal = dec!(330_000);

pub(crate) const CITY_RATE: Decimal = dec!(0.06);
pub(crate) const PREFECTURAL_RATE: Decimal = dec!(0.04);
pub(crate) const CITY_SHARE: Decimal = dec!(0.6);
pub(crate) const PREFECTURAL_SHARE: Decimal = dec!(0.4);

/// Difference between the income tax and residence tax basic deductions.
const PERSONAL_DEDUCTION_DIFFERENCE: Decimal = dec!(50_000);
const ADJUSTMENT_CREDIT_RATE: Decimal = dec!(0.05);
const ADJUSTMENT_CREDIT_THRESHOLD: Decimal = dec!(2_000_000);
const ADJUSTMENT_CREDIT_MINIMUM: Decimal = dec!(2_500);
const ADJUSTMENT_CREDIT_NET_INCOME_LIMIT: Decimal = dec!(25_000_000);

/// Returns the residence tax basic deduction for a net income.
pub fn residence_tax_basic_deduction(net_income: Decimal) -> Decimal {
    if net_income <= dec!(24_000_000) {
        dec!(430_000)
    } else if net_income <= dec!(24_500_000) {
        dec!(290_000)
    } else if net_income <= dec!(25_000_000) {
        dec!(150_000)
    } else {
        Decimal::ZERO
    }
}

/// Calculates the annual residence tax.
///
/// `other_deductions` is every deduction besides the basic deduction
/// (social insurance, DC contributions, dependents). `tax_credit` is an
/// optional credit applied to the income portion and split 60/40.
pub fn calculate_residence_tax(
    net_income: Decimal,
    other_deductions: Decimal,
    tax_credit: Option<Decimal>,
) -> ResidenceTaxDetails {
    if net_income <= NON_TAXABLE_NET_INCOME_LIMIT {
        return ResidenceTaxDetails::default();
    }

    let basic_deduction = residence_tax_basic_deduction(net_income);
    let taxable_income = floor_to_unit(
        non_negative(net_income - other_deductions - basic_deduction),
        dec!(1000),
    );

    let city_proportion = taxable_income * CITY_RATE;
    let prefectural_proportion = taxable_income * PREFECTURAL_RATE;

    let adjustment_credit = adjustment_credit(net_income, taxable_income);
    let city_adjustment_credit = adjustment_credit * CITY_SHARE;
    let prefectural_adjustment_credit = adjustment_credit * PREFECTURAL_SHARE;

    let credit = tax_credit.unwrap_or(Decimal::ZERO);

    let city_income_tax = levy(city_proportion, city_adjustment_credit, credit * CITY_SHARE);
    let prefectural_income_tax = levy(
        prefectural_proportion,
        prefectural_adjustment_credit,
        credit * PREFECTURAL_SHARE,
    );

    ResidenceTaxDetails {
        taxable_income,
        basic_deduction,
        city_proportion,
        prefectural_proportion,
        city_adjustment_credit,
        prefectural_adjustment_credit,
        city_income_tax,
        prefectural_income_tax,
        per_capita_tax: PER_CAPITA_TAX,
        total_residence_tax: city_income_tax + prefectural_income_tax + PER_CAPITA_TAX,
    }
}

/// Computes the adjustment credit (調整控除) before the city/prefecture split.
fn adjustment_credit(
    net_income: Decimal,
    taxable_income: Decimal,
) -> Decimal {
    if net_income > ADJUSTMENT_CREDIT_NET_INCOME_LIMIT {
        return Decimal::ZERO;
    }

    if taxable_income <= ADJUSTMENT_CREDIT_THRESHOLD {
        PERSONAL_DEDUCTION_DIFFERENCE.min(taxable_income) * ADJUSTMENT_CREDIT_RATE
    } else {
        let reduced = PERSONAL_DEDUCTION_DIFFERENCE - (taxable_income - ADJUSTMENT_CREDIT_THRESHOLD);
        max(reduced * ADJUSTMENT_CREDIT_RATE, ADJUSTMENT_CREDIT_MINIMUM)
    }
}

/// One side's income levy: proportion minus credits, floored to 100 yen.
pub(crate) fn levy(
    proportion: Decimal,
    adjustment_credit: Decimal,
    credit: Decimal,
) -> Decimal {
    non_negative(floor_to_unit(proportion - adjustment_credit - credit, dec!(100)))
}
