//! Furusato Nozei (ふるさと納税) donation limit.
//!
//! A hometown donation is credited against income tax and residence tax so
//! that the donor's net cost is 2,000 yen, as long as the donation stays
//! within a limit set by the residence tax special deduction cap (20% of
//! the residence tax income portion). The limit is solved in closed form:
//!
//! ```text
//! special_rate = 90% − marginal income tax rate × 1.021
//! limit        = income_portion × 20% / special_rate + 2,000
//! ```
//!
//! and never exceeds 30% of residence taxable income. The marginal rate is
//! looked up on residence taxable income minus 50,000 (the gap between the
//! two basic deductions) before the donation.
//!
//! # Credits for a donation at the limit
//!
//! | Credit | Amount |
//! |--------|--------|
//! | Income tax | tax on taxable income minus tax after deducting (limit − 2,000) |
//! | Residence tax basic | (limit − 2,000) × 10% |
//! | Residence tax special | (limit − 2,000) × special_rate |
//!
//! Residence tax credits are split 60/40 between city and prefecture; the
//! special deduction is rounded up on each side.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use takehome_core::calculations::{calculate_furusato_nozei_details, calculate_residence_tax};
//!
//! let residence = calculate_residence_tax(dec!(3_560_000), dec!(721_472), None);
//! let details = calculate_furusato_nozei_details(dec!(2_158_528), &residence);
//!
//! assert_eq!(details.limit, dec!(61_000));
//! assert_eq!(details.income_tax_reduction, dec!(6_000));
//! assert_eq!(details.residence_tax_reduction, dec!(53_000));
//! assert_eq!(details.out_of_pocket_cost, dec!(2_000));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculations::common::{ceil_yen, floor_to_unit, non_negative};
use crate::calculations::income_tax::{
    RECONSTRUCTION_SURTAX_RATE, calculate_national_income_tax, marginal_income_tax_rate,
};
use crate::calculations::residence_tax::{CITY_SHARE, PREFECTURAL_SHARE, levy};
use crate::models::{FurusatoNozeiDetails, ResidenceTaxDetails};

/// Portion of every donation the donor always bears.
pub const SELF_BURDEN: Decimal = dec!(2_000);

const RESIDENCE_BASIC_DEDUCTION_RATE: Decimal = dec!(0.10);
const SPECIAL_DEDUCTION_CAP_RATE: Decimal = dec!(0.2);
const LIMIT_CAP_RATE: Decimal = dec!(0.3);
const BASIC_DEDUCTION_GAP: Decimal = dec!(50_000);

/// Rate of the residence tax special deduction for a residence taxable income.
pub fn special_deduction_rate(residence_taxable_income: Decimal) -> Decimal {
    let marginal_rate = marginal_income_tax_rate(residence_taxable_income - BASIC_DEDUCTION_GAP);
    Decimal::ONE - RESIDENCE_BASIC_DEDUCTION_RATE
        - marginal_rate * (Decimal::ONE + RECONSTRUCTION_SURTAX_RATE)
}

/// Calculates the donation limit and the tax reductions at that limit.
///
/// Returns all zeros when either taxable income is zero or negative.
pub fn calculate_furusato_nozei_details(
    taxable_income_for_income_tax: Decimal,
    residence_tax: &ResidenceTaxDetails,
) -> FurusatoNozeiDetails {
    let residence_taxable_income = residence_tax.taxable_income;
    if taxable_income_for_income_tax <= Decimal::ZERO || residence_taxable_income <= Decimal::ZERO {
        return FurusatoNozeiDetails::default();
    }

    let income_portion = residence_tax.total_residence_tax - residence_tax.per_capita_tax;
    let special_rate = special_deduction_rate(residence_taxable_income);

    let candidate = income_portion * SPECIAL_DEDUCTION_CAP_RATE / special_rate + SELF_BURDEN;
    let cap = residence_taxable_income * LIMIT_CAP_RATE;
    let limit = floor_to_unit(candidate.min(cap), dec!(1000));

    let deductible = non_negative(limit - SELF_BURDEN);

    let income_tax_reduction = income_tax_reduction(taxable_income_for_income_tax, deductible);

    let basic_deduction = deductible * RESIDENCE_BASIC_DEDUCTION_RATE;
    let special_deduction = deductible * special_rate;
    let city_special = ceil_yen(special_deduction * CITY_SHARE);
    let prefectural_special = ceil_yen(special_deduction * PREFECTURAL_SHARE);

    let city_with_donation = levy(
        residence_tax.city_proportion,
        residence_tax.city_adjustment_credit,
        basic_deduction * CITY_SHARE + city_special,
    );
    let prefectural_with_donation = levy(
        residence_tax.prefectural_proportion,
        residence_tax.prefectural_adjustment_credit,
        basic_deduction * PREFECTURAL_SHARE + prefectural_special,
    );
    let total_with_donation =
        city_with_donation + prefectural_with_donation + residence_tax.per_capita_tax;
    let residence_tax_reduction = non_negative(residence_tax.total_residence_tax - total_with_donation);

    FurusatoNozeiDetails {
        limit,
        income_tax_reduction,
        residence_tax_donation_basic_deduction: basic_deduction,
        residence_tax_special_deduction: city_special + prefectural_special,
        residence_tax_reduction,
        out_of_pocket_cost: limit - residence_tax_reduction - income_tax_reduction,
    }
}

/// Income tax saved by deducting `deductible` from taxable income.
fn income_tax_reduction(
    taxable_income: Decimal,
    deductible: Decimal,
) -> Decimal {
    let thousand = dec!(1000);
    let before = calculate_national_income_tax(floor_to_unit(taxable_income, thousand));
    let after = calculate_national_income_tax(floor_to_unit(taxable_income - deductible, thousand));
    before - after
}
