//! Annual public pension premiums.
//!
//! Employees pay half of the Employees' Pension Insurance premium
//! (18.3% of standard monthly remuneration, shared with the employer).
//! Everyone else pays the flat National Pension premium.
//!
//! | Scheme | Monthly premium |
//! |--------|-----------------|
//! | Employees' Pension | SMR × 9.15%, SMR from 32 grades (88,000 to 650,000) |
//! | National Pension | 17,510 |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use takehome_core::calculations::calculate_pension_premium;
//!
//! assert_eq!(calculate_pension_premium(true, dec!(416_666)).unwrap(), dec!(450_180));
//! assert_eq!(calculate_pension_premium(false, dec!(-1)).unwrap(), dec!(210_120));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

use crate::calculations::common::round_half_up;

/// Employee half of the 18.3% Employees' Pension rate.
pub const EMPLOYEE_PENSION_RATE: Decimal = dec!(0.0915);

/// National Pension premium for FY2025.
pub const NATIONAL_PENSION_MONTHLY_PREMIUM: Decimal = dec!(17_510);

/// Top-grade premium; no employee pays more per month.
pub const MAX_EMPLOYEE_MONTHLY_PREMIUM: Decimal = dec!(59_475);

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Standard monthly remuneration per grade and the exclusive upper bound of
/// monthly income for that grade (`None` on the last grade).
const PENSION_GRADES: [(Decimal, Option<Decimal>); 32] = [
    (dec!(88_000), Some(dec!(93_000))),
    (dec!(98_000), Some(dec!(101_000))),
    (dec!(104_000), Some(dec!(107_000))),
    (dec!(110_000), Some(dec!(114_000))),
    (dec!(118_000), Some(dec!(122_000))),
    (dec!(126_000), Some(dec!(130_000))),
    (dec!(134_000), Some(dec!(138_000))),
    (dec!(142_000), Some(dec!(146_000))),
    (dec!(150_000), Some(dec!(155_000))),
    (dec!(160_000), Some(dec!(165_000))),
    (dec!(170_000), Some(dec!(175_000))),
    (dec!(180_000), Some(dec!(185_000))),
    (dec!(190_000), Some(dec!(195_000))),
    (dec!(200_000), Some(dec!(210_000))),
    (dec!(220_000), Some(dec!(230_000))),
    (dec!(240_000), Some(dec!(250_000))),
    (dec!(260_000), Some(dec!(270_000))),
    (dec!(280_000), Some(dec!(290_000))),
    (dec!(300_000), Some(dec!(310_000))),
    (dec!(320_000), Some(dec!(330_000))),
    (dec!(340_000), Some(dec!(350_000))),
    (dec!(360_000), Some(dec!(370_000))),
    (dec!(380_000), Some(dec!(395_000))),
    (dec!(410_000), Some(dec!(425_000))),
    (dec!(440_000), Some(dec!(455_000))),
    (dec!(470_000), Some(dec!(485_000))),
    (dec!(500_000), Some(dec!(515_000))),
    (dec!(530_000), Some(dec!(545_000))),
    (dec!(560_000), Some(dec!(575_000))),
    (dec!(590_000), Some(dec!(605_000))),
    (dec!(620_000), Some(dec!(635_000))),
    (dec!(650_000), None),
];

/// Errors that can occur during pension premium calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PensionError {
    /// Employees' Pension requires a non-negative monthly income.
    #[error("Monthly income must be a positive number")]
    NegativeMonthlyIncome,

    /// The grade table has no band for this monthly income.
    #[error("no pension grade found for monthly income {0}")]
    NoMatchingGrade(Decimal),
}

/// Returns the standard monthly remuneration used for Employees' Pension.
///
/// # Errors
///
/// Returns [`PensionError::NoMatchingGrade`] if no band contains the income,
/// which only happens for negative input.
pub fn pension_standard_monthly_remuneration(monthly_income: Decimal) -> Result<Decimal, PensionError> {
    let mut lower = Decimal::ZERO;
    for &(smr, upper) in PENSION_GRADES.iter() {
        if monthly_income >= lower && upper.is_none_or(|upper| monthly_income < upper) {
            return Ok(smr);
        }
        if let Some(upper) = upper {
            lower = upper;
        }
    }
    Err(PensionError::NoMatchingGrade(monthly_income))
}

/// Calculates the annual pension premium.
///
/// Employees are charged from the grade table; the result never exceeds
/// 713,700 yen. Non-employees always pay 210,120 yen, whatever the income.
///
/// # Errors
///
/// Returns [`PensionError::NegativeMonthlyIncome`] when `is_employee` is
/// set and `monthly_income` is below zero.
pub fn calculate_pension_premium(
    is_employee: bool,
    monthly_income: Decimal,
) -> Result<Decimal, PensionError> {
    if !is_employee {
        return Ok(NATIONAL_PENSION_MONTHLY_PREMIUM * MONTHS_PER_YEAR);
    }

    if monthly_income < Decimal::ZERO {
        return Err(PensionError::NegativeMonthlyIncome);
    }

    let smr = pension_standard_monthly_remuneration(monthly_income)?;
    let monthly_premium = round_half_up(smr * EMPLOYEE_PENSION_RATE).min(MAX_EMPLOYEE_MONTHLY_PREMIUM);

    Ok(monthly_premium * MONTHS_PER_YEAR)
}
