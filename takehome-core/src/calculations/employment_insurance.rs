//! Employment insurance premiums withheld from salary.
//!
//! The worker's share for general businesses in FY2025 is 0.55% of gross
//! wages. Business income carries no employment insurance.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculations::common::round_half_up;

/// Worker's share of the employment insurance rate (general business).
pub const EMPLOYMENT_INSURANCE_RATE: Decimal = dec!(0.0055);

/// Calculates the annual employment insurance premium.
///
/// Zero when the income is not employment income or is not positive.
///
/// ```
/// use rust_decimal_macros::dec;
/// use takehome_core::calculations::calculate_employment_insurance;
///
/// assert_eq!(calculate_employment_insurance(dec!(5_000_000), true), dec!(27_500));
/// assert_eq!(calculate_employment_insurance(dec!(5_000_000), false), dec!(0));
/// ```
pub fn calculate_employment_insurance(
    gross_income: Decimal,
    is_employment_income: bool,
) -> Decimal {
    if !is_employment_income || gross_income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    round_half_up(gross_income * EMPLOYMENT_INSURANCE_RATE)
}
