//! Annual health insurance premium calculations.
//!
//! Two schemes are supported, selected by [`HealthInsuranceProvider`]:
//!
//! # Employee table (Kyokai Kenpo)
//!
//! 1. Monthly income = annual income / 12
//! 2. Find the standard monthly remuneration grade containing it
//! 3. Take the employee share (with the long-term care column for ages 40-64)
//! 4. Annual premium = monthly share × 12
//!
//! # National Health Insurance
//!
//! The premium is the sum of up to three portions, each computed as
//! `min(rate × taxable + per_capita, annual_cap)` and rounded half-up to
//! the yen, where `taxable = max(0, income − standard_deduction)`:
//!
//! | Portion | Charged when |
//! |---------|--------------|
//! | Medical | always |
//! | Elderly support | always |
//! | Long-term care | aged 40-64 and the region defines the portion |
//!
//! Regions without reference data are not an error: the premium degrades
//! to zero and a warning is logged.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use takehome_core::calculations::calculate_health_insurance_premium;
//! use takehome_core::{HealthInsuranceProvider, Prefecture};
//!
//! let premium = calculate_health_insurance_premium(
//!     dec!(20_000_000),
//!     false,
//!     HealthInsuranceProvider::KyokaiKenpo,
//!     Prefecture::Tokyo,
//! )
//! .unwrap();
//!
//! assert_eq!(premium, dec!(826_500));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::{non_negative, round_half_up};
use crate::data::{PremiumTableRepository, RepositoryError, builtin_tables};
use crate::models::{HealthInsuranceProvider, NhiPortion, Prefecture};

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Errors that can occur during health insurance premium calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HealthInsuranceError {
    /// The annual income was below zero.
    #[error("Income cannot be negative.")]
    NegativeIncome,

    /// The premium table has a gap at this monthly income.
    #[error("no premium bracket found for monthly income {monthly_income}")]
    NoMatchingBracket { monthly_income: Decimal },

    /// The reference data exists but could not be used.
    #[error(transparent)]
    ReferenceData(#[from] RepositoryError),
}

/// Calculator for annual health insurance premiums.
///
/// Borrows its reference tables so one repository can serve many
/// calculations.
#[derive(Clone, Copy)]
pub struct HealthInsuranceCalculator<'a> {
    tables: &'a dyn PremiumTableRepository,
}

impl<'a> HealthInsuranceCalculator<'a> {
    pub fn new(tables: &'a dyn PremiumTableRepository) -> Self {
        Self { tables }
    }

    /// Calculates the annual premium paid by the insured person.
    ///
    /// For the employee table `annual_income` is gross income; for National
    /// Health Insurance it is net income after the employment income
    /// deduction.
    ///
    /// # Errors
    ///
    /// Returns [`HealthInsuranceError`] if:
    /// - `annual_income` is negative
    /// - the premium table has no grade for the monthly income
    /// - the repository reports invalid data
    pub fn premium(
        &self,
        annual_income: Decimal,
        is_subject_to_long_term_care_premium: bool,
        provider: HealthInsuranceProvider,
        prefecture: Prefecture,
    ) -> Result<Decimal, HealthInsuranceError> {
        if annual_income < Decimal::ZERO {
            return Err(HealthInsuranceError::NegativeIncome);
        }

        match provider {
            HealthInsuranceProvider::KyokaiKenpo => self.employee_table_premium(
                annual_income,
                is_subject_to_long_term_care_premium,
                provider,
                prefecture,
            ),
            HealthInsuranceProvider::NationalHealthInsurance => self.national_health_insurance_premium(
                annual_income,
                is_subject_to_long_term_care_premium,
                prefecture,
            ),
        }
    }

    fn employee_table_premium(
        &self,
        annual_income: Decimal,
        is_subject_to_long_term_care_premium: bool,
        provider: HealthInsuranceProvider,
        prefecture: Prefecture,
    ) -> Result<Decimal, HealthInsuranceError> {
        let brackets = match self.tables.premium_brackets(provider, prefecture) {
            Ok(brackets) => brackets,
            Err(RepositoryError::NotFound { what }) => {
                warn!("Missing {what}; health insurance premium set to 0");
                return Ok(Decimal::ZERO);
            }
            Err(err) => return Err(err.into()),
        };

        let monthly_income = annual_income / MONTHS_PER_YEAR;
        let bracket = brackets
            .iter()
            .find(|b| b.contains(monthly_income))
            .ok_or(HealthInsuranceError::NoMatchingBracket { monthly_income })?;

        Ok(bracket.employee_share_for(is_subject_to_long_term_care_premium) * MONTHS_PER_YEAR)
    }

    fn national_health_insurance_premium(
        &self,
        net_income: Decimal,
        is_subject_to_long_term_care_premium: bool,
        prefecture: Prefecture,
    ) -> Result<Decimal, HealthInsuranceError> {
        let params = match self.tables.nhi_params(prefecture) {
            Ok(params) => params,
            Err(RepositoryError::NotFound { what }) => {
                warn!("Missing {what}; health insurance premium set to 0");
                return Ok(Decimal::ZERO);
            }
            Err(err) => return Err(err.into()),
        };

        let taxable = non_negative(net_income - params.standard_deduction);

        let mut premium = portion_premium(&params.medical, taxable)
            + portion_premium(&params.elderly_support, taxable);

        if is_subject_to_long_term_care_premium {
            if let Some(long_term_care) = &params.long_term_care {
                premium += portion_premium(long_term_care, taxable);
            }
        }

        Ok(premium)
    }
}

fn portion_premium(
    portion: &NhiPortion,
    taxable: Decimal,
) -> Decimal {
    let uncapped = portion.rate * taxable + portion.per_capita;
    round_half_up(uncapped.min(portion.annual_cap))
}

/// Calculates the annual health insurance premium against the built-in
/// 2025 tables.
///
/// # Errors
///
/// See [`HealthInsuranceCalculator::premium`].
pub fn calculate_health_insurance_premium(
    annual_income: Decimal,
    is_subject_to_long_term_care_premium: bool,
    provider: HealthInsuranceProvider,
    prefecture: Prefecture,
) -> Result<Decimal, HealthInsuranceError> {
    HealthInsuranceCalculator::new(builtin_tables()).premium(
        annual_income,
        is_subject_to_long_term_care_premium,
        provider,
        prefecture,
    )
}
