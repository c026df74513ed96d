//! Take-home pay: every tax and premium applied to one [`TaxInput`].
//!
//! # Calculation Order
//!
//! | Step | Description |
//! |------|-------------|
//! | 1 | Net income = gross − employment income deduction (salary only) |
//! | 2 | Health insurance (employee table on gross, NHI on net income) |
//! | 3 | Pension (Employees' Pension for salary, National Pension otherwise) |
//! | 4 | Employment insurance |
//! | 5 | Total social insurance |
//! | 6 | Income tax base = net − social − DC − dependents − basic deduction |
//! | 7 | National income tax |
//! | 8 | Residence tax with social, DC and dependent deductions |
//! | 9 | Furusato Nozei limit against both bases |
//! | 10 | Take-home = gross − (income tax + residence tax + social insurance) |
//!
//! The Furusato Nozei figures are informational; they do not change the
//! take-home amount.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use takehome_core::calculations::calculate_taxes;
//! use takehome_core::TaxInput;
//!
//! let input = TaxInput {
//!     annual_income: dec!(5_000_000),
//!     ..TaxInput::default()
//! };
//!
//! let result = calculate_taxes(&input).unwrap();
//!
//! assert_eq!(result.net_income, dec!(3_560_000));
//! assert_eq!(result.national_income_tax, dec!(120_800));
//! assert_eq!(result.residence_tax.total_residence_tax, dec!(243_200));
//! assert_eq!(result.take_home_income, dec!(3_914_528));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;
use tracing::debug;

use crate::calculations::common::non_negative;
use crate::calculations::employment_income_deduction::employment_income_deduction;
use crate::calculations::employment_insurance::calculate_employment_insurance;
use crate::calculations::furusato_nozei::calculate_furusato_nozei_details;
use crate::calculations::health_insurance::{HealthInsuranceCalculator, HealthInsuranceError};
use crate::calculations::income_tax::{
    DEPENDENT_DEDUCTION_FOR_INCOME_TAX, calculate_national_income_tax, income_tax_basic_deduction,
};
use crate::calculations::pension::{PensionError, calculate_pension_premium};
use crate::calculations::residence_tax::{
    DEPENDENT_DEDUCTION_FOR_RESIDENCE_TAX, calculate_residence_tax,
};
use crate::data::{PremiumTableRepository, builtin_tables};
use crate::models::{TakeHomeResult, TaxInput};

/// Errors that can occur while calculating take-home pay.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TakeHomeError {
    #[error(transparent)]
    HealthInsurance(#[from] HealthInsuranceError),

    #[error(transparent)]
    Pension(#[from] PensionError),
}

/// Calculator for the complete take-home pay breakdown.
#[derive(Clone, Copy)]
pub struct TakeHomeCalculator<'a> {
    tables: &'a dyn PremiumTableRepository,
}

impl<'a> TakeHomeCalculator<'a> {
    pub fn new(tables: &'a dyn PremiumTableRepository) -> Self {
        Self { tables }
    }

    /// Runs the whole pipeline for one input.
    ///
    /// # Errors
    ///
    /// Returns [`TakeHomeError`] if:
    /// - the annual income is negative
    /// - the health insurance table has a gap at the monthly income
    /// - Employees' Pension rejects a negative monthly income
    pub fn calculate(
        &self,
        input: &TaxInput,
    ) -> Result<TakeHomeResult, TakeHomeError> {
        let annual_income = input.annual_income;

        let employment_income_deduction = if input.is_employment_income {
            employment_income_deduction(annual_income)
        } else {
            Decimal::ZERO
        };
        let net_income = annual_income - employment_income_deduction;

        if annual_income < Decimal::ZERO {
            return Err(HealthInsuranceError::NegativeIncome.into());
        }

        // The minimum employment income deduction can push net income below
        // zero for small salaries; NHI assesses that as zero income.
        let health_insurance_base = if input.health_insurance_provider.is_employee_table() {
            annual_income
        } else {
            non_negative(net_income)
        };
        let health_insurance = HealthInsuranceCalculator::new(self.tables).premium(
            health_insurance_base,
            input.is_subject_to_long_term_care_premium,
            input.health_insurance_provider,
            input.prefecture,
        )?;

        let pension_payments =
            calculate_pension_premium(input.is_employment_income, annual_income / dec!(12))?;

        let employment_insurance =
            calculate_employment_insurance(annual_income, input.is_employment_income);

        let total_social_insurance = health_insurance + pension_payments + employment_insurance;

        debug!(
            %net_income,
            %health_insurance,
            %pension_payments,
            %employment_insurance,
            "Social insurance calculated"
        );

        let dependents = Decimal::from(input.number_of_dependents);
        let dependent_deduction_for_income_tax = dependents * DEPENDENT_DEDUCTION_FOR_INCOME_TAX;
        let dependent_deduction_for_residence_tax = dependents * DEPENDENT_DEDUCTION_FOR_RESIDENCE_TAX;

        let income_tax_basic_deduction = income_tax_basic_deduction(net_income);
        let taxable_income_for_national_income_tax = net_income
            - total_social_insurance
            - input.dc_plan_contributions
            - dependent_deduction_for_income_tax
            - income_tax_basic_deduction;
        let national_income_tax = calculate_national_income_tax(taxable_income_for_national_income_tax);

        let residence_tax = calculate_residence_tax(
            net_income,
            total_social_insurance + input.dc_plan_contributions + dependent_deduction_for_residence_tax,
            None,
        );

        let furusato_nozei =
            calculate_furusato_nozei_details(taxable_income_for_national_income_tax, &residence_tax);

        let total_tax = national_income_tax + residence_tax.total_residence_tax + total_social_insurance;
        let take_home_income = annual_income - total_tax;

        debug!(
            %national_income_tax,
            residence_tax = %residence_tax.total_residence_tax,
            furusato_limit = %furusato_nozei.limit,
            %take_home_income,
            "Take-home pay calculated"
        );

        Ok(TakeHomeResult {
            annual_income,
            is_employment_income: input.is_employment_income,
            employment_income_deduction,
            net_income,
            dc_plan_contributions: input.dc_plan_contributions,
            health_insurance,
            pension_payments,
            employment_insurance,
            total_social_insurance,
            income_tax_basic_deduction,
            dependent_deduction_for_income_tax,
            taxable_income_for_national_income_tax,
            national_income_tax,
            dependent_deduction_for_residence_tax,
            residence_tax,
            furusato_nozei,
            total_tax,
            take_home_income,
        })
    }
}

/// Calculates take-home pay against the built-in 2025 tables.
///
/// # Errors
///
/// See [`TakeHomeCalculator::calculate`].
pub fn calculate_taxes(input: &TaxInput) -> Result<TakeHomeResult, TakeHomeError> {
    TakeHomeCalculator::new(builtin_tables()).calculate(input)
}
