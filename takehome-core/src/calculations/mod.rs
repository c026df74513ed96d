//! Tax and social insurance calculations for Japanese salary and business
//! income, tax year 2025.
//!
//! Each module covers one levy. [`take_home`] chains them in statutory
//! order to produce a [`TakeHomeResult`](crate::TakeHomeResult).

pub mod common;
pub mod employment_income_deduction;
pub mod employment_insurance;
pub mod furusato_nozei;
pub mod health_insurance;
pub mod income_tax;
pub mod pension;
pub mod residence_tax;
pub mod take_home;

pub use employment_income_deduction::employment_income_deduction;
pub use employment_insurance::calculate_employment_insurance;
pub use furusato_nozei::{calculate_furusato_nozei_details, special_deduction_rate};
pub use health_insurance::{
    HealthInsuranceCalculator, HealthInsuranceError, calculate_health_insurance_premium,
};
pub use income_tax::{
    calculate_national_income_tax, income_tax_basic_deduction, marginal_income_tax_rate,
};
pub use pension::{PensionError, calculate_pension_premium};
pub use residence_tax::{calculate_residence_tax, residence_tax_basic_deduction};
pub use take_home::{TakeHomeCalculator, TakeHomeError, calculate_taxes};
