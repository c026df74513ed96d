use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{HealthInsuranceProvider, Prefecture};

/// Everything a take-home pay calculation depends on.
///
/// `annual_income` is deliberately unchecked: calculators clamp zero and
/// negative values, and only the health insurance and employee pension
/// calculators reject negative income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxInput {
    /// Gross annual income in yen.
    pub annual_income: Decimal,
    /// Salary income (employment income deduction, employee pension,
    /// employment insurance) as opposed to business or other income.
    pub is_employment_income: bool,
    /// Aged 40-64 and therefore liable for the long-term care premium.
    pub is_subject_to_long_term_care_premium: bool,
    pub prefecture: Prefecture,
    pub health_insurance_provider: HealthInsuranceProvider,
    /// General dependents (ages 16-18 and 23-69).
    pub number_of_dependents: u32,
    /// Annual defined-contribution pension (iDeCo) contributions.
    pub dc_plan_contributions: Decimal,
}

impl Default for TaxInput {
    fn default() -> Self {
        Self {
            annual_income: Decimal::ZERO,
            is_employment_income: true,
            is_subject_to_long_term_care_premium: false,
            prefecture: Prefecture::Tokyo,
            health_insurance_provider: HealthInsuranceProvider::KyokaiKenpo,
            number_of_dependents: 0,
            dc_plan_contributions: Decimal::ZERO,
        }
    }
}
