use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Breakdown of the annual residence tax (municipal plus prefectural).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ResidenceTaxDetails {
    /// Net income minus deductions, floored to the nearest 1,000 yen.
    pub taxable_income: Decimal,
    pub basic_deduction: Decimal,
    /// Income-based municipal portion before credits (6%).
    pub city_proportion: Decimal,
    /// Income-based prefectural portion before credits (4%).
    pub prefectural_proportion: Decimal,
    pub city_adjustment_credit: Decimal,
    pub prefectural_adjustment_credit: Decimal,
    pub city_income_tax: Decimal,
    pub prefectural_income_tax: Decimal,
    pub per_capita_tax: Decimal,
    pub total_residence_tax: Decimal,
}

/// Furusato Nozei donation limit and the tax reductions it produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FurusatoNozeiDetails {
    /// Largest donation whose net cost stays at the 2,000 yen floor,
    /// rounded down to the nearest 1,000 yen.
    pub limit: Decimal,
    pub income_tax_reduction: Decimal,
    pub residence_tax_donation_basic_deduction: Decimal,
    pub residence_tax_special_deduction: Decimal,
    pub residence_tax_reduction: Decimal,
    pub out_of_pocket_cost: Decimal,
}

/// Complete result of a take-home pay calculation.
///
/// `take_home_income` always equals `annual_income` minus every tax and
/// premium listed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TakeHomeResult {
    pub annual_income: Decimal,
    pub is_employment_income: bool,
    pub employment_income_deduction: Decimal,
    pub net_income: Decimal,
    pub dc_plan_contributions: Decimal,

    pub health_insurance: Decimal,
    pub pension_payments: Decimal,
    pub employment_insurance: Decimal,
    pub total_social_insurance: Decimal,

    pub income_tax_basic_deduction: Decimal,
    pub dependent_deduction_for_income_tax: Decimal,
    pub taxable_income_for_national_income_tax: Decimal,
    pub national_income_tax: Decimal,

    pub dependent_deduction_for_residence_tax: Decimal,
    pub residence_tax: ResidenceTaxDetails,
    pub furusato_nozei: FurusatoNozeiDetails,

    /// National income tax plus residence tax plus social insurance.
    pub total_tax: Decimal,
    pub take_home_income: Decimal,
}
