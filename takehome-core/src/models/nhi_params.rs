use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One additive portion of a National Health Insurance premium.
///
/// The annual premium for the portion is `rate × taxable + per_capita`,
/// limited to `annual_cap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NhiPortion {
    /// Income-based rate applied to NHI taxable income.
    pub rate: Decimal,
    /// Fixed amount charged per insured person.
    pub per_capita: Decimal,
    pub annual_cap: Decimal,
}

/// Regional parameters of the National Health Insurance formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NationalHealthInsuranceParams {
    pub medical: NhiPortion,
    pub elderly_support: NhiPortion,
    /// `None` when the region publishes no long-term care portion.
    pub long_term_care: Option<NhiPortion>,
    /// Deducted from net income before the rates apply.
    pub standard_deduction: Decimal,
}
