use thiserror::Error;

use crate::models::{
    HealthInsuranceProvider, NationalHealthInsuranceParams, Prefecture, PremiumBracket,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("No reference data for {what}")]
    NotFound { what: String },

    #[error("Invalid reference data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    pub fn premium_table_not_found(
        provider: HealthInsuranceProvider,
        prefecture: Prefecture,
    ) -> Self {
        Self::NotFound {
            what: format!("{provider} premium table in {prefecture}"),
        }
    }

    pub fn nhi_params_not_found(prefecture: Prefecture) -> Self {
        Self::NotFound {
            what: format!("National Health Insurance parameters in {prefecture}"),
        }
    }
}

/// Read-only source of the regional reference tables the calculators need.
///
/// Implementations are expected to hand out brackets sorted by
/// `min_income_inclusive` and covering `[0, +∞)` without gaps.
pub trait PremiumTableRepository: Send + Sync {
    // Employee premium tables (standard monthly remuneration grades)
    fn premium_brackets(
        &self,
        provider: HealthInsuranceProvider,
        prefecture: Prefecture,
    ) -> Result<&[PremiumBracket], RepositoryError>;

    // National Health Insurance formula parameters
    fn nhi_params(
        &self,
        prefecture: Prefecture,
    ) -> Result<&NationalHealthInsuranceParams, RepositoryError>;
}
