//! Form state for a take-home pay calculation.
//!
//! The state is changed only through [`reduce`], so every front end (the
//! `calc` command today, an interactive form later) applies the same rules.
//! The one rule with a side effect on another field: switching between
//! salary and business income resets the health insurance provider to the
//! scheme that matches the new income type.

use rust_decimal::Decimal;
use takehome_core::{HealthInsuranceProvider, Prefecture, TaxInput};

/// Inputs collected so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub annual_income: Decimal,
    pub is_employment_income: bool,
    pub is_subject_to_long_term_care_premium: bool,
    pub prefecture: Prefecture,
    pub health_insurance_provider: HealthInsuranceProvider,
    pub number_of_dependents: u32,
    pub dc_plan_contributions: Decimal,
}

impl Default for FormState {
    fn default() -> Self {
        let input = TaxInput::default();
        Self {
            annual_income: input.annual_income,
            is_employment_income: input.is_employment_income,
            is_subject_to_long_term_care_premium: input.is_subject_to_long_term_care_premium,
            prefecture: input.prefecture,
            health_insurance_provider: input.health_insurance_provider,
            number_of_dependents: input.number_of_dependents,
            dc_plan_contributions: input.dc_plan_contributions,
        }
    }
}

impl FormState {
    /// The calculation input described by this state.
    pub fn to_input(&self) -> TaxInput {
        TaxInput {
            annual_income: self.annual_income,
            is_employment_income: self.is_employment_income,
            is_subject_to_long_term_care_premium: self.is_subject_to_long_term_care_premium,
            prefecture: self.prefecture,
            health_insurance_provider: self.health_insurance_provider,
            number_of_dependents: self.number_of_dependents,
            dc_plan_contributions: self.dc_plan_contributions,
        }
    }
}

/// A single user edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    IncomeChanged(Decimal),
    EmploymentIncomeToggled(bool),
    LongTermCareToggled(bool),
    PrefectureSelected(Prefecture),
    ProviderSelected(HealthInsuranceProvider),
    DependentsChanged(u32),
    DcContributionsChanged(Decimal),
    /// Clear everything back to the defaults.
    Reset,
}

/// Apply `event` to `state` and return the new state.
pub fn reduce(
    state: FormState,
    event: FormEvent,
) -> FormState {
    match event {
        FormEvent::IncomeChanged(annual_income) => FormState {
            annual_income,
            ..state
        },
        FormEvent::EmploymentIncomeToggled(is_employment_income) => FormState {
            is_employment_income,
            health_insurance_provider: default_provider(is_employment_income),
            ..state
        },
        FormEvent::LongTermCareToggled(is_subject_to_long_term_care_premium) => FormState {
            is_subject_to_long_term_care_premium,
            ..state
        },
        FormEvent::PrefectureSelected(prefecture) => FormState { prefecture, ..state },
        FormEvent::ProviderSelected(health_insurance_provider) => FormState {
            health_insurance_provider,
            ..state
        },
        FormEvent::DependentsChanged(number_of_dependents) => FormState {
            number_of_dependents,
            ..state
        },
        FormEvent::DcContributionsChanged(dc_plan_contributions) => FormState {
            dc_plan_contributions,
            ..state
        },
        FormEvent::Reset => FormState::default(),
    }
}

fn default_provider(is_employment_income: bool) -> HealthInsuranceProvider {
    if is_employment_income {
        HealthInsuranceProvider::KyokaiKenpo
    } else {
        HealthInsuranceProvider::NationalHealthInsurance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    // =========================================================================
    // Defaults
    // =========================================================================

    #[test]
    fn default_state_matches_default_input() {
        assert_eq!(FormState::default().to_input(), TaxInput::default());
    }

    // =========================================================================
    // Employment toggle
    // =========================================================================

    #[test]
    fn switching_to_business_income_selects_nhi() {
        let state = reduce(FormState::default(), FormEvent::EmploymentIncomeToggled(false));

        assert!(!state.is_employment_income);
        assert_eq!(
            state.health_insurance_provider,
            HealthInsuranceProvider::NationalHealthInsurance
        );
    }

    #[test]
    fn switching_back_to_salary_selects_kyokai_kenpo() {
        let state = [
            FormEvent::EmploymentIncomeToggled(false),
            FormEvent::EmploymentIncomeToggled(true),
        ]
        .into_iter()
        .fold(FormState::default(), reduce);

        assert_eq!(state.health_insurance_provider, HealthInsuranceProvider::KyokaiKenpo);
    }

    #[test]
    fn provider_selected_after_toggle_is_kept() {
        let state = [
            FormEvent::EmploymentIncomeToggled(false),
            FormEvent::ProviderSelected(HealthInsuranceProvider::KyokaiKenpo),
        ]
        .into_iter()
        .fold(FormState::default(), reduce);

        assert!(!state.is_employment_income);
        assert_eq!(state.health_insurance_provider, HealthInsuranceProvider::KyokaiKenpo);
    }

    // =========================================================================
    // Other fields
    // =========================================================================

    #[test]
    fn events_fold_into_input() {
        let state = [
            FormEvent::IncomeChanged(dec!(6_500_000)),
            FormEvent::LongTermCareToggled(true),
            FormEvent::PrefectureSelected(Prefecture::Osaka),
            FormEvent::DependentsChanged(2),
            FormEvent::DcContributionsChanged(dec!(276_000)),
        ]
        .into_iter()
        .fold(FormState::default(), reduce);

        assert_eq!(
            state.to_input(),
            TaxInput {
                annual_income: dec!(6_500_000),
                is_employment_income: true,
                is_subject_to_long_term_care_premium: true,
                prefecture: Prefecture::Osaka,
                health_insurance_provider: HealthInsuranceProvider::KyokaiKenpo,
                number_of_dependents: 2,
                dc_plan_contributions: dec!(276_000),
            }
        );
    }

    #[test]
    fn reset_restores_defaults() {
        let edited = reduce(FormState::default(), FormEvent::IncomeChanged(dec!(9_000_000)));

        assert_eq!(reduce(edited, FormEvent::Reset), FormState::default());
    }
}
