use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One standard-monthly-remuneration grade of an employee premium table.
///
/// A grade matches a monthly income when
/// `min_income_inclusive <= income < max_income_exclusive`; `None` as the
/// upper bound means the band is unbounded (the last grade of a table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumBracket {
    pub grade: u32,
    pub standard_monthly_remuneration: Decimal,
    pub min_income_inclusive: Decimal,
    pub max_income_exclusive: Option<Decimal>,
    /// Monthly premium withheld from the employee (half of `full_share`).
    pub employee_share: Decimal,
    pub full_share: Decimal,
    /// Employee share including the long-term care premium (ages 40-64).
    pub employee_share_with_ltc: Decimal,
    pub full_share_with_ltc: Decimal,
}

impl PremiumBracket {
    pub fn contains(&self, monthly_income: Decimal) -> bool {
        monthly_income >= self.min_income_inclusive
            && self
                .max_income_exclusive
                .is_none_or(|max| monthly_income < max)
    }

    /// Selects the monthly employee share with or without the long-term care
    /// addon.
    pub fn employee_share_for(&self, is_subject_to_long_term_care_premium: bool) -> Decimal {
        if is_subject_to_long_term_care_premium {
            self.employee_share_with_ltc
        } else {
            self.employee_share
        }
    }
}
