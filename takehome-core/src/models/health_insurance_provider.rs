use std::fmt;

use serde::{Deserialize, Serialize};

/// Health insurance scheme the taxpayer belongs to.
///
/// `KyokaiKenpo` (Japan Health Insurance Association) is premium-table based
/// and paid half by the employer; `NationalHealthInsurance` is the municipal
/// formula-based scheme for the self-employed and unemployed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HealthInsuranceProvider {
    KyokaiKenpo,
    NationalHealthInsurance,
}

impl HealthInsuranceProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::KyokaiKenpo => "kyokai-kenpo",
            Self::NationalHealthInsurance => "nhi",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kyokai-kenpo" | "kyokaikenpo" | "kyokai_kenpo" => Some(Self::KyokaiKenpo),
            "nhi" | "national-health-insurance" | "nationalhealthinsurance" => {
                Some(Self::NationalHealthInsurance)
            }
            _ => None,
        }
    }

    /// True when premiums come from a standard-monthly-remuneration table
    /// rather than the National Health Insurance formula.
    pub fn is_employee_table(&self) -> bool {
        matches!(self, Self::KyokaiKenpo)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::KyokaiKenpo => "Kyokai Kenpo",
            Self::NationalHealthInsurance => "National Health Insurance",
        }
    }
}

impl fmt::Display for HealthInsuranceProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_codes_and_aliases() {
        assert_eq!(
            HealthInsuranceProvider::parse("kyokai-kenpo"),
            Some(HealthInsuranceProvider::KyokaiKenpo)
        );
        assert_eq!(
            HealthInsuranceProvider::parse("KyokaiKenpo"),
            Some(HealthInsuranceProvider::KyokaiKenpo)
        );
        assert_eq!(
            HealthInsuranceProvider::parse("NHI"),
            Some(HealthInsuranceProvider::NationalHealthInsurance)
        );
        assert_eq!(HealthInsuranceProvider::parse("bupa"), None);
    }

    #[test]
    fn as_str_round_trips() {
        for provider in [
            HealthInsuranceProvider::KyokaiKenpo,
            HealthInsuranceProvider::NationalHealthInsurance,
        ] {
            assert_eq!(HealthInsuranceProvider::parse(provider.as_str()), Some(provider));
        }
    }
}
