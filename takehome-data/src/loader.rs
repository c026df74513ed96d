use std::collections::HashMap;
use std::io::Read;
use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::Deserialize;
use takehome_core::{
    HealthInsuranceProvider, NationalHealthInsuranceParams, NhiPortion, Prefecture,
    PremiumBracket, RepositoryError,
};
use thiserror::Error;

/// Errors that can occur when loading reference table data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableLoadError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Cannot read {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },

    #[error("Unknown health insurance provider '{value}' on row {row}")]
    UnknownProvider { value: String, row: usize },

    #[error("Unknown prefecture '{value}' on row {row}")]
    UnknownPrefecture { value: String, row: usize },

    #[error("Long-term care columns must be all set or all empty (row {row})")]
    IncompleteLongTermCare { row: usize },

    #[error("Duplicate NHI parameters for {prefecture} on row {row}")]
    DuplicatePrefecture { prefecture: Prefecture, row: usize },

    #[error("{0}")]
    Repository(#[from] RepositoryError),
}

impl From<csv::Error> for TableLoadError {
    fn from(err: csv::Error) -> Self {
        TableLoadError::CsvParse(err.to_string())
    }
}

/// Premium tables keyed by provider and prefecture.
pub type PremiumTables = HashMap<(HealthInsuranceProvider, Prefecture), Vec<PremiumBracket>>;

/// NHI parameters keyed by prefecture.
pub type NhiParamsTable = HashMap<Prefecture, NationalHealthInsuranceParams>;

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(reader)
}

fn parse_provider(
    value: &str,
    row: usize,
) -> Result<HealthInsuranceProvider, TableLoadError> {
    HealthInsuranceProvider::parse(value).ok_or_else(|| TableLoadError::UnknownProvider {
        value: value.to_string(),
        row,
    })
}

fn parse_prefecture(
    value: &str,
    row: usize,
) -> Result<Prefecture, TableLoadError> {
    Prefecture::parse(value).ok_or_else(|| TableLoadError::UnknownPrefecture {
        value: value.to_string(),
        row,
    })
}

// ---------------------------------------------------------------------------
// Premium brackets
// ---------------------------------------------------------------------------

/// A single record from a premium bracket CSV file.
///
/// The CSV columns are:
/// - `provider`: health insurance provider code (`kyokai-kenpo`)
/// - `prefecture`: English prefecture name (`Tokyo`)
/// - `grade`: standard monthly remuneration grade number
/// - `standard_monthly_remuneration`: the grade's remuneration
/// - `min_income`: inclusive lower bound of monthly income
/// - `max_income`: exclusive upper bound (empty for unlimited)
/// - `employee_share`, `full_share`: monthly premiums without long-term care
/// - `employee_share_with_ltc`, `full_share_with_ltc`: monthly premiums with it
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PremiumBracketRecord {
    pub provider: String,
    pub prefecture: String,
    pub grade: u32,
    pub standard_monthly_remuneration: Decimal,
    pub min_income: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub max_income: Option<Decimal>,
    pub employee_share: Decimal,
    pub full_share: Decimal,
    pub employee_share_with_ltc: Decimal,
    pub full_share_with_ltc: Decimal,
}

impl PremiumBracketRecord {
    fn to_bracket(&self) -> PremiumBracket {
        PremiumBracket {
            grade: self.grade,
            standard_monthly_remuneration: self.standard_monthly_remuneration,
            min_income_inclusive: self.min_income,
            max_income_exclusive: self.max_income,
            employee_share: self.employee_share,
            full_share: self.full_share,
            employee_share_with_ltc: self.employee_share_with_ltc,
            full_share_with_ltc: self.full_share_with_ltc,
        }
    }
}

/// Loader for standard monthly remuneration premium tables.
pub struct PremiumBracketLoader;

impl PremiumBracketLoader {
    /// Parse premium bracket records from a CSV reader.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<PremiumBracketRecord>, TableLoadError> {
        let mut csv_reader = csv_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: PremiumBracketRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Group records into one validated table per provider and prefecture.
    ///
    /// Brackets within a group are sorted by lower bound before validation,
    /// so file order does not matter. Row numbers in errors are 1-based
    /// data rows (the header is row 0).
    pub fn into_tables(records: &[PremiumBracketRecord]) -> Result<PremiumTables, TableLoadError> {
        let mut tables = PremiumTables::new();

        for (idx, record) in records.iter().enumerate() {
            let row = idx + 1;
            let provider = parse_provider(&record.provider, row)?;
            let prefecture = parse_prefecture(&record.prefecture, row)?;

            tables
                .entry((provider, prefecture))
                .or_default()
                .push(record.to_bracket());
        }

        for ((provider, prefecture), brackets) in tables.iter_mut() {
            brackets.sort_by(|a, b| a.min_income_inclusive.cmp(&b.min_income_inclusive));
            validate_brackets(brackets).map_err(|e| match e {
                RepositoryError::InvalidData(message) => RepositoryError::InvalidData(format!(
                    "{provider} table for {prefecture}: {message}"
                )),
                other => other,
            })?;
        }

        Ok(tables)
    }
}

/// Checks that a bracket table can answer every non-negative income.
///
/// A valid table starts at 0, has no gaps or overlaps, and ends with exactly
/// one unbounded band.
pub fn validate_brackets(brackets: &[PremiumBracket]) -> Result<(), RepositoryError> {
    let Some(first) = brackets.first() else {
        return Err(RepositoryError::InvalidData("table has no brackets".to_string()));
    };

    if first.min_income_inclusive != Decimal::ZERO {
        return Err(RepositoryError::InvalidData(format!(
            "first bracket starts at {} instead of 0",
            first.min_income_inclusive
        )));
    }

    for pair in brackets.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);
        match current.max_income_exclusive {
            None => {
                return Err(RepositoryError::InvalidData(format!(
                    "grade {} is unbounded but is not the last bracket",
                    current.grade
                )));
            }
            Some(max) if max != next.min_income_inclusive => {
                return Err(RepositoryError::InvalidData(format!(
                    "grade {} ends at {max} but grade {} starts at {}",
                    current.grade, next.grade, next.min_income_inclusive
                )));
            }
            Some(_) => {}
        }
    }

    for bracket in brackets {
        if let Some(max) = bracket.max_income_exclusive {
            if max <= bracket.min_income_inclusive {
                return Err(RepositoryError::InvalidData(format!(
                    "grade {} has an empty income range",
                    bracket.grade
                )));
            }
        }
        if bracket.employee_share < Decimal::ZERO || bracket.employee_share_with_ltc < Decimal::ZERO {
            return Err(RepositoryError::InvalidData(format!(
                "grade {} has a negative share",
                bracket.grade
            )));
        }
    }

    if brackets
        .last()
        .is_some_and(|last| last.max_income_exclusive.is_some())
    {
        return Err(RepositoryError::InvalidData(
            "last bracket must be unbounded".to_string(),
        ));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// National Health Insurance parameters
// ---------------------------------------------------------------------------

/// A single record from an NHI parameter CSV file.
///
/// The long-term care columns (`ltc_rate`, `ltc_per_capita`, `ltc_cap`) are
/// optional as a group; leave all three empty when the region has none.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NhiParamsRecord {
    pub prefecture: String,
    pub medical_rate: Decimal,
    pub medical_per_capita: Decimal,
    pub medical_cap: Decimal,
    pub support_rate: Decimal,
    pub support_per_capita: Decimal,
    pub support_cap: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub ltc_rate: Option<Decimal>,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub ltc_per_capita: Option<Decimal>,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub ltc_cap: Option<Decimal>,
    pub standard_deduction: Decimal,
}

impl NhiParamsRecord {
    fn to_params(
        &self,
        row: usize,
    ) -> Result<NationalHealthInsuranceParams, TableLoadError> {
        let long_term_care = match (self.ltc_rate, self.ltc_per_capita, self.ltc_cap) {
            (Some(rate), Some(per_capita), Some(annual_cap)) => Some(NhiPortion {
                rate,
                per_capita,
                annual_cap,
            }),
            (None, None, None) => None,
            _ => return Err(TableLoadError::IncompleteLongTermCare { row }),
        };

        Ok(NationalHealthInsuranceParams {
            medical: NhiPortion {
                rate: self.medical_rate,
                per_capita: self.medical_per_capita,
                annual_cap: self.medical_cap,
            },
            elderly_support: NhiPortion {
                rate: self.support_rate,
                per_capita: self.support_per_capita,
                annual_cap: self.support_cap,
            },
            long_term_care,
            standard_deduction: self.standard_deduction,
        })
    }
}

/// Loader for National Health Insurance regional parameters.
pub struct NhiParamsLoader;

impl NhiParamsLoader {
    /// Parse NHI parameter records from a CSV reader.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<NhiParamsRecord>, TableLoadError> {
        let mut csv_reader = csv_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: NhiParamsRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Convert records into a table keyed by prefecture.
    pub fn into_table(records: &[NhiParamsRecord]) -> Result<NhiParamsTable, TableLoadError> {
        let mut table = NhiParamsTable::new();

        for (idx, record) in records.iter().enumerate() {
            let row = idx + 1;
            let prefecture = parse_prefecture(&record.prefecture, row)?;
            let params = record.to_params(row)?;

            if table.insert(prefecture, params).is_some() {
                return Err(TableLoadError::DuplicatePrefecture { prefecture, row });
            }
        }

        Ok(table)
    }
}
