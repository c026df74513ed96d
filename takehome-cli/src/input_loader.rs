//! CSV loader for batch calculation inputs.
//!
//! ## CSV Format
//!
//! Column order does **not** matter (headers are matched by name). Header
//! names are case-sensitive.
//!
//! | Column                                 | Required | Type    | Default                         |
//! |----------------------------------------|----------|---------|---------------------------------|
//! | `annual_income`                        | yes      | decimal |                                 |
//! | `is_employment_income`                 | no       | bool    | `true`                          |
//! | `is_subject_to_long_term_care_premium` | no       | bool    | `false`                         |
//! | `prefecture`                           | no       | string  | `Tokyo`                         |
//! | `health_insurance_provider`            | no       | string  | by income type (see below)      |
//! | `number_of_dependents`                 | no       | integer | `0`                             |
//! | `dc_plan_contributions`                | no       | decimal | `0`                             |
//!
//! Prefectures are accepted by English name (`Osaka`) or romanized name with
//! suffix (`osaka-fu`). Providers are `kyokai-kenpo` or `nhi`; an empty
//! provider means Kyokai Kenpo for salary income and National Health
//! Insurance otherwise.
//!
//! ### Example
//!
//! ```csv
//! annual_income,is_employment_income,prefecture,number_of_dependents
//! 5000000,true,Tokyo,0
//! 4000000,false,Osaka,1
//! ```
use std::io::Read;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;
use takehome_core::{HealthInsuranceProvider, Prefecture, TaxInput};

use crate::state::{FormEvent, FormState, reduce};

#[derive(Debug, Deserialize)]
struct CsvRow {
    annual_income: Decimal,
    is_employment_income: Option<bool>,
    is_subject_to_long_term_care_premium: Option<bool>,
    prefecture: Option<String>,
    health_insurance_provider: Option<String>,
    number_of_dependents: Option<u32>,
    dc_plan_contributions: Option<Decimal>,
}

/// Errors that can occur while loading batch input.
#[derive(Debug, thiserror::Error)]
pub enum InputLoadError {
    /// Bad structure, missing required column, or type mismatch.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// `row` is the 1-based data row (header = row 0).
    #[error("unrecognised prefecture '{value}' on row {row}")]
    UnknownPrefecture { value: String, row: usize },

    #[error("unrecognised health insurance provider '{value}' on row {row}")]
    UnknownProvider { value: String, row: usize },

    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<TaxInput, InputLoadError> {
    let mut events = vec![FormEvent::IncomeChanged(row.annual_income)];

    if let Some(is_employment_income) = row.is_employment_income {
        events.push(FormEvent::EmploymentIncomeToggled(is_employment_income));
    }
    if let Some(ltc) = row.is_subject_to_long_term_care_premium {
        events.push(FormEvent::LongTermCareToggled(ltc));
    }
    if let Some(value) = row.prefecture.filter(|v| !v.is_empty()) {
        let prefecture = Prefecture::parse(&value).ok_or(InputLoadError::UnknownPrefecture {
            value,
            row: row_number,
        })?;
        events.push(FormEvent::PrefectureSelected(prefecture));
    }
    if let Some(value) = row.health_insurance_provider.filter(|v| !v.is_empty()) {
        let provider =
            HealthInsuranceProvider::parse(&value).ok_or(InputLoadError::UnknownProvider {
                value,
                row: row_number,
            })?;
        events.push(FormEvent::ProviderSelected(provider));
    }
    if let Some(dependents) = row.number_of_dependents {
        events.push(FormEvent::DependentsChanged(dependents));
    }
    if let Some(dc) = row.dc_plan_contributions {
        events.push(FormEvent::DcContributionsChanged(dc));
    }

    Ok(events.into_iter().fold(FormState::default(), reduce).to_input())
}

/// Parse CSV from any reader. Rows are returned in file order.
///
/// # Errors
///
/// * [`InputLoadError::Parse`] if the CSV is structurally invalid or a
///   field cannot be deserialised.
/// * [`InputLoadError::UnknownPrefecture`] / [`InputLoadError::UnknownProvider`]
///   if a row names a prefecture or provider that does not exist.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<TaxInput>, InputLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(reader);

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1)
        })
        .collect()
}

/// Parse CSV text held in memory.
pub fn load_from_str(input: &str) -> Result<Vec<TaxInput>, InputLoadError> {
    load_from_reader(input.as_bytes())
}

/// Open `path` and delegate to [`load_from_reader`].
pub fn load_from_file(path: &Path) -> Result<Vec<TaxInput>, InputLoadError> {
    let file = std::fs::File::open(path).map_err(|source| InputLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_reader(file)
}
