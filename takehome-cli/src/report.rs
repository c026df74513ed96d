//! Text and JSON rendering of calculation results.

use std::fmt::{self, Write};

use rust_decimal::Decimal;
use serde::Serialize;
use takehome_core::{TakeHomeResult, TaxInput};

use crate::utils::format_yen;

const LABEL_WIDTH: usize = 44;
const AMOUNT_WIDTH: usize = 14;

/// One calculation as it appears in JSON output.
#[derive(Debug, Serialize)]
pub struct ReportEntry<'a> {
    pub input: &'a TaxInput,
    pub result: &'a TakeHomeResult,
}

fn line(
    out: &mut String,
    indent: usize,
    label: &str,
    amount: Decimal,
) -> fmt::Result {
    let width = LABEL_WIDTH - indent;
    writeln!(
        out,
        "{:indent$}{label:<width$}{:>AMOUNT_WIDTH$}",
        "",
        format_yen(amount)
    )
}

fn heading(input: &TaxInput) -> String {
    let income_type = if input.is_employment_income {
        "salary"
    } else {
        "business income"
    };
    let mut heading = format!(
        "{} ({income_type}), {}, {}",
        format_yen(input.annual_income),
        input.prefecture,
        input.health_insurance_provider
    );
    if input.is_subject_to_long_term_care_premium {
        heading.push_str(", long-term care");
    }
    if input.number_of_dependents > 0 {
        let _ = write!(heading, ", {} dependent(s)", input.number_of_dependents);
    }
    heading
}

fn write_text(
    out: &mut String,
    input: &TaxInput,
    result: &TakeHomeResult,
) -> fmt::Result {
    writeln!(out, "{}", heading(input))?;
    writeln!(out)?;

    line(out, 2, "Annual income", result.annual_income)?;
    if result.is_employment_income {
        line(out, 2, "Employment income deduction", result.employment_income_deduction)?;
    }
    line(out, 2, "Net income", result.net_income)?;
    if !result.dc_plan_contributions.is_zero() {
        line(out, 2, "DC plan contributions", result.dc_plan_contributions)?;
    }
    writeln!(out)?;

    writeln!(out, "  Social insurance")?;
    line(out, 4, "Health insurance", result.health_insurance)?;
    line(out, 4, "Pension", result.pension_payments)?;
    line(out, 4, "Employment insurance", result.employment_insurance)?;
    line(out, 4, "Total", result.total_social_insurance)?;
    writeln!(out)?;

    writeln!(out, "  National income tax")?;
    line(out, 4, "Basic deduction", result.income_tax_basic_deduction)?;
    if !result.dependent_deduction_for_income_tax.is_zero() {
        line(out, 4, "Dependent deduction", result.dependent_deduction_for_income_tax)?;
    }
    line(out, 4, "Taxable income", result.taxable_income_for_national_income_tax)?;
    line(out, 4, "Tax (incl. reconstruction surtax)", result.national_income_tax)?;
    writeln!(out)?;

    let residence = &result.residence_tax;
    writeln!(out, "  Residence tax")?;
    line(out, 4, "Basic deduction", residence.basic_deduction)?;
    if !result.dependent_deduction_for_residence_tax.is_zero() {
        line(out, 4, "Dependent deduction", result.dependent_deduction_for_residence_tax)?;
    }
    line(out, 4, "Taxable income", residence.taxable_income)?;
    line(out, 4, "Municipal income-based", residence.city_income_tax)?;
    line(out, 4, "Prefectural income-based", residence.prefectural_income_tax)?;
    line(out, 4, "Per-capita", residence.per_capita_tax)?;
    line(out, 4, "Total", residence.total_residence_tax)?;
    writeln!(out)?;

    line(out, 2, "Total taxes and premiums", result.total_tax)?;
    line(out, 2, "Take-home income", result.take_home_income)?;
    line(out, 2, "Monthly take-home", (result.take_home_income / Decimal::from(12)).floor())?;
    writeln!(out)?;

    let furusato = &result.furusato_nozei;
    writeln!(out, "  Furusato Nozei")?;
    line(out, 4, "Donation limit", furusato.limit)?;
    line(out, 4, "Income tax reduction", furusato.income_tax_reduction)?;
    line(out, 4, "Residence tax reduction", furusato.residence_tax_reduction)?;
    line(out, 4, "Out-of-pocket cost", furusato.out_of_pocket_cost)?;

    Ok(())
}

/// Human-readable breakdown of one calculation.
pub fn render_text(
    input: &TaxInput,
    result: &TakeHomeResult,
) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_text(&mut out, input, result);
    out
}

/// Pretty-printed JSON for one calculation.
///
/// # Errors
///
/// Propagates `serde_json` serialisation failures.
pub fn render_json(
    input: &TaxInput,
    result: &TakeHomeResult,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ReportEntry { input, result })
}

/// Pretty-printed JSON array for a batch of calculations.
///
/// # Errors
///
/// Propagates `serde_json` serialisation failures.
pub fn render_json_batch(entries: &[ReportEntry<'_>]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(entries)
}
