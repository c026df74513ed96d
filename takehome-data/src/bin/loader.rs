use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use takehome_core::{HealthInsuranceProvider, Prefecture, PremiumTableRepository};
use takehome_data::TablesConfig;
use tracing_subscriber::EnvFilter;

/// Validate reference table CSV files and print a summary.
///
/// The premium bracket CSV has the columns
/// `provider,prefecture,grade,standard_monthly_remuneration,min_income,max_income,
/// employee_share,full_share,employee_share_with_ltc,full_share_with_ltc`
/// (`max_income` empty for the unbounded top grade).
///
/// The NHI CSV has the columns
/// `prefecture,medical_rate,medical_per_capita,medical_cap,support_rate,
/// support_per_capita,support_cap,ltc_rate,ltc_per_capita,ltc_cap,standard_deduction`
/// (the three `ltc_` columns empty when the region has no long-term care portion).
#[derive(Parser, Debug)]
#[command(name = "takehome-tables")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a premium bracket CSV file
    #[arg(short, long)]
    brackets: Option<PathBuf>,

    /// Path to a National Health Insurance parameter CSV file
    #[arg(short, long)]
    nhi: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    let config = TablesConfig {
        brackets: args.brackets,
        nhi: args.nhi,
    };
    if config.is_builtin() {
        bail!("nothing to validate: pass --brackets and/or --nhi");
    }

    let tables = config
        .open()
        .context("Failed to load reference tables")?;

    if let Some(path) = &config.brackets {
        println!("Premium tables from {}:", path.display());
        for provider in [
            HealthInsuranceProvider::KyokaiKenpo,
            HealthInsuranceProvider::NationalHealthInsurance,
        ] {
            for prefecture in Prefecture::ALL {
                if let Ok(brackets) = tables.premium_brackets(provider, prefecture) {
                    let top = brackets
                        .last()
                        .map(|b| b.standard_monthly_remuneration.to_string())
                        .unwrap_or_default();
                    println!(
                        "  {provider:<26} {prefecture:<10} {:>3} grades, top remuneration {top}",
                        brackets.len()
                    );
                }
            }
        }
    }

    if let Some(path) = &config.nhi {
        println!("NHI parameters from {}:", path.display());
        for prefecture in tables.nhi_prefectures() {
            let params = tables
                .nhi_params(prefecture)
                .with_context(|| format!("NHI parameters for {prefecture} disappeared"))?;
            let ltc = if params.long_term_care.is_some() { "yes" } else { "no" };
            println!(
                "  {prefecture:<10} medical {} support {} long-term care {ltc}",
                params.medical.rate, params.elderly_support.rate
            );
        }
    }

    println!("All tables are valid.");

    Ok(())
}
