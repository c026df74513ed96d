use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use takehome_core::{HealthInsuranceProvider, Prefecture, TakeHomeCalculator};
use takehome_data::TablesConfig;
use tracing::{debug, info, info_span};

use takehome_cli::input_loader;
use takehome_cli::logging;
use takehome_cli::report::{self, ReportEntry};
use takehome_cli::state::{FormEvent, FormState, reduce};
use takehome_cli::utils::parse_decimal;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Japanese take-home pay calculator.
///
/// Computes social insurance premiums, national income tax, residence tax
/// and the Furusato Nozei donation limit for a year of income.
#[derive(Debug, Parser)]
#[command(name = "takehome", version)]
struct Cli {
    /// Also append log records to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    tables: TablesArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Calculate take-home pay for a single income.
    Calc(CalcArgs),
    /// Calculate take-home pay for every row of an input CSV file.
    Batch(BatchArgs),
}

/// Reference table overrides; built-in 2025 tables when omitted.
#[derive(Debug, Args)]
struct TablesArgs {
    /// Premium bracket CSV replacing the built-in employee tables.
    #[arg(long, global = true)]
    brackets: Option<PathBuf>,

    /// NHI parameter CSV replacing the built-in regional parameters.
    #[arg(long, global = true)]
    nhi: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct CalcArgs {
    /// Gross annual income in yen (commas allowed).
    #[arg(long, value_parser = parse_decimal)]
    income: Decimal,

    /// Business or other non-salary income.
    #[arg(long)]
    self_employed: bool,

    /// Aged 40-64 and liable for the long-term care premium.
    #[arg(long)]
    ltc: bool,

    #[arg(long, default_value = "Tokyo", value_parser = parse_prefecture)]
    prefecture: Prefecture,

    /// `kyokai-kenpo` or `nhi`. Defaults to the scheme matching the income type.
    #[arg(long, value_parser = parse_provider)]
    provider: Option<HealthInsuranceProvider>,

    /// Number of general dependents.
    #[arg(long, default_value_t = 0)]
    dependents: u32,

    /// Annual iDeCo contributions in yen.
    #[arg(long, value_parser = parse_decimal)]
    dc: Option<Decimal>,

    /// Print JSON instead of a text report.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct BatchArgs {
    /// Input CSV; see `input_loader` for the columns.
    #[arg(long)]
    file: PathBuf,

    /// Print a JSON array instead of text reports.
    #[arg(long)]
    json: bool,
}

fn parse_prefecture(s: &str) -> Result<Prefecture, String> {
    Prefecture::parse(s).ok_or_else(|| format!("unknown prefecture '{s}'"))
}

fn parse_provider(s: &str) -> Result<HealthInsuranceProvider, String> {
    HealthInsuranceProvider::parse(s)
        .ok_or_else(|| format!("unknown provider '{s}' (expected kyokai-kenpo or nhi)"))
}

impl CalcArgs {
    /// Replays the flags as form events so the CLI follows the same
    /// provider rules as any other front end.
    fn to_state(&self) -> FormState {
        let mut events = vec![
            FormEvent::IncomeChanged(self.income),
            FormEvent::EmploymentIncomeToggled(!self.self_employed),
            FormEvent::LongTermCareToggled(self.ltc),
            FormEvent::PrefectureSelected(self.prefecture),
            FormEvent::DependentsChanged(self.dependents),
        ];
        if let Some(provider) = self.provider {
            events.push(FormEvent::ProviderSelected(provider));
        }
        if let Some(dc) = self.dc {
            events.push(FormEvent::DcContributionsChanged(dc));
        }
        events.into_iter().fold(FormState::default(), reduce)
    }
}

// ─── commands ────────────────────────────────────────────────────────────────

fn run_calc(
    calculator: &TakeHomeCalculator<'_>,
    args: &CalcArgs,
) -> Result<()> {
    let input = args.to_state().to_input();
    debug!(?input, "calculating");

    let result = calculator
        .calculate(&input)
        .context("Calculation failed")?;

    if args.json {
        println!("{}", report::render_json(&input, &result)?);
    } else {
        print!("{}", report::render_text(&input, &result));
    }
    Ok(())
}

fn run_batch(
    calculator: &TakeHomeCalculator<'_>,
    args: &BatchArgs,
) -> Result<()> {
    let inputs = input_loader::load_from_file(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    info!("Loaded {} inputs from {}", inputs.len(), args.file.display());

    let results = inputs
        .iter()
        .enumerate()
        .map(|(idx, input)| {
            let _row = info_span!("row", number = idx + 1).entered();
            calculator
                .calculate(input)
                .with_context(|| format!("Calculation failed for row {}", idx + 1))
        })
        .collect::<Result<Vec<_>>>()?;

    if args.json {
        let entries: Vec<ReportEntry<'_>> = inputs
            .iter()
            .zip(&results)
            .map(|(input, result)| ReportEntry { input, result })
            .collect();
        println!("{}", report::render_json_batch(&entries)?);
    } else {
        for (idx, (input, result)) in inputs.iter().zip(&results).enumerate() {
            if idx > 0 {
                println!("{}", "─".repeat(58));
            }
            print!("{}", report::render_text(input, result));
        }
    }
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    logging::init_default_logging();

    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    let tables_config = TablesConfig {
        brackets: cli.tables.brackets,
        nhi: cli.tables.nhi,
    };
    if !tables_config.is_builtin() {
        debug!(?tables_config, "loading reference tables");
    }
    let tables = tables_config
        .open()
        .context("Failed to load reference tables")?;
    let calculator = TakeHomeCalculator::new(&tables);

    match &cli.command {
        Command::Calc(args) => {
            let _span = info_span!("calc").entered();
            run_calc(&calculator, args)
        }
        Command::Batch(args) => {
            let _span = info_span!("batch").entered();
            run_batch(&calculator, args)
        }
    }
}
