use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use payout_cli::app::{self, FormArgs};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Vacation payout calculator.
///
/// Derives the salary-period and vacation dates from today's date, applies
/// the overrides given here, and prints the four payout totals.
#[derive(Debug, Parser)]
struct Cli {
    /// Monthly basic salary. Required for a calculation to proceed.
    #[arg(long)]
    basic_salary: Option<String>,

    /// Housing allowance, paid flat.
    #[arg(long)]
    housing_allowance: Option<String>,

    /// Monthly transport allowance, pro-rated over the worked days.
    #[arg(long)]
    transport_allowance: Option<String>,

    /// Monthly food allowance, pro-rated over the worked days.
    #[arg(long)]
    food_allowance: Option<String>,

    /// Production bonus, paid flat.
    #[arg(long)]
    production_bonus: Option<String>,

    /// Fixed allowances, paid flat.
    #[arg(long)]
    fixed_allowances: Option<String>,

    /// Monthly other allowances, pro-rated over the worked days.
    #[arg(long)]
    other_allowances: Option<String>,

    /// GOSI withholding.
    #[arg(long)]
    gosi: Option<String>,

    /// First day of the salary period (YYYY-MM-DD).
    /// Defaults to day 2 of the current month.
    #[arg(long)]
    salary_from: Option<NaiveDate>,

    /// Vacation start date (YYYY-MM-DD). Defaults to today.
    /// Moving it also moves the end date to 30 days after it.
    #[arg(long)]
    vacation_start: Option<NaiveDate>,

    /// Vacation end date (YYYY-MM-DD). Defaults to 30 days after the start.
    #[arg(long)]
    vacation_end: Option<NaiveDate>,

    /// Vacation type: annual, personal, or encashment.
    #[arg(long, default_value = "annual")]
    vacation_type: String,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let today = Local::now().date_naive();
    debug!("deriving form defaults from {}", today);

    let args = FormArgs {
        basic_salary: cli.basic_salary,
        housing_allowance: cli.housing_allowance,
        transport_allowance: cli.transport_allowance,
        food_allowance: cli.food_allowance,
        production_bonus: cli.production_bonus,
        fixed_allowances: cli.fixed_allowances,
        other_allowances: cli.other_allowances,
        gosi: cli.gosi,
        salary_from: cli.salary_from,
        vacation_start: cli.vacation_start,
        vacation_end: cli.vacation_end,
        vacation_type: Some(cli.vacation_type),
    };

    println!("{}", app::run(&args, today)?);
    Ok(())
}
