//! Compound Planner CLI
//!
//! Command-line interface for running savings-plan projections

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use compound_planner::{
    params::{load_scenarios, DEFAULT_TAX_RATE},
    projection::DEFAULT_SAFE_WITHDRAWAL_RATE,
    report::{render_summary, write_yearly_csv},
    ContributionTiming, InvestmentParams, ProjectionConfig, ScenarioRunner, SimulationResult,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliContributionTiming {
    Start,
    End,
}

impl From<CliContributionTiming> for ContributionTiming {
    fn from(value: CliContributionTiming) -> Self {
        match value {
            CliContributionTiming::Start => ContributionTiming::StartOfMonth,
            CliContributionTiming::End => ContributionTiming::EndOfMonth,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "compound_planner",
    about = "Monthly compound-growth projection with tax, inflation and FIRE estimates"
)]
struct Cli {
    #[arg(long, default_value_t = 0.0)]
    initial_capital: f64,
    #[arg(long, default_value_t = 100.0)]
    monthly_contribution: f64,
    #[arg(
        long,
        default_value_t = 7.0,
        allow_negative_numbers = true,
        help = "Nominal annual return in percent, e.g. 7"
    )]
    annual_rate: f64,
    #[arg(long, default_value_t = 10)]
    years: u32,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true, help = "Annual inflation in percent")]
    inflation_rate: f64,
    #[arg(long, help = "Apply capital-gains tax to the interest earned")]
    apply_tax: bool,
    #[arg(long, help = "Capital-gains tax rate in percent; defaults to --default-tax-rate")]
    tax_rate: Option<f64>,
    #[arg(long, value_enum, default_value_t = CliContributionTiming::Start)]
    contribution_timing: CliContributionTiming,
    #[arg(long, default_value_t = DEFAULT_TAX_RATE)]
    default_tax_rate: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_SAFE_WITHDRAWAL_RATE,
        help = "Safe annual withdrawal fraction for the FIRE estimate"
    )]
    withdrawal_rate: f64,
    #[arg(long, help = "Write the yearly rows to this CSV file")]
    csv: Option<PathBuf>,
    #[arg(long, help = "Print the full result as JSON instead of the report")]
    json: bool,
    #[arg(long, help = "Run every scenario in this CSV file instead of a single projection")]
    scenarios: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> ProjectionConfig {
        ProjectionConfig {
            contribution_timing: self.contribution_timing.into(),
            default_tax_rate: self.default_tax_rate,
            safe_withdrawal_rate: self.withdrawal_rate,
        }
    }

    fn params(&self) -> InvestmentParams {
        InvestmentParams {
            initial_capital: self.initial_capital,
            monthly_contribution: self.monthly_contribution,
            annual_interest_rate: self.annual_rate,
            years: self.years,
            inflation_rate: self.inflation_rate,
            apply_tax: self.apply_tax,
            tax_rate: self.tax_rate,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let runner = ScenarioRunner::with_config(cli.config());

    if let Some(path) = &cli.scenarios {
        return run_scenario_file(&runner, path);
    }

    let params = cli.params();
    let result = runner.run(&params);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_table(&result);
        println!();
        print!(
            "{}",
            render_summary(
                &params,
                &result,
                runner.config().safe_withdrawal_rate,
                chrono::Local::now().date_naive(),
            )
        );
    }

    if let Some(path) = &cli.csv {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_yearly_csv(BufWriter::new(file), &result)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("Yearly rows written to {}", path.display());
    }

    Ok(())
}

fn print_table(result: &SimulationResult) {
    println!("{:>4} {:>16} {:>16} {:>16}", "Year", "Invested", "Interest", "Balance");
    println!("{}", "-".repeat(55));
    for row in &result.data {
        println!(
            "{:>4} {:>16.2} {:>16.2} {:>16.2}",
            row.year, row.total_invested, row.interest_earned, row.total_balance
        );
    }
}

fn run_scenario_file(runner: &ScenarioRunner, path: &Path) -> Result<()> {
    let scenarios = load_scenarios(path).with_context(|| format!("loading scenarios from {}", path.display()))?;
    let results = runner.run_named(&scenarios);

    println!(
        "{:<20} {:>14} {:>14} {:>14} {:>14} {:>12}",
        "Scenario", "Final", "Invested", "Net", "Real", "FIRE/month"
    );
    println!("{}", "-".repeat(93));
    for (name, result) in &results {
        println!(
            "{:<20} {:>14.2} {:>14.2} {:>14.2} {:>14.2} {:>12.2}",
            name,
            result.final_balance,
            result.total_invested,
            result.net_balance,
            result.purchasing_power,
            result.fire_monthly_income,
        );
    }

    Ok(())
}
