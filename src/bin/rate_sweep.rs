//! Project the default savings plan under each risk profile
//!
//! Writes one row per profile to rate_sweep_output.csv

use anyhow::{Context, Result};
use compound_planner::{InvestmentParams, ScenarioRunner};

#[derive(Debug, serde::Serialize)]
struct SweepRow {
    profile: &'static str,
    annual_rate: f64,
    final_balance: f64,
    total_invested: f64,
    total_interest: f64,
    purchasing_power: f64,
    fire_monthly_income: f64,
}

fn main() -> Result<()> {
    env_logger::init();

    let params = InvestmentParams::default();
    let runner = ScenarioRunner::new();
    let results = runner.run_profiles(&params);

    let output_path = "rate_sweep_output.csv";
    let mut writer = csv::Writer::from_path(output_path).context("Failed to create output file")?;

    for (profile, result) in &results {
        writer.serialize(SweepRow {
            profile: profile.label(),
            annual_rate: profile.annual_rate(),
            final_balance: result.final_balance,
            total_invested: result.total_invested,
            total_interest: result.total_interest,
            purchasing_power: result.purchasing_power,
            fire_monthly_income: result.fire_monthly_income,
        })?;
        println!(
            "  {:<13} {:>5.1}%  final={:>12.2}  interest={:>12.2}",
            profile.label(),
            profile.annual_rate(),
            result.final_balance,
            result.total_interest,
        );
    }
    writer.flush()?;

    println!("Output written to {}", output_path);
    Ok(())
}
