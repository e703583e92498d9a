//! Plain-text and CSV output for projection results

use crate::error::PlannerError;
use crate::money::{format_eur, round_cents};
use crate::params::InvestmentParams;
use crate::projection::SimulationResult;
use chrono::NaiveDate;
use std::io;

/// Write the yearly rows as CSV (`year,totalInvested,interestEarned,totalBalance`)
pub fn write_yearly_csv<W: io::Write>(writer: W, result: &SimulationResult) -> Result<(), PlannerError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in &result.data {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Render a human-readable summary of a projection
///
/// `withdrawal_rate` is the annual fraction the FIRE figure was computed with.
pub fn render_summary(
    params: &InvestmentParams,
    result: &SimulationResult,
    withdrawal_rate: f64,
    generated_on: NaiveDate,
) -> String {
    let title = format!("Savings plan report ({})", generated_on.format("%Y-%m-%d"));
    let mut out = String::new();

    out.push_str(&format!("{}\n", title));
    out.push_str(&format!("{}\n", "=".repeat(title.chars().count())));
    push_line(&mut out, "Initial capital:", format_eur(params.initial_capital));
    push_line(&mut out, "Monthly contribution:", format_eur(params.monthly_contribution));
    push_line(&mut out, "Annual return:", format!("{:.2}%", params.annual_interest_rate));
    push_line(&mut out, "Horizon:", format!("{} years", params.years));
    push_line(&mut out, "Inflation:", format!("{:.2}%", params.inflation_rate));
    out.push('\n');

    push_line(&mut out, "Final balance:", format_eur(result.final_balance));
    push_line(&mut out, "Total invested:", format_eur(result.total_invested));
    push_line(
        &mut out,
        "Interest earned:",
        format!("{}{}", sign(result.total_interest), format_eur(result.total_interest)),
    );

    if params.apply_tax {
        push_line(&mut out, "Capital-gains tax:", format_eur(result.tax_amount));
    } else {
        push_line(&mut out, "Capital-gains tax:", "not applied".to_string());
    }

    push_line(&mut out, "Net balance:", format_eur(result.net_balance));
    push_line(&mut out, "Purchasing power:", format_eur(result.purchasing_power));
    push_line(
        &mut out,
        "FIRE income:",
        format!(
            "{} / month ({}% withdrawal)",
            format_eur(result.fire_monthly_income),
            round_cents(withdrawal_rate * 100.0)
        ),
    );

    out
}

fn push_line(out: &mut String, label: &str, value: String) {
    out.push_str(&format!("{:<24}{}\n", label, value));
}

fn sign(value: f64) -> &'static str {
    if value.round() > 0.0 {
        "+"
    } else {
        ""
    }
}
