//! Core projection engine for monthly compound-growth projections

use crate::money::round_cents;
use crate::params::{InvestmentParams, DEFAULT_TAX_RATE};
use super::results::{SimulationResult, YearlyData};
use super::state::AccumulationState;
use serde::{Deserialize, Serialize};

/// Safe annual withdrawal as a fraction of net capital (the 4% rule)
pub const DEFAULT_SAFE_WITHDRAWAL_RATE: f64 = 0.04;

/// Configuration for a projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// When the monthly contribution lands relative to interest accrual
    pub contribution_timing: ContributionTiming,

    /// Tax rate (percent) used when the parameters leave it unset
    pub default_tax_rate: f64,

    /// Annual withdrawal fraction for the retirement-income estimate
    pub safe_withdrawal_rate: f64,
}

/// Ordering of contribution and interest within a month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContributionTiming {
    /// Contribution first, so it earns that month's interest
    StartOfMonth,
    /// Interest first, contribution afterwards (ordinary annuity)
    EndOfMonth,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            contribution_timing: ContributionTiming::StartOfMonth,
            default_tax_rate: DEFAULT_TAX_RATE,
            safe_withdrawal_rate: DEFAULT_SAFE_WITHDRAWAL_RATE,
        }
    }
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run projection for a single parameter set
    ///
    /// Total over its numeric domain: nothing is validated and no input is
    /// rejected. Zero years yields only the year-0 row.
    pub fn project(&self, params: &InvestmentParams) -> SimulationResult {
        let mut state = AccumulationState::from_params(params);
        let mut data = Vec::new();
        data.push(YearlyData::starting_point(params.initial_capital));

        for _month in 1..=params.total_months() {
            state.advance_month(self.config.contribution_timing);

            if state.is_year_end() {
                data.push(state.snapshot());
            }
        }

        let result = self.finish(params, &state, data);
        log::debug!(
            "Projected {} years at {}%: final={:.2} invested={:.2} net={:.2}",
            params.years,
            params.annual_interest_rate,
            result.final_balance,
            result.total_invested,
            result.net_balance,
        );
        result
    }

    /// Derive the headline figures from the final state
    fn finish(&self, params: &InvestmentParams, state: &AccumulationState, data: Vec<YearlyData>) -> SimulationResult {
        let final_balance = round_cents(state.balance);
        let total_invested = round_cents(state.invested);
        // Recomputed from the rounded figures, not copied from the last row
        let total_interest = round_cents(final_balance - total_invested);

        let tax_amount = if params.apply_tax && total_interest > 0.0 {
            let rate = params.effective_tax_rate(self.config.default_tax_rate);
            round_cents(total_interest * (rate / 100.0))
        } else {
            0.0
        };

        let net_balance = round_cents(final_balance - tax_amount);

        let inflation_factor = (1.0 + params.inflation_rate / 100.0).powf(params.years as f64);
        let purchasing_power = round_cents(net_balance / inflation_factor);

        let fire_monthly_income = round_cents((net_balance * self.config.safe_withdrawal_rate) / 12.0);

        SimulationResult {
            data,
            final_balance,
            total_invested,
            total_interest,
            net_balance,
            tax_amount,
            purchasing_power,
            fire_monthly_income,
        }
    }
}

/// Project with the default configuration
pub fn project(params: &InvestmentParams) -> SimulationResult {
    ProjectionEngine::default().project(params)
}
