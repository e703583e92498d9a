//! Scenario runner for batch projections
//!
//! Holds one configured engine and projects many parameter sets with it,
//! in parallel where the batch is independent.

use crate::params::{InvestmentParams, NamedScenario, RiskProfile};
use crate::projection::{ProjectionConfig, ProjectionEngine, SimulationResult};
use rayon::prelude::*;

/// Pre-configured runner for batch projections
///
/// # Example
/// ```
/// use compound_planner::{InvestmentParams, ScenarioRunner};
///
/// let runner = ScenarioRunner::new();
/// let sweep = runner.run_rate_sweep(&InvestmentParams::default(), &[3.0, 7.0, 12.0]);
/// assert_eq!(sweep.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create runner with the default projection config
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    /// Run a single projection
    pub fn run(&self, params: &InvestmentParams) -> SimulationResult {
        self.engine.project(params)
    }

    /// Run projections for many parameter sets; output order matches input order
    pub fn run_batch(&self, params: &[InvestmentParams]) -> Vec<SimulationResult> {
        log::info!("Running batch of {} projections", params.len());
        params.par_iter().map(|p| self.engine.project(p)).collect()
    }

    /// Run named scenarios, keeping each name next to its result
    pub fn run_named(&self, scenarios: &[NamedScenario]) -> Vec<(String, SimulationResult)> {
        log::info!("Running {} named scenarios", scenarios.len());
        scenarios
            .par_iter()
            .map(|s| (s.name.clone(), self.engine.project(&s.params)))
            .collect()
    }

    /// Re-run one parameter set at each annual rate
    pub fn run_rate_sweep(&self, params: &InvestmentParams, rates: &[f64]) -> Vec<(f64, SimulationResult)> {
        rates
            .par_iter()
            .map(|&rate| (rate, self.engine.project(&params.with_annual_rate(rate))))
            .collect()
    }

    /// Run one parameter set under every risk profile
    pub fn run_profiles(&self, params: &InvestmentParams) -> Vec<(RiskProfile, SimulationResult)> {
        RiskProfile::ALL
            .iter()
            .map(|&profile| (profile, self.engine.project(&params.with_annual_rate(profile.annual_rate()))))
            .collect()
    }

    pub fn config(&self) -> &ProjectionConfig {
        self.engine.config()
    }
}
