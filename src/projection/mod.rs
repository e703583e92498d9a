//! Projection engine for monthly compound-growth projections

mod state;
mod engine;
mod results;

pub use state::AccumulationState;
pub use engine::{project, ProjectionEngine, ProjectionConfig, ContributionTiming, DEFAULT_SAFE_WITHDRAWAL_RATE};
pub use results::{YearlyData, SimulationResult, ProjectionSummary};
