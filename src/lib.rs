//! Compound Planner - monthly compound-growth projections for savings plans
//!
//! This library provides:
//! - Month-by-month accumulation with annual sampling
//! - Capital-gains tax, inflation-adjusted purchasing power and a 4%-rule income estimate
//! - Batch and rate-sweep scenario runs
//! - CSV / plain-text reporting and an optional advisory collaborator seam

pub mod error;
pub mod money;
pub mod params;
pub mod projection;
pub mod scenario;
pub mod report;
pub mod advisory;

// Re-export commonly used types
pub use error::PlannerError;
pub use params::{InvestmentParams, RiskProfile};
pub use projection::{project, ProjectionEngine, ProjectionConfig, ContributionTiming, SimulationResult, YearlyData};
pub use scenario::ScenarioRunner;
