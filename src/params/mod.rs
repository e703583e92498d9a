//! Investment parameters and scenario input

mod data;
pub mod loader;

pub use data::{InvestmentParams, RiskProfile, DEFAULT_TAX_RATE};
pub use loader::{load_scenarios, load_scenarios_from_reader, NamedScenario};
