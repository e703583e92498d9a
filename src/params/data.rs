//! Investment parameter records

use serde::{Deserialize, Serialize};

/// Capital-gains tax rate (percent) used when none is supplied
pub const DEFAULT_TAX_RATE: f64 = 26.0;

/// Inputs for a single projection run
///
/// Rates are percentages (7.0 means 7%). No validation is performed here; the
/// engine accepts any values and follows the formulas literally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentParams {
    /// Starting balance
    pub initial_capital: f64,

    /// Amount added every month
    pub monthly_contribution: f64,

    /// Nominal annual rate, compounded monthly
    pub annual_interest_rate: f64,

    /// Projection horizon in years
    pub years: u32,

    /// Annual inflation, only used to deflate the final balance
    pub inflation_rate: f64,

    /// Whether capital-gains tax is applied to the interest earned
    pub apply_tax: bool,

    /// Capital-gains tax rate; `None` falls back to the configured default
    #[serde(default)]
    pub tax_rate: Option<f64>,
}

impl InvestmentParams {
    /// Monthly compounding rate as a decimal
    pub fn monthly_rate(&self) -> f64 {
        self.annual_interest_rate / 100.0 / 12.0
    }

    /// Number of compounding periods in the horizon
    pub fn total_months(&self) -> u64 {
        u64::from(self.years) * 12
    }

    pub fn effective_tax_rate(&self, default_rate: f64) -> f64 {
        self.tax_rate.unwrap_or(default_rate)
    }

    /// Copy of these parameters with a different annual rate
    pub fn with_annual_rate(&self, annual_interest_rate: f64) -> Self {
        Self {
            annual_interest_rate,
            ..self.clone()
        }
    }
}

impl Default for InvestmentParams {
    /// 100/month at 7% for 10 years, no starting capital
    fn default() -> Self {
        Self {
            initial_capital: 0.0,
            monthly_contribution: 100.0,
            annual_interest_rate: 7.0,
            years: 10,
            inflation_rate: 0.0,
            apply_tax: false,
            tax_rate: None,
        }
    }
}

/// Return assumptions offered as presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskProfile {
    Conservative,
    Balanced,
    Aggressive,
}

impl RiskProfile {
    pub const ALL: [RiskProfile; 3] = [
        RiskProfile::Conservative,
        RiskProfile::Balanced,
        RiskProfile::Aggressive,
    ];

    /// Annual return in percent
    pub fn annual_rate(&self) -> f64 {
        match self {
            RiskProfile::Conservative => 3.0,
            RiskProfile::Balanced => 7.0,
            RiskProfile::Aggressive => 12.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskProfile::Conservative => "Conservative",
            RiskProfile::Balanced => "Balanced",
            RiskProfile::Aggressive => "Aggressive",
        }
    }
}
