//! Projection output records

use serde::{Deserialize, Serialize};

/// Year-end snapshot of a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyData {
    /// 0 is the starting point
    pub year: u32,

    /// Cumulative contributions including initial capital
    pub total_invested: f64,

    /// Balance minus contributions at this point
    pub interest_earned: f64,

    pub total_balance: f64,
}

impl YearlyData {
    /// Year-0 record; carried at input precision, not rounded
    pub fn starting_point(initial_capital: f64) -> Self {
        Self {
            year: 0,
            total_invested: initial_capital,
            interest_earned: 0.0,
            total_balance: initial_capital,
        }
    }
}

/// Complete projection result
///
/// `total_interest` is recomputed from the rounded `final_balance` and
/// `total_invested`, so it can differ by a cent from the last row's
/// `interest_earned`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// One row per elapsed year, `years + 1` rows in total
    pub data: Vec<YearlyData>,
    pub final_balance: f64,
    pub total_invested: f64,
    pub total_interest: f64,
    /// Final balance after capital-gains tax
    pub net_balance: f64,
    pub tax_amount: f64,
    /// Net balance in today's money
    pub purchasing_power: f64,
    /// Monthly income under the safe-withdrawal rule
    pub fire_monthly_income: f64,
}

impl SimulationResult {
    /// Projection horizon covered by `data`
    pub fn years(&self) -> u32 {
        self.data.last().map(|r| r.year).unwrap_or(0)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let growth_multiple = if self.total_invested > 0.0 {
            Some(self.final_balance / self.total_invested)
        } else {
            None
        };

        ProjectionSummary {
            years: self.years(),
            final_balance: self.final_balance,
            total_invested: self.total_invested,
            total_interest: self.total_interest,
            net_balance: self.net_balance,
            growth_multiple,
            interest_share: if self.final_balance > 0.0 {
                self.total_interest / self.final_balance
            } else {
                0.0
            },
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub years: u32,
    pub final_balance: f64,
    pub total_invested: f64,
    pub total_interest: f64,
    pub net_balance: f64,
    /// Final balance per unit invested; `None` when nothing was invested
    pub growth_multiple: Option<f64>,
    /// Fraction of the final balance that is interest
    pub interest_share: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SimulationResult {
        SimulationResult {
            data: vec![
                YearlyData::starting_point(1000.0),
                YearlyData { year: 1, total_invested: 2200.0, interest_earned: 150.0, total_balance: 2350.0 },
            ],
            final_balance: 2350.0,
            total_invested: 2200.0,
            total_interest: 150.0,
            net_balance: 2311.0,
            tax_amount: 39.0,
            purchasing_power: 2311.0,
            fire_monthly_income: 7.7,
        }
    }

    #[test]
    fn test_starting_point_unrounded() {
        let row = YearlyData::starting_point(1234.5678);
        assert_eq!(row.year, 0);
        assert_eq!(row.total_balance, 1234.5678);
        assert_eq!(row.interest_earned, 0.0);
    }

    #[test]
    fn test_summary() {
        let summary = sample().summary();
        assert_eq!(summary.years, 1);
        assert!((summary.growth_multiple.unwrap() - 2350.0 / 2200.0).abs() < 1e-12);
        assert!((summary.interest_share - 150.0 / 2350.0).abs() < 1e-12);
    }

    #[test]
    fn test_summary_without_contributions() {
        let result = SimulationResult {
            data: vec![YearlyData::starting_point(0.0)],
            final_balance: 0.0,
            total_invested: 0.0,
            total_interest: 0.0,
            net_balance: 0.0,
            tax_amount: 0.0,
            purchasing_power: 0.0,
            fire_monthly_income: 0.0,
        };
        let summary = result.summary();
        assert_eq!(summary.years, 0);
        assert!(summary.growth_multiple.is_none());
        assert_eq!(summary.interest_share, 0.0);
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["fireMonthlyIncome"], 7.7);
        assert_eq!(json["data"][1]["totalBalance"], 2350.0);
        assert_eq!(json["data"][1]["interestEarned"], 150.0);
    }

    #[test]
    fn test_summary_json_field_names() {
        let json = serde_json::to_value(sample().summary()).unwrap();
        assert_eq!(json["finalBalance"], 2350.0);
        assert_eq!(json["interestShare"], 150.0 / 2350.0);
        assert!(json.get("growth_multiple").is_none());
        assert!(json["growthMultiple"].is_number());
    }
}
