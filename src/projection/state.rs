//! Month-by-month accumulation state

use crate::money::round_cents;
use crate::params::InvestmentParams;
use super::engine::ContributionTiming;
use super::results::YearlyData;

/// Balance of a plan at a point in time during projection
#[derive(Debug, Clone)]
pub struct AccumulationState {
    /// Months elapsed (0 = before the first contribution)
    pub month: u64,

    /// Current balance, unrounded
    pub balance: f64,

    /// Cumulative contributions including initial capital, unrounded
    pub invested: f64,

    /// Interest credited in the most recent month
    pub last_interest: f64,

    monthly_rate: f64,
    monthly_contribution: f64,
}

impl AccumulationState {
    /// Initialize state at projection start
    pub fn from_params(params: &InvestmentParams) -> Self {
        Self {
            month: 0,
            balance: params.initial_capital,
            invested: params.initial_capital,
            last_interest: 0.0,
            monthly_rate: params.monthly_rate(),
            monthly_contribution: params.monthly_contribution,
        }
    }

    /// Advance one compounding period
    pub fn advance_month(&mut self, timing: ContributionTiming) {
        self.month += 1;

        match timing {
            ContributionTiming::StartOfMonth => {
                self.contribute();
                self.accrue();
            }
            ContributionTiming::EndOfMonth => {
                self.accrue();
                self.contribute();
            }
        }
    }

    fn contribute(&mut self) {
        self.balance += self.monthly_contribution;
        self.invested += self.monthly_contribution;
    }

    fn accrue(&mut self) {
        self.last_interest = self.balance * self.monthly_rate;
        self.balance += self.last_interest;
    }

    /// True when a full year has elapsed at the current month
    pub fn is_year_end(&self) -> bool {
        self.month > 0 && self.month % 12 == 0
    }

    /// Year-end record with each figure rounded to cents independently
    pub fn snapshot(&self) -> YearlyData {
        YearlyData {
            year: u32::try_from(self.month / 12).unwrap_or(u32::MAX),
            total_invested: round_cents(self.invested),
            interest_earned: round_cents(self.balance - self.invested),
            total_balance: round_cents(self.balance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn params() -> InvestmentParams {
        InvestmentParams {
            initial_capital: 1000.0,
            monthly_contribution: 100.0,
            annual_interest_rate: 12.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_contribution_accrues_same_month() {
        let mut state = AccumulationState::from_params(&params());
        state.advance_month(ContributionTiming::StartOfMonth);

        // (1000 + 100) * 1.01
        assert_abs_diff_eq!(state.balance, 1111.0, epsilon = 1e-9);
        assert_abs_diff_eq!(state.last_interest, 11.0, epsilon = 1e-9);
        assert_eq!(state.invested, 1100.0);
    }

    #[test]
    fn test_end_of_month_contribution() {
        let mut state = AccumulationState::from_params(&params());
        state.advance_month(ContributionTiming::EndOfMonth);

        // 1000 * 1.01 + 100
        assert_abs_diff_eq!(state.balance, 1110.0, epsilon = 1e-9);
        assert_eq!(state.invested, 1100.0);
    }

    #[test]
    fn test_snapshot_year_beyond_u32_months() {
        let mut state = AccumulationState::from_params(&params());
        state.month = u64::from(u32::MAX) * 12;

        assert!(state.is_year_end());
        assert_eq!(state.snapshot().year, u32::MAX);
    }

    #[test]
    fn test_year_end_detection() {
        let mut state = AccumulationState::from_params(&params());
        assert!(!state.is_year_end());

        for _ in 0..11 {
            state.advance_month(ContributionTiming::StartOfMonth);
            assert!(!state.is_year_end());
        }
        state.advance_month(ContributionTiming::StartOfMonth);
        assert!(state.is_year_end());

        let row = state.snapshot();
        assert_eq!(row.year, 1);
        assert_eq!(row.total_invested, 2200.0);
        assert_abs_diff_eq!(row.total_balance, row.total_invested + row.interest_earned, epsilon = 0.011);
    }
}
