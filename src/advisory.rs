//! Optional advisory collaborator
//!
//! An external text-generation service can comment on a projection. The
//! projection engine never depends on it; callers construct an
//! [`AdvisoryPanel`] explicitly and check [`AdvisoryPanel::present`] before
//! offering the feature.

use crate::error::PlannerError;
use crate::params::InvestmentParams;
use crate::projection::SimulationResult;
use serde::Serialize;
use std::fmt;

/// Inputs and headline results handed to an advisor
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryRequest {
    pub params: InvestmentParams,
    pub final_balance: f64,
    pub total_invested: f64,
    pub total_interest: f64,
    pub net_balance: f64,
    pub purchasing_power: f64,
}

impl AdvisoryRequest {
    pub fn new(params: &InvestmentParams, result: &SimulationResult) -> Self {
        Self {
            params: params.clone(),
            final_balance: result.final_balance,
            total_invested: result.total_invested,
            total_interest: result.total_interest,
            net_balance: result.net_balance,
            purchasing_power: result.purchasing_power,
        }
    }
}

/// A service that turns a projection into narrative advice
pub trait Advisor: Send + Sync {
    fn advise(&self, request: &AdvisoryRequest) -> Result<String, PlannerError>;
}

/// Credentials for an advisory service
#[derive(Clone)]
pub struct AdvisorCredentials {
    api_key: String,
}

impl AdvisorCredentials {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into() }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// A blank key means the service is not configured
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

impl fmt::Debug for AdvisorCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdvisorCredentials")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Slot for an optional advisor
#[derive(Default)]
pub struct AdvisoryPanel {
    advisor: Option<Box<dyn Advisor>>,
}

impl AdvisoryPanel {
    /// Panel with no advisor attached
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn with_advisor(advisor: Box<dyn Advisor>) -> Self {
        Self { advisor: Some(advisor) }
    }

    /// Build the advisor from credentials; unconfigured credentials leave the panel disabled
    pub fn from_credentials<F>(credentials: AdvisorCredentials, factory: F) -> Self
    where
        F: FnOnce(AdvisorCredentials) -> Box<dyn Advisor>,
    {
        if credentials.is_configured() {
            Self::with_advisor(factory(credentials))
        } else {
            log::warn!("Advisory credentials are empty; advisory panel disabled");
            Self::disabled()
        }
    }

    /// Capability flag
    pub fn present(&self) -> bool {
        self.advisor.is_some()
    }

    /// Ask the advisor about a projection; `Ok(None)` when no advisor is attached
    pub fn request(&self, params: &InvestmentParams, result: &SimulationResult) -> Result<Option<String>, PlannerError> {
        match &self.advisor {
            Some(advisor) => advisor.advise(&AdvisoryRequest::new(params, result)).map(Some),
            None => Ok(None),
        }
    }
}

impl fmt::Debug for AdvisoryPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdvisoryPanel")
            .field("present", &self.present())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::project;

    struct EchoAdvisor {
        key: String,
    }

    impl Advisor for EchoAdvisor {
        fn advise(&self, request: &AdvisoryRequest) -> Result<String, PlannerError> {
            Ok(format!("{}: {:.2}", self.key, request.final_balance))
        }
    }

    struct FailingAdvisor;

    impl Advisor for FailingAdvisor {
        fn advise(&self, _request: &AdvisoryRequest) -> Result<String, PlannerError> {
            Err(PlannerError::Advisory("quota exceeded".to_string()))
        }
    }

    fn echo_factory(credentials: AdvisorCredentials) -> Box<dyn Advisor> {
        Box::new(EchoAdvisor { key: credentials.api_key().to_string() })
    }

    #[test]
    fn test_disabled_panel_returns_none() {
        let params = InvestmentParams::default();
        let result = project(&params);
        let panel = AdvisoryPanel::disabled();

        assert!(!panel.present());
        assert_eq!(panel.request(&params, &result).unwrap(), None);
    }

    #[test]
    fn test_configured_panel_calls_advisor() {
        let params = InvestmentParams::default();
        let result = project(&params);
        let panel = AdvisoryPanel::from_credentials(AdvisorCredentials::new("k-123"), echo_factory);

        assert!(panel.present());
        assert_eq!(panel.request(&params, &result).unwrap(), Some("k-123: 17409.45".to_string()));
    }

    #[test]
    fn test_blank_credentials_disable_panel() {
        let panel = AdvisoryPanel::from_credentials(AdvisorCredentials::new("   "), echo_factory);
        assert!(!panel.present());
    }

    #[test]
    fn test_advisor_error_propagates() {
        let params = InvestmentParams::default();
        let result = project(&params);
        let panel = AdvisoryPanel::with_advisor(Box::new(FailingAdvisor));

        let err = panel.request(&params, &result).unwrap_err();
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[test]
    fn test_credentials_debug_redacts_key() {
        let debug = format!("{:?}", AdvisorCredentials::new("secret-key"));
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("redacted"));
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let params = InvestmentParams::default();
        let request = AdvisoryRequest::new(&params, &project(&params));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["params"]["annualInterestRate"], 7.0);
        assert_eq!(json["totalInvested"], 12000.0);
    }
}
