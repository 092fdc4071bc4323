use serde::{Deserialize, Serialize};

use super::domain::{
    EquitySnapshot, InspectionRecord, PreservationRecommendation, PropertyContext, SystemRecord,
    TaskRecord, UpgradeRecord,
};

/// Everything the engine needs for one portfolio, pre-fetched and
/// normalized. No query semantics leak past this boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioBundle {
    pub context: PropertyContext,
    pub systems: Vec<SystemRecord>,
    pub tasks: Vec<TaskRecord>,
    pub inspections: Vec<InspectionRecord>,
    pub preservation: Vec<PreservationRecommendation>,
    pub upgrades: Vec<UpgradeRecord>,
    pub equity: Vec<EquitySnapshot>,
}

impl PortfolioBundle {
    pub fn total_market_value(&self) -> f64 {
        self.equity
            .iter()
            .map(|snapshot| snapshot.current_market_value)
            .sum()
    }

    pub fn total_debt(&self) -> f64 {
        self.equity
            .iter()
            .map(|snapshot| snapshot.mortgage_balance)
            .sum()
    }
}

/// Storage abstraction so the advisor service can be exercised in
/// isolation.
pub trait PortfolioRepository: Send + Sync {
    fn fetch(&self, portfolio_id: &str) -> Result<Option<PortfolioBundle>, RepositoryError>;
    fn store(&self, portfolio_id: &str, bundle: PortfolioBundle) -> Result<(), RepositoryError>;
    fn list(&self) -> Result<Vec<String>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("portfolio not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Opaque text-generation collaborator. Implementations may attach a
/// human-readable narrative to a report; the engine's numeric output is
/// complete and valid without one.
pub trait ReasoningProvider: Send + Sync {
    fn narrate(&self, subject: &str, highlights: &[String]) -> Result<Option<String>, ReasoningError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ReasoningError {
    #[error("reasoning provider unavailable: {0}")]
    Unavailable(String),
}

/// Default no-op provider; reports simply carry no narrative.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReasoningProvider;

impl ReasoningProvider for NullReasoningProvider {
    fn narrate(&self, _subject: &str, _highlights: &[String]) -> Result<Option<String>, ReasoningError> {
        Ok(None)
    }
}
