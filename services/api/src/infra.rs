use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use homewise::engine::{
    PortfolioBundle, PortfolioRepository, ReasoningError, ReasoningProvider, RepositoryError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Record store used until a real persistence adapter lands; the engine
/// only ever sees the trait.
#[derive(Default, Clone)]
pub(crate) struct InMemoryPortfolioRepository {
    bundles: Arc<Mutex<HashMap<String, PortfolioBundle>>>,
}

impl PortfolioRepository for InMemoryPortfolioRepository {
    fn fetch(&self, portfolio_id: &str) -> Result<Option<PortfolioBundle>, RepositoryError> {
        let guard = self.bundles.lock().expect("repository mutex poisoned");
        Ok(guard.get(portfolio_id).cloned())
    }

    fn store(&self, portfolio_id: &str, bundle: PortfolioBundle) -> Result<(), RepositoryError> {
        let mut guard = self.bundles.lock().expect("repository mutex poisoned");
        guard.insert(portfolio_id.to_string(), bundle);
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>, RepositoryError> {
        let guard = self.bundles.lock().expect("repository mutex poisoned");
        let mut ids: Vec<String> = guard.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}

/// Stand-in for the text-generation collaborator: a fixed template over the
/// numeric highlights. Reports remain valid if this is swapped for a no-op.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct TemplateReasoningProvider;

impl ReasoningProvider for TemplateReasoningProvider {
    fn narrate(
        &self,
        subject: &str,
        highlights: &[String],
    ) -> Result<Option<String>, ReasoningError> {
        if highlights.is_empty() {
            return Ok(None);
        }
        Ok(Some(format!(
            "Summary of {subject}: {}.",
            highlights.join("; ")
        )))
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}
