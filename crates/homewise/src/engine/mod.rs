//! The scoring, ranking, allocation, and projection engine.
//!
//! Every component here is a stateless pure function over immutable inputs:
//! no I/O, no shared mutable state, no clock access. Callers may invoke the
//! engine repeatedly and concurrently with no coordination; caching, if
//! wanted, belongs to the caller.

pub mod benchmark;
pub mod constants;
pub mod domain;
pub mod health;
pub mod import;
pub mod normalizer;
pub mod opportunity;
pub mod projection;
pub mod repository;
pub mod service;

#[cfg(test)]
mod tests;

pub use benchmark::{
    compare_to_benchmark, BenchmarkReport, ClimateZone, ComparisonRating, MetricComparison,
    UserMetrics,
};
pub use health::{compute_health_score, HealthBreakdown, HealthScore};
pub use import::{HistoryImportError, HistoryImporter};
pub use opportunity::{
    allocate_budget, collect_and_rank_options, collect_options, rank_options, AllocationEntry, AllocationPlan,
    CapitalOption, CapitalOptionKind, StrengthTier,
};
pub use projection::{
    simulate_projection, simulate_scenario, Projection, ProjectionInputs, ProjectionRow, Scenario,
};
pub use repository::{
    NullReasoningProvider, PortfolioBundle, PortfolioRepository, ReasoningError,
    ReasoningProvider, RepositoryError,
};
pub use service::{AdvisorError, AdvisorReport, AdvisorService, ScenarioProjection};
