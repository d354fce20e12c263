pub mod rebalancing_model;
pub mod rebalancing_service;

pub use rebalancing_model::{
    AllocationTarget, Difficulty, DriftConfig, DriftEntry, DriftSeverity, Priority,
    RebalancingSuggestion, SuggestionAction, SuggestionConfig, SuggestionImpact, SuggestionType,
};
pub use rebalancing_service::{compute_drift, rank_suggestions};
