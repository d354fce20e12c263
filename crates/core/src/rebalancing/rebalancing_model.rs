use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DRIFT_THRESHOLD, DEFAULT_SUGGESTION_LIMIT};
use crate::errors::{Error, Result, ValidationError};
use crate::utils::decimal_serde::{decimal_serde, decimal_serde_option};

// ============================================================================
// Drift
// ============================================================================

/// One side of a drift comparison: a named slice of the portfolio with
/// its share and value. Used for both current and target allocations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllocationTarget {
    pub name: String,
    #[serde(with = "decimal_serde")]
    pub percentage: Decimal,
    #[serde(with = "decimal_serde")]
    pub value: Decimal,
}

impl AllocationTarget {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Allocation name cannot be empty".to_string(),
            )));
        }
        if !(Decimal::ZERO..=Decimal::ONE_HUNDRED).contains(&self.percentage) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Allocation percentage must be between 0 and 100".to_string(),
            )));
        }
        Ok(())
    }
}

/// How far an allocation has drifted from its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DriftSeverity {
    Low,
    Medium,
    High,
}

impl DriftSeverity {
    /// Numeric rank used as the primary display sort key.
    pub fn rank(&self) -> u8 {
        match self {
            DriftSeverity::Low => 1,
            DriftSeverity::Medium => 2,
            DriftSeverity::High => 3,
        }
    }

    /// Classifies a signed drift percentage against a threshold.
    /// `|drift| < threshold` is low, `< 2x threshold` medium, else high.
    pub fn classify(drift_percentage: Decimal, threshold: Decimal) -> Self {
        let magnitude = drift_percentage.abs();
        if magnitude < threshold {
            DriftSeverity::Low
        } else if magnitude < threshold * Decimal::TWO {
            DriftSeverity::Medium
        } else {
            DriftSeverity::High
        }
    }
}

/// Drift of one allocation against its target. Severity is derived via
/// [`DriftEntry::severity`], never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DriftEntry {
    pub name: String,
    #[serde(with = "decimal_serde")]
    pub current_percentage: Decimal,
    #[serde(with = "decimal_serde")]
    pub target_percentage: Decimal,
    #[serde(with = "decimal_serde")]
    pub current_value: Decimal,
    #[serde(with = "decimal_serde")]
    pub target_value: Decimal,
    /// current value minus target value, signed
    #[serde(with = "decimal_serde")]
    pub drift: Decimal,
    /// current percentage minus target percentage, signed
    #[serde(with = "decimal_serde")]
    pub drift_percentage: Decimal,
}

impl DriftEntry {
    pub fn severity(&self, threshold: Decimal) -> DriftSeverity {
        DriftSeverity::classify(self.drift_percentage, threshold)
    }
}

/// Drift computation parameters. The threshold carries the observed
/// dashboard default but is deliberately configurable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DriftConfig {
    #[serde(with = "decimal_serde")]
    pub threshold: Decimal,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_DRIFT_THRESHOLD,
        }
    }
}

impl DriftConfig {
    pub fn validate(&self) -> Result<()> {
        if self.threshold <= Decimal::ZERO {
            return Err(Error::InvalidConfigValue(format!(
                "Drift threshold must be positive, got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Suggestions
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SuggestionType {
    Buy,
    Sell,
    Rebalance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Numeric rank used as the primary ranking key.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Difficulty {
    Easy,
    Moderate,
    Advanced,
}

/// Expected effect of executing a suggestion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionImpact {
    #[serde(with = "decimal_serde")]
    pub drift_reduction: Decimal,
    #[serde(with = "decimal_serde_option", default)]
    pub risk_improvement: Option<Decimal>,
    #[serde(with = "decimal_serde_option", default)]
    pub cost_estimate: Option<Decimal>,
}

/// A single buy or sell step inside a suggestion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionAction {
    pub symbol: String,
    pub action_type: SuggestionType,
    #[serde(with = "decimal_serde")]
    pub amount: Decimal,
}

/// A rebalancing recommendation produced by the external suggestion
/// source. The engine only filters, ranks and truncates these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RebalancingSuggestion {
    pub id: String,
    pub suggestion_type: SuggestionType,
    pub priority: Priority,
    #[serde(with = "decimal_serde")]
    pub current_allocation: Decimal,
    #[serde(with = "decimal_serde")]
    pub target_allocation: Decimal,
    #[serde(with = "decimal_serde")]
    pub suggested_amount: Decimal,
    pub impact: SuggestionImpact,
    /// Ordered per-asset steps
    pub actions: Vec<SuggestionAction>,
    /// Free-text reasoning lines for display
    pub reasoning: Vec<String>,
    pub estimated_time: Option<String>,
    pub difficulty: Difficulty,
}

/// Suggestion ranking parameters; `max_count` caps the list after
/// sorting, never before.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SuggestionConfig {
    pub max_count: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            max_count: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

impl SuggestionConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_count == 0 {
            return Err(Error::InvalidConfigValue(
                "Suggestion limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
