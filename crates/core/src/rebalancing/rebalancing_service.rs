//! Drift computation and suggestion ranking.

use std::collections::HashMap;

use log::debug;
use rust_decimal::Decimal;

use crate::errors::Result;

use super::rebalancing_model::{
    AllocationTarget, DriftConfig, DriftEntry, Priority, RebalancingSuggestion, SuggestionConfig,
};

/// Compares current allocations against targets and returns one drift
/// entry per current allocation, ordered for display: severity rank
/// descending, then absolute drift percentage descending. Entries with
/// equal keys keep their relative input order.
///
/// A current allocation with no matching target is treated as pure
/// overweight (target 0); targets with no current counterpart are
/// ignored. Fails only on an invalid config (non-positive threshold);
/// empty inputs are fine and yield an empty result.
pub fn compute_drift(
    current: &[AllocationTarget],
    target: &[AllocationTarget],
    config: &DriftConfig,
) -> Result<Vec<DriftEntry>> {
    config.validate()?;

    let target_by_name: HashMap<&str, &AllocationTarget> =
        target.iter().map(|t| (t.name.as_str(), t)).collect();

    let mut entries: Vec<DriftEntry> = current
        .iter()
        .map(|c| {
            let (target_percentage, target_value) = target_by_name
                .get(c.name.as_str())
                .map(|t| (t.percentage, t.value))
                .unwrap_or((Decimal::ZERO, Decimal::ZERO));
            DriftEntry {
                name: c.name.clone(),
                current_percentage: c.percentage,
                target_percentage,
                current_value: c.value,
                target_value,
                drift: c.value - target_value,
                drift_percentage: c.percentage - target_percentage,
            }
        })
        .collect();

    entries.sort_by(|a, b| {
        let severity_a = a.severity(config.threshold).rank();
        let severity_b = b.severity(config.threshold).rank();
        severity_b
            .cmp(&severity_a)
            .then_with(|| b.drift_percentage.abs().cmp(&a.drift_percentage.abs()))
    });

    debug!(
        "Computed drift for {} allocations against {} targets (threshold {})",
        current.len(),
        target.len(),
        config.threshold
    );

    Ok(entries)
}

/// Ranks rebalancing suggestions for display: priority rank descending,
/// ties broken by drift reduction descending, then truncated to the
/// configured cap. Truncation happens after sorting so a long input can
/// never push a high-priority suggestion off the list. The input is
/// left untouched. Fails only on an invalid config (zero cap).
pub fn rank_suggestions(
    suggestions: &[RebalancingSuggestion],
    config: &SuggestionConfig,
    priority_filter: Option<Priority>,
) -> Result<Vec<RebalancingSuggestion>> {
    config.validate()?;

    let mut ranked: Vec<RebalancingSuggestion> = suggestions
        .iter()
        .filter(|s| priority_filter.is_none_or(|p| s.priority == p))
        .cloned()
        .collect();

    ranked.sort_by(|a, b| {
        b.priority
            .rank()
            .cmp(&a.priority.rank())
            .then_with(|| b.impact.drift_reduction.cmp(&a.impact.drift_reduction))
    });

    ranked.truncate(config.max_count);
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rebalancing::rebalancing_model::{
        Difficulty, DriftSeverity, SuggestionImpact, SuggestionType,
    };
    use rust_decimal_macros::dec;

    fn allocation(name: &str, percentage: Decimal, value: Decimal) -> AllocationTarget {
        AllocationTarget {
            name: name.to_string(),
            percentage,
            value,
        }
    }

    fn suggestion(id: &str, priority: Priority, drift_reduction: Decimal) -> RebalancingSuggestion {
        RebalancingSuggestion {
            id: id.to_string(),
            suggestion_type: SuggestionType::Rebalance,
            priority,
            current_allocation: dec!(50),
            target_allocation: dec!(40),
            suggested_amount: dec!(1000),
            impact: SuggestionImpact {
                drift_reduction,
                risk_improvement: None,
                cost_estimate: None,
            },
            actions: vec![],
            reasoning: vec![],
            estimated_time: None,
            difficulty: Difficulty::Easy,
        }
    }

    #[test]
    fn drift_is_zero_when_current_matches_target() {
        let current = vec![
            allocation("Equity", dec!(60), dec!(6000)),
            allocation("Bonds", dec!(40), dec!(4000)),
        ];
        let config = DriftConfig::default();
        let entries = compute_drift(&current, &current, &config).unwrap();
        for entry in &entries {
            assert_eq!(entry.drift, Decimal::ZERO);
            assert_eq!(entry.drift_percentage, Decimal::ZERO);
            assert_eq!(entry.severity(config.threshold), DriftSeverity::Low);
        }
    }

    #[test]
    fn missing_target_is_pure_overweight() {
        let current = vec![allocation("Crypto", dec!(12), dec!(1200))];
        let entries = compute_drift(&current, &[], &DriftConfig::default()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].target_percentage, Decimal::ZERO);
        assert_eq!(entries[0].drift, dec!(1200));
        assert_eq!(entries[0].drift_percentage, dec!(12));
        assert_eq!(
            entries[0].severity(dec!(5)),
            DriftSeverity::High
        );
    }

    #[test]
    fn entries_sorted_by_severity_then_magnitude() {
        let current = vec![
            allocation("Small", dec!(22), dec!(2200)),
            allocation("Mid", dec!(37), dec!(3700)),
            allocation("Large", dec!(41), dec!(4100)),
        ];
        let target = vec![
            allocation("Small", dec!(20), dec!(2000)),  // drift 2 -> low
            allocation("Mid", dec!(30), dec!(3000)),    // drift 7 -> medium
            allocation("Large", dec!(30), dec!(3000)),  // drift 11 -> high
        ];
        let entries = compute_drift(&current, &target, &DriftConfig::default()).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Large", "Mid", "Small"]);
    }

    #[test]
    fn sort_is_stable_for_equal_drift() {
        let current = vec![
            allocation("First", dec!(27), dec!(2700)),
            allocation("Second", dec!(27), dec!(2700)),
        ];
        let target = vec![
            allocation("First", dec!(20), dec!(2000)),
            allocation("Second", dec!(20), dec!(2000)),
        ];
        let entries = compute_drift(&current, &target, &DriftConfig::default()).unwrap();
        assert_eq!(entries[0].name, "First");
        assert_eq!(entries[1].name, "Second");
    }

    #[test]
    fn suggestions_rank_by_priority_then_impact() {
        let suggestions = vec![
            suggestion("a", Priority::Low, dec!(1)),
            suggestion("b", Priority::High, dec!(3)),
            suggestion("c", Priority::High, dec!(9)),
            suggestion("d", Priority::Medium, dec!(2)),
        ];
        let ranked = rank_suggestions(&suggestions, &SuggestionConfig::default(), None).unwrap();
        let ids: Vec<&str> = ranked.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "d", "a"]);
    }

    #[test]
    fn truncation_happens_after_sorting() {
        let suggestions = vec![
            suggestion("low-1", Priority::Low, dec!(1)),
            suggestion("low-2", Priority::Low, dec!(1)),
            suggestion("high", Priority::High, dec!(5)),
        ];
        let config = SuggestionConfig { max_count: 1 };
        let ranked = rank_suggestions(&suggestions, &config, None).unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].id, "high");
    }

    #[test]
    fn priority_filter_keeps_only_matching() {
        let suggestions = vec![
            suggestion("a", Priority::Low, dec!(1)),
            suggestion("b", Priority::High, dec!(3)),
        ];
        let ranked =
            rank_suggestions(&suggestions, &SuggestionConfig::default(), Some(Priority::High))
                .unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].id, "b");
    }

    #[test]
    fn non_positive_threshold_is_rejected() {
        let current = vec![allocation("Equity", dec!(60), dec!(6000))];
        let config = DriftConfig {
            threshold: dec!(0),
        };
        assert!(compute_drift(&current, &current, &config).is_err());
        let negative = DriftConfig {
            threshold: dec!(-5),
        };
        assert!(compute_drift(&current, &current, &negative).is_err());
    }

    #[test]
    fn zero_suggestion_cap_is_rejected() {
        let suggestions = vec![suggestion("a", Priority::High, dec!(1))];
        let config = SuggestionConfig { max_count: 0 };
        assert!(rank_suggestions(&suggestions, &config, None).is_err());
    }

    #[test]
    fn input_is_not_mutated() {
        let suggestions = vec![
            suggestion("a", Priority::Low, dec!(1)),
            suggestion("b", Priority::High, dec!(3)),
        ];
        let before = suggestions.clone();
        let _ = rank_suggestions(&suggestions, &SuggestionConfig::default(), None);
        assert_eq!(suggestions, before);
    }
}
