//! Grouping of holdings into allocation breakdowns.

use std::collections::HashMap;

use log::debug;
use rust_decimal::Decimal;

use crate::constants::{fallback_label, FALLBACK_COUNTRIES, FALLBACK_SECTORS};
use crate::holdings::{AssetKind, Position};

use super::{AllocationGroup, GroupBy};

/// Groups positions by the requested dimension and computes per-group
/// totals, counts and percentages of the overall value.
///
/// With [`GroupBy::None`] every position becomes its own one-member
/// group keyed by position id, so two positions holding the same
/// instrument (e.g. the same stock in two pies) stay separate. Missing
/// classification tags fall back to a deterministic label derived from
/// the position's index, so a given input always produces the same
/// grouping. When the total value is zero every percentage is zero.
/// Output is ordered by value descending; groups of equal value keep
/// first-seen order.
pub fn aggregate(positions: &[Position], group_by: GroupBy) -> Vec<AllocationGroup> {
    if positions.is_empty() {
        return Vec::new();
    }

    let mut groups: Vec<AllocationGroup> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();

    for (position_index, position) in positions.iter().enumerate() {
        let (key, name) = group_key(position, position_index, group_by);
        let index = *index_by_key.entry(key).or_insert_with(|| {
            groups.push(AllocationGroup {
                name,
                value: Decimal::ZERO,
                percentage: Decimal::ZERO,
                count: 0,
                positions: Vec::new(),
            });
            groups.len() - 1
        });
        let group = &mut groups[index];
        group.value += position.market_value;
        group.count += 1;
        group.positions.push(position.clone());
    }

    let total_value: Decimal = groups.iter().map(|g| g.value).sum();
    for group in &mut groups {
        group.percentage = if total_value > Decimal::ZERO {
            group.value / total_value * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };
    }

    // Stable sort keeps first-seen order among equal values
    groups.sort_by(|a, b| b.value.cmp(&a.value));

    debug!(
        "Aggregated {} positions into {} groups by {}",
        positions.len(),
        groups.len(),
        group_by
    );

    groups
}

/// Resolves the accumulator key and display label for a single
/// position. The two only differ for [`GroupBy::None`], where the key
/// is the position id but the group is labeled by symbol.
fn group_key(position: &Position, position_index: usize, group_by: GroupBy) -> (String, String) {
    let name = match group_by {
        GroupBy::Sector => position
            .sector
            .clone()
            .unwrap_or_else(|| fallback_label(&FALLBACK_SECTORS, position_index).to_string()),
        GroupBy::Country => position
            .country
            .clone()
            .unwrap_or_else(|| fallback_label(&FALLBACK_COUNTRIES, position_index).to_string()),
        GroupBy::AssetKind => position
            .asset_kind
            .unwrap_or(AssetKind::Other)
            .display_name()
            .to_string(),
        GroupBy::None => return (position.id.clone(), position.symbol.clone()),
    };
    (name.clone(), name)
}
