//! Search and categorical filtering applied to holdings before
//! aggregation and sorting.

use serde::{Deserialize, Serialize};

use super::holdings_model::{AssetKind, Pie, Position};

/// Filter state for a holdings view.
///
/// The search term matches case-insensitively against name, symbol and
/// sector; categorical filters are exact-match AND conditions. An empty
/// filter is the identity transform.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct HoldingsFilter {
    pub search: String,
    pub sector: Option<String>,
    pub country: Option<String>,
    pub asset_kind: Option<AssetKind>,
}

impl HoldingsFilter {
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.sector.is_none()
            && self.country.is_none()
            && self.asset_kind.is_none()
    }

    /// True when the position passes both the search term and every
    /// set categorical filter.
    pub fn matches(&self, position: &Position) -> bool {
        self.matches_search(position) && self.matches_categories(position)
    }

    fn matches_search(&self, position: &Position) -> bool {
        let term = self.search.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        position.name.to_lowercase().contains(&term)
            || position.symbol.to_lowercase().contains(&term)
            || position
                .sector
                .as_deref()
                .is_some_and(|s| s.to_lowercase().contains(&term))
    }

    fn matches_categories(&self, position: &Position) -> bool {
        if let Some(sector) = &self.sector {
            if position.sector.as_deref() != Some(sector.as_str()) {
                return false;
            }
        }
        if let Some(country) = &self.country {
            if position.country.as_deref() != Some(country.as_str()) {
                return false;
            }
        }
        if let Some(kind) = self.asset_kind {
            if position.asset_kind != Some(kind) {
                return false;
            }
        }
        true
    }

    /// Returns the positions passing the filter, in input order.
    pub fn apply(&self, positions: &[Position]) -> Vec<Position> {
        if self.is_empty() {
            return positions.to_vec();
        }
        positions
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}

/// Filters pies by a case-insensitive substring match on the pie name.
pub fn filter_pies(pies: &[Pie], search: &str) -> Vec<Pie> {
    let term = search.trim().to_lowercase();
    if term.is_empty() {
        return pies.to_vec();
    }
    pies.iter()
        .filter(|pie| pie.name.to_lowercase().contains(&term))
        .cloned()
        .collect()
}
