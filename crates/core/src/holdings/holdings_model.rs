use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::decimal_serde::{decimal_serde, decimal_serde_option};

/// Kind of tradable instrument a position holds.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum AssetKind {
    Stock,
    Etf,
    Fund,
    Bond,
    Crypto,
    Cash,
    Other,
}

impl AssetKind {
    /// Display name used as the group label when aggregating by kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            AssetKind::Stock => "Stock",
            AssetKind::Etf => "ETF",
            AssetKind::Fund => "Fund",
            AssetKind::Bond => "Bond",
            AssetKind::Crypto => "Crypto",
            AssetKind::Cash => "Cash",
            AssetKind::Other => "Other",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Risk metrics supplied by the analytics source.
///
/// The engine never computes these itself; a field stays `None` until a
/// real figure arrives from upstream.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RiskMetrics {
    #[serde(with = "decimal_serde_option", default)]
    pub volatility: Option<Decimal>,
    #[serde(with = "decimal_serde_option", default)]
    pub sharpe_ratio: Option<Decimal>,
    #[serde(with = "decimal_serde_option", default)]
    pub max_drawdown: Option<Decimal>,
    #[serde(with = "decimal_serde_option", default)]
    pub beta: Option<Decimal>,
}

impl RiskMetrics {
    pub fn is_empty(&self) -> bool {
        self.volatility.is_none()
            && self.sharpe_ratio.is_none()
            && self.max_drawdown.is_none()
            && self.beta.is_none()
    }
}

/// A single holding snapshot as fetched from the backend.
///
/// Immutable: refetches replace the whole collection, nothing is
/// updated in place.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(with = "decimal_serde")]
    pub quantity: Decimal,
    #[serde(with = "decimal_serde")]
    pub price: Decimal,
    #[serde(with = "decimal_serde")]
    pub market_value: Decimal,
    /// Unrealized profit and loss, signed.
    #[serde(with = "decimal_serde")]
    pub unrealized_gain: Decimal,
    #[serde(with = "decimal_serde_option", default)]
    pub unrealized_gain_pct: Option<Decimal>,

    // Classification tags; any of these may be missing on freshly
    // listed instruments.
    pub sector: Option<String>,
    pub country: Option<String>,
    pub asset_kind: Option<AssetKind>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub risk: Option<RiskMetrics>,

    /// Snapshot timestamp of the fetch that produced this position.
    pub as_of: DateTime<Utc>,
}

impl Position {
    /// Cost basis implied by the current value and unrealized gain.
    pub fn cost_basis(&self) -> Decimal {
        self.market_value - self.unrealized_gain
    }
}

/// A user-defined named sub-portfolio (Trading 212 "pie").
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pie {
    pub id: String,
    pub name: String,
    pub positions: Vec<Position>,
    /// Uninvested cash sitting inside the pie.
    #[serde(with = "decimal_serde")]
    pub cash: Decimal,
}

impl Pie {
    /// Market value of all positions plus uninvested cash.
    pub fn total_value(&self) -> Decimal {
        self.invested_value() + self.cash
    }

    /// Market value of the positions alone.
    pub fn invested_value(&self) -> Decimal {
        self.positions.iter().map(|p| p.market_value).sum()
    }

    /// Sum of unrealized gains across positions, signed.
    pub fn total_gain(&self) -> Decimal {
        self.positions.iter().map(|p| p.unrealized_gain).sum()
    }

    /// Total gain as a percentage of cost basis. `None` when the pie
    /// has no cost basis to measure against.
    pub fn total_gain_pct(&self) -> Option<Decimal> {
        let cost: Decimal = self.positions.iter().map(|p| p.cost_basis()).sum();
        if cost == Decimal::ZERO {
            None
        } else {
            Some(self.total_gain() / cost * Decimal::ONE_HUNDRED)
        }
    }

    pub fn position_count(&self) -> usize {
        self.positions.len()
    }
}
