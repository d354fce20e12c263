//! Allocation models for portfolio breakdown by classification.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, ValidationError};
use crate::holdings::Position;
use crate::utils::decimal_serde::decimal_serde;

/// Dimension holdings are grouped by.
///
/// `None` puts each position in its own one-member group, which is what
/// the "top holdings" views aggregate over.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum GroupBy {
    Sector,
    Country,
    AssetKind,
    None,
}

impl GroupBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupBy::Sector => "sector",
            GroupBy::Country => "country",
            GroupBy::AssetKind => "assetKind",
            GroupBy::None => "none",
        }
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupBy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sector" => Ok(GroupBy::Sector),
            "country" => Ok(GroupBy::Country),
            "assetKind" => Ok(GroupBy::AssetKind),
            "none" => Ok(GroupBy::None),
            other => Err(Error::Validation(ValidationError::UnknownField(
                other.to_string(),
            ))),
        }
    }
}

/// Aggregate produced by one grouping run.
///
/// Percentages across all groups of a run sum to 100 (within tolerance)
/// whenever the run's total value is non-zero.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllocationGroup {
    /// Group label, e.g. "Technology"
    pub name: String,
    /// Summed market value of the members
    #[serde(with = "decimal_serde")]
    pub value: Decimal,
    /// Share of the run's total value, 0-100
    #[serde(with = "decimal_serde")]
    pub percentage: Decimal,
    /// Number of member positions
    pub count: usize,
    /// Member positions, for drill-down views
    pub positions: Vec<Position>,
}
