//! Typed sort fields and view-level sort state.
//!
//! Every sortable field maps to a typed accessor returning a tagged
//! [`SortKey`], so a sort request over an unknown or mistyped field is
//! impossible to construct. The only failure mode left is parsing a
//! field name from its wire form, which surfaces as a validation error.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::allocation::AllocationGroup;
use crate::errors::{Error, ValidationError};
use crate::holdings::{Pie, Position};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Comparable key extracted from an item by a field accessor.
///
/// Text keys compare case-insensitively; numeric keys by value. A
/// single field always produces the same variant, so mixed comparisons
/// cannot occur in practice.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Text(String),
    Number(Decimal),
}

impl SortKey {
    pub fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (SortKey::Number(a), SortKey::Number(b)) => a.cmp(b),
            // Numbers sort before text if variants ever mix
            (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
            (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
        }
    }
}

/// Sortable fields of a [`Position`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum HoldingSortField {
    Name,
    Symbol,
    Quantity,
    Price,
    MarketValue,
    UnrealizedGain,
    Sector,
    Country,
}

impl HoldingSortField {
    pub fn key(&self, position: &Position) -> SortKey {
        match self {
            HoldingSortField::Name => SortKey::Text(position.name.clone()),
            HoldingSortField::Symbol => SortKey::Text(position.symbol.clone()),
            HoldingSortField::Quantity => SortKey::Number(position.quantity),
            HoldingSortField::Price => SortKey::Number(position.price),
            HoldingSortField::MarketValue => SortKey::Number(position.market_value),
            HoldingSortField::UnrealizedGain => SortKey::Number(position.unrealized_gain),
            HoldingSortField::Sector => {
                SortKey::Text(position.sector.clone().unwrap_or_default())
            }
            HoldingSortField::Country => {
                SortKey::Text(position.country.clone().unwrap_or_default())
            }
        }
    }
}

impl FromStr for HoldingSortField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(HoldingSortField::Name),
            "symbol" => Ok(HoldingSortField::Symbol),
            "quantity" => Ok(HoldingSortField::Quantity),
            "price" => Ok(HoldingSortField::Price),
            "marketValue" => Ok(HoldingSortField::MarketValue),
            "unrealizedGain" => Ok(HoldingSortField::UnrealizedGain),
            "sector" => Ok(HoldingSortField::Sector),
            "country" => Ok(HoldingSortField::Country),
            other => Err(Error::Validation(ValidationError::UnknownField(
                other.to_string(),
            ))),
        }
    }
}

/// Sortable fields of an [`AllocationGroup`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum GroupSortField {
    Name,
    Value,
    Percentage,
    Count,
}

impl GroupSortField {
    pub fn key(&self, group: &AllocationGroup) -> SortKey {
        match self {
            GroupSortField::Name => SortKey::Text(group.name.clone()),
            GroupSortField::Value => SortKey::Number(group.value),
            GroupSortField::Percentage => SortKey::Number(group.percentage),
            GroupSortField::Count => SortKey::Number(Decimal::from(group.count)),
        }
    }
}

/// Sortable fields of a [`Pie`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PieSortField {
    Name,
    Value,
    Gain,
}

impl PieSortField {
    pub fn key(&self, pie: &Pie) -> SortKey {
        match self {
            PieSortField::Name => SortKey::Text(pie.name.clone()),
            PieSortField::Value => SortKey::Number(pie.total_value()),
            PieSortField::Gain => SortKey::Number(pie.total_gain()),
        }
    }
}

/// View-level sort state.
///
/// Selecting the field the view is already sorted by flips the
/// direction; selecting a new field resets to descending. Lives only
/// for the current view session.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SortConfig<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: Copy + PartialEq> SortConfig<F> {
    pub fn new(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }

    pub fn select(&mut self, field: F) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field;
            self.direction = SortDirection::Desc;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn selecting_same_field_flips_direction() {
        let mut config = SortConfig::new(HoldingSortField::MarketValue);
        assert_eq!(config.direction, SortDirection::Desc);
        config.select(HoldingSortField::MarketValue);
        assert_eq!(config.direction, SortDirection::Asc);
        config.select(HoldingSortField::MarketValue);
        assert_eq!(config.direction, SortDirection::Desc);
    }

    #[test]
    fn selecting_new_field_resets_to_descending() {
        let mut config = SortConfig::new(HoldingSortField::MarketValue);
        config.select(HoldingSortField::MarketValue); // now ascending
        config.select(HoldingSortField::Name);
        assert_eq!(config.field, HoldingSortField::Name);
        assert_eq!(config.direction, SortDirection::Desc);
    }

    #[test]
    fn text_keys_compare_case_insensitively() {
        let a = SortKey::Text("apple".to_string());
        let b = SortKey::Text("Banana".to_string());
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(
            SortKey::Text("AAPL".to_string()).compare(&SortKey::Text("aapl".to_string())),
            Ordering::Equal
        );
    }

    #[test]
    fn number_keys_compare_by_value() {
        let a = SortKey::Number(dec!(1.5));
        let b = SortKey::Number(dec!(10));
        assert_eq!(a.compare(&b), Ordering::Less);
    }

    #[test]
    fn field_names_parse_from_wire_form() {
        assert_eq!(
            "marketValue".parse::<HoldingSortField>().unwrap(),
            HoldingSortField::MarketValue
        );
        let err = "marketCap".parse::<HoldingSortField>().unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::UnknownField(_))
        ));
    }
}
