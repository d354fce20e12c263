use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for internal calculations
pub const DECIMAL_PRECISION: u32 = 6;

/// Drift percentage below which an entry is considered on target.
/// Twice this value is the boundary between medium and high severity.
pub const DEFAULT_DRIFT_THRESHOLD: Decimal = dec!(5);

/// Maximum number of rebalancing suggestions surfaced by default
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Fallback sector labels for positions without a sector classification.
/// Assigned by position index so the same input always yields the same
/// grouping.
pub const FALLBACK_SECTORS: [&str; 5] = [
    "Technology",
    "Healthcare",
    "Finance",
    "Consumer",
    "Energy",
];

/// Fallback country labels for positions without a country classification
pub const FALLBACK_COUNTRIES: [&str; 5] = [
    "United States",
    "United Kingdom",
    "Germany",
    "France",
    "Japan",
];

/// Picks a deterministic fallback label for the position at `index`.
pub fn fallback_label(labels: &'static [&'static str], index: usize) -> &'static str {
    labels[index % labels.len()]
}
