pub mod holdings_filter;
pub mod holdings_model;

pub use holdings_filter::{filter_pies, HoldingsFilter};
pub use holdings_model::{AssetKind, Pie, Position, RiskMetrics};
