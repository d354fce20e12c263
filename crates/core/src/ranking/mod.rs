pub mod sort_model;
pub mod sort_service;

pub use sort_model::{
    GroupSortField, HoldingSortField, PieSortField, SortConfig, SortDirection, SortKey,
};
pub use sort_service::{sort_groups, sort_pies, sort_positions};
