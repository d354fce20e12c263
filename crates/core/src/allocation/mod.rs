pub mod allocation_model;
pub mod allocation_service;

pub use allocation_model::{AllocationGroup, GroupBy};
pub use allocation_service::aggregate;
