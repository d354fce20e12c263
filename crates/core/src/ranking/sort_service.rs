//! Stable, direction-aware sorting over typed field accessors.

use crate::allocation::AllocationGroup;
use crate::holdings::{Pie, Position};

use super::sort_model::{GroupSortField, HoldingSortField, PieSortField, SortDirection, SortKey};

/// Sorts a copy of `items` by the key accessor. `Vec::sort_by` is
/// stable, and equal keys compare `Equal` in either direction, so
/// duplicates keep their input order for both ascending and descending
/// sorts.
fn sort_by_key<T, K>(items: &[T], key: K, direction: SortDirection) -> Vec<T>
where
    T: Clone,
    K: Fn(&T) -> SortKey,
{
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = key(a).compare(&key(b));
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}

pub fn sort_positions(
    positions: &[Position],
    field: HoldingSortField,
    direction: SortDirection,
) -> Vec<Position> {
    sort_by_key(positions, |p| field.key(p), direction)
}

pub fn sort_groups(
    groups: &[AllocationGroup],
    field: GroupSortField,
    direction: SortDirection,
) -> Vec<AllocationGroup> {
    sort_by_key(groups, |g| field.key(g), direction)
}

pub fn sort_pies(pies: &[Pie], field: PieSortField, direction: SortDirection) -> Vec<Pie> {
    sort_by_key(pies, |p| field.key(p), direction)
}
