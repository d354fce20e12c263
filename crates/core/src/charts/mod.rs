pub mod pie_geometry;

pub use pie_geometry::{compute_slices, PieLayout, SliceGeometry};
