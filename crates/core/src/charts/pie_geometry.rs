//! Pie-slice geometry for SVG donut/pie charts.
//!
//! Pure arithmetic: values in, angles and path commands out. Angles are
//! kept in degrees and converted to radians only where `cos`/`sin` are
//! evaluated. Rendering is someone else's job.

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Chart placement in SVG user units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PieLayout {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
}

impl Default for PieLayout {
    fn default() -> Self {
        Self {
            center_x: 100.0,
            center_y: 100.0,
            radius: 90.0,
        }
    }
}

/// One computed slice: its start angle, sweep angle (both degrees,
/// clockwise from the positive x axis) and the SVG path drawing it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SliceGeometry {
    pub start_angle: f64,
    pub angle: f64,
    pub path: String,
}

/// Converts a list of values into pie slices.
///
/// Each slice's sweep is its share of the value sum scaled to 360
/// degrees; slices start where the previous one ended, beginning at 0.
/// A zero sum produces one zero-sweep slice per value instead of NaN
/// angles.
pub fn compute_slices(values: &[Decimal], layout: &PieLayout) -> Vec<SliceGeometry> {
    let total: Decimal = values.iter().sum();

    let mut slices = Vec::with_capacity(values.len());
    let mut start_angle = 0.0_f64;
    for value in values {
        let angle = if total > Decimal::ZERO {
            let fraction = (value / total).to_f64().unwrap_or(0.0);
            fraction * 360.0
        } else {
            0.0
        };
        slices.push(SliceGeometry {
            start_angle,
            angle,
            path: slice_path(layout, start_angle, angle),
        });
        start_angle += angle;
    }
    slices
}

/// Builds the SVG path for a slice: move to center, line to the arc
/// start, arc to the end, close back to center. Sweep flag is fixed at
/// 1 (clockwise); the large-arc flag is set for sweeps past 180
/// degrees.
fn slice_path(layout: &PieLayout, start_angle: f64, angle: f64) -> String {
    let (start_x, start_y) = point_at(layout, start_angle);
    let (end_x, end_y) = point_at(layout, start_angle + angle);
    let large_arc_flag = if angle > 180.0 { 1 } else { 0 };

    format!(
        "M {:.4} {:.4} L {:.4} {:.4} A {:.4} {:.4} 0 {} 1 {:.4} {:.4} Z",
        layout.center_x,
        layout.center_y,
        start_x,
        start_y,
        layout.radius,
        layout.radius,
        large_arc_flag,
        end_x,
        end_y,
    )
}

/// Point on the circle at the given angle in degrees.
fn point_at(layout: &PieLayout, angle_degrees: f64) -> (f64, f64) {
    let radians = angle_degrees.to_radians();
    (
        layout.center_x + layout.radius * radians.cos(),
        layout.center_y + layout.radius * radians.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn thirty_seventy_split_closes_the_circle() {
        let slices = compute_slices(&[dec!(30), dec!(70)], &PieLayout::default());
        assert_eq!(slices.len(), 2);

        assert!((slices[0].start_angle - 0.0).abs() < EPSILON);
        assert!((slices[0].angle - 108.0).abs() < EPSILON);

        assert!((slices[1].start_angle - 108.0).abs() < EPSILON);
        assert!((slices[1].angle - 252.0).abs() < EPSILON);

        let end = slices[1].start_angle + slices[1].angle;
        assert!((end - 360.0).abs() < EPSILON);
    }

    #[test]
    fn zero_sum_produces_zero_sweep_slices() {
        let slices = compute_slices(&[dec!(0), dec!(0)], &PieLayout::default());
        assert_eq!(slices.len(), 2);
        for slice in &slices {
            assert_eq!(slice.angle, 0.0);
            assert!(!slice.path.contains("NaN"));
        }
    }

    #[test]
    fn large_arc_flag_set_past_half_circle() {
        let slices = compute_slices(&[dec!(1), dec!(3)], &PieLayout::default());
        // 90 degree slice: small arc
        assert!(slices[0].path.contains("A 90.0000 90.0000 0 0 1"));
        // 270 degree slice: large arc
        assert!(slices[1].path.contains("A 90.0000 90.0000 0 1 1"));
    }

    #[test]
    fn single_value_takes_the_full_circle() {
        let slices = compute_slices(&[dec!(42)], &PieLayout::default());
        assert_eq!(slices.len(), 1);
        assert!((slices[0].angle - 360.0).abs() < EPSILON);
    }

    #[test]
    fn empty_input_yields_no_slices() {
        assert!(compute_slices(&[], &PieLayout::default()).is_empty());
    }

    #[test]
    fn path_starts_at_the_center() {
        let layout = PieLayout {
            center_x: 50.0,
            center_y: 60.0,
            radius: 40.0,
        };
        let slices = compute_slices(&[dec!(1), dec!(1)], &layout);
        assert!(slices[0].path.starts_with("M 50.0000 60.0000 L 90.0000 60.0000"));
    }
}
