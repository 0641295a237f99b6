//! Geometric clearance queries, groundwork for contact detection.

use crate::core::vec2::Vec2;

/// Clearance between a circle and the infinite line through `p1` and `p2`.
///
/// The line is taken in implicit form `Ax + By + C = 0`; the result is the
/// perpendicular distance from `center` minus `radius`, floored at zero
/// (an overlapping circle reports `0.0`). The measurement is against the
/// extended line, not the bounded segment: a circle beyond either endpoint
/// still sees the extension.
///
/// Coincident `p1`/`p2` make the line degenerate and the result NaN; the
/// caller must supply distinct points.
pub fn distance_from_circle_to_line(center: Vec2, radius: f64, p1: Vec2, p2: Vec2) -> f64 {
    let a = p2.y - p1.y;
    let b = p1.x - p2.x;
    let c = -(a * p1.x + b * p1.y);

    let distance_center_to_line =
        (a * center.x + b * center.y + c).abs() / (a * a + b * b).sqrt();

    // Not f64::max: that would turn the degenerate-input NaN into 0.0.
    let clearance = distance_center_to_line - radius;
    if clearance < 0.0 {
        0.0
    } else {
        clearance
    }
}
