use std::f64::consts::PI;

use crate::core::vec2::Vec2;

/// Leaf geometric primitive. Immutable once constructed; knows its own
/// density and computes its own mass and local centre of mass.
#[derive(Clone, Debug)]
pub enum Body {
    /// Line primitive between two points in the parent's local frame
    Segment { from: Vec2, to: Vec2, density: f64 },
    /// Ellipse with per-axis radii, centred in the parent's local frame
    Ellipse { centre: Vec2, radius: Vec2, density: f64 },
}

impl Body {
    /// Mass of the primitive.
    ///
    /// Segment mass is `|to.length() - from.length()| * density`: the
    /// difference of the endpoints' distances from the origin, not the
    /// segment's physical length. Ellipse mass is `π * rx² * density`,
    /// using only the x radius. Both formulas are the defined behaviour
    /// of the visualiser and are kept exactly.
    pub fn mass(&self) -> f64 {
        match self {
            Body::Segment { from, to, density } => (to.length() - from.length()).abs() * density,
            Body::Ellipse { radius, density, .. } => PI * radius.x * radius.x * density,
        }
    }

    /// Centre of mass in the parent's local frame
    pub fn centre_of_mass(&self) -> Vec2 {
        match self {
            Body::Segment { from, to, .. } => Vec2::new((from.x + to.x) / 2.0, (from.y + to.y) / 2.0),
            Body::Ellipse { centre, .. } => *centre,
        }
    }

    pub fn density(&self) -> f64 {
        match self {
            Body::Segment { density, .. } => *density,
            Body::Ellipse { density, .. } => *density,
        }
    }
}
