use crate::core::vec2::Vec2;

/// Instantaneous force applied to a composite for one tick.
///
/// The application point feeds only the moment calculation in
/// `Composite::physics_step`; net-force integration ignores it.
#[derive(Clone, Copy, Debug)]
pub struct Force {
    pub direction: Vec2,
    pub position: Vec2,
}

impl Force {
    pub fn new(direction: Vec2, position: Vec2) -> Self {
        Self { direction, position }
    }
}
