//! Composite-body tree: recursive mass/centre-of-mass aggregation and
//! forward Euler integration.
//!
//! A `Composite` owns an ordered mixed collection of leaf `Body`
//! primitives and nested composites. Children form a tree: no sharing,
//! no cycles. Each composite carries its own kinematic state and
//! aggregates mass and centre of mass over its direct children. The
//! external driver re-arms each root with fresh forces every tick and
//! calls `physics_step`; nested composites integrate with whatever
//! forces they were last given.

use crate::core::vec2::Vec2;
use crate::domain::body::Body;
use crate::domain::force::Force;

/// Child slot of a composite: a leaf primitive or a nested composite.
///
/// Closed sum type with exhaustive dispatch, so tree traversal never
/// relies on capability probing.
#[derive(Clone, Debug)]
pub enum Node {
    Body(Body),
    Composite(Composite),
}

impl Node {
    pub fn mass(&self) -> f64 {
        match self {
            Node::Body(b) => b.mass(),
            Node::Composite(c) => c.mass(),
        }
    }

    /// Centre of mass in the owning composite's local frame
    pub fn centre_of_mass(&self) -> Vec2 {
        match self {
            Node::Body(b) => b.centre_of_mass(),
            Node::Composite(c) => c.centre_of_mass(),
        }
    }
}

/// Kinematic snapshot captured at construction, consumed only by reset.
#[derive(Clone, Copy, Debug)]
struct KinematicState {
    position: Vec2,
    velocity: Vec2,
    rotation: f64,
}

/// Aggregate node of the body tree.
#[derive(Clone, Debug)]
pub struct Composite {
    pub name: String,
    /// World position of the composite's local origin
    pub position: Vec2,
    pub velocity: Vec2,
    /// Rotation about the centre of mass. Tracked but never driven:
    /// the moment computed in `physics_step` is not applied to it.
    pub rotation: f64,
    /// Fixed composites never move, whatever forces they carry
    fixed: bool,
    initial: KinematicState,
    applied_forces: Vec<Force>,
    pub children: Vec<Node>,
}

impl Composite {
    pub fn new(
        name: impl Into<String>,
        position: Vec2,
        velocity: Vec2,
        fixed: bool,
        children: Vec<Node>,
    ) -> Self {
        Self {
            name: name.into(),
            position,
            velocity,
            rotation: 0.0,
            fixed,
            initial: KinematicState {
                position,
                velocity,
                rotation: 0.0,
            },
            applied_forces: Vec::new(),
            children,
        }
    }

    pub fn fixed(&self) -> bool {
        self.fixed
    }

    pub fn applied_forces(&self) -> &[Force] {
        &self.applied_forces
    }

    /// Total mass: sum of `mass()` over direct children, recursing into
    /// nested composites. Recomputed on every call, no caching.
    pub fn mass(&self) -> f64 {
        self.children.iter().map(Node::mass).sum()
    }

    /// Mass-weighted average of the direct children's local centres of
    /// mass, in insertion order.
    ///
    /// Divides by the total child mass with no zero guard: a composite
    /// whose children sum to zero mass yields NaN components, which then
    /// propagate through integration. Keeping every composite at positive
    /// mass is the caller's contract.
    pub fn centre_of_mass(&self) -> Vec2 {
        let mut total_mass = 0.0;
        let mut weighted = Vec2::zero();
        for child in &self.children {
            let m = child.mass();
            let com = child.centre_of_mass();
            total_mass += m;
            weighted.x += m * com.x;
            weighted.y += m * com.y;
        }
        Vec2::new(weighted.x / total_mass, weighted.y / total_mass)
    }

    /// Advance one tick with the forces the driver derived for this root.
    ///
    /// The forces replace `applied_forces` before integration, making the
    /// per-tick re-arming an explicit input rather than a field mutated
    /// from outside. Nested composites are not re-armed: only the driver
    /// assigns forces, and only to roots.
    pub fn physics_step(&mut self, dt: f64, forces: &[Force]) {
        self.applied_forces.clear();
        self.applied_forces.extend_from_slice(forces);
        self.integrate(dt);
    }

    fn integrate(&mut self, dt: f64) {
        let com = self.centre_of_mass();

        // Moment about the centre of mass. Computed but never applied to
        // `rotation`; angular dynamics are out of scope.
        let mut total_moment = 0.0;
        for f in &self.applied_forces {
            total_moment += (f.position.x - com.x).abs() * f.direction.x;
        }
        let _ = total_moment;

        let mut net_force = Vec2::zero();
        for f in &self.applied_forces {
            net_force = net_force + f.direction;
        }

        if !self.fixed {
            let mass = self.mass();
            let acceleration = Vec2::new(net_force.x / mass, net_force.y / mass);
            self.velocity = self.velocity + acceleration * dt;
            self.position = self.position + self.velocity * dt;
        }

        for child in &mut self.children {
            if let Node::Composite(c) = child {
                c.integrate(dt);
            }
        }
    }

    /// Restore the construction-time kinematic snapshot for this node and
    /// its direct composite children.
    ///
    /// One level only: grandchildren keep their current state. Deepening
    /// the recursion would change observable reset semantics for nested
    /// scenes, so the limitation stands.
    pub fn reset_simulation(&mut self) {
        self.restore_initial();
        for child in &mut self.children {
            if let Node::Composite(c) = child {
                c.restore_initial();
            }
        }
    }

    fn restore_initial(&mut self) {
        self.position = self.initial.position;
        self.velocity = self.initial.velocity;
        self.rotation = self.initial.rotation;
    }
}
