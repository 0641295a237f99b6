//! Simulation driver core.
//!
//! `SimulationCore` owns the root composites and the per-tick loop: it
//! re-derives the gravity force for every root each tick, overwrites the
//! root's applied forces and steps it. The JS renderer reads positions,
//! masses and centres of mass back for display and never reproduces the
//! maths.

use crate::core::vec2::Vec2;
use crate::domain::force::Force;
use crate::domain::scene::parse_scene_json;
use crate::systems::composite::Composite;

mod facade;
mod render_state;

pub use facade::Simulation;

/// Gravity acceleration the driver applies when none is configured (m/s²)
pub const DEFAULT_GRAVITY_Y: f64 = -9.8;

/// The simulation: root composites plus driver state.
pub struct SimulationCore {
    roots: Vec<Composite>,
    running: bool,
    gravity: Vec2,
    frame: u64,
}

impl Default for SimulationCore {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationCore {
    /// Create an empty, stopped simulation with default gravity.
    pub fn new() -> Self {
        Self {
            roots: Vec::new(),
            running: false,
            gravity: Vec2::new(0.0, DEFAULT_GRAVITY_Y),
            frame: 0,
        }
    }

    /// Replace the scene with one built from a JSON description.
    /// Stops the simulation and rewinds the frame counter.
    pub fn load_scene_json(&mut self, json: &str) -> Result<(), String> {
        self.roots = parse_scene_json(json)?;
        self.running = false;
        self.frame = 0;
        Ok(())
    }

    /// Add a root composite assembled in code.
    pub fn add_root(&mut self, root: Composite) {
        self.roots.push(root);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    pub fn set_gravity(&mut self, x: f64, y: f64) {
        self.gravity = Vec2::new(x, y);
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    pub fn roots(&self) -> &[Composite] {
        &self.roots
    }

    pub fn root(&self, index: usize) -> Option<&Composite> {
        self.roots.get(index)
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// A no-op while stopped: the driver keeps rendering but nothing
    /// moves. Each root is re-armed with a single fresh gravity force
    /// (`gravity * mass`, applied at the root's centre of mass) and
    /// stepped once; nested composites keep whatever forces they already
    /// carried. `dt` is the caller's frame delta; no clamping is applied.
    pub fn step(&mut self, dt: f64) {
        if !self.running {
            return;
        }

        for root in &mut self.roots {
            let direction = self.gravity * root.mass();
            let gravity_force = Force::new(direction, root.centre_of_mass());
            root.physics_step(dt, &[gravity_force]);
        }

        self.frame += 1;
    }

    /// Stop the simulation and restore every root's construction-time
    /// kinematic snapshot (one level into nested composites).
    pub fn reset(&mut self) {
        self.running = false;
        self.frame = 0;
        for root in &mut self.roots {
            root.reset_simulation();
        }
    }

    /// JSON snapshot of the tree for the JS renderer: per composite its
    /// name, kinematics, mass and centre of mass, and per leaf its
    /// geometry and local centre of mass.
    pub fn render_state_json(&self) -> String {
        render_state::render_state_json(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
