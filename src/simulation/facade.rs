use wasm_bindgen::prelude::*;

use super::SimulationCore;

/// WASM-facing simulation handle for the JS display driver.
#[wasm_bindgen]
pub struct Simulation {
    core: SimulationCore,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Simulation {
    /// Create an empty, stopped simulation.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: SimulationCore::new(),
        }
    }

    /// Load a JSON scene description, replacing the current scene.
    pub fn load_scene(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_scene_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        web_sys::console::log_1(
            &format!("barycentre: scene loaded, {} roots", self.core.root_count()).into(),
        );
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.core.is_running()
    }

    /// Start/stop toggle read by the driver each animation frame.
    pub fn set_running(&mut self, running: bool) {
        self.core.set_running(running);
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame()
    }

    pub fn set_gravity(&mut self, x: f64, y: f64) {
        self.core.set_gravity(x, y);
    }

    /// Advance by `dt` seconds (no-op while stopped).
    pub fn step(&mut self, dt: f64) {
        self.core.step(dt);
    }

    /// Stop and restore every composite's initial kinematic snapshot.
    pub fn reset(&mut self) {
        self.core.reset();
    }

    pub fn root_count(&self) -> usize {
        self.core.root_count()
    }

    pub fn root_mass(&self, index: usize) -> Option<f64> {
        self.core.root(index).map(|r| r.mass())
    }

    pub fn root_position_x(&self, index: usize) -> Option<f64> {
        self.core.root(index).map(|r| r.position.x)
    }

    pub fn root_position_y(&self, index: usize) -> Option<f64> {
        self.core.root(index).map(|r| r.position.y)
    }

    pub fn root_centre_of_mass_x(&self, index: usize) -> Option<f64> {
        self.core.root(index).map(|r| r.centre_of_mass().x)
    }

    pub fn root_centre_of_mass_y(&self, index: usize) -> Option<f64> {
        self.core.root(index).map(|r| r.centre_of_mass().y)
    }

    /// JSON snapshot of the whole tree for rendering.
    pub fn render_state_json(&self) -> String {
        self.core.render_state_json()
    }
}
