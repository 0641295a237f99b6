//! Barycentre Engine - composite-body centre-of-mass simulation in WASM
//!
//! The engine owns the maths: body mass formulas, recursive mass and
//! centre-of-mass aggregation over the composite tree, forward Euler
//! integration, reset snapshots and the circle/line clearance query.
//!
//! The JS driver owns everything visual: canvas rendering, pixel scaling,
//! resize handling, UI buttons and the animation-frame loop. It steps the
//! simulation once per tick and reads state back for display.
//!
//! Architecture:
//! - core/       - Math primitives
//! - domain/     - Bodies, forces, scene description
//! - systems/    - Composite tree, geometric queries
//! - simulation/ - Driver core and WASM facade

pub mod core;
pub mod domain;
pub mod simulation;
pub mod systems;

pub use crate::core::vec2::Vec2;
pub use domain::body::Body;
pub use domain::force::Force;
pub use domain::scene::parse_scene_json;
pub use simulation::{Simulation, SimulationCore, DEFAULT_GRAVITY_Y};
pub use systems::composite::{Composite, Node};
pub use systems::intersections::distance_from_circle_to_line;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Barycentre WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Clearance between a circle and the infinite line through two points,
/// exported for the JS driver.
#[wasm_bindgen(js_name = distanceFromCircleToLine)]
pub fn distance_from_circle_to_line_js(
    center_x: f64,
    center_y: f64,
    radius: f64,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
) -> f64 {
    distance_from_circle_to_line(
        Vec2::new(center_x, center_y),
        radius,
        Vec2::new(x1, y1),
        Vec2::new(x2, y2),
    )
}
