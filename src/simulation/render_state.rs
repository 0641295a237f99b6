//! Render read-out: serialize the composite tree for the JS driver.
//!
//! Display only. The snapshot carries derived values (mass, centres of
//! mass) alongside geometry so the renderer can draw shapes and COM
//! markers without redoing any of the maths. It is not a persistence
//! format; simulation state cannot be restored from it.

use serde::Serialize;

use crate::core::vec2::Vec2;
use crate::domain::body::Body;
use crate::systems::composite::{Composite, Node};

use super::SimulationCore;

pub(super) fn render_state_json(core: &SimulationCore) -> String {
    let state = RenderState {
        running: core.is_running(),
        frame: core.frame(),
        composites: core.roots().iter().map(composite_state).collect(),
    };
    serde_json::to_string(&state).unwrap_or_else(|_| "{}".to_string())
}

fn composite_state(c: &Composite) -> CompositeState {
    CompositeState {
        name: c.name.clone(),
        position: c.position.into(),
        velocity: c.velocity.into(),
        rotation: c.rotation,
        fixed: c.fixed(),
        mass: c.mass(),
        centre_of_mass: c.centre_of_mass().into(),
        children: c.children.iter().map(node_state).collect(),
    }
}

fn node_state(node: &Node) -> NodeState {
    match node {
        Node::Body(body) => match body {
            Body::Segment { from, to, .. } => NodeState::Segment {
                from: (*from).into(),
                to: (*to).into(),
                mass: body.mass(),
                centre_of_mass: body.centre_of_mass().into(),
            },
            Body::Ellipse { centre, radius, .. } => NodeState::Ellipse {
                centre: (*centre).into(),
                radius: (*radius).into(),
                mass: body.mass(),
                centre_of_mass: body.centre_of_mass().into(),
            },
        },
        Node::Composite(c) => NodeState::Composite(composite_state(c)),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RenderState {
    running: bool,
    frame: u64,
    composites: Vec<CompositeState>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CompositeState {
    name: String,
    position: Vec2State,
    velocity: Vec2State,
    rotation: f64,
    fixed: bool,
    mass: f64,
    centre_of_mass: Vec2State,
    children: Vec<NodeState>,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum NodeState {
    Segment {
        from: Vec2State,
        to: Vec2State,
        mass: f64,
        #[serde(rename = "centreOfMass")]
        centre_of_mass: Vec2State,
    },
    Ellipse {
        centre: Vec2State,
        radius: Vec2State,
        mass: f64,
        #[serde(rename = "centreOfMass")]
        centre_of_mass: Vec2State,
    },
    Composite(CompositeState),
}

#[derive(Serialize, Clone, Copy)]
struct Vec2State {
    x: f64,
    y: f64,
}

impl From<Vec2> for Vec2State {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}
