//! Construction-time scene description.
//!
//! The display driver hands the engine a camelCase JSON document listing
//! the root composites, each built from segments, ellipses and nested
//! composites. The description is parsed with serde, validated, and built
//! into the owned `Composite` tree.

use serde::Deserialize;

use crate::core::vec2::Vec2;
use crate::domain::body::Body;
use crate::systems::composite::{Composite, Node};

/// Parse a JSON scene description into root composites.
///
/// Composites without an explicit name are auto-named `composite N` in
/// the order they are built.
pub fn parse_scene_json(json: &str) -> Result<Vec<Composite>, String> {
    let scene: SceneDoc = serde_json::from_str(json).map_err(|e| e.to_string())?;

    let mut next_index = 0usize;
    let mut roots = Vec::with_capacity(scene.composites.len());
    for desc in scene.composites.into_iter() {
        roots.push(build_composite(desc, &mut next_index)?);
    }
    Ok(roots)
}

fn build_composite(desc: CompositeDesc, next_index: &mut usize) -> Result<Composite, String> {
    let name = match desc.name {
        Some(name) => name,
        None => {
            let name = format!("composite {}", *next_index);
            *next_index += 1;
            name
        }
    };

    let mut children = Vec::with_capacity(desc.children.len());
    for child in desc.children.into_iter() {
        children.push(build_node(&name, child, next_index)?);
    }

    Ok(Composite::new(
        name,
        desc.position.into(),
        desc.velocity.map(Vec2::from).unwrap_or_else(Vec2::zero),
        desc.fixed,
        children,
    ))
}

fn build_node(parent: &str, desc: NodeDesc, next_index: &mut usize) -> Result<Node, String> {
    match desc {
        NodeDesc::Segment { from, to, density } => {
            check_density(parent, "segment", density)?;
            Ok(Node::Body(Body::Segment {
                from: from.into(),
                to: to.into(),
                density,
            }))
        }
        NodeDesc::Ellipse { centre, radius, density } => {
            check_density(parent, "ellipse", density)?;
            Ok(Node::Body(Body::Ellipse {
                centre: centre.into(),
                radius: radius.into(),
                density,
            }))
        }
        NodeDesc::Composite(inner) => Ok(Node::Composite(build_composite(inner, next_index)?)),
    }
}

fn check_density(parent: &str, kind: &str, density: f64) -> Result<(), String> {
    if !density.is_finite() || density < 0.0 {
        return Err(format!(
            "{} in {} has invalid density {}",
            kind, parent, density
        ));
    }
    Ok(())
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SceneDoc {
    composites: Vec<CompositeDesc>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompositeDesc {
    #[serde(default)]
    name: Option<String>,
    position: Vec2Desc,
    #[serde(default)]
    velocity: Option<Vec2Desc>,
    #[serde(default)]
    fixed: bool,
    children: Vec<NodeDesc>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum NodeDesc {
    Segment {
        from: Vec2Desc,
        to: Vec2Desc,
        density: f64,
    },
    Ellipse {
        centre: Vec2Desc,
        radius: Vec2Desc,
        density: f64,
    },
    Composite(CompositeDesc),
}

#[derive(Clone, Copy, Deserialize)]
struct Vec2Desc {
    x: f64,
    y: f64,
}

impl From<Vec2Desc> for Vec2 {
    fn from(v: Vec2Desc) -> Self {
        Vec2::new(v.x, v.y)
    }
}
