//! Shape tessellation for 2D primitives
//!
//! Arrows share one left-pointing template. Each direction is a fixed
//! rotation of it, picked once from the lane rather than per vertex.

use glam::Vec2;

use super::vertex::{Color, Vertex};
use crate::sim::Lane;

/// Unit quad as two triangles, centered on the origin
const RECT: [Vec2; 6] = [
    Vec2::new(-0.5, 0.5),
    Vec2::new(0.5, 0.5),
    Vec2::new(-0.5, -0.5),
    Vec2::new(0.5, 0.5),
    Vec2::new(-0.5, -0.5),
    Vec2::new(0.5, -0.5),
];

/// Left-pointing arrow in a unit box: body quad then head triangle
const ARROW_LEFT: [Vec2; 9] = [
    Vec2::new(0.0, 0.25),
    Vec2::new(0.5, 0.25),
    Vec2::new(0.0, -0.25),
    Vec2::new(0.5, 0.25),
    Vec2::new(0.0, -0.25),
    Vec2::new(0.5, -0.25),
    Vec2::new(0.0, 0.5),
    Vec2::new(-0.5, 0.0),
    Vec2::new(0.0, -0.5),
];

/// What to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Axis-aligned rectangle (lane dividers)
    Rect,
    /// Arrow pointing in the lane's direction (arrows, markers, pads)
    Arrow(Lane),
}

impl ShapeKind {
    /// Number of vertices `tessellate` emits
    pub fn vertex_count(self) -> usize {
        match self {
            ShapeKind::Rect => RECT.len(),
            ShapeKind::Arrow(_) => ARROW_LEFT.len(),
        }
    }
}

/// Rotation (as a unit complex number) taking the left template to `lane`
fn arrow_rotation(lane: Lane) -> Vec2 {
    match lane {
        Lane::Left => Vec2::X,
        Lane::Down => Vec2::Y,
        Lane::Up => Vec2::NEG_Y,
        Lane::Right => Vec2::NEG_X,
    }
}

/// Triangle-list vertices for a shape centered at `center` filling `size`
pub fn tessellate(kind: ShapeKind, center: Vec2, size: Vec2, color: Color) -> Vec<Vertex> {
    let place = |p: Vec2| {
        let world = center + p * size;
        Vertex::new(world.x, world.y, color)
    };

    match kind {
        ShapeKind::Rect => RECT.iter().map(|&p| place(p)).collect(),
        ShapeKind::Arrow(lane) => {
            let rotation = arrow_rotation(lane);
            ARROW_LEFT.iter().map(|&p| place(rotation.rotate(p))).collect()
        }
    }
}
