//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Color,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Bytes between consecutive vertices in a buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Colors for game elements
pub mod colors {
    use super::Color;
    use crate::sim::{Lane, ScoreTier};

    pub const BACKGROUND: Color = [0.0, 0.0, 0.1, 1.0];
    pub const RED: Color = [0.99, 0.0, 0.45, 1.0];
    pub const BLUE: Color = [0.0, 0.3, 0.604, 1.0];
    pub const YELLOW: Color = [0.904, 0.91, 0.0, 1.0];
    pub const GREEN: Color = [0.0, 1.0, 0.0, 1.0];
    pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const DIVIDER: Color = [0.0, 0.0, 1.0, 0.5];
    pub const PAD_IDLE: Color = [0.0, 0.0, 0.0, 0.1];
    pub const MARKER: Color = WHITE;
    pub const TITLE: Color = [0.0, 1.0, 0.0, 1.0];
    pub const NO_POINTS: Color = [1.0, 0.0, 0.0, 1.0];

    /// Each lane's arrows, pad and divider flash share one color
    pub fn lane(lane: Lane) -> Color {
        match lane {
            Lane::Left => BLUE,
            Lane::Down => GREEN,
            Lane::Up => YELLOW,
            Lane::Right => RED,
        }
    }

    pub fn score(tier: ScoreTier) -> Color {
        match tier {
            ScoreTier::Rookie => WHITE,
            ScoreTier::Warm => YELLOW,
            ScoreTier::Hot => GREEN,
            ScoreTier::Blazing => RED,
        }
    }
}
