//! Draw requests emitted each frame
//!
//! The game never talks to a GPU or font rasterizer directly. It describes the
//! frame as a list of `DrawCommand`s pushed into a `RenderSink`, and whatever
//! backend owns the window turns them into pixels.

use glam::Vec2;

use super::shapes::{ShapeKind, tessellate};
use super::vertex::{Color, Vertex, colors};
use crate::consts::*;
use crate::sim::{GameState, Lane, ScoreTier, Screen};

/// Approximate advance of one glyph at scale 1, used to center strings
const GLYPH_WIDTH: f32 = 12.0;

const START_PROMPT: &str = "Press s to start";
const RULES: [&str; 4] = [
    "Press arrow keys to score points. If an",
    "arrow is missed, its game over! as your",
    "score increases so does the pace of the",
    "game, so stay focused!",
];

/// One draw request
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole frame
    Clear { color: Color },
    /// Draw a shape centered at `pos`
    Shape {
        kind: ShapeKind,
        pos: Vec2,
        size: Vec2,
        color: Color,
    },
    /// Draw a string with its baseline starting at `pos`
    Text {
        text: String,
        pos: Vec2,
        scale: f32,
        color: Color,
    },
}

/// Receives draw requests; never read back by the game
pub trait RenderSink {
    fn draw(&mut self, command: DrawCommand);
}

impl RenderSink for Vec<DrawCommand> {
    fn draw(&mut self, command: DrawCommand) {
        self.push(command);
    }
}

/// Text waiting for the font renderer
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub pos: Vec2,
    pub scale: f32,
    pub color: Color,
}

/// Collects a frame as one triangle batch plus text runs, ready for upload
#[derive(Debug, Clone, Default)]
pub struct MeshSink {
    pub clear: Option<Color>,
    pub vertices: Vec<Vertex>,
    pub texts: Vec<TextRun>,
}

impl MeshSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertex buffer contents
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Drop the previous frame, keeping allocations
    pub fn reset(&mut self) {
        self.clear = None;
        self.vertices.clear();
        self.texts.clear();
    }
}

impl RenderSink for MeshSink {
    fn draw(&mut self, command: DrawCommand) {
        match command {
            DrawCommand::Clear { color } => self.clear = Some(color),
            DrawCommand::Shape {
                kind,
                pos,
                size,
                color,
            } => {
                self.vertices.reserve(kind.vertex_count());
                self.vertices.extend(tessellate(kind, pos, size, color));
            }
            DrawCommand::Text {
                text,
                pos,
                scale,
                color,
            } => self.texts.push(TextRun {
                text,
                pos,
                scale,
                color,
            }),
        }
    }
}

/// Presentation switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Light the lane divider in the lane color on a successful press
    pub lane_flash: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { lane_flash: true }
    }
}

/// Describe the current screen to `sink`
pub fn render(state: &GameState, options: &RenderOptions, sink: &mut impl RenderSink) {
    sink.draw(DrawCommand::Clear {
        color: colors::BACKGROUND,
    });

    match state.screen {
        Screen::Start => render_start(state, sink),
        Screen::Play => render_play(state, options, sink),
        Screen::Over => render_over(state, sink),
    }
}

fn text(sink: &mut impl RenderSink, text: String, pos: Vec2, scale: f32, color: Color) {
    sink.draw(DrawCommand::Text {
        text,
        pos,
        scale,
        color,
    });
}

/// x that roughly centers `len` glyphs at scale 1
fn centered_x(width: f32, len: usize) -> f32 {
    width / 2.0 - GLYPH_WIDTH * len as f32
}

fn render_start(state: &GameState, sink: &mut impl RenderSink) {
    let (width, height) = (state.layout.width, state.layout.height);
    let prompt_x = centered_x(width, START_PROMPT.len());
    text(
        sink,
        START_PROMPT.to_string(),
        Vec2::new(prompt_x, height / 2.0),
        1.0,
        colors::TITLE,
    );

    // Rules are half scale and share one left edge
    let rules_x = width / 2.0 - 14.0 * START_PROMPT.len() as f32;
    for (i, line) in RULES.iter().enumerate() {
        let y = height / 2.0 - 40.0 - 20.0 * i as f32;
        text(sink, line.to_string(), Vec2::new(rules_x, y), 0.5, colors::WHITE);
    }
}

fn render_play(state: &GameState, options: &RenderOptions, sink: &mut impl RenderSink) {
    let layout = &state.layout;

    for (i, x) in layout.dividers.iter().enumerate() {
        let color = match state.divider_lit(i) {
            Some(lane) if options.lane_flash => colors::lane(lane),
            _ => colors::DIVIDER,
        };
        sink.draw(DrawCommand::Shape {
            kind: ShapeKind::Rect,
            pos: Vec2::new(*x, layout.height / 2.0),
            size: Vec2::new(DIVIDER_WIDTH, layout.height),
            color,
        });
    }

    // Pads go under the markers and light up while their lane is held
    for lane in Lane::ALL {
        let color = match state.signal(lane) {
            Some(_) => colors::lane(lane),
            None => colors::PAD_IDLE,
        };
        sink.draw(DrawCommand::Shape {
            kind: ShapeKind::Arrow(lane),
            pos: layout.marker(lane).pos,
            size: Vec2::new(PAD_WIDTH, PAD_HEIGHT),
            color,
        });
    }
    for lane in Lane::ALL {
        let marker = layout.marker(lane);
        sink.draw(DrawCommand::Shape {
            kind: ShapeKind::Arrow(lane),
            pos: marker.pos,
            size: marker.size,
            color: colors::MARKER,
        });
    }

    for arrow in &state.arrows {
        sink.draw(DrawCommand::Shape {
            kind: ShapeKind::Arrow(arrow.lane),
            pos: arrow.pos,
            size: arrow.size,
            color: colors::lane(arrow.lane),
        });
    }

    let score = format!("Current score: {}", state.total_score);
    let pos = Vec2::new(centered_x(layout.width, score.len()), layout.height / 12.0 - 21.0);
    let color = colors::score(ScoreTier::for_score(state.total_score));
    text(sink, score, pos, 1.0, color);
}

fn render_over(state: &GameState, sink: &mut impl RenderSink) {
    let (message, color) = if state.total_score > 0 {
        (
            format!("GAME OVER! your score was: {}", state.total_score),
            colors::TITLE,
        )
    } else {
        (
            "GAME OVER! you scored no points!".to_string(),
            colors::NO_POINTS,
        )
    };
    let pos = Vec2::new(
        centered_x(state.layout.width, message.len()),
        state.layout.height / 2.0,
    );
    text(sink, message, pos, 1.0, color);
}
