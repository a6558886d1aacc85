//! Rendering front end: draw requests and shape tessellation

pub mod draw;
pub mod shapes;
pub mod vertex;

pub use draw::{DrawCommand, MeshSink, RenderOptions, RenderSink, TextRun, render};
pub use shapes::{ShapeKind, tessellate};
pub use vertex::{Color, Vertex, colors};
