//! 2D drawing surface abstraction.
//!
//! The visualizer talks to a [`Canvas`]; [`RecordingCanvas`] keeps the issued
//! commands so they can be inspected in tests or exported with [`svg`].

pub mod svg;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a)
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PathOp {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { control: Point, to: Point },
    Close,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Path {
    ops: Vec<PathOp>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.ops.push(PathOp::MoveTo(Point::new(x, y)));
        self
    }

    pub fn line_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.ops.push(PathOp::LineTo(Point::new(x, y)));
        self
    }

    pub fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) -> &mut Self {
        self.ops.push(PathOp::QuadTo {
            control: Point::new(cx, cy),
            to: Point::new(x, y),
        });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.ops.push(PathOp::Close);
        self
    }

    pub fn ops(&self) -> &[PathOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// End point of every op, in order. `Close` contributes nothing.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.ops.iter().filter_map(|op| match op {
            PathOp::MoveTo(p) | PathOp::LineTo(p) => Some(*p),
            PathOp::QuadTo { to, .. } => Some(*to),
            PathOp::Close => None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Paint {
    Solid(Rgba),
    LinearGradient {
        from: Point,
        to: Point,
        stops: Vec<GradientStop>,
    },
}

impl Paint {
    /// Top-to-bottom gradient spanning `0..height`.
    pub fn vertical(height: f32, stops: &[(f32, Rgba)]) -> Self {
        Paint::LinearGradient {
            from: Point::new(0.0, 0.0),
            to: Point::new(0.0, height),
            stops: stops
                .iter()
                .map(|(offset, color)| GradientStop {
                    offset: *offset,
                    color: *color,
                })
                .collect(),
        }
    }
}

/// Shadow blur around a shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Glow {
    pub blur: f32,
    pub color: Rgba,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stroke {
    pub paint: Paint,
    pub width: f32,
    pub cap: LineCap,
    pub glow: Option<Glow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Fill {
        path: Path,
        paint: Paint,
        glow: Option<Glow>,
    },
    Stroke {
        path: Path,
        stroke: Stroke,
    },
}

/// Immediate-mode drawing surface.
pub trait Canvas {
    fn width(&self) -> f32;

    fn height(&self) -> f32;

    fn clear(&mut self);

    fn fill(&mut self, path: Path, paint: Paint, glow: Option<Glow>);

    fn stroke(&mut self, path: Path, stroke: Stroke);
}

/// Canvas that remembers what was drawn since the last clear.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    width: f32,
    height: f32,
    commands: Vec<DrawCommand>,
    calls: usize,
}

impl RecordingCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
            calls: 0,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Every call made on the canvas, clears included.
    pub fn call_count(&self) -> usize {
        self.calls
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self) {
        self.calls += 1;
        self.commands.clear();
    }

    fn fill(&mut self, path: Path, paint: Paint, glow: Option<Glow>) {
        self.calls += 1;
        self.commands.push(DrawCommand::Fill { path, paint, glow });
    }

    fn stroke(&mut self, path: Path, stroke: Stroke) {
        self.calls += 1;
        self.commands.push(DrawCommand::Stroke { path, stroke });
    }
}
