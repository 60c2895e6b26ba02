//! Draw Context - rendering API for widgets
//!
//! Widgets paint through the `DrawContext` trait and never talk to a GPU or a
//! platform canvas directly. Hosts implement the trait on top of whatever
//! renderer they own; `RecordingContext` records the calls as `DrawCommand`s
//! so they can be inspected after the pass.
//!
//! # Example
//!
//! ```rust
//! use pip_core::{Color, DrawContext, Point, RecordingContext, Stroke};
//!
//! let mut ctx = RecordingContext::new();
//! ctx.stroke_circle(Point::new(10.0, 10.0), 4.0, &Stroke::default(), Color::WHITE.into());
//! ctx.fill_circle(Point::new(10.0, 10.0), 4.0, Color::WHITE.into());
//!
//! assert_eq!(ctx.commands().len(), 2);
//! ```

use crate::geometry::{Color, Point};

// ─────────────────────────────────────────────────────────────────────────────
// Stroke Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Stroke style configuration
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    /// Line width
    pub width: f32,
}

impl Default for Stroke {
    fn default() -> Self {
        Self { width: 1.0 }
    }
}

impl Stroke {
    /// Create a new stroke with the given width
    pub fn new(width: f32) -> Self {
        Self { width }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Brush
// ─────────────────────────────────────────────────────────────────────────────

/// Paint source for fills and strokes
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
}

impl Brush {
    /// Color of a solid brush
    pub fn color(&self) -> Color {
        match self {
            Brush::Solid(color) => *color,
        }
    }
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// DrawContext Trait
// ─────────────────────────────────────────────────────────────────────────────

/// Rendering target handed to widgets during a draw pass
///
/// Coordinates are local to the widget: `(0, 0)` is its top-left corner.
pub trait DrawContext {
    /// Fill a circle
    fn fill_circle(&mut self, center: Point, radius: f32, brush: Brush);

    /// Stroke the outline of a circle
    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: &Stroke, brush: Brush);
}

// ─────────────────────────────────────────────────────────────────────────────
// Draw Commands
// ─────────────────────────────────────────────────────────────────────────────

/// A recorded draw command
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillCircle {
        center: Point,
        radius: f32,
        brush: Brush,
    },
    StrokeCircle {
        center: Point,
        radius: f32,
        stroke: Stroke,
        brush: Brush,
    },
}

impl DrawCommand {
    /// Center of the shape this command draws
    pub fn center(&self) -> Point {
        match self {
            DrawCommand::FillCircle { center, .. } | DrawCommand::StrokeCircle { center, .. } => {
                *center
            }
        }
    }

    /// Whether this is a fill (as opposed to a stroke)
    pub fn is_fill(&self) -> bool {
        matches!(self, DrawCommand::FillCircle { .. })
    }
}

/// A draw context that records commands for later execution
#[derive(Debug, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
}

impl RecordingContext {
    /// Create a new recording context
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Clear all recorded commands
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Only the fill commands
    pub fn fills(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| c.is_fill())
    }

    /// Only the stroke commands
    pub fn strokes(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| !c.is_fill())
    }
}

impl DrawContext for RecordingContext {
    fn fill_circle(&mut self, center: Point, radius: f32, brush: Brush) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            brush,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: &Stroke, brush: Brush) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            stroke: stroke.clone(),
            brush,
        });
    }
}
