//! Pip Core
//!
//! Foundational types shared by the Pip widget crates:
//!
//! - **Geometry**: points, sizes, padding insets and colors
//! - **Draw Context**: the rendering API widgets paint through, plus a
//!   recording implementation for deferred execution and tests
//! - **Invalidation**: redraw/layout request tracking drained by the host
//!
//! Everything in this crate is single-threaded UI data; nothing here is
//! shared across threads.

pub mod draw;
pub mod geometry;
pub mod invalidation;

pub use draw::{Brush, DrawCommand, DrawContext, RecordingContext, Stroke};
pub use geometry::{Color, EdgeInsets, Point, Size};
pub use invalidation::InvalidationTracker;
