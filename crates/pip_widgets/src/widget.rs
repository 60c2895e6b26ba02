//! Widget lifecycle hooks
//!
//! Hosts drive widgets through this trait: measure with the parent's
//! constraints, assign the final frame, draw, and persist state across
//! re-creation. All hooks run on the UI thread.

use pip_core::{DrawContext, Size};

use crate::error::Result;
use crate::measure::{MeasureSpec, MeasuredSize};
use crate::saved_state::SavedState;

/// Host-facing widget capabilities
pub trait Widget {
    /// Resolve the widget's size under the given constraints
    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Result<MeasuredSize>;

    /// Assign the frame size chosen by the parent layout
    fn layout(&mut self, size: Size);

    /// Paint into `ctx` in widget-local coordinates
    fn draw(&self, ctx: &mut dyn DrawContext) -> Result<()>;

    /// Capture persistent state; `base` is the host's own view state
    fn save_state(&self, base: Vec<u8>) -> SavedState;

    /// Apply a previously saved state, returning the host's base state
    fn restore_state(&mut self, state: SavedState) -> Vec<u8>;
}
