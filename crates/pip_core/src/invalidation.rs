//! Invalidation tracking for widgets
//!
//! Widgets never redraw or relayout synchronously. They record a request here
//! and the host drains the flags when it schedules its next pass:
//!
//! ```rust
//! use pip_core::InvalidationTracker;
//!
//! let mut tracker = InvalidationTracker::new();
//! tracker.request_redraw();
//!
//! if tracker.take_redraw() {
//!     // run a draw pass
//! }
//! assert!(!tracker.needs_redraw());
//! ```

/// Pending redraw/layout requests for a single widget
#[derive(Clone, Debug, Default)]
pub struct InvalidationTracker {
    /// Widget content changed and must be drawn again
    redraw: bool,
    /// Widget size may have changed, implies a redraw
    layout: bool,
}

impl InvalidationTracker {
    /// Create a tracker with nothing pending
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a draw pass
    pub fn request_redraw(&mut self) {
        self.redraw = true;
    }

    /// Request a layout pass (measure, then draw)
    pub fn request_layout(&mut self) {
        self.layout = true;
        self.redraw = true;
    }

    /// Check if a draw pass is pending
    pub fn needs_redraw(&self) -> bool {
        self.redraw
    }

    /// Check if a layout pass is pending
    pub fn needs_layout(&self) -> bool {
        self.layout
    }

    /// Consume the redraw flag
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    /// Consume the layout flag
    pub fn take_layout(&mut self) -> bool {
        std::mem::take(&mut self.layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redraw_request() {
        let mut tracker = InvalidationTracker::new();
        assert!(!tracker.needs_redraw());

        tracker.request_redraw();
        assert!(tracker.needs_redraw());
        assert!(!tracker.needs_layout());

        assert!(tracker.take_redraw());
        assert!(!tracker.take_redraw());
    }

    #[test]
    fn test_layout_implies_redraw() {
        let mut tracker = InvalidationTracker::new();
        tracker.request_layout();
        assert!(tracker.needs_layout());
        assert!(tracker.needs_redraw());

        assert!(tracker.take_layout());
        assert!(!tracker.needs_layout());
        assert!(tracker.needs_redraw());
    }
}
