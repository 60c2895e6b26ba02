//! Pip Widget Library
//!
//! Paging widgets that observe a host-owned pager and paint through
//! `pip_core::DrawContext`.
//!
//! # Architecture
//!
//! 1. **Pager contract**: the host implements `PageContainer` and relays
//!    page changes as `PageChangeEvent`s to the single listener it holds.
//!
//! 2. **Widget hooks**: widgets implement `Widget` (measure, layout, draw,
//!    save/restore state) instead of inheriting from a base view.
//!
//! 3. **Invalidation**: state changes record redraw/layout requests that the
//!    host drains before its next pass.
//!
//! All widgets are single-threaded and must stay on the UI thread.
//!
//! # Example
//!
//! ```ignore
//! use pip_widgets::prelude::*;
//!
//! let mut indicator = CirclePageIndicator::new();
//! indicator.bind(pager)?;
//!
//! let mut ctx = RecordingContext::new();
//! indicator.draw(&mut ctx)?;
//! ```

pub mod circle_indicator;
pub mod error;
pub mod measure;
pub mod pager;
pub mod saved_state;
pub mod widget;

pub use circle_indicator::{CirclePageIndicator, MarkerLayout, PagingState};
pub use error::{IndicatorError, Result};
pub use measure::{MeasureSpec, MeasuredSize};
pub use pager::{PageChangeEvent, PageChangeListener, PageContainer, ScrollState};
pub use saved_state::{SavedState, SAVED_STATE_VERSION};
pub use widget::Widget;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::circle_indicator::{CirclePageIndicator, MarkerLayout, PagingState};
    pub use crate::error::IndicatorError;
    pub use crate::measure::{MeasureSpec, MeasuredSize};
    pub use crate::pager::{PageChangeEvent, PageChangeListener, PageContainer, ScrollState};
    pub use crate::saved_state::SavedState;
    pub use crate::widget::Widget;
    pub use pip_core::{Color, DrawContext, EdgeInsets, RecordingContext, Size};
    pub use pip_theme::IndicatorStyle;
}
