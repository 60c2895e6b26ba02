//! Circle page indicator
//!
//! Draws one stroked circle per page of a bound pager and a filled circle on
//! the current page. Two fill behaviors:
//!
//! - **Continuous** (default): the fill slides between circles in proportion
//!   to the pager's drag offset.
//! - **Snap**: the fill jumps to the page the pager settles on.
//!
//! # Example
//!
//! ```ignore
//! use pip_widgets::prelude::*;
//!
//! let mut indicator = CirclePageIndicator::with_style(&IndicatorStyle::default());
//! indicator.bind(pager.clone())?;
//! indicator.set_page_change_listener(|event: &PageChangeEvent| {
//!     tracing::info!(?event, "page change");
//! });
//!
//! // host layout + paint pass
//! let size = indicator.measure(MeasureSpec::AtMost(width), MeasureSpec::Unspecified)?;
//! indicator.layout(Size::new(size.width as f32, size.height as f32));
//! if indicator.take_redraw() {
//!     indicator.draw(&mut ctx)?;
//! }
//! ```
//!
//! # Threading
//!
//! The indicator and the listener it installs on the pager share state through
//! `Rc<RefCell<_>>`. Use them from the UI thread only.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

use pip_core::{Color, DrawContext, EdgeInsets, InvalidationTracker, Point, Size, Stroke};
use pip_theme::IndicatorStyle;
use smallvec::SmallVec;

use crate::error::{IndicatorError, Result};
use crate::measure::{MeasureSpec, MeasuredSize};
use crate::pager::{PageChangeEvent, PageChangeListener, PageContainer};
use crate::saved_state::SavedState;
use crate::widget::Widget;

/// Paging state mirrored from the bound pager
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PagingState {
    /// Page considered current, follows drags
    pub current_page: usize,
    /// Page the pager last settled on
    pub snap_page: usize,
    /// Drag offset into the next page in pixels
    pub scroll_offset_px: i32,
    /// Width of one page in pixels
    pub page_width_px: i32,
}

/// Computed marker positions in widget-local coordinates
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerLayout {
    /// Center of each stroked circle, one per page
    pub strokes: SmallVec<[Point; 8]>,
    /// Center of the filled circle; `None` when there are no pages
    pub fill: Option<Point>,
    /// Radius shared by every circle
    pub radius: f32,
}

/// State shared between the widget and the listener installed on the pager
struct Shared {
    paging: PagingState,
    invalidation: InvalidationTracker,
    /// External listener that receives every relayed event
    listener: Option<Box<dyn PageChangeListener>>,
    /// Incremented whenever the external listener is set or cleared
    listener_generation: u64,
    /// Events applied to `paging` but not yet relayed
    pending: VecDeque<PageChangeEvent>,
    /// A dispatch further up the stack is draining `pending`
    relaying: bool,
    /// Incremented on every bind; stale pager links compare against it
    binding: u64,
}

impl Shared {
    fn new() -> Self {
        Self {
            paging: PagingState::default(),
            invalidation: InvalidationTracker::new(),
            listener: None,
            listener_generation: 0,
            pending: VecDeque::new(),
            relaying: false,
            binding: 0,
        }
    }
}

/// Apply a page change to the shared state, then relay it.
///
/// No borrow is held while the external listener runs, so the listener may
/// call back into the indicator. Events dispatched from inside the callback
/// update the state immediately and are relayed, in order, once the callback
/// returns.
fn dispatch(
    shared: &RefCell<Shared>,
    container: Option<&dyn PageContainer>,
    event: &PageChangeEvent,
) {
    tracing::trace!(?event, "Page indicator received page change");

    let page_width_px = match event {
        PageChangeEvent::Scrolled { .. } => container.map(|c| c.width_px()),
        _ => None,
    };

    {
        let mut shared = shared.borrow_mut();
        match *event {
            PageChangeEvent::ScrollStateChanged(_) => {}
            PageChangeEvent::Scrolled {
                position,
                offset_px,
                ..
            } => {
                shared.paging.current_page = position;
                shared.paging.scroll_offset_px = offset_px;
                if let Some(width) = page_width_px {
                    shared.paging.page_width_px = width;
                }
                shared.invalidation.request_redraw();
            }
            PageChangeEvent::PageSettled(position) => {
                shared.paging.current_page = position;
                shared.paging.snap_page = position;
                shared.invalidation.request_redraw();
            }
        }

        shared.pending.push_back(*event);
        if shared.relaying {
            return;
        }
        shared.relaying = true;
    }

    relay_pending(shared);
}

/// Deliver queued events to the external listener until the queue is empty
fn relay_pending(shared: &RefCell<Shared>) {
    loop {
        let (event, listener, generation) = {
            let mut shared = shared.borrow_mut();
            let Some(event) = shared.pending.pop_front() else {
                shared.relaying = false;
                return;
            };
            (event, shared.listener.take(), shared.listener_generation)
        };

        let Some(mut listener) = listener else {
            continue;
        };
        listener.on_page_change(&event);

        let mut shared = shared.borrow_mut();
        // Set or cleared during the callback: keep what the callback left
        if shared.listener_generation == generation {
            shared.listener = Some(listener);
        }
    }
}

/// Listener the indicator installs on its pager
struct PagerLink {
    shared: Weak<RefCell<Shared>>,
    container: Weak<dyn PageContainer>,
    binding: u64,
}

impl PageChangeListener for PagerLink {
    fn on_page_change(&mut self, event: &PageChangeEvent) {
        let Some(shared) = self.shared.upgrade() else {
            tracing::trace!("Page indicator dropped, ignoring page change");
            return;
        };
        if shared.borrow().binding != self.binding {
            tracing::trace!("Page change from a previously bound pager ignored");
            return;
        }
        let container = self.container.upgrade();
        dispatch(&shared, container.as_deref(), event);
    }
}

/// Row of circles showing the position within a pager
pub struct CirclePageIndicator {
    fill_color: Color,
    stroke_color: Color,
    radius: f32,
    stroke: Stroke,
    centered: bool,
    snap: bool,
    padding: EdgeInsets,
    /// Frame size assigned by the last layout pass
    size: Size,
    container: Option<Rc<dyn PageContainer>>,
    shared: Rc<RefCell<Shared>>,
}

impl Default for CirclePageIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CirclePageIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CirclePageIndicator")
            .field("fill_color", &self.fill_color)
            .field("stroke_color", &self.stroke_color)
            .field("radius", &self.radius)
            .field("centered", &self.centered)
            .field("snap", &self.snap)
            .field("padding", &self.padding)
            .field("size", &self.size)
            .field("bound", &self.container.is_some())
            .field("paging", &self.paging())
            .finish()
    }
}

impl CirclePageIndicator {
    /// Create an indicator with the default style
    pub fn new() -> Self {
        Self::with_style(&IndicatorStyle::default())
    }

    /// Create an indicator from a style
    pub fn with_style(style: &IndicatorStyle) -> Self {
        let radius = if style.validate().is_ok() {
            style.radius
        } else {
            tracing::warn!(
                radius = style.radius,
                "Invalid indicator radius in style, using default"
            );
            pip_theme::DEFAULT_RADIUS
        };

        Self {
            fill_color: style.fill_color,
            stroke_color: style.stroke_color,
            radius,
            stroke: Stroke::new(style.stroke_width),
            centered: style.centered,
            snap: style.snap,
            padding: EdgeInsets::ZERO,
            size: Size::ZERO,
            container: None,
            shared: Rc::new(RefCell::new(Shared::new())),
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn set_fill_color(&mut self, color: Color) {
        if self.fill_color != color {
            self.fill_color = color;
            self.invalidate();
        }
    }

    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        if self.stroke_color != color {
            self.stroke_color = color;
            self.invalidate();
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Set the circle radius. Non-positive or non-finite values are ignored.
    pub fn set_radius(&mut self, radius: f32) {
        if !radius.is_finite() || radius <= 0.0 {
            tracing::warn!(radius, "Ignoring invalid indicator radius");
            return;
        }
        if self.radius != radius {
            self.radius = radius;
            self.invalidate();
        }
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke.width
    }

    pub fn set_stroke_width(&mut self, width: f32) {
        if self.stroke.width != width {
            self.stroke.width = width;
            self.invalidate();
        }
    }

    pub fn is_centered(&self) -> bool {
        self.centered
    }

    pub fn set_centered(&mut self, centered: bool) {
        if self.centered != centered {
            self.centered = centered;
            self.invalidate();
        }
    }

    pub fn is_snap(&self) -> bool {
        self.snap
    }

    pub fn set_snap(&mut self, snap: bool) {
        if self.snap != snap {
            self.snap = snap;
            self.invalidate();
        }
    }

    pub fn padding(&self) -> EdgeInsets {
        self.padding
    }

    /// Padding changes the measured size, so this requests a layout pass
    pub fn set_padding(&mut self, padding: EdgeInsets) {
        if self.padding != padding {
            self.padding = padding;
            self.shared.borrow_mut().invalidation.request_layout();
        }
    }

    /// Frame size from the last layout pass
    pub fn size(&self) -> Size {
        self.size
    }

    // =========================================================================
    // Invalidation
    // =========================================================================

    fn invalidate(&self) {
        self.shared.borrow_mut().invalidation.request_redraw();
    }

    /// Check if a draw pass is pending
    pub fn needs_redraw(&self) -> bool {
        self.shared.borrow().invalidation.needs_redraw()
    }

    /// Check if a layout pass is pending
    pub fn needs_layout(&self) -> bool {
        self.shared.borrow().invalidation.needs_layout()
    }

    /// Consume the pending redraw request
    pub fn take_redraw(&self) -> bool {
        self.shared.borrow_mut().invalidation.take_redraw()
    }

    /// Consume the pending layout request
    pub fn take_layout(&self) -> bool {
        self.shared.borrow_mut().invalidation.take_layout()
    }

    // =========================================================================
    // Pager binding
    // =========================================================================

    /// Bind to a pager and start observing its page changes.
    ///
    /// Replaces whatever page change listener the pager had. Fails if the
    /// pager has no item provider, in which case nothing changes.
    pub fn bind(&mut self, container: Rc<dyn PageContainer>) -> Result<()> {
        let Some(page_count) = container.item_count() else {
            return Err(IndicatorError::invalid_state(
                "pager does not have an item provider",
            ));
        };

        let binding = {
            let mut shared = self.shared.borrow_mut();
            shared.binding += 1;
            shared.binding
        };
        container.set_page_change_listener(Box::new(PagerLink {
            shared: Rc::downgrade(&self.shared),
            container: Rc::downgrade(&container),
            binding,
        }));

        let page_width_px = container.width_px();
        {
            let mut shared = self.shared.borrow_mut();
            shared.paging.page_width_px = page_width_px;
            shared.invalidation.request_redraw();
        }

        if self.container.is_some() {
            tracing::debug!("Rebinding page indicator to a new pager");
        }
        self.container = Some(container);

        tracing::debug!(page_count, page_width_px, "Bound page indicator");
        Ok(())
    }

    /// Bind to a pager, then move it to `page`
    pub fn bind_with_initial_page(
        &mut self,
        container: Rc<dyn PageContainer>,
        page: usize,
    ) -> Result<()> {
        self.bind(container)?;
        self.set_current_page(page)
    }

    /// Whether a pager is bound
    pub fn is_bound(&self) -> bool {
        self.container.is_some()
    }

    /// Move the bound pager to `index` and show it as current.
    ///
    /// The pager receives `index` unchanged. The indicator's own current page
    /// is clamped to the last page so it never points past the row of
    /// circles. The snap page and drag offset are left to the pager's own
    /// callbacks.
    pub fn set_current_page(&self, index: usize) -> Result<()> {
        let container = self
            .container
            .as_ref()
            .ok_or_else(|| IndicatorError::invalid_state("pager has not been bound"))?;

        container.set_current_page(index);

        let page = match container.item_count() {
            Some(count) if count > 0 => index.min(count - 1),
            _ => index,
        };

        let mut shared = self.shared.borrow_mut();
        shared.paging.current_page = page;
        shared.invalidation.request_redraw();
        tracing::debug!(page, "Page indicator moved to page");
        Ok(())
    }

    /// Install the external listener that receives every relayed page
    /// change, replacing any previous one
    pub fn set_page_change_listener<L>(&self, listener: L)
    where
        L: PageChangeListener + 'static,
    {
        let mut shared = self.shared.borrow_mut();
        shared.listener = Some(Box::new(listener));
        shared.listener_generation += 1;
    }

    /// Remove the external listener. Takes effect immediately, even from
    /// inside the listener's own callback.
    pub fn clear_page_change_listener(&self) {
        let mut shared = self.shared.borrow_mut();
        shared.listener = None;
        shared.listener_generation += 1;
    }

    /// Deliver a page change directly, for hosts that route pager events
    /// themselves instead of through the installed listener
    pub fn on_page_change(&self, event: &PageChangeEvent) {
        dispatch(&self.shared, self.container.as_deref(), event);
    }

    // =========================================================================
    // Paging state
    // =========================================================================

    pub fn paging(&self) -> PagingState {
        self.shared.borrow().paging
    }

    pub fn current_page(&self) -> usize {
        self.shared.borrow().paging.current_page
    }

    pub fn snap_page(&self) -> usize {
        self.shared.borrow().paging.snap_page
    }

    /// Live page count of the bound pager
    pub fn page_count(&self) -> Result<usize> {
        let container = self
            .container
            .as_ref()
            .ok_or_else(|| IndicatorError::invalid_state("pager has not been bound"))?;
        container
            .item_count()
            .ok_or_else(|| IndicatorError::invalid_state("bound pager lost its item provider"))
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Distance between neighboring circle centers
    pub fn center_spacing(&self) -> f32 {
        self.radius * 3.0
    }

    /// Compute where every circle goes for the current state
    pub fn marker_layout(&self) -> Result<MarkerLayout> {
        let count = self.page_count()?;
        let paging = self.paging();

        let spacing = self.center_spacing();
        let top = self.padding.top + self.radius;
        let mut left = self.padding.left + self.radius;
        if self.centered {
            let available = self.size.width - self.padding.horizontal();
            left += available / 2.0 - (count as f32 * spacing) / 2.0;
        }

        let strokes = (0..count)
            .map(|i| Point::new(left + i as f32 * spacing, top))
            .collect();

        let fill = (count > 0).then(|| {
            let mut cx = if self.snap {
                paging.snap_page as f32 * spacing
            } else {
                paging.current_page as f32 * spacing
            };
            if !self.snap && paging.page_width_px != 0 {
                cx += (paging.scroll_offset_px as f32 / paging.page_width_px as f32) * spacing;
            }
            Point::new(left + cx, top)
        });

        Ok(MarkerLayout {
            strokes,
            fill,
            radius: self.radius,
        })
    }

    fn measure_width(&self, spec: MeasureSpec) -> Result<u32> {
        if let Some(size) = spec.exact() {
            return Ok(size);
        }
        let count = self.page_count()? as f32;
        let natural = self.padding.horizontal()
            + count * 2.0 * self.radius
            + (count - 1.0) * self.radius
            + 1.0;
        // Truncates like an integer cast; an empty pager saturates at zero
        Ok(spec.resolve(natural as u32))
    }

    fn measure_height(&self, spec: MeasureSpec) -> u32 {
        if let Some(size) = spec.exact() {
            return size;
        }
        let natural = 2.0 * self.radius + self.padding.vertical() + 1.0;
        spec.resolve(natural as u32)
    }
}

impl Widget for CirclePageIndicator {
    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Result<MeasuredSize> {
        Ok(MeasuredSize::new(
            self.measure_width(width)?,
            self.measure_height(height),
        ))
    }

    fn layout(&mut self, size: Size) {
        self.size = size;
    }

    fn draw(&self, ctx: &mut dyn DrawContext) -> Result<()> {
        let markers = self.marker_layout()?;
        tracing::trace!(
            pages = markers.strokes.len(),
            fill = ?markers.fill,
            "Drawing page indicator"
        );

        for center in &markers.strokes {
            ctx.stroke_circle(*center, markers.radius, &self.stroke, self.stroke_color.into());
        }
        if let Some(center) = markers.fill {
            ctx.fill_circle(center, markers.radius, self.fill_color.into());
        }
        Ok(())
    }

    fn save_state(&self, base: Vec<u8>) -> SavedState {
        SavedState::new(base, self.current_page())
    }

    fn restore_state(&mut self, state: SavedState) -> Vec<u8> {
        {
            let mut shared = self.shared.borrow_mut();
            shared.paging.current_page = state.current_page;
            shared.paging.snap_page = state.current_page;
            shared.invalidation.request_layout();
        }
        tracing::debug!(page = state.current_page, "Restored page indicator state");
        state.base
    }
}
