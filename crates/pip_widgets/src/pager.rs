//! Paged container contract
//!
//! The indicator does not scroll anything itself. It observes a host-owned
//! pager through the `PageContainer` trait and receives page changes as
//! `PageChangeEvent`s.
//!
//! # Threading
//!
//! Pagers and listeners live on the UI thread. None of these types are `Send`,
//! and a pager may dispatch events synchronously from inside
//! `set_current_page`.

/// Scroll phase reported by the pager
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollState {
    /// Pager is at rest on a page
    #[default]
    Idle,
    /// User is dragging the pages
    Dragging,
    /// Pager is animating toward its final page
    Settling,
}

/// A page change relayed by the pager
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PageChangeEvent {
    /// Scroll phase changed
    ScrollStateChanged(ScrollState),
    /// Pages moved. `position` is the page left of the viewport's leading
    /// edge, `offset_fraction` in `0.0..1.0` and `offset_px` describe how far
    /// the next page has moved in.
    Scrolled {
        position: usize,
        offset_fraction: f32,
        offset_px: i32,
    },
    /// A page became the selected page
    PageSettled(usize),
}

/// Receiver of page change events
pub trait PageChangeListener {
    fn on_page_change(&mut self, event: &PageChangeEvent);
}

impl<F> PageChangeListener for F
where
    F: FnMut(&PageChangeEvent),
{
    fn on_page_change(&mut self, event: &PageChangeEvent) {
        self(event)
    }
}

/// Host pager observed by page indicators
///
/// Methods take `&self`; pagers are UI handles and manage their own interior
/// mutability. Implementations must not hold a borrow of their own state
/// while invoking the registered listener, since the listener reads
/// `width_px` back.
pub trait PageContainer {
    /// Number of pages, or `None` when the pager has no item provider yet.
    /// May change at any time without notification.
    fn item_count(&self) -> Option<usize>;

    /// Width of one page in pixels
    fn width_px(&self) -> i32;

    /// Move to `index`; the pager drives its own transition
    fn set_current_page(&self, index: usize);

    /// Install the single page change listener, replacing any previous one
    fn set_page_change_listener(&self, listener: Box<dyn PageChangeListener>);
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory pager for widget tests

    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;

    pub(crate) struct FakePager {
        count: Cell<Option<usize>>,
        width: Cell<i32>,
        current: Cell<usize>,
        listener: RefCell<Option<Box<dyn PageChangeListener>>>,
        listener_installs: Cell<usize>,
        settle_on_set: Cell<bool>,
    }

    impl FakePager {
        pub(crate) fn new(count: usize, width: i32) -> Rc<Self> {
            Rc::new(Self {
                count: Cell::new(Some(count)),
                width: Cell::new(width),
                current: Cell::new(0),
                listener: RefCell::new(None),
                listener_installs: Cell::new(0),
                settle_on_set: Cell::new(false),
            })
        }

        pub(crate) fn without_provider() -> Rc<Self> {
            let pager = Self::new(0, 320);
            pager.count.set(None);
            pager
        }

        pub(crate) fn set_count(&self, count: Option<usize>) {
            self.count.set(count);
        }

        pub(crate) fn set_width(&self, width: i32) {
            self.width.set(width);
        }

        /// Dispatch `PageSettled` synchronously from `set_current_page`
        pub(crate) fn settle_immediately(&self) {
            self.settle_on_set.set(true);
        }

        pub(crate) fn current(&self) -> usize {
            self.current.get()
        }

        pub(crate) fn has_listener(&self) -> bool {
            self.listener.borrow().is_some()
        }

        pub(crate) fn listener_installs(&self) -> usize {
            self.listener_installs.get()
        }

        pub(crate) fn emit(&self, event: PageChangeEvent) {
            if let Some(listener) = self.listener.borrow_mut().as_mut() {
                listener.on_page_change(&event);
            }
        }
    }

    impl PageContainer for FakePager {
        fn item_count(&self) -> Option<usize> {
            self.count.get()
        }

        fn width_px(&self) -> i32 {
            self.width.get()
        }

        fn set_current_page(&self, index: usize) {
            self.current.set(index);
            if self.settle_on_set.get() {
                self.emit(PageChangeEvent::PageSettled(index));
            }
        }

        fn set_page_change_listener(&self, listener: Box<dyn PageChangeListener>) {
            *self.listener.borrow_mut() = Some(listener);
            self.listener_installs.set(self.listener_installs.get() + 1);
        }
    }
}
