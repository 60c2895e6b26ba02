//! Scripted pager used to drive an indicator outside of a real UI host

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use pip_widgets::{PageChangeEvent, PageChangeListener, PageContainer};

/// Pager whose page changes are replayed from the command line
pub struct SimPager {
    pages: usize,
    width_px: i32,
    current: Cell<usize>,
    listener: RefCell<Option<Box<dyn PageChangeListener>>>,
}

impl SimPager {
    pub fn new(pages: usize, width_px: i32) -> Rc<Self> {
        Rc::new(Self {
            pages,
            width_px,
            current: Cell::new(0),
            listener: RefCell::new(None),
        })
    }

    /// Page the pager itself last moved to
    pub fn current_page(&self) -> usize {
        self.current.get()
    }

    /// Deliver an event to the installed listener
    pub fn emit(&self, event: PageChangeEvent) {
        // Take the listener out so it can call back into the pager
        let listener = self.listener.borrow_mut().take();
        if let Some(mut listener) = listener {
            listener.on_page_change(&event);
            let mut slot = self.listener.borrow_mut();
            if slot.is_none() {
                *slot = Some(listener);
            }
        }
    }

    /// Simulate a user drag of `offset_px` from `page` toward the next page
    pub fn drag(&self, page: usize, offset_px: i32) {
        let fraction = if self.width_px != 0 {
            offset_px as f32 / self.width_px as f32
        } else {
            0.0
        };
        self.emit(PageChangeEvent::Scrolled {
            position: page,
            offset_fraction: fraction,
            offset_px,
        });
    }
}

impl PageContainer for SimPager {
    fn item_count(&self) -> Option<usize> {
        Some(self.pages)
    }

    fn width_px(&self) -> i32 {
        self.width_px
    }

    fn set_current_page(&self, index: usize) {
        let page = index.min(self.pages.saturating_sub(1));
        self.current.set(page);
        self.emit(PageChangeEvent::Scrolled {
            position: page,
            offset_fraction: 0.0,
            offset_px: 0,
        });
        self.emit(PageChangeEvent::PageSettled(page));
    }

    fn set_page_change_listener(&self, listener: Box<dyn PageChangeListener>) {
        *self.listener.borrow_mut() = Some(listener);
    }
}
