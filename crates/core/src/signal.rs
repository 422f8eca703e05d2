use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::controller::ViewStateController;
use crate::layout::LayoutSource;

type ScrollHandler = Rc<dyn Fn(f64)>;
type HandlerList = RefCell<Vec<ScrollHandler>>;

/// Single-threaded broadcast of scroll offsets from the host view.
///
/// The host calls [`ScrollFeed::emit`] once per scroll event; every live
/// subscriber sees every event. No debouncing happens here.
#[derive(Clone, Default)]
pub struct ScrollFeed {
    handlers: Rc<HandlerList>,
}

impl ScrollFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` until the returned guard is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, handler: impl Fn(f64) + 'static) -> ScrollSubscription {
        let handler: ScrollHandler = Rc::new(handler);
        self.handlers.borrow_mut().push(Rc::clone(&handler));
        ScrollSubscription {
            handler,
            handlers: Rc::downgrade(&self.handlers),
        }
    }

    /// Deliver one scroll event. Handlers added or removed while this runs
    /// take effect from the next event. Returns how many were notified.
    pub fn emit(&self, scroll_offset: f64) -> usize {
        let handlers = self.handlers.borrow().clone();
        for handler in &handlers {
            handler(scroll_offset);
        }
        handlers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

impl std::fmt::Debug for ScrollFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollFeed")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Live registration on a [`ScrollFeed`]. Unsubscribes exactly once, on
/// drop, and tolerates the feed having been dropped first.
pub struct ScrollSubscription {
    handler: ScrollHandler,
    handlers: Weak<HandlerList>,
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(handlers) = self.handlers.upgrade() {
            handlers
                .borrow_mut()
                .retain(|h| !Rc::ptr_eq(h, &self.handler));
        }
    }
}

impl std::fmt::Debug for ScrollSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollSubscription")
            .field("attached", &(self.handlers.strong_count() > 0))
            .finish()
    }
}

/// Drive `controller` from `feed`, reading section extents from `layout`
/// at delivery time.
pub fn bind_controller<L>(
    feed: &ScrollFeed,
    controller: Rc<RefCell<ViewStateController>>,
    layout: Rc<RefCell<L>>,
) -> ScrollSubscription
where
    L: LayoutSource + 'static,
{
    feed.subscribe(move |scroll_offset| {
        let Ok(mut controller) = controller.try_borrow_mut() else {
            log::warn!("scroll event at {scroll_offset} dropped: controller busy");
            return;
        };
        let Ok(layout) = layout.try_borrow() else {
            log::warn!("scroll event at {scroll_offset} dropped: layout being measured");
            return;
        };
        controller.on_scroll(scroll_offset, &*layout);
    })
}
