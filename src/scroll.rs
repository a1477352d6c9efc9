use gloo::events::EventListener;
use std::cell::Cell;
use std::rc::Rc;
use web_sys::{ScrollBehavior, ScrollToOptions};

/// Scroll offset, in CSS pixels from the top of the page, past which the
/// back-to-top button is shown.
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;

/// Exactly at the threshold the button stays hidden.
pub fn past_threshold(offset: f64) -> bool {
    offset > BACK_TO_TOP_THRESHOLD
}

/// The scrollable area being watched. The browser window in production,
/// a scripted stand-in under test.
pub trait Viewport {
    /// Owned subscription handle. Dropping it stops the notifications,
    /// synchronously.
    type Subscription;

    fn on_scroll(&self, callback: Box<dyn FnMut(f64)>) -> Self::Subscription;

    /// Ask the viewport to glide back to offset 0. No-op if already there.
    fn return_to_top(&self);
}

/// Tracks the viewport's scroll offset and derives whether the back-to-top
/// button should be showing.
pub struct ScrollTracker<V: Viewport> {
    viewport: V,
    visible: Rc<Cell<bool>>,
    subscription: Option<V::Subscription>,
}

impl<V: Viewport> ScrollTracker<V> {
    pub fn new(viewport: V) -> Self {
        Self {
            viewport,
            visible: Rc::new(Cell::new(false)),
            subscription: None,
        }
    }

    /// Subscribe to the viewport and start tracking. The button starts out
    /// hidden until an offset past the threshold comes in. `on_change` fires
    /// once per hidden/visible transition with the new value. Attaching an
    /// already attached tracker keeps the existing subscription.
    pub fn attach(&mut self, mut on_change: impl FnMut(bool) + 'static) {
        if self.subscription.is_some() {
            return;
        }

        self.visible.set(false);
        let visible = Rc::clone(&self.visible);
        self.subscription = Some(self.viewport.on_scroll(Box::new(move |offset| {
            let shown = past_threshold(offset);
            if shown != visible.get() {
                visible.set(shown);
                on_change(shown);
            }
        })));
    }

    /// Drop the subscription and reset to hidden. Safe to call on a tracker
    /// that was never attached.
    pub fn detach(&mut self) {
        if self.subscription.take().is_some() {
            self.visible.set(false);
        }
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn visible(&self) -> bool {
        self.visible.get()
    }

    pub fn return_to_top(&self) {
        self.viewport.return_to_top();
    }
}

/// [`Viewport`] backed by the browser window.
pub struct BrowserViewport {
    window: web_sys::Window,
}

impl BrowserViewport {
    pub fn new() -> Self {
        Self {
            window: gloo_utils::window(),
        }
    }
}

impl Viewport for BrowserViewport {
    type Subscription = EventListener;

    fn on_scroll(&self, mut callback: Box<dyn FnMut(f64)>) -> EventListener {
        let window = self.window.clone();
        EventListener::new(&self.window, "scroll", move |_| {
            callback(window.scroll_y().unwrap_or_default());
        })
    }

    fn return_to_top(&self) {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&opts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeHost {
        listeners: RefCell<Vec<(u32, Box<dyn FnMut(f64)>)>>,
        next_id: Cell<u32>,
        top_requests: Cell<u32>,
    }

    impl FakeHost {
        fn scroll_to(&self, offset: f64) {
            for (_, callback) in self.listeners.borrow_mut().iter_mut() {
                callback(offset);
            }
        }

        fn listener_count(&self) -> usize {
            self.listeners.borrow().len()
        }
    }

    struct FakeViewport(Rc<FakeHost>);

    struct FakeSubscription {
        host: Rc<FakeHost>,
        id: u32,
    }

    impl Drop for FakeSubscription {
        fn drop(&mut self) {
            self.host.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }

    impl Viewport for FakeViewport {
        type Subscription = FakeSubscription;

        fn on_scroll(&self, callback: Box<dyn FnMut(f64)>) -> FakeSubscription {
            let id = self.0.next_id.get();
            self.0.next_id.set(id + 1);
            self.0.listeners.borrow_mut().push((id, callback));
            FakeSubscription {
                host: Rc::clone(&self.0),
                id,
            }
        }

        fn return_to_top(&self) {
            self.0.top_requests.set(self.0.top_requests.get() + 1);
        }
    }

    fn tracker() -> (Rc<FakeHost>, ScrollTracker<FakeViewport>) {
        let host = Rc::new(FakeHost::default());
        let tracker = ScrollTracker::new(FakeViewport(Rc::clone(&host)));
        (host, tracker)
    }

    #[test]
    fn hidden_until_scrolled_past_threshold() {
        let (host, mut tracker) = tracker();
        assert!(!tracker.visible());

        tracker.attach(|_| {});
        assert!(!tracker.visible());

        host.scroll_to(301.0);
        assert!(tracker.visible());
    }

    #[test]
    fn threshold_is_exclusive() {
        let (host, mut tracker) = tracker();
        tracker.attach(|_| {});

        host.scroll_to(BACK_TO_TOP_THRESHOLD);
        assert!(!tracker.visible());

        host.scroll_to(BACK_TO_TOP_THRESHOLD + 1.0);
        assert!(tracker.visible());

        host.scroll_to(0.0);
        assert!(!tracker.visible());
    }

    #[test]
    fn follows_the_scroll_sequence() {
        let (host, mut tracker) = tracker();
        tracker.attach(|_| {});

        let mut seen = vec![];
        for offset in [0.0, 400.0, 150.0, 500.0] {
            host.scroll_to(offset);
            seen.push(tracker.visible());
        }

        assert_eq!(seen, vec![false, true, false, true]);
    }

    #[test]
    fn attach_is_idempotent() {
        let (host, mut tracker) = tracker();
        tracker.attach(|_| {});
        tracker.attach(|_| {});
        assert_eq!(host.listener_count(), 1);

        tracker.detach();
        assert_eq!(host.listener_count(), 0);
        assert!(!tracker.is_attached());

        host.scroll_to(1000.0);
        assert!(!tracker.visible());
    }

    #[test]
    fn detach_without_attach_is_a_noop() {
        let (host, mut tracker) = tracker();
        tracker.detach();
        assert!(!tracker.is_attached());
        assert_eq!(host.listener_count(), 0);
    }

    #[test]
    fn detach_resets_visibility() {
        let (host, mut tracker) = tracker();
        tracker.attach(|_| {});
        host.scroll_to(800.0);
        assert!(tracker.visible());

        tracker.detach();
        assert!(!tracker.visible());
    }

    #[test]
    fn change_observer_fires_on_transitions_only() {
        let (host, mut tracker) = tracker();
        let changes = Rc::new(RefCell::new(vec![]));
        let seen = Rc::clone(&changes);
        tracker.attach(move |shown| seen.borrow_mut().push(shown));

        host.scroll_to(100.0);
        host.scroll_to(400.0);
        host.scroll_to(450.0);
        host.scroll_to(10.0);

        assert_eq!(*changes.borrow(), vec![true, false]);
    }

    #[test]
    fn return_to_top_always_reaches_the_viewport() {
        let (host, mut tracker) = tracker();
        tracker.attach(|_| {});

        tracker.return_to_top();
        host.scroll_to(500.0);
        tracker.return_to_top();

        assert_eq!(host.top_requests.get(), 2);
    }
}
