#![allow(non_snake_case)]

use super::*;

use crate::scroll::{BrowserViewport, ScrollTracker};
use std::cell::RefCell;
use std::rc::Rc;

fn arrow_str() -> &'static str {
    include_str!("../../assets/arrow_up.svg")
}

#[component]
pub fn BackToTop() -> Element {
    let mut visible = use_signal(|| false);

    // The tracker outlives individual renders; the subscription is dropped
    // with the component.
    let tracker = use_hook(|| {
        let mut tracker = ScrollTracker::new(BrowserViewport::new());
        tracker.attach(move |shown| visible.set(shown));
        Rc::new(RefCell::new(tracker))
    });

    use_drop({
        let tracker = Rc::clone(&tracker);
        move || tracker.borrow_mut().detach()
    });

    rsx! {
        if visible() {
            button {
                class: "back-to-top",
                onclick: move |_| tracker.borrow().return_to_top(),
                img {
                    width: "20px",
                    height: "20px",
                    src: "{arrow_str()}",
                }
            }
        }
    }
}
