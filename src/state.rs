use dioxus::prelude::*;
use std::sync::{Arc, Mutex};

/// Ui state shared across the component tree. Handed out through the dioxus
/// context so pages never reach for globals.
#[derive(Clone)]
pub struct State {
    pub inner: Arc<Mutex<InnerState>>,
}

pub struct InnerState {
    pub is_loading: Signal<bool>,
    pub menu_open: Signal<bool>,
}

impl State {
    pub fn new() -> Self {
        let inner = InnerState {
            is_loading: Signal::new(true),
            menu_open: Signal::new(false),
        };

        Self {
            inner: Arc::new(Mutex::new(inner)),
        }
    }
}
