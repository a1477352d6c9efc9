#![allow(non_snake_case)]

use dioxus::prelude::*;
use tracing::Level;

mod content;
mod frontend;
mod scroll;
mod state;

pub use state::State;

fn main() {
    // Init logger
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    launch(frontend::App);
}
