#![allow(non_snake_case)]

use super::*;

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div {
            class: "spinner-overlay",
            display: "flex",
            justify_content: "center",
            align_items: "center",
            height: "100vh",

            div { class: "spinner" }
            span { class: "sr-only", "loading" }
        }
    }
}
