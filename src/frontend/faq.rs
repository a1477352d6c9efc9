#![allow(non_snake_case)]

use super::*;

use crate::content;

#[component]
pub fn Faq() -> Element {
    let entries = use_signal(content::faq_entries);

    rsx! {
        section {
            class: "faq",
            display: "flex",
            flex_direction: "column",

            Link {to: Route::Home{}, "back"}

            h1 { "frequently asked questions" }

            for entry in entries() {
                details {
                    class: "faq-entry",
                    summary { "{entry.question}" }
                    p { "{entry.answer}" }
                }
            }
        }
    }
}
