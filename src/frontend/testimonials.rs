#![allow(non_snake_case)]

use super::*;

use crate::content;

#[component]
pub fn Testimonials() -> Element {
    let quotes = use_signal(content::testimonials);

    rsx! {
        section {
            class: "testimonials",
            display: "flex",
            flex_direction: "column",

            h1 { "what members say" }

            div {
                class: "testimonial-grid",
                display: "flex",
                flex_direction: "row",
                flex_wrap: "wrap",

                for t in quotes() {
                    figure {
                        class: "testimonial-card",
                        blockquote { "\u{201c}{t.quote}\u{201d}" }
                        figcaption {
                            span { class: "testimonial-name", "{t.name}" }
                            span { class: "testimonial-role", "{t.role}" }
                        }
                    }
                }
            }
        }
    }
}
