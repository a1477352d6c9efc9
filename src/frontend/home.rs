#![allow(non_snake_case)]

use super::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section {
            class: "hero",
            display: "flex",
            flex_direction: "column",
            align_items: "center",

            h1 { "Pay over time. Build credit while you're at it." }
            p {
                class: "hero-subtitle",
                "knit splits everyday purchases into small weekly payments and reports every on-time payment to the credit bureaus. No hidden fees, no hard credit pull to get started."
            }
            div {
                class: "hero-cta",
                Link {
                    class: "cta-button",
                    to: Route::HowItWorks {},
                    "see how it works"
                }
                Link {
                    class: "cta-link",
                    to: Route::Faq {},
                    "questions? read the faq"
                }
            }
        }

        section {
            class: "value-props",
            display: "flex",
            flex_direction: "row",
            justify_content: "center",

            for (title, blurb) in value_props() {
                div {
                    class: "value-prop",
                    h3 { "{title}" }
                    p { "{blurb}" }
                }
            }
        }

        section {
            class: "closing-cta",
            display: "flex",
            flex_direction: "column",
            align_items: "center",

            h2 { "Good credit shouldn't require credit to begin with." }
            p { "Join the thousands already knitting their credit history together, one small payment at a time." }
            Link {
                class: "cta-button",
                to: Route::Testimonials {},
                "hear it from our members"
            }
        }
    }
}

fn value_props() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "Split any purchase",
            "Four equal payments over six weeks, on a schedule you can actually see.",
        ),
        (
            "Build real history",
            "On-time payments are reported monthly to all three major bureaus.",
        ),
        (
            "Know the cost up front",
            "The total you see at checkout is the total you pay. Late fees are capped and disclosed.",
        ),
    ]
}
