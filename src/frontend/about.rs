#![allow(non_snake_case)]

use super::*;

#[component]
pub fn About() -> Element {
    rsx! {
        div {
            class: "about",
            display: "flex",
            flex_direction: "column",

            Link {to: Route::Home{}, "back"}

            h1 { "about knit" }

            p {
                "knit started with a simple observation: the people who most need a credit history are the ones the credit system refuses to talk to."
            }
            p {
                "Traditional cards want a score before they'll help you build one. We flipped that. knit lets you split the purchases you were already making into small, predictable payments, and turns each one you make on time into reported credit history."
            }
            p {
                "We make money from merchant fees, not from tripping you up. No revolving interest, no compounding penalties, and a payment calendar you can read at a glance."
            }
            p {
                "knit is built by a small team of payments engineers and former credit-bureau folks who think the on-ramp to credit should be a sidewalk, not a toll road."
            }
        }
    }
}
