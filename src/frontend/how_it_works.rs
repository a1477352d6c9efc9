#![allow(non_snake_case)]

use super::*;

const STEPS: &[(&str, &str)] = &[
    (
        "Sign up in minutes",
        "Create an account with your name, email and a debit card. Checking eligibility never touches your credit score.",
    ),
    (
        "Shop like you always do",
        "Pick knit at checkout with any partner merchant, or use the virtual card anywhere online.",
    ),
    (
        "Split the payment",
        "The first quarter is due at purchase. The rest is drafted automatically every two weeks, with a reminder before each draft.",
    ),
    (
        "Watch your credit grow",
        "Every on-time payment is reported to the bureaus monthly. Most members see movement within three billing cycles.",
    ),
];

#[component]
pub fn HowItWorks() -> Element {
    rsx! {
        section {
            class: "how-it-works",
            display: "flex",
            flex_direction: "column",

            h1 { "how knit works" }

            ol {
                class: "steps",
                for (title, detail) in STEPS {
                    li {
                        class: "step",
                        h3 { "{title}" }
                        p { "{detail}" }
                    }
                }
            }

            Link {
                class: "cta-button",
                to: Route::Faq {},
                "still curious? read the faq"
            }
        }
    }
}
