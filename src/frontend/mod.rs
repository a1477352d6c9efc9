#![allow(non_snake_case)]

use crate::State;
use dioxus::prelude::*;
use js_sys::Date;
use wasm_bindgen::prelude::*;
use web_sys::console;

mod about;
mod back_to_top;
mod faq;
mod home;
mod how_it_works;
mod navbar;
mod spinner;
mod testimonials;

use about::*;
use back_to_top::*;
use faq::*;
use home::*;
use how_it_works::*;
use navbar::*;
use spinner::*;
use testimonials::*;

pub fn App() -> Element {
    use_context_provider(State::new);
    rsx! {
        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(Wrapper)]
    #[route("/")]
    Home {},
    #[route("/how-it-works")]
    HowItWorks {},
    #[route("/testimonials")]
    Testimonials {},
    #[route("/faq")]
    Faq {},
    #[route("/about")]
    About {},
}

#[component]
fn Wrapper() -> Element {
    let state = use_context::<State>();
    let mut is_loading = state.inner.lock().unwrap().is_loading.clone();

    // Hold the spinner for one beat so the first paint lands with fonts in.
    use_hook(|| {
        wasm_bindgen_futures::spawn_local(async move {
            gloo::timers::future::TimeoutFuture::new(350).await;
            is_loading.set(false);
        });
    });

    rsx! {
        if is_loading() {
            Spinner {}
        } else {
            Navbar {}
            main {
                class: "page",
                Outlet::<Route> {}
            }
            { footer() }
            BackToTop {}
        }
    }
}

pub fn footer() -> Element {
    let year = Date::new_0().get_full_year();

    rsx! {
        footer {
            class: "site-footer",
            display: "flex",
            justify_content: "space-between",

            div { "© {year} knit" }
            div {
                Link {
                    to: Route::About {},
                    "about"
                }
                a {
                    margin_left: "20px",
                    href: "mailto:hello@knitpayments.com",
                    "contact"
                }
            }
        }
    }
}

pub fn log(message: impl std::fmt::Debug) -> impl std::fmt::Debug {
    log_to_console(&message);
    message
}

pub fn log_to_console(message: impl std::fmt::Debug) {
    let message = format!("{:?}", message);
    console::log_1(&JsValue::from_str(&message));
}
