#![allow(non_snake_case)]

use super::*;

#[component]
pub fn Navbar() -> Element {
    let state = use_context::<State>();
    let mut menu_open = state.inner.lock().unwrap().menu_open.clone();

    let links_class = if menu_open() { "nav-links open" } else { "nav-links" };

    rsx! {
        nav {
            class: "navbar",
            display: "flex",
            justify_content: "space-between",
            align_items: "center",

            Link {
                class: "brand",
                to: Route::Home {},
                "knit"
            }

            button {
                class: "menu-toggle",
                onclick: move |_| {
                    let open = !menu_open();
                    log(("menu open: ", open));
                    menu_open.set(open);
                },
                "☰"
            }

            ul {
                class: "{links_class}",
                for (route, label) in nav_links() {
                    li {
                        Link {
                            to: route,
                            onclick: move |_| menu_open.set(false),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

fn nav_links() -> Vec<(Route, &'static str)> {
    vec![
        (Route::Home {}, "home"),
        (Route::HowItWorks {}, "how it works"),
        (Route::Testimonials {}, "testimonials"),
        (Route::Faq {}, "faq"),
        (Route::About {}, "about"),
    ]
}
