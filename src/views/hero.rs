use crate::ui::Route;
use dioxus::prelude::*;

#[component]
pub fn Hero() -> Element {
    let navigator = use_navigator();

    rsx! {
        section { class: "hero",
            div { class: "hero-container",
                p { class: "hero-eyebrow", "ESTABLISHED 2026" }
                h1 { class: "hero-title",
                    "Turning Dark Data into "
                    span { class: "accent", "Digital Gold" }
                }
                p { class: "hero-subtitle",
                    "Advanced analytics and visualization for the modern web. Built with precision, powered by alchemy."
                }
                div { class: "hero-btns",
                    button {
                        class: "btn-primary",
                        onclick: move |_| {
                            navigator.push(Route::Analytics {});
                        },
                        "Start Analyzing"
                    }
                    button {
                        class: "btn-secondary",
                        onclick: move |_| {
                            navigator.push(Route::Statistics {});
                        },
                        "View Current Stats"
                    }
                }
            }
        }
    }
}
