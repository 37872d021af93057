use crate::types::ThemeMode;
use crate::ui::Route;
use dioxus::prelude::*;

pub fn nav_links() -> [(&'static str, Route); 6] {
    [
        ("Home", Route::Hero {}),
        ("Upload", Route::Upload {}),
        ("Analytics", Route::Analytics {}),
        ("Statistics", Route::Statistics {}),
        ("Visualize", Route::Visualize {}),
        ("Wiki", Route::Wiki {}),
    ]
}

#[component]
pub fn Navbar(theme: Signal<ThemeMode>) -> Element {
    let mut theme = theme;
    let mut menu_open = use_signal(|| false);
    let mode = theme();

    rsx! {
        nav { class: "navbar",
            div { class: "navbar-container",
                div { class: "nav-title", "Data Alchemist" }
                ul { class: if menu_open() { "nav-links active" } else { "nav-links" },
                    for (label, route) in nav_links() {
                        li { key: "{label}",
                            Link {
                                to: route,
                                onclick: move |_| menu_open.set(false),
                                "{label}"
                            }
                        }
                    }
                    li {
                        button {
                            class: "theme-toggle",
                            r#type: "button",
                            onclick: move |_| theme.set(mode.toggled()),
                            "{mode.toggle_label()}"
                        }
                    }
                }
                div {
                    class: "nav-toggle",
                    onclick: move |_| menu_open.set(!menu_open()),
                    span { class: "bar" }
                    span { class: "bar" }
                    span { class: "bar" }
                }
            }
        }
    }
}
