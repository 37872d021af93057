use crate::theme::{apply_theme_script, theme_definition};
use crate::types::ThemeMode;
use crate::views::{Analytics, Hero, Navbar, Statistics, Upload, Visualize, Wiki};
use dioxus::prelude::*;

const MAIN_CSS: Asset = asset!("/assets/alchemist.css");

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Hero {},
        #[route("/upload")]
        Upload {},
        #[route("/analytics")]
        Analytics {},
        #[route("/statistics")]
        Statistics {},
        #[route("/visualize")]
        Visualize {},
        #[route("/wiki")]
        Wiki {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

#[component]
fn Shell() -> Element {
    let theme = use_signal(ThemeMode::default);

    rsx! {
        ThemeStyles { theme }
        div { class: "App",
            Navbar { theme }
            main { Outlet::<Route> {} }
        }
    }
}

#[component]
fn ThemeStyles(theme: Signal<ThemeMode>) -> Element {
    use_effect(move || {
        document::eval(&apply_theme_script(theme()));
    });

    let definition = theme_definition(theme());
    rsx! {
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        section { class: "not-found",
            h1 { "Nothing transmuted here" }
            p { class: "text-muted", "No page at /{path}." }
            Link { to: Route::Hero {}, "Back home" }
        }
    }
}
