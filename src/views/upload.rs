use dioxus::html::HasFileData;
use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Enter,
    Over,
    Leave,
}

/// Drop target state. Dropped files are only recorded, nothing is sent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DropZone {
    dragging: bool,
    dropped: Vec<String>,
}

impl DropZone {
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn dropped(&self) -> &[String] {
        &self.dropped
    }

    pub fn on_drag(&mut self, phase: DragPhase) {
        self.dragging = matches!(phase, DragPhase::Enter | DragPhase::Over);
    }

    pub fn on_drop(&mut self, names: Vec<String>) {
        self.dragging = false;
        tracing::info!(files = ?names, "files dropped");
        self.dropped = names;
    }
}

#[component]
pub fn Upload() -> Element {
    let mut zone = use_signal(DropZone::default);
    let dragging = zone.read().is_dragging();

    let mut drag = move |ev: DragEvent, phase: DragPhase| {
        ev.prevent_default();
        zone.with_mut(|z| z.on_drag(phase));
    };

    rsx! {
        div { class: "upload-page",
            div { class: "upload-container",
                div { class: "upload-header",
                    h2 { "Source Material" }
                    p { "Drop your raw datasets here to begin the transmutation. 🪄" }
                }
                div {
                    class: if dragging { "drop-zone dragging" } else { "drop-zone" },
                    ondragenter: move |ev| drag(ev, DragPhase::Enter),
                    ondragover: move |ev| drag(ev, DragPhase::Over),
                    ondragleave: move |ev| drag(ev, DragPhase::Leave),
                    ondrop: move |ev| {
                        ev.prevent_default();
                        let names = ev.files().map(|engine| engine.files()).unwrap_or_default();
                        zone.with_mut(|z| z.on_drop(names));
                    },
                    div { class: "drop-zone-content",
                        div { class: "upload-icon", "+" }
                        p { "Drag & Drop ZIP" }
                        span { "or click to browse files" }
                    }
                    input {
                        r#type: "file",
                        class: "file-input",
                        accept: ".zip",
                        onchange: move |ev| {
                            let names = ev.files().map(|engine| engine.files()).unwrap_or_default();
                            zone.with_mut(|z| z.on_drop(names));
                        },
                    }
                }
                div { class: "upload-footer",
                    p { "Supported formats: .zip" }
                    p { "Max file size: 50MB" }
                }
            }
        }
    }
}
