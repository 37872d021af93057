use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphNode {
    pub id: &'static str,
    pub x: i32,
    pub y: i32,
    pub label: &'static str,
    pub impact: u8,
}

impl GraphNode {
    pub fn radius(&self) -> i32 {
        15 + i32::from(self.impact) * 5
    }

    pub fn label_y(&self) -> i32 {
        self.y + 45
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeKind {
    Updates,
    RelatesTo,
    Contradicts,
}

impl EdgeKind {
    pub fn css_class(self) -> &'static str {
        match self {
            EdgeKind::Updates => "updates",
            EdgeKind::RelatesTo => "relates_to",
            EdgeKind::Contradicts => "contradicts",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphEdge {
    pub from: &'static str,
    pub to: &'static str,
    pub kind: EdgeKind,
}

// Coordinates are laid out for an 800x600 view box.
pub static GRAPH_NODES: [GraphNode; 5] = [
    GraphNode {
        id: "doc_1",
        x: 400,
        y: 100,
        label: "Project Alpha - Kickoff",
        impact: 5,
    },
    GraphNode {
        id: "doc_5",
        x: 200,
        y: 300,
        label: "Budget Meeting",
        impact: 2,
    },
    GraphNode {
        id: "doc_4",
        x: 400,
        y: 300,
        label: "Q1 Retrospective",
        impact: 2,
    },
    GraphNode {
        id: "doc_3",
        x: 600,
        y: 300,
        label: "Architecture Review",
        impact: 2,
    },
    GraphNode {
        id: "doc_2",
        x: 400,
        y: 500,
        label: "Security Policy",
        impact: 1,
    },
];

pub static GRAPH_EDGES: [GraphEdge; 4] = [
    GraphEdge {
        from: "doc_1",
        to: "doc_5",
        kind: EdgeKind::Updates,
    },
    GraphEdge {
        from: "doc_1",
        to: "doc_4",
        kind: EdgeKind::RelatesTo,
    },
    GraphEdge {
        from: "doc_1",
        to: "doc_3",
        kind: EdgeKind::Contradicts,
    },
    GraphEdge {
        from: "doc_4",
        to: "doc_2",
        kind: EdgeKind::RelatesTo,
    },
];

pub fn find_node(id: &str) -> Option<&'static GraphNode> {
    GRAPH_NODES.iter().find(|node| node.id == id)
}

/// Edges with both endpoints resolved; dangling edges are skipped.
pub fn resolved_edges() -> Vec<(&'static GraphNode, &'static GraphNode, EdgeKind)> {
    GRAPH_EDGES
        .iter()
        .filter_map(|edge| Some((find_node(edge.from)?, find_node(edge.to)?, edge.kind)))
        .collect()
}

/// Which node the detail drawer is showing, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GraphSelection {
    selected: Option<&'static GraphNode>,
}

impl GraphSelection {
    pub fn select(&mut self, id: &str) {
        if let Some(node) = find_node(id) {
            self.selected = Some(node);
        }
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&'static GraphNode> {
        self.selected
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.is_some_and(|node| node.id == id)
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}

#[component]
pub fn Visualize() -> Element {
    let mut selection = use_signal(GraphSelection::default);
    let current = selection();
    let edges = resolved_edges();

    rsx! {
        div { class: "visualize-page",
            div { class: "visualize-container",
                header { class: "viz-header",
                    p { class: "eyebrow", "Knowledge Mapping" }
                    h1 { "Relationship Graph" }
                }
                div { class: "viz-canvas-wrapper",
                    svg { class: "graph-svg", view_box: "0 0 800 600",
                        for (i, (from, to, kind)) in edges.iter().enumerate() {
                            line {
                                key: "{i}",
                                x1: "{from.x}",
                                y1: "{from.y}",
                                x2: "{to.x}",
                                y2: "{to.y}",
                                class: format_args!("edge-line {}", kind.css_class()),
                            }
                        }
                        for node in GRAPH_NODES.iter() {
                            g {
                                key: "{node.id}",
                                class: "node-group",
                                onclick: move |_| selection.with_mut(|s| s.select(node.id)),
                                circle {
                                    cx: "{node.x}",
                                    cy: "{node.y}",
                                    r: "{node.radius()}",
                                    class: if current.is_selected(node.id) { "node-dot active" } else { "node-dot" },
                                }
                                text { x: "{node.x}", y: "{node.label_y()}", class: "node-text", "{node.label}" }
                            }
                        }
                    }
                    aside { class: if current.is_open() { "viz-drawer open" } else { "viz-drawer" },
                        if let Some(node) = current.selected() {
                            div { class: "drawer-content",
                                h3 { "{node.label}" }
                                div { class: "stat-row",
                                    span { "Impact Score" }
                                    strong { "{node.impact}/5" }
                                }
                                p { class: "node-desc",
                                    "This document serves as a primary anchor in the current data cluster."
                                }
                                button { onclick: move |_| selection.with_mut(GraphSelection::close), "Close" }
                            }
                        }
                    }
                }
            }
        }
    }
}
