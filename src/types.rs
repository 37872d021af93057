use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// Provenance attached to an assistant reply. Only `title` is required;
/// anything else the backend sends is kept as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceCitation {
    pub title: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SourceCitation {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            extra: Map::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<SourceCitation>,
}

pub const FALLBACK_REPLY: &str = "Sorry, I encountered an error.";

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            sources: Vec::new(),
        }
    }

    pub fn assistant(content: impl Into<String>, sources: Vec<SourceCitation>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            sources,
        }
    }

    pub fn fallback() -> Self {
        Self::assistant(FALLBACK_REPLY, Vec::new())
    }

    /// `"Sources: a, b"` when the message carries citations.
    pub fn sources_line(&self) -> Option<String> {
        if self.sources.is_empty() {
            return None;
        }
        let titles = self
            .sources
            .iter()
            .map(|source| source.title.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Some(format!("Sources: {titles}"))
    }
}

/// What the chat endpoint sees of a prior message: citations are dropped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryTurn {
    pub role: Role,
    pub content: String,
}

impl From<&ChatMessage> for HistoryTurn {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: msg.role,
            content: msg.content.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Value written to the root element's `data-theme` attribute.
    pub fn attr(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Label of the toggle button: names the mode a click switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeMode::Light => "DARK",
            ThemeMode::Dark => "LIGHT",
        }
    }
}
