use super::client::WikiBackend;

pub const ERROR_MARKDOWN: &str = "# Error\n\nCould not load wiki content.";

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ContentState {
    #[default]
    Loading,
    Ready(String),
    Failed,
}

impl ContentState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ContentState::Loading)
    }

    /// Markdown to display, `None` while the request is pending.
    pub fn markdown(&self) -> Option<&str> {
        match self {
            ContentState::Loading => None,
            ContentState::Ready(content) => Some(content),
            ContentState::Failed => Some(ERROR_MARKDOWN),
        }
    }
}

/// Single generation request; the outcome is the only transition out of
/// `Loading`.
pub async fn load_content<B>(backend: &B) -> ContentState
where
    B: WikiBackend + ?Sized,
{
    match backend.generate().await {
        Ok(generated) => ContentState::Ready(generated.content),
        Err(err) => {
            tracing::error!(error = %err, "error generating wiki");
            ContentState::Failed
        }
    }
}
