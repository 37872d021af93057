#[derive(Debug, thiserror::Error)]
pub enum WikiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("wiki endpoint error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type WikiResult<T> = Result<T, WikiError>;
