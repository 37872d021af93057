use crate::config::AppConfig;
use crate::types::{HistoryTurn, SourceCitation};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};

use super::error::{WikiError, WikiResult};

const GENERATE_PATH: &str = "/api/wiki/generate";
const CHAT_PATH: &str = "/api/wiki/chat";

// ============================================
// Wire types
// ============================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub question: String,
    pub chat_history: Vec<HistoryTurn>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub answer: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sources: Vec<SourceCitation>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<SourceCitation>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<SourceCitation>>::deserialize(deserializer)?.unwrap_or_default())
}

pub fn parse_generate_body(body: &str) -> WikiResult<GeneratedContent> {
    Ok(serde_json::from_str(body)?)
}

pub fn parse_chat_body(body: &str) -> WikiResult<ChatReply> {
    Ok(serde_json::from_str(body)?)
}

// ============================================
// Backend seam
// ============================================

/// The two endpoints the wiki page talks to. `?Send` because reqwest
/// futures are not `Send` in the browser.
#[async_trait(?Send)]
pub trait WikiBackend {
    async fn generate(&self) -> WikiResult<GeneratedContent>;

    async fn chat(&self, request: &ChatRequest) -> WikiResult<ChatReply>;
}

#[derive(Clone, Debug)]
pub struct HttpWikiClient {
    base: String,
    http: reqwest::Client,
}

impl HttpWikiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base.clone())
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

async fn read_body<T>(
    res: reqwest::Response,
    parse: fn(&str) -> WikiResult<T>,
) -> WikiResult<T> {
    let status = res.status();
    let body_text = res.text().await?;
    if !status.is_success() {
        return Err(WikiError::Status {
            status: status.as_u16(),
            body: body_text,
        });
    }
    parse(&body_text)
}

#[async_trait(?Send)]
impl WikiBackend for HttpWikiClient {
    async fn generate(&self) -> WikiResult<GeneratedContent> {
        let url = self.endpoint(GENERATE_PATH);
        tracing::debug!(%url, "requesting wiki content");
        let res = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;
        read_body(res, parse_generate_body).await
    }

    async fn chat(&self, request: &ChatRequest) -> WikiResult<ChatReply> {
        let url = self.endpoint(CHAT_PATH);
        tracing::debug!(%url, turns = request.chat_history.len(), "sending chat question");
        let res = self.http.post(url).json(request).send().await?;
        read_body(res, parse_chat_body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    #[test]
    fn endpoints_join_base_and_path() {
        let client = HttpWikiClient::from_config(&AppConfig::default());
        assert_eq!(
            client.endpoint(GENERATE_PATH),
            "http://localhost:5000/api/wiki/generate"
        );
        assert_eq!(
            client.endpoint(CHAT_PATH),
            "http://localhost:5000/api/wiki/chat"
        );
    }

    #[test]
    fn chat_request_wire_shape() {
        let request = ChatRequest {
            question: "Tell me about the budget".into(),
            chat_history: vec![HistoryTurn {
                role: Role::User,
                content: "hello".into(),
            }],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "question": "Tell me about the budget",
                "chat_history": [{"role": "user", "content": "hello"}]
            })
        );
    }

    #[test]
    fn chat_body_sources_are_optional() {
        let reply = parse_chat_body(r#"{"answer":"no idea"}"#).unwrap();
        assert!(reply.sources.is_empty());

        let reply = parse_chat_body(r#"{"answer":"no idea","sources":null}"#).unwrap();
        assert!(reply.sources.is_empty());

        let reply =
            parse_chat_body(r#"{"answer":"Postgres","sources":[{"title":"doc1","id":"doc_1"}]}"#)
                .unwrap();
        assert_eq!(reply.answer, "Postgres");
        assert_eq!(reply.sources[0].title, "doc1");
    }

    #[test]
    fn malformed_bodies_are_decode_errors() {
        assert!(matches!(
            parse_generate_body("<html>oops</html>"),
            Err(WikiError::Decode(_))
        ));
        assert!(matches!(
            parse_chat_body(r#"{"sources":[]}"#),
            Err(WikiError::Decode(_))
        ));
    }

    #[test]
    fn generate_body_parses_content() {
        let body = parse_generate_body(r##"{"content":"# Overview\n\nText"}"##).unwrap();
        assert_eq!(body.content, "# Overview\n\nText");
    }
}
