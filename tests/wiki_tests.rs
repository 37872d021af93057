//! Integration tests for the wiki page state
//!
//! Drives content loading and the chat send cycle against a scripted backend

use alchemist::types::{FALLBACK_REPLY, Role, SourceCitation};
use alchemist::wiki::{
    ChatReply, ChatRequest, ContentState, Conversation, ERROR_MARKDOWN, GeneratedContent,
    WikiBackend, WikiError, WikiResult, load_content,
};
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::VecDeque;

/// Replays canned replies and records every request it receives.
#[derive(Default)]
struct ScriptedBackend {
    content: Option<String>,
    replies: RefCell<VecDeque<WikiResult<ChatReply>>>,
    requests: RefCell<Vec<ChatRequest>>,
}

impl ScriptedBackend {
    fn with_content(content: &str) -> Self {
        Self {
            content: Some(content.to_string()),
            ..Self::default()
        }
    }

    fn reply(self, answer: &str, sources: &[&str]) -> Self {
        self.replies.borrow_mut().push_back(Ok(ChatReply {
            answer: answer.to_string(),
            sources: sources.iter().map(|t| SourceCitation::titled(*t)).collect(),
        }));
        self
    }

    fn fail(self) -> Self {
        self.replies.borrow_mut().push_back(Err(WikiError::Status {
            status: 502,
            body: "bad gateway".into(),
        }));
        self
    }
}

#[async_trait(?Send)]
impl WikiBackend for ScriptedBackend {
    async fn generate(&self) -> WikiResult<GeneratedContent> {
        match &self.content {
            Some(content) => Ok(GeneratedContent {
                content: content.clone(),
            }),
            None => Err(WikiError::Status {
                status: 500,
                body: "generation failed".into(),
            }),
        }
    }

    async fn chat(&self, request: &ChatRequest) -> WikiResult<ChatReply> {
        self.requests.borrow_mut().push(request.clone());
        self.replies.borrow_mut().pop_front().unwrap_or_else(|| {
            Err(WikiError::Status {
                status: 503,
                body: "no scripted reply".into(),
            })
        })
    }
}

/// Mirrors what the page does on Send: record, await, record.
async fn send(convo: &mut Conversation, backend: &ScriptedBackend, text: &str) -> bool {
    convo.set_input(text);
    let before = convo.messages().len();
    let Some(request) = convo.begin_send() else {
        return false;
    };
    assert_eq!(convo.messages().len(), before + 1);
    let result = backend.chat(&request).await;
    convo.complete(result);
    true
}

mod content_tests {
    use super::*;

    #[tokio::test]
    async fn test_generated_markdown_replaces_loading() {
        let backend = ScriptedBackend::with_content("# Project Wiki\n\nSummary.");
        let state = load_content(&backend).await;
        assert_eq!(
            state,
            ContentState::Ready("# Project Wiki\n\nSummary.".to_string())
        );
    }

    #[tokio::test]
    async fn test_generation_failure_shows_error_document() {
        let backend = ScriptedBackend::default();
        let state = load_content(&backend).await;
        assert_eq!(state, ContentState::Failed);
        assert_eq!(state.markdown(), Some(ERROR_MARKDOWN));
    }
}

mod chat_tests {
    use super::*;

    #[tokio::test]
    async fn test_database_question_scenario() {
        let backend = ScriptedBackend::default().reply("Postgres", &["doc1"]);
        let mut convo = Conversation::default();

        assert!(send(&mut convo, &backend, "What database was chosen?").await);

        let requests = backend.requests.borrow();
        assert_eq!(
            serde_json::to_value(&requests[0]).unwrap(),
            serde_json::json!({
                "question": "What database was chosen?",
                "chat_history": []
            })
        );

        let reply = &convo.messages()[1];
        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(reply.content, "Postgres");
        assert_eq!(reply.sources_line().as_deref(), Some("Sources: doc1"));
    }

    #[tokio::test]
    async fn test_each_accepted_send_adds_two_entries() {
        let backend = ScriptedBackend::default()
            .reply("one", &[])
            .fail()
            .reply("three", &["a", "b"]);
        let mut convo = Conversation::default();

        for (turn, text) in ["first", "second", "third"].into_iter().enumerate() {
            assert!(send(&mut convo, &backend, text).await);
            assert_eq!(convo.messages().len(), (turn + 1) * 2);
            assert!(!convo.is_sending());
        }

        let contents: Vec<_> = convo.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(
            contents,
            vec!["first", "one", "second", FALLBACK_REPLY, "third", "three"]
        );
    }

    #[tokio::test]
    async fn test_blank_input_never_reaches_backend() {
        let backend = ScriptedBackend::default().reply("unused", &[]);
        let mut convo = Conversation::default();

        assert!(!send(&mut convo, &backend, "   ").await);
        assert!(convo.messages().is_empty());
        assert_eq!(convo.input(), "   ");
        assert!(backend.requests.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_history_grows_with_prior_turns() {
        let backend = ScriptedBackend::default()
            .reply("Postgres", &["doc1"])
            .reply("Cost", &[]);
        let mut convo = Conversation::default();

        send(&mut convo, &backend, "What database was chosen?").await;
        send(&mut convo, &backend, "Why?").await;

        let requests = backend.requests.borrow();
        assert_eq!(requests[1].chat_history.len(), 2);
        assert_eq!(requests[1].chat_history[1].content, "Postgres");
        assert_eq!(
            serde_json::to_value(&requests[1].chat_history[1]).unwrap(),
            serde_json::json!({"role": "assistant", "content": "Postgres"})
        );
    }

    #[tokio::test]
    async fn test_log_is_append_only() {
        let backend = ScriptedBackend::default().reply("a", &[]).reply("b", &[]);
        let mut convo = Conversation::default();

        send(&mut convo, &backend, "q1").await;
        let earlier = convo.messages().to_vec();
        send(&mut convo, &backend, "q2").await;

        assert_eq!(&convo.messages()[..earlier.len()], earlier.as_slice());
    }
}
