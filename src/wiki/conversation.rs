use crate::types::{ChatMessage, HistoryTurn};

use super::client::{ChatReply, ChatRequest};
use super::error::WikiResult;

pub const SUGGESTED_QUESTIONS: [&str; 3] = [
    "What database was chosen?",
    "What contradictions exist?",
    "Tell me about the budget",
];

/// Chat state for one visit to the wiki page.
///
/// The log only ever grows. A send is split in two so the caller can await
/// the network in between: [`Conversation::begin_send`] records the question
/// and yields the request, [`Conversation::complete`] records the outcome.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    input: String,
    sending: bool,
}

impl Conversation {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn can_send(&self) -> bool {
        !self.sending && !self.input.trim().is_empty()
    }

    pub fn begin_send(&mut self) -> Option<ChatRequest> {
        if !self.can_send() {
            return None;
        }

        let chat_history = self.messages.iter().map(HistoryTurn::from).collect();
        let question = std::mem::take(&mut self.input);
        self.messages.push(ChatMessage::user(question.clone()));
        self.sending = true;

        Some(ChatRequest {
            question,
            chat_history,
        })
    }

    pub fn complete(&mut self, result: WikiResult<ChatReply>) {
        let reply = match result {
            Ok(reply) => ChatMessage::assistant(reply.answer, reply.sources),
            Err(err) => {
                tracing::warn!(error = %err, "chat request failed");
                ChatMessage::fallback()
            }
        };
        self.messages.push(reply);
        self.sending = false;
    }
}
