//! Wiki backend access and the state the wiki page keeps about it.
//!
//! - `client` - `WikiBackend` trait and the reqwest-based `HttpWikiClient`
//! - `content` - generated document loader state
//! - `conversation` - chat log and the send state machine
mod client;
mod content;
mod conversation;
mod error;

pub use client::{
    ChatReply, ChatRequest, GeneratedContent, HttpWikiClient, WikiBackend, parse_chat_body,
    parse_generate_body,
};
pub use content::{ContentState, ERROR_MARKDOWN, load_content};
pub use conversation::{Conversation, SUGGESTED_QUESTIONS};
pub use error::{WikiError, WikiResult};
