//! Chat module - a stateless keyword responder.

mod chat_responder;

pub use chat_responder::{ChatResponder, ChatRule};
