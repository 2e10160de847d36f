//! The menu conversation state machine.
//!
//! [`DialogEngine::handle`] maps a session and one inbound token to the next
//! session and the ordered replies to send. It performs catalog reads but no
//! transport I/O; delivering the replies is the caller's job.

pub mod engine;
pub mod input;
pub mod message;
pub mod prompts;

pub use {
    engine::{DialogEngine, MaterialKind, ResetReason, Transition, TurnOutcome},
    message::{AttachmentKind, OutboundMessage, QuickReply},
};
