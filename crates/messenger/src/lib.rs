//! Messenger platform adapter.
//!
//! Decodes inbound webhook events into `(sender, token)` pairs, answers the
//! subscription handshake, and delivers dialog replies through the Graph
//! Send API.

pub mod error;
pub mod event;
pub mod outbound;
pub mod payload;
pub mod verify;

pub use {
    error::{Error, Result},
    event::{InboundText, WebhookEvent},
    outbound::{GraphApiDispatcher, MessageDispatcher, deliver_all},
    verify::{VerifyQuery, verify_subscription},
};
