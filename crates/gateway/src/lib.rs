//! HTTP front of the bot: webhook handshake, event intake, and the
//! per-delivery conversation turn.
//!
//! Lifecycle:
//! 1. Load config
//! 2. Build catalog client, dialog engine, dispatcher, session store
//! 3. Serve `/webhook`, `/`, `/health` until SIGTERM or Ctrl-C

pub mod conversation;
pub mod server;
pub mod state;
pub mod webhook;
