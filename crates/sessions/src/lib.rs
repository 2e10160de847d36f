//! Per-sender dialogue state.
//!
//! One [`Session`] per sender identifier, created lazily on first contact and
//! kept for the lifetime of the process. Sessions are never evicted.

pub mod session;
pub mod store;

pub use {
    session::{Session, Step},
    store::{SessionGuard, SessionStore},
};
