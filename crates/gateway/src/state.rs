use std::sync::Arc;

use {
    bacbot_dialog::DialogEngine, bacbot_messenger::MessageDispatcher,
    bacbot_sessions::SessionStore, secrecy::Secret,
};

/// Process-wide state shared by every request.
pub struct GatewayState {
    pub engine: DialogEngine,
    pub sessions: SessionStore,
    pub dispatcher: Arc<dyn MessageDispatcher>,
    pub verify_token: Secret<String>,
    pub version: String,
}

impl GatewayState {
    pub fn new(
        engine: DialogEngine,
        dispatcher: Arc<dyn MessageDispatcher>,
        verify_token: Secret<String>,
    ) -> Arc<Self> {
        Arc::new(Self {
            engine,
            sessions: SessionStore::new(),
            dispatcher,
            verify_token,
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}
