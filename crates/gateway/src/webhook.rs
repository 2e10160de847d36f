use std::sync::Arc;

use {
    axum::{
        body::Bytes,
        extract::{Query, State},
        http::StatusCode,
        response::{IntoResponse, Response},
    },
    bacbot_messenger::{InboundText, VerifyQuery, WebhookEvent, verify_subscription},
    serde_json::Value,
    tracing::{Instrument, debug, info, info_span, warn},
};

use crate::{conversation::process_delivery, server::AppState, state::GatewayState};

pub const EVENT_RECEIVED: &str = "EVENT_RECEIVED";
pub const VERIFICATION_FAILED: &str = "Verification failed";
pub const WELCOME_BANNER: &str = "Welcome to the Bac Bot API!";

/// `GET /webhook`: subscription handshake.
pub async fn verify_handler(
    State(state): State<AppState>,
    Query(query): Query<VerifyQuery>,
) -> Response {
    match verify_subscription(&query, &state.gateway.verify_token) {
        Some(challenge) => {
            info!("webhook verified");
            (StatusCode::OK, challenge).into_response()
        },
        None => {
            warn!(mode = ?query.mode, "webhook verification failed");
            (StatusCode::FORBIDDEN, VERIFICATION_FAILED).into_response()
        },
    }
}

/// `POST /webhook`: acknowledge a page delivery and process it in the
/// background.
///
/// Every body whose `object` is `"page"` is acknowledged, even when some of
/// its messaging items are malformed. Anything else (including bodies that
/// are not JSON) gets a bare 404 and is otherwise ignored.
pub async fn event_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let body = match serde_json::from_slice::<Value>(&body) {
        Ok(body) => body,
        Err(e) => {
            debug!(error = %e, "ignoring non-JSON webhook body");
            return StatusCode::NOT_FOUND.into_response();
        },
    };
    let event = match WebhookEvent::from_value(body) {
        Some(event) if event.is_page() => event,
        Some(event) => {
            debug!(object = %event.object, "ignoring non-page webhook event");
            return StatusCode::NOT_FOUND.into_response();
        },
        None => {
            debug!("ignoring webhook body without an object");
            return StatusCode::NOT_FOUND.into_response();
        },
    };

    let inbound = event.inbound();
    if !inbound.is_empty() {
        spawn_delivery(Arc::clone(&state.gateway), inbound);
    }
    (StatusCode::OK, EVENT_RECEIVED).into_response()
}

fn spawn_delivery(gateway: Arc<GatewayState>, inbound: Vec<InboundText>) {
    let span = info_span!("webhook_delivery", inputs = inbound.len());
    tokio::spawn(
        async move {
            process_delivery(&gateway, &inbound).await;
        }
        .instrument(span),
    );
}

pub async fn root_handler() -> &'static str {
    WELCOME_BANNER
}

pub async fn health_handler() -> &'static str {
    "OK"
}
