use {
    bacbot_dialog::TurnOutcome,
    bacbot_messenger::{InboundText, deliver_all},
    bacbot_sessions::Step,
    tracing::{info, warn},
};

use crate::state::GatewayState;

/// What one processed input did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub outcome: TurnOutcome,
    pub step: Step,
    pub attempted: usize,
    pub delivered: usize,
}

/// Run one dialog turn for `inbound` and deliver its replies.
///
/// The sender's session stays locked from read to the last send, so turns
/// and replies of one sender never interleave. The new step is stored
/// before sending; a failed send does not roll it back.
pub async fn process_inbound(state: &GatewayState, inbound: &InboundText) -> TurnReport {
    let mut session = state.sessions.lock(&inbound.sender_id).await;
    let transition = state.engine.handle(&session, &inbound.token).await;
    *session = transition.session;

    let attempted = transition.messages.len();
    let delivered = deliver_all(
        state.dispatcher.as_ref(),
        &inbound.sender_id,
        &transition.messages,
    )
    .await;

    if delivered < attempted {
        warn!(
            sender_id = %inbound.sender_id,
            step = %session.step,
            attempted,
            delivered,
            "step advanced but some replies were not delivered"
        );
    } else {
        info!(
            sender_id = %inbound.sender_id,
            step = %session.step,
            outcome = ?transition.outcome,
            "turn complete"
        );
    }

    TurnReport {
        outcome: transition.outcome,
        step: session.step,
        attempted,
        delivered,
    }
}

/// Process every input of one webhook delivery, in order.
pub async fn process_delivery(state: &GatewayState, inbound: &[InboundText]) {
    for item in inbound {
        process_inbound(state, item).await;
    }
}
