use {
    serde::Deserialize,
    serde_json::Value,
    tracing::debug,
};

/// Body of a webhook `POST`.
///
/// Only `object` is required. Each `entry[].messaging[]` item is decoded on
/// its own when [`WebhookEvent::inbound`] is called, so one malformed item
/// never hides the others.
#[derive(Debug, Clone)]
pub struct WebhookEvent {
    pub object: String,
    messaging: Vec<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessagingEvent {
    pub sender: Option<Party>,
    pub message: Option<InboundMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Party {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundMessage {
    pub text: Option<String>,
    pub quick_reply: Option<QuickReplyPayload>,
    #[serde(default)]
    pub is_echo: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuickReplyPayload {
    pub payload: Option<String>,
}

/// One user input extracted from a webhook delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundText {
    pub sender_id: String,
    pub token: String,
}

impl WebhookEvent {
    /// Returns `None` when the body has no string `object`.
    ///
    /// Entries or messaging lists that are not arrays count as empty.
    pub fn from_value(body: Value) -> Option<Self> {
        let Value::Object(mut body) = body else {
            return None;
        };
        let Some(Value::String(object)) = body.remove("object") else {
            return None;
        };
        let messaging = match body.remove("entry") {
            Some(Value::Array(entries)) => entries
                .into_iter()
                .filter_map(|mut entry| match entry.get_mut("messaging").map(Value::take) {
                    Some(Value::Array(items)) => Some(items),
                    _ => None,
                })
                .flatten()
                .collect(),
            _ => Vec::new(),
        };
        Some(Self { object, messaging })
    }

    pub fn is_page(&self) -> bool {
        self.object == "page"
    }

    /// Every user input carried by this delivery, in delivery order.
    ///
    /// Items that do not decode as a messaging event are skipped.
    pub fn inbound(&self) -> Vec<InboundText> {
        self.messaging
            .iter()
            .filter_map(|item| match MessagingEvent::deserialize(item) {
                Ok(event) => event.inbound(),
                Err(e) => {
                    debug!(error = %e, "skipping undecodable messaging event");
                    None
                },
            })
            .collect()
    }
}

impl MessagingEvent {
    /// The sender and token of a user message.
    ///
    /// A quick-reply payload wins over the text (the text is only the button
    /// title). Echoes of the page's own messages, receipts, and messages
    /// with neither text nor payload yield `None`.
    pub fn inbound(&self) -> Option<InboundText> {
        let sender_id = self.sender.as_ref()?.id.clone();
        let message = self.message.as_ref()?;
        if message.is_echo {
            return None;
        }
        let token = message
            .quick_reply
            .as_ref()
            .and_then(|q| q.payload.clone())
            .or_else(|| message.text.clone())
            .filter(|t| !t.trim().is_empty())?;
        Some(InboundText { sender_id, token })
    }
}
