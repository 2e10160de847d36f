//! Send API request bodies.

use {
    bacbot_dialog::{AttachmentKind, OutboundMessage, QuickReply},
    serde::Serialize,
};

#[derive(Debug, Serialize)]
pub struct SendRequest<'a> {
    recipient: Recipient<'a>,
    message: MessageBody<'a>,
}

#[derive(Debug, Serialize)]
struct Recipient<'a> {
    id: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MessageBody<'a> {
    Text {
        text: &'a str,
        #[serde(skip_serializing_if = "no_quick_replies")]
        quick_replies: &'a [QuickReply],
    },
    Attachment {
        attachment: AttachmentBody<'a>,
    },
}

#[derive(Debug, Serialize)]
struct AttachmentBody<'a> {
    #[serde(rename = "type")]
    kind: AttachmentKind,
    payload: UrlPayload<'a>,
}

#[derive(Debug, Serialize)]
struct UrlPayload<'a> {
    url: &'a str,
}

fn no_quick_replies(replies: &&[QuickReply]) -> bool {
    replies.is_empty()
}

impl<'a> SendRequest<'a> {
    pub fn new(recipient_id: &'a str, message: &'a OutboundMessage) -> Self {
        let message = match message {
            OutboundMessage::Text {
                text,
                quick_replies,
            } => MessageBody::Text {
                text,
                quick_replies,
            },
            OutboundMessage::Attachment { url, kind } => MessageBody::Attachment {
                attachment: AttachmentBody {
                    kind: *kind,
                    payload: UrlPayload { url },
                },
            },
        };
        Self {
            recipient: Recipient { id: recipient_id },
            message,
        }
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn to_json(recipient: &str, message: &OutboundMessage) -> serde_json::Value {
        serde_json::to_value(SendRequest::new(recipient, message)).unwrap()
    }

    #[test]
    fn plain_text() {
        assert_eq!(
            to_json("psid-1", &OutboundMessage::text("مرحبا")),
            json!({ "recipient": { "id": "psid-1" }, "message": { "text": "مرحبا" } })
        );
    }

    #[test]
    fn text_with_quick_replies() {
        let message = OutboundMessage::text_with_replies("nothing here", vec![QuickReply::text(
            "العودة للبداية",
            "start",
        )]);
        assert_eq!(
            to_json("psid-1", &message),
            json!({
                "recipient": { "id": "psid-1" },
                "message": {
                    "text": "nothing here",
                    "quick_replies": [
                        { "content_type": "text", "title": "العودة للبداية", "payload": "start" }
                    ]
                }
            })
        );
    }

    #[test]
    fn file_attachment() {
        let message = OutboundMessage::file("https://cdn.example.com/limites.pdf");
        assert_eq!(
            to_json("psid-1", &message),
            json!({
                "recipient": { "id": "psid-1" },
                "message": {
                    "attachment": {
                        "type": "file",
                        "payload": { "url": "https://cdn.example.com/limites.pdf" }
                    }
                }
            })
        );
    }
}
