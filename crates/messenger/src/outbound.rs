use std::time::Duration;

use {
    async_trait::async_trait,
    bacbot_config::MessengerConfig,
    bacbot_dialog::OutboundMessage,
    secrecy::{ExposeSecret, Secret},
    tracing::{debug, warn},
};

use crate::{
    error::{Error, Result},
    payload::SendRequest,
};

/// Delivers dialog replies to a recipient.
#[async_trait]
pub trait MessageDispatcher: Send + Sync {
    async fn send(&self, recipient_id: &str, message: &OutboundMessage) -> Result<()>;
}

/// Sends through the Graph API `me/messages` endpoint.
pub struct GraphApiDispatcher {
    http: reqwest::Client,
    url: String,
    page_access_token: Secret<String>,
}

impl GraphApiDispatcher {
    pub fn new(config: &MessengerConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.send_timeout_secs.max(1)))
            .build()?;
        Ok(Self {
            http,
            url: config.messages_url(),
            page_access_token: config.page_access_token.clone(),
        })
    }
}

#[async_trait]
impl MessageDispatcher for GraphApiDispatcher {
    async fn send(&self, recipient_id: &str, message: &OutboundMessage) -> Result<()> {
        if recipient_id.is_empty() {
            return Err(Error::invalid_input("empty recipient id"));
        }
        let resp = self
            .http
            .post(&self.url)
            .query(&[("access_token", self.page_access_token.expose_secret())])
            .json(&SendRequest::new(recipient_id, message))
            .send()
            .await?;
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Rejected { status, body });
        }
        debug!(recipient_id, kind = message.kind_label(), "message sent");
        Ok(())
    }
}

/// Send `messages` in order, at most once each.
///
/// A failed send is logged and skipped; later messages are still attempted.
/// Returns how many were accepted by the platform.
pub async fn deliver_all(
    dispatcher: &dyn MessageDispatcher,
    recipient_id: &str,
    messages: &[OutboundMessage],
) -> usize {
    let mut delivered = 0;
    for message in messages {
        match dispatcher.send(recipient_id, message).await {
            Ok(()) => delivered += 1,
            Err(e) => warn!(
                recipient_id,
                kind = message.kind_label(),
                error = %e,
                "failed to send message"
            ),
        }
    }
    delivered
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {
        mockito::Matcher,
        serde_json::json,
        std::sync::{Arc, Mutex},
    };

    use super::*;

    fn config_for(server: &mockito::Server) -> MessengerConfig {
        MessengerConfig {
            page_access_token: Secret::new("page-token".into()),
            graph_api_url: server.url(),
            send_timeout_secs: 2,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn send_posts_payload_with_access_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v12.0/me/messages")
            .match_query(Matcher::UrlEncoded(
                "access_token".into(),
                "page-token".into(),
            ))
            .match_body(Matcher::Json(json!({
                "recipient": { "id": "psid-1" },
                "message": { "text": "hello" }
            })))
            .with_status(200)
            .with_body(r#"{"recipient_id":"psid-1","message_id":"mid.1"}"#)
            .create_async()
            .await;

        let dispatcher = GraphApiDispatcher::new(&config_for(&server)).unwrap();
        dispatcher
            .send("psid-1", &OutboundMessage::text("hello"))
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn rejected_send_carries_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v12.0/me/messages")
            .match_query(Matcher::Any)
            .with_status(400)
            .with_body(r#"{"error":{"message":"Invalid OAuth access token."}}"#)
            .create_async()
            .await;

        let dispatcher = GraphApiDispatcher::new(&config_for(&server)).unwrap();
        let err = dispatcher
            .send("psid-1", &OutboundMessage::file("https://cdn.example.com/a.pdf"))
            .await
            .unwrap_err();
        match err {
            Error::Rejected { status, body } => {
                assert_eq!(status, 400);
                assert!(body.contains("Invalid OAuth access token"));
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn empty_recipient_is_invalid() {
        let dispatcher = GraphApiDispatcher::new(&MessengerConfig::default()).unwrap();
        let err = dispatcher
            .send("", &OutboundMessage::text("hello"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }

    /// Fails every send whose text contains "fail".
    #[derive(Default)]
    struct FlakyDispatcher {
        attempts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl MessageDispatcher for FlakyDispatcher {
        async fn send(&self, _recipient_id: &str, message: &OutboundMessage) -> Result<()> {
            let text = message.as_text().unwrap_or_default().to_string();
            self.attempts.lock().unwrap().push(text.clone());
            if text.contains("fail") {
                Err(Error::Rejected {
                    status: 503,
                    body: "unavailable".into(),
                })
            } else {
                Ok(())
            }
        }
    }

    #[tokio::test]
    async fn deliver_all_continues_after_failure() {
        let dispatcher = Arc::new(FlakyDispatcher::default());
        let messages = vec![
            OutboundMessage::text("one"),
            OutboundMessage::text("fail two"),
            OutboundMessage::text("three"),
        ];

        let delivered = deliver_all(dispatcher.as_ref(), "psid-1", &messages).await;

        assert_eq!(delivered, 2);
        assert_eq!(*dispatcher.attempts.lock().unwrap(), vec![
            "one", "fail two", "three"
        ]);
    }
}
