use tracing::instrument;

use crate::message::MigrateMessagesRequest;
use crate::Result;

impl super::MessageClient {
    /// Import messages from another system into a channel.
    ///
    /// The request is validated first. The server answers without a body.
    #[instrument(skip(self, request), fields(count = request.messages.len()))]
    pub async fn migrate_messages(
        &self,
        channel_url: &str,
        request: &MigrateMessagesRequest,
    ) -> Result<()> {
        request
            .validate()
            .map_err(|e| e.context("failed to validate migrate messages request"))?;

        let path = format!("/migration/{}", urlencoding::encode(channel_url));
        self.client
            .post_unit(&path, Some(request))
            .await
            .map_err(|e| e.context("failed to migrate messages"))
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_client;
    use crate::{ErrorCategory, MessageType, MigrateMessagesRequest, TextMessage};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> MigrateMessagesRequest {
        MigrateMessagesRequest {
            messages: vec![TextMessage {
                user_id: "Jeff".into(),
                message_type: Some(MessageType::Text),
                message: "imported".into(),
                timestamp: 1542467474000,
                dedup_id: Some("legacy-1".into()),
                ..Default::default()
            }],
            update_read_ts: Some(true),
        }
    }

    #[tokio::test]
    async fn test_migrate_messages() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/migration/channelURL"))
            .and(body_json(serde_json::json!({
                "messages": [{
                    "user_id": "Jeff",
                    "message_type": "MESG",
                    "message": "imported",
                    "timestamp": 1542467474000i64,
                    "dedup_id": "legacy-1"
                }],
                "update_read_ts": true
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        client
            .migrate_messages("channelURL", &request())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_migrate_empty_batch_sends_nothing() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .migrate_messages("channelURL", &MigrateMessagesRequest::default())
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "failed to validate migrate messages request: Invalid request: messages cannot be empty"
        );
    }

    #[tokio::test]
    async fn test_migrate_rate_limited() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
                "code": 500910,
                "message": "Too many requests.",
                "error": true
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .migrate_messages("channelURL", &request())
            .await
            .unwrap_err();
        assert!(err.is_category(ErrorCategory::TooManyRequests));
    }
}
