//! Message operations against a mock server.

use super::common::client;
use sendbird_sdk::message::{
    ChannelType, ListMessagesRequest, MessageClient, MessageType, MigrateMessagesRequest,
    SendMessageRequest, TextMessage,
};
use sendbird_sdk::ErrorKind;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_send_then_list() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/group_channels/climbing/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message_id": 1001,
            "type": "MESG",
            "message": "see you at 9",
            "created_at": 1542467474000i64
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/group_channels/climbing/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "messages": [{"message_id": 1001, "type": "MESG", "message": "see you at 9"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let messages = MessageClient::from_client(client(&server));

    let sent = messages
        .send_message(
            ChannelType::GroupChannels,
            "climbing",
            &SendMessageRequest {
                message_type: Some(MessageType::Text),
                user_id: "alice".into(),
                message: "see you at 9".into(),
                ..Default::default()
            },
        )
        .await
        .expect("send should succeed");

    let page = messages
        .list_messages(
            ChannelType::GroupChannels,
            "climbing",
            &ListMessagesRequest {
                message_ts: sent.created_at,
                prev_limit: Some(10),
                include: Some(true),
                ..Default::default()
            },
        )
        .await
        .expect("list should succeed");

    assert_eq!(page.messages.len(), 1);
    assert_eq!(page.messages[0].message_id, sent.message_id);
}

#[tokio::test]
async fn test_invalid_requests_never_reach_the_server() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let messages = MessageClient::from_client(client(&server));

    let send = messages
        .send_message(
            ChannelType::OpenChannels,
            "lobby",
            &SendMessageRequest::default(),
        )
        .await
        .unwrap_err();
    assert!(matches!(send.kind, ErrorKind::InvalidRequest(ref r) if r == "message type is required"));

    let migrate = messages
        .migrate_messages(
            "lobby",
            &MigrateMessagesRequest {
                messages: vec![TextMessage {
                    user_id: "alice".into(),
                    message_type: Some(MessageType::Text),
                    message: "old".into(),
                    timestamp: 0,
                    ..Default::default()
                }],
                update_read_ts: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(migrate.kind, ErrorKind::InvalidRequest(ref r) if r == "timestamp cannot be empty"));
    assert!(!migrate.is_api_error());
}
