//! User operations against a mock server.

use super::common::client;
use sendbird_sdk::user::{
    CreateUserRequest, GetGroupChannelCountRequest, GetSessionTokenRequest,
    GetUnreadMessagesCountRequest, HiddenMode, MemberState, UpdateUserRequest, UserClient,
};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_user_onboarding() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "user_id": "alice",
            "nickname": "Alice",
            "is_active": true,
            "is_created": true
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/users/alice"))
        .and(body_json(serde_json::json!({"preferred_languages": ["fr", "en"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "user_id": "alice",
            "preferred_languages": ["fr", "en"]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/users/alice/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": "session-secret",
            "expires_at": 1542945056625i64
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/alice/unread_message_count"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"unread_count": 3})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/alice/group_channel_count"))
        .and(query_param("state", "joined"))
        .and(query_param("hidden_mode", "unhidden_only"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"group_channel_count": 5})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let users = UserClient::from_client(client(&server));

    let alice = users
        .create_user(&CreateUserRequest {
            user_id: "alice".into(),
            nickname: "Alice".into(),
            ..Default::default()
        })
        .await
        .expect("create should succeed");
    assert!(alice.is_created);

    let alice = users
        .update_user(
            &alice.user_id,
            &UpdateUserRequest {
                preferred_languages: Some(vec!["fr".into(), "en".into()]),
                ..Default::default()
            },
        )
        .await
        .expect("update should succeed");
    assert_eq!(alice.preferred_languages, vec!["fr", "en"]);

    let session = users
        .get_session_token("alice", &GetSessionTokenRequest::default())
        .await
        .expect("token should be issued");
    assert_eq!(session.token, "session-secret");
    assert!(!format!("{session:?}").contains("session-secret"));

    let unread = users
        .get_unread_messages_count("alice", &GetUnreadMessagesCountRequest::default())
        .await
        .unwrap();
    assert_eq!(unread.unread_count, 3);

    let joined = users
        .get_group_channel_count(
            "alice",
            &GetGroupChannelCountRequest {
                state: Some(MemberState::Joined),
                hidden_mode: Some(HiddenMode::UnhiddenOnly),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(joined.group_channel_count, 5);
}
