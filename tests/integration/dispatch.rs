//! Dispatcher behavior shared by every resource: concurrency, cancellation,
//! deadlines and error classification.

use std::time::Duration;

use super::common::{api_error, client};
use sendbird_sdk::user::UserClient;
use sendbird_sdk::{ApiErrorCode, ErrorCategory, ErrorKind};
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

#[tokio::test]
async fn test_concurrent_calls_share_one_client() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path_regex(r"^/users/user-\d+$"))
        .respond_with(|request: &Request| {
            let user_id = request.url.path().trim_start_matches("/users/").to_string();
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "user_id": user_id }))
        })
        .expect(100)
        .mount(&server)
        .await;

    let users = UserClient::from_client(client(&server));

    let handles: Vec<_> = (0..100)
        .map(|i| {
            let users = users.clone();
            tokio::spawn(async move {
                let user_id = format!("user-{i}");
                let user = users
                    .update_user(&user_id, &Default::default())
                    .await
                    .expect("concurrent call should succeed");
                (user_id, user.user_id)
            })
        })
        .collect();

    let results = futures::future::join_all(handles).await;
    assert_eq!(results.len(), 100);
    for result in results {
        let (sent, received) = result.expect("task should not panic");
        assert_eq!(sent, received);
    }
}

#[tokio::test]
async fn test_cancellation_interrupts_in_flight_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"unread_count": 1}))
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&server)
        .await;

    let token = CancellationToken::new();
    let users = UserClient::from_client(client(&server).with_cancellation(token.clone()));

    let canceller = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        token.cancel();
    });

    let err = users
        .get_unread_messages_count("alice", &Default::default())
        .await
        .unwrap_err();
    canceller.await.unwrap();

    assert!(err.is_cancelled());
    assert!(!err.is_transport());
    assert!(!err.is_api_error());
}

#[tokio::test]
async fn test_deadline() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(10)))
        .mount(&server)
        .await;

    let users = UserClient::from_client(client(&server).with_timeout(Duration::from_millis(50)));
    let err = users
        .get_group_channel_count("alice", &Default::default())
        .await
        .unwrap_err();

    assert!(err.is_timeout());
}

#[tokio::test]
async fn test_error_classification() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/users/forbidden"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(api_error(403100, "Application is not available.")),
        )
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/users/teapot"))
        .respond_with(ResponseTemplate::new(418).set_body_json(api_error(418, "I'm a teapot")))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/users/not-an-error"))
        .respond_with(ResponseTemplate::new(418).set_body_json(serde_json::json!({
            "code": 418,
            "message": "I'm a teapot",
            "error": false
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/users/empty"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/users/unavailable"))
        .respond_with(ResponseTemplate::new(503).set_body_json(api_error(0, "maintenance")))
        .mount(&server)
        .await;

    let users = UserClient::from_client(client(&server));
    let update = |id: &'static str| {
        let users = users.clone();
        async move { users.update_user(id, &Default::default()).await }
    };

    let forbidden = update("forbidden").await.unwrap_err();
    assert!(forbidden.is_category(ErrorCategory::Forbidden));
    assert!(forbidden.is_api_code(ApiErrorCode::ApplicationNotAvailable));

    let teapot = update("teapot").await.unwrap_err();
    let api = teapot.api_error().expect("should be an API error");
    assert_eq!(api.category, ErrorCategory::Unknown);
    assert_eq!((api.status, api.code, api.message.as_str()), (418, 418, "I'm a teapot"));
    assert!(api.sub_error.is_none());

    let user = update("not-an-error").await.expect("error: false is not an error");
    assert!(user.user_id.is_empty());

    let empty = update("empty").await.unwrap_err();
    assert!(matches!(empty.kind, ErrorKind::ErrorBodyDecode { status: 500 }));
    assert!(empty.is_decode());

    let unavailable = update("unavailable").await.unwrap_err();
    assert!(unavailable.is_category(ErrorCategory::ServiceUnavailable));
    assert!(unavailable.is_api_code(ApiErrorCode::ServiceUnavailable));
}
