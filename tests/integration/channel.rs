//! Group channel lifecycle against a mock server.

use super::common::{api_error, client, TOKEN};
use sendbird_sdk::channel::{
    ChannelClient, CreateGroupChannelRequest, ListGroupChannelRequest, UpdateGroupChannelRequest,
};
use sendbird_sdk::{ApiErrorCode, ErrorCategory};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_channel_lifecycle() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/group_channels"))
        .and(header("Api-Token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "channel_url": "climbing",
            "name": "Saturday rock climbing",
            "member_count": 2
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/group_channels/climbing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "channel_url": "climbing",
            "name": "Sunday hike"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/group_channels/climbing/typing"))
        .and(body_json(serde_json::json!({"user_ids": ["alice"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/group_channels/climbing/typing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/group_channels/climbing/messages/mark_as_read"))
        .and(body_json(serde_json::json!({"user_id": "bob"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let channels = ChannelClient::from_client(client(&server));

    let created = channels
        .create_group_channel(&CreateGroupChannelRequest {
            user_ids: vec!["alice".into(), "bob".into()],
            name: Some("Saturday rock climbing".into()),
            ..Default::default()
        })
        .await
        .expect("create should succeed");
    assert_eq!(created.channel_url, "climbing");
    assert_eq!(created.member_count, 2);

    let updated = channels
        .update_group_channel(
            &created.channel_url,
            &UpdateGroupChannelRequest {
                name: Some("Sunday hike".into()),
                ..Default::default()
            },
        )
        .await
        .expect("update should succeed");
    assert_eq!(updated.name, "Sunday hike");

    let typists = vec!["alice".to_string()];
    channels
        .start_typing(&created.channel_url, &typists)
        .await
        .expect("start typing should succeed");
    channels
        .stop_typing(&created.channel_url, &typists)
        .await
        .expect("stop typing should succeed");
    channels
        .mark_as_read(&created.channel_url, "bob")
        .await
        .expect("mark as read should succeed");
}

#[tokio::test]
async fn test_channel_listing_pages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/group_channels"))
        .and(query_param("token", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "channels": [{"channel_url": "c3"}],
            "next": ""
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/group_channels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "channels": [{"channel_url": "c1"}, {"channel_url": "c2"}],
            "next": "page-2"
        })))
        .mount(&server)
        .await;

    let channels = ChannelClient::from_client(client(&server));
    let mut request = ListGroupChannelRequest {
        limit: Some(2),
        ..Default::default()
    };
    let mut urls = Vec::new();
    loop {
        let page = channels.list_group_channels(&request).await.unwrap();
        urls.extend(page.channels.into_iter().map(|c| c.channel_url));
        if page.next.is_empty() {
            break;
        }
        request.token = Some(page.next);
    }

    assert_eq!(urls, vec!["c1", "c2", "c3"]);
}

#[tokio::test]
async fn test_channel_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(api_error(400201, "\"Channel\" not found.")),
        )
        .mount(&server)
        .await;

    let channels = ChannelClient::from_client(client(&server));
    let err = channels
        .update_group_channel("missing", &UpdateGroupChannelRequest::default())
        .await
        .unwrap_err();

    assert!(err.is_api_code(ApiErrorCode::ResourceNotFound));
    assert!(err.is_category(ErrorCategory::BadRequest));
    assert!(!err.is_category(ErrorCategory::Forbidden));
    let api = err.api_error().expect("should be an API error");
    assert_eq!(api.status, 400);
    assert_eq!(api.code, 400201);
}
