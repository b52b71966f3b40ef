use sendbird_sdk::{ClientConfig, SendbirdClient};
use wiremock::MockServer;

pub const TOKEN: &str = "integration-token";

/// A client pointed at `server`, with the same tuning a real deployment uses.
pub fn client(server: &MockServer) -> SendbirdClient {
    let config = ClientConfig::builder()
        .with_url(&server.uri())
        .with_api_token(TOKEN)
        .build()
        .expect("mock server URI should be a valid base URL");
    SendbirdClient::new(config).expect("client should build")
}

/// Error body the Sendbird API answers with.
pub fn api_error(code: i64, message: &str) -> serde_json::Value {
    serde_json::json!({
        "code": code,
        "message": message,
        "error": true
    })
}
