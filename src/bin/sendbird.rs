//! Build a Sendbird client from the environment and print its configuration.
//!
//! ```sh
//! export SENDBIRD_APPLICATION_ID='...'
//! export SENDBIRD_API_TOKEN='...'
//! RUST_LOG=sendbird_client=debug cargo run --bin sendbird
//! ```
//!
//! The token is redacted in the output.

use sendbird_client::{ClientConfigBuilder, SendbirdClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let client = ClientConfigBuilder::from_env()
        .build()
        .and_then(SendbirdClient::new)
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });

    println!("{client:#?}");
}
