//! End-to-end tests of the SDK against a mock Sendbird server.
//!
//! Run with:
//!   cargo test --test integration

#[path = "integration/common.rs"]
mod common;
#[path = "integration/channel.rs"]
mod channel;
#[path = "integration/message.rs"]
mod message;
#[path = "integration/user.rs"]
mod user;
#[path = "integration/dispatch.rs"]
mod dispatch;
