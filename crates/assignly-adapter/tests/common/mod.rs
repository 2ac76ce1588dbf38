/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for assignly-adapter tests

use assignly_adapter::{AssignlyClient, ClientConfig, SignupRequest};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Build a client pointed at a mock server
pub fn client_for(server: &MockServer) -> AssignlyClient {
    AssignlyClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client should build against mock server")
}

/// A filled-out signup request for testing
#[allow(dead_code)]
pub fn sample_signup_request() -> SignupRequest {
    SignupRequest {
        login: "marge".to_string(),
        tag: "design".to_string(),
        password: "s3cret".to_string(),
        image: String::new(),
    }
}
