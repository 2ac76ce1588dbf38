/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for assignly-app tests

use assignly_adapter::{AssignlyClient, ClientConfig};
use assignly_app::SignupController;
use tokio_util::sync::CancellationToken;
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Build a controller whose client points at a mock server
pub fn controller_for(server: &MockServer) -> SignupController {
    controller_with_token(server, CancellationToken::new())
}

/// Build a controller with a caller-owned cancellation token
pub fn controller_with_token(server: &MockServer, shutdown: CancellationToken) -> SignupController {
    let client = AssignlyClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client should build against mock server");
    SignupController::new(client, shutdown)
}

/// Fill every field with valid, matching values
pub fn fill_valid(controller: &SignupController) {
    controller.set_login("marge");
    controller.set_tag("design");
    controller.set_password("s3cret");
    controller.set_password_repeat("s3cret");
}
