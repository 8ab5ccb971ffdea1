/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for bitx-client tests

use bitx_client::{BitxClient, ClientConfig, Config};
use wiremock::MockServer;

/// Credentials used by every test client; `Basic Zm9vOmJhcg==` on the wire
pub const TEST_KEY: &str = "foo";
pub const TEST_SECRET: &str = "bar";
pub const TEST_AUTH_HEADER: &str = "Basic Zm9vOmJhcg==";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server with API version 1
pub fn client_for(server: &MockServer) -> BitxClient {
    let mut client =
        BitxClient::with_config(Config::new(TEST_KEY, TEST_SECRET), ClientConfig::default())
            .expect("client init");
    client.set_url(server.uri()).set_version("1");
    client
}
