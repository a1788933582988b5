pub mod admins;
pub mod members;
pub mod teams;
pub mod users;

use std::time::Duration;

/// Largest page size the listing endpoints accept.
pub const PER_PAGE: u32 = 100;

/// Pause after an API call to stay under the rate limit.
pub(crate) async fn throttle(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
pub(crate) fn mock_client(server: &httpmock::MockServer) -> crate::client::GitHubClient {
    crate::client::GitHubClient::with_base_url(&server.base_url(), Some("test-token".into()))
        .expect("client should build")
}
