use std::time::Duration;

use crate::client::GitHubClient;
use crate::commands::throttle;
use crate::error::{AdminsError, Result};
use crate::types::User;

/// Fetch the public profile of `login`.
pub async fn resolve(client: &GitHubClient, login: &str, delay: Duration) -> Result<User> {
    let user: User = client
        .get(&format!("users/{login}"))
        .await
        .map_err(|e| AdminsError::retrieval(format!("user {login}"), e))?;
    throttle(delay).await;
    Ok(user)
}
