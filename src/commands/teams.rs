use std::time::Duration;

use crate::client::GitHubClient;
use crate::commands::{throttle, PER_PAGE};
use crate::error::{AdminsError, Result};
use crate::types::Team;

/// List the teams with access to `owner/repo`, with their permission on it.
pub async fn list(
    client: &GitHubClient,
    owner: &str,
    repo: &str,
    delay: Duration,
) -> Result<Vec<Team>> {
    let path = format!("repos/{owner}/{repo}/teams?per_page={PER_PAGE}");
    let teams: Vec<Team> = client
        .get(&path)
        .await
        .map_err(|e| AdminsError::retrieval(format!("teams for {owner}/{repo}"), e))?;
    throttle(delay).await;

    tracing::debug!("Found {} teams for {owner}/{repo}", teams.len());
    Ok(teams)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::mock_client;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_teams_with_permissions() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/repos/acme/widgets/teams")
                .query_param("per_page", "100");
            then.status(200).json_body(json!([
                {"id": 1, "name": "Core", "slug": "core", "permission": "admin"},
                {"id": 2, "name": "Docs", "slug": "docs", "permission": "push"}
            ]));
        });

        let client = mock_client(&server);
        let teams = list(&client, "acme", "widgets", Duration::ZERO)
            .await
            .expect("teams should load");

        mock.assert();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].slug, "core");
        assert!(teams[0].is_admin());
        assert_eq!(teams[1].name, "Docs");
        assert!(!teams[1].is_admin());
    }

    #[tokio::test]
    async fn test_list_teams_wraps_http_error() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/repos/acme/missing/teams");
            then.status(404).json_body(json!({"message": "Not Found"}));
        });

        let client = mock_client(&server);
        let err = list(&client, "acme", "missing", Duration::ZERO)
            .await
            .expect_err("404 should fail");

        assert!(matches!(err, AdminsError::Retrieval { .. }));
        assert_eq!(
            err.to_string(),
            "Error retrieving teams for acme/missing: API error (status 404): Not Found"
        );
    }
}
