use std::time::Duration;

use crate::client::GitHubClient;
use crate::commands::{throttle, PER_PAGE};
use crate::error::{AdminsError, Result};
use crate::types::Member;

/// List every member of `org/slug`, walking pages until one comes back empty.
pub async fn list(
    client: &GitHubClient,
    org: &str,
    slug: &str,
    delay: Duration,
) -> Result<Vec<Member>> {
    let mut all_members = Vec::new();
    let mut page = 1u32;

    loop {
        let path = format!("orgs/{org}/teams/{slug}/members?page={page}&per_page={PER_PAGE}");
        let members: Vec<Member> = client.get(&path).await.map_err(|e| {
            AdminsError::retrieval(format!("members of team {org}/{slug} (page {page})"), e)
        })?;
        throttle(delay).await;

        tracing::debug!("Page {page} of {org}/{slug}: {} members", members.len());
        if members.is_empty() {
            break;
        }

        all_members.extend(members);
        page += 1;
    }

    Ok(all_members)
}
