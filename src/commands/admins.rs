use std::path::PathBuf;
use std::time::Duration;

use crate::client::GitHubClient;
use crate::commands::{members, teams, users};
use crate::error::{AdminsError, Result};
use crate::output;
use crate::types::User;

/// Everything a run needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct AdminExport {
    pub owner: String,
    pub repo: String,
    pub file: PathBuf,
    pub delay: Duration,
}

/// Resolve every member of every team holding admin permission on `owner/repo`.
///
/// Users in several admin teams are returned once per team.
pub async fn collect(
    client: &GitHubClient,
    owner: &str,
    repo: &str,
    delay: Duration,
) -> Result<Vec<User>> {
    tracing::info!("Retrieving teams for {owner}/{repo}");
    let teams = teams::list(client, owner, repo, delay).await?;

    let mut admins = Vec::new();
    for team in teams {
        if !team.is_admin() {
            tracing::debug!("Skipping team {} ({})", team.name, team.permission);
            continue;
        }

        tracing::info!("Retrieving members for team: {}", team.name);
        let members = members::list(client, owner, &team.slug, delay).await?;
        for member in members {
            tracing::info!("Retrieving user: {}", member.login);
            admins.push(users::resolve(client, &member.login, delay).await?);
        }
    }

    Ok(admins)
}

/// Collect the admins of the configured repository and write them to the CSV file.
///
/// Returns the number of rows written. Nothing is written when no admin was found.
pub async fn run(client: &GitHubClient, export: &AdminExport) -> Result<usize> {
    let admins = collect(client, &export.owner, &export.repo, export.delay).await?;

    if admins.is_empty() {
        return Err(AdminsError::NoResults {
            owner: export.owner.clone(),
            repo: export.repo.clone(),
        });
    }

    tracing::info!("Writing users to {}", export.file.display());
    output::write_users(&export.file, &admins)?;
    Ok(admins.len())
}
