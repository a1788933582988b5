mod cli;
mod client;
mod commands;
mod config;
mod error;
mod output;
mod types;

use std::error::Error;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::Cli;
use client::GitHubClient;
use config::Config;
use error::{AdminsError, Result};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if let Err(e) = run(&cli).await {
        tracing::error!("{e}");

        if cli.verbose {
            let mut source = e.source();
            while let Some(cause) = source {
                tracing::error!("Caused by: {cause}");
                source = cause.source();
            }
        }

        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let config = Config::load()?;
    let host = config.host();
    let client =
        GitHubClient::new(&host, config.token(&host)?).map_err(AdminsError::ClientBuild)?;

    let export = cli.export();
    let written = commands::admins::run(&client, &export).await?;
    tracing::info!(
        "Wrote {written} admin users for {}/{} to {}",
        export.owner,
        export.repo,
        export.file.display()
    );

    Ok(())
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("repo_admins=debug")
    } else {
        EnvFilter::new("repo_admins=info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
