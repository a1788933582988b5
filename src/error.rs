use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single REST call.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Status { status: u16, message: String },

    #[error("Invalid request path {path}: {source}")]
    InvalidUrl {
        path: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Error, Debug)]
pub enum AdminsError {
    #[error("Error retrieving {context}: {source}")]
    Retrieval {
        context: String,
        #[source]
        source: RequestError,
    },

    #[error("No admin users found for {owner}/{repo}")]
    NoResults { owner: String, repo: String },

    #[error("Error writing to file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error(
        "No token found for {host}. Run `gh auth login`, set GH_TOKEN (GH_ENTERPRISE_TOKEN for other hosts), or add token to ~/.config/repo-admins/config.toml"
    )]
    MissingToken { host: String },

    #[error("Failed to create REST client: {0}")]
    ClientBuild(#[source] RequestError),
}

impl AdminsError {
    pub fn retrieval(context: impl Into<String>, source: RequestError) -> Self {
        AdminsError::Retrieval {
            context: context.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, AdminsError>;
