use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::error::RequestError;

const USER_AGENT: &str = concat!("repo-admins/", env!("CARGO_PKG_VERSION"));
const API_VERSION: &str = "2022-11-28";

pub const DEFAULT_HOST: &str = "github.com";

pub struct GitHubClient {
    http: Client,
    base_url: Url,
    token: Option<String>,
}

/// Error body returned by the REST API on non-2xx responses.
#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl GitHubClient {
    /// Client for the REST API of `host` (github.com or an Enterprise Server host).
    pub fn new(host: &str, token: String) -> Result<Self, RequestError> {
        Self::with_base_url(&api_base_url(host), Some(token))
    }

    pub fn with_base_url(base_url: &str, token: Option<String>) -> Result<Self, RequestError> {
        // Url::join drops the last segment unless the base ends with a slash
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized).map_err(|e| RequestError::InvalidUrl {
            path: normalized.clone(),
            source: e,
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("x-github-api-version", HeaderValue::from_static(API_VERSION));

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url,
            token,
        })
    }

    /// GET `path` relative to the API base URL and decode the JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| RequestError::InvalidUrl {
                path: path.to_string(),
                source: e,
            })?;

        tracing::debug!("GET {url}");

        let mut request = self.http.get(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read response body>".to_string());
            return Err(RequestError::Status {
                status,
                message: error_message(&body),
            });
        }

        Ok(response.json().await?)
    }
}

/// REST API root for a host.
pub fn api_base_url(host: &str) -> String {
    if host.eq_ignore_ascii_case(DEFAULT_HOST) {
        "https://api.github.com/".to_string()
    } else {
        format!("https://{host}/api/v3/")
    }
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed.message,
        Err(_) if body.trim().is_empty() => "<empty response body>".to_string(),
        Err(_) => body.trim().to_string(),
    }
}
