use std::collections::HashMap;
use std::path::{Path, PathBuf};

use directories::{BaseDirs, ProjectDirs};
use serde::Deserialize;

use crate::client::DEFAULT_HOST;
use crate::error::{AdminsError, Result};

const DOTCOM_TOKEN_VARS: [&str; 2] = ["GH_TOKEN", "GITHUB_TOKEN"];
const ENTERPRISE_TOKEN_VARS: [&str; 2] = ["GH_ENTERPRISE_TOKEN", "GITHUB_ENTERPRISE_TOKEN"];

#[derive(Deserialize, Default, Debug)]
pub struct Config {
    pub token: Option<String>,
    pub host: Option<String>,
    /// Hosts logged in through `gh auth login`, keyed by hostname.
    #[serde(skip)]
    gh_hosts: HashMap<String, GhHost>,
}

/// Entry of the GitHub CLI's `hosts.yml`.
#[derive(Deserialize, Default, Debug, Clone)]
struct GhHost {
    oauth_token: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(Self::config_path().ok().as_deref())?;
        config.gh_hosts = load_gh_hosts();
        Ok(config)
    }

    /// Read `path`, falling back to defaults when there is no config dir or file.
    fn load_from(path: Option<&Path>) -> Result<Self> {
        let Some(config_path) = path.filter(|p| p.exists()) else {
            return Ok(Config::default());
        };

        let contents =
            std::fs::read_to_string(config_path).map_err(|e| AdminsError::ConfigRead {
                path: config_path.to_path_buf(),
                source: e,
            })?;

        toml::from_str(&contents).map_err(|e| AdminsError::ConfigParse {
            path: config_path.to_path_buf(),
            source: e,
        })
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "repo-admins")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(AdminsError::NoConfigDir)
    }

    /// Get host with GH_HOST taking precedence over config file
    pub fn host(&self) -> String {
        self.host_from(|name| std::env::var(name).ok())
    }

    /// Get token for `host`: env vars, then config file, then the gh CLI login
    pub fn token(&self, host: &str) -> Result<String> {
        self.token_from(host, |name| std::env::var(name).ok())
    }

    fn host_from(&self, env: impl Fn(&str) -> Option<String>) -> String {
        env("GH_HOST")
            .filter(|h| !h.is_empty())
            .or_else(|| self.host.clone())
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
    }

    fn token_from(&self, host: &str, env: impl Fn(&str) -> Option<String>) -> Result<String> {
        let vars = if host.eq_ignore_ascii_case(DEFAULT_HOST) {
            DOTCOM_TOKEN_VARS
        } else {
            ENTERPRISE_TOKEN_VARS
        };

        vars.iter()
            .filter_map(|name| env(*name))
            .find(|token| !token.is_empty())
            .or_else(|| self.token.clone())
            .or_else(|| self.gh_token(host))
            .ok_or_else(|| AdminsError::MissingToken {
                host: host.to_string(),
            })
    }

    fn gh_token(&self, host: &str) -> Option<String> {
        self.gh_hosts
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(host))
            .and_then(|(_, entry)| entry.oauth_token.clone())
            .filter(|token| !token.is_empty())
    }
}

/// Directory the GitHub CLI keeps its config in.
fn gh_config_dir(env: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    if let Some(dir) = env("GH_CONFIG_DIR").filter(|d| !d.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    if let Some(dir) = env("XDG_CONFIG_HOME").filter(|d| !d.is_empty()) {
        return Some(PathBuf::from(dir).join("gh"));
    }
    BaseDirs::new().map(|dirs| dirs.home_dir().join(".config").join("gh"))
}

fn parse_gh_hosts(contents: &str) -> std::result::Result<HashMap<String, GhHost>, serde_yaml::Error> {
    if contents.trim().is_empty() {
        return Ok(HashMap::new());
    }
    let hosts: Option<HashMap<String, GhHost>> = serde_yaml::from_str(contents)?;
    Ok(hosts.unwrap_or_default())
}

/// Hosts from gh's `hosts.yml`. A missing or unreadable file means no gh login.
fn load_gh_hosts() -> HashMap<String, GhHost> {
    let Some(path) = gh_config_dir(|name| std::env::var(name).ok()).map(|d| d.join("hosts.yml"))
    else {
        return HashMap::new();
    };

    let contents = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(_) => return HashMap::new(),
    };

    match parse_gh_hosts(&contents) {
        Ok(hosts) => hosts,
        Err(e) => {
            tracing::debug!("Ignoring {}: {e}", path.display());
            HashMap::new()
        }
    }
}
