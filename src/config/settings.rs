// Settings module for configuration
//
// This module defines the settings structure and loading functions for the
// server configuration. Every field has a default so the server can start
// with no settings file at all; `GITHUB_OWNER`, `GITHUB_REPO` and
// `GITHUB_API_URL` override the file when set.

use std::env;
use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Repository the server is bound to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl Default for RepositorySettings {
    fn default() -> Self {
        Self {
            owner: "octocat".to_string(),
            name: "Hello-World".to_string(),
        }
    }
}

/// Upstream API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubSettings {
    /// Base URL of the GitHub REST API
    pub api_url: String,
    /// User-Agent header sent with every request (required by GitHub)
    pub user_agent: String,
}

impl Default for GithubSettings {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            user_agent: format!("github-mcp/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Complete settings for the MCP server
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Target repository
    #[serde(default)]
    pub repository: RepositorySettings,
    /// Upstream API configuration
    #[serde(default)]
    pub github: GithubSettings,
}

/// Load settings from an optional TOML file and apply environment overrides
pub fn load(path: Option<&str>) -> Result<Settings> {
    let mut settings = match path {
        Some(path) if Path::new(path).exists() => {
            let config_str = fs::read_to_string(path)?;
            toml::from_str(&config_str)?
        }
        _ => Settings::default(),
    };

    if let Ok(owner) = env::var("GITHUB_OWNER") {
        if !owner.is_empty() {
            settings.repository.owner = owner;
        }
    }
    if let Ok(name) = env::var("GITHUB_REPO") {
        if !name.is_empty() {
            settings.repository.name = name;
        }
    }
    if let Ok(api_url) = env::var("GITHUB_API_URL") {
        if !api_url.is_empty() {
            settings.github.api_url = api_url;
        }
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_settings_point_at_public_api() {
        let settings = Settings::default();
        assert_eq!(settings.github.api_url, "https://api.github.com");
        assert_eq!(settings.repository.owner, "octocat");
        assert_eq!(settings.repository.name, "Hello-World");
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [repository]
            owner = "acme"
            name = "widgets"
            "#,
        )
        .unwrap();
        assert_eq!(settings.repository.owner, "acme");
        assert_eq!(settings.repository.name, "widgets");
        assert_eq!(settings.github.api_url, "https://api.github.com");
    }

    #[test]
    fn settings_round_trip_through_toml() {
        let settings = Settings::default();
        let rendered = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.repository.owner, settings.repository.owner);
        assert_eq!(parsed.github.user_agent, settings.github.user_agent);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let settings = load(Some("/nonexistent/github-mcp.toml")).unwrap();
        assert_eq!(settings.repository.owner, Settings::default().repository.owner);
    }
}
