// Configuration module for the MCP server
//
// This module handles loading and managing configuration settings.
// The access token is deliberately kept out of the settings file and is
// only ever read from the environment.

mod settings;

pub use settings::{GithubSettings, RepositorySettings, Settings};

use std::env;
use std::sync::Arc;

use crate::errors::ServerError;

/// Load configuration from an optional file, then apply environment overrides
pub fn load_config(path: Option<&str>) -> Result<Arc<Settings>, ServerError> {
    settings::load(path)
        .map(Arc::new)
        .map_err(|e| ServerError::Config(format!("Failed to load config: {}", e)))
}

/// Read the GitHub access token from the environment.
///
/// Returns `None` when the variable is unset or blank; the caller treats
/// that as a fatal startup condition.
pub fn github_token() -> Option<String> {
    env::var("GITHUB_TOKEN")
        .ok()
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}
