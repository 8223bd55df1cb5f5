// Error handling module for the MCP server
//
// This module defines the error types used throughout the server. Tools and
// resources both return structured results; the transport boundary decides
// how each failure is presented to the client.

use thiserror::Error;

/// Errors raised during startup or by the transport loop
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(#[from] std::io::Error),

    #[error("Protocol error: {0}")]
    Protocol(String),
}

/// Tool invocation errors, presented to the client as error envelopes
#[derive(Error, Debug)]
pub enum ToolError {
    /// The requested name is not in the catalog.
    #[error("Unknown tool: {0}")]
    Unknown(String),

    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid tool parameters: {0}")]
    InvalidParameters(String),

    #[error("Tool registration failed: {0}")]
    RegistrationFailed(String),

    #[error("{0}")]
    Upstream(#[from] GithubError),

    #[error("Tool execution failed: {0}")]
    ExecutionFailed(String),
}

/// Resource read errors, presented as JSON-RPC errors at the boundary
#[derive(Error, Debug)]
pub enum ResourceError {
    /// The URI is not in the resource table.
    #[error("Unknown resource: {0}")]
    Unknown(String),

    #[error("Resource registration failed: {0}")]
    Registration(String),

    #[error("Failed to serialize resource: {0}")]
    Serialize(String),

    #[error("{0}")]
    Upstream(#[from] GithubError),
}

/// Closed classification of upstream GitHub failures.
///
/// Handlers match on the kind instead of inspecting status codes; only the
/// create-or-update probe treats `NotFound` as a non-failure.
#[derive(Error, Debug)]
pub enum GithubError {
    /// The requested entity does not exist (HTTP 404).
    #[error("GitHub resource not found: {0}")]
    NotFound(String),

    /// The access token was rejected (HTTP 401).
    #[error("GitHub authentication failed: {0}")]
    Unauthorized(String),

    /// The API rate limit is exhausted (HTTP 429, or 403 rate-limit replies).
    #[error("GitHub rate limit exceeded: {0}")]
    RateLimited(String),

    /// Any other API-level failure.
    #[error("GitHub API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure before an API response was produced.
    #[error("GitHub request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body did not match the expected shape.
    #[error("{0}")]
    Decode(String),
}
