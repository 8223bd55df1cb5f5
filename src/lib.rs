// github-mcp: Model Context Protocol server for GitHub repositories
//
// This library implements a Model Context Protocol (MCP) server which exposes
// a fixed catalog of GitHub repository operations as tools, and a small set of
// read-only resources, to an MCP client over stdio.

pub mod config;
pub mod errors;
pub mod github;
pub mod protocol;
pub mod resources;
pub mod server;
pub mod tools;

/// Version of the MCP protocol implemented by this server
pub const MCP_PROTOCOL_VERSION: &str = "2024-11-05";

/// Server name advertised during the MCP handshake
pub const SERVER_NAME: &str = "github-mcp-server";

/// Default values applied when a tool call omits an optional argument
pub mod defaults {
    /// Branch used by file and commit operations when none is given
    pub const BRANCH: &str = "main";
    /// Number of entries returned by list operations
    pub const LIMIT: u32 = 10;
    /// State filter for issue and pull request listings
    pub const STATE: &str = "open";
}
