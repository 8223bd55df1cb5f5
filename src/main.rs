use std::env;
use std::process;
use std::sync::Arc;

use anyhow::Result;
use log::{error, info};

use github_mcp::github::GithubClient;
use github_mcp::server::McpServer;
use github_mcp::{config, resources, tools};

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up GITHUB_TOKEN and friends from a local .env, if present
    dotenv::dotenv().ok();

    // Initialize logging; stdout is the protocol channel, so everything
    // diagnostic goes to stderr
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    info!("Starting github-mcp server version {}", env!("CARGO_PKG_VERSION"));

    // Get configuration path from command line arguments
    let config_path = env::args().nth(1);

    // Load configuration
    let settings = match config::load_config(config_path.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // The access credential is the one piece of required configuration
    let token = match config::github_token() {
        Some(token) => token,
        None => {
            error!("GITHUB_TOKEN environment variable is not set");
            error!("Set it in a .env file or as an environment variable");
            process::exit(1);
        }
    };

    info!(
        "Serving repository {}/{}",
        settings.repository.owner, settings.repository.name
    );

    let github = Arc::new(GithubClient::new(&settings.github, token));

    // Initialize the tool catalog and resource table
    let tool_registry = tools::init_registry();
    info!(
        "Initialized tool registry with {} tools",
        tool_registry.list_tools().len()
    );
    let resource_registry = resources::init_registry();

    // Serve until the transport closes
    let server = McpServer::new(settings, tool_registry, resource_registry, github);
    match server.run().await {
        Ok(()) => {
            info!("github-mcp server stopped gracefully");
            Ok(())
        }
        Err(e) => {
            error!("github-mcp server error: {}", e);
            process::exit(1);
        }
    }
}
