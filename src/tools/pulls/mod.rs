// Pull request tools module

mod list;

pub use list::ListPullRequestsTool;

use log::error;

use crate::tools::ToolRegistry;

/// Register pull request tools with the registry
pub fn register_tools(registry: &mut ToolRegistry) {
    if let Err(err) = ListPullRequestsTool::register(registry) {
        error!("Failed to register pull request listing tool: {}", err);
    }
}
