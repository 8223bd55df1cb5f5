// Commit tools module

mod get;
mod list;

pub use get::GetCommitTool;
pub use list::ListCommitsTool;

use log::error;

use crate::tools::ToolRegistry;

/// Register commit tools with the registry
pub fn register_tools(registry: &mut ToolRegistry) {
    if let Err(err) = ListCommitsTool::register(registry) {
        error!("Failed to register commit listing tool: {}", err);
    }

    if let Err(err) = GetCommitTool::register(registry) {
        error!("Failed to register commit detail tool: {}", err);
    }
}
