// Issue tools module

mod create;
mod list;

pub use create::CreateIssueTool;
pub use list::ListIssuesTool;

use log::error;

use crate::tools::ToolRegistry;

/// Register issue tools with the registry
pub fn register_tools(registry: &mut ToolRegistry) {
    if let Err(err) = ListIssuesTool::register(registry) {
        error!("Failed to register issue listing tool: {}", err);
    }

    if let Err(err) = CreateIssueTool::register(registry) {
        error!("Failed to register issue creation tool: {}", err);
    }
}
