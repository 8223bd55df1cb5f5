// Repository tools module
//
// Tools operating on the repository itself: metadata, file listing, file
// reads and writes, and branch details.

mod branch;
mod files;
mod info;
mod read_file;
mod write_file;

pub use branch::BranchInfoTool;
pub use files::ListFilesTool;
pub use info::RepositoryInfoTool;
pub use read_file::ReadFileTool;
pub use write_file::WriteFileTool;

use log::error;

use crate::tools::ToolRegistry;

/// Register repository tools with the registry
pub fn register_tools(registry: &mut ToolRegistry) {
    if let Err(err) = RepositoryInfoTool::register(registry) {
        error!("Failed to register repository info tool: {}", err);
    }

    if let Err(err) = ListFilesTool::register(registry) {
        error!("Failed to register file listing tool: {}", err);
    }

    if let Err(err) = ReadFileTool::register(registry) {
        error!("Failed to register file read tool: {}", err);
    }

    if let Err(err) = WriteFileTool::register(registry) {
        error!("Failed to register file write tool: {}", err);
    }

    if let Err(err) = BranchInfoTool::register(registry) {
        error!("Failed to register branch info tool: {}", err);
    }
}
