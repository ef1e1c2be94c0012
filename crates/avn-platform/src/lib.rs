mod commands;
mod paths;

pub use commands::ToolCommandExt;
pub use paths::{AppPaths, AppPathsError};
