/// Cadence CLI - interactive playlist navigator
pub mod config;
pub mod error;
pub mod menu;
pub mod session;

pub use config::CliConfig;
pub use error::{CliError, Result};
pub use menu::MenuChoice;
pub use session::Session;
