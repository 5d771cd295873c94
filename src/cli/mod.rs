//! CLI argument parsing, user prompts and the interactive menu.

mod args;
mod menu;
mod prompts;

pub use args::{CliConfig, VERSION};
pub use menu::Shell;
