//! CLI prompts using cliclack (Charm-style inline prompts)
//!
//! This module is optional and only available when the `tui` feature is enabled.

mod output;
mod prompts;

pub use output::{list, print_setup_message};
pub use prompts::{run, BuildArgs, ConsolePrompter};
