//! CLI prompts and output using cliclack (Charm-style inline prompts)
//!
//! This module is optional and only available when the `tui` feature is enabled.

#[cfg(feature = "tui")]
mod banner;
#[cfg(feature = "tui")]
mod output;
#[cfg(feature = "tui")]
mod prompts;

#[cfg(feature = "tui")]
pub use banner::{show_banner, show_usage, usage_text};
#[cfg(feature = "tui")]
pub use output::{report_failure, report_success, success_message, ClackReporter, ClockDice, Dice};
#[cfg(feature = "tui")]
pub use prompts::{run, ClackPrompter, InitArgs};
