//! Terminal user interface for the chat session.
//!
//! - input.rs: keyboard handling and command parsing
//! - ui.rs: rendering
//! - runner.rs: event loop coordinating the components
//! - terminal.rs / theme.rs: host plumbing and styling

mod input;
mod runner;
mod terminal;
mod theme;
mod ui;

pub use input::{CommandResult, InputAction, handle_input, parse_command};
pub use runner::run_chat;
pub use terminal::{Tui, init_terminal, restore_terminal};
