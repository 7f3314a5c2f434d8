//! Keyboard input handling.

use crate::chat::ChatState;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input action result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// No action needed
    None,
    /// Submit the current input as a message
    Submit,
    /// Execute a command
    Command(String),
    /// Exit the chat
    Exit,
    /// A pending reset was confirmed
    ConfirmReset,
    /// A pending reset was declined
    CancelReset,
    /// Scroll up one line
    ScrollUp,
    /// Scroll down one line
    ScrollDown,
    /// Scroll to top
    ScrollTop,
    /// Scroll to bottom
    ScrollBottom,
}

/// Handle a terminal event against the current state.
///
/// A pending reset confirmation captures the keyboard until answered. While
/// a submission is in flight the input buffer is untouchable (the send
/// affordance is disabled), but exit still works.
pub fn handle_input(state: &mut ChatState, event: Event) -> InputAction {
    let Event::Key(key) = event else {
        return InputAction::None;
    };
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if state.pending_reset {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => InputAction::ConfirmReset,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => InputAction::CancelReset,
            _ => InputAction::None,
        };
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('q') {
        return InputAction::Exit;
    }

    if state.submission.is_busy() {
        return match key.code {
            KeyCode::Up | KeyCode::PageUp => InputAction::ScrollUp,
            KeyCode::Down | KeyCode::PageDown => InputAction::ScrollDown,
            _ => InputAction::None,
        };
    }

    handle_key(state, key)
}

fn handle_key(state: &mut ChatState, key: KeyEvent) -> InputAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.input.clear();
        state.cursor_pos = 0;
        return InputAction::None;
    }

    match key.code {
        KeyCode::Enter => {
            if state.input.is_empty() {
                return InputAction::None;
            }
            if state.is_command() {
                let cmd = state.take_input();
                return InputAction::Command(cmd);
            }
            InputAction::Submit
        }
        KeyCode::Esc => {
            state.input.clear();
            state.cursor_pos = 0;
            InputAction::None
        }
        KeyCode::Backspace => {
            state.delete_char();
            InputAction::None
        }
        KeyCode::Delete => {
            state.delete_char_forward();
            InputAction::None
        }
        KeyCode::Left => {
            state.move_cursor_left();
            InputAction::None
        }
        KeyCode::Right => {
            state.move_cursor_right();
            InputAction::None
        }
        KeyCode::Home => {
            state.move_cursor_home();
            InputAction::None
        }
        KeyCode::End => {
            state.move_cursor_end();
            InputAction::None
        }
        KeyCode::Up | KeyCode::PageUp => InputAction::ScrollUp,
        KeyCode::Down | KeyCode::PageDown => InputAction::ScrollDown,
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            InputAction::ScrollTop
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            InputAction::ScrollBottom
        }
        KeyCode::Tab => {
            state.insert_char(' ');
            state.insert_char(' ');
            InputAction::None
        }
        KeyCode::Char(c) => {
            state.insert_char(c);
            InputAction::None
        }
        _ => InputAction::None,
    }
}

/// Parsed `/` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    None,
    ShowHelp,
    Reset,
    Topic(String),
    Exit,
    Unknown(String),
}

pub fn parse_command(input: &str) -> CommandResult {
    let cmd = input.trim_start_matches('/');
    let mut parts = cmd.split_whitespace();
    let name = parts.next().unwrap_or("").to_ascii_lowercase();
    let args: Vec<&str> = parts.collect();

    match name.as_str() {
        "" => CommandResult::None,

        "help" | "?" => CommandResult::ShowHelp,

        "clear" | "reset" | "new" => CommandResult::Reset,

        "topic" => {
            if args.is_empty() {
                CommandResult::Unknown("topic".into())
            } else {
                CommandResult::Topic(args.join(" "))
            }
        }

        "exit" | "quit" | "bye" => CommandResult::Exit,

        _ => CommandResult::Unknown(name),
    }
}
