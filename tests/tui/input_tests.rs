//! Keyboard and command handling tests.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use mentor_chat::chat::ChatState;
use mentor_chat::tui::{CommandResult, InputAction, handle_input, parse_command};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

#[test]
fn typing_fills_the_input_buffer() {
    let mut state = ChatState::new();
    for c in "hi".chars() {
        assert_eq!(handle_input(&mut state, key(KeyCode::Char(c))), InputAction::None);
    }
    assert_eq!(state.input, "hi");
}

#[test]
fn enter_submits_a_message() {
    let mut state = ChatState::new();
    state.input = "question".into();
    assert_eq!(handle_input(&mut state, key(KeyCode::Enter)), InputAction::Submit);
}

#[test]
fn enter_on_empty_input_does_nothing() {
    let mut state = ChatState::new();
    assert_eq!(handle_input(&mut state, key(KeyCode::Enter)), InputAction::None);
}

#[test]
fn slash_input_becomes_a_command() {
    let mut state = ChatState::new();
    state.input = "/help".into();
    assert_eq!(
        handle_input(&mut state, key(KeyCode::Enter)),
        InputAction::Command("/help".into())
    );
    assert!(state.input.is_empty());
}

#[test]
fn escape_clears_the_buffer() {
    let mut state = ChatState::new();
    state.input = "typo".into();
    state.cursor_pos = 4;
    handle_input(&mut state, key(KeyCode::Esc));
    assert!(state.input.is_empty());
    assert_eq!(state.cursor_pos, 0);
}

#[test]
fn ctrl_q_always_exits() {
    let mut state = ChatState::new();
    assert_eq!(handle_input(&mut state, ctrl('q')), InputAction::Exit);
}

#[test]
fn pending_reset_captures_the_keyboard() {
    let mut state = ChatState::new();
    state.pending_reset = true;

    assert_eq!(
        handle_input(&mut state, key(KeyCode::Char('x'))),
        InputAction::None
    );
    assert_eq!(
        handle_input(&mut state, key(KeyCode::Char('n'))),
        InputAction::CancelReset
    );
    assert_eq!(
        handle_input(&mut state, key(KeyCode::Char('y'))),
        InputAction::ConfirmReset
    );
}

#[test]
fn parse_command_variants() {
    assert_eq!(parse_command("/help"), CommandResult::ShowHelp);
    assert_eq!(parse_command("/?"), CommandResult::ShowHelp);
    assert_eq!(parse_command("/clear"), CommandResult::Reset);
    assert_eq!(parse_command("/reset"), CommandResult::Reset);
    assert_eq!(parse_command("/exit"), CommandResult::Exit);
    assert_eq!(
        parse_command("/topic Dynamic Programming"),
        CommandResult::Topic("Dynamic Programming".into())
    );
    assert_eq!(parse_command("/topic"), CommandResult::Unknown("topic".into()));
    assert_eq!(parse_command("/bogus"), CommandResult::Unknown("bogus".into()));
    assert_eq!(parse_command("/"), CommandResult::None);
}
