//! Transcript and chat state tests.

use mentor_chat::chat::{ChatState, Exchange, Sender, Transcript, apply_reset};

#[test]
fn new_state_holds_only_the_welcome_exchange() {
    let state = ChatState::new();

    assert_eq!(state.transcript.len(), 1);
    assert_eq!(state.transcript.exchanges()[0].sender, Sender::Assistant);
    assert!(!state.submission.is_busy());
    assert!(state.input.is_empty());
    assert!(!state.pending_reset);
}

#[test]
fn welcome_exchange_is_rendered_markup() {
    let transcript = Transcript::with_welcome();
    let markup = transcript.exchanges()[0].markup.to_string();

    assert!(markup.contains("<strong>Welcome to CodeMentor!</strong>"));
    assert!(!markup.contains("**"));
}

#[test]
fn push_exchange_schedules_a_deferred_scroll() {
    let mut state = ChatState::new();
    state.scroll_offset = 3;

    state.push_exchange(Exchange::user("hello"));

    assert_eq!(state.transcript.len(), 2);
    // sentinel resolved against content height at the next draw
    assert_eq!(state.scroll_offset, u16::MAX);
}

#[test]
fn exchanges_keep_their_sender() {
    let user = Exchange::user("question");
    let assistant = Exchange::assistant("answer");

    assert_eq!(user.sender, Sender::User);
    assert_eq!(assistant.sender, Sender::Assistant);
}

#[test]
fn take_input_clears_buffer_and_cursor() {
    let mut state = ChatState::new();
    for c in "abc".chars() {
        state.insert_char(c);
    }

    assert_eq!(state.take_input(), "abc");
    assert!(state.input.is_empty());
    assert_eq!(state.cursor_pos, 0);
}

#[test]
fn cursor_editing_operations() {
    let mut state = ChatState::new();
    for c in "abc".chars() {
        state.insert_char(c);
    }

    state.move_cursor_left();
    state.delete_char();
    assert_eq!(state.input, "ac");

    state.move_cursor_end();
    state.delete_char();
    assert_eq!(state.input, "a");

    state.move_cursor_home();
    state.delete_char_forward();
    assert!(state.input.is_empty());
}

#[test]
fn reset_restores_exactly_one_welcome_exchange() {
    let mut state = ChatState::new();
    for i in 0..5 {
        state.push_exchange(Exchange::user(&format!("message {i}")));
        state.push_exchange(Exchange::assistant("reply"));
    }
    state.input = "half-typed".into();
    state.cursor_pos = 4;
    state.pending_reset = true;

    apply_reset(&mut state);

    assert_eq!(state.transcript.len(), 1);
    assert_eq!(state.transcript.exchanges()[0].sender, Sender::Assistant);
    assert!(
        state.transcript.exchanges()[0]
            .markup
            .to_string()
            .contains("Welcome to CodeMentor!")
    );
    assert!(state.input.is_empty());
    assert_eq!(state.cursor_pos, 0);
    assert!(!state.pending_reset);
}

#[test]
fn loading_frame_does_not_tick_while_idle() {
    let mut state = ChatState::new();
    state.tick_loading();
    state.tick_loading();
    assert_eq!(state.loading_frame, 0);
}

#[test]
fn command_detection() {
    let mut state = ChatState::new();
    assert!(!state.is_command());
    state.input = "/help".into();
    assert!(state.is_command());
}
