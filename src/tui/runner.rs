//! Chat runner - main event loop coordinator.
//!
//! One logical thread of control: all state mutation happens here. The
//! suspension points are the spawned chat request (resolved through the
//! completion channel), the liveness monitor's polls, and the deferred
//! scroll resolved at the next draw.

use crossterm::event;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use super::input::{CommandResult, InputAction, handle_input, parse_command};
use super::terminal::{Tui, init_terminal, restore_terminal};
use super::ui::ChatUI;
use crate::backend::ChatBackend;
use crate::chat::{
    ChatState, Exchange, LivenessMonitor, SubmissionController, SubmissionOutcome, apply_reset,
    notify_backend,
};

const HELP: &str = "**Commands**\n\
- `/help` - show this help\n\
- `/clear` - clear the conversation\n\
- `/topic <name>` - prefill a question about a topic\n\
- `/exit` - leave the chat\n\n\
Topics to try: Arrays, Linked Lists, Trees, Graphs, Dynamic Programming, Sorting";

/// Completion events from spawned work.
enum UiEvent {
    SubmissionDone(SubmissionOutcome),
}

/// Run the TUI chat interface until the user exits.
pub async fn run_chat<B>(backend: Arc<B>, endpoint: &str) -> Result<(), Box<dyn Error>>
where
    B: ChatBackend + 'static,
{
    let mut terminal = init_terminal()?;
    let mut state = ChatState::new();

    let result = run_chat_loop(&mut terminal, &mut state, backend, endpoint).await;

    restore_terminal()?;
    result
}

async fn run_chat_loop<B>(
    terminal: &mut Tui,
    state: &mut ChatState,
    backend: Arc<B>,
    endpoint: &str,
) -> Result<(), Box<dyn Error>>
where
    B: ChatBackend + 'static,
{
    let controller = SubmissionController::new(Arc::clone(&backend));

    // Liveness runs for the lifetime of the process, independent of
    // submissions; it shares no state with them beyond the status cell.
    let monitor = LivenessMonitor::new(Arc::clone(&backend));
    let connectivity = monitor.status();
    tokio::spawn(monitor.run());

    let (event_tx, mut event_rx) = mpsc::channel::<UiEvent>(10);

    loop {
        terminal.draw(|frame| {
            ChatUI::render(frame, state, &connectivity, endpoint);
        })?;

        while let Ok(ui_event) = event_rx.try_recv() {
            match ui_event {
                UiEvent::SubmissionDone(outcome) => {
                    // Guaranteed finalizer: appends the assistant turn,
                    // clears busy, and the input is editable again.
                    controller.finish(state, outcome);
                }
            }
        }

        let timeout = if state.submission.is_busy() {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(50)
        };

        if event::poll(timeout)? {
            let action = handle_input(state, event::read()?);
            match action {
                InputAction::Exit => return Ok(()),

                InputAction::Submit => {
                    let input = state.take_input();
                    if let Some(message) = controller.begin(state, &input) {
                        state.status_message = None;
                        let worker = controller.clone();
                        let tx = event_tx.clone();
                        tokio::spawn(async move {
                            let outcome = worker.perform(&message).await;
                            let _ = tx.send(UiEvent::SubmissionDone(outcome)).await;
                        });
                    }
                }

                InputAction::Command(cmd) => {
                    if handle_command(state, &cmd) {
                        return Ok(());
                    }
                }

                InputAction::ConfirmReset => {
                    // The visible reset happens first and always succeeds;
                    // the backend notification is fire-and-forget.
                    apply_reset(state);
                    let notified = Arc::clone(&backend);
                    tokio::spawn(async move {
                        notify_backend(&*notified).await.log();
                    });
                }

                InputAction::CancelReset => {
                    state.pending_reset = false;
                    state.status_message = None;
                }

                InputAction::ScrollUp => state.scroll_up(),
                InputAction::ScrollDown => state.scroll_down(1000),
                InputAction::ScrollTop => state.scroll_offset = 0,
                InputAction::ScrollBottom => state.scroll_to_bottom(),
                InputAction::None => {}
            }
        } else {
            state.tick_loading();
        }
    }
}

/// Executes a parsed command. Returns true when the chat should exit.
fn handle_command(state: &mut ChatState, input: &str) -> bool {
    match parse_command(input) {
        CommandResult::None => {}

        CommandResult::ShowHelp => {
            state.push_exchange(Exchange::assistant(HELP));
        }

        CommandResult::Reset => {
            state.pending_reset = true;
        }

        CommandResult::Topic(topic) => {
            state.input = format!("Can you explain {topic} for me? ");
            state.cursor_pos = state.input.len();
        }

        CommandResult::Exit => return true,

        CommandResult::Unknown(cmd) => {
            state.status_message = Some(format!("Unknown command: /{cmd} (try /help)"));
        }
    }
    false
}
