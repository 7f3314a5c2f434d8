//! Chat state: the transcript of exchanges and the submission flag.

use crate::render::{Markup, render};
use std::time::Instant;

/// Author of one transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// One rendered turn in the visible transcript. Never mutated after
/// creation; destroyed only by a full history clear.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub sender: Sender,
    pub markup: Markup,
    pub timestamp: Instant,
}

impl Exchange {
    pub fn user(raw: &str) -> Self {
        Self {
            sender: Sender::User,
            markup: render(raw),
            timestamp: Instant::now(),
        }
    }

    pub fn assistant(raw: &str) -> Self {
        Self {
            sender: Sender::Assistant,
            markup: render(raw),
            timestamp: Instant::now(),
        }
    }
}

/// Fixed welcome turn every conversation starts from and resets back to.
pub const WELCOME: &str = "**Welcome to CodeMentor!** 👋\n\
I'm your programming interview assistant, here to help you master \
**Data Structures and Algorithms**.\n\n\
**How I work:**\n\
- 💭 **Hint:** a nudge in the right direction\n\
- 🔍 **Approach:** the strategy to solve it\n\
- 💻 **Code:** working code examples\n\
- ⏱️ **Complexity:** time and space, always\n\n\
Ready? Ask me a DSA question and let's get started! 🚀";

/// The visible message history.
#[derive(Debug, Default)]
pub struct Transcript {
    exchanges: Vec<Exchange>,
}

impl Transcript {
    /// Fresh transcript holding only the welcome exchange.
    pub fn with_welcome() -> Self {
        let mut transcript = Self::default();
        transcript.push(Exchange::assistant(WELCOME));
        transcript
    }

    pub fn push(&mut self, exchange: Exchange) {
        self.exchanges.push(exchange);
    }

    /// Drops the full history back to the single welcome exchange.
    pub fn clear_to_welcome(&mut self) {
        self.exchanges.clear();
        self.push(Exchange::assistant(WELCOME));
    }

    pub fn exchanges(&self) -> &[Exchange] {
        &self.exchanges
    }

    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }
}

/// Process-wide submission flag. At most one submission may be in flight;
/// only the submission controller flips it.
#[derive(Debug, Default)]
pub struct SubmissionState {
    busy: bool,
}

impl SubmissionState {
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub(crate) fn begin(&mut self) {
        self.busy = true;
    }

    /// Unconditional clear; runs on every submission exit path.
    pub(crate) fn finish(&mut self) {
        self.busy = false;
    }
}

/// Full chat session state driven by the event loop.
#[derive(Debug)]
pub struct ChatState {
    /// Visible history.
    pub transcript: Transcript,
    /// Current input buffer.
    pub input: String,
    /// Cursor position in the input buffer.
    pub cursor_pos: usize,
    /// Scroll offset for the message area.
    pub scroll_offset: u16,
    /// In-flight submission flag.
    pub submission: SubmissionState,
    /// Loading animation frame.
    pub loading_frame: usize,
    /// Transient status line.
    pub status_message: Option<String>,
    /// A reset is awaiting y/n confirmation.
    pub pending_reset: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            transcript: Transcript::with_welcome(),
            input: String::new(),
            cursor_pos: 0,
            scroll_offset: 0,
            submission: SubmissionState::default(),
            loading_frame: 0,
            status_message: None,
            pending_reset: false,
        }
    }

    /// Appends an exchange and schedules a scroll to the newest content.
    pub fn push_exchange(&mut self, exchange: Exchange) {
        self.transcript.push(exchange);
        self.scroll_to_bottom();
    }

    /// Current input, cleared. Cursor returns to the start.
    pub fn take_input(&mut self) -> String {
        self.cursor_pos = 0;
        std::mem::take(&mut self.input)
    }

    pub fn insert_char(&mut self, c: char) {
        if self.cursor_pos >= self.input.len() {
            self.input.push(c);
        } else {
            self.input.insert(self.cursor_pos, c);
        }
        self.cursor_pos += c.len_utf8();
    }

    /// Backspace.
    pub fn delete_char(&mut self) {
        if self.cursor_pos == 0 || self.input.is_empty() {
            return;
        }
        if let Some((idx, c)) = self
            .input
            .char_indices()
            .take_while(|(idx, _)| *idx < self.cursor_pos)
            .last()
        {
            self.input.remove(idx);
            self.cursor_pos -= c.len_utf8();
        }
    }

    /// Delete key.
    pub fn delete_char_forward(&mut self) {
        if self.cursor_pos < self.input.len() {
            self.input.remove(self.cursor_pos);
        }
    }

    pub fn move_cursor_left(&mut self) {
        let before = &self.input[..self.cursor_pos];
        if let Some(c) = before.chars().last() {
            self.cursor_pos -= c.len_utf8();
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(c) = self.input[self.cursor_pos..].chars().next() {
            self.cursor_pos += c.len_utf8();
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.input.len();
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self, max_scroll: u16) {
        if self.scroll_offset < max_scroll {
            self.scroll_offset += 1;
        }
    }

    /// Sentinel resolved against measured content height at the next draw,
    /// so layout has settled before the scroll extent is computed.
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = u16::MAX;
    }

    pub fn tick_loading(&mut self) {
        if self.submission.is_busy() {
            self.loading_frame = (self.loading_frame + 1) % 4;
        }
    }

    /// Whether the input buffer holds a `/` command.
    pub fn is_command(&self) -> bool {
        self.input.starts_with('/')
    }
}
