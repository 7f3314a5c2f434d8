//! Chat UI rendering.
//!
//! Exchanges carry structured markup; this module maps that tree onto
//! styled terminal lines (bold for strong, italics for emphasis, a tinted
//! block for code), unescaping entity text for display.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::theme;
use crate::chat::{ChatState, ConnectivityStatus, Exchange, Sender};
use crate::render::{Markup, Node, Span as Inline, unescape_html};

pub const SPINNER_FRAMES: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// Main chat UI renderer
pub struct ChatUI;

impl ChatUI {
    /// Render the complete chat interface
    pub fn render(
        frame: &mut Frame,
        state: &ChatState,
        connectivity: &ConnectivityStatus,
        endpoint: &str,
    ) {
        let area = frame.area();

        // Layout: status bar, messages, input, help bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(5),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        Self::render_status_bar(frame, chunks[0], state, connectivity, endpoint);
        Self::render_messages(frame, chunks[1], state);
        Self::render_input(frame, chunks[2], state);
        Self::render_help_bar(frame, chunks[3], state);
    }

    fn render_status_bar(
        frame: &mut Frame,
        area: Rect,
        state: &ChatState,
        connectivity: &ConnectivityStatus,
        endpoint: &str,
    ) {
        let indicator = if connectivity.is_connected() {
            Span::styled("● Ollama Connected", theme::status_connected())
        } else {
            Span::styled("○ Ollama Disconnected", theme::status_disconnected())
        };

        let loading = if state.submission.is_busy() {
            Span::styled(
                format!(" {} ", SPINNER_FRAMES[state.loading_frame]),
                theme::loading(),
            )
        } else {
            Span::raw("")
        };

        let status = state
            .status_message
            .as_ref()
            .map(|s| Span::styled(format!(" │ {s}"), theme::muted()))
            .unwrap_or_else(|| Span::raw(""));

        let line = Line::from(vec![
            Span::styled(" CodeMentor ", theme::user_prefix()),
            Span::styled("│ ", theme::muted()),
            indicator,
            Span::styled(" │ ", theme::muted()),
            Span::styled(endpoint.to_string(), theme::muted()),
            loading,
            status,
        ]);

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme::border());
        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn render_messages(frame: &mut Frame, area: Rect, state: &ChatState) {
        let inner_height = area.height.saturating_sub(2) as usize;

        let mut lines: Vec<Line> = Vec::new();
        for exchange in state.transcript.exchanges() {
            lines.extend(exchange_lines(exchange));
            lines.push(Line::from(""));
        }

        if state.submission.is_busy() {
            lines.push(Line::from(Span::styled(
                format!(
                    "Mentor: {} Thinking...",
                    SPINNER_FRAMES[state.loading_frame]
                ),
                theme::loading(),
            )));
        }

        // The scroll-to-bottom sentinel resolves against measured content
        // height here, after layout has settled.
        let total_lines = lines.len();
        let max_scroll = total_lines.saturating_sub(inner_height);
        let scroll = if state.scroll_offset == u16::MAX {
            max_scroll as u16
        } else {
            state.scroll_offset.min(max_scroll as u16)
        };

        let block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(theme::border());
        let para = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));
        frame.render_widget(para, area);
    }

    fn render_input(frame: &mut Frame, area: Rect, state: &ChatState) {
        let busy = state.submission.is_busy();

        let display = if busy {
            "Waiting for response...".to_string()
        } else if state.input.is_empty() {
            "Ask a DSA question...".to_string()
        } else {
            let mut chars: Vec<char> = state.input.chars().collect();
            let cursor_chars = state.input[..state.cursor_pos].chars().count();
            if cursor_chars >= chars.len() {
                chars.push('_');
            } else {
                chars.insert(cursor_chars, '|');
            }
            chars.into_iter().collect()
        };

        let style = if busy { theme::muted() } else { theme::text() };
        let line = Line::from(vec![
            Span::styled("> ", theme::user_prefix()),
            Span::styled(display, style),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if busy {
                theme::border()
            } else {
                theme::border_active()
            })
            .title(if state.is_command() {
                " Command "
            } else {
                " Message "
            });
        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn render_help_bar(frame: &mut Frame, area: Rect, state: &ChatState) {
        let help = if state.pending_reset {
            Line::from(vec![
                Span::styled(" Clear the conversation? ", theme::text()),
                Span::styled("y", theme::key_destructive()),
                Span::raw("/"),
                Span::styled("n", theme::key_hint()),
            ])
        } else if state.submission.is_busy() {
            Line::from(Span::styled(
                " Waiting for the mentor... ",
                theme::loading(),
            ))
        } else {
            Line::from(vec![
                Span::styled(" Enter", theme::key_hint()),
                Span::raw(": Send │ "),
                Span::styled("/help", theme::key_hint()),
                Span::raw(": Commands │ "),
                Span::styled("PageUp/Down", theme::key_hint()),
                Span::raw(": Scroll │ "),
                Span::styled("Ctrl+Q", theme::key_destructive()),
                Span::raw(": Exit "),
            ])
        };
        frame.render_widget(Paragraph::new(help), area);
    }
}

/// Lines for one exchange: prefixed first line, indented continuations.
fn exchange_lines(exchange: &Exchange) -> Vec<Line<'static>> {
    let (prefix, style) = match exchange.sender {
        Sender::User => ("You: ", theme::user_prefix()),
        Sender::Assistant => ("Mentor: ", theme::mentor_prefix()),
    };

    let content = markup_lines(&exchange.markup);
    let indent = " ".repeat(prefix.len());

    let mut lines = Vec::with_capacity(content.len().max(1));
    for (i, line) in content.into_iter().enumerate() {
        let mut spans: Vec<Span<'static>> = Vec::with_capacity(line.spans.len() + 1);
        if i == 0 {
            spans.push(Span::styled(prefix, style));
        } else {
            spans.push(Span::raw(indent.clone()));
        }
        spans.extend(line.spans);
        lines.push(Line::from(spans));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(prefix, style)));
    }
    lines
}

/// Maps a markup tree to styled terminal lines.
fn markup_lines(markup: &Markup) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();

    for node in markup.nodes() {
        match node {
            Node::Spans(spans) => walk_spans(spans, theme::text(), &mut current, &mut lines),
            Node::CodeBlock { language, body } => {
                flush_line(&mut current, &mut lines);
                lines.push(Line::from(Span::styled(
                    format!("┌ {language}"),
                    theme::code_caption(),
                )));
                for code_line in unescape_html(body).lines() {
                    lines.push(Line::from(Span::styled(
                        code_line.to_string(),
                        theme::code_block(),
                    )));
                }
            }
            Node::OrderedList(items) => {
                flush_line(&mut current, &mut lines);
                for (i, item) in items.iter().enumerate() {
                    current.push(Span::styled(format!("{}. ", i + 1), theme::list_marker()));
                    walk_spans(item, theme::text(), &mut current, &mut lines);
                    flush_line(&mut current, &mut lines);
                }
            }
            Node::BulletItem(item) => {
                flush_line(&mut current, &mut lines);
                current.push(Span::styled("• ".to_string(), theme::list_marker()));
                walk_spans(item, theme::text(), &mut current, &mut lines);
                flush_line(&mut current, &mut lines);
            }
        }
    }

    flush_line(&mut current, &mut lines);
    lines
}

fn walk_spans(
    spans: &[Inline],
    style: Style,
    current: &mut Vec<Span<'static>>,
    lines: &mut Vec<Line<'static>>,
) {
    for span in spans {
        match span {
            Inline::Text(text) => current.push(Span::styled(unescape_html(text), style)),
            Inline::Code(code) => {
                current.push(Span::styled(unescape_html(code), theme::inline_code()))
            }
            Inline::Strong(inner) => {
                walk_spans(inner, style.add_modifier(Modifier::BOLD), current, lines)
            }
            Inline::Em(inner) => {
                walk_spans(inner, style.add_modifier(Modifier::ITALIC), current, lines)
            }
            Inline::Break => {
                lines.push(Line::from(std::mem::take(current)));
            }
        }
    }
}

fn flush_line(current: &mut Vec<Span<'static>>, lines: &mut Vec<Line<'static>>) {
    if !current.is_empty() {
        lines.push(Line::from(std::mem::take(current)));
    }
}
