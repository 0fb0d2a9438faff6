//! MenuView: maps a `SessionSnapshot` into styled terminal lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Outcome, SessionSnapshot};
use crate::style::{self, piece_color, Line, SpanStyle};
use crate::types::{Command, PieceTag, Rejected, QUEUE_CAPACITY, RESERVE_CAPACITY};

/// Feedback line shown under the menu after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Outcome(Outcome),
    Rejected(Rejected),
    InvalidChoice,
}

impl Notice {
    pub fn from_result(result: Result<Outcome, Rejected>) -> Self {
        match result {
            Ok(outcome) => Notice::Outcome(outcome),
            Err(reason) => Notice::Rejected(reason),
        }
    }

    pub fn text(&self) -> String {
        match self {
            Notice::Outcome(outcome) => outcome.to_string(),
            Notice::Rejected(reason) => format!("Error: {}!", reason),
            Notice::InvalidChoice => "Invalid option!".to_string(),
        }
    }

    fn style(&self) -> SpanStyle {
        match self {
            Notice::Outcome(_) => style::OK,
            Notice::Rejected(_) | Notice::InvalidChoice => style::ERROR,
        }
    }
}

const RULE_WIDTH: usize = 40;
const TITLE: &str = "TETRIS STACK - MENU";

/// Lays out the title, both containers, the menu and the last notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuView {
    /// Append the key hint line (key mode only).
    key_hint: bool,
}

impl Default for MenuView {
    fn default() -> Self {
        Self { key_hint: true }
    }
}

impl MenuView {
    pub fn new(key_hint: bool) -> Self {
        Self { key_hint }
    }

    pub fn render(&self, snap: &SessionSnapshot, notice: Option<&Notice>) -> Vec<Line> {
        let mut lines = Vec::with_capacity(16);

        lines.push(Line::styled("=".repeat(RULE_WIDTH), style::FRAME));
        lines.push(Line::styled(centered(TITLE, RULE_WIDTH), style::TITLE));
        lines.push(Line::styled("=".repeat(RULE_WIDTH), style::FRAME));

        lines.push(reserve_line(&snap.reserve));
        lines.push(queue_line(&snap.queue));
        lines.push(Line::styled("-".repeat(RULE_WIDTH), style::FRAME));

        for command in Command::ALL {
            let mut line = Line::new();
            line.push(format!("{}", command.code()), style::LABEL)
                .push(format!(" - {}", command.label()), SpanStyle::default());
            lines.push(line);
        }
        let mut quit = Line::new();
        quit.push("0", style::LABEL).push(" - Quit", SpanStyle::default());
        lines.push(quit);

        if let Some(notice) = notice {
            lines.push(Line::new());
            lines.push(Line::styled(format!(">>> {}", notice.text()), notice.style()));
        }

        if self.key_hint {
            lines.push(Line::new());
            lines.push(Line::styled(
                "Press a number to choose, q or Esc to quit.",
                style::HINT,
            ));
        }

        lines
    }
}

/// Render lines as plain text, one per row, for line mode.
pub fn render_plain(lines: &[Line]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(&line.plain());
        out.push('\n');
    }
    out
}

fn reserve_line(reserve: &[PieceTag]) -> Line {
    let mut line = Line::new();
    line.push(
        format!("[ RESERVE ({}/{}) ] ", reserve.len(), RESERVE_CAPACITY),
        style::LABEL,
    );
    if reserve.is_empty() {
        line.push("Empty", style::HINT);
        return line;
    }
    line.push("Base -> ", style::HINT);
    push_tags(&mut line, reserve);
    line.push("<- Top", style::HINT);
    line
}

fn queue_line(queue: &[PieceTag]) -> Line {
    let mut line = Line::new();
    line.push(
        format!("[ NEXT ({}/{}) ] ", queue.len(), QUEUE_CAPACITY),
        style::LABEL,
    );
    if queue.is_empty() {
        line.push("Empty", style::HINT);
        return line;
    }
    line.push("Front -> ", style::HINT);
    push_tags(&mut line, queue);
    line
}

fn push_tags(line: &mut Line, tags: &[PieceTag]) {
    for tag in tags {
        line.push(
            format!("{} ", tag),
            SpanStyle::fg(piece_color(tag.kind)).bold(),
        );
    }
}

fn centered(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.len()) / 2;
    format!("{}{}", " ".repeat(pad), text)
}
