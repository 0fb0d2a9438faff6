//! Terminal rendering module.
//!
//! Draws the menu screen: the reserve, the next queue, the numbered commands
//! and the result of the last command. Layout is pure and lives in [`view`];
//! [`renderer`] is the only part that touches the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Color pieces by kind in key mode
//! - Produce the same rows as plain text for line mode and logs

pub mod renderer;
pub mod style;
pub mod view;

pub use tetris_stack_core as core;
pub use tetris_stack_types as types;

pub use renderer::{encode_lines_into, TerminalRenderer};
pub use style::{piece_color, Line, Rgb, Span, SpanStyle};
pub use view::{render_plain, MenuView, Notice};
