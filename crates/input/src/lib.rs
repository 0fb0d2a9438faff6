//! Terminal input module.
//!
//! Turns raw terminal input into menu choices. Key mode maps `crossterm` key
//! events; line mode parses what the user typed before pressing Enter. Both
//! validate the command code here, so the core only ever sees a [`Command`].
//!
//! [`Command`]: crate::types::Command

pub mod map;

pub use tetris_stack_types as types;

pub use map::{handle_key_event, parse_choice, should_quit, MenuChoice};
