//! Session journal - one JSON object per turn, appended to a file
//!
//! Each record carries the command, whether it was accepted, the message shown
//! to the player and both containers after the command ran:
//!
//! ```text
//! {"turn":1,"command":"play","status":"ok","message":"You played piece [T-1]!","queue":[{"kind":"o","id":2},...],"reserve":[]}
//! {"turn":2,"command":"useReserve","status":"rejected","code":"stack_empty","message":"reserve is empty, nothing to use","queue":[...],"reserve":[]}
//! ```
//!
//! The journal is write-only; sessions are never restored from it.

pub mod record;
pub mod writer;

pub use tetris_stack_core as core;
pub use tetris_stack_types as types;

pub use record::{PieceRecord, Status, TurnRecord};
pub use writer::Journal;
