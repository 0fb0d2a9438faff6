//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, session journal).
//!
//! # Capacities
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `QUEUE_CAPACITY` | 5 | Pieces shown in the "next" queue |
//! | `RESERVE_CAPACITY` | 3 | Pieces that can be set aside in the reserve |
//! | `BLOCK_LEN` | 3 | Pieces moved by a block exchange |
//!
//! # Commands
//!
//! The menu exposes five numbered commands (0 quits and is handled by the
//! input layer, not the core):
//!
//! | Code | Command |
//! |------|---------|
//! | 1 | Play the front piece |
//! | 2 | Reserve the front piece |
//! | 3 | Use the reserve top |
//! | 4 | Swap queue front with reserve top |
//! | 5 | Swap the first three queued pieces with the full reserve |
//!
//! # Examples
//!
//! ```
//! use tetris_stack_types::{Command, PieceKind, Rejected, QUEUE_CAPACITY};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//! assert_eq!(kind.symbol(), 'T');
//!
//! assert_eq!(Command::from_code(4), Some(Command::SwapFrontWithTop));
//! assert_eq!(Command::from_code(9), None);
//!
//! assert_eq!(Rejected::StackFull.code(), "stack_full");
//! assert_eq!(QUEUE_CAPACITY, 5);
//! ```

use std::fmt;

/// Number of pieces held by the "next" queue.
pub const QUEUE_CAPACITY: usize = 5;

/// Number of pieces the reserve stack can hold.
pub const RESERVE_CAPACITY: usize = 3;

/// Number of pairs swapped by a block exchange.
pub const BLOCK_LEN: usize = 3;

/// First identity handed out by a fresh generator.
pub const FIRST_PIECE_ID: u64 = 1;

/// The seven piece categories.
///
/// Pieces carry no shape information here; the kind is just a label, and
/// each label has a distinct display color:
/// - **I**: Cyan
/// - **O**: Yellow
/// - **T**: Magenta
/// - **L**: Orange
/// - **J**: Blue
/// - **Z**: Red
/// - **S**: Green
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    Z,
    S,
}

impl PieceKind {
    /// All kinds, in generator draw order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::Z,
        PieceKind::S,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "z" => Some(PieceKind::Z),
            "s" => Some(PieceKind::S),
            _ => None,
        }
    }

    /// Lowercase name, used by the journal.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::Z => "z",
            PieceKind::S => "s",
        }
    }

    /// Uppercase display symbol.
    pub fn symbol(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
            PieceKind::J => 'J',
            PieceKind::Z => 'Z',
            PieceKind::S => 'S',
        }
    }
}

/// Copyable view of a piece: its kind and identity.
///
/// Pieces themselves are move-only; tags are what renderers, outcomes and the
/// journal pass around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceTag {
    pub kind: PieceKind,
    pub id: u64,
}

impl PieceTag {
    pub fn new(kind: PieceKind, id: u64) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for PieceTag {
    /// Formats as `[T-07]`: ids get at least two digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{:02}]", self.kind.symbol(), self.id)
    }
}

/// Menu commands that reach the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Play,
    Reserve,
    UseReserve,
    SwapFrontWithTop,
    SwapBlock,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::Play,
        Command::Reserve,
        Command::UseReserve,
        Command::SwapFrontWithTop,
        Command::SwapBlock,
    ];

    /// Map a numeric menu code to a command. `0` (quit) is not a command.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Command::Play),
            2 => Some(Command::Reserve),
            3 => Some(Command::UseReserve),
            4 => Some(Command::SwapFrontWithTop),
            5 => Some(Command::SwapBlock),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Command::Play => 1,
            Command::Reserve => 2,
            Command::UseReserve => 3,
            Command::SwapFrontWithTop => 4,
            Command::SwapBlock => 5,
        }
    }

    /// Stable name (journal).
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Play => "play",
            Command::Reserve => "reserve",
            Command::UseReserve => "useReserve",
            Command::SwapFrontWithTop => "swapFrontWithTop",
            Command::SwapBlock => "swapBlock",
        }
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Command::Play => "Play front piece (dequeue)",
            Command::Reserve => "Reserve front piece (queue -> reserve)",
            Command::UseReserve => "Use reserved piece (pop reserve)",
            Command::SwapFrontWithTop => "Swap queue front <-> reserve top",
            Command::SwapBlock => "Swap first 3 of queue <-> 3 of reserve",
        }
    }
}

/// Why an operation was refused. Rejections never mutate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejected {
    QueueFull,
    QueueEmpty,
    StackFull,
    StackEmpty,
    PreconditionFailed,
}

impl Rejected {
    pub fn code(self) -> &'static str {
        match self {
            Rejected::QueueFull => "queue_full",
            Rejected::QueueEmpty => "queue_empty",
            Rejected::StackFull => "stack_full",
            Rejected::StackEmpty => "stack_empty",
            Rejected::PreconditionFailed => "precondition_failed",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Rejected::QueueFull => "next queue is full",
            Rejected::QueueEmpty => "next queue is empty",
            Rejected::StackFull => "reserve is full, cannot reserve",
            Rejected::StackEmpty => "reserve is empty, nothing to use",
            Rejected::PreconditionFailed => "exchange needs the required pieces in both queue and reserve",
        }
    }
}

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for Rejected {}
