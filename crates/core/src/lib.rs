//! Core logic module - pure, deterministic, and testable
//!
//! This module contains the piece containers, the exchange rules and the
//! session that ties them together. It has **zero dependencies** on terminal
//! I/O or files, making it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Every rule is covered by unit tests
//! - **Fixed-size**: Both containers live inline; commands never touch the heap
//!
//! # Module Structure
//!
//! - [`piece`]: Move-only piece tokens
//! - [`rng`]: Seeded LCG and the sequential-identity piece generator
//! - [`queue`]: Circular "next" queue, capacity 5
//! - [`stack`]: Reserve stack, capacity 3
//! - [`exchange`]: In-place swaps between queue and reserve
//! - [`session`]: Command dispatch and the queue refill rule
//! - [`snapshot`]: Copyable view for rendering and logging
//!
//! # Rules
//!
//! - **Play** (1): the front piece leaves the game and a new piece joins the back
//! - **Reserve** (2): the front piece moves to the reserve top, a new piece joins the back
//! - **Use reserve** (3): the reserve top leaves the game
//! - **Swap** (4): queue front and reserve top trade places
//! - **Block swap** (5): with a full reserve, reserve index `i` trades places with queue position `i`
//!
//! # Example
//!
//! ```
//! use tetris_stack_core::Session;
//! use tetris_stack_types::{Command, Rejected};
//!
//! let mut session = Session::new(12345);
//!
//! let played = session.apply(Command::Play).unwrap();
//! assert_eq!(played.piece().unwrap().id, 1);
//! assert!(session.queue().is_full());
//!
//! // Nothing reserved yet.
//! assert_eq!(session.apply(Command::UseReserve), Err(Rejected::StackEmpty));
//! ```

pub mod exchange;
pub mod piece;
pub mod queue;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod stack;

pub use tetris_stack_types as types;

// Re-export commonly used types for convenience
pub use exchange::{swap_block, swap_front_with_top};
pub use piece::Piece;
pub use queue::PieceQueue;
pub use rng::{PieceGenerator, SimpleRng};
pub use session::{Outcome, Session};
pub use snapshot::SessionSnapshot;
pub use stack::ReserveStack;
