//! Snapshot module - copyable view of a session
//!
//! Filled in place by `Session::snapshot_into`, so a caller can reuse one
//! snapshot across turns without allocating.

use arrayvec::ArrayVec;

use crate::types::{PieceTag, QUEUE_CAPACITY, RESERVE_CAPACITY};

/// Copyable view of a session, shared by the renderer and the journal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SessionSnapshot {
    /// Front to back.
    pub queue: ArrayVec<PieceTag, QUEUE_CAPACITY>,
    /// Base to top.
    pub reserve: ArrayVec<PieceTag, RESERVE_CAPACITY>,
    pub turn: u64,
    pub next_id: u64,
    pub seed: u32,
}

impl SessionSnapshot {
    pub fn clear(&mut self) {
        self.queue.clear();
        self.reserve.clear();
        self.turn = 0;
        self.next_id = 0;
        self.seed = 0;
    }

    pub fn queue_front(&self) -> Option<PieceTag> {
        self.queue.first().copied()
    }

    pub fn reserve_top(&self) -> Option<PieceTag> {
        self.reserve.last().copied()
    }
}
