//! Reserve module - fixed-capacity stack of set-aside pieces
//!
//! Index 0 is the base (oldest reserved piece); index `len - 1` is the top.

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::types::{PieceTag, Rejected, RESERVE_CAPACITY};

/// Bounded LIFO of pieces, stored inline.
#[derive(Debug, Default)]
pub struct ReserveStack {
    items: ArrayVec<Piece, RESERVE_CAPACITY>,
}

impl ReserveStack {
    /// Create an empty reserve.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capacity(&self) -> usize {
        RESERVE_CAPACITY
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    /// Put a piece on top. Rejected with [`Rejected::StackFull`] at capacity.
    pub fn push(&mut self, piece: Piece) -> Result<(), Rejected> {
        self.items.try_push(piece).map_err(|_| Rejected::StackFull)
    }

    /// Take the most recently pushed piece.
    pub fn pop(&mut self) -> Result<Piece, Rejected> {
        self.items.pop().ok_or(Rejected::StackEmpty)
    }

    pub fn top(&self) -> Option<&Piece> {
        self.items.last()
    }

    /// Piece at `index`, counted from the base.
    pub fn get(&self, index: usize) -> Option<&Piece> {
        self.items.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Piece> {
        self.items.get_mut(index)
    }

    pub(crate) fn top_mut(&mut self) -> Option<&mut Piece> {
        self.items.last_mut()
    }

    /// Pieces from base to top.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.items.iter()
    }

    /// Tags from base to top. Does not allocate.
    pub fn render(&self) -> ArrayVec<PieceTag, RESERVE_CAPACITY> {
        self.items.iter().map(Piece::tag).collect()
    }
}
