//! Queue module - fixed-capacity circular queue of upcoming pieces
//!
//! Storage is an inline array of `QUEUE_CAPACITY` slots; `front`/`back` wrap
//! around it and never escape this module. Callers address pieces by logical
//! offset (0 = front) only.
//!
//! The queue never refills itself. Keeping it topped up is session policy
//! (see [`crate::session`]).

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::rng::PieceGenerator;
use crate::types::{PieceTag, Rejected, QUEUE_CAPACITY};

/// Circular FIFO of pieces with a fixed capacity.
#[derive(Debug, Default)]
pub struct PieceQueue {
    /// Invariant: the `len` slots starting at `front` (wrapping) are `Some`,
    /// all others are `None`.
    slots: [Option<Piece>; QUEUE_CAPACITY],
    front: usize,
    back: usize,
    len: usize,
}

impl PieceQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a queue pre-filled to capacity with freshly generated pieces.
    pub fn filled(generator: &mut PieceGenerator) -> Self {
        let mut queue = Self::new();
        while !queue.is_full() {
            // Cannot fail: the loop stops at capacity.
            let _ = queue.enqueue(generator.generate());
        }
        queue
    }

    pub fn capacity(&self) -> usize {
        QUEUE_CAPACITY
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == QUEUE_CAPACITY
    }

    /// Append a piece at the back.
    ///
    /// Returns [`Rejected::QueueFull`] without touching the queue when there is
    /// no free slot; the piece is dropped.
    pub fn enqueue(&mut self, piece: Piece) -> Result<(), Rejected> {
        if self.is_full() {
            return Err(Rejected::QueueFull);
        }
        self.slots[self.back] = Some(piece);
        self.back = (self.back + 1) % QUEUE_CAPACITY;
        self.len += 1;
        Ok(())
    }

    /// Remove and return the front piece.
    pub fn dequeue(&mut self) -> Result<Piece, Rejected> {
        if self.is_empty() {
            return Err(Rejected::QueueEmpty);
        }
        let piece = self.slots[self.front]
            .take()
            .ok_or(Rejected::QueueEmpty)?;
        self.front = (self.front + 1) % QUEUE_CAPACITY;
        self.len -= 1;
        Ok(piece)
    }

    /// The next piece to be played.
    pub fn front(&self) -> Option<&Piece> {
        self.get(0)
    }

    /// Piece at `offset` positions behind the front.
    pub fn get(&self, offset: usize) -> Option<&Piece> {
        if offset >= self.len {
            return None;
        }
        self.slots[self.physical(offset)].as_ref()
    }

    /// Mutable access by logical offset, for in-place exchanges.
    pub(crate) fn get_mut(&mut self, offset: usize) -> Option<&mut Piece> {
        if offset >= self.len {
            return None;
        }
        let index = self.physical(offset);
        self.slots[index].as_mut()
    }

    /// Pieces from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        (0..self.len).filter_map(move |offset| self.get(offset))
    }

    /// Tags from front to back. Does not allocate.
    pub fn render(&self) -> ArrayVec<PieceTag, QUEUE_CAPACITY> {
        self.iter().map(Piece::tag).collect()
    }

    fn physical(&self, offset: usize) -> usize {
        (self.front + offset) % QUEUE_CAPACITY
    }
}
