//! Pieces module - opaque tokens held by the queue and the reserve.

use crate::types::{PieceKind, PieceTag};

/// A single piece: a kind label plus an identity unique to its generator.
///
/// Pieces are deliberately neither `Clone` nor `Copy`. Every transfer between
/// containers is a move, so an identity can never be held in two places.
/// Use [`Piece::tag`] for a copyable view.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    id: u64,
}

impl Piece {
    pub(crate) fn new(kind: PieceKind, id: u64) -> Self {
        Self { kind, id }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn tag(&self) -> PieceTag {
        PieceTag::new(self.kind, self.id)
    }
}
