//! Session module - owns the generator, the queue and the reserve
//!
//! One [`Command`] maps to exactly one core operation. The session also
//! enforces the refill rule: whenever a piece leaves the queue by being played
//! or reserved, one freshly generated piece is appended, so the queue is full
//! again after those commands.

use std::fmt;

use crate::exchange::{swap_block, swap_front_with_top};
use crate::queue::PieceQueue;
use crate::rng::PieceGenerator;
use crate::snapshot::SessionSnapshot;
use crate::stack::ReserveStack;
use crate::types::{Command, PieceTag, Rejected};

/// Successful result of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Played(PieceTag),
    Reserved(PieceTag),
    UsedReserve(PieceTag),
    SwappedFrontWithTop,
    SwappedBlock,
}

impl Outcome {
    /// Piece that left the queue or the reserve, if any.
    pub fn piece(&self) -> Option<PieceTag> {
        match self {
            Outcome::Played(tag) | Outcome::Reserved(tag) | Outcome::UsedReserve(tag) => Some(*tag),
            Outcome::SwappedFrontWithTop | Outcome::SwappedBlock => None,
        }
    }
}

impl fmt::Display for Outcome {
    /// Messages name pieces as `[T-7]`; only container listings pad ids.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Played(t) => write!(f, "You played piece [{}-{}]!", t.kind.symbol(), t.id),
            Outcome::Reserved(t) => {
                write!(f, "Piece [{}-{}] sent to the reserve.", t.kind.symbol(), t.id)
            }
            Outcome::UsedReserve(t) => {
                write!(f, "You used reserved piece [{}-{}]!", t.kind.symbol(), t.id)
            }
            Outcome::SwappedFrontWithTop => f.write_str("Swapped queue front <-> reserve top."),
            Outcome::SwappedBlock => f.write_str("Block swap (3 pieces) done!"),
        }
    }
}

/// Complete session state.
#[derive(Debug)]
pub struct Session {
    generator: PieceGenerator,
    queue: PieceQueue,
    reserve: ReserveStack,
    seed: u32,
    /// Commands applied so far, rejected ones included.
    turn: u64,
}

impl Session {
    /// Create a session with a full queue and an empty reserve.
    pub fn new(seed: u32) -> Self {
        let mut generator = PieceGenerator::new(seed);
        let queue = PieceQueue::filled(&mut generator);
        Self {
            generator,
            queue,
            reserve: ReserveStack::new(),
            seed,
            turn: 0,
        }
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn reserve(&self) -> &ReserveStack {
        &self.reserve
    }

    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn next_id(&self) -> u64 {
        self.generator.next_id()
    }

    /// Run one command. Rejections leave the queue and the reserve unchanged.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, Rejected> {
        self.turn += 1;
        match command {
            Command::Play => self.play(),
            Command::Reserve => self.reserve_front(),
            Command::UseReserve => self.use_reserve(),
            Command::SwapFrontWithTop => {
                swap_front_with_top(&mut self.queue, &mut self.reserve)?;
                Ok(Outcome::SwappedFrontWithTop)
            }
            Command::SwapBlock => {
                swap_block(&mut self.queue, &mut self.reserve)?;
                Ok(Outcome::SwappedBlock)
            }
        }
    }

    fn play(&mut self) -> Result<Outcome, Rejected> {
        let piece = self.queue.dequeue()?;
        self.refill()?;
        Ok(Outcome::Played(piece.tag()))
    }

    fn reserve_front(&mut self) -> Result<Outcome, Rejected> {
        // Check before dequeuing so a full reserve costs nothing.
        if self.reserve.is_full() {
            return Err(Rejected::StackFull);
        }
        let piece = self.queue.dequeue()?;
        let tag = piece.tag();
        self.reserve.push(piece)?;
        self.refill()?;
        Ok(Outcome::Reserved(tag))
    }

    fn use_reserve(&mut self) -> Result<Outcome, Rejected> {
        let piece = self.reserve.pop()?;
        Ok(Outcome::UsedReserve(piece.tag()))
    }

    /// Append exactly one generated piece.
    fn refill(&mut self) -> Result<(), Rejected> {
        self.queue.enqueue(self.generator.generate())
    }

    /// Fill a caller-owned snapshot without allocating.
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.clear();
        out.queue.extend(self.queue.iter().map(|p| p.tag()));
        out.reserve.extend(self.reserve.iter().map(|p| p.tag()));
        out.turn = self.turn;
        out.next_id = self.generator.next_id();
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut out = SessionSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(1)
    }
}
