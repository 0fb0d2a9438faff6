//! Exchange module - in-place swaps between the queue and the reserve
//!
//! Both operations borrow the two containers mutably in a single call and swap
//! pieces slot for slot. Occupancy counts never change, and a failed
//! precondition leaves both containers untouched.

use crate::queue::PieceQueue;
use crate::stack::ReserveStack;
use crate::types::{Rejected, BLOCK_LEN, RESERVE_CAPACITY};

/// Swap the queue's front piece with the reserve's top piece.
///
/// Requires both containers to be non-empty.
pub fn swap_front_with_top(queue: &mut PieceQueue, reserve: &mut ReserveStack) -> Result<(), Rejected> {
    match (queue.get_mut(0), reserve.top_mut()) {
        (Some(front), Some(top)) => {
            std::mem::swap(front, top);
            Ok(())
        }
        _ => Err(Rejected::PreconditionFailed),
    }
}

/// Swap the first [`BLOCK_LEN`] queued pieces with the whole reserve.
///
/// Requires a full reserve and at least [`BLOCK_LEN`] queued pieces. Reserve
/// index `i` pairs with queue offset `i`, so the reserve base goes to the
/// queue front and the reserve top goes to the third queue position.
pub fn swap_block(queue: &mut PieceQueue, reserve: &mut ReserveStack) -> Result<(), Rejected> {
    if reserve.len() != RESERVE_CAPACITY || queue.len() < BLOCK_LEN {
        return Err(Rejected::PreconditionFailed);
    }
    for i in 0..BLOCK_LEN {
        let (Some(queued), Some(reserved)) = (queue.get_mut(i), reserve.get_mut(i)) else {
            unreachable!("block slot {} missing after occupancy check", i);
        };
        std::mem::swap(queued, reserved);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Piece;
    use crate::rng::PieceGenerator;

    fn queue_ids(queue: &PieceQueue) -> Vec<u64> {
        queue.iter().map(Piece::id).collect()
    }

    fn reserve_ids(reserve: &ReserveStack) -> Vec<u64> {
        reserve.iter().map(Piece::id).collect()
    }

    /// Queue holds ids 1..=5, reserve holds the next `reserved` ids.
    fn setup_with(reserved: usize) -> (PieceGenerator, PieceQueue, ReserveStack) {
        let mut gen = PieceGenerator::new(3);
        let queue = PieceQueue::filled(&mut gen);
        let mut reserve = ReserveStack::new();
        for _ in 0..reserved {
            reserve.push(gen.generate()).unwrap();
        }
        (gen, queue, reserve)
    }

    fn setup(reserved: usize) -> (PieceQueue, ReserveStack) {
        let (_, queue, reserve) = setup_with(reserved);
        (queue, reserve)
    }

    #[test]
    fn test_swap_front_with_top() {
        let (mut queue, mut reserve) = setup(2);
        assert_eq!(queue_ids(&queue), vec![1, 2, 3, 4, 5]);
        assert_eq!(reserve_ids(&reserve), vec![6, 7]);

        swap_front_with_top(&mut queue, &mut reserve).unwrap();

        assert_eq!(queue_ids(&queue), vec![7, 2, 3, 4, 5]);
        assert_eq!(reserve_ids(&reserve), vec![6, 1]);
    }

    #[test]
    fn test_swap_front_with_top_empty_reserve() {
        let (mut queue, mut reserve) = setup(0);
        assert_eq!(
            swap_front_with_top(&mut queue, &mut reserve),
            Err(Rejected::PreconditionFailed)
        );
        assert_eq!(queue_ids(&queue), vec![1, 2, 3, 4, 5]);
        assert!(reserve.is_empty());
    }

    #[test]
    fn test_swap_front_with_top_empty_queue() {
        let mut queue = PieceQueue::new();
        let mut gen = PieceGenerator::new(3);
        let mut reserve = ReserveStack::new();
        reserve.push(gen.generate()).unwrap();
        assert_eq!(
            swap_front_with_top(&mut queue, &mut reserve),
            Err(Rejected::PreconditionFailed)
        );
        assert_eq!(reserve_ids(&reserve), vec![1]);
    }

    #[test]
    fn test_swap_block_pairs_base_with_front() {
        let (mut queue, mut reserve) = setup(3);
        swap_block(&mut queue, &mut reserve).unwrap();

        assert_eq!(queue_ids(&queue), vec![6, 7, 8, 4, 5]);
        assert_eq!(reserve_ids(&reserve), vec![1, 2, 3]);
        assert_eq!(queue.len(), 5);
        assert_eq!(reserve.len(), 3);
    }

    #[test]
    fn test_swap_block_requires_full_reserve() {
        let (mut queue, mut reserve) = setup(2);
        assert_eq!(
            swap_block(&mut queue, &mut reserve),
            Err(Rejected::PreconditionFailed)
        );
        assert_eq!(queue_ids(&queue), vec![1, 2, 3, 4, 5]);
        assert_eq!(reserve_ids(&reserve), vec![6, 7]);
    }

    #[test]
    fn test_swap_block_requires_three_queued() {
        let (mut queue, mut reserve) = setup(3);
        queue.dequeue().unwrap();
        queue.dequeue().unwrap();
        queue.dequeue().unwrap();
        assert_eq!(queue.len(), 2);
        assert_eq!(
            swap_block(&mut queue, &mut reserve),
            Err(Rejected::PreconditionFailed)
        );
        assert_eq!(queue_ids(&queue), vec![4, 5]);
        assert_eq!(reserve_ids(&reserve), vec![6, 7, 8]);
    }

    #[test]
    fn test_swap_block_moves_every_pair_or_none() {
        for reserved in 0..=3 {
            let (mut queue, mut reserve) = setup(reserved);
            let queue_before = queue_ids(&queue);
            let reserve_before = reserve_ids(&reserve);

            let accepted = swap_block(&mut queue, &mut reserve).is_ok();
            let queue_after = queue_ids(&queue);
            let reserve_after = reserve_ids(&reserve);

            let moved = (0..BLOCK_LEN.min(reserved))
                .filter(|&i| queue_after[i] != queue_before[i])
                .count();
            if accepted {
                assert_eq!(moved, BLOCK_LEN);
                assert_eq!(reserve_after, queue_before[..BLOCK_LEN].to_vec());
            } else {
                assert_eq!(moved, 0);
                assert_eq!(queue_after, queue_before);
                assert_eq!(reserve_after, reserve_before);
            }
        }
    }

    #[test]
    fn test_swap_block_follows_wrapped_front() {
        let (mut gen, mut queue, mut reserve) = setup_with(3);
        // Move the physical front to slot 4 so the block wraps the ring.
        for _ in 0..4 {
            queue.dequeue().unwrap();
            queue.enqueue(gen.generate()).unwrap();
        }
        let before = queue_ids(&queue);
        swap_block(&mut queue, &mut reserve).unwrap();

        let after = queue_ids(&queue);
        assert_eq!(&after[..3], &[6, 7, 8]);
        assert_eq!(&after[3..], &before[3..]);
        assert_eq!(reserve_ids(&reserve), before[..3].to_vec());
    }
}
