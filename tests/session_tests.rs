//! Session tests - command rules, exchanges and invariants

use std::collections::HashSet;

use tetris_stack::core::{swap_block, swap_front_with_top, Outcome, Session, SimpleRng};
use tetris_stack::types::{Command, Rejected, QUEUE_CAPACITY, RESERVE_CAPACITY};

fn queue_ids(session: &Session) -> Vec<u64> {
    session.queue().iter().map(|p| p.id()).collect()
}

fn reserve_ids(session: &Session) -> Vec<u64> {
    session.reserve().iter().map(|p| p.id()).collect()
}

fn session_with_reserve(count: usize) -> Session {
    let mut session = Session::new(12345);
    for _ in 0..count {
        session.apply(Command::Reserve).unwrap();
    }
    session
}

// ============== Refill rule ==============

#[test]
fn test_play_and_reserve_restore_full_queue() {
    let mut session = Session::new(12345);
    for command in [Command::Play, Command::Reserve, Command::Play, Command::Reserve] {
        let next_before = session.next_id();
        session.apply(command).unwrap();
        assert_eq!(session.queue().len(), QUEUE_CAPACITY);
        // Exactly one replacement piece was generated.
        assert_eq!(session.next_id(), next_before + 1);
    }
}

#[test]
fn test_use_reserve_and_swaps_do_not_generate() {
    let mut session = session_with_reserve(3);
    let next_before = session.next_id();

    session.apply(Command::SwapFrontWithTop).unwrap();
    session.apply(Command::SwapBlock).unwrap();
    session.apply(Command::UseReserve).unwrap();

    assert_eq!(session.next_id(), next_before);
    assert_eq!(session.reserve().len(), 2);
}

// ============== Single exchange ==============

#[test]
fn test_swap_front_with_top_scenario() {
    let mut session = session_with_reserve(1);
    // Reserve holds id 1, queue front is id 2.
    assert_eq!(reserve_ids(&session), vec![1]);
    assert_eq!(queue_ids(&session)[0], 2);

    let outcome = session.apply(Command::SwapFrontWithTop).unwrap();
    assert_eq!(outcome, Outcome::SwappedFrontWithTop);

    assert_eq!(queue_ids(&session)[0], 1);
    assert_eq!(reserve_ids(&session), vec![2]);
    assert_eq!(session.queue().len(), QUEUE_CAPACITY);
    assert_eq!(session.reserve().len(), 1);
}

#[test]
fn test_swap_front_with_top_is_its_own_inverse() {
    let mut session = session_with_reserve(2);
    let queue_before = queue_ids(&session);
    let reserve_before = reserve_ids(&session);

    session.apply(Command::SwapFrontWithTop).unwrap();
    assert_ne!(queue_ids(&session), queue_before);
    session.apply(Command::SwapFrontWithTop).unwrap();

    assert_eq!(queue_ids(&session), queue_before);
    assert_eq!(reserve_ids(&session), reserve_before);
}

#[test]
fn test_swap_front_with_top_on_empty_reserve_is_rejected() {
    let mut session = Session::new(12345);
    let before = session.snapshot();

    assert_eq!(
        session.apply(Command::SwapFrontWithTop),
        Err(Rejected::PreconditionFailed)
    );

    let after = session.snapshot();
    assert_eq!(after.queue, before.queue);
    assert_eq!(after.reserve, before.reserve);
}

// ============== Block exchange ==============

#[test]
fn test_swap_block_pairs_reserve_index_with_queue_offset() {
    let mut session = session_with_reserve(3);
    // Reserve base..top = 1, 2, 3; queue front..back = 4..8.
    assert_eq!(reserve_ids(&session), vec![1, 2, 3]);
    assert_eq!(queue_ids(&session), vec![4, 5, 6, 7, 8]);

    session.apply(Command::SwapBlock).unwrap();

    assert_eq!(queue_ids(&session), vec![1, 2, 3, 7, 8]);
    assert_eq!(reserve_ids(&session), vec![4, 5, 6]);
}

#[test]
fn test_swap_block_is_its_own_inverse() {
    let mut session = session_with_reserve(3);
    session.apply(Command::Play).unwrap();
    let queue_before = queue_ids(&session);
    let reserve_before = reserve_ids(&session);

    session.apply(Command::SwapBlock).unwrap();
    session.apply(Command::SwapBlock).unwrap();

    assert_eq!(queue_ids(&session), queue_before);
    assert_eq!(reserve_ids(&session), reserve_before);
}

#[test]
fn test_swap_block_with_two_reserved_is_rejected() {
    let mut session = session_with_reserve(2);
    let queue_before = queue_ids(&session);
    let reserve_before = reserve_ids(&session);

    assert_eq!(
        session.apply(Command::SwapBlock),
        Err(Rejected::PreconditionFailed)
    );
    assert_eq!(queue_ids(&session), queue_before);
    assert_eq!(reserve_ids(&session), reserve_before);
}

#[test]
fn test_exchange_functions_work_on_bare_containers() {
    use tetris_stack::core::{PieceGenerator, PieceQueue, ReserveStack};

    let mut gen = PieceGenerator::new(5);
    let mut queue = PieceQueue::filled(&mut gen);
    let mut reserve = ReserveStack::new();

    assert_eq!(
        swap_block(&mut queue, &mut reserve),
        Err(Rejected::PreconditionFailed)
    );
    reserve.push(gen.generate()).unwrap();
    swap_front_with_top(&mut queue, &mut reserve).unwrap();
    assert_eq!(queue.front().map(|p| p.id()), Some(6));
    assert_eq!(reserve.top().map(|p| p.id()), Some(1));
}

// ============== Invariants ==============

#[test]
fn test_random_command_sequences_keep_invariants() {
    for seed in [1u32, 7, 99, 2024] {
        let mut rng = SimpleRng::new(seed);
        let mut session = Session::new(seed);

        for _ in 0..1000 {
            let command = Command::ALL[rng.next_range(Command::ALL.len() as u32) as usize];
            let reserve_before = session.reserve().len();
            let result = session.apply(command);

            assert!(session.queue().len() <= QUEUE_CAPACITY);
            assert!(session.reserve().len() <= RESERVE_CAPACITY);
            // Nothing ever drains the queue: only play/reserve remove, and both refill.
            assert_eq!(session.queue().len(), QUEUE_CAPACITY);

            match (command, result) {
                (Command::Reserve, Err(reason)) => {
                    assert_eq!(reason, Rejected::StackFull);
                    assert_eq!(reserve_before, RESERVE_CAPACITY);
                }
                (Command::UseReserve, Err(reason)) => {
                    assert_eq!(reason, Rejected::StackEmpty);
                    assert_eq!(reserve_before, 0);
                }
                (Command::SwapFrontWithTop, Err(reason)) => {
                    assert_eq!(reason, Rejected::PreconditionFailed);
                    assert_eq!(reserve_before, 0);
                }
                (Command::SwapBlock, Err(reason)) => {
                    assert_eq!(reason, Rejected::PreconditionFailed);
                    assert_ne!(reserve_before, RESERVE_CAPACITY);
                }
                (Command::Play, Err(reason)) => panic!("play rejected: {}", reason),
                (_, Ok(_)) => {}
            }

            // Every live identity is held exactly once.
            let mut seen = HashSet::new();
            for id in queue_ids(&session).into_iter().chain(reserve_ids(&session)) {
                assert!(seen.insert(id), "id {} held twice", id);
                assert!(id < session.next_id());
            }
        }
    }
}
