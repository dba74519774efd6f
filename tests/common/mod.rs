#![allow(dead_code)]

use chess_core::Puzzle;
use puzzle_engine::{GameLogic, PuzzleCollection, Session, SolutionKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeMap;

pub const WHITE_TO_MOVE: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
pub const BLACK_TO_MOVE: &str = "r1bBk2r/pppn1ppp/8/3n4/1b1P4/8/PP1QPPPP/R3KBNR b KQkq - 2 8";

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn logic(auto_advance: bool) -> GameLogic {
    GameLogic {
        auto_advance,
        solution_kind: SolutionKind::Move,
        allow_no_solution: false,
    }
}

/// Single-solution puzzle tagged by its answer.
pub fn tagged(tag: &str) -> Puzzle {
    Puzzle::new(WHITE_TO_MOVE, [tag])
}

/// Started session over a single puzzle.
pub fn playing(auto_advance: bool, puzzle: Puzzle) -> Session<StdRng> {
    let mut session = Session::new(logic(auto_advance), vec![puzzle], rng(42)).unwrap();
    session.start(true);
    session
}

/// `{0: [P1, P2, P3], 1: [P4]}` for knight-forks.
pub fn two_level_collection() -> PuzzleCollection {
    let levels = BTreeMap::from([
        (0, vec![tagged("P1"), tagged("P2"), tagged("P3")]),
        (1, vec![tagged("P4")]),
    ]);
    PuzzleCollection::for_game("knight-forks", levels, Vec::new()).unwrap()
}
