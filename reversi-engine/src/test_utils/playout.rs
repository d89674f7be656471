//! Seeded random games played through [`Engine`], for invariant tests.

use super::legal_locations;
use crate::{Engine, Location, Snapshot};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// A finished (or truncated) random game.
#[derive(Clone, Debug)]
pub struct Playout {
    pub engine: Engine,
    /// Every placement made, in order.
    pub moves: Vec<Location>,
    /// The state before each placement, as observed from outside the engine.
    pub before: Vec<Snapshot>,
}

/// Play up to `max_moves` placements, choosing uniformly among legal squares.
/// A player with no legal square skips; two skips in a row end the game.
pub fn random_playout(seed: u64, max_moves: usize) -> Playout {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut engine = Engine::new();
    let mut moves = Vec::new();
    let mut before = Vec::new();
    let mut passed = false;

    while moves.len() < max_moves {
        let legal = legal_locations(engine.board(), engine.turn());
        let loc = match legal.choose(&mut rng) {
            Some(&loc) => loc,
            None if passed => break,
            None => {
                engine.skip_turn();
                passed = true;
                continue;
            }
        };

        let snapshot = Snapshot {
            board: *engine.board(),
            turn: engine.turn(),
        };
        if engine.attempt_place(loc).is_applied() {
            before.push(snapshot);
            moves.push(loc);
            passed = false;
        }
    }

    Playout {
        engine,
        moves,
        before,
    }
}
