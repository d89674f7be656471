//! Utilities used for testing and benchmarking.

pub mod perft;
pub mod playout;

pub use perft::run_perft;
pub use playout::random_playout;

use crate::{Board, Location, Player};

/// Every square `player` may currently place on, in row-major order.
pub fn legal_locations(board: &Board, player: Player) -> Vec<Location> {
    Location::all()
        .filter(|&loc| board.is_legal(player, loc))
        .collect()
}
