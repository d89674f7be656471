//! "Perft" performance test: count the number of leaves at a given depth.
//! Checks the capture rules against known move-tree sizes.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{Board, Cell, Location, Player};

pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Board::new(), Player::default(), depth, false)
}

fn play(board: &Board, player: Player, loc: Location) -> Option<Board> {
    let captures = board.captures(player, loc);
    if captures.is_empty() {
        return None;
    }

    let mut next = *board;
    for &captured in captures.iter() {
        next[captured] = Cell::from(player);
    }
    next[loc] = Cell::from(player);
    Some(next)
}

fn leaves_below(board: Board, player: Player, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let children: Vec<Board> = Location::all()
        .filter_map(|loc| play(&board, player, loc))
        .collect();

    if children.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !player, depth - 1, true);
    }

    children
        .into_iter()
        .map(|child| leaves_below(child, !player, depth - 1, false))
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(5), 1396);
}

#[test]
fn perft_06() {
    assert_eq!(run_perft(6), 8200);
}

#[test]
#[ignore]
fn perft_07() {
    assert_eq!(run_perft(7), 55092);
}

#[test]
#[ignore]
fn perft_08() {
    assert_eq!(run_perft(8), 390216);
}
