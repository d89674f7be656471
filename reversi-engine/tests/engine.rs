//! Behavioural tests for the board engine, driven only through the public API.

use reversi_engine::test_utils::{legal_locations, random_playout};
use reversi_engine::{Board, Cell, Counts, Engine, Location, Placement, Player, Rejection};

fn loc(row: usize, col: usize) -> Location {
    Location::from_coords(row, col).unwrap()
}

fn center() -> [(Location, Cell); 4] {
    [
        (loc(3, 3), Cell::White),
        (loc(4, 4), Cell::White),
        (loc(3, 4), Cell::Black),
        (loc(4, 3), Cell::Black),
    ]
}

fn assert_counts_consistent(engine: &Engine) {
    let counts = engine.counts();
    assert_eq!(counts, engine.board().counts());
    assert_eq!(counts.black, engine.board().count(Cell::Black));
    assert_eq!(counts.white, engine.board().count(Cell::White));
    assert_eq!(
        counts.black + counts.white + engine.board().count(Cell::Empty),
        64
    );
}

#[test]
fn initial_state() {
    let engine = Engine::new();
    for &(square, cell) in center().iter() {
        assert_eq!(engine.cell(square), cell);
    }
    let others = Location::all()
        .filter(|l| center().iter().all(|&(c, _)| c != *l))
        .filter(|&l| engine.cell(l) == Cell::Empty)
        .count();
    assert_eq!(others, 60);
    assert_eq!(engine.turn(), Player::Black);
    assert_eq!(engine.counts(), Counts { black: 2, white: 2 });
    assert!(!engine.can_undo());
}

#[test]
fn occupied_targets_are_rejected() {
    let playout = random_playout(3, 20);
    let mut engine = playout.engine;
    let before = engine.clone();
    let occupied: Vec<Location> = Location::all()
        .filter(|&l| engine.cell(l) != Cell::Empty)
        .collect();
    assert!(occupied.len() > 4);
    for square in occupied {
        assert_eq!(
            engine.attempt_place(square),
            Placement::Rejected(Rejection::Occupied)
        );
    }
    assert_eq!(engine, before);
}

#[test]
fn d3_opening() {
    let mut engine = Engine::new();
    assert_eq!(
        engine.attempt_place(loc(2, 3)),
        Placement::Applied { flipped: 1 }
    );
    assert_eq!(engine.cell(loc(3, 3)), Cell::Black);
    assert_eq!(engine.cell(loc(2, 3)), Cell::Black);
    assert_eq!(engine.counts(), Counts { black: 4, white: 1 });
    assert_eq!(engine.turn(), Player::White);
}

#[test]
fn corner_on_opening_is_illegal() {
    let mut engine = Engine::new();
    assert_eq!(
        engine.attempt_place(loc(0, 0)),
        Placement::Rejected(Rejection::NoCapture)
    );
    assert_eq!(engine, Engine::new());
    assert_eq!(engine.history_len(), 0);
}

#[test]
fn undo_restores_previous_state() {
    let mut engine = Engine::new();
    assert!(engine.attempt_place(loc(2, 3)).is_applied());
    let after_first = engine.clone();
    assert!(engine.attempt_place(loc(2, 2)).is_applied());

    assert!(engine.undo());
    assert_eq!(engine.board(), after_first.board());
    assert_eq!(engine.turn(), after_first.turn());
    assert_eq!(engine.counts(), after_first.counts());

    assert!(engine.undo());
    assert_eq!(engine, Engine::new());
    assert!(!engine.undo());
}

#[test]
fn skip_only_changes_turn() {
    let mut engine = random_playout(11, 9).engine;
    let before = engine.clone();

    engine.skip_turn();
    assert_eq!(engine.turn(), !before.turn());
    assert_eq!(engine.board(), before.board());
    assert_eq!(engine.counts(), before.counts());
    assert_eq!(engine.history(), before.history());

    engine.skip_turn();
    assert_eq!(engine, before);
}

#[test]
fn reset_after_play_is_initial_state() {
    for seed in 0..5 {
        let mut engine = random_playout(seed, 40).engine;
        engine.skip_turn();
        engine.reset();
        assert_eq!(engine, Engine::new());
        assert_eq!(engine.counts(), Counts { black: 2, white: 2 });
    }
}

#[test]
fn counts_always_match_board() {
    for seed in 0..10 {
        let playout = random_playout(seed, 64);
        let mut engine = playout.engine;
        assert_counts_consistent(&engine);
        while engine.undo() {
            assert_counts_consistent(&engine);
        }
    }
}

#[test]
fn unwinding_history_reproduces_every_position() {
    for seed in 100..110 {
        let playout = random_playout(seed, 64);
        let mut engine = playout.engine;
        assert_eq!(engine.history(), &playout.before[..]);

        for snapshot in playout.before.iter().rev() {
            assert!(engine.undo());
            assert_eq!(engine.board(), &snapshot.board);
            assert_eq!(engine.turn(), snapshot.turn);
        }
        assert_eq!(engine, Engine::new());
    }
}

#[test]
fn place_then_undo_is_identity() {
    let mut engine = random_playout(42, 17).engine;
    for square in legal_locations(engine.board(), engine.turn()) {
        let before = engine.clone();
        assert!(engine.attempt_place(square).is_applied());
        assert_ne!(engine.board(), before.board());
        assert!(engine.undo());
        assert_eq!(engine, before);
    }
}

#[test]
fn flips_in_several_directions_at_once() {
    let board: Board = "
        ........
        .#.#.#..
        ..OOO...
        .#O.O#..
        ..OOO...
        .#.#.#..
        ........
        ........"
        .parse()
        .unwrap();
    let captures = board.captures(Player::Black, loc(3, 3));
    assert_eq!(captures.len(), 8);

    let mut expected = board;
    for &square in captures.iter() {
        expected[square] = Cell::Black;
    }
    expected[loc(3, 3)] = Cell::Black;
    assert_eq!(expected.counts(), Counts { black: 17, white: 0 });
}

#[test]
fn rejected_moves_do_not_switch_turn() {
    let mut engine = Engine::new();
    for square in Location::all() {
        if !engine.board().is_legal(Player::Black, square) {
            assert!(!engine.attempt_place(square).is_applied());
            assert_eq!(engine.turn(), Player::Black);
        }
    }
    assert_eq!(engine, Engine::new());
}
