//! The stateful game a presentation layer drives.
//!
//! [`Engine`] owns the board, the player to move, the undo log and the cached
//! piece counts. Every mutation either commits fully or leaves all four untouched.

use crate::{Board, Cell, Counts, Location, Player};
use tracing::{debug, trace};

/// Why a placement had no effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The target square already holds a piece.
    Occupied,
    /// No line through the target brackets any opponent pieces.
    NoCapture,
}

/// The result of [`Engine::attempt_place`].
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Applied { flipped: u8 },
    Rejected(Rejection),
}

impl Placement {
    #[inline]
    pub fn is_applied(self) -> bool {
        matches!(self, Placement::Applied { .. })
    }
}

/// A board as it stood before a move, and who made that move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub turn: Player,
}

/// Everything a renderer needs after each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct View {
    pub board: Board,
    pub turn: Player,
    pub counts: Counts,
    pub can_undo: bool,
}

/// An Othello game in progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Engine {
    board: Board,
    turn: Player,
    log: Vec<Snapshot>,
    counts: Counts,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// A new game at the starting position with black to move.
    pub fn new() -> Self {
        let board = Board::new();
        Self {
            board,
            turn: Player::default(),
            log: Vec::new(),
            counts: board.counts(),
        }
    }

    /// Start over: starting position, black to move, empty undo log.
    pub fn reset(&mut self) {
        debug!(discarded = self.log.len(), "reset");
        self.board = Board::new();
        self.turn = Player::default();
        self.log.clear();
        self.refresh_counts();
    }

    /// Pass the turn to the other player without touching the board.
    pub fn skip_turn(&mut self) {
        let next = !self.turn;
        debug!(from = %self.turn, to = %next, "skip turn");
        self.turn = next;
    }

    /// Take back the most recent placement.
    /// Returns false (and does nothing) if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.log.pop() {
            Some(snapshot) => {
                self.board = snapshot.board;
                self.turn = snapshot.turn;
                self.refresh_counts();
                debug!(turn = %self.turn, remaining = self.log.len(), "undo");
                true
            }
            None => {
                trace!("undo with empty log");
                false
            }
        }
    }

    /// Place a piece for the player to move at `loc`, flipping every bracketed line.
    /// Illegal placements change nothing.
    pub fn attempt_place(&mut self, loc: Location) -> Placement {
        if self.board[loc] != Cell::Empty {
            trace!(%loc, "rejected: occupied");
            return Placement::Rejected(Rejection::Occupied);
        }

        let captures = self.board.captures(self.turn, loc);
        if captures.is_empty() {
            trace!(%loc, player = %self.turn, "rejected: no capture");
            return Placement::Rejected(Rejection::NoCapture);
        }

        self.log.push(Snapshot {
            board: self.board,
            turn: self.turn,
        });

        let piece = Cell::from(self.turn);
        for &captured in captures.iter() {
            self.board[captured] = piece;
        }
        self.board[loc] = piece;

        let flipped = captures.len() as u8;
        debug!(%loc, player = %self.turn, flipped, "placed");

        self.turn = !self.turn;
        self.refresh_counts();
        Placement::Applied { flipped }
    }

    fn refresh_counts(&mut self) {
        self.counts = self.board.counts();
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn cell(&self, loc: Location) -> Cell {
        self.board[loc]
    }

    /// The player to move.
    #[inline]
    pub fn turn(&self) -> Player {
        self.turn
    }

    #[inline]
    pub fn counts(&self) -> Counts {
        self.counts
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.log.is_empty()
    }

    /// Number of placements that can be undone.
    #[inline]
    pub fn history_len(&self) -> usize {
        self.log.len()
    }

    /// The recorded snapshots, oldest first.
    #[inline]
    pub fn history(&self) -> &[Snapshot] {
        &self.log
    }

    pub fn view(&self) -> View {
        View {
            board: self.board,
            turn: self.turn,
            counts: self.counts,
            can_undo: self.can_undo(),
        }
    }
}
