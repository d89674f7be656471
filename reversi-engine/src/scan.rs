//! Scan-lines: the row, column and two diagonals passing through a square.
//!
//! Capture detection walks each line away from the target in both directions.
//! A direction captures when the nearest piece of the mover's color beyond the
//! immediate neighbour brackets an unbroken run of opponent pieces.

use crate::{Board, Cell, Location, Player, EDGE_LENGTH};
use arrayvec::ArrayVec;

/// The most cells any capture can flip: at most 6 per line, 4 lines.
pub const MAX_CAPTURES: usize = 24;

/// Cells flipped by a single placement.
pub type Captures = ArrayVec<[Location; MAX_CAPTURES]>;

/// The orientation of a [`ScanLine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Left to right along the target's row.
    Row,
    /// Top to bottom along the target's column.
    Column,
    /// Slope +1 on screen: rows increase while columns decrease.
    Rising,
    /// Slope -1 on screen: rows and columns increase together.
    Falling,
}

impl Axis {
    /// The `step`-th square along this axis through `target`, if it is on the board.
    fn nth(self, target: Location, step: i32) -> Option<Location> {
        let row = target.row() as i32;
        let col = target.col() as i32;
        match self {
            Axis::Row => Location::from_signed(row, step),
            Axis::Column => Location::from_signed(step, col),
            Axis::Rising => Location::from_signed(step, row + col - step),
            Axis::Falling => Location::from_signed(step, col - row + step),
        }
    }
}

/// An ordered, maximal line of on-board squares passing through a target square.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanLine {
    axis: Axis,
    cells: ArrayVec<[Location; EDGE_LENGTH]>,
    target: usize,
}

impl ScanLine {
    /// Build the line along `axis` through `target` by walking all 8 positions
    /// of the axis and keeping the ones on the board.
    pub fn through(target: Location, axis: Axis) -> Self {
        let mut cells = ArrayVec::new();
        let mut target_index = 0;

        for step in 0..EDGE_LENGTH as i32 {
            if let Some(loc) = axis.nth(target, step) {
                if loc == target {
                    target_index = cells.len();
                }
                cells.push(loc);
            }
        }

        Self {
            axis,
            cells,
            target: target_index,
        }
    }

    /// All four lines through `target`: row, column, then both diagonals.
    pub fn all_through(target: Location) -> [ScanLine; 4] {
        [
            Self::through(target, Axis::Row),
            Self::through(target, Axis::Column),
            Self::through(target, Axis::Rising),
            Self::through(target, Axis::Falling),
        ]
    }

    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    #[inline]
    pub fn cells(&self) -> &[Location] {
        &self.cells
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Index of the target square within [`ScanLine::cells`].
    #[inline]
    pub fn target_index(&self) -> usize {
        self.target
    }

    /// Squares bracketed between the target and the nearest piece of `player`
    /// towards the start of the line, or an empty slice if nothing is captured.
    pub fn captures_backward(&self, board: &Board, player: Player) -> &[Location] {
        if self.target < 2 {
            return &[];
        }

        let own = Cell::from(player);
        let opponent = Cell::from(!player);
        let bracket = self.cells[..self.target - 1]
            .iter()
            .rposition(|&loc| board[loc] == own);

        match bracket {
            Some(start) => {
                let between = &self.cells[start + 1..self.target];
                if between.iter().all(|&loc| board[loc] == opponent) {
                    between
                } else {
                    &[]
                }
            }
            None => &[],
        }
    }

    /// Squares bracketed between the target and the nearest piece of `player`
    /// towards the end of the line, or an empty slice if nothing is captured.
    pub fn captures_forward(&self, board: &Board, player: Player) -> &[Location] {
        if self.len() - self.target <= 2 {
            return &[];
        }

        let own = Cell::from(player);
        let opponent = Cell::from(!player);
        let search_start = self.target + 2;
        let bracket = self.cells[search_start..]
            .iter()
            .position(|&loc| board[loc] == own)
            .map(|offset| offset + search_start);

        match bracket {
            Some(end) => {
                let between = &self.cells[self.target + 1..end];
                if between.iter().all(|&loc| board[loc] == opponent) {
                    between
                } else {
                    &[]
                }
            }
            None => &[],
        }
    }
}

/// Every square `player` would flip by placing at `target`, over all eight directions.
/// Does not check that `target` is empty.
pub fn find_captures(board: &Board, player: Player, target: Location) -> Captures {
    let mut captures = Captures::new();
    for line in ScanLine::all_through(target).iter() {
        captures.extend(line.captures_backward(board, player).iter().copied());
        captures.extend(line.captures_forward(board, player).iter().copied());
    }
    captures
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(row: usize, col: usize) -> Location {
        Location::from_coords(row, col).unwrap()
    }

    #[test]
    fn row_and_column_are_full_length() {
        let row = ScanLine::through(loc(2, 5), Axis::Row);
        assert_eq!(row.len(), 8);
        assert_eq!(row.target_index(), 5);
        assert!(row.cells().iter().all(|l| l.row() == 2));

        let col = ScanLine::through(loc(2, 5), Axis::Column);
        assert_eq!(col.len(), 8);
        assert_eq!(col.target_index(), 2);
        assert!(col.cells().iter().all(|l| l.col() == 5));
    }

    #[test]
    fn diagonals_are_clipped_to_the_board() {
        let rising = ScanLine::through(loc(1, 2), Axis::Rising);
        assert_eq!(rising.cells(), &[loc(0, 3), loc(1, 2), loc(2, 1), loc(3, 0)]);
        assert_eq!(rising.target_index(), 1);

        let falling = ScanLine::through(loc(1, 2), Axis::Falling);
        assert_eq!(falling.len(), 7);
        assert_eq!(falling.cells()[0], loc(0, 1));
        assert_eq!(falling.target_index(), 1);
    }

    #[test]
    fn corner_diagonal_degenerates_to_one_cell() {
        let line = ScanLine::through(loc(0, 0), Axis::Rising);
        assert_eq!(line.cells(), &[loc(0, 0)]);

        let board = Board::new();
        assert!(line.captures_backward(&board, Player::Black).is_empty());
        assert!(line.captures_forward(&board, Player::Black).is_empty());
    }

    #[test]
    fn forward_capture_on_starting_board() {
        // D3 down the column: D4 is white, D5 is black.
        let line = ScanLine::through(loc(2, 3), Axis::Column);
        let board = Board::new();
        assert_eq!(line.captures_forward(&board, Player::Black), &[loc(3, 3)]);
        assert!(line.captures_backward(&board, Player::Black).is_empty());
    }

    #[test]
    fn adjacent_own_piece_breaks_the_bracket() {
        let mut board = Board::empty();
        board[loc(0, 0)] = Cell::Black;
        board[loc(0, 1)] = Cell::White;
        board[loc(0, 2)] = Cell::Black;
        let line = ScanLine::through(loc(0, 3), Axis::Row);
        assert!(line.captures_backward(&board, Player::Black).is_empty());
    }

    #[test]
    fn gap_breaks_the_bracket() {
        let mut board = Board::empty();
        board[loc(4, 7)] = Cell::White;
        board[loc(4, 5)] = Cell::Black;
        board[loc(4, 4)] = Cell::Black;
        let line = ScanLine::through(loc(4, 3), Axis::Row);
        assert!(line.captures_forward(&board, Player::White).is_empty());
    }

    #[test]
    fn long_run_is_captured_in_order() {
        let mut board = Board::empty();
        board[loc(0, 7)] = Cell::Black;
        for row in 1..7 {
            board[loc(row, 7 - row)] = Cell::White;
        }
        let line = ScanLine::through(loc(7, 0), Axis::Rising);
        assert_eq!(line.target_index(), 7);
        let captured = line.captures_backward(&board, Player::Black);
        assert_eq!(captured.len(), 6);
        assert_eq!(captured[0], loc(1, 6));
        assert_eq!(captured[5], loc(6, 1));
    }

    #[test]
    fn find_captures_collects_every_direction() {
        // White at the centre of a black ring with a black piece beyond each white one.
        let mut board = Board::empty();
        let target = loc(3, 3);
        for &(dr, dc) in &[(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)] {
            let r = 3 + dr;
            let c = 3 + dc;
            board[loc(r as usize, c as usize)] = Cell::White;
            board[loc((r + dr) as usize, (c + dc) as usize)] = Cell::Black;
        }
        assert_eq!(find_captures(&board, Player::Black, target).len(), 8);
        assert!(find_captures(&board, Player::White, target).is_empty());
    }
}
