//! The 8×8 grid and the capture rules that read it.
//!
//! A [`Board`] is a fixed row-major array of [`Cell`]s. It is `Copy`, so the
//! undo log in [`crate::Engine`] stores whole boards by value.

use crate::scan::{self, Captures};
use crate::{utils, Cell, Location, Player, EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt;
use std::ops::{Index, IndexMut};

/// A fully populated Othello board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; EDGE_LENGTH]; EDGE_LENGTH],
}

/// Piece totals for both colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Counts {
    pub black: u8,
    pub white: u8,
}

impl Counts {
    /// Number of empty squares.
    #[inline]
    pub fn empty(self) -> u8 {
        NUM_SPACES as u8 - self.black - self.white
    }

    /// Pieces held by `player`.
    #[inline]
    pub fn of(self, player: Player) -> u8 {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }
}

impl Default for Board {
    /// Gets the starting position.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The starting position: white on the main diagonal of the centre square,
    /// black on the anti-diagonal.
    pub const fn new() -> Self {
        let mut cells = [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH];
        cells[3][3] = Cell::White;
        cells[4][4] = Cell::White;
        cells[3][4] = Cell::Black;
        cells[4][3] = Cell::Black;
        Self { cells }
    }

    /// A board with no pieces.
    pub const fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH],
        }
    }

    /// Iterate over every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; EDGE_LENGTH]> + '_ {
        self.cells.iter()
    }

    /// Count the squares holding `cell`.
    pub fn count(&self, cell: Cell) -> u8 {
        self.iter().filter(|&c| c == cell).count() as u8
    }

    /// Count both colors with a full scan of the board.
    pub fn counts(&self) -> Counts {
        self.iter().fold(Counts::default(), |mut counts, cell| {
            match cell {
                Cell::Black => counts.black += 1,
                Cell::White => counts.white += 1,
                Cell::Empty => {}
            }
            counts
        })
    }

    /// The squares `player` would flip by placing at `loc`.
    /// Empty if `loc` is occupied or the placement captures nothing.
    pub fn captures(&self, player: Player, loc: Location) -> Captures {
        if !self[loc].is_empty() {
            return Captures::new();
        }
        scan::find_captures(self, player, loc)
    }

    /// Whether `player` may place at `loc`.
    #[inline]
    pub fn is_legal(&self, player: Player, loc: Location) -> bool {
        !self.captures(player, loc).is_empty()
    }
}

impl Index<Location> for Board {
    type Output = Cell;

    #[inline]
    fn index(&self, loc: Location) -> &Cell {
        &self.cells[loc.row()][loc.col()]
    }
}

impl IndexMut<Location> for Board {
    #[inline]
    fn index_mut(&mut self, loc: Location) -> &mut Cell {
        &mut self.cells[loc.row()][loc.col()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(
            self.iter().map(|cell| match cell {
                Cell::Empty => '.',
                Cell::Black => '#',
                Cell::White => 'O',
            }),
            f,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    #[display(fmt = "unrecognized board character")]
    InvalidCharacter,
    #[display(fmt = "expected exactly 64 squares")]
    WrongLength,
}

/// Parse a board from 64 square characters in row-major order.
/// `#`, `X` or `B` is black; `O` or `W` is white; `.` or `-` is empty. Whitespace is ignored.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::empty();
        let mut squares = Location::all();

        for ch in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match ch.to_ascii_uppercase() {
                '#' | 'X' | 'B' => Cell::Black,
                'O' | 'W' => Cell::White,
                '.' | '-' => Cell::Empty,
                _ => return Err(ParseBoardError::InvalidCharacter),
            };
            let loc = squares.next().ok_or(ParseBoardError::WrongLength)?;
            board[loc] = cell;
        }

        match squares.next() {
            None => Ok(board),
            Some(_) => Err(ParseBoardError::WrongLength),
        }
    }
}
