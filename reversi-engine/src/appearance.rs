//! How cells and players look on screen.
//!
//! Display data lives in static tables keyed by the [`Cell`] tag, so the enum
//! itself stays a plain value.

use crate::{utils, Board, Cell, Counts, Player};
use std::fmt;

/// Display data for one kind of square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Appearance {
    /// Text glyph drawn on the square. Empty for an empty square.
    pub glyph: &'static str,
    /// Name of the image asset for the square.
    pub image: &'static str,
}

const BLACK: Appearance = Appearance {
    glyph: "●",
    image: "black",
};
const WHITE: Appearance = Appearance {
    glyph: "〇",
    image: "white",
};
const NONE: Appearance = Appearance {
    glyph: "",
    image: "none",
};

pub const NEW_GAME_LABEL: &str = "New game";
pub const SKIP_LABEL: &str = "Skip";
pub const UNDO_LABEL: &str = "Do over";

#[inline]
pub fn appearance(cell: Cell) -> Appearance {
    match cell {
        Cell::Black => BLACK,
        Cell::White => WHITE,
        Cell::Empty => NONE,
    }
}

/// Character set used for text grids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlyphStyle {
    Unicode,
    Ascii,
}

impl Default for GlyphStyle {
    fn default() -> Self {
        Self::Unicode
    }
}

const UNICODE_GRID: [char; 3] = ['·', '●', '〇'];
const ASCII_GRID: [char; 3] = ['.', '#', 'O'];

/// The single character drawn for `cell` in a text grid.
#[inline]
pub fn grid_char(cell: Cell, style: GlyphStyle) -> char {
    let table = match style {
        GlyphStyle::Unicode => &UNICODE_GRID,
        GlyphStyle::Ascii => &ASCII_GRID,
    };
    match cell {
        Cell::Empty => table[0],
        Cell::Black => table[1],
        Cell::White => table[2],
    }
}

pub fn turn_label(player: Player) -> &'static str {
    match player {
        Player::Black => "Black's turn",
        Player::White => "White's turn",
    }
}

pub fn counts_label(counts: Counts) -> String {
    format!("Black: {}  White: {}", counts.black, counts.white)
}

/// Render `board` as a text grid, optionally with `A`-`H` / `1`-`8` labels.
pub fn render_grid(board: &Board, style: GlyphStyle, coordinates: bool) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let chars = board.iter().map(|cell| grid_char(cell, style));
    if coordinates {
        utils::format_grid(chars, &mut out)?;
    } else {
        utils::format_rows(chars, &mut out)?;
    }
    Ok(out)
}
