//! `reversi-engine` is the rules core of a single-screen Othello game.
//!
//! The crate is split the same way a UI consumes it:
//!
//!  - [`Board`] is a plain 8×8 grid of [`Cell`]s with the scan-line capture
//!    rules. It is `Copy`, so every copy is a full snapshot.
//!  - [`Engine`] owns a board, the active [`Player`], the undo log and the
//!    piece counts, and is the only thing a presentation layer should mutate.
//!  - [`appearance`] maps cells and players to glyphs, image names and labels.
//!    The engine is also exposed to native front-ends through a C FFI in [`ffi`].

pub mod appearance;
pub mod ffi;
pub mod scan;
pub mod test_utils;

mod board;
mod cell;
mod engine;
mod location;
mod utils;

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use location::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
