//! C bindings for native front-ends.
//!
//! A front-end owns one heap-allocated [`Engine`] through an opaque pointer,
//! forwards taps as (row, col) and reads back an [`FfiView`] after every call.
//! Null handles are accepted everywhere and treated as a rejected call.

use crate::{Cell, Engine, Location, Placement, Rejection, NUM_SPACES};

pub const CELL_EMPTY: u8 = 0;
pub const CELL_BLACK: u8 = 1;
pub const CELL_WHITE: u8 = 2;

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementCode {
    Applied = 0,
    Occupied = 1,
    NoCapture = 2,
    Invalid = 3,
}

impl From<Placement> for PlacementCode {
    fn from(placement: Placement) -> Self {
        match placement {
            Placement::Applied { .. } => PlacementCode::Applied,
            Placement::Rejected(Rejection::Occupied) => PlacementCode::Occupied,
            Placement::Rejected(Rejection::NoCapture) => PlacementCode::NoCapture,
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FfiView {
    /// Row-major cell codes.
    pub cells: [u8; NUM_SPACES],
    /// The player to move, as a cell code.
    pub turn: u8,
    pub black_count: u8,
    pub white_count: u8,
    pub can_undo: bool,
}

fn cell_code(cell: Cell) -> u8 {
    match cell {
        Cell::Empty => CELL_EMPTY,
        Cell::Black => CELL_BLACK,
        Cell::White => CELL_WHITE,
    }
}

fn view_of(engine: &Engine) -> FfiView {
    let view = engine.view();
    let mut cells = [CELL_EMPTY; NUM_SPACES];
    for (code, cell) in cells.iter_mut().zip(view.board.iter()) {
        *code = cell_code(cell);
    }
    FfiView {
        cells,
        turn: cell_code(Cell::from(view.turn)),
        black_count: view.counts.black,
        white_count: view.counts.white,
        can_undo: view.can_undo,
    }
}

#[no_mangle]
pub extern "C" fn reversi_engine_new() -> *mut Engine {
    Box::into_raw(Box::new(Engine::new()))
}

/// # Safety
/// `engine` must be null or a pointer returned by [`reversi_engine_new`] that
/// has not already been freed.
#[no_mangle]
pub unsafe extern "C" fn reversi_engine_free(engine: *mut Engine) {
    if !engine.is_null() {
        drop(Box::from_raw(engine));
    }
}

/// # Safety
/// `engine` must be null or a live pointer from [`reversi_engine_new`].
#[no_mangle]
pub unsafe extern "C" fn reversi_engine_reset(engine: *mut Engine) {
    if let Some(engine) = engine.as_mut() {
        engine.reset();
    }
}

/// # Safety
/// `engine` must be null or a live pointer from [`reversi_engine_new`].
#[no_mangle]
pub unsafe extern "C" fn reversi_engine_skip_turn(engine: *mut Engine) {
    if let Some(engine) = engine.as_mut() {
        engine.skip_turn();
    }
}

/// # Safety
/// `engine` must be null or a live pointer from [`reversi_engine_new`].
#[no_mangle]
pub unsafe extern "C" fn reversi_engine_undo(engine: *mut Engine) -> bool {
    match engine.as_mut() {
        Some(engine) => engine.undo(),
        None => false,
    }
}

/// # Safety
/// `engine` must be null or a live pointer from [`reversi_engine_new`].
#[no_mangle]
pub unsafe extern "C" fn reversi_engine_attempt_place(
    engine: *mut Engine,
    row: u8,
    col: u8,
) -> PlacementCode {
    let engine = match engine.as_mut() {
        Some(engine) => engine,
        None => return PlacementCode::Invalid,
    };
    match Location::from_coords(row as usize, col as usize) {
        Some(loc) => engine.attempt_place(loc).into(),
        None => PlacementCode::Invalid,
    }
}

/// Cell code at (row, col), or [`CELL_EMPTY`] for a null handle or off-board square.
///
/// # Safety
/// `engine` must be null or a live pointer from [`reversi_engine_new`].
#[no_mangle]
pub unsafe extern "C" fn reversi_engine_cell(engine: *const Engine, row: u8, col: u8) -> u8 {
    let engine = match engine.as_ref() {
        Some(engine) => engine,
        None => return CELL_EMPTY,
    };
    Location::from_coords(row as usize, col as usize)
        .map(|loc| cell_code(engine.cell(loc)))
        .unwrap_or(CELL_EMPTY)
}

/// Snapshot of everything a renderer draws. A null handle yields the starting position.
///
/// # Safety
/// `engine` must be null or a live pointer from [`reversi_engine_new`].
#[no_mangle]
pub unsafe extern "C" fn reversi_engine_view(engine: *const Engine) -> FfiView {
    match engine.as_ref() {
        Some(engine) => view_of(engine),
        None => view_of(&Engine::new()),
    }
}
