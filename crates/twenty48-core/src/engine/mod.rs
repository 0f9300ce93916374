//! Engine module: rectangular 2048 grid, orientation primitives, line
//! fusion, the directional move engine, and tile spawning.
//!
//! - `Grid` is the owned rectangular state with useful methods.
//! - Free functions mirror the methods when convenient (e.g., `shift`).
//! - Internals (line fusion, hot ops) live in submodules to keep things tidy.

mod line;
mod ops;
pub mod state;

pub use state::{Grid, Move, EMPTY_CELL};

pub use line::{compact, fuse, fuse_grid};
pub use ops::{
    add_random_tile, can_move, can_play, insert_random_tile, make_move, new_game, orient,
    random_empty_cell, shift,
};
