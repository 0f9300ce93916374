use rand::Rng;

use super::line;
use super::state::{Grid, Move};

/// Re-orient `grid` so the requested move becomes the canonical slide
/// toward the end of each row.
///
/// One merge routine (`line::fuse`) then covers all four directions
/// instead of four hand-written variants. The match is exhaustive on
/// purpose; no dispatch table.
pub fn orient(grid: &Grid, direction: Move) -> Grid {
    match direction {
        Move::Left => grid.mirror(),
        Move::Right => grid.clone(),
        Move::Up => grid.transpose().mirror(),
        Move::Down => grid.transpose(),
    }
}

/// Slide/merge tiles in the given direction. No randomness.
///
/// Orients the grid, fuses every row, then maps back to the original
/// frame. Mirror and transpose are involutions, so Left/Right/Down are
/// undone by reapplying `orient`; Up composes both and its inverse is the
/// reversed composition, transpose after mirror.
pub fn shift(grid: &Grid, direction: Move) -> Grid {
    let fused = line::fuse_grid(&orient(grid, direction));
    match direction {
        Move::Left => fused.mirror(),
        Move::Right => fused,
        Move::Up => fused.mirror().transpose(),
        Move::Down => fused.transpose(),
    }
}

/// True iff at least one direction's slide changes the grid. Used only to
/// detect the terminal state, never to pre-filter player input.
pub fn can_move(grid: &Grid) -> bool {
    Move::ALL
        .iter()
        .any(|&direction| shift(grid, direction) != *grid)
}

/// True while the game is not over: an empty cell exists or some merge is
/// still possible.
pub fn can_play(grid: &Grid) -> bool {
    grid.has_empty() || can_move(grid)
}

/// Pick a uniformly random empty cell.
///
/// Panics if the grid is full; callers gate spawning on `has_empty` /
/// `can_play`, so a full grid here is a logic error.
pub fn random_empty_cell<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> (usize, usize) {
    let empty = grid.empty_cells();
    assert!(!empty.is_empty(), "no empty cell left to spawn into");
    empty[rng.gen_range(0..empty.len())]
}

/// Weighted tile draw: 2 with probability 0.9, 4 with probability 0.1.
fn spawn_value<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    if rng.gen_range(0..10) < 9 {
        2
    } else {
        4
    }
}

/// A copy of `grid` with one spawned tile in a random empty cell.
pub fn add_random_tile<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Grid {
    let (row, col) = random_empty_cell(grid, rng);
    let value = spawn_value(rng);
    grid.with_tile(row, col, value)
}

/// Insert a random tile using the thread-local RNG.
///
/// For reproducible behavior, prefer `add_random_tile` with a seeded RNG.
pub fn insert_random_tile(grid: &Grid) -> Grid {
    grid.with_random_tile_thread()
}

/// Perform a move then insert a random tile if the move changed the grid,
/// using the provided RNG.
pub fn make_move<R: Rng + ?Sized>(grid: &Grid, direction: Move, rng: &mut R) -> Grid {
    let moved = shift(grid, direction);
    if moved != *grid {
        add_random_tile(&moved, rng)
    } else {
        moved
    }
}

/// Seed a fresh game grid.
///
/// Places a first spawned tile, then with probability 0.5 a second tile in
/// a different cell. When the first tile came up 4 the second is forced to
/// 2; otherwise it is drawn independently. The asymmetry is intentional
/// and keeps an opening double-4 off the board.
pub fn new_game<R: Rng + ?Sized>(height: usize, width: usize, rng: &mut R) -> Grid {
    let grid = Grid::empty(height, width);
    let (row, col) = random_empty_cell(&grid, rng);
    let first = spawn_value(rng);
    let grid = grid.with_tile(row, col, first);
    if rng.gen_bool(0.5) && grid.has_empty() {
        let (row2, col2) = random_empty_cell(&grid, rng);
        let second = if first == 4 { 2 } else { spawn_value(rng) };
        grid.with_tile(row2, col2, second)
    } else {
        grid
    }
}
