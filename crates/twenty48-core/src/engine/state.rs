use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::ops;

/// Value marking an empty cell.
pub const EMPTY_CELL: u32 = 0;

/// Rendered width of one cell in the bordered console layout.
const CELL_WIDTH: usize = 7;

/// A direction to move/merge tiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All four directions, in the order terminal checks probe them.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];
}

/// Rectangular 2048 grid of tile values; `EMPTY_CELL` (0) marks an empty
/// cell and any positive value is a tile.
///
/// The grid is a value type: every transformation allocates a fresh `Grid`
/// and never aliases the input, so old and new state can be compared with
/// `==` to decide whether a move changed anything. Dimensions are fixed at
/// construction; rows all share the same length, and the grid need not be
/// square.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    pub(crate) rows: Vec<Vec<u32>>,
}

impl Grid {
    /// An all-empty grid of the given dimensions.
    pub fn empty(height: usize, width: usize) -> Self {
        assert!(height > 0 && width > 0, "grid dimensions must be non-zero");
        Grid {
            rows: vec![vec![EMPTY_CELL; width]; height],
        }
    }

    /// Build a grid from explicit rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Self {
        assert!(!rows.is_empty() && !rows[0].is_empty(), "grid must be non-empty");
        let width = rows[0].len();
        assert!(rows.iter().all(|row| row.len() == width), "rows must be rectangular");
        Grid { rows }
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// Borrow the rows of this grid.
    #[inline]
    pub fn rows(&self) -> &[Vec<u32>] {
        &self.rows
    }

    /// Value at `(row, col)`; 0 if the cell is empty.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.rows[row][col]
    }

    /// A copy of this grid with one cell replaced.
    pub fn with_tile(&self, row: usize, col: usize, value: u32) -> Self {
        let mut rows = self.rows.clone();
        rows[row][col] = value;
        Grid { rows }
    }

    /// Transposed copy: row i, column j becomes row j, column i. The output
    /// has swapped dimensions.
    ///
    /// ```
    /// use twenty48_core::engine::Grid;
    /// let g = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]);
    /// let t = g.transpose();
    /// assert_eq!(t.rows(), &[vec![1, 4], vec![2, 5], vec![3, 6]]);
    /// ```
    pub fn transpose(&self) -> Self {
        let rows = (0..self.width())
            .map(|col| self.rows.iter().map(|row| row[col]).collect())
            .collect();
        Grid { rows }
    }

    /// Horizontally mirrored copy: each row reversed left-to-right.
    pub fn mirror(&self) -> Self {
        let rows = self
            .rows
            .iter()
            .map(|row| row.iter().rev().copied().collect())
            .collect();
        Grid { rows }
    }

    /// True if at least one cell is empty.
    pub fn has_empty(&self) -> bool {
        self.rows.iter().flatten().any(|&cell| cell == EMPTY_CELL)
    }

    /// Count the number of empty cells.
    pub fn count_empty(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|&&cell| cell == EMPTY_CELL)
            .count()
    }

    /// Coordinates of every empty cell, row-major.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, &cell)| cell == EMPTY_CELL)
                    .map(move |(c, _)| (r, c))
            })
            .collect()
    }

    /// Return the grid resulting from sliding/merging tiles in `dir`
    /// (no random insert).
    ///
    /// ```
    /// use twenty48_core::engine::{Grid, Move};
    /// let g = Grid::from_rows(vec![vec![2, 2, 0, 0]]);
    /// assert_eq!(g.shift(Move::Left).rows(), &[vec![4, 0, 0, 0]]);
    /// assert_eq!(g.shift(Move::Right).rows(), &[vec![0, 0, 0, 4]]);
    /// ```
    #[inline]
    pub fn shift(&self, dir: Move) -> Self {
        ops::shift(self, dir)
    }

    /// Insert a random 2 (90%) or 4 (10%) tile into a uniformly chosen
    /// empty cell, using the provided RNG.
    ///
    /// Panics if the grid has no empty cell; gate with `has_empty` or
    /// `can_play` first.
    #[inline]
    pub fn with_random_tile<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        ops::add_random_tile(self, rng)
    }

    /// Convenience: like `with_random_tile` but uses thread-local RNG.
    #[inline]
    pub fn with_random_tile_thread(&self) -> Self {
        let mut rng = rand::thread_rng();
        self.with_random_tile(&mut rng)
    }

    /// Perform a move then insert a random tile if the move changed the
    /// grid, using the provided RNG.
    ///
    /// ```
    /// use twenty48_core::engine::{Grid, Move};
    /// use rand::{rngs::StdRng, SeedableRng};
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let g = Grid::from_rows(vec![vec![2, 0, 0, 2], vec![0; 4], vec![0; 4], vec![0; 4]]);
    /// let moved = g.make_move(Move::Left, &mut rng);
    /// assert_ne!(moved, g);
    /// ```
    #[inline]
    pub fn make_move<R: Rng + ?Sized>(&self, direction: Move, rng: &mut R) -> Self {
        ops::make_move(self, direction, rng)
    }

    /// True iff some direction's slide would change the grid.
    #[inline]
    pub fn can_move(&self) -> bool {
        ops::can_move(self)
    }

    /// True while the game is not over: an empty cell exists or a merge is
    /// still possible.
    #[inline]
    pub fn can_play(&self) -> bool {
        ops::can_play(self)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = horizontal_rule(self.width());
        let pad = padding_line(self.width());
        writeln!(f, "{rule}")?;
        for row in &self.rows {
            writeln!(f, "{pad}")?;
            write!(f, "|")?;
            for &cell in row {
                if cell == EMPTY_CELL {
                    write!(f, "{:CELL_WIDTH$}|", "")?;
                } else {
                    write!(f, "{cell:^CELL_WIDTH$}|")?;
                }
            }
            writeln!(f)?;
            writeln!(f, "{pad}")?;
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}

fn horizontal_rule(width: usize) -> String {
    let mut out = String::from("+");
    for _ in 0..width {
        out.push_str(&"-".repeat(CELL_WIDTH));
        out.push('+');
    }
    out
}

fn padding_line(width: usize) -> String {
    let mut out = String::from("|");
    for _ in 0..width {
        out.push_str(&" ".repeat(CELL_WIDTH));
        out.push('|');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_transpose() {
        let g = Grid::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
        let t = g.transpose();
        assert_eq!(t.height(), 2);
        assert_eq!(t.width(), 3);
        assert_eq!(t.rows(), &[vec![1, 3, 5], vec![2, 4, 6]]);
        // Transposition is an involution.
        assert_eq!(t.transpose(), g);
    }

    #[test]
    fn it_mirror() {
        let g = Grid::from_rows(vec![vec![1, 2, 3], vec![0, 4, 0]]);
        assert_eq!(g.mirror().rows(), &[vec![3, 2, 1], vec![0, 4, 0]]);
        assert_eq!(g.mirror().mirror(), g);
    }

    #[test]
    fn it_with_tile_does_not_alias() {
        let g = Grid::empty(2, 2);
        let h = g.with_tile(1, 0, 2);
        assert_eq!(g.get(1, 0), 0);
        assert_eq!(h.get(1, 0), 2);
        assert_ne!(g, h);
    }

    #[test]
    fn it_empty_cells() {
        let g = Grid::from_rows(vec![vec![2, 0], vec![0, 4]]);
        assert_eq!(g.empty_cells(), vec![(0, 1), (1, 0)]);
        assert_eq!(g.count_empty(), 2);
        assert!(g.has_empty());
        let full = Grid::from_rows(vec![vec![2, 4], vec![8, 16]]);
        assert!(!full.has_empty());
        assert!(full.empty_cells().is_empty());
    }

    #[test]
    fn it_display_bordered() {
        let g = Grid::from_rows(vec![vec![2, 0]]);
        let expected = "\
+-------+-------+
|       |       |
|   2   |       |
|       |       |
+-------+-------+
";
        assert_eq!(g.to_string(), expected);
    }

    #[test]
    #[should_panic(expected = "rectangular")]
    fn it_rejects_jagged_rows() {
        let _ = Grid::from_rows(vec![vec![1, 2], vec![3]]);
    }
}
