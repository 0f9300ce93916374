//! Single-line compaction and fusion.
//!
//! Every directional move is first re-oriented (see `ops::orient`) so that
//! sliding a row toward its *end* is the only merge routine the engine
//! needs. `fuse` implements the 2048 rule for one such row: close the
//! gaps, merge equal adjacent tiles at most once each, close the gaps
//! again.

use super::state::{Grid, EMPTY_CELL};

/// Remove gaps: shift every non-empty value toward the end of the line,
/// preserving relative order. Same length, fresh allocation.
pub fn compact(line: &[u32]) -> Vec<u32> {
    let mut out = vec![EMPTY_CELL; line.len()];
    let mut slot = line.len();
    for &value in line.iter().rev() {
        if value != EMPTY_CELL {
            slot -= 1;
            out[slot] = value;
        }
    }
    out
}

/// Slide a line toward its end, merging equal adjacent pairs.
///
/// The scan runs from the last index toward the first so the pair nearest
/// the move edge merges first. After each merge the line is re-compacted
/// immediately; the doubled tile sits at the scan index, which the loop has
/// already passed, so no tile ever merges twice in one call.
pub fn fuse(line: &[u32]) -> Vec<u32> {
    let mut line = compact(line);
    for idx in (1..line.len()).rev() {
        if line[idx] != EMPTY_CELL && line[idx] == line[idx - 1] {
            line[idx] *= 2;
            line[idx - 1] = EMPTY_CELL;
            line = compact(&line);
        }
    }
    line
}

/// Apply `fuse` to every row of the grid.
pub fn fuse_grid(grid: &Grid) -> Grid {
    Grid {
        rows: grid.rows.iter().map(|row| fuse(row)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_compact() {
        assert_eq!(compact(&[0, 0, 0, 0]), vec![0, 0, 0, 0]);
        assert_eq!(compact(&[0, 2, 0, 4]), vec![0, 0, 2, 4]);
        assert_eq!(compact(&[2, 0, 0, 4]), vec![0, 0, 2, 4]);
        assert_eq!(compact(&[2, 4, 8, 16]), vec![2, 4, 8, 16]);
        assert_eq!(compact(&[4, 0, 2]), vec![0, 4, 2]);
        assert_eq!(compact(&[]), Vec::<u32>::new());
    }

    #[test]
    fn it_fuse_simple_pairs() {
        assert_eq!(fuse(&[0, 0, 0, 0]), vec![0, 0, 0, 0]);
        assert_eq!(fuse(&[0, 0, 2, 2]), vec![0, 0, 0, 4]);
        assert_eq!(fuse(&[2, 0, 0, 2]), vec![0, 0, 0, 4]);
        assert_eq!(fuse(&[2, 4, 2, 4]), vec![2, 4, 2, 4]);
        assert_eq!(fuse(&[4, 0, 2, 0]), vec![0, 0, 4, 2]);
    }

    #[test]
    fn it_fuse_merges_each_tile_once() {
        // Three equal tiles: exactly one merge, nearest the move edge.
        assert_eq!(fuse(&[0, 2, 2, 2]), vec![0, 0, 2, 4]);
        // Four equal tiles: two independent merges, no cascade into an 8.
        assert_eq!(fuse(&[2, 2, 2, 2]), vec![0, 0, 4, 4]);
        // A freshly doubled tile never merges again in the same call.
        assert_eq!(fuse(&[4, 2, 2, 0]), vec![0, 0, 4, 4]);
        assert_eq!(fuse(&[2, 2, 4, 8]), vec![0, 4, 4, 8]);
    }

    #[test]
    fn it_fuse_non_four_lengths() {
        assert_eq!(fuse(&[2, 2]), vec![0, 4]);
        assert_eq!(fuse(&[4]), vec![4]);
        assert_eq!(fuse(&[4, 4, 4, 2, 2]), vec![0, 0, 4, 8, 4]);
    }

    #[test]
    fn it_fuse_grid_per_row() {
        let g = Grid::from_rows(vec![vec![2, 2, 0, 0], vec![0, 4, 0, 4]]);
        let fused = fuse_grid(&g);
        assert_eq!(fused.rows(), &[vec![0, 0, 0, 4], vec![0, 0, 0, 8]]);
        // Input grid untouched.
        assert_eq!(g.rows(), &[vec![2, 2, 0, 0], vec![0, 4, 0, 4]]);
    }
}
