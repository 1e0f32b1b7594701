use std::collections::VecDeque;

use grid_util::grid::{BoolGrid, Grid};
use log::info;

use crate::maze::{Cell, Coord};
use crate::solver::Path;

/// Movement offsets in the fixed exploration order: down, up, right, left.
/// The order has no effect on the length of the returned path, only on which
/// of several equally short paths is found.
const MOVE_OFFSETS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

fn open(grid: &[Vec<Cell>], row: usize, col: usize) -> bool {
    grid.get(row)
        .and_then(|r| r.get(col))
        .map_or(false, |cell| cell.is_walkable())
}

/// Finds a shortest path (fewest cells) from `start` to `end` in a
/// rectangular marker grid using breadth-first search, or [None] when the
/// end is not reachable. Out-of-bounds or wall endpoints are treated as
/// unreachable rather than an error.
///
/// Each queue entry carries the full path taken to reach it, trading memory
/// for simplicity over predecessor links. Cells are marked visited when
/// enqueued, so every cell is enqueued at most once and the whole search is
/// O(rows * cols). Since the queue is processed in non-decreasing distance
/// from `start`, the first dequeue of `end` is guaranteed to hold a shortest
/// path.
pub fn bfs_solve(grid: &[Vec<Cell>], start: Coord, end: Coord) -> Option<Path> {
    let rows = grid.len();
    let cols = grid.first().map_or(0, Vec::len);
    if !open(grid, start.row, start.col) || !open(grid, end.row, end.col) {
        info!("start {} or end {} is blocked or out of bounds", start, end);
        return None;
    }

    let mut visited = BoolGrid::new(cols, rows, false);
    visited.set(start.col, start.row, true);
    let mut queue: VecDeque<(Coord, Path)> = VecDeque::new();
    queue.push_back((start, vec![start]));

    while let Some((current, path)) = queue.pop_front() {
        if current == end {
            return Some(path);
        }
        for (d_row, d_col) in MOVE_OFFSETS {
            let row = current.row as isize + d_row;
            let col = current.col as isize + d_col;
            if row < 0 || col < 0 {
                continue;
            }
            let (row, col) = (row as usize, col as usize);
            if row < rows && col < cols && !visited.get(col, row) && open(grid, row, col) {
                visited.set(col, row, true);
                let next = Coord::new(row, col);
                let mut next_path = path.clone();
                next_path.push(next);
                queue.push_back((next, next_path));
            }
        }
    }
    None
}
