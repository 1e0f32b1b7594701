use fxhash::FxBuildHasher;
use indexmap::IndexSet;
use log::warn;
use smallvec::SmallVec;

use crate::maze::{Coord, Maze};
use crate::solver::Path;

type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

/// Statistics about the most recent [DfsSolver::solve] call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolveStatistics {
    /// Number of cells in the visited set after the solve.
    pub visited_count: usize,
    /// Length of the final path, 0 when no path was found.
    pub path_length: usize,
    /// Ratio of path length to visited cells, 0.0 when either is empty.
    /// Describes how much of the exploration ended up on the final path.
    pub efficiency: f64,
}

/// One in-progress cell of the exploration: its walkable neighbours and the
/// index of the next one to try.
struct Frame {
    neighbours: SmallVec<[Coord; 4]>,
    next: usize,
}

/// Depth-first maze solver with backtracking. Finds *a* path between the
/// maze's start and end markers, not necessarily a shortest one, and keeps
/// track of every cell it explored along the way.
///
/// The exploration is the classic recursive scheme run on an explicit frame
/// stack, so depth is bounded by heap rather than call stack. Cells that led
/// to a dead end are removed from the path when backtracking but stay in the
/// visited set for the rest of the solve; the end cell is appended to the
/// path without ever entering the visited set. Both are deliberate,
/// observable properties of the algorithm.
///
/// A solver is bound to one [Maze] and can be reused: every [solve](Self::solve)
/// call starts from a cleared visited set and path buffer.
pub struct DfsSolver<'a> {
    maze: &'a Maze,
    visited: FxIndexSet<Coord>,
    path: Path,
}

impl<'a> DfsSolver<'a> {
    pub fn new(maze: &'a Maze) -> DfsSolver<'a> {
        DfsSolver {
            maze,
            visited: FxIndexSet::default(),
            path: Path::new(),
        }
    }

    /// Runs the depth-first exploration from the start marker. Returns the
    /// discovered path, or [None] when the end is not reachable. A maze
    /// without both markers is reported as a failure through a [warn!]
    /// diagnostic rather than an error value.
    pub fn solve(&mut self) -> Option<Path> {
        let (start, end) = match (self.maze.start(), self.maze.end()) {
            (Some(start), Some(end)) => (start, end),
            _ => {
                warn!("maze must have both start (S) and end (E) markers");
                return None;
            }
        };
        self.visited.clear();
        self.path.clear();
        if self.explore(start, end) {
            Some(self.path.clone())
        } else {
            None
        }
    }

    /// The cells explored by the last solve, in visit order.
    pub fn visit_order(&self) -> impl Iterator<Item = Coord> + '_ {
        self.visited.iter().copied()
    }

    /// Statistics for the last [solve](Self::solve) call. On a failed solve
    /// every tentative cell has been backtracked off the path, so the path
    /// length (and with it the efficiency) is 0.
    pub fn statistics(&self) -> SolveStatistics {
        let visited_count = self.visited.len();
        let path_length = self.path.len();
        let efficiency = if visited_count > 0 && path_length > 0 {
            path_length as f64 / visited_count as f64
        } else {
            0.0
        };
        SolveStatistics {
            visited_count,
            path_length,
            efficiency,
        }
    }

    fn frame(&self, coord: Coord) -> Frame {
        Frame {
            neighbours: self.maze.neighbours(coord),
            next: 0,
        }
    }

    fn explore(&mut self, start: Coord, end: Coord) -> bool {
        if start == end {
            self.path.push(start);
            return true;
        }
        self.visited.insert(start);
        self.path.push(start);
        let mut stack = vec![self.frame(start)];
        loop {
            // Take the next untried neighbour of the deepest frame, if any.
            let descend = match stack.last_mut() {
                Some(frame) if frame.next < frame.neighbours.len() => {
                    let next = frame.neighbours[frame.next];
                    frame.next += 1;
                    Some(next)
                }
                Some(_) => None,
                None => return false,
            };
            match descend {
                Some(next) if next == end => {
                    // The end joins the path without entering the visited set.
                    self.path.push(next);
                    return true;
                }
                Some(next) => {
                    if self.visited.contains(&next) {
                        continue;
                    }
                    self.visited.insert(next);
                    self.path.push(next);
                    let frame = self.frame(next);
                    stack.push(frame);
                }
                None => {
                    // Dead end: drop the cell from the path but keep it
                    // visited for the rest of this solve.
                    self.path.pop();
                    stack.pop();
                }
            }
        }
    }
}
