//! The two traversal strategies. [bfs] explores level-by-level and returns a
//! shortest path; [dfs] explores depth-first with backtracking and reports
//! statistics about the exploration. Both produce the same shape of result:
//! an ordered start-to-end coordinate sequence, or [None] when no path
//! exists.

use crate::maze::Coord;

pub mod bfs;
pub mod dfs;

/// An ordered sequence of adjacent walkable coordinates from the start cell
/// to the end cell, both inclusive.
pub type Path = Vec<Coord>;
