//! # maze_pathfinding
//!
//! Maze solving on a 2D grid with two interchangeable traversal strategies:
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search),
//! which guarantees a shortest path, and
//! [depth-first search](https://en.wikipedia.org/wiki/Depth-first_search)
//! with backtracking, which finds *a* path and reports statistics about how
//! much of the grid it explored. Mazes are implicit graphs: cells are nodes
//! and orthogonal adjacency between walkable cells forms the edges.
//!
//! [Maze] validates and owns the marker grid, locates the start and end
//! cells and pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! over the walkable cells so reachability can be answered without a search.
//!
//! ```
//! use maze_pathfinding::{bfs_solve, DfsSolver, Maze};
//!
//! let maze: Maze = "
//!     S..
//!     ###.
//!     ..E"
//!     .parse()
//!     .unwrap();
//!
//! let shortest = bfs_solve(maze.cells(), maze.start().unwrap(), maze.end().unwrap());
//! assert_eq!(shortest.map(|path| path.len()), Some(5));
//!
//! let mut solver = DfsSolver::new(&maze);
//! assert!(solver.solve().is_some());
//! assert!(solver.statistics().visited_count > 0);
//! ```

pub mod catalog;
pub mod maze;
pub mod solver;

pub use crate::maze::{Cell, Coord, Maze, MazeError};
pub use crate::solver::bfs::bfs_solve;
pub use crate::solver::dfs::{DfsSolver, SolveStatistics};
pub use crate::solver::Path;
