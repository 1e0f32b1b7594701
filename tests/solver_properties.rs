//! Fuzzes both solvers by checking for many random grids that the results
//! agree with an independent flood-fill oracle and with the connected
//! components pre-computed by the maze itself.

use std::collections::VecDeque;

use maze_pathfinding::{bfs_solve, Cell, Coord, DfsSolver, Maze};
use rand::prelude::*;

fn random_maze(n: usize, rng: &mut StdRng) -> Maze {
    let mut cells: Vec<Vec<Cell>> = (0..n)
        .map(|_| {
            (0..n)
                .map(|_| {
                    if rng.gen_bool(0.4) {
                        Cell::Wall
                    } else {
                        Cell::Open
                    }
                })
                .collect()
        })
        .collect();
    cells[0][0] = Cell::Start;
    cells[n - 1][n - 1] = Cell::End;
    Maze::new(cells).unwrap()
}

/// Plain level-by-level distance computation, kept independent of the solver
/// under test.
fn reference_distance(maze: &Maze, start: Coord, end: Coord) -> Option<usize> {
    let mut distance = vec![vec![None; maze.cols()]; maze.rows()];
    distance[start.row][start.col] = Some(0usize);
    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        let d = distance[current.row][current.col].unwrap();
        if current == end {
            return Some(d);
        }
        for next in maze.neighbours(current) {
            if distance[next.row][next.col].is_none() {
                distance[next.row][next.col] = Some(d + 1);
                queue.push_back(next);
            }
        }
    }
    None
}

fn is_valid_path(maze: &Maze, path: &[Coord], start: Coord, end: Coord) -> bool {
    if path.first() != Some(&start) || path.last() != Some(&end) {
        return false;
    }
    if !path.iter().all(|c| maze.is_walkable(c.row, c.col)) {
        return false;
    }
    path.windows(2).all(|pair| {
        let (a, b) = (pair[0], pair[1]);
        a.row.abs_diff(b.row) + a.col.abs_diff(b.col) == 1
    })
}

#[test]
fn fuzz_bfs_matches_reference_distance() {
    const N: usize = 8;
    const N_GRIDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_GRIDS {
        let maze = random_maze(N, &mut rng);
        let (start, end) = (maze.start().unwrap(), maze.end().unwrap());
        let path = bfs_solve(maze.cells(), start, end);
        let distance = reference_distance(&maze, start, end);
        match (&path, distance) {
            (Some(path), Some(distance)) => {
                assert!(is_valid_path(&maze, path, start, end), "{}", maze.render(Some(path)));
                assert_eq!(path.len(), distance + 1, "{maze}");
            }
            (None, None) => {}
            _ => panic!(
                "solver and oracle disagree (path: {path:?}, distance: {distance:?})\n{maze}"
            ),
        }
    }
}

#[test]
fn fuzz_bfs_agrees_with_components() {
    const N: usize = 8;
    const N_GRIDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_GRIDS {
        let maze = random_maze(N, &mut rng);
        let (start, end) = (maze.start().unwrap(), maze.end().unwrap());
        let reachable = maze.reachable(start, end);
        let path = bfs_solve(maze.cells(), start, end);
        // Show the grid if the component structure and the search disagree
        if path.is_some() != reachable {
            println!("{maze}");
        }
        assert_eq!(path.is_some(), reachable);
    }
}

#[test]
fn fuzz_dfs_finds_valid_paths_exactly_when_reachable() {
    const N: usize = 8;
    const N_GRIDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..N_GRIDS {
        let maze = random_maze(N, &mut rng);
        let (start, end) = (maze.start().unwrap(), maze.end().unwrap());
        let mut solver = DfsSolver::new(&maze);
        let path = solver.solve();
        assert_eq!(path.is_some(), maze.reachable(start, end), "{maze}");
        let stats = solver.statistics();
        match path {
            Some(path) => {
                assert!(is_valid_path(&maze, &path, start, end), "{}", maze.render(Some(&path)));
                assert_eq!(stats.path_length, path.len());
                // Every path cell except the end marker is in the visited set.
                assert!(stats.visited_count + 1 >= stats.path_length);
                assert!(stats.efficiency > 0.0);
                assert_eq!(
                    stats.efficiency,
                    stats.path_length as f64 / stats.visited_count as f64
                );
            }
            None => {
                assert_eq!(stats.path_length, 0);
                assert_eq!(stats.efficiency, 0.0);
                assert!(stats.visited_count > 0);
            }
        }
    }
}

#[test]
fn fuzz_dfs_path_never_shorter_than_bfs() {
    const N: usize = 8;
    const N_GRIDS: usize = 500;
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..N_GRIDS {
        let maze = random_maze(N, &mut rng);
        let (start, end) = (maze.start().unwrap(), maze.end().unwrap());
        let mut solver = DfsSolver::new(&maze);
        if let (Some(shortest), Some(dfs_path)) =
            (bfs_solve(maze.cells(), start, end), solver.solve())
        {
            assert!(shortest.len() <= dfs_path.len(), "{maze}");
        }
    }
}

#[test]
fn fuzz_dfs_resolves_identically() {
    const N: usize = 6;
    const N_GRIDS: usize = 200;
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..N_GRIDS {
        let maze = random_maze(N, &mut rng);
        let mut solver = DfsSolver::new(&maze);
        let first = solver.solve();
        let first_stats = solver.statistics();
        assert_eq!(first, solver.solve());
        assert_eq!(first_stats, solver.statistics());
    }
}
