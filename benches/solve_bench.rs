use criterion::{criterion_group, criterion_main, Criterion};
use maze_pathfinding::{bfs_solve, catalog, DfsSolver, Maze};
use std::hint::black_box;

fn catalog_bench(c: &mut Criterion) {
    for (name, layout) in catalog::MAZE_CATALOG {
        let maze: Maze = layout.parse().unwrap();
        let (start, end) = (maze.start().unwrap(), maze.end().unwrap());

        c.bench_function(format!("bfs {name}").as_str(), |b| {
            b.iter(|| black_box(bfs_solve(maze.cells(), start, end)))
        });
        c.bench_function(format!("dfs {name}").as_str(), |b| {
            let mut solver = DfsSolver::new(&maze);
            b.iter(|| black_box(solver.solve()))
        });
    }
}

criterion_group!(benches, catalog_bench);
criterion_main!(benches);
