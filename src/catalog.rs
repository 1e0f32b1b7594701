//! A read-only catalog of example maze layouts of varying difficulty, in the
//! textual form accepted by [Maze::from_str](crate::maze::Maze). Handy for
//! demos, tests and benchmarks.

/// 5x5 maze with a single winding corridor.
pub const SIMPLE: &str = "
    S....
    ####.
    .....
    .####
    ....E";

/// 8x8 maze with multiple dead ends that force backtracking.
pub const MEDIUM: &str = "
    S.#...#.
    ..#.#.#.
    #...#...
    ###.###.
    ........
    .#######
    ........
    ######.E";

/// 10x10 maze with many dead ends, showing off backtracking behaviour.
pub const COMPLEX: &str = "
    S..#....#.
    ##.#.##.#.
    ......#...
    .####.###.
    ....#.....
    ###.#####.
    ..........
    .#########
    ..........
    ########.E";

/// 7x7 maze spiralling from start to end.
pub const SPIRAL: &str = "
    S......
    ######.
    .......
    .######
    .......
    ######.
    ......E";

/// 5x5 maze fully bisected by a wall column: no solution exists.
pub const IMPOSSIBLE: &str = "
    S.#..
    ..#..
    #####
    ..#..
    ..#.E";

/// All example layouts by name.
pub const MAZE_CATALOG: &[(&str, &str)] = &[
    ("simple", SIMPLE),
    ("medium", MEDIUM),
    ("complex", COMPLEX),
    ("spiral", SPIRAL),
    ("impossible", IMPOSSIBLE),
];
