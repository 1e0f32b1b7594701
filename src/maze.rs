use core::fmt;
use std::str::FromStr;

use fxhash::FxHashSet;
use itertools::Itertools;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;
use thiserror::Error;

/// One grid position, unifying the numeric (0/1) and character ('S'/'E')
/// marker conventions into a single tagged type consumed by both solvers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Open,
    Wall,
    Start,
    End,
}

impl Cell {
    /// Everything except a [Cell::Wall] can be stepped on, including the
    /// start and end markers.
    pub fn is_walkable(self) -> bool {
        self != Cell::Wall
    }

    /// Parses a single layout character (`.`, `#`, `S` or `E`).
    pub fn from_char(marker: char) -> Option<Cell> {
        match marker {
            '.' => Some(Cell::Open),
            '#' => Some(Cell::Wall),
            'S' => Some(Cell::Start),
            'E' => Some(Cell::End),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Open => '.',
            Cell::Wall => '#',
            Cell::Start => 'S',
            Cell::End => 'E',
        }
    }
}

/// A `(row, col)` grid coordinate, 0-indexed from the top-left corner.
/// Plain value type, hashable for use in visited sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    #[error("row {row} has length {found}, expected {expected}")]
    MalformedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown marker {marker:?} at ({row}, {col})")]
    UnknownMarker {
        marker: char,
        row: usize,
        col: usize,
    },
}

/// Neighbour enumeration order: up, right, down, left. This order is part of
/// the observable contract since it decides DFS tie-breaking.
const NEIGHBOUR_OFFSETS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// [Maze] owns the raw [Cell] grid together with the start/end locations
/// found by a single construction-time scan and a [UnionFind] of connected
/// components over the walkable cells. The grid is rectangular by
/// construction and read-only for its entire lifetime, so the components are
/// generated once and never go stale.
#[derive(Clone, Debug)]
pub struct Maze {
    cells: Vec<Vec<Cell>>,
    rows: usize,
    cols: usize,
    start: Option<Coord>,
    end: Option<Coord>,
    components: UnionFind<usize>,
}

impl PartialEq for Maze {
    /// [UnionFind] has no [PartialEq] impl, so compare its labeling instead.
    fn eq(&self, other: &Maze) -> bool {
        self.cells == other.cells
            && self.rows == other.rows
            && self.cols == other.cols
            && self.start == other.start
            && self.end == other.end
            && self.components.clone().into_labeling() == other.components.clone().into_labeling()
    }
}

impl Maze {
    /// Builds a maze from a caller-supplied grid. Fails with
    /// [MazeError::MalformedGrid] if the rows do not share one column count.
    /// When duplicate start or end markers exist, the first in row-major
    /// order wins.
    pub fn new(cells: Vec<Vec<Cell>>) -> Result<Maze, MazeError> {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);
        for (row, row_cells) in cells.iter().enumerate() {
            if row_cells.len() != cols {
                return Err(MazeError::MalformedGrid {
                    row,
                    expected: cols,
                    found: row_cells.len(),
                });
            }
        }
        let mut start = None;
        let mut end = None;
        for (row, col) in (0..rows).cartesian_product(0..cols) {
            match cells[row][col] {
                Cell::Start if start.is_none() => start = Some(Coord::new(row, col)),
                Cell::End if end.is_none() => end = Some(Coord::new(row, col)),
                _ => {}
            }
        }
        let mut maze = Maze {
            cells,
            rows,
            cols,
            start,
            end,
            components: UnionFind::new(rows * cols),
        };
        maze.generate_components();
        Ok(maze)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The raw marker grid, row-major.
    pub fn cells(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Location of the [Cell::Start] marker, if the grid has one.
    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    /// Location of the [Cell::End] marker, if the grid has one.
    pub fn end(&self) -> Option<Coord> {
        self.end
    }

    /// True iff `(row, col)` is in bounds and not a wall.
    pub fn is_walkable(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[row][col].is_walkable()
    }

    /// The walkable orthogonal neighbours of `coord` in the fixed
    /// up, right, down, left order.
    pub fn neighbours(&self, coord: Coord) -> SmallVec<[Coord; 4]> {
        let mut neighbours = SmallVec::new();
        for (d_row, d_col) in NEIGHBOUR_OFFSETS {
            let row = coord.row as isize + d_row;
            let col = coord.col as isize + d_col;
            if row >= 0 && col >= 0 && self.is_walkable(row as usize, col as usize) {
                neighbours.push(Coord::new(row as usize, col as usize));
            }
        }
        neighbours
    }

    fn get_ix(&self, coord: Coord) -> usize {
        coord.row * self.cols + coord.col
    }

    /// Links up walkable grid neighbours to the same components.
    fn generate_components(&mut self) {
        for (row, col) in (0..self.rows).cartesian_product(0..self.cols) {
            if !self.cells[row][col].is_walkable() {
                continue;
            }
            let parent_ix = self.get_ix(Coord::new(row, col));
            if self.is_walkable(row + 1, col) {
                self.components
                    .union(parent_ix, self.get_ix(Coord::new(row + 1, col)));
            }
            if self.is_walkable(row, col + 1) {
                self.components
                    .union(parent_ix, self.get_ix(Coord::new(row, col + 1)));
            }
        }
    }

    /// Retrieves the component id a given [Coord] belongs to.
    pub fn get_component(&self, coord: Coord) -> Option<usize> {
        if coord.row < self.rows && coord.col < self.cols {
            Some(self.components.find(self.get_ix(coord)))
        } else {
            None
        }
    }

    /// Checks if two walkable cells are on the same connected component,
    /// i.e. whether any sequence of orthogonal moves links them. Out of
    /// bounds or wall endpoints are never reachable.
    pub fn reachable(&self, a: Coord, b: Coord) -> bool {
        self.is_walkable(a.row, a.col)
            && self.is_walkable(b.row, b.col)
            && self.components.equiv(self.get_ix(a), self.get_ix(b))
    }

    pub fn unreachable(&self, a: Coord, b: Coord) -> bool {
        !self.reachable(a, b)
    }

    /// Renders the maze as text, optionally overlaying a solution path with
    /// `*` markers. Start and end keep their own markers even when they are
    /// part of the path.
    pub fn render(&self, path: Option<&[Coord]>) -> String {
        let on_path: FxHashSet<Coord> = path.unwrap_or_default().iter().copied().collect();
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for (row, row_cells) in self.cells.iter().enumerate() {
            for (col, cell) in row_cells.iter().enumerate() {
                if *cell == Cell::Open && on_path.contains(&Coord::new(row, col)) {
                    out.push('*');
                } else {
                    out.push(cell.to_char());
                }
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    /// Parses a textual layout of `.`, `#`, `S` and `E` characters, one line
    /// per row. Surrounding whitespace and blank lines are ignored so
    /// layouts can be written as indented string literals.
    fn from_str(s: &str) -> Result<Maze, MazeError> {
        let mut cells = Vec::new();
        for (row, line) in s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
        {
            let mut row_cells = Vec::with_capacity(line.len());
            for (col, marker) in line.chars().enumerate() {
                row_cells.push(
                    Cell::from_char(marker)
                        .ok_or(MazeError::UnknownMarker { marker, row, col })?,
                );
            }
            cells.push(row_cells);
        }
        Maze::new(cells)
    }
}
