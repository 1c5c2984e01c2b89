use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::fmt;

/// The expected maximum length of a single variable; 21 covers a full-size
/// Sunday grid.
pub(crate) const MAX_VARIABLE_LENGTH: usize = 21;

/// Direction that a variable runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Across,
    Down,
}

/// An identifier for a variable, based on its index in the puzzle's
/// `variables` list. Across variables come first in row-major scan order,
/// then down variables in column-major scan order.
pub type VarId = usize;

/// A fillable slot in the grid: start cell, direction and length. Two
/// variables compare equal when all four fields match, so a `Variable` can
/// key a map by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variable {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub length: usize,
}

impl Variable {
    /// Grid coordinates covered by this variable, in letter order.
    pub fn cells(&self) -> SmallVec<[(usize, usize); MAX_VARIABLE_LENGTH]> {
        let mut result = SmallVec::new();
        for k in 0..self.length {
            match self.direction {
                Direction::Across => result.push((self.row, self.col + k)),
                Direction::Down => result.push((self.row + k, self.col)),
            }
        }
        result
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.direction {
            Direction::Across => "across",
            Direction::Down => "down",
        };
        write!(f, "({}, {}) {} : {}", self.row, self.col, direction, self.length)
    }
}

/// Grid geometry plus everything derived from it: the variable list, the
/// overlap table and the neighbor relation. Read-only once constructed; the
/// fill engine never mutates it.
pub struct Puzzle {
    width: usize,
    height: usize,
    open: Vec<bool>,
    variables: Vec<Variable>,
    index: FxHashMap<Variable, VarId>,
    overlaps: FxHashMap<(VarId, VarId), (usize, usize)>,
    neighbors: Vec<SmallVec<[VarId; 8]>>,
}

impl Puzzle {
    /// Build a puzzle from a row-major open-cell mask (`true` = fillable).
    pub fn new(rows: Vec<Vec<bool>>) -> Result<Puzzle, String> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(String::from("Grid must have at least one cell."));
        }
        let height = rows.len();
        let width = rows[0].len();
        if rows.iter().any(|row| row.len() != width) {
            return Err(String::from("Grid rows must all have the same width."));
        }

        let mut open = Vec::with_capacity(width * height);
        for row in &rows {
            open.extend_from_slice(row);
        }

        let variables = scan_variables(&open, width, height);
        let (overlaps, neighbors) = build_overlaps(&variables);
        let index = variables
            .iter()
            .enumerate()
            .map(|(id, &variable)| (variable, id))
            .collect();

        Ok(Puzzle {
            width,
            height,
            open,
            variables,
            index,
            overlaps,
            neighbors,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.open[row * self.width + col]
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn variable(&self, id: VarId) -> Variable {
        self.variables[id]
    }

    pub fn index_of(&self, variable: &Variable) -> Option<VarId> {
        self.index.get(variable).copied()
    }

    /// Overlap between two variables: `Some((i, j))` when letter `i` of `x`
    /// and letter `j` of `y` share a cell, `None` when the variables are
    /// disjoint.
    pub fn overlap(&self, x: VarId, y: VarId) -> Option<(usize, usize)> {
        self.overlaps.get(&(x, y)).copied()
    }

    /// Variables sharing at least one cell with `x`, in ascending id order.
    pub fn neighbors(&self, x: VarId) -> &[VarId] {
        &self.neighbors[x]
    }
}

/// Collect maximal runs of open cells, across then down. Runs of a single
/// cell belong to the crossing run only and do not form variables.
fn scan_variables(open: &[bool], width: usize, height: usize) -> Vec<Variable> {
    let mut result = vec![];

    for row in 0..height {
        let mut start = None;
        let mut length = 0;
        for col in 0..width {
            if open[row * width + col] {
                if start.is_none() {
                    start = Some(col);
                }
                length += 1;
            } else {
                if let Some(col) = start {
                    push_run(&mut result, row, col, Direction::Across, length);
                }
                start = None;
                length = 0;
            }
        }
        // have to flush the end of the row
        if let Some(col) = start {
            push_run(&mut result, row, col, Direction::Across, length);
        }
    }

    for col in 0..width {
        let mut start = None;
        let mut length = 0;
        for row in 0..height {
            if open[row * width + col] {
                if start.is_none() {
                    start = Some(row);
                }
                length += 1;
            } else {
                if let Some(row) = start {
                    push_run(&mut result, row, col, Direction::Down, length);
                }
                start = None;
                length = 0;
            }
        }
        if let Some(row) = start {
            push_run(&mut result, row, col, Direction::Down, length);
        }
    }

    result
}

fn push_run(
    result: &mut Vec<Variable>,
    row: usize,
    col: usize,
    direction: Direction,
    length: usize,
) {
    if length >= 2 {
        result.push(Variable {
            row,
            col,
            direction,
            length,
        });
    }
}

/// Intersect every pair of variables through a cell lookup table, recording
/// the overlap in both orientations.
fn build_overlaps(
    variables: &[Variable],
) -> (
    FxHashMap<(VarId, VarId), (usize, usize)>,
    Vec<SmallVec<[VarId; 8]>>,
) {
    let mut by_cell: FxHashMap<(usize, usize), SmallVec<[(VarId, usize); 2]>> =
        FxHashMap::default();

    for (id, variable) in variables.iter().enumerate() {
        for (offset, cell) in variable.cells().into_iter().enumerate() {
            by_cell.entry(cell).or_default().push((id, offset));
        }
    }

    let mut overlaps = FxHashMap::default();
    let mut neighbors: Vec<SmallVec<[VarId; 8]>> = vec![SmallVec::new(); variables.len()];

    for entries in by_cell.values() {
        for (position, &(x, i)) in entries.iter().enumerate() {
            for &(y, j) in &entries[position + 1..] {
                overlaps.insert((x, y), (i, j));
                overlaps.insert((y, x), (j, i));
                neighbors[x].push(y);
                neighbors[y].push(x);
            }
        }
    }

    for list in &mut neighbors {
        list.sort_unstable();
        list.dedup();
    }

    (overlaps, neighbors)
}
