//! The grid.

use crate::{
    cells::{Coord, State, ALIVE, DEAD},
    error::Error,
    rule::{transition, MOORE},
};
use rand::{thread_rng, Rng};
use std::{
    fmt::{self, Display, Formatter},
    slice::Chunks,
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A finite grid of cells with hard edges.
///
/// Cells outside the grid are treated as dead; the grid never wraps around.
///
/// A grid is never modified in place. Every operation that changes cells,
/// such as [`step`](Self::step) or [`toggle`](Self::toggle), returns a new
/// grid and leaves the old one untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridSer"))]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Cells in row-major order. The length is always `rows * cols`.
    cells: Box<[State]>,
}

/// A [`Grid`] as read by serde, before its size is checked.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct GridSer {
    rows: usize,
    cols: usize,
    cells: Vec<State>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridSer> for Grid {
    type Error = Error;

    fn try_from(ser: GridSer) -> Result<Self, Self::Error> {
        let GridSer { rows, cols, cells } = ser;
        check_dimension(rows, cols)?;
        if rows.checked_mul(cols) != Some(cells.len()) {
            let expected = rows.saturating_mul(cols);
            return Err(Error::CellCountError(rows, cols, expected, cells.len()));
        }
        Ok(Grid {
            rows,
            cols,
            cells: cells.into_boxed_slice(),
        })
    }
}

pub(crate) fn check_dimension(rows: usize, cols: usize) -> Result<(), Error> {
    if rows == 0 || cols == 0 {
        Err(Error::InvalidDimension(rows, cols))
    } else {
        Ok(())
    }
}

pub(crate) fn check_threshold(death_threshold: f64) -> Result<(), Error> {
    if (0.0..=1.0).contains(&death_threshold) {
        Ok(())
    } else {
        Err(Error::InvalidThreshold(death_threshold))
    }
}

impl Grid {
    /// Creates a grid where every cell is dead.
    pub fn new(rows: usize, cols: usize) -> Result<Self, Error> {
        check_dimension(rows, cols)?;
        Ok(Self::dead(rows, cols))
    }

    /// Same as [`new`](Self::new), for sizes that are known to be positive.
    pub(crate) fn dead(rows: usize, cols: usize) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![DEAD; rows * cols].into_boxed_slice(),
        }
    }

    /// Creates a randomly filled grid, using the thread-local generator.
    ///
    /// See [`random_with`](Self::random_with).
    pub fn random(rows: usize, cols: usize, death_threshold: f64) -> Result<Self, Error> {
        Self::random_with(rows, cols, death_threshold, &mut thread_rng())
    }

    /// Creates a randomly filled grid.
    ///
    /// For each cell a number is drawn uniformly from `[0, 1)`. The cell is
    /// alive if the number is strictly greater than `death_threshold`, so a
    /// higher threshold gives fewer living cells.
    pub fn random_with<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        death_threshold: f64,
        rng: &mut R,
    ) -> Result<Self, Error> {
        check_dimension(rows, cols)?;
        check_threshold(death_threshold)?;
        let cells = (0..rows * cols)
            .map(|_| State::from(rng.gen::<f64>() > death_threshold))
            .collect();
        Ok(Grid { rows, cols, cells })
    }

    /// Creates a grid where exactly the given cells are alive.
    pub fn with_alive<I>(rows: usize, cols: usize, alive: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut grid = Self::new(rows, cols)?;
        for (row, col) in alive {
            let index = grid.index(row, col).ok_or(Error::OutOfBounds(row, col))?;
            grid.cells[index] = ALIVE;
        }
        Ok(grid)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Gets the state of a cell. Returns `None` if there is no such cell.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<State> {
        self.index(row, col).map(|index| self.cells[index])
    }

    /// Iterates over the rows, each as a slice of `cols` states.
    pub fn iter_rows(&self) -> Chunks<'_, State> {
        self.cells.chunks(self.cols)
    }

    /// Iterates over the coordinates of all living cells, row by row.
    pub fn alive_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, state)| state.is_alive())
            .map(move |(index, _)| (index / cols, index % cols))
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|state| state.is_alive()).count()
    }

    /// Number of living cells among the neighbors at the given offsets.
    ///
    /// Offsets pointing outside the grid count as dead.
    fn neighbors(&self, row: usize, col: usize, offsets: &[(isize, isize)]) -> usize {
        offsets
            .iter()
            .filter_map(|&(d_row, d_col)| {
                let row = row.checked_add_signed(d_row)?;
                let col = col.checked_add_signed(d_col)?;
                self.get(row, col)
            })
            .filter(|state| state.is_alive())
            .count()
    }

    /// The next generation, counting neighbors in the Moore neighborhood.
    pub fn step(&self) -> Self {
        self.step_with(&MOORE)
    }

    /// The next generation, counting neighbors at the given offsets.
    ///
    /// Every neighbor count is taken from `self`; the new states are
    /// written into a separate buffer.
    pub fn step_with(&self, offsets: &[(isize, isize)]) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len());
        for row in 0..self.rows {
            for col in 0..self.cols {
                let state = self.cells[row * self.cols + col];
                cells.push(transition(state, self.neighbors(row, col, offsets)));
            }
        }
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: cells.into_boxed_slice(),
        }
    }

    /// A copy of the grid with the state of one cell flipped.
    pub fn toggle(&self, row: usize, col: usize) -> Result<Self, Error> {
        let index = self.index(row, col).ok_or(Error::OutOfBounds(row, col))?;
        let mut cells = self.cells.clone();
        cells[index] = !cells[index];
        Ok(Grid {
            rows: self.rows,
            cols: self.cols,
            cells,
        })
    }
}

/// Displays the grid in [Plaintext](https://conwaylife.com/wiki/Plaintext)
/// format, without the header.
///
/// * **Dead** cells are represented by `.`;
/// * **Living** cells are represented by `o`;
/// * Each row is ended with a newline.
impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for &state in row {
                f.write_str(if state.is_alive() { "o" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// Parses the format written by [`Display`].
///
/// Blank lines are ignored, and `O` or `*` are also accepted for
/// living cells.
impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::new();
        let mut cols = None;
        let mut rows = 0;
        for line in s.lines().map(str::trim).filter(|line| !line.is_empty()) {
            let len = line.chars().count();
            match cols {
                None => cols = Some(len),
                Some(cols) if cols != len => {
                    return Err(Error::ParseError(format!(
                        "row {} has {} cells, expected {}",
                        rows, len, cols
                    )))
                }
                _ => (),
            }
            for c in line.chars() {
                let state = match c {
                    '.' => DEAD,
                    'o' | 'O' | '*' => ALIVE,
                    _ => {
                        return Err(Error::ParseError(format!(
                            "invalid character {:?} in row {}",
                            c, rows
                        )))
                    }
                };
                cells.push(state);
            }
            rows += 1;
        }
        let cols = cols.ok_or_else(|| Error::ParseError(String::from("empty grid")))?;
        Ok(Grid {
            rows,
            cols,
            cells: cells.into_boxed_slice(),
        })
    }
}
