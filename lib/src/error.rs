//! All kinds of errors in this crate.

use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Display, Error)]
pub enum Error {
    /// Rows and columns should be positive, got {0} × {1}.
    InvalidDimension(usize, usize),
    /// Cell ({0}, {1}) is outside the grid.
    OutOfBounds(usize, usize),
    /// A grid of {0} × {1} should have {2} cells, got {3}.
    CellCountError(usize, usize, usize, usize),
    /// Invalid cell state {0}, should be 0 or 1.
    InvalidState(u8),
    /// Death threshold should be between 0 and 1, got {0}.
    InvalidThreshold(f64),
    /// Unable to parse the grid: {0}.
    ParseError(String),
}
