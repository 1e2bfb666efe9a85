//! Cell states.

use crate::error::Error;
use std::ops::Not;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The state of a cell.
///
/// Only [`DEAD`] and [`ALIVE`] exist, so the inner value is always
/// `0` or `1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct State(u8);

/// The Dead state.
pub const DEAD: State = State(0);
/// The Alive state.
pub const ALIVE: State = State(1);

impl State {
    /// Whether the cell is [`ALIVE`].
    #[inline]
    pub fn is_alive(self) -> bool {
        self == ALIVE
    }
}

/// Flips the state.
impl Not for State {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        State(self.0 ^ 1)
    }
}

impl From<bool> for State {
    #[inline]
    fn from(alive: bool) -> Self {
        State(alive as u8)
    }
}

impl From<State> for u8 {
    #[inline]
    fn from(state: State) -> Self {
        state.0
    }
}

/// Accepts only `0` and `1`.
impl TryFrom<u8> for State {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DEAD),
            1 => Ok(ALIVE),
            _ => Err(Error::InvalidState(value)),
        }
    }
}

/// The coordinates of a cell.
///
/// `(row, column)`, both 0-indexed.
pub type Coord = (usize, usize);
