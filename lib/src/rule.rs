//! The rule of Conway's Game of Life.
//!
//! Rulestring `B3/S23`: a dead cell with exactly three living neighbors
//! becomes alive, a living cell with two or three living neighbors stays
//! alive, and every other cell dies or stays dead.

use crate::cells::{State, ALIVE, DEAD};

/// Relative coordinates `(Δrow, Δcol)` of the Moore neighborhood.
pub const MOORE: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
];

/// The state of a cell in the next generation, given its current state and
/// the number of living cells in its neighborhood.
#[inline]
pub fn transition(state: State, neighbors: usize) -> State {
    match neighbors {
        0 | 1 => DEAD,
        3 if state == DEAD => ALIVE,
        2 | 3 => state,
        _ => DEAD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn b3_s23() {
        for n in 0..=8 {
            let born = transition(DEAD, n);
            let survives = transition(ALIVE, n);
            assert_eq!(born, State::from(n == 3), "birth with {} neighbors", n);
            assert_eq!(
                survives,
                State::from(n == 2 || n == 3),
                "survival with {} neighbors",
                n
            );
        }
    }

    #[test]
    fn moore_offsets_are_distinct() {
        for (i, a) in MOORE.iter().enumerate() {
            assert_ne!(*a, (0, 0));
            assert!(MOORE[i + 1..].iter().all(|b| a != b));
        }
    }
}
