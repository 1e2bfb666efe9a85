//! Simulation configuration.

use crate::{
    error::Error,
    grid::{check_dimension, check_threshold, Grid},
};
use educe::Educe;
use rand::Rng;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The smallest death threshold offered by front-ends.
pub const MIN_DEATH_THRESHOLD: f64 = 0.1;
/// The largest death threshold offered by front-ends.
pub const MAX_DEATH_THRESHOLD: f64 = 0.9;
/// Granularity of the death threshold offered by front-ends.
pub const DEATH_THRESHOLD_STEP: f64 = 0.1;

/// Simulation configuration.
///
/// The grid and the run loop will be set up from this configuration.
#[derive(Clone, Debug, Educe, PartialEq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Number of rows.
    #[educe(Default = 30)]
    pub rows: usize,

    /// Number of columns.
    #[educe(Default = 30)]
    pub cols: usize,

    /// Probability that a cell is dead when the grid is randomized.
    ///
    /// A cell is alive when a uniform draw from `[0, 1)` is strictly
    /// greater than this value.
    #[educe(Default = 0.5)]
    pub death_threshold: f64,

    /// Time between two generations while running, in milliseconds.
    #[educe(Default = 100)]
    pub interval_ms: u32,
}

impl Config {
    /// Sets up a new configuration with given size.
    pub fn new(rows: usize, cols: usize) -> Self {
        Config {
            rows,
            cols,
            ..Config::default()
        }
    }

    /// Sets the death threshold.
    pub fn set_death_threshold(mut self, death_threshold: f64) -> Self {
        self.death_threshold = death_threshold;
        self
    }

    /// Sets the time between two generations, in milliseconds.
    pub fn set_interval_ms(mut self, interval_ms: u32) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    /// Time between two generations.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.into())
    }

    /// Checks the size and the death threshold.
    pub fn validate(&self) -> Result<(), Error> {
        check_dimension(self.rows, self.cols)?;
        check_threshold(self.death_threshold)
    }

    /// Creates an empty grid of the configured size.
    pub fn empty_grid(&self) -> Result<Grid, Error> {
        Grid::new(self.rows, self.cols)
    }

    /// Creates a random grid of the configured size and death threshold.
    pub fn random_grid(&self) -> Result<Grid, Error> {
        Grid::random(self.rows, self.cols, self.death_threshold)
    }

    /// Same as [`random_grid`](Self::random_grid), with a given generator.
    pub fn random_grid_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Grid, Error> {
        Grid::random_with(self.rows, self.cols, self.death_threshold, rng)
    }
}
