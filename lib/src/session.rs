//! The current grid, held between generations.

use crate::{
    config::Config,
    error::Error,
    grid::{check_threshold, Grid},
};
use log::{debug, trace, warn};
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Run status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// Not running. Ticks are ignored.
    #[default]
    Idle,
    /// Each tick computes one generation.
    Running,
}

/// Holds the current grid and the run status for a front-end.
///
/// The grid itself is immutable: every operation here replaces it as a
/// whole, so a reader never sees a half-updated grid.
#[derive(Clone, Debug)]
pub struct Session {
    config: Config,
    grid: Grid,
    status: Status,
    generation: u64,
}

/// An idle session with the default 30 × 30 configuration.
impl Default for Session {
    fn default() -> Self {
        let config = Config::default();
        let grid = Grid::dead(config.rows, config.cols);
        Session {
            config,
            grid,
            status: Status::Idle,
            generation: 0,
        }
    }
}

impl Session {
    /// Creates an idle session with an empty grid.
    pub fn new(config: Config) -> Result<Self, Error> {
        config.validate()?;
        let grid = config.empty_grid()?;
        debug!("New session: {} × {}", config.rows, config.cols);
        Ok(Session {
            config,
            grid,
            status: Status::Idle,
            generation: 0,
        })
    }

    /// Configuration of this session.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of living cells in the current grid.
    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Generations computed since the grid was last cleared or randomized.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current run status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Whether ticks compute generations.
    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    /// Switches to [`Status::Running`].
    pub fn start(&mut self) {
        debug!("Start at generation {}", self.generation);
        self.status = Status::Running;
    }

    /// Switches to [`Status::Idle`]. Later ticks are ignored.
    pub fn stop(&mut self) {
        debug!("Stop at generation {}", self.generation);
        self.status = Status::Idle;
    }

    /// Starts if idle, stops if running. Returns the new status.
    pub fn toggle_running(&mut self) -> Status {
        match self.status {
            Status::Idle => self.start(),
            Status::Running => self.stop(),
        }
        self.status
    }

    /// Computes one generation, but only while running.
    ///
    /// Returns whether the grid changed hands. A tick that arrives after
    /// [`stop`](Self::stop) does nothing.
    pub fn tick(&mut self) -> bool {
        if self.is_running() {
            self.step();
            true
        } else {
            trace!("Ignored tick while idle");
            false
        }
    }

    /// Computes one generation, whatever the status.
    pub fn step(&mut self) {
        self.grid = self.grid.step();
        self.generation += 1;
        trace!(
            "Generation {}: population {}",
            self.generation,
            self.grid.population()
        );
    }

    /// Kills every cell.
    pub fn clear(&mut self) -> Result<(), Error> {
        self.grid = self.config.empty_grid()?;
        self.generation = 0;
        debug!("Cleared");
        Ok(())
    }

    /// Fills the grid randomly with the configured death threshold.
    pub fn randomize(&mut self) -> Result<(), Error> {
        self.replace_random(self.config.random_grid()?);
        Ok(())
    }

    /// Same as [`randomize`](Self::randomize), with a given generator.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), Error> {
        self.replace_random(self.config.random_grid_with(rng)?);
        Ok(())
    }

    fn replace_random(&mut self, grid: Grid) {
        self.grid = grid;
        self.generation = 0;
        debug!(
            "Randomized with death threshold {}: population {}",
            self.config.death_threshold,
            self.grid.population()
        );
    }

    /// Flips one cell. On error the grid is left unchanged.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<(), Error> {
        match self.grid.toggle(row, col) {
            Ok(grid) => {
                self.grid = grid;
                Ok(())
            }
            Err(e) => {
                warn!("Rejected toggle: {}", e);
                Err(e)
            }
        }
    }

    /// Changes the death threshold used by later randomizations.
    pub fn set_death_threshold(&mut self, death_threshold: f64) -> Result<(), Error> {
        check_threshold(death_threshold)?;
        self.config.death_threshold = death_threshold;
        Ok(())
    }
}
