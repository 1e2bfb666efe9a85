//! __lifegrid__ runs [Conway's Game of Life](https://conwaylife.com/wiki/Conway%27s_Game_of_Life)
//! on a small bounded grid.
//!
//! The cells outside the grid are always dead. All grid operations are pure:
//! they take a [`Grid`] and return a new one.
//!
//! # Example
//!
//! ```rust
//! use lifegrid_lib::Grid;
//!
//! // A blinker.
//! let grid: Grid = ".....\n..o..\n..o..\n..o..\n.....\n".parse()?;
//! let next = grid.step();
//! assert_eq!(next.to_string(), ".....\n.....\n.ooo.\n.....\n.....\n");
//! assert_eq!(next.step(), grid);
//! # Ok::<(), lifegrid_lib::Error>(())
//! ```

mod cells;
mod config;
mod error;
mod grid;
pub mod rule;
mod session;

pub use cells::{Coord, State, ALIVE, DEAD};
pub use config::{Config, DEATH_THRESHOLD_STEP, MAX_DEATH_THRESHOLD, MIN_DEATH_THRESHOLD};
pub use error::Error;
pub use grid::Grid;
pub use session::{Session, Status};
