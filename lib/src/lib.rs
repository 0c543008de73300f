//! Simulating Conway's Game of Life on a fixed-size toroidal grid.
//!
//! The eight toroidally-wrapped neighbors of every cell are precomputed once
//! per grid size ([`Topology`]). Each generation is then derived as the
//! minimal set of cells whose state changes ([`compute_updates`]), and applied
//! by toggling exactly those cells ([`Grid::flip_cells`]). The flip set for a
//! generation is always computed in full before any cell is mutated.
//!
//! ```
//! use torlife_lib::{Coord, Simulation};
//!
//! // A glider on a 10×10 torus travels one cell down-right every 4 generations.
//! let mut sim = Simulation::new(10, 10)?;
//! sim.seed(&[
//!     Coord::new(0, 1),
//!     Coord::new(1, 2),
//!     Coord::new(2, 0),
//!     Coord::new(2, 1),
//!     Coord::new(2, 2),
//! ])?;
//! sim.run(4);
//! assert_eq!(sim.grid().population(), 5);
//! # Ok::<(), torlife_lib::Error>(())
//! ```

mod cells;
mod engine;
mod error;
mod grid;
mod simulation;
mod topology;

pub use cells::{Coord, State, ALIVE, DEAD};
pub use engine::{compute_updates, FlipSet};
pub use error::Error;
pub use grid::Grid;
pub use simulation::Simulation;
pub use topology::Topology;
