//! The simulation driver.

use crate::{
    cells::Coord,
    engine::{compute_updates, FlipSet},
    error::Error,
    grid::Grid,
    topology::Topology,
};

/// A running simulation.
///
/// Owns a [`Grid`] together with the [`Topology`] built for the same
/// dimensions, and counts the generations stepped so far. Renderers borrow
/// the grid read-only between steps.
#[derive(Clone, Debug)]
pub struct Simulation {
    grid: Grid,
    topology: Topology,
    generation: u64,
}

impl Simulation {
    /// Creates a simulation with an all-dead `height`×`width` grid.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimensions`] if `height` or `width` is zero.
    pub fn new(height: usize, width: usize) -> Result<Self, Error> {
        Ok(Self {
            grid: Grid::new(height, width)?,
            topology: Topology::new(height, width)?,
            generation: 0,
        })
    }

    /// The current grid.
    #[inline]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of generations stepped so far.
    #[inline]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Toggles the given cells, usually to seed the initial pattern.
    ///
    /// Seeding does not count as a generation.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBoundsCoordinate`] if any coordinate is off the grid;
    /// the grid is left untouched in that case.
    pub fn seed(&mut self, coords: &[Coord]) -> Result<(), Error> {
        self.grid.flip_cells(coords)
    }

    /// Advances the simulation by one generation.
    ///
    /// The whole flip set is computed against the current grid before any
    /// cell is toggled. Returns the flips that were applied; an empty flip
    /// set means the grid has reached a still life, but the simulation keeps
    /// running regardless.
    pub fn step(&mut self) -> FlipSet {
        // The grid and the topology share dimensions by construction.
        let updates = compute_updates(&self.grid, &self.topology).unwrap();
        self.grid.flip_cells(&updates).unwrap();
        self.generation += 1;
        updates
    }

    /// Runs a fixed number of generations.
    ///
    /// Always runs exactly `generations` steps; there is no early exit when
    /// the grid reaches a fixed point or a cycle.
    pub fn run(&mut self, generations: u64) {
        for _ in 0..generations {
            self.step();
        }
    }
}
