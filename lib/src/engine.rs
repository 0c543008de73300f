//! The generation-update engine.

use crate::{
    cells::{Coord, ALIVE, DEAD},
    error::Error,
    grid::Grid,
    topology::Topology,
};

/// The cells whose state flips between two consecutive generations.
///
/// Each coordinate appears at most once, so applying a flip set with
/// [`Grid::flip_cells`] toggles every listed cell exactly once.
pub type FlipSet = Vec<Coord>;

/// Computes the cells that change state in the next generation.
///
/// Scans the grid in row-major order. A dead cell is born iff exactly 3 of
/// its 8 neighbors are alive; a live cell dies iff its live-neighbor count is
/// neither 2 nor 3. All neighbor counts are taken against the grid as passed
/// in: this function never mutates the grid, so the whole flip set describes
/// a single frozen snapshot and can be applied afterwards in any order.
///
/// # Errors
///
/// [`Error::DimensionMismatch`] if the grid and the topology were built for
/// different dimensions.
pub fn compute_updates(grid: &Grid, topology: &Topology) -> Result<FlipSet, Error> {
    if grid.height() != topology.height() || grid.width() != topology.width() {
        return Err(Error::DimensionMismatch {
            grid_height: grid.height(),
            grid_width: grid.width(),
            topology_height: topology.height(),
            topology_width: topology.width(),
        });
    }

    let mut updates = FlipSet::new();
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let coord = Coord::new(row, col);
            let alive_cells = topology
                .neighbors(coord)
                .iter()
                .filter(|&&neighbor| grid.cell(neighbor) == ALIVE)
                .count();

            let state = grid.cell(coord);
            let birth = state == DEAD && alive_cells == 3;
            let death = state == ALIVE && alive_cells != 2 && alive_cells != 3;
            if birth || death {
                updates.push(coord);
            }
        }
    }
    Ok(updates)
}
