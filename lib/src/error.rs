//! All kinds of errors in this crate.

use crate::cells::Coord;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Height and width should be positive.
    InvalidDimensions,
    /// Cell at {coord} is outside the {height}x{width} grid.
    OutOfBoundsCoordinate {
        /// The offending coordinate.
        coord: Coord,
        /// Height of the grid.
        height: usize,
        /// Width of the grid.
        width: usize,
    },
    /// The grid is {grid_height}x{grid_width} but the topology was built for {topology_height}x{topology_width}.
    DimensionMismatch {
        /// Height of the grid.
        grid_height: usize,
        /// Width of the grid.
        grid_width: usize,
        /// Height the topology was built for.
        topology_height: usize,
        /// Width the topology was built for.
        topology_width: usize,
    },
}
