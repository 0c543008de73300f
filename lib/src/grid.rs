//! The grid.

use crate::{
    cells::{Coord, State, ALIVE, DEAD},
    error::Error,
};
use std::fmt::{self, Display, Formatter, Write};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A fixed-size rectangular grid of cells.
///
/// Cells are stored row-major. The dimensions are fixed for the lifetime of
/// the grid; all cells start [`DEAD`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Box<[State]>,
}

impl Grid {
    /// Creates a grid with all cells dead.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimensions`] if `height` or `width` is zero.
    pub fn new(height: usize, width: usize) -> Result<Self, Error> {
        if height < 1 || width < 1 {
            return Err(Error::InvalidDimensions);
        }
        Ok(Self {
            height,
            width,
            cells: vec![DEAD; height * width].into_boxed_slice(),
        })
    }

    /// Height of the grid.
    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Width of the grid.
    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Checks that a coordinate lies on the grid.
    fn check_coord(&self, coord: Coord) -> Result<(), Error> {
        if coord.row < self.height && coord.col < self.width {
            Ok(())
        } else {
            Err(Error::OutOfBoundsCoordinate {
                coord,
                height: self.height,
                width: self.width,
            })
        }
    }

    /// The state of a cell.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBoundsCoordinate`] if the coordinate is off the grid.
    pub fn get(&self, coord: Coord) -> Result<State, Error> {
        self.check_coord(coord)?;
        Ok(self.cell(coord))
    }

    /// Sets the state of a cell.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBoundsCoordinate`] if the coordinate is off the grid.
    pub fn set(&mut self, coord: Coord, state: State) -> Result<(), Error> {
        self.check_coord(coord)?;
        self.cells[coord.index(self.width)] = state;
        Ok(())
    }

    /// The state of a cell whose coordinate is already known to be in bounds.
    #[inline]
    pub(crate) fn cell(&self, coord: Coord) -> State {
        self.cells[coord.index(self.width)]
    }

    /// Toggles every listed cell between dead and alive.
    ///
    /// Used both for seeding an initial pattern and for applying the flip set
    /// of one generation. Every coordinate is checked before any cell is
    /// toggled, so a rejected call leaves the grid untouched.
    ///
    /// A coordinate listed twice is toggled twice and so ends up unchanged;
    /// callers that need exactly-once semantics must not pass duplicates.
    /// Flip sets from [`compute_updates`](crate::compute_updates) are
    /// duplicate-free.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBoundsCoordinate`] if any coordinate is off the grid.
    pub fn flip_cells(&mut self, coords: &[Coord]) -> Result<(), Error> {
        for &coord in coords {
            self.check_coord(coord)?;
        }
        for &coord in coords {
            let cell = &mut self.cells[coord.index(self.width)];
            *cell = !*cell;
        }
        Ok(())
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&state| state == ALIVE).count()
    }

    /// Iterates over the coordinates of living cells in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &state)| state == ALIVE)
            .map(move |(index, _)| Coord::new(index / width, index % width))
    }
}

/// Displays the grid in [Plaintext](https://conwaylife.com/wiki/Plaintext)
/// format.
///
/// * **Dead** cells are represented by `.`;
/// * **Living** cells are represented by `o`.
impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for &cell in row {
                f.write_char(if cell == ALIVE { 'o' } else { '.' })?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
