//! Precomputed toroidal neighborhoods.

use crate::{cells::Coord, error::Error};

/// The toroidally-wrapped Moore neighborhood of every cell on a grid.
///
/// Built once per grid size and never mutated afterwards; the table depends
/// only on the dimensions, not on any cell content, so it is shared read-only
/// by every generation.
///
/// The eight neighbors of a cell are stored in a fixed canonical order. With
/// `up`/`down` the wrapped row predecessor/successor and `left`/`right` the
/// wrapped column predecessor/successor of `(i, j)`:
///
/// ```text
/// (up, left),   (up, j),   (up, right),
/// (i, left),               (i, right),
/// (down, left), (down, j), (down, right)
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Topology {
    height: usize,
    width: usize,
    /// The 8 neighbors of every cell, row-major, stride 8.
    nbhd: Box<[Coord]>,
}

impl Topology {
    /// Precomputes the neighbor table for a `height`×`width` grid.
    ///
    /// Degenerate tori are legal: on a grid with a single row or column a
    /// cell wraps around to itself, so its own coordinate appears among its
    /// neighbors.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimensions`] if `height` or `width` is zero.
    pub fn new(height: usize, width: usize) -> Result<Self, Error> {
        if height < 1 || width < 1 {
            return Err(Error::InvalidDimensions);
        }
        let mut nbhd = Vec::with_capacity(height * width * 8);
        for i in 0..height {
            let up = (i + height - 1) % height;
            let down = (i + 1) % height;
            for j in 0..width {
                let left = (j + width - 1) % width;
                let right = (j + 1) % width;
                nbhd.extend_from_slice(&[
                    Coord::new(up, left),
                    Coord::new(up, j),
                    Coord::new(up, right),
                    Coord::new(i, left),
                    Coord::new(i, right),
                    Coord::new(down, left),
                    Coord::new(down, j),
                    Coord::new(down, right),
                ]);
            }
        }
        Ok(Self {
            height,
            width,
            nbhd: nbhd.into_boxed_slice(),
        })
    }

    /// Height of the grid the table was built for.
    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Width of the grid the table was built for.
    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// The 8 neighbors of a cell, in canonical order.
    ///
    /// Every returned coordinate is a valid coordinate of the grid the table
    /// was built for.
    #[inline]
    pub fn neighbors(&self, coord: Coord) -> &[Coord] {
        let start = coord.index(self.width) * 8;
        &self.nbhd[start..start + 8]
    }
}
