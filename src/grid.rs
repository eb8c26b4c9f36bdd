use std::fmt::{Display, Formatter};
use std::ops::IndexMut;

use itertools::Itertools;
use ndarray::{Array2, AssignElem};

use crate::cell::Slant;
use crate::location::{square_coords, Location};

/// The mutable cell square of a puzzle in progress, one [`Slant`] per cell.
///
/// Cells only ever move from [`Slant::Unset`] to a decided orientation; nothing here or in
/// [`Solver`](crate::Solver) writes a decided cell back to undecided.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    cells: Array2<Slant>,
}

impl Grid {
    /// An all-[`Slant::Unset`] grid with `size` cells to a side.
    pub fn new(size: usize) -> Self {
        Self { cells: Array2::from_shape_simple_fn((size, size), Slant::default) }
    }

    /// The side length in cells.
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// The slant at `location`, or `None` if `location` is out of range.
    pub fn get(&self, location: Location) -> Option<Slant> {
        self.cells.get(location.as_index()).copied()
    }

    /// Writes `slant` at `location`.
    ///
    /// # Panics
    ///
    /// Panics if `location` is out of range.
    pub fn set(&mut self, location: Location, slant: Slant) {
        self.cells.index_mut(location.as_index()).assign_elem(slant)
    }

    /// All cell locations in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Location> {
        square_coords(self.size())
    }

    /// How many cells are still [`Slant::Unset`].
    pub fn unset_cells(&self) -> usize {
        self.cells.iter().filter(|&&slant| slant == Slant::Unset).count()
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.cells.iter().join(""))
    }
}
