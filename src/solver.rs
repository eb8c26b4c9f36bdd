use indexmap::IndexMap;
use itertools::Itertools;
use strum::VariantArray;

use crate::cell::Slant;
use crate::grid::Grid;
use crate::location::Location;
use crate::puzzle::Puzzle;
use crate::quadrant::Quadrant;

/// Constraint propagation over one puzzle and its grid.
///
/// Carries the set of clues not yet known satisfied and repeatedly applies the two dual
/// deductions described on [`Self::solve`] until neither makes progress. Use
/// [`Self::solve`] to run to that fixed point.
pub struct Solver<'a> {
    puzzle: &'a Puzzle,
    grid: &'a mut Grid,
    // clued corners not yet discharged, in row-major discovery order
    active: IndexMap<Location, u8>,
}

impl<'a> Solver<'a> {
    /// Prepares to solve `puzzle` on `grid`, with every clued corner initially undischarged.
    ///
    /// `grid` must be one cell shorter than `puzzle` on each side.
    pub fn new(puzzle: &'a Puzzle, grid: &'a mut Grid) -> Self {
        debug_assert_eq!(grid.size() + 1, puzzle.size());

        let active = puzzle.coords()
            .filter_map(|corner| puzzle.clue(corner).map(|clue| (corner, clue)))
            .collect();

        Self { puzzle, grid, active }
    }

    /// How many of the corner's governed cells currently point at it.
    ///
    /// Cells beyond the grid edge are skipped here: an absent cell contributes nothing toward
    /// the clue.
    #[inline]
    pub(crate) fn connected_count(&self, corner: Location) -> usize {
        Quadrant::VARIANTS.iter()
            .filter(|quadrant| self.grid.get(quadrant.of(corner)) == Some(quadrant.connecting()))
            .count()
    }

    /// How many of the corner's governed cells can no longer point at it.
    ///
    /// Cells beyond the grid edge are counted here: an absent cell will never connect.
    #[inline]
    pub(crate) fn disconnected_count(&self, corner: Location) -> usize {
        Quadrant::VARIANTS.iter()
            .filter(|quadrant| match self.grid.get(quadrant.of(corner)) {
                Some(slant) => slant == quadrant.disconnecting(),
                None => true,
            })
            .count()
    }

    /// Whether a clue of `clue` at `corner` already has its full complement of connections.
    #[inline]
    pub(crate) fn is_saturated(&self, corner: Location, clue: u8) -> bool {
        self.connected_count(corner) == usize::from(clue)
    }

    /// Whether a clue of `clue` at `corner` has only as many connectable cells left as it
    /// demands.
    #[inline]
    pub(crate) fn is_anti_saturated(&self, corner: Location, clue: u8) -> bool {
        4 - self.disconnected_count(corner) == usize::from(clue)
    }

    /// Writes `orient(quadrant)` into every still undecided governed cell of `corner`.
    fn fill(&mut self, corner: Location, orient: fn(&Quadrant) -> Slant) {
        for quadrant in Quadrant::VARIANTS {
            let cell = quadrant.of(corner);
            if self.grid.get(cell) == Some(Slant::Unset) {
                self.grid.set(cell, orient(quadrant));
            }
        }
    }

    /// Attempts to discharge the clue of `clue` at `corner`, deciding its undecided cells if
    /// either deduction applies. Returns whether the clue was discharged.
    pub(crate) fn resolve(&mut self, corner: Location, clue: u8) -> bool {
        if self.is_saturated(corner, clue) {
            self.fill(corner, Quadrant::disconnecting);
            true
        } else if self.is_anti_saturated(corner, clue) {
            self.fill(corner, Quadrant::connecting);
            true
        } else {
            false
        }
    }

    /// Attempts every undischarged clue, over and over, until a full pass discharges none,
    /// then returns the grid snapshot reached.
    ///
    /// # Deductions
    /// A clue is *saturated* when as many of its governed cells point at it as it demands;
    /// every undecided one among them must then point away. Dually, a clue is
    /// *anti-saturated* when the cells still able to point at it are exactly as many as it
    /// demands; every undecided one must then point in. Either way the clue is discharged
    /// and never looked at again.
    ///
    /// Cells only move from undecided to decided and each discharge shrinks the clue set, so
    /// the fixed point is reached in at most as many passes as there are clues. Which clue
    /// is attempted first does not matter: a deduction that applies stays applicable until
    /// taken, so every order drains into the same grid.
    pub fn solve(&mut self) -> String {
        loop {
            let before = self.active.len();
            for (corner, clue) in self.active.iter().map(|(&corner, &clue)| (corner, clue)).collect_vec() {
                if self.resolve(corner, clue) {
                    self.active.shift_remove(&corner);
                }
            }

            if self.active.len() == before {
                break;
            }
        }

        self.grid.to_string()
    }

    /// How many clues the propagation has not discharged.
    pub fn unresolved_clues(&self) -> usize {
        self.active.len()
    }

    /// Draws the clue square and the cell square in one picture, `+` standing in for a
    /// clueless corner.
    pub fn render(&self) -> String {
        let corner_row = |y: usize| (0..self.puzzle.size())
            .map(|x| match self.puzzle.clue(Location(x, y)) {
                Some(value) => char::from(b'0' + value),
                None => '+',
            })
            .join("---");
        let cell_row = |y: usize| format!("|{}", (0..self.grid.size())
            .map(|x| format!(" {} |", self.grid.get(Location(x, y)).unwrap_or_default()))
            .join(""));

        (0..self.puzzle.size())
            .map(corner_row)
            .interleave((0..self.grid.size()).map(cell_row))
            .join("\n")
    }
}
