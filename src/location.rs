type Coord = usize;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Debug)]
/// A location `(x, y)` on a puzzle. The top left corner is `Location(0, 0)`.
///
/// Corners and cells share one index space: the cell at `(x, y)` is the one whose top left
/// corner is the corner at `(x, y)`, so a corner grid of side `n + 1` carries a cell grid of
/// side `n`.
pub struct Location(pub Coord, pub Coord);

impl Location {
    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.1, self.0)
    }
    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        // a step off the low edge wraps to a huge coordinate and fails the same bounds checks
        // as a step off the high edge
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }
}

/// All locations of a `size` by `size` square in row-major (column-fastest) order.
/// Restartable: every call yields a fresh iterator.
pub(crate) fn square_coords(size: usize) -> impl Iterator<Item = Location> {
    (0..size).flat_map(move |y| (0..size).map(move |x| Location(x, y)))
}
