use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ndarray::Array2;

use crate::location::{square_coords, Location};
use crate::seed::{self, SeedError, BLANK};

/// An unsolved puzzle: a square of corner clues.
///
/// A clue on a corner gives the number of adjacent cells whose diagonal touches that corner.
/// Corners without a clue constrain nothing.
#[derive(Clone, Debug)]
pub struct Puzzle {
    clues: Array2<Option<u8>>,
}

impl Puzzle {
    /// Decodes `seed` into a puzzle.
    ///
    /// The seed must expand to a nonzero square count of entries, and every clue in it must be
    /// at most 4.
    pub fn parse(seed: &str) -> Result<Self, SeedError> {
        let entries = seed::expand(seed)?;
        let side = seed::side_of(entries.len())
            .ok_or(SeedError::NotSquare { len: entries.len() })?;

        if let Some((index, &value)) = entries.iter().find_position(|&&entry| entry > 4) {
            return Err(SeedError::ClueOutOfRange {
                value,
                at: Location(index % side, index / side),
            });
        }

        let clues = entries
            .into_iter()
            .map(|entry| (entry != BLANK).then_some(entry as u8))
            .collect();
        // shape was validated by side_of
        Ok(Self { clues: Array2::from_shape_vec((side, side), clues).unwrap() })
    }

    /// The side length of the corner square. The cell square it carries is one shorter.
    pub fn size(&self) -> usize {
        self.clues.nrows()
    }

    /// The clue on the corner at `location`. Out-of-range locations read as clueless corners.
    pub fn clue(&self, location: Location) -> Option<u8> {
        self.clues.get(location.as_index()).copied().flatten()
    }

    /// All corner locations in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Location> {
        square_coords(self.size())
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.clues.rows().into_iter()
            .map(|row| row.iter()
                .map(|clue| match clue {
                    Some(value) => char::from(b'0' + value),
                    None => '_',
                })
                .join(" "))
            .join("\n"))
    }
}
