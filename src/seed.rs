use std::error::Error;
use std::fmt::{Display, Formatter};

use itertools::repeat_n;

use crate::location::Location;

/// The decode-level stand-in for a corner with no clue.
pub(crate) const BLANK: i8 = -1;

/// Failure to interpret a seed string as a puzzle.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SeedError {
    /// The seed contains a character outside `[0-9a-z]`.
    UnknownSymbol {
        /// The offending character.
        symbol: char,
        /// Its byte offset in the seed.
        offset: usize,
    },
    /// The seed does not expand to a nonzero square number of entries.
    NotSquare {
        /// The expanded length.
        len: usize,
    },
    /// A digit in the seed exceeds the largest satisfiable clue.
    ClueOutOfRange {
        /// The decoded clue value.
        value: i8,
        /// The corner it would have annotated.
        at: Location,
    },
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSymbol { symbol, offset } => {
                write!(f, "unrecognized seed symbol {:?} at offset {}", symbol, offset)
            }
            Self::NotSquare { len } => {
                write!(f, "seed expands to {} entries, which is not a nonzero square", len)
            }
            Self::ClueOutOfRange { value, at } => {
                write!(f, "clue {} at ({}, {}) exceeds 4", value, at.0, at.1)
            }
        }
    }
}

impl Error for SeedError {}

/// Expands a seed into the flat row-major corner entries it encodes.
///
/// A digit stands for itself and a letter `a` through `z` for a run of one through twenty-six
/// [`BLANK`] entries. No shape constraint is applied here; see [`side_of`].
pub(crate) fn expand(seed: &str) -> Result<Vec<i8>, SeedError> {
    let mut entries = Vec::new();
    for (offset, symbol) in seed.char_indices() {
        match symbol {
            '0'..='9' => entries.push((symbol as u8 - b'0') as i8),
            'a'..='z' => {
                let run = symbol as usize - 'a' as usize + 1;
                entries.extend(repeat_n(BLANK, run));
            }
            _ => return Err(SeedError::UnknownSymbol { symbol, offset }),
        }
    }
    Ok(entries)
}

/// The side length of a square with `len` entries, or `None` if `len` is zero or not a
/// perfect square.
pub(crate) fn side_of(len: usize) -> Option<usize> {
    let side = (len as f64).sqrt().round() as usize;
    (len != 0 && side * side == len).then_some(side)
}
