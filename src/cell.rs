use std::fmt::{Display, Formatter};

/// The orientation of the diagonal in one cell.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Slant {
    /// A `/` diagonal, joining the cell's bottom left and top right corners.
    Forward,
    /// A `\` diagonal, joining the cell's top left and bottom right corners.
    Backward,
    /// No diagonal decided yet.
    #[default]
    Unset,
}

impl Display for Slant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            Slant::Forward => '/',
            Slant::Backward => '\\',
            Slant::Unset => '_',
        })
    }
}
