use serde::{Deserialize, Serialize};

/// One square of the finished field.
///
/// `Count(n)` only ever holds `n` in `[1, 8]`; a cell with zero adjacent
/// mines stays `Empty` rather than becoming `Count(0)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Mine,
    Count(u8),
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    /// Adjacent-mine count as seen by a player; mines have no count.
    pub const fn adjacent_mines(self) -> Option<u8> {
        match self {
            Self::Empty => Some(0),
            Self::Count(n) => Some(n),
            Self::Mine => None,
        }
    }

    /// Records one more adjacent mine. Mines are left untouched.
    pub(crate) const fn bump(self) -> Self {
        match self {
            Self::Empty => Self::Count(1),
            Self::Count(n) => Self::Count(n + 1),
            Self::Mine => Self::Mine,
        }
    }

    /// Character the view layer renders for this cell.
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Mine => 'X',
            Self::Count(n) => (b'0' + n) as char,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}
