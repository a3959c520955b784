//! Move notation: a row letter `A`..`J` followed by a column number `1`..`10`.

use core::fmt;

use crate::config::BOARD_SIZE;
use crate::geometry::Coord;

/// Why a move string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordParseError {
    /// Nothing but whitespace.
    Empty,
    /// First character is not a row letter on the board.
    InvalidRow(char),
    /// Column part is missing or not a 1–2 digit number.
    InvalidColumn,
    /// Column number is outside `1..=BOARD_SIZE`.
    ColumnOutOfRange(usize),
}

impl fmt::Display for CoordParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last_row = row_letter(BOARD_SIZE - 1);
        match self {
            CoordParseError::Empty => write!(f, "empty input"),
            CoordParseError::InvalidRow(ch) => {
                write!(f, "invalid row '{}' - must be a letter A-{}", ch, last_row)
            }
            CoordParseError::InvalidColumn => {
                write!(f, "missing or invalid column - must be a number 1-{}", BOARD_SIZE)
            }
            CoordParseError::ColumnOutOfRange(col) => {
                write!(f, "column {} out of bounds - must be 1-{}", col, BOARD_SIZE)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoordParseError {}

/// `?` for rows off the board.
fn row_letter(row: usize) -> char {
    if row < BOARD_SIZE {
        (b'A' + row as u8) as char
    } else {
        '?'
    }
}

/// Parse text such as `A1`, `j10` or ` c7 ` into a zero-indexed coordinate.
pub fn parse_coord(input: &str) -> Result<Coord, CoordParseError> {
    let input = input.trim();
    let mut chars = input.chars();
    let row_ch = chars.next().ok_or(CoordParseError::Empty)?.to_ascii_uppercase();
    if !row_ch.is_ascii_uppercase() || (row_ch as usize - 'A' as usize) >= BOARD_SIZE {
        return Err(CoordParseError::InvalidRow(row_ch));
    }
    let row = row_ch as usize - 'A' as usize;

    let digits = chars.as_str();
    if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoordParseError::InvalidColumn);
    }
    let col: usize = digits.parse().map_err(|_| CoordParseError::InvalidColumn)?;
    if col == 0 || col > BOARD_SIZE {
        return Err(CoordParseError::ColumnOutOfRange(col));
    }
    Ok((row, col - 1))
}

/// Displays a coordinate in move notation, e.g. `(0, 4)` as `A5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordLabel(pub Coord);

impl fmt::Display for CoordLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (row, col) = self.0;
        write!(f, "{}{}", row_letter(row), col + 1)
    }
}

/// Row letter of each board row, top to bottom.
pub fn row_letters() -> impl Iterator<Item = char> {
    (0..BOARD_SIZE).map(row_letter)
}
