//! Breadboard position value types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Column identifier of a breadboard hole.
///
/// `A..=E` form the left row-half and `F..=J` the right row-half of the main
/// grid. The four rail variants identify the full-length power buses flanking
/// the grid; serde names match the collaborator vocabulary (`+L`, `-L`, `+R`,
/// `-R`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    #[serde(rename = "a")]
    A,
    #[serde(rename = "b")]
    B,
    #[serde(rename = "c")]
    C,
    #[serde(rename = "d")]
    D,
    #[serde(rename = "e")]
    E,
    #[serde(rename = "f")]
    F,
    #[serde(rename = "g")]
    G,
    #[serde(rename = "h")]
    H,
    #[serde(rename = "i")]
    I,
    #[serde(rename = "j")]
    J,
    /// Positive power rail, left side.
    #[serde(rename = "+L")]
    PosLeft,
    /// Negative power rail, left side.
    #[serde(rename = "-L")]
    NegLeft,
    /// Positive power rail, right side.
    #[serde(rename = "+R")]
    PosRight,
    /// Negative power rail, right side.
    #[serde(rename = "-R")]
    NegRight,
}

/// One electrically-bussed 5-hole group within a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowHalf {
    /// Columns `a..=e`.
    Left,
    /// Columns `f..=j`.
    Right,
}

impl Column {
    /// Left row-half columns in board order.
    pub const LEFT_HALF: [Column; 5] = [Column::A, Column::B, Column::C, Column::D, Column::E];

    /// Right row-half columns in board order.
    pub const RIGHT_HALF: [Column; 5] = [Column::F, Column::G, Column::H, Column::I, Column::J];

    /// True for the four power-rail identifiers.
    #[inline]
    pub fn is_rail(self) -> bool {
        matches!(
            self,
            Column::PosLeft | Column::NegLeft | Column::PosRight | Column::NegRight
        )
    }

    /// Row-half this column belongs to, `None` for rails.
    #[inline]
    pub fn half(self) -> Option<RowHalf> {
        match self {
            Column::A | Column::B | Column::C | Column::D | Column::E => Some(RowHalf::Left),
            Column::F | Column::G | Column::H | Column::I | Column::J => Some(RowHalf::Right),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Column::A => "a",
            Column::B => "b",
            Column::C => "c",
            Column::D => "d",
            Column::E => "e",
            Column::F => "f",
            Column::G => "g",
            Column::H => "h",
            Column::I => "i",
            Column::J => "j",
            Column::PosLeft => "+L",
            Column::NegLeft => "-L",
            Column::PosRight => "+R",
            Column::NegRight => "-R",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved breadboard position.
///
/// Created fresh per resolution call and never mutated afterwards. A position
/// is valid only when both the row and the column were resolved; partially
/// resolved values keep whatever was found so callers can still report it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BreadboardPosition {
    /// Row number, `1..=30` counted from the top of the board.
    pub row: Option<u8>,
    /// Column or rail identifier.
    pub column: Option<Column>,
}

impl BreadboardPosition {
    /// A position that failed to resolve entirely.
    pub const INVALID: BreadboardPosition = BreadboardPosition {
        row: None,
        column: None,
    };

    /// Fully resolved position.
    #[inline]
    pub fn new(row: u8, column: Column) -> Self {
        Self {
            row: Some(row),
            column: Some(column),
        }
    }

    /// True iff both row and column were resolved.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.row.is_some() && self.column.is_some()
    }

    /// Board label in the `a1` / `+L9` form, `None` unless valid.
    pub fn label(&self) -> Option<String> {
        match (self.row, self.column) {
            (Some(row), Some(column)) => Some(format!("{column}{row}")),
            _ => None,
        }
    }
}

impl fmt::Display for BreadboardPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.row, self.column) {
            (Some(row), Some(column)) => write!(f, "{column}{row}"),
            _ => f.write_str("invalid"),
        }
    }
}
