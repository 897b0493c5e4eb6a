use crate::chess::Bitboard;
use crate::util::Integer;
use derive_more::{Display, Error};
use std::{fmt, str::FromStr};
use test_strategy::Arbitrary;

/// A tile on the 8×8 board, addressed by row and column.
///
/// Row `0` is the top edge and column `0` is the left edge.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Arbitrary)]
#[repr(transparent)]
pub struct Square(#[strategy(0u8..64)] u8);

impl Square {
    /// The length of each side of the board.
    pub const SIDE: u8 = 8;

    /// Constructs [`Square`] from a pair of row and column.
    ///
    /// Both coordinates must be in the range `0..8`.
    #[inline(always)]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < Self::SIDE && col < Self::SIDE);
        <Self as Integer>::new(row * Self::SIDE + col)
    }

    /// Constructs [`Square`] from signed coordinates, if on the board.
    #[inline(always)]
    pub fn checked(row: i8, col: i8) -> Option<Self> {
        let side = Self::SIDE as i8;
        if (0..side).contains(&row) && (0..side).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// This square's row.
    #[inline(always)]
    pub fn row(&self) -> u8 {
        self.get() / Self::SIDE
    }

    /// This square's column.
    #[inline(always)]
    pub fn col(&self) -> u8 {
        self.get() % Self::SIDE
    }

    /// The square displaced by the given number of rows and columns, if on the board.
    #[inline(always)]
    pub fn offset(&self, dr: i8, dc: i8) -> Option<Self> {
        Square::checked(self.row() as i8 + dr, self.col() as i8 + dc)
    }

    /// Returns a [`Bitboard`] that only contains this square.
    #[inline(always)]
    pub fn bitboard(self) -> Bitboard {
        Bitboard::new(1 << self.get())
    }
}

unsafe impl Integer for Square {
    type Repr = u8;
    const MIN: Self::Repr = 0;
    const MAX: Self::Repr = 63;
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square{self}")
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse square, expected `row,col` with both in 0..8")]
pub struct ParseSquareError;

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .unwrap_or(s);

        let (row, col) = s.split_once(',').ok_or(ParseSquareError)?;
        let row: i8 = row.trim().parse().map_err(|_| ParseSquareError)?;
        let col: i8 = col.trim().parse().map_err(|_| ParseSquareError)?;
        Square::checked(row, col).ok_or(ParseSquareError)
    }
}
