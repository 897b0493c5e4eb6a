use crate::util::Integer;
use derive_more::{Display, Error};
use std::fmt::{self, Formatter, Write};
use std::str::FromStr;
use test_strategy::Arbitrary;

/// Capture ranking of a [`Role`].
///
/// A [`Category::Lower`] piece may never capture a [`Category::Higher`] piece.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Arbitrary)]
pub enum Category {
    #[display(fmt = "lower")]
    Lower,
    #[display(fmt = "higher")]
    Higher,
}

/// The type of a [`Piece`][`crate::chess::Piece`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Arbitrary)]
#[repr(u8)]
pub enum Role {
    Pawn,
    Boat,
    Knight,
    /// Also known as the elephant.
    Rook,
    King,
}

impl Role {
    /// This role's [`Category`].
    #[inline(always)]
    pub fn category(&self) -> Category {
        match self {
            Role::Pawn | Role::Boat => Category::Lower,
            Role::Knight | Role::Rook | Role::King => Category::Higher,
        }
    }

    /// The name printed in the match log.
    pub fn name(&self) -> &'static str {
        match self {
            Role::Pawn => "PAWN",
            Role::Boat => "BOAT",
            Role::Knight => "KNIGHT",
            Role::Rook => "ROOK",
            Role::King => "KING",
        }
    }
}

unsafe impl Integer for Role {
    type Repr = u8;
    const MIN: Self::Repr = Role::Pawn as _;
    const MAX: Self::Repr = Role::King as _;
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Role::Pawn => f.write_char('p'),
            Role::Boat => f.write_char('b'),
            Role::Knight => f.write_char('n'),
            Role::Rook => f.write_char('r'),
            Role::King => f.write_char('k'),
        }
    }
}

/// The reason why parsing the piece.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse piece")]
pub struct ParseRoleError;

impl FromStr for Role {
    type Err = ParseRoleError;

    #[inline(always)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "p" => Ok(Role::Pawn),
            "b" => Ok(Role::Boat),
            "n" => Ok(Role::Knight),
            "r" => Ok(Role::Rook),
            "k" => Ok(Role::King),
            _ => Err(ParseRoleError),
        }
    }
}
