use crate::chess::{Player, Role};
use derive_more::{Display, From};
use std::fmt;
use test_strategy::Arbitrary;

/// Identifies a [`Piece`] uniquely within a match.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Arbitrary, From)]
#[display(fmt = "#{_0}")]
pub struct PieceId(u32);

/// A chess [piece][`Role`] owned by a [`Player`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Arbitrary)]
pub struct Piece {
    id: PieceId,
    role: Role,
    owner: Player,
    neutral: bool,
}

impl Piece {
    /// Constructs an active [`Piece`].
    #[inline(always)]
    pub fn new(id: PieceId, role: Role, owner: Player) -> Self {
        Piece {
            id,
            role,
            owner,
            neutral: false,
        }
    }

    /// This piece's identity.
    #[inline(always)]
    pub fn id(&self) -> PieceId {
        self.id
    }

    /// This piece's [`Role`].
    #[inline(always)]
    pub fn role(&self) -> Role {
        self.role
    }

    /// The [`Player`] who owns this piece.
    #[inline(always)]
    pub fn owner(&self) -> Player {
        self.owner
    }

    /// Whether this piece is frozen because its owner has been eliminated.
    ///
    /// Neutral pieces cannot move, but may still be captured.
    #[inline(always)]
    pub fn is_neutral(&self) -> bool {
        self.neutral
    }

    /// Freezes or unfreezes this piece.
    #[inline(always)]
    pub fn set_neutral(&mut self, neutral: bool) {
        self.neutral = neutral;
    }
}

/// Prints the owner's initial followed by the role, in uppercase if neutral.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let owner = match self.owner {
            Player::Green => 'g',
            Player::Yellow => 'y',
            Player::Blue => 'b',
            Player::Red => 'r',
        };

        let s = format!("{owner}{}", self.role);
        if self.neutral {
            f.write_str(&s.to_uppercase())
        } else {
            f.write_str(&s)
        }
    }
}
