use crate::chess::Team;
use crate::util::Integer;
use derive_more::Display;
use test_strategy::Arbitrary;

/// One of the four seats around the board.
///
/// Variants are listed in the clockwise rotation order of the match, starting
/// from the player who moves first.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Arbitrary)]
#[repr(u8)]
pub enum Player {
    /// Sits at the bottom edge.
    #[display(fmt = "Green")]
    Green,
    /// Sits at the left edge.
    #[display(fmt = "Yellow")]
    Yellow,
    /// Sits at the top edge.
    #[display(fmt = "Blue")]
    Blue,
    /// Sits at the right edge.
    #[display(fmt = "Red")]
    Red,
}

unsafe impl Integer for Player {
    type Repr = u8;
    const MIN: Self::Repr = Player::Green as _;
    const MAX: Self::Repr = Player::Red as _;
}

impl Player {
    /// The [`Team`] this player belongs to.
    #[inline(always)]
    pub fn team(&self) -> Team {
        match self {
            Player::Green | Player::Blue => Team::A,
            Player::Yellow | Player::Red => Team::B,
        }
    }

    /// The other player in the same [`Team`].
    #[inline(always)]
    pub fn teammate(&self) -> Player {
        match self {
            Player::Green => Player::Blue,
            Player::Blue => Player::Green,
            Player::Yellow => Player::Red,
            Player::Red => Player::Yellow,
        }
    }

    /// Whether both players belong to the same [`Team`].
    #[inline(always)]
    pub fn is_ally(&self, other: Player) -> bool {
        self.team() == other.team()
    }

    /// The player seated next in clockwise order.
    #[inline(always)]
    pub fn next(&self) -> Player {
        Player::new((self.get() + 1) % 4)
    }

    /// The direction this player's pawns advance in, as `(rows, cols)`.
    #[inline(always)]
    pub fn forward(&self) -> (i8, i8) {
        match self {
            Player::Green => (-1, 0),
            Player::Yellow => (0, 1),
            Player::Blue => (1, 0),
            Player::Red => (0, -1),
        }
    }
}
