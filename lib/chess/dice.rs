use crate::chess::Role;
use derive_more::{Display, Error};
use std::str::FromStr;
use test_strategy::Arbitrary;

/// A face of the four-sided die.
///
/// Each face activates a fixed set of [`Role`]s for the turn.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Arbitrary)]
#[repr(u8)]
pub enum Dice {
    #[display(fmt = "1")]
    One = 1,
    #[display(fmt = "3")]
    Three = 3,
    #[display(fmt = "4")]
    Four = 4,
    #[display(fmt = "6")]
    Six = 6,
}

impl Dice {
    /// All faces of the die.
    pub const FACES: [Dice; 4] = [Dice::One, Dice::Three, Dice::Four, Dice::Six];

    /// The [`Role`]s this face activates.
    pub fn roles(&self) -> &'static [Role] {
        match self {
            Dice::One => &[Role::Boat],
            Dice::Three => &[Role::Knight],
            Dice::Four => &[Role::Rook],
            Dice::Six => &[Role::King, Role::Pawn],
        }
    }

    /// Whether this face activates pieces of a [`Role`].
    #[inline(always)]
    pub fn activates(&self, r: Role) -> bool {
        self.roles().contains(&r)
    }
}

/// The reason why converting to [`Dice`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "the die only has faces 1, 3, 4 and 6")]
pub struct InvalidDice;

impl TryFrom<u8> for Dice {
    type Error = InvalidDice;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Dice::One),
            3 => Ok(Dice::Three),
            4 => Ok(Dice::Four),
            6 => Ok(Dice::Six),
            _ => Err(InvalidDice),
        }
    }
}

impl From<Dice> for u8 {
    fn from(d: Dice) -> Self {
        d as u8
    }
}

impl FromStr for Dice {
    type Err = InvalidDice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u8>().map_err(|_| InvalidDice)?.try_into()
    }
}
