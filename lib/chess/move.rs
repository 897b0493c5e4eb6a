use crate::chess::{ParseSquareError, Piece, Player, Role, Square};
use derive_more::{DebugCustom, Display, Error, From};
use std::str::FromStr;
use test_strategy::Arbitrary;

/// A move from one [`Square`] to another.
#[derive(DebugCustom, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary)]
#[filter(#self.0 != #self.1)]
#[debug(fmt = "Move({self})")]
#[display(fmt = "{_0} -> {_1}")]
pub struct Move(pub Square, pub Square);

impl Move {
    /// The source [`Square`].
    pub fn whence(&self) -> Square {
        self.0
    }

    /// The destination [`Square`].
    pub fn whither(&self) -> Square {
        self.1
    }
}

/// The reason why the string is not valid move.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse move, expected `row,col -> row,col`")]
pub struct ParseMoveError(#[error(not(source))] ParseSquareError);

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once("->") {
            Some((whence, whither)) => Ok(Move(whence.parse()?, whither.parse()?)),
            None => Err(ParseMoveError(ParseSquareError)),
        }
    }
}

/// How a move earned the right to a new king.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary)]
pub enum Summon {
    /// A king capture left the mover's team with a single king, a new one is to
    /// be placed on an empty tile of the mover's choosing.
    #[display(fmt = "king capture")]
    Placement,

    /// A pawn reached a summon tile and was sacrificed to revive the mover's teammate.
    #[display(fmt = "pawn summon, reviving {_0}")]
    Revival(Player),

    /// A pawn reached a summon tile and ascended to king.
    #[display(fmt = "pawn summon")]
    Ascension,
}

/// The effects of a move played in a [`Position`][`crate::chess::Position`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MoveContext {
    /// The move played.
    pub m: Move,
    /// The [`Role`] of the piece moved.
    pub role: Role,
    /// The piece captured, if any.
    pub capture: Option<Piece>,
    /// The summon earned, if any.
    pub summon: Option<Summon>,
}

impl MoveContext {
    /// Whether this is a capture move.
    pub fn is_capture(&self) -> bool {
        self.capture.is_some()
    }

    /// Whether a king was captured.
    pub fn is_king_capture(&self) -> bool {
        self.capture.is_some_and(|p| p.role() == Role::King)
    }

    /// Whether this move neither captured nor summoned.
    pub fn is_quiet(&self) -> bool {
        !self.is_capture() && self.summon.is_none()
    }
}
