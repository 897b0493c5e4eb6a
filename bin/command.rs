use derive_more::{Display, Error, From};
use lib::chess::{Dice, InvalidDice, ParseSquareError, Square};
use std::str::FromStr;
use test_strategy::Arbitrary;

/// A line typed by the player.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Arbitrary)]
pub enum Command {
    /// Roll the die, or submit a given face.
    #[display(fmt = "roll")]
    Roll(Option<Dice>),

    /// Click on a tile.
    #[display(fmt = "click {_0}")]
    Click(Square),

    #[display(fmt = "restart")]
    Restart,

    #[display(fmt = "show")]
    Show,

    #[display(fmt = "quit")]
    Quit,
}

/// The reason why parsing a [`Command`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseCommandError {
    #[display(fmt = "unknown command `{_0}`, expected one of roll, click, restart, show or quit")]
    #[from(ignore)]
    Unknown(#[error(not(source))] String),

    #[display(fmt = "{_0}")]
    Dice(InvalidDice),

    #[display(fmt = "failed to parse tile, expected `row,col`")]
    Square(ParseSquareError),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (head, tail) = s.split_once(char::is_whitespace).unwrap_or((s, ""));

        match (head, tail.trim()) {
            ("roll", "") => Ok(Command::Roll(None)),
            ("roll", face) => Ok(Command::Roll(Some(face.parse()?))),
            ("click", tile) => Ok(Command::Click(tile.parse()?)),
            ("restart", "") => Ok(Command::Restart),
            ("show", "") => Ok(Command::Show),
            ("quit" | "exit", "") => Ok(Command::Quit),
            _ if s.contains(',') => Ok(Command::Click(s.parse()?)),
            _ => Err(ParseCommandError::Unknown(s.into())),
        }
    }
}
