use crate::chess::{Dice, Player, Role, Square};
use crate::engine::InvalidAction;
use derive_more::Display;

/// An entry in the match log.
#[derive(Debug, Display, Clone, Eq, PartialEq)]
pub enum Event {
    #[display(fmt = "Welcome to Chaturanga! {_0} to roll.")]
    Welcome(Player),

    #[display(fmt = "Game Restarted!")]
    Restarted,

    #[display(fmt = "{_0} rolled a {_1}!")]
    Rolled(Player, Dice),

    #[display(fmt = "{_0} has no moves for {_1}. Skipping turn.")]
    Skipped(Player, Dice),

    #[display(fmt = "{player} captured {victim}'s {}!", "role.name()")]
    Captured {
        player: Player,
        victim: Player,
        role: Role,
    },

    #[display(fmt = "{_0} sacrificed a Pawn to REVIVE {_1}!")]
    Revived(Player, Player),

    #[display(fmt = "{_0}'s Pawn ascended to KING!")]
    Ascended(Player),

    #[display(fmt = "{_0} earned a King Summon! Select an empty tile.")]
    SummonEarned(Player),

    #[display(fmt = "{} summoned a new King at [{}, {}]!", _0, "_1.row()", "_1.col()")]
    Summoned(Player, Square),

    #[display(fmt = "{_0} summoned a King to REVIVE {_1}!")]
    SummonedRevival(Player, Player),

    /// An action the player attempted but the rules forbid.
    #[display(fmt = "{_0}")]
    Rejected(InvalidAction),
}
