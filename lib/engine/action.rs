use crate::chess::{IllegalMove, IllegalSummon, ImpossiblePass, Square};
use crate::engine::Phase;
use derive_more::{Display, Error, From};

/// The reason why an action was rejected by the [`Engine`][`crate::engine::Engine`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum InvalidAction {
    /// The action is not expected in the current phase.
    #[display(fmt = "no such action is expected in the {_0} phase")]
    #[from(ignore)]
    OutOfPhase(#[error(not(source))] Phase),

    #[display(fmt = "There is no piece on this tile.")]
    #[from(ignore)]
    EmptyTile(#[error(not(source))] Square),

    #[display(fmt = "This piece belongs to another player.")]
    #[from(ignore)]
    NotYourPiece(#[error(not(source))] Square),

    #[display(fmt = "This piece is frozen until its owner is revived.")]
    #[from(ignore)]
    NeutralPiece(#[error(not(source))] Square),

    #[display(fmt = "This piece cannot move with the current dice roll.")]
    #[from(ignore)]
    Immobile(#[error(not(source))] Square),

    #[display(fmt = "The selected piece cannot move to this tile.")]
    #[from(ignore)]
    IllegalDestination(#[error(not(source))] Square),

    #[display(fmt = "Target tile must be empty for summoning.")]
    #[from(ignore)]
    OccupiedTile(#[error(not(source))] Square),

    #[display(fmt = "{_0}")]
    Move(IllegalMove),

    #[display(fmt = "{_0}")]
    Summon(IllegalSummon),

    #[display(fmt = "{_0}")]
    Pass(ImpossiblePass),
}

impl InvalidAction {
    /// Whether the rejection is reported in the match log.
    ///
    /// Actions outside their phase are silently ignored.
    pub fn is_reported(&self) -> bool {
        !matches!(self, InvalidAction::OutOfPhase(_))
    }
}
