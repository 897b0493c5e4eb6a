use derive_more::Display;
use test_strategy::Arbitrary;

/// The stage of a turn, determining which action the engine awaits.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary)]
pub enum Phase {
    /// Awaiting a dice roll.
    #[display(fmt = "roll")]
    Roll,
    /// Awaiting the selection of a piece to move.
    #[display(fmt = "select")]
    Select,
    /// A piece is selected, awaiting its destination.
    #[display(fmt = "move")]
    Move,
    /// Awaiting an empty tile to place a summoned king.
    #[display(fmt = "summon")]
    Summon,
    /// The match is over.
    #[display(fmt = "game over")]
    GameOver,
}

impl Phase {
    /// Whether the engine awaits tile clicks in this phase.
    pub fn accepts_clicks(&self) -> bool {
        matches!(self, Phase::Select | Phase::Move | Phase::Summon)
    }

    /// Whether the match is over.
    pub fn is_terminal(&self) -> bool {
        *self == Phase::GameOver
    }
}
