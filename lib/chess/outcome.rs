use super::Team;
use derive_more::Display;
use test_strategy::Arbitrary;

/// One of the possible outcomes of a match.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary)]
pub enum Outcome {
    #[display(fmt = "{_0} wins")]
    Victory(Team),

    /// Not reachable under the current rules, but representable.
    #[display(fmt = "draw")]
    Draw,
}

impl Outcome {
    /// Whether the outcome is a draw and neither team has won.
    pub fn is_draw(&self) -> bool {
        !self.is_decisive()
    }

    /// Whether the outcome is a decisive and one of the teams has won.
    pub fn is_decisive(&self) -> bool {
        matches!(self, Outcome::Victory(_))
    }

    /// The winning team, if the outcome is [decisive](`Self::is_decisive`).
    pub fn winner(&self) -> Option<Team> {
        match *self {
            Outcome::Victory(t) => Some(t),
            Outcome::Draw => None,
        }
    }
}
