use crate::chess::Player;
use derive_more::Display;
use std::ops::Not;
use test_strategy::Arbitrary;

/// One of the two alliances of players.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Arbitrary)]
#[repr(u8)]
pub enum Team {
    #[display(fmt = "Team A")]
    A,
    #[display(fmt = "Team B")]
    B,
}

impl Team {
    /// Both teams.
    pub const ALL: [Team; 2] = [Team::A, Team::B];

    /// The [`Player`]s in this team, in rotation order.
    pub fn members(&self) -> [Player; 2] {
        match self {
            Team::A => [Player::Green, Player::Blue],
            Team::B => [Player::Yellow, Player::Red],
        }
    }
}

impl Not for Team {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }
}

/// Per team counters.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Arbitrary)]
pub struct TeamStats {
    #[strategy(0u8..=2)]
    kings: u8,
    #[strategy(0u8..=TeamStats::MAX_SUMMONS)]
    summons: u8,
}

impl Default for TeamStats {
    fn default() -> Self {
        TeamStats::new(2)
    }
}

impl TeamStats {
    /// How many summons a team may use in a match.
    pub const MAX_SUMMONS: u8 = 2;

    /// Stats for a team with some kings on the board and no summons used.
    pub fn new(kings: u8) -> Self {
        TeamStats { kings, summons: 0 }
    }

    /// The number of kings alive.
    pub fn kings(&self) -> u8 {
        self.kings
    }

    /// The number of summons used so far.
    pub fn summons(&self) -> u8 {
        self.summons
    }

    /// Whether the team is entitled to a summon.
    ///
    /// A team earns a summon only while down to exactly one king, and at most
    /// [`TeamStats::MAX_SUMMONS`] times per match.
    pub fn can_summon(&self) -> bool {
        self.kings == 1 && self.summons < Self::MAX_SUMMONS
    }

    /// Whether the team has lost all of its kings.
    pub fn is_defeated(&self) -> bool {
        self.kings == 0
    }

    pub(crate) fn lose_king(&mut self) {
        self.kings = self.kings.saturating_sub(1);
    }

    pub(crate) fn summon_king(&mut self) {
        self.kings += 1;
        self.summons += 1;
    }
}
