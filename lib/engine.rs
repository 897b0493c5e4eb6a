use crate::chess::{Dice, Position, Square};
use std::sync::Arc;
use tracing::{instrument, warn};

mod action;
mod event;
mod phase;
mod state;

pub use action::*;
pub use event::*;
pub use phase::*;
pub use state::*;

/// Drives a match of Chaturaji.
///
/// The engine is the sole mutator of the [`MatchState`]. Every accepted action
/// produces a whole new snapshot, so observers holding on to a previous one
/// never see a half applied transition.
#[derive(Debug, Clone)]
pub struct Engine {
    initial: Position,
    state: Arc<MatchState>,
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new(Position::default())
    }
}

impl Engine {
    /// Starts a match from a [`Position`].
    pub fn new(pos: Position) -> Self {
        let greeting = Event::Welcome(pos.turn());
        Engine {
            state: Arc::new(MatchState::new(pos.clone(), greeting)),
            initial: pos,
        }
    }

    /// The current snapshot of the match.
    pub fn state(&self) -> Arc<MatchState> {
        self.state.clone()
    }

    /// Submits the value rolled by the player to move.
    ///
    /// If the player has no legal moves for this value, the turn is skipped at once.
    #[instrument(level = "debug", skip(self), err)]
    pub fn roll(&mut self, dice: Dice) -> Result<(), InvalidAction> {
        self.apply(|s| s.roll(dice))
    }

    /// Submits a click on a tile of the board.
    #[instrument(level = "debug", skip(self), err)]
    pub fn click(&mut self, sq: Square) -> Result<(), InvalidAction> {
        self.apply(|s| s.click(sq))
    }

    /// Discards the match and starts over from the initial position.
    #[instrument(level = "debug", skip(self))]
    pub fn restart(&mut self) {
        self.state = Arc::new(MatchState::new(self.initial.clone(), Event::Restarted));
    }

    fn apply<F>(&mut self, f: F) -> Result<(), InvalidAction>
    where
        F: FnOnce(&mut MatchState) -> Result<(), InvalidAction>,
    {
        let mut next = MatchState::clone(&self.state);

        match f(&mut next) {
            Ok(()) => {
                self.state = Arc::new(next);
                Ok(())
            }

            Err(e) => {
                if e.is_reported() {
                    warn!(reason = %e, "action rejected");
                    let mut next = MatchState::clone(&self.state);
                    next.record(Event::Rejected(e.clone()));
                    self.state = Arc::new(next);
                }

                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::Player;
    use test_strategy::proptest;

    #[test]
    fn default_engine_greets_green() {
        let e = Engine::default();
        assert_eq!(e.state().log(), &[Event::Welcome(Player::Green)]);
        assert_eq!(e.state().phase(), Phase::Roll);
    }

    #[proptest]
    fn snapshots_are_not_affected_by_later_actions(d: Dice) {
        let mut e = Engine::default();
        let before = e.state();
        e.roll(d)?;
        assert_eq!(before.phase(), Phase::Roll);
        assert_eq!(before.log().len(), 1);
        assert_ne!(e.state(), before);
    }

    #[proptest]
    fn out_of_phase_actions_leave_the_snapshot_untouched(sq: Square) {
        let mut e = Engine::default();
        let before = e.state();
        assert_eq!(e.click(sq), Err(InvalidAction::OutOfPhase(Phase::Roll)));
        assert!(Arc::ptr_eq(&before, &e.state()));
    }

    #[test]
    fn rejected_clicks_are_logged_without_other_changes() {
        let mut e = Engine::default();
        e.roll(Dice::Six).unwrap();
        let before = e.state();

        let sq = Square::new(4, 4);
        assert_eq!(e.click(sq), Err(InvalidAction::EmptyTile(sq)));

        let after = e.state();
        assert_eq!(after.phase(), before.phase());
        assert_eq!(after.position(), before.position());
        assert_eq!(after.log().len(), before.log().len() + 1);
        assert_eq!(
            after.log().last(),
            Some(&Event::Rejected(InvalidAction::EmptyTile(sq)))
        );
    }

    #[proptest]
    fn restart_returns_to_the_initial_position(d: Dice) {
        let mut e = Engine::default();
        e.roll(d)?;
        e.restart();

        let s = e.state();
        assert_eq!(s.position(), &Position::default());
        assert_eq!(s.phase(), Phase::Roll);
        assert_eq!(s.dice(), None);
        assert_eq!(s.log(), &[Event::Restarted]);
    }
}
