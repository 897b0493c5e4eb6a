use crate::chess::{Bitboard, Dice, Move, Position, Square, Summon};
use crate::engine::{Event, InvalidAction, Phase};
use tracing::{debug, info};

/// A snapshot of a match.
///
/// Combines the rules state with what the players see and do around it: the
/// phase, the pending dice roll, the selected piece with its destinations, and
/// the match log.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MatchState {
    position: Position,
    phase: Phase,
    dice: Option<Dice>,
    selected: Option<Square>,
    destinations: Bitboard,
    log: Vec<Event>,
    skips: u32,
}

impl MatchState {
    /// A fresh match from a [`Position`], the log holding a single greeting.
    pub fn new(position: Position, greeting: Event) -> Self {
        let phase = match position.outcome() {
            Some(_) => Phase::GameOver,
            None if position.is_summoning() => Phase::Summon,
            None => Phase::Roll,
        };

        MatchState {
            position,
            phase,
            dice: None,
            selected: None,
            destinations: Bitboard::empty(),
            log: vec![greeting],
            skips: 0,
        }
    }

    /// The rules state.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The dice value rolled this turn, if any.
    pub fn dice(&self) -> Option<Dice> {
        self.dice
    }

    /// The selected tile, if any.
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Legal destinations of the selected piece.
    pub fn destinations(&self) -> Bitboard {
        self.destinations
    }

    /// The match log, oldest entry first.
    pub fn log(&self) -> &[Event] {
        &self.log
    }

    /// How many turns in a row were skipped for lack of legal moves.
    pub fn skips(&self) -> u32 {
        self.skips
    }

    pub(super) fn record(&mut self, e: Event) {
        self.log.push(e);
    }

    pub(super) fn roll(&mut self, dice: Dice) -> Result<(), InvalidAction> {
        if self.phase != Phase::Roll {
            return Err(InvalidAction::OutOfPhase(self.phase));
        }

        let player = self.position.turn();
        self.record(Event::Rolled(player, dice));

        if self.position.has_moves(dice) {
            debug!(%player, %dice, "rolled");
            self.skips = 0;
            self.dice = Some(dice);
            self.phase = Phase::Select;
        } else {
            debug!(%player, %dice, "no legal moves, skipping turn");
            self.position.pass()?;
            self.record(Event::Skipped(player, dice));
            self.skips += 1;
            self.dice = None;
        }

        Ok(())
    }

    pub(super) fn click(&mut self, sq: Square) -> Result<(), InvalidAction> {
        match self.phase {
            Phase::Select => {
                let destinations = self.eligible(sq)?;
                self.select(sq, destinations);
                Ok(())
            }

            Phase::Move if self.selected == Some(sq) => {
                debug!(%sq, "deselected");
                self.selected = None;
                self.destinations = Bitboard::empty();
                self.phase = Phase::Select;
                Ok(())
            }

            Phase::Move => match self.eligible(sq) {
                Ok(destinations) => {
                    self.select(sq, destinations);
                    Ok(())
                }

                Err(_) if self.destinations.contains(sq) => self.play(sq),
                Err(_) => Err(InvalidAction::IllegalDestination(sq)),
            },

            Phase::Summon if self.position.board()[sq].is_some() => {
                Err(InvalidAction::OccupiedTile(sq))
            }

            Phase::Summon => self.summon(sq),

            Phase::Roll | Phase::GameOver => Err(InvalidAction::OutOfPhase(self.phase)),
        }
    }

    /// Legal destinations of a piece the player to move may select.
    fn eligible(&self, sq: Square) -> Result<Bitboard, InvalidAction> {
        let dice = self.dice.ok_or(InvalidAction::OutOfPhase(self.phase))?;

        match self.position.board()[sq] {
            None => Err(InvalidAction::EmptyTile(sq)),
            Some(p) if p.owner() != self.position.turn() => Err(InvalidAction::NotYourPiece(sq)),
            Some(p) if p.is_neutral() => Err(InvalidAction::NeutralPiece(sq)),
            Some(_) => match self.position.moves(sq, dice) {
                bb if bb.is_empty() => Err(InvalidAction::Immobile(sq)),
                bb => Ok(bb),
            },
        }
    }

    fn select(&mut self, sq: Square, destinations: Bitboard) {
        debug!(%sq, moves = destinations.len(), "selected");
        self.selected = Some(sq);
        self.destinations = destinations;
        self.phase = Phase::Move;
    }

    fn play(&mut self, whither: Square) -> Result<(), InvalidAction> {
        let (Some(whence), Some(dice)) = (self.selected, self.dice) else {
            return Err(InvalidAction::OutOfPhase(self.phase));
        };

        let player = self.position.turn();
        let mc = self.position.play(Move(whence, whither), dice)?;
        debug!(player = %player, m = %mc.m, "moved");

        if let Some(victim) = mc.capture {
            self.record(Event::Captured {
                player,
                victim: victim.owner(),
                role: victim.role(),
            });
        }

        match mc.summon {
            None => {}
            Some(Summon::Placement) => self.record(Event::SummonEarned(player)),
            Some(Summon::Revival(teammate)) => self.record(Event::Revived(player, teammate)),
            Some(Summon::Ascension) => self.record(Event::Ascended(player)),
        }

        self.selected = None;
        self.destinations = Bitboard::empty();
        self.settle();

        Ok(())
    }

    fn summon(&mut self, sq: Square) -> Result<(), InvalidAction> {
        let player = self.position.turn();
        let king = self.position.summon(sq)?;
        debug!(%player, %sq, owner = %king.owner(), "summoned");

        if king.owner() == player {
            self.record(Event::Summoned(player, sq));
        } else {
            self.record(Event::SummonedRevival(player, king.owner()));
        }

        self.settle();
        Ok(())
    }

    /// Moves on to the phase implied by the rules state.
    fn settle(&mut self) {
        if let Some(outcome) = self.position.outcome() {
            info!(%outcome, "match over");
            self.phase = Phase::GameOver;
        } else if self.position.is_summoning() {
            self.phase = Phase::Summon;
        } else {
            self.phase = Phase::Roll;
            self.dice = None;
        }
    }
}
