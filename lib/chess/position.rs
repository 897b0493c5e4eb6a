use crate::chess::{rules, Bitboard, Board, Dice, Move, MoveContext, Outcome, Piece, Player};
use crate::chess::{Role, Square, Summon, Team, TeamStats};
use crate::util::Integer;
use derive_more::{Display, Error};
use std::iter::successors;
use tracing::{debug, error, instrument};

/// Represents an illegal [`Move`] in a given [`Position`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "move `{_0}` is illegal in this position")]
pub struct IllegalMove(#[error(not(source))] pub Move);

/// Represents a summon that cannot be placed on a given [`Square`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "cannot summon a king on `{_0}`")]
pub struct IllegalSummon(#[error(not(source))] pub Square);

/// Represents an impossible pass in a given [`Position`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "passing the turn is not possible in this position")]
pub struct ImpossiblePass;

/// The rules state of a match.
///
/// Holds the board, the per team counters, which players are still in the match,
/// whose turn it is and, once decided, the outcome. Session concerns such as the
/// dice value or piece selection live elsewhere.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Position {
    board: Board,
    teams: [TeamStats; 2],
    alive: [bool; 4],
    turn: Player,
    summoning: bool,
    outcome: Option<Outcome>,
}

impl Default for Position {
    fn default() -> Self {
        Position::new(Board::default(), Player::Green)
    }
}

impl Position {
    /// Sets up a position from an arbitrary [`Board`].
    ///
    /// Each team starts with as many kings as it has on the board and no summons
    /// used. Players without a king are out of the match and their pieces are
    /// neutral. If `turn` is out of the match, the next player in rotation moves.
    pub fn new(mut board: Board, turn: Player) -> Self {
        let mut alive = [false; 4];
        for p in Player::iter() {
            alive[p as usize] = !board.kings(p).is_empty();
            board.set_neutral(p, !alive[p as usize]);
        }

        let teams = Team::ALL.map(|t| {
            let kings = t.members().iter().map(|&p| board.kings(p).len()).sum::<usize>();
            TeamStats::new(kings as u8)
        });

        let mut pos = Position {
            board,
            teams,
            alive,
            turn,
            summoning: false,
            outcome: None,
        };

        pos.outcome = pos.judge();
        if !pos.is_alive(turn) {
            pos.advance();
        }

        pos
    }

    /// The board.
    #[inline(always)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player to move.
    #[inline(always)]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// The counters of a [`Team`].
    #[inline(always)]
    pub fn stats(&self, t: Team) -> TeamStats {
        self.teams[t as usize]
    }

    /// Whether a [`Player`] still has a king in the match.
    #[inline(always)]
    pub fn is_alive(&self, p: Player) -> bool {
        self.alive[p as usize]
    }

    /// Whether the player to move is due to place a summoned king.
    #[inline(always)]
    pub fn is_summoning(&self) -> bool {
        self.summoning
    }

    /// The outcome of the match, if decided.
    #[inline(always)]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Legal destinations of the piece on a [`Square`] under a [`Dice`] roll.
    pub fn moves(&self, sq: Square, dice: Dice) -> Bitboard {
        self.board.moves(sq, dice)
    }

    /// Squares holding pieces of the player to move that have at least one legal move.
    pub fn movable(&self, dice: Dice) -> Bitboard {
        self.board
            .by_player(self.turn)
            .iter()
            .filter(|&sq| !self.moves(sq, dice).is_empty())
            .collect()
    }

    /// Whether the player to move has any legal move under a [`Dice`] roll.
    pub fn has_moves(&self, dice: Dice) -> bool {
        self.board
            .by_player(self.turn)
            .iter()
            .any(|sq| !self.moves(sq, dice).is_empty())
    }

    /// The next player in rotation that is still in the match, if any.
    ///
    /// The player to move is only considered after all others.
    pub fn next_player(&self) -> Option<Player> {
        successors(Some(self.turn.next()), |p| Some(p.next()))
            .take(4)
            .find(|&p| self.is_alive(p))
    }

    /// Play a [`Move`] under a [`Dice`] roll.
    ///
    /// Captures, eliminations, summons and revivals are resolved at once. The turn
    /// passes to the next player unless the match ended or the mover earned a king
    /// to place with [`Position::summon`].
    #[instrument(level = "trace", skip(self), ret, err)]
    pub fn play(&mut self, m: Move, dice: Dice) -> Result<MoveContext, IllegalMove> {
        let mover = self.turn;
        let team = mover.team() as usize;

        let piece = match self.board[m.whence()] {
            Some(p) if p.owner() == mover && !self.summoning && self.outcome.is_none() => p,
            _ => return Err(IllegalMove(m)),
        };

        if !self.moves(m.whence(), dice).contains(m.whither()) {
            return Err(IllegalMove(m));
        }

        self.board.take(m.whence());
        let capture = self.board.set(m.whither(), Some(piece));
        let mut summon = None;

        if let Some(victim) = capture.filter(|v| v.role() == Role::King) {
            let loser = victim.owner();
            self.teams[loser.team() as usize].lose_king();
            self.alive[loser as usize] = false;
            self.board.set_neutral(loser, true);
            debug!(player = %loser, "eliminated");

            if self.teams[team].can_summon() {
                summon = Some(Summon::Placement);
            }
        }

        if summon.is_none()
            && piece.role() == Role::Pawn
            && rules::is_summon_tile(mover, m.whither())
            && self.teams[team].can_summon()
        {
            let teammate = mover.teammate();
            self.board.take(m.whither());

            if self.is_alive(teammate) {
                self.board.spawn(m.whither(), Role::King, mover);
                summon = Some(Summon::Ascension);
            } else {
                self.board.spawn(m.whither(), Role::King, teammate);
                self.revive(teammate);
                summon = Some(Summon::Revival(teammate));
            }

            self.teams[team].summon_king();
        }

        self.outcome = self.judge();

        match (self.outcome, summon) {
            (Some(_), Some(Summon::Placement)) => summon = None,
            (Some(o), _) => debug!(outcome = %o, "match decided"),
            (None, Some(Summon::Placement)) => self.summoning = true,
            (None, _) => self.advance(),
        }

        Ok(MoveContext {
            m,
            role: piece.role(),
            capture,
            summon,
        })
    }

    /// Place a summoned king on an empty [`Square`].
    ///
    /// The king goes to the mover's teammate if they are out of the match, reviving
    /// them, otherwise to the mover. The turn then passes to the next player.
    #[instrument(level = "trace", skip(self), ret, err)]
    pub fn summon(&mut self, sq: Square) -> Result<Piece, IllegalSummon> {
        if !self.summoning || self.outcome.is_some() || self.board[sq].is_some() {
            return Err(IllegalSummon(sq));
        }

        let mover = self.turn;
        let teammate = mover.teammate();
        let owner = if self.is_alive(teammate) {
            mover
        } else {
            teammate
        };

        let king = self.board.spawn(sq, Role::King, owner);
        if owner != mover {
            self.revive(owner);
        }

        self.teams[mover.team() as usize].summon_king();
        self.summoning = false;
        self.advance();

        Ok(king)
    }

    /// Pass the turn to the next player without moving.
    #[instrument(level = "trace", skip(self), ret, err)]
    pub fn pass(&mut self) -> Result<Player, ImpossiblePass> {
        if self.summoning || self.outcome.is_some() {
            return Err(ImpossiblePass);
        }

        self.advance();
        Ok(self.turn)
    }

    fn advance(&mut self) {
        match self.next_player() {
            Some(p) => self.turn = p,
            None => error!(turn = %self.turn, "no player left to take the turn"),
        }
    }

    fn revive(&mut self, p: Player) {
        self.alive[p as usize] = true;
        self.board.set_neutral(p, false);
        debug!(player = %p, "revived");
    }

    fn judge(&self) -> Option<Outcome> {
        match (
            self.stats(Team::A).is_defeated(),
            self.stats(Team::B).is_defeated(),
        ) {
            (false, false) => None,
            (true, false) => Some(Outcome::Victory(Team::B)),
            (false, true) => Some(Outcome::Victory(Team::A)),
            (true, true) => Some(Outcome::Draw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::board::tests::board;
    use proptest::{prelude::*, sample::Selector};
    use test_strategy::proptest;

    fn position() -> impl Strategy<Value = Position> {
        (board(), any::<Player>()).prop_map(|(b, p)| Position::new(b, p))
    }

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col)
    }

    /// Team A down to Green alone, against a full Team B.
    fn lone_green() -> Board {
        let mut b = Board::empty();
        b.spawn(sq(7, 3), Role::King, Player::Green);
        b.spawn(sq(5, 5), Role::Rook, Player::Green);
        b.spawn(sq(1, 5), Role::Pawn, Player::Green);
        b.spawn(sq(0, 2), Role::Pawn, Player::Blue);
        b.spawn(sq(3, 0), Role::King, Player::Yellow);
        b.spawn(sq(5, 7), Role::King, Player::Red);
        b
    }

    #[test]
    fn default_position_starts_with_green_to_move() {
        let pos = Position::default();
        assert_eq!(pos.turn(), Player::Green);
        assert_eq!(pos.outcome(), None);
        assert!(!pos.is_summoning());
        for t in Team::ALL {
            assert_eq!(pos.stats(t), TeamStats::default());
        }

        for p in Player::iter() {
            assert!(pos.is_alive(p));
        }
    }

    #[test]
    fn players_without_king_start_out_of_the_match() {
        let pos = Position::new(lone_green(), Player::Green);
        assert!(!pos.is_alive(Player::Blue));
        assert!(pos.board()[sq(0, 2)].is_some_and(|p| p.is_neutral()));
        assert_eq!(pos.stats(Team::A).kings(), 1);
        assert_eq!(pos.stats(Team::B).kings(), 2);
    }

    #[test]
    fn turn_skips_players_out_of_the_match() {
        let pos = Position::new(lone_green(), Player::Blue);
        assert_eq!(pos.turn(), Player::Red);
    }

    #[proptest]
    fn new_position_counts_kings_per_team(#[strategy(position())] pos: Position) {
        for t in Team::ALL {
            let kings: usize = t.members().iter().map(|&p| pos.board().kings(p).len()).sum();
            assert_eq!(pos.stats(t).kings() as usize, kings);
        }
    }

    #[proptest]
    fn pieces_are_neutral_iff_their_owner_is_out(#[strategy(position())] pos: Position) {
        for (pc, _) in pos.board().iter() {
            assert_eq!(pc.is_neutral(), !pos.is_alive(pc.owner()));
        }
    }

    #[proptest]
    fn has_moves_iff_some_piece_is_movable(#[strategy(position())] pos: Position, d: Dice) {
        assert_eq!(pos.has_moves(d), !pos.movable(d).is_empty());
    }

    #[proptest]
    fn movable_pieces_belong_to_the_player_to_move(#[strategy(position())] pos: Position, d: Dice) {
        for sq in pos.movable(d) {
            assert!(pos.board()[sq].is_some_and(|p| p.owner() == pos.turn() && !p.is_neutral()));
        }
    }

    #[proptest]
    fn next_player_is_alive(#[strategy(position())] pos: Position) {
        if let Some(p) = pos.next_player() {
            assert!(pos.is_alive(p));
        }
    }

    #[proptest]
    fn next_player_skips_players_out_of_the_match(#[strategy(position())] pos: Position) {
        if let Some(p) = pos.next_player() {
            let mut q = pos.turn().next();
            while q != p {
                assert!(!pos.is_alive(q));
                q = q.next();
            }
        }
    }

    #[test]
    fn rotation_halts_if_no_player_is_alive() {
        let mut pos = Position::default();
        pos.alive = [false; 4];
        assert_eq!(pos.next_player(), None);
        assert_eq!(pos.pass(), Ok(Player::Green));
    }

    #[proptest]
    fn playing_illegal_move_fails(
        #[strategy(position())] mut pos: Position,
        d: Dice,
        #[filter(!#pos.movable(#d).contains(#m.whence()) || !#pos.moves(#m.whence(), #d).contains(#m.whither()))]
        m: Move,
    ) {
        let before = pos.clone();
        assert_eq!(pos.play(m, d), Err(IllegalMove(m)));
        assert_eq!(pos, before);
    }

    #[proptest]
    fn playing_legal_move_relocates_the_piece(
        #[strategy(position())]
        #[filter(#pos.outcome().is_none())]
        mut pos: Position,
        d: Dice,
        selector: Selector,
    ) {
        let movable = pos.movable(d);
        prop_assume!(!movable.is_empty());

        let whence = selector.select(movable);
        let whither = selector.select(pos.moves(whence, d));
        let piece = pos.board()[whence];
        let victim = pos.board()[whither];
        let occupied = pos.board().occupied().len();

        let mc = pos.play(Move(whence, whither), d).unwrap();

        assert_eq!(mc.capture, victim);
        assert_eq!(Some(mc.role), piece.map(|p| p.role()));
        assert_eq!(pos.board()[whence], None);
        assert!(pos.board()[whither].is_some());
        assert_eq!(pos.board().occupied().len() + mc.is_capture() as usize, occupied);
    }

    #[test]
    fn quiet_move_passes_the_turn() {
        let mut pos = Position::default();
        let mc = pos.play(Move(sq(6, 0), sq(5, 0)), Dice::Six).unwrap();
        assert!(mc.is_quiet());
        assert_eq!(pos.turn(), Player::Yellow);
    }

    #[test]
    fn moving_pieces_of_another_player_is_illegal() {
        let mut pos = Position::default();
        let m = Move(sq(1, 4), sq(2, 4));
        assert_eq!(pos.play(m, Dice::Six), Err(IllegalMove(m)));
    }

    #[test]
    fn capturing_a_king_eliminates_its_owner() {
        let mut b = Board::default();
        b.take(sq(7, 2));
        b.spawn(sq(3, 2), Role::Rook, Player::Green);

        let mut pos = Position::new(b, Player::Green);
        let mc = pos.play(Move(sq(3, 2), sq(3, 0)), Dice::Four).unwrap();

        assert!(mc.is_king_capture());
        assert_eq!(mc.summon, None);
        assert_eq!(pos.stats(Team::B).kings(), 1);
        assert!(!pos.is_alive(Player::Yellow));
        assert_eq!(pos.outcome(), None);
        assert_eq!(pos.turn(), Player::Blue);

        for sq in pos.board().by_player(Player::Yellow) {
            assert!(pos.board()[sq].is_some_and(|p| p.is_neutral()));
        }
    }

    #[test]
    fn neutral_pieces_can_still_be_captured() {
        let mut b = lone_green();
        b.spawn(sq(5, 3), Role::Pawn, Player::Blue);
        let mut pos = Position::new(b, Player::Green);
        let mc = pos.play(Move(sq(5, 5), sq(5, 3)), Dice::Four).unwrap();
        assert!(mc.capture.is_some_and(|p| p.owner() == Player::Blue));
    }

    #[test]
    fn capturing_a_king_while_down_to_one_earns_a_summon() {
        let mut b = lone_green();
        b.take(sq(3, 0));
        b.spawn(sq(5, 3), Role::King, Player::Yellow);

        let mut pos = Position::new(b, Player::Green);
        let mc = pos.play(Move(sq(5, 5), sq(5, 3)), Dice::Four).unwrap();

        assert_eq!(mc.summon, Some(Summon::Placement));
        assert!(pos.is_summoning());
        assert_eq!(pos.turn(), Player::Green);
        assert_eq!(pos.pass(), Err(ImpossiblePass));
    }

    #[test]
    fn summoning_with_a_teammate_out_revives_them() {
        let mut b = lone_green();
        b.take(sq(3, 0));
        b.spawn(sq(5, 3), Role::King, Player::Yellow);

        let mut pos = Position::new(b, Player::Green);
        pos.play(Move(sq(5, 5), sq(5, 3)), Dice::Four).unwrap();

        assert_eq!(pos.summon(sq(7, 3)), Err(IllegalSummon(sq(7, 3))));
        let king = pos.summon(sq(4, 4)).unwrap();

        assert_eq!(king.owner(), Player::Blue);
        assert_eq!(king.role(), Role::King);
        assert!(pos.is_alive(Player::Blue));
        assert!(pos.board()[sq(0, 2)].is_some_and(|p| !p.is_neutral()));
        assert_eq!(pos.stats(Team::A).kings(), 2);
        assert_eq!(pos.stats(Team::A).summons(), 1);
        assert!(!pos.is_summoning());
        assert_eq!(pos.turn(), Player::Blue);
    }

    #[test]
    fn summoning_with_a_teammate_alive_goes_to_the_mover() {
        let mut pos = Position::default();
        pos.teams[Team::A as usize] = TeamStats::new(1);
        pos.summoning = true;

        let king = pos.summon(sq(4, 4)).unwrap();
        assert_eq!(king.owner(), Player::Green);
        assert_eq!(pos.turn(), Player::Yellow);
    }

    #[test]
    fn summoning_without_entitlement_is_illegal() {
        let mut pos = Position::default();
        assert_eq!(pos.summon(sq(4, 4)), Err(IllegalSummon(sq(4, 4))));
    }

    #[test]
    fn summons_are_capped_per_team() {
        let mut b = lone_green();
        b.take(sq(3, 0));
        b.spawn(sq(5, 3), Role::King, Player::Yellow);

        let mut pos = Position::new(b, Player::Green);
        let stats = &mut pos.teams[Team::A as usize];
        stats.summon_king();
        stats.summon_king();
        stats.lose_king();
        stats.lose_king();
        assert_eq!(stats.summons(), TeamStats::MAX_SUMMONS);

        let mc = pos.play(Move(sq(5, 5), sq(5, 3)), Dice::Four).unwrap();
        assert_eq!(mc.summon, None);
        assert!(!pos.is_summoning());
        assert_eq!(pos.turn(), Player::Red);
    }

    #[test]
    fn pawn_reaching_a_summon_tile_revives_a_fallen_teammate() {
        let mut pos = Position::new(lone_green(), Player::Green);
        let mc = pos.play(Move(sq(1, 5), sq(0, 5)), Dice::Six).unwrap();

        assert_eq!(mc.summon, Some(Summon::Revival(Player::Blue)));
        let king = pos.board()[sq(0, 5)].unwrap();
        assert_eq!(king.role(), Role::King);
        assert_eq!(king.owner(), Player::Blue);
        assert!(pos.is_alive(Player::Blue));
        assert!(pos.board()[sq(0, 2)].is_some_and(|p| !p.is_neutral()));
        assert_eq!(pos.stats(Team::A).kings(), 2);
        assert_eq!(pos.stats(Team::A).summons(), 1);
        assert_eq!(pos.turn(), Player::Yellow);
    }

    #[test]
    fn revived_kings_have_fresh_identities() {
        let mut pos = Position::new(lone_green(), Player::Green);
        let pawn = pos.board()[sq(1, 5)].unwrap();
        pos.play(Move(sq(1, 5), sq(0, 5)), Dice::Six).unwrap();
        let king = pos.board()[sq(0, 5)].unwrap();
        assert_ne!(king.id(), pawn.id());
        assert!(pos.board().iter().all(|(p, _)| p.id() != pawn.id()));
    }

    #[test]
    fn pawn_reaching_a_summon_tile_with_two_kings_does_nothing() {
        let mut b = Board::default();
        b.take(sq(1, 5));
        b.take(sq(0, 5));
        b.spawn(sq(1, 5), Role::Pawn, Player::Green);

        let mut pos = Position::new(b, Player::Green);
        let mc = pos.play(Move(sq(1, 5), sq(0, 5)), Dice::Six).unwrap();
        assert_eq!(mc.summon, None);
        assert!(pos.board()[sq(0, 5)].is_some_and(|p| p.role() == Role::Pawn));
    }

    #[test]
    fn capturing_the_last_king_ends_the_match() {
        let mut b = lone_green();
        b.take(sq(5, 7));
        b.take(sq(3, 0));
        b.spawn(sq(5, 3), Role::King, Player::Yellow);

        let mut pos = Position::new(b, Player::Green);
        assert_eq!(pos.stats(Team::B).kings(), 1);

        let mc = pos.play(Move(sq(5, 5), sq(5, 3)), Dice::Four).unwrap();
        assert!(mc.is_king_capture());
        assert_eq!(mc.summon, None);
        assert_eq!(pos.stats(Team::B).kings(), 0);
        assert_eq!(pos.outcome(), Some(Outcome::Victory(Team::A)));
        assert!(!pos.is_summoning());
        assert_eq!(pos.turn(), Player::Green);
        assert_eq!(pos.pass(), Err(ImpossiblePass));

        let m = Move(sq(7, 3), sq(6, 3));
        assert_eq!(pos.play(m, Dice::Six), Err(IllegalMove(m)));
    }

    #[test]
    fn position_without_kings_is_drawn() {
        assert_eq!(Position::new(Board::empty(), Player::Green).outcome(), Some(Outcome::Draw));
    }
}
