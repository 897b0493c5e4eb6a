use crate::chess::{Bitboard, Category, Piece, Player, Role, Square};

/// The tiles on which each player's pawns earn a summon, in [`Player`] order.
///
/// Every player may summon from their own back rank and from the back rank of the
/// opponent seated across the partner axis.
#[rustfmt::skip]
const SUMMON_TILES: [[(u8, u8); 8]; 4] = [
    // Green: own back rank, then Blue's.
    [(7, 0), (7, 1), (7, 2), (7, 3), (0, 4), (0, 5), (0, 6), (0, 7)],
    // Yellow: own back rank, then Red's.
    [(0, 0), (1, 0), (2, 0), (3, 0), (4, 7), (5, 7), (6, 7), (7, 7)],
    // Blue: own back rank, then Green's.
    [(0, 4), (0, 5), (0, 6), (0, 7), (7, 0), (7, 1), (7, 2), (7, 3)],
    // Red: own back rank, then Yellow's.
    [(4, 7), (5, 7), (6, 7), (7, 7), (0, 0), (1, 0), (2, 0), (3, 0)],
];

/// The tiles on which pawns of a [`Player`] earn a summon.
pub fn summon_tiles(p: Player) -> Bitboard {
    SUMMON_TILES[p as usize]
        .into_iter()
        .map(|(row, col)| Square::new(row, col))
        .collect()
}

/// Whether a pawn of a [`Player`] landing on a [`Square`] earns a summon.
pub fn is_summon_tile(p: Player, sq: Square) -> bool {
    summon_tiles(p).contains(sq)
}

/// Whether a piece may capture another.
///
/// Lower category pieces never capture higher category pieces, and kings are never
/// captured by pieces of their own team. Any other piece is fair game, including
/// pieces of a teammate.
pub fn can_capture(attacker: &Piece, victim: &Piece) -> bool {
    if attacker.role().category() == Category::Lower && victim.role().category() == Category::Higher
    {
        return false;
    }

    !(victim.role() == Role::King && attacker.owner().is_ally(victim.owner()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::PieceId;
    use crate::util::Integer;
    use test_strategy::proptest;

    #[test]
    fn every_player_has_eight_summon_tiles() {
        for p in Player::iter() {
            assert_eq!(summon_tiles(p).len(), 8);
        }
    }

    #[test]
    fn summon_tiles_include_own_back_rank() {
        assert!(is_summon_tile(Player::Green, Square::new(7, 3)));
        assert!(is_summon_tile(Player::Yellow, Square::new(3, 0)));
        assert!(is_summon_tile(Player::Blue, Square::new(0, 4)));
        assert!(is_summon_tile(Player::Red, Square::new(4, 7)));
    }

    #[test]
    fn summon_tiles_include_back_rank_across_the_partner_axis() {
        assert!(is_summon_tile(Player::Green, Square::new(0, 7)));
        assert!(is_summon_tile(Player::Yellow, Square::new(7, 7)));
        assert!(is_summon_tile(Player::Blue, Square::new(7, 0)));
        assert!(is_summon_tile(Player::Red, Square::new(0, 0)));
    }

    #[proptest]
    fn teammates_share_summon_tiles(p: Player) {
        assert_eq!(summon_tiles(p), summon_tiles(p.teammate()));
    }

    #[proptest]
    fn lower_category_never_captures_higher_category(
        #[filter(#a.role().category() == Category::Lower)] a: Piece,
        #[filter(#v.role().category() == Category::Higher)] v: Piece,
    ) {
        assert!(!can_capture(&a, &v));
    }

    #[proptest]
    fn higher_category_captures_any_enemy(
        #[filter(#a.role().category() == Category::Higher)] a: Piece,
        #[filter(!#v.owner().is_ally(#a.owner()))] v: Piece,
    ) {
        assert!(can_capture(&a, &v));
    }

    #[proptest]
    fn same_team_kings_are_never_captured(a: Piece, id: PieceId, #[strategy(0usize..2)] i: usize) {
        let v = Piece::new(id, Role::King, a.owner().team().members()[i]);
        assert!(!can_capture(&a, &v));
    }

    #[proptest]
    fn teammate_pieces_other_than_kings_may_be_captured(
        #[filter(#a.role().category() == Category::Higher)] a: Piece,
        id: PieceId,
        #[filter(#r != Role::King)] r: Role,
    ) {
        let v = Piece::new(id, r, a.owner().teammate());
        assert!(can_capture(&a, &v));
    }
}
