use crate::chess::{rules, Bitboard, Board, Dice, Piece, Role, Square};

#[rustfmt::skip]
const KING: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

#[rustfmt::skip]
const KNIGHT: [(i8, i8); 8] = [
    (-2, -1), (-2, 1),
    (-1, -2), (-1, 2),
    ( 1, -2), ( 1, 2),
    ( 2, -1), ( 2, 1),
];

#[rustfmt::skip]
const BOAT: [(i8, i8); 8] = [
    (-1, -1), (-1, 1), (1, -1), (1, 1),
    (-2, -2), (-2, 2), (2, -2), (2, 2),
];

#[rustfmt::skip]
const ROOK: [(i8, i8); 8] = [
    (0, 1), (0, -1), (1, 0), (-1, 0),
    (0, 2), (0, -2), (2, 0), (-2, 0),
];

/// Legal destinations of a [`Piece`] standing on a [`Square`] under a [`Dice`] roll.
///
/// Pieces whose [`Role`] the roll does not activate, as well as neutral pieces,
/// have no moves. All pieces jump, the occupancy of squares passed over is irrelevant.
pub fn moves(board: &Board, piece: Piece, whence: Square, dice: Dice) -> Bitboard {
    if piece.is_neutral() || !dice.activates(piece.role()) {
        return Bitboard::empty();
    }

    match piece.role() {
        Role::Pawn => pawn(board, piece, whence),
        Role::King => jumps(board, piece, whence, &KING),
        Role::Knight => jumps(board, piece, whence, &KNIGHT),
        Role::Boat => jumps(board, piece, whence, &BOAT),
        Role::Rook => jumps(board, piece, whence, &ROOK),
    }
}

/// Destinations reachable by a fixed set of offsets.
///
/// Empty squares are always admissible, occupied ones only if capturable.
fn jumps(board: &Board, piece: Piece, whence: Square, offsets: &[(i8, i8)]) -> Bitboard {
    offsets
        .iter()
        .filter_map(|&(dr, dc)| whence.offset(dr, dc))
        .filter(|&sq| match board[sq] {
            None => true,
            Some(victim) => rules::can_capture(&piece, &victim),
        })
        .collect()
}

/// A single quiet step forward, plus the two diagonal captures either side of it.
fn pawn(board: &Board, piece: Piece, whence: Square) -> Bitboard {
    let (dr, dc) = piece.owner().forward();
    let mut bb = Bitboard::empty();

    if let Some(sq) = whence.offset(dr, dc) {
        if board[sq].is_none() {
            bb = bb.with(sq);
        }
    }

    // Swapping the axes yields the sideways direction.
    let (sr, sc) = (dc, dr);
    for sq in [whence.offset(dr + sr, dc + sc), whence.offset(dr - sr, dc - sc)]
        .into_iter()
        .flatten()
    {
        if board[sq].is_some_and(|victim| rules::can_capture(&piece, &victim)) {
            bb = bb.with(sq);
        }
    }

    bb
}
