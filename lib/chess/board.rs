use crate::chess::{movegen, Bitboard, Dice, Piece, PieceId, Player, Role, Square};
use crate::util::Integer;
use derive_more::DebugCustom;
use std::fmt::{self, Write};
use std::ops::Index;

/// Home squares of each player's back rank, from the corner inwards:
/// boat, knight, rook and king.
#[rustfmt::skip]
const BACK_RANKS: [(Player, [(u8, u8); 4]); 4] = [
    (Player::Green,  [(7, 0), (7, 1), (7, 2), (7, 3)]),
    (Player::Yellow, [(0, 0), (1, 0), (2, 0), (3, 0)]),
    (Player::Blue,   [(0, 7), (0, 6), (0, 5), (0, 4)]),
    (Player::Red,    [(7, 7), (6, 7), (5, 7), (4, 7)]),
];

/// Home squares of each player's pawns.
#[rustfmt::skip]
const PAWN_RANKS: [(Player, [(u8, u8); 4]); 4] = [
    (Player::Green,  [(6, 0), (6, 1), (6, 2), (6, 3)]),
    (Player::Yellow, [(0, 1), (1, 1), (2, 1), (3, 1)]),
    (Player::Blue,   [(1, 7), (1, 6), (1, 5), (1, 4)]),
    (Player::Red,    [(7, 6), (6, 6), (5, 6), (4, 6)]),
];

/// The board, an 8×8 grid of optional [`Piece`]s.
///
/// Cloning a board yields a fully independent copy.
#[derive(DebugCustom, Clone, Eq, PartialEq, Hash)]
#[debug(fmt = "Board(\n{self})")]
pub struct Board {
    grid: [Option<Piece>; 64],
    serial: u32,
}

impl Default for Board {
    /// The four-corner starting layout.
    fn default() -> Self {
        let mut board = Board::empty();
        let roles = [Role::Boat, Role::Knight, Role::Rook, Role::King];

        for (p, squares) in BACK_RANKS {
            for (r, (row, col)) in roles.into_iter().zip(squares) {
                board.spawn(Square::new(row, col), r, p);
            }
        }

        for (p, squares) in PAWN_RANKS {
            for (row, col) in squares {
                board.spawn(Square::new(row, col), Role::Pawn, p);
            }
        }

        board
    }
}

impl Board {
    /// A board without any pieces.
    pub fn empty() -> Self {
        Board {
            grid: [None; 64],
            serial: 0,
        }
    }

    /// Places a new [`Piece`] on an empty [`Square`], assigning it a fresh identity.
    pub fn spawn(&mut self, sq: Square, r: Role, p: Player) -> Piece {
        debug_assert!(self[sq].is_none(), "{sq} is occupied");
        let piece = Piece::new(PieceId::from(self.serial), r, p);
        self.serial += 1;
        self.grid[sq.get() as usize] = Some(piece);
        piece
    }

    /// Replaces the contents of a [`Square`], returning what was there.
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.grid[sq.get() as usize], piece)
    }

    /// Clears a [`Square`], returning the [`Piece`] that was there, if any.
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.grid[sq.get() as usize].take()
    }

    /// An iterator over all pieces on the board.
    pub fn iter(&self) -> impl Iterator<Item = (Piece, Square)> + '_ {
        Square::iter().filter_map(|sq| self[sq].map(|p| (p, sq)))
    }

    /// [`Square`]s occupied.
    pub fn occupied(&self) -> Bitboard {
        self.iter().map(|(_, sq)| sq).collect()
    }

    /// [`Square`]s occupied by pieces of a [`Player`].
    pub fn by_player(&self, p: Player) -> Bitboard {
        self.iter()
            .filter(|(pc, _)| pc.owner() == p)
            .map(|(_, sq)| sq)
            .collect()
    }

    /// [`Square`]s occupied by kings of a [`Player`].
    pub fn kings(&self, p: Player) -> Bitboard {
        self.iter()
            .filter(|(pc, _)| pc.owner() == p && pc.role() == Role::King)
            .map(|(_, sq)| sq)
            .collect()
    }

    /// Freezes or unfreezes every piece owned by a [`Player`].
    pub fn set_neutral(&mut self, p: Player, neutral: bool) {
        for pc in self.grid.iter_mut().flatten() {
            if pc.owner() == p {
                pc.set_neutral(neutral);
            }
        }
    }

    /// Legal destinations of the [`Piece`] on a [`Square`] under a [`Dice`] roll.
    ///
    /// Empty if the square is empty.
    pub fn moves(&self, sq: Square, dice: Dice) -> Bitboard {
        match self[sq] {
            None => Bitboard::empty(),
            Some(pc) => movegen::moves(self, pc, sq, dice),
        }
    }
}

/// Retrieves the [`Piece`] at a given [`Square`], if any.
impl Index<Square> for Board {
    type Output = Option<Piece>;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.grid[sq.get() as usize]
    }
}

/// Prints one row per line, `..` marking empty squares.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..Square::SIDE {
            for col in 0..Square::SIDE {
                match self[Square::new(row, col)] {
                    None => f.write_str("..")?,
                    Some(pc) => fmt::Display::fmt(&pc, f)?,
                }

                f.write_char(if col + 1 < Square::SIDE { ' ' } else { '\n' })?;
            }
        }

        Ok(())
    }
}
