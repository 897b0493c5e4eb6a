mod bitboard;
mod board;
mod dice;
mod r#move;
mod movegen;
mod outcome;
mod piece;
mod player;
mod position;
mod role;
mod square;
mod team;

/// Capture and summon rules.
pub mod rules;

pub use bitboard::*;
pub use board::*;
pub use dice::*;
pub use outcome::*;
pub use piece::*;
pub use player::*;
pub use position::*;
pub use r#move::*;
pub use role::*;
pub use square::*;
pub use team::*;
