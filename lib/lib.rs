/// Chaturaji domain types and rules.
pub mod chess;
/// The turn engine driving a match.
pub mod engine;
/// Assorted utilities.
pub mod util;
