//! The rules-engine boundary.
//!
//! The search never knows chess rules itself. Everything it needs (move
//! generation, make/unmake, terminal detection) goes through [`Rules`].
//! [`Game`] is the stock implementation backed by `shakmaty`.

mod game;
mod piece;

use std::fmt;

use crate::error::RulesError;
use crate::types::MoveList;

pub use game::{Game, MoveInfo};
pub use piece::{Piece, PieceKind, Side};

/// Read-only 8x8 view, indexed `[rank][file]` with `[0][0]` = a1
pub type BoardSnapshot = [[Option<Piece>; 8]; 8];

/// Contract the engine consumes from a chess rules implementation.
///
/// `apply_move` and `undo_move` mutate the implementor in place. The search
/// pairs every successful apply with exactly one undo, so an implementor only
/// needs a simple LIFO history.
pub trait Rules {
    /// Opaque move handle, handed back to `apply_move` unmodified
    type Move: Clone + fmt::Debug;

    /// All legal moves for the side to move, empty if there are none
    fn legal_moves(&self) -> MoveList<Self::Move>;

    fn apply_move(&mut self, mv: &Self::Move) -> Result<(), RulesError>;

    /// Take back the most recent `apply_move`
    fn undo_move(&mut self) -> Result<(), RulesError>;

    /// Checkmate, any draw, or no legal moves
    fn is_game_over(&self) -> bool;

    /// Side to move is mated
    fn is_checkmate(&self) -> bool;

    /// Stalemate, repetition, insufficient material or the move-count rule
    fn is_draw(&self) -> bool;

    /// Side to move is in check
    fn is_check(&self) -> bool;

    fn turn(&self) -> Side;

    fn board(&self) -> BoardSnapshot;
}
