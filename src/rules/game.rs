use std::fmt;

use shakmaty::fen::Fen;
use shakmaty::uci::UciMove;
use shakmaty::zobrist::{Zobrist64, ZobristHash};
use shakmaty::{CastlingMode, Chess, EnPassantMode, File, Move, Position, Rank, Square};

use super::{BoardSnapshot, Piece, PieceKind, Rules, Side};
use crate::error::RulesError;
use crate::types::MoveList;

/// Halfmove clock value at which the fifty-move rule applies
const FIFTY_MOVE_PLIES: u32 = 100;
const REPETITION_LIMIT: usize = 3;

/// A chess game backed by `shakmaty`, with the undo log and draw rules the
/// bare position type leaves to its caller.
#[derive(Clone, Debug)]
pub struct Game {
    position: Chess,
    // positions before each applied move, most recent last
    undo_stack: Vec<Chess>,
    // hash of every position reached, current one last
    hashes: Vec<Zobrist64>,
}

/// Human-facing description of a move
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveInfo {
    pub piece: PieceKind,
    pub from: Option<Square>,
    pub to: Square,
    pub promotion: Option<PieceKind>,
    pub captured: Option<PieceKind>,
    pub uci: String,
}

impl Game {
    pub fn new() -> Self {
        Self::from_position(Chess::default())
    }

    pub fn from_fen(text: &str) -> Result<Self, RulesError> {
        let fen: Fen = text
            .trim()
            .parse()
            .map_err(|e: shakmaty::fen::ParseFenError| RulesError::InvalidFen(e.to_string()))?;
        let position: Chess = fen
            .into_position(CastlingMode::Standard)
            .map_err(|e| RulesError::InvalidFen(e.to_string()))?;
        Ok(Self::from_position(position))
    }

    fn from_position(position: Chess) -> Self {
        let hash = position.zobrist_hash(EnPassantMode::Legal);
        Self {
            position,
            undo_stack: Vec::new(),
            hashes: vec![hash],
        }
    }

    pub fn position(&self) -> &Chess {
        &self.position
    }

    /// Number of moves applied since construction that have not been undone
    pub fn ply(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn halfmoves(&self) -> u32 {
        self.position.halfmoves()
    }

    pub fn fullmoves(&self) -> u32 {
        self.position.fullmoves().get()
    }

    /// Resolve a UCI string (`e2e4`, `e7e8q`) against the current position
    pub fn parse_uci(&self, text: &str) -> Result<Move, RulesError> {
        let uci: UciMove = text
            .parse()
            .map_err(|_| RulesError::IllegalMove(text.to_string()))?;
        uci.to_move(&self.position)
            .map_err(|_| RulesError::IllegalMove(text.to_string()))
    }

    pub fn describe(&self, mv: &Move) -> MoveInfo {
        MoveInfo {
            piece: mv.role().into(),
            from: mv.from(),
            to: mv.to(),
            promotion: mv.promotion().map(PieceKind::from),
            captured: mv.capture().map(PieceKind::from),
            uci: uci_string(mv),
        }
    }

    /// Apply a move and report what it did
    pub fn play(&mut self, mv: &Move) -> Result<MoveInfo, RulesError> {
        let info = self.describe(mv);
        self.apply_move(mv)?;
        Ok(info)
    }

    fn repetitions(&self) -> usize {
        match self.hashes.last() {
            Some(current) => self.hashes.iter().filter(|&h| h == current).count(),
            None => 0,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Rules for Game {
    type Move = Move;

    fn legal_moves(&self) -> MoveList<Move> {
        self.position.legal_moves().into_iter().collect()
    }

    fn apply_move(&mut self, mv: &Move) -> Result<(), RulesError> {
        if !self.position.is_legal(mv) {
            return Err(RulesError::IllegalMove(uci_string(mv)));
        }
        self.undo_stack.push(self.position.clone());
        self.position.play_unchecked(mv);
        self.hashes.push(self.position.zobrist_hash(EnPassantMode::Legal));
        Ok(())
    }

    fn undo_move(&mut self) -> Result<(), RulesError> {
        let previous = self.undo_stack.pop().ok_or(RulesError::NothingToUndo)?;
        self.position = previous;
        self.hashes.pop();
        Ok(())
    }

    fn is_game_over(&self) -> bool {
        self.position.legal_moves().is_empty() || self.is_draw()
    }

    fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    fn is_draw(&self) -> bool {
        self.position.is_stalemate()
            || self.position.is_insufficient_material()
            || self.position.halfmoves() >= FIFTY_MOVE_PLIES
            || self.repetitions() >= REPETITION_LIMIT
    }

    fn is_check(&self) -> bool {
        self.position.is_check()
    }

    fn turn(&self) -> Side {
        self.position.turn().into()
    }

    fn board(&self) -> BoardSnapshot {
        let board = self.position.board();
        let mut snapshot: BoardSnapshot = [[None; 8]; 8];
        for (rank, row) in (0u32..).zip(snapshot.iter_mut()) {
            for (file, cell) in (0u32..).zip(row.iter_mut()) {
                let square = Square::from_coords(File::new(file), Rank::new(rank));
                *cell = board.piece_at(square).map(Piece::from);
            }
        }
        snapshot
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.board();
        for (rank, row) in snapshot.iter().enumerate().rev() {
            write!(f, "{} ", rank + 1)?;
            for cell in row {
                let c = cell.map_or('.', Piece::to_char);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")?;
        let side = match self.turn() {
            Side::White => "white",
            Side::Black => "black",
        };
        write!(f, "{side} to move")
    }
}

fn uci_string(mv: &Move) -> String {
    mv.to_uci(CastlingMode::Standard).to_string()
}
