use std::ops::Not;

use shakmaty::{Color, Role};

// chess piece type (pawn, knight, bishop, rook, queen, king)
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub fn to_index(self) -> usize {
        self as usize
    }

    // all 6 piece types in order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

impl From<Role> for PieceKind {
    fn from(role: Role) -> Self {
        match role {
            Role::Pawn => PieceKind::Pawn,
            Role::Knight => PieceKind::Knight,
            Role::Bishop => PieceKind::Bishop,
            Role::Rook => PieceKind::Rook,
            Role::Queen => PieceKind::Queen,
            Role::King => PieceKind::King,
        }
    }
}

/// Side to move. White is the first player and the maximizing side.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[inline]
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// +1 for White, -1 for Black. Multiplying an absolute score by this
    /// gives the score from this side's point of view.
    #[inline]
    pub fn perspective(self) -> f64 {
        match self {
            Side::White => 1.0,
            Side::Black => -1.0,
        }
    }
}

impl Not for Side {
    type Output = Side;

    #[inline]
    fn not(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

impl From<Color> for Side {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Side::White,
            Color::Black => Side::Black,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Self { kind, side }
    }

    /// FEN-style letter: uppercase for White
    pub fn to_char(self) -> char {
        let c = self.kind.to_char();
        match self.side {
            Side::White => c.to_ascii_uppercase(),
            Side::Black => c,
        }
    }
}

impl From<shakmaty::Piece> for Piece {
    fn from(piece: shakmaty::Piece) -> Self {
        Self {
            kind: piece.role.into(),
            side: piece.color.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_indices() {
        assert_eq!(PieceKind::Pawn.to_index(), 0);
        assert_eq!(PieceKind::King.to_index(), 5);
    }

    #[test]
    fn test_side_flip() {
        assert_eq!(!Side::White, Side::Black);
        assert_eq!(!Side::Black, Side::White);
    }

    #[test]
    fn test_side_perspective() {
        assert_eq!(Side::White.perspective(), 1.0);
        assert_eq!(Side::Black.perspective(), -1.0);
    }

    #[test]
    fn test_from_shakmaty() {
        let piece: Piece = shakmaty::Piece {
            color: Color::Black,
            role: Role::Knight,
        }
        .into();
        assert_eq!(piece, Piece::new(PieceKind::Knight, Side::Black));
        assert_eq!(piece.to_char(), 'n');
        assert_eq!(Piece::new(PieceKind::Queen, Side::White).to_char(), 'Q');
    }
}
