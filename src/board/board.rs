//! Piece registry: which piece sits on which square
//!
//! The board performs no legality checking; that belongs to the move
//! generator and the game session. All mutation goes through the single
//! `Board` owned by the session.

use super::{Side, Square, NUM_SQUARES, PIECES_PER_SIDE};

/// One game piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub side: Side,
    pub king: bool,
}

impl Piece {
    #[inline]
    pub fn new(side: Side) -> Self {
        Self { side, king: false }
    }
}

/// Mapping of square -> occupying piece
#[derive(Debug, Clone)]
pub struct Board {
    squares: [Option<Piece>; NUM_SQUARES],
}

impl Board {
    /// Empty board, no pieces placed
    pub fn empty() -> Self {
        Self {
            squares: [None; NUM_SQUARES],
        }
    }

    /// Standard starting layout: red on 1..=12, black on 21..=32
    pub fn new() -> Self {
        let mut board = Self::empty();
        for id in 1..=PIECES_PER_SIDE as u8 {
            board.place(Square::new(id), Piece::new(Side::Red));
        }
        for id in 21..=NUM_SQUARES as u8 {
            board.place(Square::new(id), Piece::new(Side::Black));
        }
        board
    }

    /// Piece at a square, if any
    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.squares[square.index()].is_none()
    }

    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.squares[square.index()] = Some(piece);
    }

    /// Remove and return the piece at a square
    #[inline]
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index()].take()
    }

    /// Move the piece on `from` to `to`. `from` is left empty.
    pub fn relocate(&mut self, from: Square, to: Square) {
        if let Some(piece) = self.remove(from) {
            self.place(to, piece);
        }
    }

    /// Crown the piece at a square. The false->true guard makes a second
    /// back-rank arrival a no-op.
    pub fn crown(&mut self, square: Square) {
        if let Some(piece) = &mut self.squares[square.index()] {
            if !piece.king {
                piece.king = true;
            }
        }
    }

    /// Number of pieces remaining for a side
    pub fn count(&self, side: Side) -> usize {
        self.squares
            .iter()
            .filter(|p| matches!(p, Some(piece) if piece.side == side))
            .count()
    }

    /// Occupied squares with their pieces, in numbering order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(idx, p)| p.map(|piece| (Square::from_index(idx), piece)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_layout() {
        let board = Board::new();
        assert_eq!(board.count(Side::Red), 12);
        assert_eq!(board.count(Side::Black), 12);
        for id in 1..=12 {
            assert_eq!(board.get(Square::new(id)).map(|p| p.side), Some(Side::Red));
        }
        for id in 13..=20 {
            assert!(board.is_empty(Square::new(id)));
        }
        for id in 21..=32 {
            assert_eq!(
                board.get(Square::new(id)).map(|p| p.side),
                Some(Side::Black)
            );
        }
    }

    #[test]
    fn test_relocate_clears_source() {
        let mut board = Board::new();
        board.relocate(Square::new(9), Square::new(13));
        assert!(board.is_empty(Square::new(9)));
        assert_eq!(
            board.get(Square::new(13)).map(|p| p.side),
            Some(Side::Red)
        );
        assert_eq!(board.count(Side::Red), 12);
    }

    #[test]
    fn test_crown_sets_king_once() {
        let mut board = Board::empty();
        board.place(Square::new(30), Piece::new(Side::Red));
        board.crown(Square::new(30));
        assert!(board.get(Square::new(30)).unwrap().king);
        // Crowning again must leave the piece a king, not toggle
        board.crown(Square::new(30));
        assert!(board.get(Square::new(30)).unwrap().king);
    }

    #[test]
    fn test_remove_empties_square() {
        let mut board = Board::new();
        let removed = board.remove(Square::new(1));
        assert_eq!(removed.map(|p| p.side), Some(Side::Red));
        assert!(board.is_empty(Square::new(1)));
        assert_eq!(board.count(Side::Red), 11);
    }
}
