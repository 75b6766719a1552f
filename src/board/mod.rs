//! Board representation for checkers

pub mod board;
pub mod graph;

// Re-exports
pub use board::{Board, Piece};
pub use graph::{BoardGraphs, Graph};

/// Number of playable (dark) squares on the 8x8 board
pub const NUM_SQUARES: usize = 32;
/// Squares per rank
pub const SQUARES_PER_RANK: u8 = 4;
/// Ranks on the board
pub const NUM_RANKS: u8 = 8;
/// Starting pieces per side
pub const PIECES_PER_SIDE: usize = 12;

/// The two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Starts on squares 1..=12, moves toward rank 7
    Red,
    /// Starts on squares 21..=32, moves toward rank 0; moves first
    Black,
}

impl Side {
    /// Get the opposing side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }

    /// Rank on which this side's pieces are crowned
    #[inline]
    pub fn crowning_rank(self) -> u8 {
        match self {
            Side::Red => NUM_RANKS - 1,
            Side::Black => 0,
        }
    }
}

/// A playable square, standard checkers numbering 1..=32
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    #[inline]
    pub fn new(id: u8) -> Self {
        debug_assert!((1..=NUM_SQUARES as u8).contains(&id));
        Self(id)
    }

    #[inline]
    pub fn id(self) -> u8 {
        self.0
    }

    /// Zero-based index for array storage
    #[inline]
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        debug_assert!(idx < NUM_SQUARES);
        Self(idx as u8 + 1)
    }

    /// Board rank (row), 0..8
    #[inline]
    pub fn rank(self) -> u8 {
        (self.0 - 1) / SQUARES_PER_RANK
    }

    /// Board file (column), 0..8. Even ranks hold files 0,2,4,6;
    /// odd ranks hold files 1,3,5,7.
    #[inline]
    pub fn file(self) -> u8 {
        let offset = (self.0 - 1) % SQUARES_PER_RANK;
        if self.rank() % 2 == 0 {
            offset * 2
        } else {
            offset * 2 + 1
        }
    }

    /// Square at the given grid cell, or None for a light (unplayable) cell
    pub fn from_grid(rank: i32, file: i32) -> Option<Square> {
        if !(0..NUM_RANKS as i32).contains(&rank) || !(0..NUM_RANKS as i32).contains(&file) {
            return None;
        }
        if rank % 2 != file % 2 {
            return None;
        }
        Some(Self((rank * 4 + file / 2) as u8 + 1))
    }

    /// Iterate all 32 playable squares in numbering order
    pub fn all() -> impl Iterator<Item = Square> {
        (1..=NUM_SQUARES as u8).map(Square)
    }
}
