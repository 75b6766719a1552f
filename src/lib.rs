//! Two-player checkers with a graph-based rules engine
//!
//! Movement is defined by three directed adjacency graphs over the 32
//! playable squares in standard checkers numbering: one per side for the
//! forward diagonals (exact edge reversals of each other) and their union
//! for kings. Captures are mandatory, multi-jump chains are enforced, and
//! a man reaching the far rank is crowned.
//!
//! # Architecture
//!
//! - [`board`]: square numbering, piece registry and the adjacency graphs
//! - [`rules`]: move generation (simple moves, jumps, forced-capture scan)
//! - [`game`]: the turn/capture state machine driven by clicked squares
//! - [`ui`]: egui presentation adapter (rendering and hit testing)
//!
//! # Quick Start
//!
//! ```
//! use checkers::{Game, Side, Square};
//!
//! let mut game = Game::new();
//! assert_eq!(game.turn(), Side::Black);
//!
//! // Black picks up the man on square 21 and steps to 17
//! game.click(Square::new(21));
//! game.click(Square::new(17));
//! assert_eq!(game.turn(), Side::Red);
//! ```

pub mod board;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, BoardGraphs, Piece, Side, Square};
pub use game::Game;
