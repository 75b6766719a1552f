//! Game rules for checkers
//!
//! Move generation only; all legality lives here. Captures are mandatory
//! whenever one is available, and a capture that leaves a further jump
//! chains within the same turn.

pub mod moves;

// Re-exports for convenient access
pub use moves::{forced_jumps, jump_moves, legal_destinations, simple_moves};
