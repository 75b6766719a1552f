//! Turn/capture state machine
//!
//! A [`Game`] is the single session value: it owns the board, the adjacency
//! graphs and all turn/selection state, and is driven by one input event, a
//! clicked square. Restart replaces the whole value with [`Game::new`];
//! nothing is patched in place.
//!
//! Clicks that hit nothing useful (an enemy piece, an empty non-highlighted
//! square, anything after the game ends) are silent no-ops.

use crate::board::{Board, BoardGraphs, Side, Square};
use crate::rules;

/// One checkers session
pub struct Game {
    graphs: BoardGraphs,
    board: Board,
    turn: Side,
    selected: Option<Square>,
    destinations: Vec<Square>,
    /// Jump landings that make capture mandatory this turn
    forced: Vec<Square>,
    /// Piece that must continue an unfinished jump chain
    chain: Option<Square>,
    winner: Option<Side>,
}

impl Game {
    /// Fresh session with the standard starting layout. Black moves first.
    pub fn new() -> Self {
        let graphs = BoardGraphs::new();
        let board = Board::new();
        let turn = Side::Black;
        let forced = rules::forced_jumps(&board, &graphs, turn);
        Self {
            graphs,
            board,
            turn,
            selected: None,
            destinations: Vec::new(),
            forced,
            chain: None,
            winner: None,
        }
    }

    /// Process a click on a playable square
    pub fn click(&mut self, square: Square) {
        if self.winner.is_some() {
            return;
        }

        // A click on one of this side's pieces selects it. Mid-chain only
        // the jumping piece may be picked up again.
        if let Some(piece) = self.board.get(square) {
            if piece.side == self.turn {
                if let Some(chain) = self.chain {
                    if chain != square {
                        return;
                    }
                }
                self.selected = Some(square);
                self.destinations = self.destinations_for(square);
                return;
            }
        }

        // Otherwise it either lands on a highlighted destination or clears
        // the selection.
        if let Some(from) = self.selected {
            if self.destinations.contains(&square) {
                self.execute_move(from, square);
                return;
            }
        }
        self.clear_selection();
    }

    fn destinations_for(&self, square: Square) -> Vec<Square> {
        if self.chain.is_some() {
            // Continuation jumps only
            return rules::jump_moves(&self.board, &self.graphs, square);
        }
        rules::legal_destinations(&self.board, &self.graphs, square, !self.forced.is_empty())
    }

    fn execute_move(&mut self, from: Square, to: Square) {
        // Capture lookup is pure over the graphs, done before any mutation
        let captured = self.graphs.jump_midpoint(from, to);
        let side = self.turn;

        self.board.relocate(from, to);
        if to.rank() == side.crowning_rank() {
            self.board.crown(to);
        }
        if let Some(mid) = captured {
            self.board.remove(mid);
        }
        self.clear_selection();

        // A capture that removed the last enemy piece ends the game with
        // the mover still on turn; the turn never passes to an empty side
        self.check_winner();
        if self.winner.is_some() {
            return;
        }

        // A capture that leaves the same piece another jump keeps the turn;
        // the chain piece stays selected with only its continuations offered
        if captured.is_some() {
            let continuation = rules::jump_moves(&self.board, &self.graphs, to);
            if !continuation.is_empty() {
                self.chain = Some(to);
                self.forced = continuation.clone();
                self.selected = Some(to);
                self.destinations = continuation;
                return;
            }
        }

        self.chain = None;
        self.turn = side.opponent();
        self.forced = rules::forced_jumps(&self.board, &self.graphs, self.turn);
    }

    fn check_winner(&mut self) {
        for side in [Side::Red, Side::Black] {
            if self.board.count(side) == 0 {
                self.winner = Some(side.opponent());
                self.clear_selection();
                self.chain = None;
                self.forced.clear();
            }
        }
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.destinations.clear();
    }

    // Renderable snapshot accessors

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn graphs(&self) -> &BoardGraphs {
        &self.graphs
    }

    #[inline]
    pub fn turn(&self) -> Side {
        self.turn
    }

    #[inline]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Highlighted legal destinations for the current selection
    #[inline]
    pub fn destinations(&self) -> &[Square] {
        &self.destinations
    }

    #[inline]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// True while a jump chain is waiting to be finished
    #[inline]
    pub fn chain_active(&self) -> bool {
        self.chain.is_some()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
