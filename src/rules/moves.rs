//! Move generation over the adjacency graphs
//!
//! Simple moves are one-step walks into empty squares. Jumps are straight
//! two-hop walks over an enemy piece into an empty square. The midpoint
//! check is equivalent to the classic numbering shortcut (a jump always
//! spans 7 or 9 square ids) but survives board-size changes.

use crate::board::{Board, BoardGraphs, Side, Square};

/// Non-capturing destinations for the piece on `from`
pub fn simple_moves(board: &Board, graphs: &BoardGraphs, from: Square) -> Vec<Square> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };
    graphs
        .for_piece(piece)
        .neighbors(from)
        .iter()
        .copied()
        .filter(|&to| board.is_empty(to))
        .collect()
}

/// Jump (capturing) destinations for the piece on `from`
pub fn jump_moves(board: &Board, graphs: &BoardGraphs, from: Square) -> Vec<Square> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };
    let graph = graphs.for_piece(piece);
    let mut moves = Vec::new();
    for &over in graph.neighbors(from) {
        let holds_enemy = matches!(board.get(over), Some(p) if p.side != piece.side);
        if !holds_enemy {
            continue;
        }
        for &landing in graph.neighbors(over) {
            if board.is_empty(landing)
                && graphs.jump_midpoint(from, landing) == Some(over)
                && !moves.contains(&landing)
            {
                moves.push(landing);
            }
        }
    }
    moves
}

/// Every jump landing available to `side`, scanned over the whole board.
/// Non-empty means capture is mandatory: simple moves are disabled
/// board-wide for that turn. Pure; leaves no cursor state behind.
pub fn forced_jumps(board: &Board, graphs: &BoardGraphs, side: Side) -> Vec<Square> {
    let mut landings = Vec::new();
    for (square, piece) in board.pieces() {
        if piece.side != side {
            continue;
        }
        for landing in jump_moves(board, graphs, square) {
            landings.push(landing);
        }
    }
    landings
}

/// Destinations offered for a selected piece. With a forced-jump set active
/// only jumps are offered, even for pieces that have none.
pub fn legal_destinations(
    board: &Board,
    graphs: &BoardGraphs,
    from: Square,
    forced_active: bool,
) -> Vec<Square> {
    if forced_active {
        jump_moves(board, graphs, from)
    } else {
        simple_moves(board, graphs, from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;

    #[test]
    fn test_opening_moves_from_square_9() {
        // At game start, square 9 has exactly one forward step
        let board = Board::new();
        let graphs = BoardGraphs::new();
        assert_eq!(
            simple_moves(&board, &graphs, Square::new(9)),
            vec![Square::new(13)]
        );
    }

    #[test]
    fn test_opening_moves_from_square_10() {
        let board = Board::new();
        let graphs = BoardGraphs::new();
        let mut moves: Vec<u8> = simple_moves(&board, &graphs, Square::new(10))
            .iter()
            .map(|s| s.id())
            .collect();
        moves.sort();
        assert_eq!(moves, vec![13, 14]);
    }

    #[test]
    fn test_back_rank_piece_is_blocked_at_start() {
        // Square 1's forward neighbors are occupied by friendly pieces
        let board = Board::new();
        let graphs = BoardGraphs::new();
        assert!(simple_moves(&board, &graphs, Square::new(1)).is_empty());
    }

    #[test]
    fn test_single_jump_over_enemy() {
        // Red on 9, black on 13, rest empty -> one jump to 18
        let mut board = Board::empty();
        board.place(Square::new(9), Piece::new(Side::Red));
        board.place(Square::new(13), Piece::new(Side::Black));
        let graphs = BoardGraphs::new();

        assert_eq!(
            jump_moves(&board, &graphs, Square::new(9)),
            vec![Square::new(18)]
        );
    }

    #[test]
    fn test_no_jump_when_landing_occupied() {
        let mut board = Board::empty();
        board.place(Square::new(9), Piece::new(Side::Red));
        board.place(Square::new(13), Piece::new(Side::Black));
        board.place(Square::new(18), Piece::new(Side::Black));
        let graphs = BoardGraphs::new();

        assert!(jump_moves(&board, &graphs, Square::new(9)).is_empty());
    }

    #[test]
    fn test_no_jump_over_friendly_piece() {
        let mut board = Board::empty();
        board.place(Square::new(9), Piece::new(Side::Red));
        board.place(Square::new(13), Piece::new(Side::Red));
        let graphs = BoardGraphs::new();

        assert!(jump_moves(&board, &graphs, Square::new(9)).is_empty());
    }

    #[test]
    fn test_non_king_cannot_jump_backward() {
        // Black on 13, red on 9: red's forward graph reaches 13, but black
        // moving toward rank 0 jumps 13 -> 9-wards only through its own graph
        let mut board = Board::empty();
        board.place(Square::new(18), Piece::new(Side::Black));
        board.place(Square::new(13), Piece::new(Side::Red));
        let graphs = BoardGraphs::new();

        assert_eq!(
            jump_moves(&board, &graphs, Square::new(18)),
            vec![Square::new(9)]
        );

        // The reverse situation: a red man on 18 cannot jump up over 13
        let mut board = Board::empty();
        board.place(Square::new(18), Piece::new(Side::Red));
        board.place(Square::new(13), Piece::new(Side::Black));
        assert!(jump_moves(&board, &graphs, Square::new(18)).is_empty());
    }

    #[test]
    fn test_king_jumps_in_both_directions() {
        let mut board = Board::empty();
        let mut king = Piece::new(Side::Red);
        king.king = true;
        board.place(Square::new(18), king);
        board.place(Square::new(13), Piece::new(Side::Black));
        board.place(Square::new(22), Piece::new(Side::Black));
        let graphs = BoardGraphs::new();

        let mut moves: Vec<u8> = jump_moves(&board, &graphs, Square::new(18))
            .iter()
            .map(|s| s.id())
            .collect();
        moves.sort();
        assert_eq!(moves, vec![9, 27]);
    }

    #[test]
    fn test_forced_jumps_scan() {
        let mut board = Board::empty();
        board.place(Square::new(9), Piece::new(Side::Red));
        board.place(Square::new(10), Piece::new(Side::Red));
        board.place(Square::new(13), Piece::new(Side::Black));
        let graphs = BoardGraphs::new();

        // Both red men can take the black piece on 13
        let mut landings: Vec<u8> = forced_jumps(&board, &graphs, Side::Red)
            .iter()
            .map(|s| s.id())
            .collect();
        landings.sort();
        assert_eq!(landings, vec![17, 18]);

        // Black's man on 13 has its own jump the other way: over 10 to 6.
        // The jump over 9 has no straight landing and must not appear.
        assert_eq!(
            forced_jumps(&board, &graphs, Side::Black),
            vec![Square::new(6)]
        );
    }

    #[test]
    fn test_forced_set_suppresses_simple_moves() {
        // With a jump available anywhere, no piece is offered a simple move
        let mut board = Board::empty();
        board.place(Square::new(9), Piece::new(Side::Red));
        board.place(Square::new(2), Piece::new(Side::Red));
        board.place(Square::new(13), Piece::new(Side::Black));
        let graphs = BoardGraphs::new();

        let forced = !forced_jumps(&board, &graphs, Side::Red).is_empty();
        assert!(forced);
        // Square 2 has open simple moves but no jump: it gets nothing
        assert!(legal_destinations(&board, &graphs, Square::new(2), forced).is_empty());
        // Square 9 is offered only its jump
        assert_eq!(
            legal_destinations(&board, &graphs, Square::new(9), forced),
            vec![Square::new(18)]
        );
    }
}
