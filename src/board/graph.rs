//! Board topology: diagonal adjacency graphs over the 32 playable squares
//!
//! Three directed graphs govern movement: the red graph (one diagonal step
//! toward higher ranks), the black graph (its exact edge reversal), and the
//! king graph (the union of both). Built once per session from fixed board
//! geometry; immutable afterward.

use super::{Piece, Side, Square, NUM_RANKS, NUM_SQUARES};

/// One directed adjacency graph, edge lists keyed by source square
#[derive(Debug, Clone)]
pub struct Graph {
    edges: [Vec<Square>; NUM_SQUARES],
}

impl Graph {
    fn empty() -> Self {
        Self {
            edges: std::array::from_fn(|_| Vec::new()),
        }
    }

    fn add_edge(&mut self, from: Square, to: Square) {
        self.edges[from.index()].push(to);
    }

    /// Squares reachable in one step from `square`
    #[inline]
    pub fn neighbors(&self, square: Square) -> &[Square] {
        &self.edges[square.index()]
    }

    /// Graph with every edge u->v replaced by v->u
    fn reversed(&self) -> Graph {
        let mut reversed = Graph::empty();
        for from in Square::all() {
            for &to in self.neighbors(from) {
                reversed.add_edge(to, from);
            }
        }
        reversed
    }

    /// Edge union of two graphs, keyed by source square
    fn union(a: &Graph, b: &Graph) -> Graph {
        let mut merged = Graph::empty();
        for from in Square::all() {
            for &to in a.neighbors(from).iter().chain(b.neighbors(from)) {
                merged.add_edge(from, to);
            }
        }
        merged
    }
}

/// The three movement graphs for a game session
#[derive(Debug, Clone)]
pub struct BoardGraphs {
    /// Red's forward moves: rank-increasing diagonal steps
    pub red: Graph,
    /// Black's forward moves: rank-decreasing, the reversal of `red`
    pub black: Graph,
    /// King moves: union of both side graphs
    pub king: Graph,
}

impl BoardGraphs {
    pub fn new() -> Self {
        let red = Self::build_forward_graph();
        let black = red.reversed();
        let king = Graph::union(&red, &black);
        Self { red, black, king }
    }

    /// One diagonal step toward the next rank, staying on playable squares
    fn build_forward_graph() -> Graph {
        let mut graph = Graph::empty();
        for from in Square::all() {
            let rank = from.rank() as i32;
            if rank + 1 >= NUM_RANKS as i32 {
                continue;
            }
            for df in [-1, 1] {
                if let Some(to) = Square::from_grid(rank + 1, from.file() as i32 + df) {
                    graph.add_edge(from, to);
                }
            }
        }
        graph
    }

    /// Graph governing a piece's movement
    #[inline]
    pub fn for_piece(&self, piece: Piece) -> &Graph {
        if piece.king {
            &self.king
        } else {
            match piece.side {
                Side::Red => &self.red,
                Side::Black => &self.black,
            }
        }
    }

    /// Intermediate vertex of a straight two-hop walk from `from` to `to`
    /// through the travel-direction graph, or None if the pair is not a
    /// jump-shaped span. Pure lookup; never touches board state.
    pub fn jump_midpoint(&self, from: Square, to: Square) -> Option<Square> {
        let graph = if to.rank() > from.rank() {
            &self.red
        } else {
            &self.black
        };
        graph
            .neighbors(from)
            .iter()
            .copied()
            .find(|&mid| graph.neighbors(mid).contains(&to) && is_straight(from, mid, to))
    }
}

impl Default for BoardGraphs {
    fn default() -> Self {
        Self::new()
    }
}

/// True when `mid` is the exact geometric midpoint of `from` and `to`.
/// Filters out the zig-zag two-hop walks the staggered numbering allows.
fn is_straight(from: Square, mid: Square, to: Square) -> bool {
    mid.rank() as i32 * 2 == from.rank() as i32 + to.rank() as i32
        && mid.file() as i32 * 2 == from.file() as i32 + to.file() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_edges_span_one_rank_and_file() {
        let graphs = BoardGraphs::new();
        for from in Square::all() {
            for &to in graphs.red.neighbors(from) {
                assert_eq!(to.rank(), from.rank() + 1);
                assert_eq!((to.file() as i32 - from.file() as i32).abs(), 1);
            }
        }
    }

    #[test]
    fn test_numeric_edge_signature() {
        // The staggered numbering makes every forward edge a +3, +4 or +5
        // step; +4 always exists off the last rank, +5 only from odd ranks,
        // +3 only from even ranks.
        let graphs = BoardGraphs::new();
        for from in Square::all() {
            let neighbors = graphs.red.neighbors(from);
            if from.rank() < 7 {
                assert!(neighbors.contains(&Square::new(from.id() + 4)));
            } else {
                assert!(neighbors.is_empty());
            }
            for &to in neighbors {
                let step = to.id() - from.id();
                match step {
                    4 => {}
                    5 => assert_eq!(from.rank() % 2, 1),
                    3 => assert_eq!(from.rank() % 2, 0),
                    other => panic!("unexpected edge step {other}"),
                }
            }
        }
    }

    #[test]
    fn test_black_graph_is_exact_reversal() {
        let graphs = BoardGraphs::new();
        let red_edges: Vec<(Square, Square)> = Square::all()
            .flat_map(|from| {
                graphs
                    .red
                    .neighbors(from)
                    .iter()
                    .map(move |&to| (from, to))
                    .collect::<Vec<_>>()
            })
            .collect();
        let black_edges: Vec<(Square, Square)> = Square::all()
            .flat_map(|from| {
                graphs
                    .black
                    .neighbors(from)
                    .iter()
                    .map(move |&to| (from, to))
                    .collect::<Vec<_>>()
            })
            .collect();

        assert_eq!(red_edges.len(), black_edges.len());
        for (from, to) in red_edges {
            assert!(black_edges.contains(&(to, from)));
        }
    }

    #[test]
    fn test_king_graph_is_union() {
        let graphs = BoardGraphs::new();
        for from in Square::all() {
            let expected =
                graphs.red.neighbors(from).len() + graphs.black.neighbors(from).len();
            assert_eq!(graphs.king.neighbors(from).len(), expected);
            for &to in graphs.red.neighbors(from) {
                assert!(graphs.king.neighbors(from).contains(&to));
            }
            for &to in graphs.black.neighbors(from) {
                assert!(graphs.king.neighbors(from).contains(&to));
            }
        }
    }

    #[test]
    fn test_edge_squares_have_single_neighbor() {
        let graphs = BoardGraphs::new();
        // Square 9 sits on the leftmost file; only one forward step exists
        assert_eq!(graphs.red.neighbors(Square::new(9)), [Square::new(13)]);
        // Square 10 has both diagonals
        let mut n: Vec<u8> = graphs
            .red
            .neighbors(Square::new(10))
            .iter()
            .map(|s| s.id())
            .collect();
        n.sort();
        assert_eq!(n, vec![13, 14]);
    }

    #[test]
    fn test_jump_midpoint_straight_span() {
        let graphs = BoardGraphs::new();
        // 9 -> 13 -> 18 is the straight downward jump over 13
        assert_eq!(
            graphs.jump_midpoint(Square::new(9), Square::new(18)),
            Some(Square::new(13))
        );
        // Upward span reverses through the black graph
        assert_eq!(
            graphs.jump_midpoint(Square::new(18), Square::new(9)),
            Some(Square::new(13))
        );
    }

    #[test]
    fn test_jump_midpoint_rejects_non_jump_spans() {
        let graphs = BoardGraphs::new();
        // One-step moves are not jump-shaped
        assert_eq!(graphs.jump_midpoint(Square::new(9), Square::new(13)), None);
        // 9 -> 13 -> 17 is a zig-zag (files 0, 1, 0), not a jump
        assert_eq!(graphs.jump_midpoint(Square::new(9), Square::new(17)), None);
        // Unrelated squares
        assert_eq!(graphs.jump_midpoint(Square::new(1), Square::new(32)), None);
    }
}
