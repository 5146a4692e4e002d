//! A depth-limited minimax agent for Connect 4

use log::{debug, trace};

use crate::{
    board::{Board, Player},
    error::SearchError,
    evaluation::{distance_from_centre, evaluate, Weights},
};

/// The outcome of a search: the score of the position and the move leading to it
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    /// The best column, or `None` at the search horizon and at terminal positions
    pub column: Option<usize>,
}

/// Returns `columns` ordered from the middle outwards, as the middle columns
/// are often better moves and produce earlier cutoffs
///
/// Columns at the same distance from the centre keep their relative order.
pub fn order_moves(columns: &[usize]) -> Vec<usize> {
    let mut ordered = columns.to_vec();
    ordered.sort_by_key(|&column| distance_from_centre(column));
    ordered
}

/// An agent choosing moves with minimax search and alpha-beta pruning
///
/// # Tie-breaking
/// Moves are visited centre-first, and a candidate replaces the current best
/// whenever its score is *at least as good*. Among equally scored moves the one
/// visited last wins, which is usually the least central of them. The pruned
/// search only ever records exact scores at the root, so the chosen move always
/// has the same value plain minimax would give it.
#[derive(Clone, Debug)]
pub struct Solver {
    player: Player,
    weights: Weights,

    /// The number of nodes searched since the last call to `choose_move` (for diagnostics only)
    pub node_count: usize,
}

impl Solver {
    /// Creates a new `Solver` playing as `player` with the default weights
    pub fn new(player: Player) -> Self {
        Self {
            player,
            weights: Weights::default(),
            node_count: 0,
        }
    }

    /// Replaces the evaluation weights of an existing `Solver`
    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    pub fn player(&self) -> Player {
        self.player
    }

    /// Picks the column to play on `board`, searching `depth` plies ahead
    ///
    /// A depth of 0 only evaluates the position, so the most central legal
    /// column is returned. The caller's board is never modified.
    pub fn choose_move<B: Board>(&mut self, board: &B, depth: i32) -> Result<usize, SearchError> {
        if depth < 0 {
            return Err(SearchError::NegativeDepth(depth));
        }
        if board.is_terminal() {
            return Err(SearchError::GameOver);
        }

        self.node_count = 0;
        let result = self.search(board, depth as u32, true, i32::MIN, i32::MAX)?;
        let column = match result.column {
            Some(column) => column,
            None => *order_moves(&board.legal_columns())
                .first()
                .ok_or(SearchError::NoLegalMoves)?,
        };

        debug!(
            "{:?} plays column {} (score {}, depth {}, {} nodes)",
            self.player, column, result.score, depth, self.node_count
        );
        Ok(column)
    }

    /// Performs alpha-beta search from `board`
    ///
    /// `maximizing` is true when it is this solver's player to move.
    pub fn search<B: Board>(
        &mut self,
        board: &B,
        depth: u32,
        maximizing: bool,
        alpha: i32,
        beta: i32,
    ) -> Result<SearchResult, SearchError> {
        self.minimax(board, depth, maximizing, alpha, beta, true)
    }

    /// Performs the same search as [`search`](Self::search) with an unbounded
    /// window and no pruning, visiting every node down to `depth`
    pub fn search_exhaustive<B: Board>(
        &mut self,
        board: &B,
        depth: u32,
        maximizing: bool,
    ) -> Result<SearchResult, SearchError> {
        self.minimax(board, depth, maximizing, i32::MIN, i32::MAX, false)
    }

    fn minimax<B: Board>(
        &mut self,
        board: &B,
        depth: u32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        prune: bool,
    ) -> Result<SearchResult, SearchError> {
        self.node_count += 1;

        if depth == 0 || board.is_terminal() {
            return Ok(SearchResult {
                score: evaluate(board, self.player, &self.weights),
                column: None,
            });
        }

        let moves = order_moves(&board.legal_columns());
        // a non-terminal board always has a move, anything else is a broken board
        let mut best_column = *moves.first().ok_or(SearchError::NoLegalMoves)?;
        let (mover, mut best_score) = if maximizing {
            (self.player, i32::MIN)
        } else {
            (self.player.other(), i32::MAX)
        };

        for column in moves {
            // each branch works on its own copy so siblings never see its piece
            let mut next = board.clone();
            next.drop_piece(mover, column)?;
            let score = self
                .minimax(&next, depth - 1, !maximizing, alpha, beta, prune)?
                .score;

            if maximizing {
                if score >= best_score {
                    best_score = score;
                    best_column = column;
                }
                alpha = alpha.max(best_score);
            } else {
                if score <= best_score {
                    best_score = score;
                    best_column = column;
                }
                beta = beta.min(best_score);
            }

            if prune && alpha > beta {
                break;
            }
        }

        trace!(
            "depth {} {}: column {} scores {}",
            depth,
            if maximizing { "max" } else { "min" },
            best_column,
            best_score
        );
        Ok(SearchResult {
            score: best_score,
            column: Some(best_column),
        })
    }
}
