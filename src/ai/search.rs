use log::debug;

use crate::error::PlayError;
use crate::game::{generate, Board, Move, Side};

use super::agent::Agent;
use super::evaluator::{Heuristic, MobilityHeuristic, Score};

/// Default lookahead in plies below each root move.
pub const DEFAULT_MAX_DEPTH: usize = 6;

/// Deepest lookahead the configuration accepts.
pub const MAX_SUPPORTED_DEPTH: usize = 8;

/// Counters for the most recent root selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

/// Depth-limited minimax agent with alpha-beta pruning.
///
/// Side A maximizes and side B minimizes for the whole game. The board is
/// searched in place: every move applied during the search is undone before
/// the frame that applied it returns.
pub struct MinimaxAgent {
    max_depth: usize,
    pruning: bool,
    heuristic: Box<dyn Heuristic>,
    stats: SearchStats,
}

impl MinimaxAgent {
    pub fn new(max_depth: usize) -> Self {
        Self::with_heuristic(max_depth, Box::new(MobilityHeuristic))
    }

    pub fn with_heuristic(max_depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxAgent {
            max_depth,
            pruning: true,
            heuristic,
            stats: SearchStats::default(),
        }
    }

    /// Turn alpha-beta cutoffs on or off. Scores are identical either way;
    /// only the number of visited nodes changes.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Lookahead for a root selection: never further than the rounds left.
    pub fn root_depth(&self, remaining_rounds: usize) -> usize {
        remaining_rounds.min(self.max_depth)
    }

    /// Fail-soft alpha-beta minimax.
    ///
    /// A node is a leaf when `depth` is zero or `side` cannot move; leaves are
    /// scored by the static heuristic in both cases.
    pub fn search(
        &mut self,
        board: &mut Board,
        depth: usize,
        side: Side,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        self.stats.nodes += 1;

        if depth == 0 {
            return self.heuristic.evaluate(board);
        }

        let moves = generate(board, side);
        if moves.is_empty() {
            return self.heuristic.evaluate(board);
        }

        if maximizing {
            let mut max_eval = Score::MIN;
            for mv in &moves {
                board.apply(mv);
                let eval = self.search(board, depth - 1, side.other(), false, alpha, beta);
                board.undo(mv);

                if eval > max_eval {
                    max_eval = eval;
                }
                if eval > alpha {
                    alpha = eval;
                }
                if self.pruning && beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            max_eval
        } else {
            let mut min_eval = Score::MAX;
            for mv in &moves {
                board.apply(mv);
                let eval = self.search(board, depth - 1, side.other(), true, alpha, beta);
                board.undo(mv);

                if eval < min_eval {
                    min_eval = eval;
                }
                if eval < beta {
                    beta = eval;
                }
                if self.pruning && beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            min_eval
        }
    }

    /// Pick the best move for `side` and its score, or `None` if it cannot move.
    ///
    /// Each root move is applied and the reply tree searched to
    /// `root_depth(remaining_rounds)` plies with full bounds. Ties keep the
    /// move generated first.
    pub fn best_move(
        &mut self,
        board: &mut Board,
        side: Side,
        remaining_rounds: usize,
    ) -> Option<(Move, Score)> {
        self.stats = SearchStats::default();
        let depth = self.root_depth(remaining_rounds);
        let maximizing = side.is_maximizing();

        let mut best: Option<(Move, Score)> = None;
        for mv in generate(board, side) {
            board.apply(&mv);
            let score = self.search(board, depth, side.other(), !maximizing, Score::MIN, Score::MAX);
            board.undo(&mv);
            debug!("{side} root move {mv} scores {score} at depth {depth}");

            let improves = match best {
                None => true,
                Some((_, best_score)) if maximizing => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if improves {
                best = Some((mv, score));
            }
        }

        debug!(
            "{side} searched {} nodes with {} cutoffs",
            self.stats.nodes, self.stats.cutoffs
        );
        best
    }
}

impl Agent for MinimaxAgent {
    fn select_move(
        &mut self,
        board: &mut Board,
        side: Side,
        remaining_rounds: usize,
    ) -> Result<Move, PlayError> {
        self.best_move(board, side, remaining_rounds)
            .map(|(mv, _)| mv)
            .ok_or(PlayError::NoLegalMoves(side))
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
