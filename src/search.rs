use crate::config::EvalWeights;
use crate::error::RulesError;
use crate::evaluation::evaluate;
use crate::rules::Rules;
use crate::types::{Score, SCORE_INFINITY};

/// Search state carried through the recursion
pub struct Searcher<'w> {
    weights: &'w EvalWeights,
    pub nodes: u64,
}

impl<'w> Searcher<'w> {
    pub fn new(weights: &'w EvalWeights) -> Self {
        Self { weights, nodes: 0 }
    }

    /// Minimax with alpha-beta pruning over absolute (White-positive) scores.
    ///
    /// `maximizing` must be true exactly when White is to move. Every move
    /// applied here is undone before returning, including on cutoffs and
    /// when a deeper call fails, so the rules engine ends up where it began.
    pub fn minimax<R: Rules>(
        &mut self,
        rules: &mut R,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> Result<Score, RulesError> {
        debug_assert!(alpha <= beta, "search entered with alpha {alpha} > beta {beta}");
        self.nodes += 1;

        if depth == 0 || rules.is_game_over() {
            return Ok(evaluate(rules, self.weights));
        }

        let moves = rules.legal_moves();

        if maximizing {
            let mut best = -SCORE_INFINITY;
            for mv in &moves {
                let score = self.child(rules, mv, depth - 1, alpha, beta, false)?;
                best = best.max(score);
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
            Ok(best)
        } else {
            let mut best = SCORE_INFINITY;
            for mv in &moves {
                let score = self.child(rules, mv, depth - 1, alpha, beta, true)?;
                best = best.min(score);
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
            Ok(best)
        }
    }

    /// Apply `mv`, search below it, and take it back before reporting.
    pub fn child<R: Rules>(
        &mut self,
        rules: &mut R,
        mv: &R::Move,
        depth: u8,
        alpha: Score,
        beta: Score,
        maximizing: bool,
    ) -> Result<Score, RulesError> {
        rules.apply_move(mv)?;
        let score = self.minimax(rules, depth, alpha, beta, maximizing);
        rules.undo_move()?;
        score
    }
}

/// One-shot minimax search from the current position
pub fn search<R: Rules>(
    rules: &mut R,
    depth: u8,
    alpha: Score,
    beta: Score,
    maximizing: bool,
    weights: &EvalWeights,
) -> Result<Score, RulesError> {
    Searcher::new(weights).minimax(rules, depth, alpha, beta, maximizing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Game, Side};
    use crate::types::SCORE_MATE;

    fn full_window(game: &mut Game, depth: u8) -> Score {
        let maximizing = game.turn() == Side::White;
        search(game, depth, -SCORE_INFINITY, SCORE_INFINITY, maximizing, &EvalWeights::default())
            .unwrap()
    }

    #[test]
    fn test_depth_zero_is_static_eval() {
        let mut game = Game::new();
        let weights = EvalWeights::default();
        let score = full_window(&mut game, 0);
        assert_eq!(score, evaluate(&game, &weights));
    }

    #[test]
    fn test_finds_mate_in_one_for_white() {
        let mut game =
            Game::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4")
                .unwrap();
        assert_eq!(full_window(&mut game, 1), SCORE_MATE);
    }

    #[test]
    fn test_finds_mate_in_one_for_black() {
        let mut game =
            Game::from_fen("rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2")
                .unwrap();
        assert_eq!(full_window(&mut game, 1), -SCORE_MATE);
    }

    #[test]
    fn test_terminal_position_returns_eval() {
        let mut game =
            Game::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
                .unwrap();
        assert_eq!(full_window(&mut game, 3), -SCORE_MATE);
        assert_eq!(game.ply(), 0);
    }

    #[test]
    fn test_search_is_state_neutral() {
        let mut game = Game::new();
        let before = game.board();
        full_window(&mut game, 3);
        assert_eq!(game.board(), before);
        assert_eq!(game.turn(), Side::White);
        assert_eq!(game.ply(), 0);
    }

    #[test]
    fn test_pruning_matches_plain_minimax() {
        // a narrow window around the true value must not change it
        let mut game =
            Game::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3")
                .unwrap();
        let exact = full_window(&mut game, 2);
        let windowed = search(
            &mut game,
            2,
            exact - 0.5,
            exact + 0.5,
            true,
            &EvalWeights::default(),
        )
        .unwrap();
        assert!((windowed - exact).abs() < 1e-9, "{windowed} vs {exact}");
    }

    #[test]
    fn test_alpha_beta_visits_fewer_nodes() {
        let weights = EvalWeights::default();
        let mut game = Game::new();

        let mut pruned = Searcher::new(&weights);
        pruned
            .minimax(&mut game, 3, -SCORE_INFINITY, SCORE_INFINITY, true)
            .unwrap();

        // perft(3) = 8902 leaves, plus 421 interior nodes, without any cutoff
        assert!(pruned.nodes < 8902 + 421, "nodes: {}", pruned.nodes);
        assert!(pruned.nodes > 1);
    }
}
