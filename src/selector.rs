use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::{EngineConfig, EvalWeights};
use crate::diagnostics::{Diagnostics, LogDiagnostics};
use crate::difficulty::DifficultyProfile;
use crate::error::RulesError;
use crate::rules::{Rules, Side};
use crate::search::Searcher;
use crate::types::{SearchResult, SCORE_INFINITY};

/// The engine's entry point: picks a move for the side to move.
///
/// One selector is meant to live for a whole game session. It owns the active
/// difficulty profile, the evaluation weights, the RNG used for noise moves
/// and the diagnostics sink that hears about recovered failures.
pub struct MoveSelector<G = StdRng> {
    profile: DifficultyProfile,
    weights: EvalWeights,
    rng: G,
    diagnostics: Box<dyn Diagnostics>,
}

impl MoveSelector<StdRng> {
    /// Selector at `level` (clamped) with an entropy-seeded RNG
    pub fn new(level: i64) -> Self {
        Self::with_rng(level, StdRng::from_entropy())
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config.difficulty, rng).with_weights(config.weights.clone())
    }
}

impl<G: Rng> MoveSelector<G> {
    pub fn with_rng(level: i64, rng: G) -> Self {
        Self {
            profile: DifficultyProfile::for_level(level),
            weights: EvalWeights::default(),
            rng,
            diagnostics: Box::new(LogDiagnostics),
        }
    }

    /// Replace the table profile. A later `set_difficulty` overrides this.
    pub fn with_profile(mut self, profile: DifficultyProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_weights(mut self, weights: EvalWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: impl Diagnostics + 'static) -> Self {
        self.diagnostics = Box::new(diagnostics);
        self
    }

    /// Switch to the table profile for `level`, clamped into 1..=10
    pub fn set_difficulty(&mut self, level: i64) {
        self.profile = DifficultyProfile::for_level(level);
        log::debug!(
            "difficulty set to level {} (depth {}, random factor {:.2})",
            self.profile.level,
            self.profile.search_depth,
            self.profile.random_factor
        );
    }

    pub fn difficulty(&self) -> DifficultyProfile {
        self.profile
    }

    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }

    /// Choose a move for the side to move without playing it.
    ///
    /// Returns `None` when the game is over or no legal move exists. Failures
    /// inside the search are reported to the diagnostics sink and replaced by
    /// a random legal move; they never reach the caller.
    pub fn select_move<R: Rules>(&mut self, rules: &mut R) -> Option<R::Move> {
        if rules.is_game_over() {
            return None;
        }
        let moves = rules.legal_moves();
        if moves.is_empty() {
            return None;
        }

        let profile = self.profile;
        let roll: f64 = self.rng.r#gen();
        if roll < profile.random_factor {
            let mv = moves.choose(&mut self.rng).cloned();
            log::trace!("noise roll {roll:.3} < {:.2}, playing {mv:?}", profile.random_factor);
            return mv;
        }

        match self.search_root(rules, &moves, profile.search_depth) {
            Ok(result) => {
                log::debug!(
                    "depth {} score {:.2} nodes {} best {:?}",
                    result.depth,
                    result.score,
                    result.nodes,
                    result.best_move
                );
                result.best_move
            }
            Err(error) => {
                self.diagnostics.report(&error);
                rules.legal_moves().choose(&mut self.rng).cloned()
            }
        }
    }

    /// Score every root move `depth` plies deep and keep the first best one.
    ///
    /// Root scores are from the mover's point of view. Below the root the
    /// search works on absolute scores, so a Black mover negates the child
    /// result and mirrors the window it passes down.
    pub fn search_root<R: Rules>(
        &self,
        rules: &mut R,
        moves: &[R::Move],
        depth: u8,
    ) -> Result<SearchResult<R::Move>, RulesError> {
        let mover = rules.turn();
        let perspective = mover.perspective();
        let opponent_maximizes = !mover == Side::White;

        let mut searcher = Searcher::new(&self.weights);
        let mut best_score = -SCORE_INFINITY;
        let mut best_move = None;
        let mut alpha = -SCORE_INFINITY;
        let beta = SCORE_INFINITY;

        for mv in moves {
            let (low, high) = match mover {
                Side::White => (alpha, beta),
                Side::Black => (-beta, -alpha),
            };
            let child = searcher.child(
                rules,
                mv,
                depth.saturating_sub(1),
                low,
                high,
                opponent_maximizes,
            )?;
            let score = perspective * child;

            // strict comparison: ties go to the earliest move
            if score > best_score {
                best_score = score;
                best_move = Some(mv.clone());
            }
            alpha = alpha.max(best_score);
        }

        Ok(SearchResult {
            best_move,
            score: best_score,
            depth,
            nodes: searcher.nodes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Game;
    use crate::types::SCORE_MATE;

    fn seeded(level: i64) -> MoveSelector {
        MoveSelector::with_rng(level, StdRng::seed_from_u64(7))
    }

    fn deterministic(depth: u8) -> MoveSelector {
        seeded(10).with_profile(DifficultyProfile::custom(depth, 0.0))
    }

    fn uci(game: &Game, mv: &shakmaty::Move) -> String {
        game.describe(mv).uci
    }

    #[test]
    fn test_set_difficulty_clamps() {
        let mut selector = seeded(5);
        selector.set_difficulty(42);
        assert_eq!(selector.difficulty().level, 10);
        selector.set_difficulty(-3);
        assert_eq!(selector.difficulty().level, 1);
        selector.set_difficulty(7);
        assert_eq!(selector.difficulty(), DifficultyProfile::for_level(7));
    }

    #[test]
    fn test_set_difficulty_replaces_custom_profile() {
        let mut selector = deterministic(1);
        selector.set_difficulty(3);
        assert_eq!(selector.difficulty(), DifficultyProfile::for_level(3));
    }

    #[test]
    fn test_from_config() {
        let config = EngineConfig {
            difficulty: 99,
            seed: Some(1),
            weights: EvalWeights {
                check_bonus: 0.25,
                ..EvalWeights::default()
            },
        };
        let selector = MoveSelector::from_config(&config);
        assert_eq!(selector.difficulty().level, 10);
        assert_eq!(selector.weights().check_bonus, 0.25);
    }

    #[test]
    fn test_white_mates_in_one() {
        let mut game =
            Game::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4")
                .unwrap();
        let mv = deterministic(1).select_move(&mut game).unwrap();
        assert_eq!(uci(&game, &mv), "h5f7", "Expected Qxf7#");
    }

    #[test]
    fn test_black_mates_in_one() {
        let mut game =
            Game::from_fen("rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2")
                .unwrap();
        for depth in 1..=3 {
            let mv = deterministic(depth).select_move(&mut game).unwrap();
            assert_eq!(uci(&game, &mv), "d8h4", "Expected Qh4# at depth {depth}");
        }
    }

    #[test]
    fn test_root_score_is_from_movers_view() {
        let mut game =
            Game::from_fen("rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2")
                .unwrap();
        let moves = game.legal_moves();
        let result = deterministic(1).search_root(&mut game, &moves, 1).unwrap();
        assert_eq!(result.score, SCORE_MATE);
        assert!(result.nodes >= moves.len() as u64);
        assert_eq!(game.ply(), 0);
    }

    #[test]
    fn test_no_move_when_stalemated() {
        let mut game = Game::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(seeded(10).select_move(&mut game).is_none());
    }

    #[test]
    fn test_no_move_when_drawn_by_rule() {
        // legal moves exist, but the fifty-move rule already ended the game
        let mut game = Game::from_fen("8/8/4k3/8/8/4K3/4R3/8 w - - 100 80").unwrap();
        assert!(seeded(10).select_move(&mut game).is_none());
    }

    #[test]
    fn test_random_path_returns_legal_move() {
        let mut game = Game::new();
        let mut selector = seeded(1).with_profile(DifficultyProfile::custom(4, 1.0));
        for _ in 0..20 {
            let mv = selector.select_move(&mut game).unwrap();
            assert!(game.legal_moves().contains(&mv));
        }
        assert_eq!(game.ply(), 0);
    }

    #[test]
    fn test_random_path_is_reproducible_with_seed() {
        let game = Game::new();
        let noisy = DifficultyProfile::custom(1, 1.0);
        let mut a = seeded(1).with_profile(noisy);
        let mut b = seeded(1).with_profile(noisy);
        for _ in 0..5 {
            assert_eq!(
                a.select_move(&mut game.clone()),
                b.select_move(&mut game.clone())
            );
        }
    }
}
