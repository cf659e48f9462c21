use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::rules::PieceKind;
use crate::types::{Score, SCORE_MATE};

pub const DEFAULT_DIFFICULTY: i64 = 5;

/// Weights of the static evaluator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    pub pawn: Score,
    pub knight: Score,
    pub bishop: Score,
    pub rook: Score,
    pub queen: Score,
    pub king: Score,
    /// Per legal move available to the side to move
    pub mobility_weight: Score,
    /// Awarded to the side giving check
    pub check_bonus: Score,
    /// Magnitude of a checkmate score; must dominate everything else
    pub mate_score: Score,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            pawn: 1.0,
            knight: 3.0,
            bishop: 3.0,
            rook: 5.0,
            queen: 9.0,
            king: 0.0,
            mobility_weight: 0.1,
            check_bonus: 0.5,
            mate_score: SCORE_MATE,
        }
    }
}

impl EvalWeights {
    pub fn piece_value(&self, kind: PieceKind) -> Score {
        match kind {
            PieceKind::Pawn => self.pawn,
            PieceKind::Knight => self.knight,
            PieceKind::Bishop => self.bishop,
            PieceKind::Rook => self.rook,
            PieceKind::Queen => self.queen,
            PieceKind::King => self.king,
        }
    }

    /// Largest score a non-terminal position can reach with these weights.
    /// Assumes at most 16 pieces a side and 218 legal moves.
    fn max_positional_score(&self) -> Score {
        let pieces = self.king.abs()
            + self.queen.abs()
            + 2.0 * (self.rook.abs() + self.bishop.abs() + self.knight.abs())
            + 8.0 * self.pawn.abs();
        // promotions can turn every pawn into a queen
        let pieces = pieces + 8.0 * (self.queen.abs() - self.pawn.abs()).max(0.0);
        2.0 * pieces + 218.0 * self.mobility_weight.abs() + self.check_bonus.abs()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let all = [
            self.pawn,
            self.knight,
            self.bishop,
            self.rook,
            self.queen,
            self.king,
            self.mobility_weight,
            self.check_bonus,
            self.mate_score,
        ];
        if all.iter().any(|w| !w.is_finite()) {
            return Err(ConfigError::Invalid("weights must be finite".to_string()));
        }
        if self.mate_score <= self.max_positional_score() {
            return Err(ConfigError::Invalid(format!(
                "mate_score {} does not dominate positional scores up to {}",
                self.mate_score,
                self.max_positional_score()
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Initial difficulty level, clamped into 1..=10
    pub difficulty: i64,
    /// Fixed RNG seed for reproducible random moves
    pub seed: Option<u64>,
    pub weights: EvalWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            difficulty: DEFAULT_DIFFICULTY,
            seed: None,
            weights: EvalWeights::default(),
        }
    }
}

impl EngineConfig {
    pub fn load_from_json(json_str: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json_str)?;
        config.weights.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::load_from_json(&text)
    }
}
