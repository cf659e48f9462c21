use crate::config::EvalWeights;
use crate::rules::{Rules, Side};
use crate::types::Score;

/// Static evaluation of the current position.
///
/// Returns an absolute score: positive favours White regardless of who is to
/// move. Terminal positions short-circuit: a mated side to move scores
/// `-mate_score` from its own point of view, any draw scores exactly zero.
pub fn evaluate<R: Rules>(rules: &R, weights: &EvalWeights) -> Score {
    let to_move = rules.turn();

    if rules.is_checkmate() {
        // the mated side is the side to move, so the sentinel favours the other
        return -to_move.perspective() * weights.mate_score;
    }

    if rules.is_draw() {
        return 0.0;
    }

    let mut score = material(rules, weights);

    score += to_move.perspective() * rules.legal_moves().len() as Score * weights.mobility_weight;

    if rules.is_check() {
        score += (!to_move).perspective() * weights.check_bonus;
    }

    score
}

/// White material minus Black material
fn material<R: Rules>(rules: &R, weights: &EvalWeights) -> Score {
    rules
        .board()
        .iter()
        .flatten()
        .flatten()
        .map(|piece| {
            let value = weights.piece_value(piece.kind);
            match piece.side {
                Side::White => value,
                Side::Black => -value,
            }
        })
        .sum()
}
