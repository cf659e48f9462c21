use arrayvec::ArrayVec;

/// Position score. Positive favours White, negative favours Black.
pub type Score = f64;

pub const SCORE_INFINITY: Score = f64::INFINITY;
pub const SCORE_MATE: Score = 9999.0;

/// Upper bound on legal moves in any chess position (the known maximum is 218)
pub const MAX_LEGAL_MOVES: usize = 256;

pub type MoveList<M> = ArrayVec<M, MAX_LEGAL_MOVES>;

/// Outcome of a root search, kept for logging and benchmarks
#[derive(Clone, Debug)]
pub struct SearchResult<M> {
    pub best_move: Option<M>,
    /// Best root score from the mover's point of view
    pub score: Score,
    pub depth: u8,
    pub nodes: u64,
}
