pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 10;

/// Search budget and move noise for one skill level
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DifficultyProfile {
    pub level: u8,
    /// Plies searched below the root, root included
    pub search_depth: u8,
    /// Probability of skipping the search and playing a random legal move
    pub random_factor: f64,
}

const fn profile(level: u8, search_depth: u8, random_factor: f64) -> DifficultyProfile {
    DifficultyProfile {
        level,
        search_depth,
        random_factor,
    }
}

/// Ordered by level; depth never drops and noise never rises as level goes up
pub const PROFILES: [DifficultyProfile; MAX_LEVEL as usize] = [
    profile(1, 1, 0.60),
    profile(2, 1, 0.40),
    profile(3, 2, 0.40),
    profile(4, 2, 0.30),
    profile(5, 2, 0.20),
    profile(6, 3, 0.20),
    profile(7, 3, 0.10),
    profile(8, 3, 0.05),
    profile(9, 4, 0.05),
    profile(10, 4, 0.00),
];

/// Clamp any integer into `MIN_LEVEL..=MAX_LEVEL`
pub fn clamp_level(level: i64) -> u8 {
    // the clamp guarantees the value fits in u8
    level.clamp(i64::from(MIN_LEVEL), i64::from(MAX_LEVEL)) as u8
}

impl DifficultyProfile {
    /// Profile for `level`, clamped into range. Never fails.
    pub fn for_level(level: i64) -> Self {
        let level = clamp_level(level);
        PROFILES[usize::from(level - MIN_LEVEL)]
    }

    /// A profile outside the fixed table, for tuning and tests.
    /// Depth is raised to at least 1 and the factor clamped into [0, 1].
    pub fn custom(search_depth: u8, random_factor: f64) -> Self {
        let random_factor = if random_factor.is_nan() {
            0.0
        } else {
            random_factor.clamp(0.0, 1.0)
        };
        Self {
            level: 0,
            search_depth: search_depth.max(1),
            random_factor,
        }
    }
}

impl Default for DifficultyProfile {
    fn default() -> Self {
        Self::for_level(crate::config::DEFAULT_DIFFICULTY)
    }
}
