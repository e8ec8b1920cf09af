// Scoring constants
pub const SCORE_ATTEMPT_PENALTY: i32 = 2;
pub const MIN_WIN_SCORE: i32 = 1;

// Classic mode (fixed range, no scoring) constants
pub const CLASSIC_LOW: i32 = 1;
pub const CLASSIC_HIGH: i32 = 100;
pub const CLASSIC_MAX_ATTEMPTS: u32 = 7;
