// Tolerance for comparing a reached value against a target
pub const EPSILON: f64 = 1e-5;

pub const DEFAULT_TARGET: f64 = 24.0;
pub const DEFAULT_NUM_CARDS: usize = 4;
pub const DEFAULT_MIN_CARD: i64 = 1;
pub const DEFAULT_MAX_CARD: i64 = 10;

// Forward enumeration grows exponentially; this bound also keeps partition masks in a u64
pub const MAX_DEAL_SIZE: usize = 16;

// Largest card magnitude whose integer value an f64 holds exactly (2^53)
pub const MAX_EXACT_CARD: i64 = 1 << 53;
