//! Stable exit codes for leveler CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Invalid request, config or any other error.
pub const INVALID: i32 = 1;
/// `leveler decide` returned WARNING, or `leveler simulate` stopped on it.
pub const WARNING: i32 = 2;
/// `leveler simulate` hit `max_steps` before a terminal decision.
pub const STEP_LIMIT: i32 = 3;
/// `leveler brackets` input is not balanced.
pub const UNBALANCED: i32 = 4;
