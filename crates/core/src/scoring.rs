//! Scoring and level progression.
//!
//! - A lock that clears `n` rows awards `100 * n^2` points (1: 100, 2: 400,
//!   3: 900, 4: 1600), so multi-line clears pay super-linearly.
//! - The level is `lines / 10 + 1`.
//! - Each level-up shortens the gravity interval by 50ms, down to 100ms.

use crate::types::{
    INITIAL_TICK_MS, LINES_PER_LEVEL, LINE_CLEAR_BASE_SCORE, MIN_TICK_MS, TICK_STEP_MS,
};

/// Points for clearing `lines` rows with a single lock
pub fn line_clear_score(lines: u32) -> u32 {
    lines
        .saturating_mul(lines)
        .saturating_mul(LINE_CLEAR_BASE_SCORE)
}

/// Level reached after clearing `lines` rows in total
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL + 1
}

/// Gravity interval after one level-up event, starting from `current_ms`
pub fn next_tick_interval_ms(current_ms: u32) -> u32 {
    current_ms.saturating_sub(TICK_STEP_MS).max(MIN_TICK_MS)
}

/// Gravity interval for `level` when levels are gained one at a time
pub fn tick_interval_ms_for_level(level: u32) -> u32 {
    let steps = level.saturating_sub(1);
    INITIAL_TICK_MS
        .saturating_sub(steps.saturating_mul(TICK_STEP_MS))
        .max(MIN_TICK_MS)
}
