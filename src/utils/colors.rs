/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Podium colors: gold, silver, bronze.
pub const GOLD: &str = "\x1b[38;5;220m";
pub const SILVER: &str = "\x1b[38;5;250m";
pub const BRONZE: &str = "\x1b[38;5;173m";

/// Streak color:
/// 0 → grey
/// 1..=6 → yellow
/// 7+ → green
pub fn color_for_streak(value: u32) -> &'static str {
    match value {
        0 => GREY,
        1..=6 => YELLOW,
        _ => GREEN,
    }
}

/// Color of the rank badge (1-based); ranks past the podium stay plain.
pub fn color_for_rank(rank: usize) -> &'static str {
    match rank {
        1 => GOLD,
        2 => SILVER,
        3 => BRONZE,
        _ => RESET,
    }
}
