use std::time::Duration;

pub const SPIN_COOLDOWN: Duration = Duration::from_secs(3600);
pub const DAILY_WINDOW: Duration = Duration::from_secs(3600 * 24);
/// How often a visitor capped for the day re-checks for the daily reset.
pub const DAILY_RESET_RECHECK: Duration = Duration::from_secs(60);

pub const COOLDOWN_MS: i64 = SPIN_COOLDOWN.as_millis() as i64;
pub const DAY_MS: i64 = DAILY_WINDOW.as_millis() as i64;
pub const COOLDOWN_SECS: i64 = SPIN_COOLDOWN.as_secs() as i64;

pub const MAX_SPINS_PER_DAY: u32 = 2;

/// Whole days between `last_spin` and `now`, truncated toward zero.
/// Negative gaps (clock moved backwards) count as zero days.
pub fn days_between(last_spin: i64, now: i64) -> i64 {
    if now <= last_spin {
        return 0;
    }
    (now - last_spin) / DAY_MS
}

/// Seconds left in the cooldown window, rounded up.
pub fn seconds_until(elapsed_ms: i64, window_ms: i64) -> i64 {
    let remaining = window_ms - elapsed_ms;
    if remaining <= 0 {
        0
    } else {
        (remaining + 999) / 1000
    }
}
