//! Spin eligibility as a pure function of a session record and the current
//! time. Nothing here reads the clock or touches storage.

use serde::{Deserialize, Serialize};

use crate::rate_limit::{days_between, seconds_until, COOLDOWN_MS, COOLDOWN_SECS, MAX_SPINS_PER_DAY};
use crate::record::SessionRecord;

/// Result of evaluating a record at a given instant.
///
/// `record` is the normalized record: if a daily reset applied, the caller
/// must persist it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct EligibilityState {
    pub can_spin: bool,
    pub seconds_until_next_spin: i64,
    pub can_get_second_chance: bool,
    pub record: SessionRecord,
}

impl EligibilityState {
    /// Both daily spins used; only the next day's reset unlocks the wheel.
    pub fn daily_limit_reached(&self) -> bool {
        self.record.daily_limit_reached()
    }
}

/// Clears the daily counters once a whole day has passed since the last spin.
pub fn apply_daily_reset(record: &SessionRecord, now: i64) -> SessionRecord {
    let mut record = record.clone();
    if record.last_spin.is_some_and(|last_spin| days_between(last_spin, now) > 0) {
        record.spins_today = 0;
        record.shared_today = false;
    }
    record
}

pub fn evaluate(record: &SessionRecord, now: i64) -> EligibilityState {
    let record = apply_daily_reset(record, now);

    let can_get_second_chance = record.spins_today == 1 && !record.shared_today;

    let Some(last_spin) = record.last_spin else {
        return EligibilityState {
            can_spin: true,
            seconds_until_next_spin: 0,
            can_get_second_chance,
            record,
        };
    };

    let elapsed = (now - last_spin).max(0);
    let can_spin_by_time = elapsed >= COOLDOWN_MS;
    let has_spins_left = record.spins_today < MAX_SPINS_PER_DAY;

    // A share spent while one spin was left unlocks it right away.
    let second_chance_unlocked = record.spins_today == 1 && record.shared_today;

    let (can_spin, seconds_until_next_spin) = if second_chance_unlocked {
        (true, 0)
    } else {
        let wait = if can_spin_by_time { 0 } else { seconds_until(elapsed, COOLDOWN_MS) };
        (can_spin_by_time && has_spins_left, wait)
    };

    log::debug!(
        "eligibility: last_spin={} elapsed_min={} spins_today={} shared_today={} can_spin={} wait={}s",
        last_spin,
        elapsed / 60_000,
        record.spins_today,
        record.shared_today,
        can_spin,
        seconds_until_next_spin
    );

    EligibilityState {
        can_spin,
        seconds_until_next_spin,
        can_get_second_chance,
        record,
    }
}

/// Formats a countdown as `m:ss`. Minutes are not folded into hours.
pub fn format_time_left(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Percentage of the cooldown already served, for progress bars.
pub fn cooldown_progress(seconds_left: i64) -> f64 {
    let left = seconds_left.clamp(0, COOLDOWN_SECS) as f64;
    100.0 - left / COOLDOWN_SECS as f64 * 100.0
}
