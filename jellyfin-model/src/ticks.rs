//! Jellyfin expresses durations and positions in .NET ticks of 100ns.

use std::time::Duration;

pub const TICKS_PER_SECOND: i64 = 10_000_000;
pub const TICKS_PER_MILLISECOND: i64 = 10_000;

const NANOS_PER_TICK: u128 = 100;

/// Converts ticks to a [`Duration`]; negative tick counts have none.
pub fn ticks_to_duration(ticks: i64) -> Option<Duration> {
    let ticks = u64::try_from(ticks).ok()?;
    let secs = ticks / TICKS_PER_SECOND as u64;
    let nanos = (ticks % TICKS_PER_SECOND as u64) * NANOS_PER_TICK as u64;
    Some(Duration::new(secs, nanos as u32))
}

/// Converts a [`Duration`] to ticks, saturating at `i64::MAX`.
pub fn duration_to_ticks(duration: Duration) -> i64 {
    let ticks = duration.as_nanos() / NANOS_PER_TICK;
    i64::try_from(ticks).unwrap_or(i64::MAX)
}

pub fn seconds_to_ticks(seconds: i64) -> i64 {
    seconds.saturating_mul(TICKS_PER_SECOND)
}
