//! Quantization of wall-clock time into the counter a token is bound to.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{Error, Result};

/// Source of the current instant, in milliseconds since the unix epoch.
pub trait Clock {
    fn now_millis(&self) -> u64;
}

/// Reads the system wall clock.
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        // a clock set before the epoch reads as the epoch
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or_default()
    }
}

/// Always reports the same instant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl FixedClock {
    pub fn from_secs(secs: u64) -> Self {
        Self(secs.saturating_mul(1000))
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.0
    }
}

/// Whole seconds since the epoch, rounded half up.
pub fn epoch_seconds(unix_millis: u64) -> u64 {
    unix_millis.saturating_add(500) / 1000
}

/// Time slice for `period` at the given instant: `epoch_seconds / period`
/// rendered as 16 zero-padded lowercase hex digits.
pub fn time_slice_at(unix_millis: u64, period: u64) -> Result<String> {
    if period == 0 {
        return Err(Error::InvalidPeriod(period));
    }
    let counter = epoch_seconds(unix_millis) / period;
    Ok(hex::encode(counter.to_be_bytes()))
}

/// Time slice for `period` at the current system time.
pub fn time_slice(period: u64) -> Result<String> {
    time_slice_at(SystemClock.now_millis(), period)
}

/// Seconds left before the slice containing `unix_millis` rolls over.
pub fn seconds_remaining_at(unix_millis: u64, period: u64) -> Result<u64> {
    if period == 0 {
        return Err(Error::InvalidPeriod(period));
    }
    Ok(period - epoch_seconds(unix_millis) % period)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_sixteen_hex_digits() {
        assert_eq!(
            time_slice_at(1_666_329_317_842, 30).unwrap(),
            "00000000034f89f6"
        );
        assert_eq!(
            time_slice_at(1_666_329_317_842, 60).unwrap(),
            "0000000001a7c4fb"
        );
        assert_eq!(time_slice_at(0, 30).unwrap(), "0000000000000000");
    }

    #[test]
    fn rounds_to_nearest_second() {
        assert_eq!(epoch_seconds(29_499), 29);
        assert_eq!(epoch_seconds(29_500), 30);
        assert_eq!(time_slice_at(29_499, 30).unwrap(), "0000000000000000");
        assert_eq!(time_slice_at(29_500, 30).unwrap(), "0000000000000001");
    }

    #[test]
    fn constant_within_period_and_changes_at_boundary() {
        let k = 55_544_310u64;
        let start = time_slice_at(k * 30 * 1000, 30).unwrap();
        let end = time_slice_at((k * 30 + 29) * 1000, 30).unwrap();
        let before = time_slice_at((k * 30 - 1) * 1000, 30).unwrap();
        let after = time_slice_at((k + 1) * 30 * 1000, 30).unwrap();

        assert_eq!(start, end);
        assert_ne!(start, before);
        assert_ne!(start, after);
    }

    #[test]
    fn zero_period_is_rejected() {
        assert_eq!(time_slice_at(1_000, 0), Err(Error::InvalidPeriod(0)));
        assert_eq!(time_slice(0), Err(Error::InvalidPeriod(0)));
        assert_eq!(seconds_remaining_at(1_000, 0), Err(Error::InvalidPeriod(0)));
    }

    #[test]
    fn remaining_seconds_count_down() {
        assert_eq!(seconds_remaining_at(0, 30).unwrap(), 30);
        assert_eq!(seconds_remaining_at(29_000, 30).unwrap(), 1);
        assert_eq!(seconds_remaining_at(30_000, 30).unwrap(), 30);
    }

    #[test]
    fn fixed_clock_from_secs() {
        assert_eq!(FixedClock::from_secs(42).now_millis(), 42_000);
    }
}
