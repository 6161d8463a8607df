//! Reconnect backoff
//!
//! While the friends endpoint is unreachable the app retries with an
//! exponential delay: 5s, 10s, 20s, 40s, then 60s forever.

use std::time::Duration;

pub const INITIAL_RECONNECT_DELAY: Duration = Duration::from_secs(5);
pub const MAX_RECONNECT_DELAY: Duration = Duration::from_secs(60);

/// Delay to wait after the attempt that used `current`
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use friendstui::logic::retry::next_reconnect_delay;
///
/// assert_eq!(next_reconnect_delay(Duration::from_secs(5)), Duration::from_secs(10));
/// assert_eq!(next_reconnect_delay(Duration::from_secs(40)), Duration::from_secs(60));
/// ```
pub fn next_reconnect_delay(current: Duration) -> Duration {
    current.saturating_mul(2).min(MAX_RECONNECT_DELAY)
}

/// Whether a periodic refresh is due
///
/// An interval of zero disables periodic refresh.
pub fn should_refresh(elapsed: Duration, interval_secs: u64) -> bool {
    interval_secs > 0 && elapsed >= Duration::from_secs(interval_secs)
}
