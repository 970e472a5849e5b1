//! Time Source
//!
//! Token issuance and expiry read the wall clock through [`Clock`] so tests
//! can pin or advance time.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Duration, Utc};

/// Wall-clock source
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The real clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually driven clock with one-second resolution
#[derive(Debug)]
pub struct ManualClock {
    unix_secs: AtomicI64,
}

impl ManualClock {
    pub fn at_unix(secs: i64) -> Self {
        Self {
            unix_secs: AtomicI64::new(secs),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.unix_secs.fetch_add(by.num_seconds(), Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.unix_secs.load(Ordering::SeqCst), 0).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::at_unix(100);
        assert_eq!(clock.now().timestamp(), 100);

        clock.advance(Duration::hours(1));
        assert_eq!(clock.now().timestamp(), 3_700);

        clock.advance(Duration::seconds(-3_695));
        assert_eq!(clock.now().timestamp(), 5);
    }
}
