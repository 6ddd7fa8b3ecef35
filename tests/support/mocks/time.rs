// tests/support/mocks/time.rs
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;

/// Fixed timestamp every test clock starts from.
static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// Always answers with the fixed timestamp.
#[derive(Clone)]
pub struct FixedClock;

impl yatube_core::application::ports::time::Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/// Advances one minute per call, so records created later sort as newer.
#[derive(Default)]
pub struct SteppingClock {
    ticks: AtomicI64,
}

impl yatube_core::application::ports::time::Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        fixed_now() + Duration::minutes(tick)
    }
}
