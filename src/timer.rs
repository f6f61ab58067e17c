use std::time::Duration;

/// Repeating timer driven by elapsed frame time.
///
/// The timer never runs on its own: the host loop feeds it the time that
/// passed since the previous frame and it reports how many periods completed.
/// Dropping it is cancellation, so once the owner lets go of it no further
/// fire can be observed.
#[derive(Debug)]
pub struct IntervalTimer {
    period: Duration,
    elapsed: Duration,
}

impl IntervalTimer {
    /// `period` must be non-zero; the carousel validates this before starting a timer.
    pub fn start(period: Duration) -> Self {
        debug_assert!(!period.is_zero());
        Self {
            period,
            elapsed: Duration::ZERO,
        }
    }

    /// Accumulates `dt` and returns the number of periods that completed.
    ///
    /// Runs in constant time however large `dt` is; the count saturates at `u64::MAX`.
    pub fn advance(&mut self, dt: Duration) -> u64 {
        self.elapsed = self.elapsed.saturating_add(dt);
        let elapsed = self.elapsed.as_nanos();
        let period = self.period.as_nanos();
        let fires = elapsed / period;
        if fires > 0 {
            self.elapsed = nanos_to_duration(elapsed % period);
        }
        u64::try_from(fires).unwrap_or(u64::MAX)
    }
}

// `nanos` is below one period, which itself came from a `Duration`.
fn nanos_to_duration(nanos: u128) -> Duration {
    const NANOS_PER_SEC: u128 = 1_000_000_000;
    let secs = u64::try_from(nanos / NANOS_PER_SEC).unwrap_or(u64::MAX);
    Duration::new(secs, (nanos % NANOS_PER_SEC) as u32)
}
