//! Per-instance latency sample logs.

/// Unbounded append-only logs of wait and travel durations, in ms.
///
/// One wait sample is appended per boarding, one travel sample per drop-off,
/// so `waiting_ms.len()` is the count of people who have boarded at least
/// once — the "total people served" figure in the report.
#[derive(Debug, Default)]
pub struct MetricsLog {
    pub waiting_ms: Vec<u64>,
    pub travel_ms: Vec<u64>,
}

impl MetricsLog {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record_wait(&mut self, ms: u64) {
        self.waiting_ms.push(ms);
    }

    #[inline]
    pub fn record_travel(&mut self, ms: u64) {
        self.travel_ms.push(ms);
    }

    pub fn clear(&mut self) {
        self.waiting_ms.clear();
        self.travel_ms.clear();
    }

    /// Mean wait in ms, rounded to the nearest integer; 0 when empty.
    pub fn avg_wait_ms(&self) -> u64 {
        mean_rounded(&self.waiting_ms)
    }

    /// Mean travel in ms, rounded to the nearest integer; 0 when empty.
    pub fn avg_travel_ms(&self) -> u64 {
        mean_rounded(&self.travel_ms)
    }

    /// Count of people boarded at least once.
    #[inline]
    pub fn total_people(&self) -> usize {
        self.waiting_ms.len()
    }
}

fn mean_rounded(samples: &[u64]) -> u64 {
    if samples.is_empty() {
        return 0;
    }
    let sum: u64 = samples.iter().sum();
    let n = samples.len() as u64;
    // Round-half-up integer mean.
    (sum + n / 2) / n
}
