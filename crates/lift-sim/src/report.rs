//! Per-instance performance summary.

use lift_building::MetricsLog;

/// Aggregated latency figures for one instance, in integer milliseconds.
///
/// `total_people` counts persons boarded at least once — people still
/// waiting in a floor queue when the report is taken are not included.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct PerformanceReport {
    /// Mean wait (arrival → boarding), rounded to the nearest ms.
    pub avg_waiting_ms: u64,

    /// Mean travel (boarding → drop-off), rounded to the nearest ms.
    pub avg_travel_ms: u64,

    /// Count of persons served (boarded at least once).
    pub total_people: usize,
}

impl From<&MetricsLog> for PerformanceReport {
    fn from(metrics: &MetricsLog) -> Self {
        Self {
            avg_waiting_ms: metrics.avg_wait_ms(),
            avg_travel_ms: metrics.avg_travel_ms(),
            total_people: metrics.total_people(),
        }
    }
}
