//! CSV burst loader.
//!
//! # CSV format
//!
//! One row per burst, floors 1-indexed:
//!
//! ```csv
//! time_ms,amount,origin_floor,destination_floor,time_range_ms
//! 0,10,2,4,0
//! 12000,25,3,1,4000
//! ```
//!
//! Ids are assigned sequentially in row order.  Rows are validated (non-zero
//! amount, floors ≥ 1, destination ≠ origin) but floor upper bounds are not
//! checked here — the loader does not know the building's floor count, and
//! arrival injection drops out-of-range floors per instance anyway.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lift_core::BurstId;

use crate::{Burst, WorkloadError, WorkloadResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct BurstRecord {
    time_ms: u64,
    amount: u32,
    origin_floor: usize,
    destination_floor: usize,
    time_range_ms: u64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a burst set from a CSV file.
pub fn load_bursts_csv(path: &Path) -> WorkloadResult<Vec<Burst>> {
    let file = std::fs::File::open(path).map_err(WorkloadError::Io)?;
    load_bursts_reader(file)
}

/// Like [`load_bursts_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded workloads.
pub fn load_bursts_reader<R: Read>(reader: R) -> WorkloadResult<Vec<Burst>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut bursts = Vec::new();

    for (row, result) in csv_reader.deserialize::<BurstRecord>().enumerate() {
        let record = result.map_err(|e| WorkloadError::Parse(e.to_string()))?;
        validate(row, &record)?;
        bursts.push(Burst {
            id: BurstId(row as u32),
            time_ms: record.time_ms,
            amount: record.amount,
            origin_floor: record.origin_floor,
            destination_floor: record.destination_floor,
            time_range_ms: record.time_range_ms,
        });
    }

    Ok(bursts)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn validate(row: usize, record: &BurstRecord) -> WorkloadResult<()> {
    let fail = |reason: String| WorkloadError::InvalidBurst { row, reason };

    if record.amount == 0 {
        return Err(fail("amount must be at least 1".into()));
    }
    if record.origin_floor == 0 || record.destination_floor == 0 {
        return Err(fail("floors are 1-indexed; 0 is not a floor".into()));
    }
    if record.origin_floor == record.destination_floor {
        return Err(fail(format!(
            "origin and destination are both floor {}",
            record.origin_floor
        )));
    }
    Ok(())
}
