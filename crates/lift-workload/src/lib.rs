//! `lift-workload` — arrival workload generation for the rust_lift framework.
//!
//! A workload is a set of sparse [`Burst`] descriptors ("25 people show up
//! around t=12s at floor 3, heading to floor 1, spread over 4s").  Before a
//! run starts the bursts are compiled once into a flat, time-sorted
//! [`ArrivalEvent`] schedule; the simulation then only ever sees individual
//! arrivals.
//!
//! All randomness flows through an injected [`lift_core::SimRng`], so a given seed
//! always compiles the same schedule.

pub mod burst;
pub mod error;
pub mod expand;
pub mod loader;

#[cfg(test)]
mod tests;

pub use burst::{randomize_bursts, Burst};
pub use error::{WorkloadError, WorkloadResult};
pub use expand::{compile_schedule, expand_burst, ArrivalEvent};
pub use loader::{load_bursts_csv, load_bursts_reader};
