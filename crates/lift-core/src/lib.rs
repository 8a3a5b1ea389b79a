//! `lift-core` — foundational types for the `rust_lift` elevator-dispatch
//! simulation framework.
//!
//! This crate is a dependency of every other `lift-*` crate.  It intentionally
//! has no `lift-*` dependencies and minimal external ones (only `rand`,
//! `thiserror`, and `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`ids`]      | `PersonId`, `ElevatorId`, `BurstId`                   |
//! | [`time`]     | `Millis` — the simulated-time unit                    |
//! | [`rng`]      | `SimRng` — seeded, replayable randomness              |
//! | [`settings`] | `SimSettings` and all named simulation bounds         |
//! | [`error`]    | `LiftError`, `LiftResult`                             |

pub mod error;
pub mod ids;
pub mod rng;
pub mod settings;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{LiftError, LiftResult};
pub use ids::{BurstId, ElevatorId, PersonId};
pub use rng::SimRng;
pub use settings::SimSettings;
pub use time::Millis;
