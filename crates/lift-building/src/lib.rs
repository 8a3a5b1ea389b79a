//! `lift-building` — per-instance physical state for the rust_lift framework.
//!
//! One [`Building`] is one simulation instance's world: floors with FIFO
//! waiting queues and exit counters, one to three capacity-bounded elevators,
//! nothing else.  All mutation goes through the motion controller and the
//! arrival-injection path in `lift-sim`; nothing in this crate arms timers or
//! makes dispatch decisions.
//!
//! # Invariants
//!
//! - A person is in exactly one place: a floor queue, an elevator, or (as a
//!   count) an exit counter.  Boarding and drop-off move the owned `Person`
//!   value, so the type system enforces this.
//! - `riders.len() <= ELEVATOR_CAPACITY` at all times.
//! - At most one in-flight [`Transit`] per elevator.
//! - Exit counters only ever increase.

pub mod building;
pub mod elevator;
pub mod floor;
pub mod metrics;
pub mod person;

#[cfg(test)]
mod tests;

pub use building::Building;
pub use elevator::{Direction, Elevator, Transit};
pub use floor::Floor;
pub use metrics::MetricsLog;
pub use person::Person;
