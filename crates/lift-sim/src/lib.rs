//! `lift-sim` — the simulation orchestrator for the rust_lift framework.
//!
//! # Event loop
//!
//! ```text
//! while timers remain:
//!   ① Pop the earliest timestamp batch; the clock jumps to it.
//!   ② Process events in arming (FIFO) order:
//!        Arrival        → inject the person into every instance, dispatch
//!        TransitDone    → land, drop off, board, arm the dwell timer
//!        DwellDone      → re-evaluate dispatch (the self-sustaining loop)
//!        RetryDispatch  → re-evaluate after the all-cars-busy backoff
//!        Watchdog       → re-evaluate iff a car sits idle with riders
//!        WindowEnd      → clear the `running` flag
//! ```
//!
//! Concurrency is cooperative and single-threaded: every mutation happens
//! while one timer event is being processed, so boarding, drop-off, metric
//! sampling, and dispatch decisions are atomic with respect to each other.
//! Elevators' transit episodes interleave only at timer boundaries and may
//! complete in any relative order.
//!
//! Stale timers are neutralized by a per-instance generation counter:
//! `configure`/reset bump it, and completions carrying an old generation are
//! discarded instead of mutating a world they no longer describe.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_policy::PolicyKind;
//! use lift_sim::{NoopObserver, ServiceBuilder};
//!
//! let mut service = ServiceBuilder::new()
//!     .seed(42)
//!     .policy(PolicyKind::Basic)
//!     .policy(PolicyKind::Advanced)
//!     .build()?;
//! service.randomize_bursts(15);
//! service.start();
//! service.run_until_settled(&mut NoopObserver);
//! let report = service.performance_report();
//! ```

pub mod builder;
pub mod error;
pub mod event;
pub mod instance;
pub mod motion;
pub mod observer;
pub mod report;
pub mod service;


pub use builder::ServiceBuilder;
pub use error::{SimError, SimResult};
pub use event::{TimerEvent, TimerQueue};
pub use instance::SimInstance;
pub use observer::{NoopObserver, SimObserver};
pub use report::PerformanceReport;
pub use service::SimulationService;
