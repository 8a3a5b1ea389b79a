//! Simulation observer trait for progress reporting and presentation hooks.

use lift_core::{ElevatorId, Millis, PersonId};

use crate::motion::LandingSummary;

/// Callbacks invoked by the service at key points of the event loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  This is the notification seam a
/// rendering layer would sit behind: transit starts carry everything needed
/// to animate a car (origin, target, duration), landings carry the counts
/// that change floor labels.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct MovePrinter;
///
/// impl SimObserver for MovePrinter {
///     fn on_transit_start(
///         &mut self,
///         now: Millis,
///         policy: &'static str,
///         car: ElevatorId,
///         from: usize,
///         to: usize,
///         duration_ms: u64,
///     ) {
///         println!("[{now}] {policy}/{car}: {from} -> {to} ({duration_ms} ms)");
///     }
/// }
/// ```
pub trait SimObserver {
    /// A person was injected (fan-out already done across instances).
    fn on_arrival(&mut self, _now: Millis, _person: PersonId, _origin: usize, _destination: usize) {
    }

    /// An elevator entered its busy window.
    fn on_transit_start(
        &mut self,
        _now: Millis,
        _policy: &'static str,
        _car: ElevatorId,
        _from: usize,
        _to: usize,
        _duration_ms: u64,
    ) {
    }

    /// An elevator landed, dropped off, and boarded.
    fn on_transit_end(
        &mut self,
        _now: Millis,
        _policy: &'static str,
        _car: ElevatorId,
        _summary: LandingSummary,
    ) {
    }

    /// The arrival window closed; no further scheduled arrivals will fire.
    fn on_window_end(&mut self, _now: Millis) {}

    /// The timer queue drained: every queue and every car is empty.
    fn on_settled(&mut self, _now: Millis) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to run the
/// service but don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
