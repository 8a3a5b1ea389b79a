//! `lift-policy` — dispatch decision procedures for the rust_lift framework.
//!
//! A [`DispatchPolicy`] answers three questions for an idle elevator:
//!
//! 1. **Whom may it board** at the floor it is standing on ([`admits`])?
//! 2. **Where should it deliver** the riders it carries
//!    ([`select_destination`])?
//! 3. **Where should it go to pick people up** when empty
//!    ([`select_pickup`])?
//!
//! The motion controller in `lift-sim` asks these questions in exactly that
//! order; policies hold no mutable state and make no moves themselves, which
//! is what lets two policies run side by side against the same arrival
//! stream and makes each decision unit-testable in isolation.
//!
//! [`admits`]: DispatchPolicy::admits
//! [`select_destination`]: DispatchPolicy::select_destination
//! [`select_pickup`]: DispatchPolicy::select_pickup

pub mod advanced;
pub mod basic;


pub use advanced::DirectionAware;
pub use basic::NearestFirst;

use lift_building::{Building, Elevator, Person};

// ── DispatchPolicy ────────────────────────────────────────────────────────────

/// Pluggable dispatch strategy.
///
/// Implementations must be stateless (or at least immutable): every method
/// takes the world by shared reference and returns a decision.  `Send + Sync`
/// so a service and its policies can cross thread boundaries as one unit.
pub trait DispatchPolicy: Send + Sync {
    /// Stable name, used as the report key for this policy's instance.
    fn name(&self) -> &'static str;

    /// May `person` (waiting at the elevator's current floor) board now?
    ///
    /// Called once per candidate in FIFO queue order while spare capacity
    /// remains; the elevator's rider list grows as candidates are accepted,
    /// so later answers may see a direction commitment formed by earlier
    /// ones.  Default: admit everyone.
    fn admits(&self, _elevator: &Elevator, _person: &Person) -> bool {
        true
    }

    /// Target floor for delivering the current riders, or `None` when the
    /// elevator is empty.
    fn select_destination(&self, elevator: &Elevator) -> Option<usize>;

    /// Floor to travel to for a pickup, or `None` when no floor has anyone
    /// waiting.  `elevator` indexes into `building.elevators`; the other
    /// entries are peers whose in-flight targets a coordinating policy may
    /// inspect.
    fn select_pickup(&self, building: &Building, elevator: usize) -> Option<usize>;
}

// ── PolicyKind ────────────────────────────────────────────────────────────────

/// The built-in policies, as configuration data.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PolicyKind {
    /// Nearest-floor heuristic, no direction awareness.
    Basic,
    /// Direction-aware, batch-favoring, multi-elevator-coordinating.
    Advanced,
}

impl PolicyKind {
    /// Instantiate the policy.
    pub fn build(self) -> Box<dyn DispatchPolicy> {
        match self {
            PolicyKind::Basic => Box::new(NearestFirst),
            PolicyKind::Advanced => Box::new(DirectionAware),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PolicyKind::Basic => NearestFirst.name(),
            PolicyKind::Advanced => DirectionAware.name(),
        }
    }
}
