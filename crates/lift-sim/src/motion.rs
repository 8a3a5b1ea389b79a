//! The elevator motion controller: dispatch evaluation and the
//! transit state machine.
//!
//! Each elevator is a two-state machine, `Idle → InTransit → Idle`.
//! [`evaluate_dispatch`] drives `Idle → InTransit` (boarding at the current
//! floor, then asking the policy where to go); [`complete_transit`] drives
//! the way back (landing, drop-off, boarding, arming the dwell timer whose
//! expiry re-evaluates dispatch).  Together with the timer queue this forms
//! the self-sustaining loop that keeps cars moving while work exists.

use lift_core::settings::{RETRY_DELAY_MS, WATCHDOG_MARGIN_MS};
use lift_core::{ElevatorId, Millis};

use crate::{SimInstance, SimObserver, TimerEvent, TimerQueue};

/// Outcome of one landing, for the observer.
pub struct LandingSummary {
    pub floor: usize,
    pub dropped: usize,
    pub boarded: usize,
}

// ── Dispatch evaluation ───────────────────────────────────────────────────────

/// Evaluate dispatch for every idle elevator of `inst`.
///
/// Per idle car, in order: board whomever the policy admits at the current
/// floor, then move toward the best delivery floor if carrying, else toward
/// the best pickup floor if any demand exists, else stay idle.  If demand
/// remains while every car is mid-flight, arm a single bounded retry instead
/// of dropping the work.
pub fn evaluate_dispatch<O: SimObserver>(
    inst: &mut SimInstance,
    instance_index: usize,
    now: Millis,
    timers: &mut TimerQueue,
    observer: &mut O,
) {
    for car in 0..inst.building.elevators.len() {
        if inst.building.elevators[car].is_busy() {
            continue;
        }

        board_at_current_floor(inst, car, now);

        let target = inst
            .policy
            .select_destination(&inst.building.elevators[car])
            .or_else(|| inst.policy.select_pickup(&inst.building, car));

        if let Some(target) = target {
            begin_move(inst, instance_index, car, target, now, timers, observer);
        }
    }

    // Liveness: demand with every car mid-flight gets a bounded retry.
    if inst.building.has_demand()
        && inst.building.elevators.iter().all(|e| e.is_busy())
        && !inst.retry_armed
    {
        inst.retry_armed = true;
        timers.push(
            now + RETRY_DELAY_MS,
            TimerEvent::RetryDispatch {
                instance: instance_index,
                generation: inst.generation,
            },
        );
    }
}

// ── Transit completion ────────────────────────────────────────────────────────

/// Land `elevator`: take the transit target as the current floor, drop off
/// riders bound for it (sampling travel times, bumping the exit counter),
/// board admitted waiters up to capacity, and arm the dwell timer that will
/// re-evaluate dispatch.
///
/// A stale call — the car is no longer in transit, e.g. after a reset whose
/// generation check the caller skipped — is a no-op.
pub fn complete_transit<O: SimObserver>(
    inst: &mut SimInstance,
    instance_index: usize,
    car: usize,
    now: Millis,
    timers: &mut TimerQueue,
    observer: &mut O,
) {
    if !inst.building.elevators[car].is_busy() {
        return;
    }

    inst.building.elevators[car].complete_transit();
    let floor = inst.building.elevators[car].current_floor;

    let dropped = inst.building.elevators[car].drop_off_at(floor);
    inst.building.floors[floor].exits += dropped.len() as u64;
    for person in &dropped {
        if let Some(picked_up) = person.picked_up_at {
            inst.metrics.record_travel(now.since(picked_up));
        }
    }

    let boarded = board_at_current_floor(inst, car, now);

    timers.push(
        now + inst.settings.dwell_ms,
        TimerEvent::DwellDone {
            instance: instance_index,
            elevator: ElevatorId(car as u32),
            generation: inst.generation,
        },
    );

    observer.on_transit_end(
        now,
        inst.name(),
        ElevatorId(car as u32),
        LandingSummary {
            floor,
            dropped: dropped.len(),
            boarded,
        },
    );
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Board admitted waiters at the car's current floor, FIFO, up to capacity.
/// Stamps `picked_up_at` and samples wait times.  Returns the boarded count.
fn board_at_current_floor(inst: &mut SimInstance, car: usize, now: Millis) -> usize {
    // Explicit field borrows so the borrow checker sees disjoint access.
    let policy = &inst.policy;
    let metrics = &mut inst.metrics;
    let floors = &mut inst.building.floors;
    let elevator = &mut inst.building.elevators[car];

    let queue = &mut floors[elevator.current_floor].waiting;
    let mut boarded = 0;
    let mut i = 0;

    while i < queue.len() && elevator.spare_capacity() > 0 {
        if policy.admits(elevator, &queue[i]) {
            // VecDeque::remove preserves FIFO order for the people left behind.
            let Some(mut person) = queue.remove(i) else {
                break;
            };
            metrics.record_wait(person.board(now));
            elevator.riders.push(person);
            boarded += 1;
        } else {
            i += 1;
        }
    }
    boarded
}

/// Enter the busy window for a move to `target` and arm its completion and
/// watchdog timers.
fn begin_move<O: SimObserver>(
    inst: &mut SimInstance,
    instance_index: usize,
    car: usize,
    target: usize,
    now: Millis,
    timers: &mut TimerQueue,
    observer: &mut O,
) {
    let elevator = &mut inst.building.elevators[car];
    let from = elevator.current_floor;
    let duration = elevator.begin_transit(target, inst.settings.speed_ms_per_floor);

    timers.push(
        now + duration,
        TimerEvent::TransitDone {
            instance: instance_index,
            elevator: ElevatorId(car as u32),
            generation: inst.generation,
        },
    );
    // Guards against a lost dwell wake-up leaving a loaded car idle forever.
    timers.push(
        now + duration + inst.settings.dwell_ms + WATCHDOG_MARGIN_MS,
        TimerEvent::Watchdog {
            instance: instance_index,
            elevator: ElevatorId(car as u32),
            generation: inst.generation,
        },
    );

    observer.on_transit_start(now, inst.name(), ElevatorId(car as u32), from, target, duration);
}
