use crate::{
    driver::host::TickHandle,
    foundation::{
        core::{MAX_TICK_ELAPSED_MS, Timestamp},
        math::clamp_elapsed,
    },
};

/// Lifecycle phase of one mounted animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Built, never played.
    #[default]
    Idle,
    /// A tick is scheduled (or being processed).
    Playing,
    /// Stopped with no scheduled tick; may resume.
    Paused,
    /// Torn down; no transition leaves this phase.
    Destroyed,
}

/// Private per-animation timing state.
///
/// Invariant: `scheduled` is `Some` only while `phase` is [`Phase::Playing`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationState {
    phase: Phase,
    last_timestamp: Option<Timestamp>,
    noise_timeline: f64,
    scheduled: Option<TickHandle>,
}

impl AnimationState {
    /// Fresh idle state with the timeline at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Accumulated noise time.
    pub fn noise_timeline(&self) -> f64 {
        self.noise_timeline
    }

    /// Host timestamp of the last processed tick.
    pub fn last_timestamp(&self) -> Option<Timestamp> {
        self.last_timestamp
    }

    /// The pending tick, if any.
    pub fn scheduled_tick(&self) -> Option<TickHandle> {
        self.scheduled
    }

    /// Idle/Paused -> Playing, scheduling the first tick with `request`.
    ///
    /// Returns `false` (and never calls `request`) from Playing or Destroyed.
    pub fn start(&mut self, request: impl FnOnce() -> TickHandle) -> bool {
        match self.phase {
            Phase::Idle | Phase::Paused => {
                self.scheduled = Some(request());
                self.phase = Phase::Playing;
                true
            }
            Phase::Playing | Phase::Destroyed => false,
        }
    }

    /// Playing -> Paused. Returns the tick the caller must cancel.
    pub fn pause(&mut self) -> Option<TickHandle> {
        if self.phase != Phase::Playing {
            return None;
        }
        self.phase = Phase::Paused;
        self.scheduled.take()
    }

    /// Any -> Destroyed. Returns the tick the caller must cancel.
    pub fn destroy(&mut self) -> Option<TickHandle> {
        self.phase = Phase::Destroyed;
        self.scheduled.take()
    }

    /// Accept a fired tick. Stale, cancelled or foreign handles are rejected.
    pub fn accept_tick(&mut self, handle: TickHandle) -> bool {
        if self.phase != Phase::Playing || self.scheduled != Some(handle) {
            return false;
        }
        self.scheduled = None;
        true
    }

    /// Schedule the follow-up tick of an accepted one.
    pub fn reschedule(&mut self, handle: TickHandle) {
        debug_assert_eq!(self.phase, Phase::Playing);
        debug_assert!(self.scheduled.is_none());
        self.scheduled = Some(handle);
    }

    /// Advance the noise timeline for a tick at `now`.
    ///
    /// The first tick assumes one nominal frame elapsed; every tick's elapsed
    /// time is clamped to [`MAX_TICK_ELAPSED_MS`] so a long pause does not
    /// make the waves jump.
    pub fn advance(&mut self, now: Timestamp, speed_per_ms: f64) -> f64 {
        let elapsed = match self.last_timestamp {
            Some(last) => now.since(last),
            None => MAX_TICK_ELAPSED_MS,
        };
        self.last_timestamp = Some(now);
        self.noise_timeline += clamp_elapsed(elapsed, MAX_TICK_ELAPSED_MS) * speed_per_ms;
        self.noise_timeline
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/state.rs"]
mod tests;
