//! The pulse generator a host scheduler drives once per real-time tick.

use crate::waveform::WaveformState;
use crate::{PulseConfig, HIGH_VOLTS};

/// Binary TTL output level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TtlLevel {
    Low,
    High,
}

impl TtlLevel {
    pub fn is_high(self) -> bool {
        matches!(self, TtlLevel::High)
    }

    /// The voltage to put on the output line: 5 V high, 0 V low.
    pub fn volts(self) -> f64 {
        match self {
            TtlLevel::High => HIGH_VOLTS,
            TtlLevel::Low => 0.0,
        }
    }
}

/// Generates the duty-cycle waveform, one level per tick.
///
/// The host scheduler owns the cadence: it constructs the generator with its
/// tick period, calls [`tick`](Self::tick) once per period while running, and
/// reports period changes via [`set_tick_period`](Self::set_tick_period) and
/// pause/unpause events via [`pause`](Self::pause) and
/// [`resume`](Self::resume). A paused generator holds the line low and keeps
/// its phase, so resuming continues the cycle where it stopped.
///
/// `tick` is constant-time and does not allocate, lock, or perform I/O.
#[derive(Debug, Clone)]
pub struct PulseGenerator {
    state: WaveformState,
    running: bool,
    level: TtlLevel,
}

impl PulseGenerator {
    /// Create a generator at the default 30 Hz / 25% duty waveform.
    ///
    /// `tick_period_ms` is the host scheduler's period. The scheduler is
    /// expected to pass a positive value; a zero period produces a waveform
    /// that never advances, nothing worse.
    pub fn new(tick_period_ms: f64) -> Self {
        Self {
            state: WaveformState::new(tick_period_ms),
            running: true,
            level: TtlLevel::Low,
        }
    }

    /// Apply a new frequency/duty pair, clamping out-of-range values.
    ///
    /// The phase is not reset, so a mid-cycle change shows up as one
    /// truncated or stretched cycle before the new timing takes over.
    pub fn set_parameters(&mut self, cfg: PulseConfig) {
        self.state.apply_config(&cfg);
    }

    /// Adopt a new scheduler tick period, effective on the next tick.
    pub fn set_tick_period(&mut self, tick_period_ms: f64) {
        self.state.set_tick_period(tick_period_ms);
    }

    /// Advance one tick and return the level for it.
    ///
    /// Wraps the accumulated time into the current cycle, emits high while it
    /// is short of the duty boundary (low at or past it), then moves the
    /// phase forward by one tick period.
    ///
    /// The host stops ticking while paused; a tick that arrives anyway holds
    /// the line low and leaves the phase untouched.
    pub fn tick(&mut self) -> TtlLevel {
        if !self.running {
            return TtlLevel::Low;
        }
        self.state.wrap();
        self.level = if self.state.in_high_phase() {
            TtlLevel::High
        } else {
            TtlLevel::Low
        };
        self.state.advance();
        self.level
    }

    /// Stop the waveform and force the output low.
    ///
    /// No current while paused: the forced level is observable through
    /// [`level`](Self::level) immediately, before any further tick.
    pub fn pause(&mut self) {
        self.running = false;
        self.level = TtlLevel::Low;
    }

    /// Return to running. The phase is not reset; the waveform picks up from
    /// the elapsed time at the moment of pause.
    pub fn resume(&mut self) {
        self.running = true;
    }

    /// The level emitted by the most recent tick, or the forced low level
    /// while paused.
    pub fn level(&self) -> TtlLevel {
        self.level
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The waveform timing state, for observation.
    pub fn waveform(&self) -> &WaveformState {
        &self.state
    }
}

impl Default for PulseGenerator {
    fn default() -> Self {
        Self::new(1.0)
    }
}
