//! Timing state for the on/off cycle and the clamping math behind it.

use crate::{
    PulseConfig, DEFAULT_DUTY_PERCENT, DEFAULT_FREQUENCY_HZ, MAX_FREQUENCY_HZ, MIN_FREQUENCY_HZ,
};

/// Longest allowed cycle, set by the slowest allowed frequency.
const MAX_CYCLE_PERIOD_MS: f64 = 1000.0 / MIN_FREQUENCY_HZ;
/// Shortest allowed cycle, set by the fastest allowed frequency.
const MIN_CYCLE_PERIOD_MS: f64 = 1000.0 / MAX_FREQUENCY_HZ;

/// Where we are within the current cycle, and how long that cycle is.
///
/// All durations are in milliseconds. `high_duration_ms` is derived from the
/// cycle period and duty fraction and is recomputed whenever either changes,
/// so it is always consistent with them between ticks.
#[derive(Debug, Clone, Copy)]
pub struct WaveformState {
    /// Duration of one full on/off cycle.
    cycle_period_ms: f64,
    /// Fraction of the cycle (0.0 to 1.0) during which the output is high.
    duty_fraction: f64,
    /// Derived: `cycle_period_ms * duty_fraction`.
    high_duration_ms: f64,
    /// Duration of one scheduler tick, supplied by the host.
    tick_period_ms: f64,
    /// Accumulated time within the current cycle. Wraps modulo
    /// `cycle_period_ms` at the start of every tick.
    elapsed_ms: f64,
}

impl WaveformState {
    /// State at the defaults (30 Hz, 25% duty), phase at zero.
    pub fn new(tick_period_ms: f64) -> Self {
        let mut state = Self {
            cycle_period_ms: 0.0,
            duty_fraction: 0.0,
            high_duration_ms: 0.0,
            tick_period_ms,
            elapsed_ms: 0.0,
        };
        state.apply_config(&PulseConfig {
            frequency_hz: DEFAULT_FREQUENCY_HZ,
            duty_percent: DEFAULT_DUTY_PERCENT,
        });
        state
    }

    /// Convert a frequency/duty pair into cycle timing, clamping both into
    /// range, and recompute the high duration.
    ///
    /// The phase (`elapsed_ms`) is deliberately left alone: a change landing
    /// mid-cycle keeps the current position, which can visibly truncate or
    /// extend one cycle before the waveform settles into the new timing.
    pub fn apply_config(&mut self, cfg: &PulseConfig) {
        // A zero or negative frequency has no cycle to speak of; treat it as
        // out-of-range and pin it to the slowest rate before dividing.
        let frequency_hz = cfg.frequency_hz.max(MIN_FREQUENCY_HZ);
        self.cycle_period_ms = 1000.0 / frequency_hz;
        self.duty_fraction = (cfg.duty_percent / 100.0).clamp(0.0, 1.0);
        self.clamp_cycle_period();
        self.high_duration_ms = self.cycle_period_ms * self.duty_fraction;
    }

    /// Keep the cycle period within the bounds implied by the 0.3 Hz to
    /// 3000 Hz frequency range. The boundary values themselves clamp.
    fn clamp_cycle_period(&mut self) {
        if self.cycle_period_ms >= MAX_CYCLE_PERIOD_MS {
            self.cycle_period_ms = MAX_CYCLE_PERIOD_MS;
        } else if self.cycle_period_ms <= MIN_CYCLE_PERIOD_MS {
            self.cycle_period_ms = MIN_CYCLE_PERIOD_MS;
        }
    }

    /// Overwrite the tick period. Takes effect on the next advance.
    pub fn set_tick_period(&mut self, tick_period_ms: f64) {
        self.tick_period_ms = tick_period_ms;
    }

    /// Wrap the accumulated time back into the current cycle.
    pub(crate) fn wrap(&mut self) {
        self.elapsed_ms %= self.cycle_period_ms;
    }

    /// Whether the wrapped phase sits in the high part of the cycle.
    ///
    /// Low exactly at the duty boundary: the output drops at or after
    /// `high_duration_ms`, never on it.
    pub(crate) fn in_high_phase(&self) -> bool {
        self.elapsed_ms < self.high_duration_ms
    }

    /// Move one tick period forward.
    pub(crate) fn advance(&mut self) {
        self.elapsed_ms += self.tick_period_ms;
    }

    pub fn cycle_period_ms(&self) -> f64 {
        self.cycle_period_ms
    }

    pub fn duty_fraction(&self) -> f64 {
        self.duty_fraction
    }

    pub fn high_duration_ms(&self) -> f64 {
        self.high_duration_ms
    }

    pub fn tick_period_ms(&self) -> f64 {
        self.tick_period_ms
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }
}

impl Default for WaveformState {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_thirty_hertz_quarter_duty() {
        let state = WaveformState::new(1.0);
        assert!((state.cycle_period_ms() - 1000.0 / 30.0).abs() < 1e-9);
        assert!((state.duty_fraction() - 0.25).abs() < 1e-9);
        assert!((state.high_duration_ms() - 1000.0 / 30.0 * 0.25).abs() < 1e-9);
        assert_eq!(state.elapsed_ms(), 0.0);
    }

    #[test]
    fn duty_clamps_to_unit_interval() {
        let mut state = WaveformState::new(1.0);
        state.apply_config(&PulseConfig {
            frequency_hz: 30.0,
            duty_percent: 150.0,
        });
        assert_eq!(state.duty_fraction(), 1.0);

        state.apply_config(&PulseConfig {
            frequency_hz: 30.0,
            duty_percent: -50.0,
        });
        assert_eq!(state.duty_fraction(), 0.0);
    }

    #[test]
    fn cycle_period_clamps_at_frequency_bounds() {
        let mut state = WaveformState::new(1.0);

        state.apply_config(&PulseConfig {
            frequency_hz: 0.01,
            duty_percent: 25.0,
        });
        assert_eq!(state.cycle_period_ms(), 1000.0 / 0.3);

        state.apply_config(&PulseConfig {
            frequency_hz: 50_000.0,
            duty_percent: 25.0,
        });
        assert_eq!(state.cycle_period_ms(), 1000.0 / 3000.0);
    }

    #[test]
    fn boundary_frequencies_clamp_inclusively() {
        let mut state = WaveformState::new(1.0);

        state.apply_config(&PulseConfig {
            frequency_hz: 0.3,
            duty_percent: 25.0,
        });
        assert_eq!(state.cycle_period_ms(), 1000.0 / 0.3);

        state.apply_config(&PulseConfig {
            frequency_hz: 3000.0,
            duty_percent: 25.0,
        });
        assert_eq!(state.cycle_period_ms(), 1000.0 / 3000.0);
    }

    #[test]
    fn zero_frequency_is_pinned_before_dividing() {
        let mut state = WaveformState::new(1.0);
        state.apply_config(&PulseConfig {
            frequency_hz: 0.0,
            duty_percent: 25.0,
        });
        assert_eq!(state.cycle_period_ms(), 1000.0 / 0.3);
        assert!(state.high_duration_ms().is_finite());

        state.apply_config(&PulseConfig {
            frequency_hz: -40.0,
            duty_percent: 25.0,
        });
        assert_eq!(state.cycle_period_ms(), 1000.0 / 0.3);
    }

    #[test]
    fn high_duration_tracks_parameter_changes() {
        let mut state = WaveformState::new(1.0);
        for _ in 0..10 {
            state.wrap();
            state.advance();
        }
        state.apply_config(&PulseConfig {
            frequency_hz: 100.0,
            duty_percent: 50.0,
        });
        assert!((state.high_duration_ms() - 5.0).abs() < 1e-9);
        // Phase survives the change.
        assert_eq!(state.elapsed_ms(), 10.0);
    }

    #[test]
    fn wrap_keeps_elapsed_within_cycle() {
        let mut state = WaveformState::new(7.0);
        for _ in 0..1000 {
            state.wrap();
            assert!(state.elapsed_ms() >= 0.0);
            assert!(state.elapsed_ms() < state.cycle_period_ms());
            state.advance();
        }
    }
}
