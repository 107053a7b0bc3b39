//! A real-time TTL pulse generator.
//!
//! Given a frequency and a duty-cycle percentage, the generator emits a binary
//! on/off level once per scheduler tick, switching at the duty boundary within
//! each cycle. At the default 30 Hz with a 25% duty, one cycle is
//! 1000/30 ≈ 33.3 ms: roughly 8.3 ms high followed by 24.9 ms low, repeating.
//!
//! The generator never decides its own cadence. An external host scheduler
//! constructs it with the tick period, calls [`PulseGenerator::tick`] once per
//! period, and latches the returned [`TtlLevel`] onto the output line.
//! A parameter source (a UI, typically) pushes new values through
//! [`PulseGenerator::set_parameters`]; out-of-range values are clamped, never
//! rejected. If the parameter source lives on another thread, wrap the
//! generator in a [`SharedPulseGenerator`] so updates and ticks serialize.

pub mod generator;
pub mod shared;
pub mod waveform;

pub use generator::{PulseGenerator, TtlLevel};
pub use shared::SharedPulseGenerator;
pub use waveform::WaveformState;

/// Frequency and duty-cycle values as a parameter source supplies them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseConfig {
    /// Pulse frequency in Hz. Clamped to [0.3, 3000] before use.
    pub frequency_hz: f64,
    /// Duty cycle as a percentage. Clamped to [0, 100] before use.
    pub duty_percent: f64,
}

/// Slowest allowed pulse rate, in Hz.
pub const MIN_FREQUENCY_HZ: f64 = 0.3;
/// Fastest allowed pulse rate, in Hz.
pub const MAX_FREQUENCY_HZ: f64 = 3000.0;
/// Frequency a freshly initialized generator runs at.
pub const DEFAULT_FREQUENCY_HZ: f64 = 30.0;
/// Duty cycle a freshly initialized generator runs at.
pub const DEFAULT_DUTY_PERCENT: f64 = 25.0;
/// Line voltage of a high output level.
pub const HIGH_VOLTS: f64 = 5.0;

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            frequency_hz: DEFAULT_FREQUENCY_HZ,
            duty_percent: DEFAULT_DUTY_PERCENT,
        }
    }
}
