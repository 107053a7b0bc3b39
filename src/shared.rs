//! Thread-safe handle for driving the generator from a host thread while a
//! parameter source updates it from another.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::{PulseConfig, PulseGenerator, TtlLevel};

/// A [`PulseGenerator`] behind an `Arc<Mutex<_>>`.
///
/// Each operation holds the lock for the whole call, so a tick can never
/// observe a half-applied cycle-period/duty pair. Clone the handle freely;
/// all clones drive the same generator.
///
/// In a single-threaded host loop the plain [`PulseGenerator`] is enough and
/// cheaper; reach for this only when parameter updates arrive from a
/// different thread than the tick.
#[derive(Clone)]
pub struct SharedPulseGenerator {
    inner: Arc<Mutex<PulseGenerator>>,
}

impl SharedPulseGenerator {
    pub fn new(tick_period_ms: f64) -> Self {
        Self::from_generator(PulseGenerator::new(tick_period_ms))
    }

    pub fn from_generator(gen: PulseGenerator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(gen)),
        }
    }

    pub fn tick(&self) -> TtlLevel {
        self.inner.lock().tick()
    }

    pub fn set_parameters(&self, cfg: PulseConfig) {
        self.inner.lock().set_parameters(cfg);
    }

    pub fn set_tick_period(&self, tick_period_ms: f64) {
        self.inner.lock().set_tick_period(tick_period_ms);
    }

    pub fn pause(&self) {
        self.inner.lock().pause();
    }

    pub fn resume(&self) {
        self.inner.lock().resume();
    }

    pub fn level(&self) -> TtlLevel {
        self.inner.lock().level()
    }

    /// Lock and hand out the generator itself, for reads that need a
    /// consistent view of several fields at once.
    pub fn lock(&self) -> MutexGuard<'_, PulseGenerator> {
        self.inner.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_drive_the_same_generator() {
        let shared = SharedPulseGenerator::new(1.0);
        let controller = shared.clone();

        controller.set_parameters(PulseConfig {
            frequency_hz: 100.0,
            duty_percent: 50.0,
        });

        let gen = shared.lock();
        assert!((gen.waveform().cycle_period_ms() - 10.0).abs() < 1e-9);
        assert!((gen.waveform().high_duration_ms() - 5.0).abs() < 1e-9);
    }
}
