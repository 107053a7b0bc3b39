//! A stand-in host scheduler built on cpal.
//!
//! The audio callback plays the scheduler role: one output frame is one tick,
//! and the TTL level is mapped onto the speaker line so the duty cycle is
//! audible as a buzz. The main thread plays the parameter source, pushing
//! frequency/duty changes through the shared handle while the stream runs.

use std::time::Duration;

use anyhow::{anyhow, Context};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use ttl_pulse::{PulseConfig, SharedPulseGenerator, HIGH_VOLTS};

fn main() -> anyhow::Result<()> {
    let host = cpal::default_host();
    let out_dev = host
        .default_output_device()
        .context("no output device available")?;
    let config = out_dev
        .supported_output_configs()?
        .find(|c| c.sample_format() == cpal::SampleFormat::F32)
        .ok_or_else(|| anyhow!("no f32 output configuration"))?
        .with_max_sample_rate();

    let sample_rate = config.sample_rate().0 as f64;
    let channel_count = config.channels() as usize;
    eprintln!("Sample rate: {}", sample_rate);
    eprintln!("Channels: {}", channel_count);

    // One audio frame per tick.
    let tick_period_ms = 1000.0 / sample_rate;
    let shared = SharedPulseGenerator::new(tick_period_ms);
    let controller = shared.clone();

    let stream = out_dev.build_output_stream(
        &config.config(),
        move |d: &mut [f32], _info| {
            for frame in d.chunks_mut(channel_count) {
                // Scale 0-5 V down to a quiet unipolar audio signal.
                let sample = (shared.tick().volts() / HIGH_VOLTS) as f32 * 0.1;
                frame.fill(sample);
            }
        },
        |e| panic!("{}", e),
        None,
    )?;
    stream.play()?;

    // Sweep the waveform around while the stream runs.
    for (frequency_hz, duty_percent) in [(30.0, 25.0), (120.0, 50.0), (440.0, 10.0)] {
        eprintln!("{} Hz at {}% duty", frequency_hz, duty_percent);
        controller.set_parameters(PulseConfig {
            frequency_hz,
            duty_percent,
        });
        std::thread::sleep(Duration::from_secs(2));
    }

    eprintln!("pausing (output forced low)");
    controller.pause();
    std::thread::sleep(Duration::from_secs(1));

    eprintln!("resuming from the paused phase");
    controller.resume();
    std::thread::sleep(Duration::from_secs(2));

    Ok(())
}
