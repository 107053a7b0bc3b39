use ttl_pulse::{PulseConfig, PulseGenerator};

/// Render one tick per column, 80 ticks per row.
fn trace(gen: &mut PulseGenerator, ticks: usize) {
    let width = 80;
    for row in (0..ticks).step_by(width) {
        let mut line = String::new();
        for _ in row..(row + width).min(ticks) {
            line.push(if gen.tick().is_high() { '█' } else { '_' });
        }
        println!("{}", line);
    }
}

fn main() {
    // Pretend to be a host scheduler running at a 1 ms tick.
    let mut gen = PulseGenerator::new(1.0);

    println!("30 Hz, 25% duty (defaults):");
    trace(&mut gen, 160);

    println!();
    println!("60 Hz, 50% duty:");
    gen.set_parameters(PulseConfig {
        frequency_hz: 60.0,
        duty_percent: 50.0,
    });
    trace(&mut gen, 160);

    println!();
    println!("paused (line forced low), then resumed:");
    gen.pause();
    trace(&mut gen, 80);
    gen.resume();
    trace(&mut gen, 80);
}
