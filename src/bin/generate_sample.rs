use std::f64::consts::{PI, TAU};

use anyhow::{Context, Result};
use serde::Serialize;

/// One hourly meter reading.
#[derive(Debug, Serialize)]
struct Reading {
    hour: String,
    region: &'static str,
    consumption_kwh: f64,
    solar_kwh: f64,
    temperature_c: f64,
}

/// Deterministic noise source (splitmix64) so reruns give the same files.
struct Noise {
    state: u64,
}

impl Noise {
    fn new(seed: u64) -> Self {
        Noise { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform noise in `[-amplitude, amplitude)`.
    fn jitter(&mut self, amplitude: f64) -> f64 {
        (self.unit() * 2.0 - 1.0) * amplitude
    }
}

/// Daily load curve: overnight trough, morning and evening peaks.
fn load_curve(hour: usize, base_kwh: f64) -> f64 {
    let h = hour as f64;
    let morning = (-((h - 8.0).powi(2)) / 6.0).exp();
    let evening = (-((h - 19.0).powi(2)) / 8.0).exp();
    base_kwh * (0.55 + 0.5 * morning + 0.8 * evening)
}

fn solar_curve(hour: usize, peak_kwh: f64) -> f64 {
    let h = hour as f64;
    if (6.0..=20.0).contains(&h) {
        peak_kwh * ((h - 6.0) / 14.0 * PI).sin()
    } else {
        0.0
    }
}

fn temperature_curve(hour: usize) -> f64 {
    4.0 + 5.0 * ((hour as f64 - 9.0) / 24.0 * TAU).sin()
}

fn readings(
    region: &'static str,
    hours: usize,
    base_kwh: f64,
    noise: &mut Noise,
) -> Vec<Reading> {
    (0..hours)
        .map(|i| {
            let hour_of_day = i % 24;
            let day = i / 24 + 1;
            Reading {
                hour: format!("2020-01-{day:02} {hour_of_day:02}:00"),
                region,
                consumption_kwh: round2(load_curve(hour_of_day, base_kwh) + noise.jitter(0.3)),
                solar_kwh: round2((solar_curve(hour_of_day, 2.5) + noise.jitter(0.1)).max(0.0)),
                temperature_c: round2(temperature_curve(hour_of_day) + noise.jitter(0.8)),
            }
        })
        .collect()
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn write_csv(path: &str, rows: &[Reading]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("creating {path}"))?;
    for row in rows {
        writer.serialize(row).with_context(|| format!("writing {path}"))?;
    }
    writer.flush().with_context(|| format!("flushing {path}"))?;
    println!("Wrote {} readings to {path}", rows.len());
    Ok(())
}

fn main() -> Result<()> {
    let mut noise = Noise::new(42);

    // Different lengths on purpose: the comparison view truncates to the shorter.
    let first = readings("north", 72, 3.2, &mut noise);
    let second = readings("south", 48, 2.6, &mut noise);

    write_csv("energy_a.csv", &first)?;
    write_csv("energy_b.csv", &second)?;
    Ok(())
}
