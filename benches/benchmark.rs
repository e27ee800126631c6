//! Benchmarks for machine construction and encoding throughput.
//!
//! Measures configuration resolution, single-keypress cost, and message
//! throughput for the M3 and M4 signal paths.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use enigma_machine::{Letter, Machine, MachineConfig};

/// Message lengths (letters) used for throughput scaling.
const MESSAGE_LENGTHS: &[usize] = &[64, 1024, 16384];

fn m3_config() -> MachineConfig {
    MachineConfig::m3("B", "III", "II", "I")
        .with_plugboard(["AB", "CD", "EF", "GH", "IJ", "KL", "MN", "OP", "QR", "ST"])
        .with_ring_settings(3, 9, 17, 1)
}

fn m4_config() -> MachineConfig {
    MachineConfig::m4("b_thin", "VIII", "VI", "IV", "b")
        .with_plugboard(["AB", "CD", "EF", "GH", "IJ", "KL", "MN", "OP", "QR", "ST"])
        .with_ring_settings(3, 9, 17, 22)
}

/// Benchmarks `Machine::new()`: table lookups plus plugboard validation.
fn bench_construction(c: &mut Criterion) {
    let config = m4_config();
    c.bench_function("machine_new_m4", |b| {
        b.iter(|| Machine::new(black_box(&config)).unwrap());
    });
}

/// Benchmarks a single keypress (step + full path). The machine keeps
/// stepping between iterations, so turnovers and double steps are included
/// at their natural frequency.
fn bench_keypress(c: &mut Criterion) {
    let mut group = c.benchmark_group("keypress");
    group.throughput(Throughput::Elements(1));

    for (name, config) in [("m3", m3_config()), ("m4", m4_config())] {
        let mut machine = Machine::new(&config).unwrap();
        group.bench_function(name, |b| {
            b.iter(|| machine.encode(black_box(Letter::A)));
        });
    }

    group.finish();
}

/// Benchmarks `encode_message()` across message lengths, including the
/// character filtering and five-letter grouping.
fn bench_message_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_message");

    for &len in MESSAGE_LENGTHS {
        let text: String = "Attack at dawn! "
            .chars()
            .cycle()
            .filter(char::is_ascii_alphabetic)
            .take(len)
            .collect();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            let mut machine = Machine::new(&m3_config()).unwrap();
            b.iter(|| machine.encode_message(black_box(text), 5));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_keypress,
    bench_message_scaling,
);
criterion_main!(benches);
