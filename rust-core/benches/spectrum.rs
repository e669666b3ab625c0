use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::f64::consts::PI;
use vibration_spectra::filters::{hp_filter, lp_filter, DEFAULT_ORDER};
use vibration_spectra::hilbert::HilbertAnalyzer;
use vibration_spectra::spectrum::compute_data_for_spectrum;

const SAMPLING_RATE: f64 = 1000.0;

fn vibration(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64 / SAMPLING_RATE;
            (2.0 * PI * 50.0 * t).sin() + 0.3 * (2.0 * PI * 120.0 * t).sin() + 0.5
        })
        .collect()
}

fn bench_spectrum_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("spectrum_report");
    for n in [100, 1000, 4096] {
        let signal = vibration(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &signal, |b, s| {
            b.iter(|| compute_data_for_spectrum(black_box(s), 1.0 / SAMPLING_RATE))
        });
    }
    group.finish();
}

fn bench_filters(c: &mut Criterion) {
    let signal = vibration(4096);

    c.bench_function("lp_filter_4096", |b| {
        b.iter(|| lp_filter(80.0, SAMPLING_RATE, black_box(&signal), DEFAULT_ORDER))
    });
    c.bench_function("hp_filter_4096", |b| {
        b.iter(|| hp_filter(10.0, SAMPLING_RATE, black_box(&signal), DEFAULT_ORDER))
    });
}

fn bench_marginal_spectrum(c: &mut Criterion) {
    let signal = vibration(4096);
    let analyzer = HilbertAnalyzer::default();

    c.bench_function("marginal_spectrum_4096", |b| {
        b.iter(|| analyzer.marginal_spectrum(black_box(&signal), 1.0 / SAMPLING_RATE))
    });
}

criterion_group!(benches, bench_spectrum_report, bench_filters, bench_marginal_spectrum);
criterion_main!(benches);
