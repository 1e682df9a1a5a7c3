//! Per-file transform throughput benchmarks
//!
//! Measures the parse, rewrite and serialize path with varying:
//! - Stylesheet sizes (10, 100, 1000 rules)
//! - Output modes (plain, with source map)
//!
//! Run benchmarks: `cargo bench --bench transform_throughput`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fontscale::{FontScaleOptions, FontScalePlugin, ScalePolicy};
use std::fmt::Write;

const STEPS: &[&str] = &["xs", "sm", "base", "lg", "xl", "2xl", "3xl"];

/// Generates a utility stylesheet with `rules` rules.
fn generate_stylesheet(rules: usize) -> String {
    let mut css = String::new();
    for i in 0..rules {
        let step = STEPS[i % STEPS.len()];
        let _ = writeln!(
            css,
            ".md\\:text-{step}.leading-{} {{\n  font-size: {}px;\n  line-height: {}rem;\n  color: #333;\n  font: italic {}px/1.5 \"Inter\", sans-serif;\n}}",
            i % 10,
            12 + i % 24,
            1.0 + (i % 8) as f64 * 0.25,
            14 + i % 6,
        );
    }
    css
}

fn benchmark_stylesheet_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("stylesheet_size");
    let plugin = FontScalePlugin::new(FontScaleOptions::default()).expect("Failed to build plugin");

    for rules in [10, 100, 1000] {
        let css = generate_stylesheet(rules);
        group.throughput(Throughput::Bytes(css.len() as u64));
        group.bench_with_input(BenchmarkId::new("rules", rules), &css, |b, css| {
            b.iter(|| plugin.transform(css, "/bench/utilities.css"));
        });
    }

    group.finish();
}

fn benchmark_output_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("output_mode");
    let css = generate_stylesheet(200);

    let modes = [
        ("plain", FontScaleOptions::default()),
        ("source_map", FontScaleOptions::default().with_source_map(true)),
        ("additive", FontScaleOptions::default().with_policy(ScalePolicy::Additive)),
    ];

    for (name, options) in modes {
        let plugin = FontScalePlugin::new(options).expect("Failed to build plugin");
        group.bench_function(name, |b| {
            b.iter(|| plugin.transform(&css, "/bench/utilities.css"));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_stylesheet_size, benchmark_output_modes);
criterion_main!(benches);
