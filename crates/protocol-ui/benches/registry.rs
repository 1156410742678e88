//! Benchmarks for widget registration and filtered queries

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use protocol_ui::{IdFilter, Registry, WidgetKind, WidgetKinds};

fn populate(count: u64) -> Registry {
    let mut registry = Registry::new();
    for i in 0..count {
        match i % 3 {
            0 => {
                registry.add_button().arg(i).build();
            }
            1 => {
                registry.add_toggle().build();
            }
            _ => {
                let _ = registry.add_slider().value((i % 100) as i64).build();
            }
        }
    }
    registry
}

fn bench_register(c: &mut Criterion) {
    let mut group = c.benchmark_group("register");

    for count in [10u64, 100, 1000] {
        group.throughput(Throughput::Elements(count));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| black_box(populate(count)));
        });
    }

    group.finish();
}

fn bench_get_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_all");

    for count in [10u64, 100, 1000] {
        let registry = populate(count);
        group.throughput(Throughput::Elements(count));

        group.bench_with_input(BenchmarkId::new("unfiltered", count), &registry, |b, registry| {
            b.iter(|| black_box(registry.get_all(WidgetKinds::all(), IdFilter::Any).len()));
        });

        group.bench_with_input(BenchmarkId::new("kind", count), &registry, |b, registry| {
            b.iter(|| black_box(registry.get_all(WidgetKind::Toggle, IdFilter::Any).len()));
        });

        group.bench_with_input(BenchmarkId::new("kind_and_ids", count), &registry, |b, registry| {
            b.iter(|| black_box(registry.get_all(WidgetKind::Slider | WidgetKind::Button, 0..count / 2).len()));
        });
    }

    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let registry = populate(1000);
    c.bench_function("get_by_id", |b| {
        b.iter(|| {
            for raw in (0..1000u64).step_by(7) {
                black_box(registry.get(raw));
            }
        })
    });
}

criterion_group!(benches, bench_register, bench_get_all, bench_get);
criterion_main!(benches);
