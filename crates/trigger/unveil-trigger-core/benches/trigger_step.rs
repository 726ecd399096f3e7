use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use unveil_trigger_core::{
    Config, ElementDecl, ElementPath, Engine, Inputs, PageSnapshot, Rect, RectUpdate,
};

const N: usize = 500;

fn grid_snapshot() -> PageSnapshot {
    let elements = (0..N)
        .map(|i| {
            ElementDecl::new(ElementPath::parse(&format!("grid/item-{i}")).unwrap())
                .with_marker("reveal")
        })
        .collect();
    PageSnapshot::new(elements)
}

fn offscreen_rects() -> Vec<RectUpdate> {
    (0..N)
        .map(|i| {
            RectUpdate::new(
                ElementPath::parse(&format!("grid/item-{i}")).unwrap(),
                Rect::new(0.0, 5000.0 + i as f32 * 120.0, 300.0, 100.0),
            )
        })
        .collect()
}

fn bench_mount(c: &mut Criterion) {
    c.bench_function("mount_500_reveals", |b| {
        b.iter_batched(
            grid_snapshot,
            |snapshot| {
                let mut engine = Engine::with_standard_triggers(Config::default());
                engine.mount(&snapshot).unwrap();
                engine
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_sweep(c: &mut Criterion) {
    let mut engine = Engine::with_standard_triggers(Config::default());
    engine.mount(&grid_snapshot()).unwrap();
    let rects = offscreen_rects();

    // Steady-state tick: full geometry feed, every element stays below
    // threshold, so the engine state does not drift between iterations.
    c.bench_function("update_sweep_500_offscreen", |b| {
        b.iter(|| {
            let out = engine.update(0.016, Inputs::rects(rects.clone()));
            black_box(out.writes.len());
        })
    });
}

criterion_group!(benches, bench_mount, bench_sweep);
criterion_main!(benches);
