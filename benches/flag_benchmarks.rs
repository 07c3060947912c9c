use criterion::{Criterion, criterion_group, criterion_main};
use flagset::prelude::*;
use std::hint::black_box;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

/// Keep a writer thread flipping `flag` for the duration of `f`.
fn with_writer<F: FnOnce()>(flag: Arc<dyn Flag>, f: F) {
    let stop = Arc::new(AtomicBool::new(false));
    let writer = {
        let stop = Arc::clone(&stop);
        thread::spawn(move || {
            let mut on = false;
            while !stop.load(Ordering::Relaxed) {
                on = !on;
                flag.set(on);
            }
        })
    };

    f();

    stop.store(true, Ordering::Relaxed);
    let _ = writer.join();
}

fn bench_is_enabled(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_enabled");

    let boolean = Arc::new(BooleanFlag::new("scream"));
    boolean.set(true);
    group.bench_function("boolean", |b| b.iter(|| black_box(boolean.is_enabled())));

    let ratio = Arc::new(RatioFlag::new("surprise", 0.5));
    ratio.set(true);
    group.bench_function("ratio", |b| b.iter(|| black_box(ratio.is_enabled())));

    group.finish();
}

fn bench_contended_is_enabled(c: &mut Criterion) {
    let mut group = c.benchmark_group("contended_is_enabled");

    let boolean = Arc::new(BooleanFlag::new("scream"));
    with_writer(boolean.clone(), || {
        group.bench_function("boolean", |b| b.iter(|| black_box(boolean.is_enabled())));
    });

    let ratio = Arc::new(RatioFlag::new("surprise", 0.5));
    with_writer(ratio.clone(), || {
        group.bench_function("ratio", |b| b.iter(|| black_box(ratio.is_enabled())));
    });

    group.finish();
}

fn bench_admin(c: &mut Criterion) {
    let features = Arc::new(FlagSet::new());
    for i in 0..32 {
        let _ = features.new_flag(format!("flag-{i:02}"));
    }
    let admin = features.admin().unwrap();

    let mut group = c.benchmark_group("admin");

    let show = HttpRequest::get("/features/flag-07");
    group.bench_function("show", |b| b.iter(|| admin.serve(black_box(&show))));

    let update = HttpRequest::post("/features/flag-07?enabled=true");
    group.bench_function("update", |b| b.iter(|| admin.serve(black_box(&update))));

    let index = HttpRequest::get("/features/");
    group.bench_function("index_plain", |b| b.iter(|| admin.serve(black_box(&index))));

    let html = HttpRequest::get("/features/").with_header("Accept", "text/html");
    group.bench_function("index_html", |b| b.iter(|| admin.serve(black_box(&html))));

    group.finish();
}

criterion_group!(
    benches,
    bench_is_enabled,
    bench_contended_is_enabled,
    bench_admin
);
criterion_main!(benches);
