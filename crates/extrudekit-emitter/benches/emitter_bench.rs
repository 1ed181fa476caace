use criterion::{black_box, criterion_group, criterion_main, Criterion};
use extrudekit_emitter::Emitter;

fn bench_polygon(c: &mut Criterion) {
    c.bench_function("regular_polygon_360", |b| {
        b.iter(|| {
            let mut emitter = Emitter::at(100.0, 100.0, 0.2);
            emitter.set_density(0.05);
            emitter.regular_polygon(black_box(40.0), black_box(360));
            emitter
        })
    });

    c.bench_function("inscribed_polygon_360", |b| {
        b.iter(|| {
            let mut emitter = Emitter::at(100.0, 100.0, 0.2);
            emitter.set_density(0.05);
            emitter.inscribed_polygon(black_box(40.0), black_box(360));
            emitter
        })
    });
}

fn bench_spiral(c: &mut Criterion) {
    c.bench_function("rectangular_spiral_200", |b| {
        b.iter(|| {
            let mut emitter = Emitter::at(0.0, 0.0, 0.2);
            emitter.set_density(0.05);
            emitter.rectangular_spiral(black_box(200.0), black_box(200.0), 1.0, 0.0);
            emitter
        })
    });
}

fn bench_to_gcode(c: &mut Criterion) {
    let mut emitter = Emitter::at(0.0, 0.0, 0.2);
    emitter.initialize();
    emitter.set_density(0.05);
    for layer in 0..50 {
        emitter.set_height(0.2 * f64::from(layer + 1));
        emitter.rectangle(50.0, 50.0);
    }
    emitter.finalize();

    c.bench_function("to_gcode_50_layers", |b| b.iter(|| black_box(&emitter).to_gcode()));
}

criterion_group!(benches, bench_polygon, bench_spiral, bench_to_gcode);
criterion_main!(benches);
