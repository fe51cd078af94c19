use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sunpass::{Angle, Culmination, JulianDate, Sun};

fn altitude_bench(c: &mut Criterion) {
    let sun = Sun::from_degrees(49.495, 11.073);
    let jd = JulianDate::new(2_457_918.25);

    let mut group = c.benchmark_group("altitude");
    group.bench_function("sin_theta", |b| b.iter(|| sun.sin_theta(black_box(jd))));
    group.bench_function("angle_and_direction", |b| {
        b.iter(|| sun.angle_and_direction(black_box(jd)))
    });
    group.finish();
}

fn search_bench(c: &mut Criterion) {
    let sun = Sun::from_degrees(49.495, 11.073);
    let jd = JulianDate::new(2_457_917.333);
    let horizon = Angle::from_degrees(0.0);

    let mut group = c.benchmark_group("search");
    group.bench_function("next_sunrise", |b| {
        b.iter(|| sun.next_passing(black_box(horizon), true, black_box(jd)))
    });
    group.bench_function("next_sunset", |b| {
        b.iter(|| sun.next_passing(black_box(horizon), false, black_box(jd)))
    });
    group.bench_function("next_noon", |b| {
        b.iter(|| sun.culmination(Culmination::Noon, true, black_box(jd)))
    });
    group.bench_function("passings_week", |b| {
        b.iter(|| sun.passings(black_box(horizon), black_box(jd), 7))
    });
    group.finish();
}

fn window_bench(c: &mut Criterion) {
    let sun = Sun::from_degrees(0.0, 0.0);
    let jd = JulianDate::new(2_457_834.75);
    let (dawn, dusk) = (Angle::from_degrees(-6.0), Angle::from_degrees(-6.0));

    c.bench_function("is_between_twilight", |b| {
        b.iter(|| sun.is_between(dawn, true, 0, dusk, false, 0, black_box(jd)))
    });
}

criterion_group!(benches, altitude_bench, search_bench, window_bench);
criterion_main!(benches);
