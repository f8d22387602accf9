use criterion::{black_box, criterion_group, criterion_main, Criterion};
use meeus_ephem::nutationlib::nutation;
use meeus_ephem::planetlib::{Body, EmbeddedSeries, SeriesProvider};
use meeus_ephem::{Angle, Ephemeris};

fn criterion_benchmark(c: &mut Criterion) {
    let ephemeris = Ephemeris::new().expect("embedded ephemeris");
    let latitude = Angle::from_degrees(42.0);
    let longitude = Angle::from_degrees(-71.516667);

    let mut group = c.benchmark_group("topocentric longitude");
    for body in ["sun", "moon", "mercury", "venus", "saturn"] {
        group.bench_function(body, |b| {
            b.iter(|| {
                ephemeris.topocentric_longitude(
                    black_box(2022),
                    black_box(1),
                    black_box(19.849056),
                    latitude,
                    longitude,
                    56.0832,
                    body,
                )
            })
        });
    }
    group.finish();

    let earth = EmbeddedSeries.series(Body::Earth).expect("earth series");
    c.bench_function("earth series", |b| b.iter(|| earth.position(black_box(2459599.349056))));
    c.bench_function("nutation", |b| b.iter(|| nutation(black_box(2459599.349056))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
