use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tabiji::{atlas::Atlas, route, shared::geo::Coordinate};

fn nearest_station(atlas: &Atlas) {
    let coordinate = Coordinate::from((35.7148, 139.7967));
    let _ = black_box(atlas.nearest_station("tokyo", &coordinate));
}

fn plan_route(atlas: &Atlas) {
    let from = Coordinate::from((35.0610, 135.7850));
    let to = Coordinate::from((34.9857, 135.7587));
    let _ = black_box(route::plan(atlas, "kyoto", &from, &to));
}

fn search_pois(atlas: &Atlas) {
    let _ = black_box(atlas.search_pois_by_name("fushimi inari"));
}

fn criterion_benchmark(c: &mut Criterion) {
    let atlas = Atlas::bundled().expect("bundled fixtures should build");

    c.bench_function("nearest_station", |b| b.iter(|| nearest_station(&atlas)));
    c.bench_function("plan_route", |b| b.iter(|| plan_route(&atlas)));
    c.bench_function("search_pois", |b| b.iter(|| search_pois(&atlas)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
