// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use criterion::*;

use cepheid_warp::{
    compute_distances, transform_catalog, Catalog, DistanceConfig, GalacticFrame, Origin,
    StarRecord,
};

/// A synthetic catalog, spread over the sky, with periods between 1 and 100
/// days.
fn synthetic_catalog(num_stars: usize) -> Catalog {
    let records = (0..num_stars)
        .map(|i| {
            let f = i as f64 / num_stars as f64;
            StarRecord {
                apparent_magnitude: Some(6.0 + 8.0 * f),
                period_err: Some(0.01),
                ..StarRecord::new(
                    360.0 * f,
                    -90.0 + 180.0 * ((i * 7919) % num_stars) as f64 / num_stars as f64,
                    10_f64.powf(2.0 * f),
                    0.1 + 2.0 * f,
                )
            }
        })
        .collect();
    Catalog::from_records(records)
}

fn distances(c: &mut Criterion) {
    let config = DistanceConfig::default();
    let mut group = c.benchmark_group("compute_distances");
    for num_stars in [1_000, 100_000] {
        let catalog = synthetic_catalog(num_stars);
        group.throughput(Throughput::Elements(num_stars as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_stars),
            &catalog,
            |b, catalog| b.iter(|| compute_distances(black_box(catalog), &config).unwrap()),
        );
    }
    group.finish();
}

fn positions(c: &mut Criterion) {
    let catalog =
        compute_distances(&synthetic_catalog(100_000), &DistanceConfig::default()).unwrap();
    let frame = GalacticFrame::default();
    c.bench_function("transform_catalog 100000", |b| {
        b.iter(|| transform_catalog(black_box(&catalog), &frame, Origin::Galactocentric).unwrap())
    });
}

criterion_group!(benches, distances, positions);
criterion_main!(benches);
