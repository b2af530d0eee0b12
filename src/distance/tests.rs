// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;

use super::*;
use crate::catalog::{CatalogColumn, MissingColumnError};

fn star(period: f64, extinction: f64, apparent_magnitude: Option<f64>) -> StarRecord {
    StarRecord {
        apparent_magnitude,
        ..StarRecord::new(10.0, 20.0, period, extinction)
    }
}

#[test]
fn test_default_pl_relation() {
    let pl = PlRelation::default();
    assert_abs_diff_eq!(pl.a, -2.43);
    assert_abs_diff_eq!(pl.b, -1.43);
    assert_abs_diff_eq!(pl.sigma_a, 0.05);
    assert_abs_diff_eq!(pl.sigma_b, 0.03);
    assert_eq!(pl, PlCalibration::GaiaDr3.relation());
}

#[test]
fn test_absolute_magnitude() {
    let pl = PlRelation::default();
    // log10(1) = 0, so M is the zero-point.
    assert_abs_diff_eq!(pl.absolute_magnitude(1.0), -1.43, epsilon = 1e-12);
    assert_abs_diff_eq!(pl.absolute_magnitude(10.0), -3.86, epsilon = 1e-12);
    assert_abs_diff_eq!(pl.absolute_magnitude(100.0), -6.29, epsilon = 1e-12);
    assert!(pl.absolute_magnitude(0.0).is_nan());
    assert!(pl.absolute_magnitude(-1.0).is_nan());
    assert!(pl.absolute_magnitude(f64::NAN).is_nan());
}

#[test]
fn test_absolute_magnitude_variance() {
    let pl = PlRelation::default();
    // Only the zero-point contributes at P = 1 d without a period uncertainty.
    assert_abs_diff_eq!(
        pl.absolute_magnitude_variance(1.0, 0.0),
        0.03_f64.powi(2),
        epsilon = 1e-15
    );
    // At P = 10 d, log10(P) = 1.
    let expected = (2.43 / (10.0 * LN_10)).powi(2) * 0.5_f64.powi(2)
        + 0.05_f64.powi(2)
        + 0.03_f64.powi(2);
    assert_abs_diff_eq!(
        pl.absolute_magnitude_variance(10.0, 0.5),
        expected,
        epsilon = 1e-15
    );
}

#[test]
fn test_worked_example() {
    // P = 10 d, A = 0.2 mag, m = 10 mag.
    let estimate = estimate_distance(&star(10.0, 0.2, Some(10.0)), &DistanceConfig::default());
    assert_abs_diff_eq!(estimate.absolute_magnitude, -3.86, epsilon = 1e-9);
    assert_abs_diff_eq!(estimate.distance_modulus, 13.66, epsilon = 1e-9);
    assert_abs_diff_eq!(estimate.distance_pc, 5395.0, epsilon = 1.0);
    assert_abs_diff_eq!(
        estimate.distance_pc,
        10_f64.powf(13.66 / 5.0 + 1.0),
        epsilon = 1e-6
    );
}

#[test]
fn test_internally_consistent() {
    let config = DistanceConfig::default();
    for (period, extinction, m) in [(3.0, 0.1, 8.0), (25.0, 1.5, 12.3), (1.2, 0.0, 5.5)] {
        let estimate = estimate_distance(&star(period, extinction, Some(m)), &config);
        let mu = (m - extinction) - estimate.absolute_magnitude;
        assert_abs_diff_eq!(estimate.distance_modulus, mu, epsilon = 1e-12);
        assert_abs_diff_eq!(
            estimate.distance_pc,
            10_f64.powf(estimate.distance_modulus / 5.0 + 1.0),
            epsilon = 1e-9
        );
        assert!(estimate.distance_pc > 0.0);
    }
}

#[test]
fn test_more_extinction_means_closer() {
    let config = DistanceConfig::default();
    let near = estimate_distance(&star(10.0, 1.0, Some(10.0)), &config);
    let far = estimate_distance(&star(10.0, 0.0, Some(10.0)), &config);
    assert!(near.distance_pc < far.distance_pc);
}

#[test]
fn test_invalid_periods_give_nan() {
    let config = DistanceConfig::default();
    for period in [0.0, -5.0, f64::NAN] {
        let estimate = estimate_distance(&star(period, 0.2, Some(10.0)), &config);
        assert!(estimate.absolute_magnitude.is_nan());
        assert!(estimate.distance_modulus.is_nan());
        assert!(estimate.distance_pc.is_nan());
        assert!(estimate.distance_error_pc.is_nan());
    }
}

#[test]
fn test_no_apparent_magnitude() {
    let estimate = estimate_distance(&star(10.0, 0.2, None), &DistanceConfig::default());
    assert_abs_diff_eq!(estimate.absolute_magnitude, -3.86, epsilon = 1e-9);
    assert!(estimate.distance_modulus.is_nan());
    assert!(estimate.distance_pc.is_nan());
    assert!(estimate.distance_error_pc.is_nan());
}

#[test]
fn test_fallback_apparent_magnitude() {
    let config = DistanceConfig {
        apparent_magnitude: Some(10.0),
        ..Default::default()
    };
    let fallback = estimate_distance(&star(10.0, 0.2, None), &config);
    assert_abs_diff_eq!(fallback.distance_modulus, 13.66, epsilon = 1e-9);

    // A row's own magnitude takes precedence.
    let own = estimate_distance(&star(10.0, 0.2, Some(12.0)), &config);
    assert_abs_diff_eq!(own.distance_modulus, 15.66, epsilon = 1e-9);
}

#[test]
fn test_distance_error() {
    // Without input uncertainties, only the calibration contributes.
    let config = DistanceConfig::default();
    let estimate = estimate_distance(&star(10.0, 0.2, Some(10.0)), &config);
    let sigma_mu = (0.05_f64.powi(2) + 0.03_f64.powi(2)).sqrt();
    assert_abs_diff_eq!(
        estimate.distance_error_pc,
        estimate.distance_pc * LN_10 / 5.0 * sigma_mu,
        epsilon = 1e-9
    );

    let config = DistanceConfig {
        uncertainties: InputUncertainties {
            period: 0.1,
            extinction: 0.05,
            apparent_magnitude: 0.02,
        },
        ..Default::default()
    };
    let estimate = estimate_distance(&star(10.0, 0.2, Some(10.0)), &config);
    let sigma_m_abs_sq = config.pl_relation.absolute_magnitude_variance(10.0, 0.1);
    let sigma_mu = (0.02_f64.powi(2) + 0.05_f64.powi(2) + sigma_m_abs_sq).sqrt();
    assert_abs_diff_eq!(
        estimate.distance_error_pc,
        estimate.distance_pc * LN_10 / 5.0 * sigma_mu,
        epsilon = 1e-9
    );
}

#[test]
fn test_row_uncertainties_take_precedence() {
    let config = DistanceConfig {
        uncertainties: InputUncertainties {
            period: 0.0,
            extinction: 0.0,
            apparent_magnitude: 0.0,
        },
        ..Default::default()
    };
    let plain = estimate_distance(&star(10.0, 0.2, Some(10.0)), &config);

    let mut record = star(10.0, 0.2, Some(10.0));
    record.extinction_err = Some(0.3);
    let with_err = estimate_distance(&record, &config);
    assert!(with_err.distance_error_pc > plain.distance_error_pc);
    assert_abs_diff_eq!(with_err.distance_pc, plain.distance_pc);

    // Non-finite row uncertainties are ignored.
    record.extinction_err = Some(f64::NAN);
    let ignored = estimate_distance(&record, &config);
    assert_abs_diff_eq!(ignored.distance_error_pc, plain.distance_error_pc);
}

#[test]
fn test_compute_distances() {
    let catalog = Catalog::from_records(vec![
        star(10.0, 0.2, Some(10.0)),
        star(-1.0, 0.2, Some(10.0)),
        star(5.0, 0.5, Some(9.0)),
    ]);
    let out = compute_distances(&catalog, &DistanceConfig::default()).unwrap();

    assert_eq!(out.len(), catalog.len());
    for column in Column::DISTANCES {
        assert!(out.has_column(column));
    }
    assert_abs_diff_eq!(
        out.records()[0].get(Column::DistancePc).unwrap(),
        5395.0,
        epsilon = 1.0
    );
    assert!(out.records()[1].get(Column::DistancePc).unwrap().is_nan());
    assert!(out.records()[2].get(Column::DistancePc).unwrap().is_finite());

    // Order and inputs are unchanged.
    for (before, after) in catalog.iter().zip(out.iter()) {
        assert_eq!(before.ra, after.ra);
        assert_eq!(before.dec, after.dec);
        assert_eq!(before.period.to_bits(), after.period.to_bits());
        assert_eq!(before.extinction, after.extinction);
    }

    // The input isn't touched.
    assert!(!catalog.has_column(Column::DistancePc));
    assert!(catalog.iter().all(|r| r.distance.is_none()));
}

#[test]
fn test_compute_distances_twice_replaces_values() {
    let catalog = Catalog::from_records(vec![star(10.0, 0.2, Some(10.0))]);
    let once = compute_distances(&catalog, &DistanceConfig::default()).unwrap();
    let config = DistanceConfig {
        pl_relation: PlRelation {
            b: -2.43,
            ..Default::default()
        },
        ..Default::default()
    };
    let twice = compute_distances(&once, &config).unwrap();

    assert_eq!(twice.header().len(), once.header().len());
    assert_abs_diff_eq!(
        twice.records()[0].get(Column::DistanceModulus).unwrap(),
        once.records()[0].get(Column::DistanceModulus).unwrap() + 1.0,
        epsilon = 1e-9
    );
}

#[test]
fn test_compute_distances_empty_catalog() {
    let catalog = Catalog::from_records(vec![]);
    let out = compute_distances(&catalog, &DistanceConfig::default()).unwrap();
    assert!(out.is_empty());
    assert!(out.has_column(Column::DistancePc));
}

#[test]
fn test_compute_distances_missing_column() {
    let catalog = Catalog {
        header: vec![
            CatalogColumn::Known(Column::Ra),
            CatalogColumn::Known(Column::Dec),
            CatalogColumn::Known(Column::Extinction),
        ],
        records: vec![],
    };
    assert_eq!(
        compute_distances(&catalog, &DistanceConfig::default()),
        Err(DistanceError::MissingColumn(MissingColumnError {
            column: Column::Period
        }))
    );
}
