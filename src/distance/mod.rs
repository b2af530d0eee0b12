// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Distances to Cepheids from the Period-Luminosity relation.
//!
//! For each star:
//!
//! - absolute magnitude `M = a * log10(P) + b`;
//! - extinction-corrected apparent magnitude `m0 = m - A`;
//! - distance modulus `mu = m0 - M`;
//! - distance `d = 10^(mu / 5 + 1)` parsecs.
//!
//! Uncertainties are propagated to first order, treating the period, the
//! calibration coefficients, the extinction and the apparent magnitude as
//! independent.

mod calibration;
mod error;
#[cfg(test)]
mod tests;

pub use calibration::*;
pub use error::DistanceError;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::{Catalog, Column, StarRecord},
    cli::Warn,
    constants::LN_10,
};

/// The quantities derived for a single star. NaN means "not computed".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceEstimate {
    pub absolute_magnitude: f64,
    pub distance_modulus: f64,
    /// [parsecs]
    pub distance_pc: f64,
    /// [parsecs]
    pub distance_error_pc: f64,
}

impl DistanceEstimate {
    pub fn nan() -> DistanceEstimate {
        DistanceEstimate {
            absolute_magnitude: f64::NAN,
            distance_modulus: f64::NAN,
            distance_pc: f64::NAN,
            distance_error_pc: f64::NAN,
        }
    }
}

/// Uncertainties used for rows that don't supply their own.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InputUncertainties {
    /// [days]
    pub period: f64,
    /// [magnitudes]
    pub extinction: f64,
    /// [magnitudes]
    pub apparent_magnitude: f64,
}

/// Everything the distance engine needs besides the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DistanceConfig {
    pub pl_relation: PlRelation,

    pub uncertainties: InputUncertainties,

    /// The apparent magnitude to use for rows that don't have one. If this is
    /// `None`, such rows only get an absolute magnitude.
    pub apparent_magnitude: Option<f64>,
}

/// Derive the distance of a single star. This never fails; inputs that can't
/// produce a value give NaN.
pub fn estimate_distance(record: &StarRecord, config: &DistanceConfig) -> DistanceEstimate {
    let pl = &config.pl_relation;
    let period = record.period;
    if period.is_nan() || period <= 0.0 {
        return DistanceEstimate::nan();
    }

    // Per-row uncertainties take precedence. Unusable values count as not
    // supplied.
    let pick = |row: Option<f64>, default: f64| row.filter(|s| s.is_finite()).unwrap_or(default);
    let sigma_period = pick(record.period_err, config.uncertainties.period);
    let sigma_extinction = pick(record.extinction_err, config.uncertainties.extinction);

    let absolute_magnitude = pl.absolute_magnitude(period);
    let absolute_magnitude_var = pl.absolute_magnitude_variance(period, sigma_period);

    let (apparent_magnitude, sigma_apparent) =
        match (record.apparent_magnitude, config.apparent_magnitude) {
            (Some(m), _) => (
                m,
                pick(
                    record.apparent_magnitude_err,
                    config.uncertainties.apparent_magnitude,
                ),
            ),
            (None, Some(m)) => (m, config.uncertainties.apparent_magnitude),
            (None, None) => {
                return DistanceEstimate {
                    absolute_magnitude,
                    ..DistanceEstimate::nan()
                }
            }
        };

    let corrected_magnitude = apparent_magnitude - record.extinction;
    let distance_modulus = corrected_magnitude - absolute_magnitude;
    let distance_pc = 10_f64.powf(distance_modulus / 5.0 + 1.0);

    let corrected_magnitude_var = sigma_apparent.powi(2) + sigma_extinction.powi(2);
    let distance_modulus_sigma = (corrected_magnitude_var + absolute_magnitude_var).sqrt();
    let distance_error_pc = distance_pc * LN_10 / 5.0 * distance_modulus_sigma;

    DistanceEstimate {
        absolute_magnitude,
        distance_modulus,
        distance_pc,
        distance_error_pc,
    }
}

/// Compute distances for every row of a catalog. A new catalog is returned
/// with the columns `Absolute_Magnitude`, `Distance_modulus`, `Distance_pc`
/// and `Distance_error_pc` (replacing any existing values); the input is
/// untouched. Every row is retained and the order is unchanged.
///
/// The only failure is a catalog without `Period` or `Extinction` columns.
pub fn compute_distances(
    catalog: &Catalog,
    config: &DistanceConfig,
) -> Result<Catalog, DistanceError> {
    catalog.require(&[Column::Period, Column::Extinction])?;
    debug!("Computing distances with {:?}", config);

    let mut out = catalog.clone();
    for record in out.records.iter_mut() {
        record.distance = Some(estimate_distance(record, config));
    }
    for column in Column::DISTANCES {
        out.push_column(column);
    }

    let num_invalid_periods = out
        .iter()
        .filter(|r| r.period.is_nan() || r.period <= 0.0)
        .count();
    if num_invalid_periods > 0 {
        format!("{num_invalid_periods} rows don't have a positive period; their derived values are NaN").warn();
    }
    if config.apparent_magnitude.is_none() {
        let num_no_magnitude = out
            .iter()
            .filter(|r| r.period > 0.0 && r.apparent_magnitude.is_none())
            .count();
        if num_no_magnitude > 0 {
            format!("{num_no_magnitude} rows have no apparent magnitude; only their absolute magnitudes were computed").warn();
        }
    }

    Ok(out)
}
