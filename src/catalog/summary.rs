// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use super::{Catalog, Column};

/// High-level statistics on a [`Catalog`].
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSummary {
    pub num_rows: usize,

    /// Rows with a period that can't give a distance (not positive, or NaN).
    pub num_invalid_periods: usize,

    /// Rows with an apparent magnitude.
    pub num_apparent_magnitudes: usize,

    /// The minimum, median and maximum finite distances [parsecs], if the
    /// catalog has distances and at least one of them is finite.
    pub distance_stats: Option<(f64, f64, f64)>,
}

impl Catalog {
    pub fn summary(&self) -> CatalogSummary {
        let num_invalid_periods = self
            .iter()
            .filter(|r| r.period.is_nan() || r.period <= 0.0)
            .count();
        let num_apparent_magnitudes = self
            .iter()
            .filter(|r| r.apparent_magnitude.is_some())
            .count();

        let distance_stats = if self.has_column(Column::DistancePc) {
            let mut distances: Vec<f64> = self
                .iter()
                .filter_map(|r| r.get(Column::DistancePc))
                .filter(|d| d.is_finite())
                .collect();
            distances.sort_unstable_by(f64::total_cmp);
            match distances.len() {
                0 => None,
                n => {
                    let median = if n % 2 == 0 {
                        (distances[n / 2 - 1] + distances[n / 2]) / 2.0
                    } else {
                        distances[n / 2]
                    };
                    Some((distances[0], median, distances[n - 1]))
                }
            }
        } else {
            None
        };

        CatalogSummary {
            num_rows: self.len(),
            num_invalid_periods,
            num_apparent_magnitudes,
            distance_stats,
        }
    }
}
