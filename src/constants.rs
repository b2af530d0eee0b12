// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All constants *must* be double precision. Distances are in parsecs, angles in
degrees and magnitudes are dimensionless, unless the name says otherwise.
 */

pub use std::f64::consts::LN_10;

/// The slope of the default Period-Luminosity relation (Gaia DR3 Galactic
/// Cepheids) [mag / dex].
pub const DEFAULT_PL_SLOPE: f64 = -2.43;

/// The zero-point of the default Period-Luminosity relation (Gaia DR3 Galactic
/// Cepheids) [mag].
pub const DEFAULT_PL_INTERCEPT: f64 = -1.43;

/// The calibration uncertainty on [`DEFAULT_PL_SLOPE`] [mag / dex].
pub const DEFAULT_PL_SLOPE_ERR: f64 = 0.05;

/// The calibration uncertainty on [`DEFAULT_PL_INTERCEPT`] [mag].
pub const DEFAULT_PL_INTERCEPT_ERR: f64 = 0.03;

/// Right ascension of the North Galactic Pole (J2000) [degrees].
pub const DEFAULT_POLE_RA_DEG: f64 = 192.85948;

/// Declination of the North Galactic Pole (J2000) [degrees].
pub const DEFAULT_POLE_DEC_DEG: f64 = 27.12825;

/// Galactic longitude of the North Celestial Pole (J2000) [degrees].
pub const DEFAULT_NODE_LONGITUDE_DEG: f64 = 122.93192;

/// Distance from the Sun to the Galactic Centre [parsecs].
pub const DEFAULT_SUN_DISTANCE_PC: f64 = 8122.0;

/// Height of the Sun above the Galactic mid-plane [parsecs].
pub const DEFAULT_SUN_HEIGHT_PC: f64 = 20.8;

/// The number of X pixels on the plots.
pub const DEFAULT_PLOT_WIDTH: u32 = 2000;

/// The number of Y pixels on the plots.
pub const DEFAULT_PLOT_HEIGHT: u32 = 1600;

/// The default output catalog when computing distances.
pub const DEFAULT_DISTANCES_OUTPUT: &str = "cepheid_distances.csv";

/// The default output catalog when transforming coordinates.
pub const DEFAULT_TRANSFORM_OUTPUT: &str = "cepheid_positions.csv";

/// The default output image when plotting.
pub const DEFAULT_PLOT_OUTPUT: &str = "cepheid_warp.png";
