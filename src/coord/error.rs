// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

use crate::catalog::MissingColumnError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    #[error("Cannot transform positions: {0}")]
    MissingColumn(#[from] MissingColumnError),
}

/// Errors with the constants of a Galactic frame.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrameError {
    #[error("All Galactic frame constants must be finite")]
    NotFinite,

    #[error("The Galactic pole's declination ({0}°) is out of range (-90° <= Dec <= 90°)")]
    InvalidPoleDec(f64),

    #[error("The Sun's galactocentric distance ({0} pc) cannot be negative")]
    NegativeSunDistance(f64),

    #[error("The Sun's height above the Galactic plane ({height} pc) cannot be larger than its galactocentric distance ({distance} pc)")]
    SunHeightTooLarge { height: f64, distance: f64 },
}
