// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

use crate::catalog::MissingColumnError;

/// Errors from the distance engine. Invalid values in individual rows are
/// never errors; they give NaN distances.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistanceError {
    #[error("Cannot compute distances: {0}")]
    MissingColumn(#[from] MissingColumnError),
}
