// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

use crate::catalog::MissingColumnError;

#[derive(Error, Debug)]
pub enum PlotError {
    #[cfg(not(feature = "plotting"))]
    #[error("cepheid_warp was not compiled with the \"plotting\" feature.\nYou need to compile cepheid_warp from source with this feature to render plots.")]
    NoPlottingFeature,

    #[error("Cannot plot: {0}")]
    MissingColumn(#[from] MissingColumnError),

    #[cfg(feature = "plotting")]
    #[error(transparent)]
    Draw(#[from] DrawError),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}

#[cfg(feature = "plotting")]
#[derive(Error, Debug)]
#[error("Error from the plotters library: {0}")]
pub struct DrawError(pub(crate) String);
