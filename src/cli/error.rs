// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all user-facing errors. This should be the *only* error enum
//! that the binary reports.

use thiserror::Error;

use super::{
    catalog_verify::CatalogVerifyArgsError,
    common::{CatalogArgsError, FrameArgsError, PlArgsError},
    distances::DistancesArgsError,
    plot::PlotArgsError,
    transform::TransformArgsError,
};
use crate::{
    catalog::{ReadCatalogError, WriteCatalogError, KNOWN_COLUMNS_COMMA_SEPARATED},
    coord::{FrameError, TransformError},
    distance::DistanceError,
    params::{DistancesParamsError, PlotParamsError, TransformParamsError},
    plot::PlotError,
};

/// The *only* error reported by `cepheid_warp`. Each variant groups errors by
/// topic, and its message carries a hint for that topic.
#[derive(Error, Debug)]
pub enum WarpError {
    /// An error reading, writing or interpreting a catalog.
    #[error("{0}\n\nCatalogs are delimited text with a header line; recognised columns are: {}", *KNOWN_COLUMNS_COMMA_SEPARATED)]
    Catalog(String),

    /// An error related to the Period-Luminosity relation or its inputs.
    #[error("{0}\n\nDistances need \"Period\" and \"Extinction\" columns; see `cepheid_warp distances --help`")]
    Distances(String),

    /// An error related to the Galactic frames.
    #[error("{0}\n\nSee `cepheid_warp transform --help` for the Galactic frame options")]
    Coordinates(String),

    /// An error related to plotting.
    #[error("{0}\n\nSee `cepheid_warp plot --help`")]
    Plot(String),

    /// An error related to argument files.
    #[error("{0}\n\nArgument files are TOML or JSON with the same names as the long command-line arguments, using underscores")]
    ArgFile(String),

    /// A generic error that can't be clarified further, e.g. IO errors.
    #[error("{0}")]
    Generic(String),
}

// Library errors.

impl From<ReadCatalogError> for WarpError {
    fn from(e: ReadCatalogError) -> Self {
        match e {
            ReadCatalogError::IO(e) => Self::from(e),
            _ => Self::Catalog(e.to_string()),
        }
    }
}

impl From<WriteCatalogError> for WarpError {
    fn from(e: WriteCatalogError) -> Self {
        match e {
            WriteCatalogError::IO(e) => Self::from(e),
            _ => Self::Catalog(e.to_string()),
        }
    }
}

impl From<DistanceError> for WarpError {
    fn from(e: DistanceError) -> Self {
        Self::Distances(e.to_string())
    }
}

impl From<TransformError> for WarpError {
    fn from(e: TransformError) -> Self {
        Self::Coordinates(e.to_string())
    }
}

impl From<FrameError> for WarpError {
    fn from(e: FrameError) -> Self {
        Self::Coordinates(e.to_string())
    }
}

impl From<PlotError> for WarpError {
    fn from(e: PlotError) -> Self {
        match e {
            PlotError::IO(e) => Self::from(e),
            _ => Self::Plot(e.to_string()),
        }
    }
}

// Parameter errors.

impl From<DistancesParamsError> for WarpError {
    fn from(e: DistancesParamsError) -> Self {
        match e {
            DistancesParamsError::Read(e) => Self::from(e),
            DistancesParamsError::Distance(e) => Self::from(e),
            DistancesParamsError::Write(e) => Self::from(e),
        }
    }
}

impl From<TransformParamsError> for WarpError {
    fn from(e: TransformParamsError) -> Self {
        match e {
            TransformParamsError::Read(e) => Self::from(e),
            TransformParamsError::Distance(e) => Self::from(e),
            TransformParamsError::Transform(e) => Self::from(e),
            TransformParamsError::Write(e) => Self::from(e),
        }
    }
}

impl From<PlotParamsError> for WarpError {
    fn from(e: PlotParamsError) -> Self {
        match e {
            PlotParamsError::Read(e) => Self::from(e),
            PlotParamsError::Distance(e) => Self::from(e),
            PlotParamsError::Plot(e) => Self::from(e),
        }
    }
}

// Argument errors.

impl From<CatalogArgsError> for WarpError {
    fn from(e: CatalogArgsError) -> Self {
        Self::Catalog(e.to_string())
    }
}

impl From<PlArgsError> for WarpError {
    fn from(e: PlArgsError) -> Self {
        Self::Distances(e.to_string())
    }
}

impl From<FrameArgsError> for WarpError {
    fn from(e: FrameArgsError) -> Self {
        Self::Coordinates(e.to_string())
    }
}

impl From<DistancesArgsError> for WarpError {
    fn from(e: DistancesArgsError) -> Self {
        match e {
            DistancesArgsError::Catalog(e) => Self::from(e),
            DistancesArgsError::Pl(e) => Self::from(e),
        }
    }
}

impl From<CatalogVerifyArgsError> for WarpError {
    fn from(e: CatalogVerifyArgsError) -> Self {
        Self::Catalog(e.to_string())
    }
}

impl From<TransformArgsError> for WarpError {
    fn from(e: TransformArgsError) -> Self {
        match e {
            TransformArgsError::Catalog(e) => Self::from(e),
            TransformArgsError::Pl(e) => Self::from(e),
            TransformArgsError::Frame(e) => Self::from(e),
            TransformArgsError::InvalidOrigin(_) => Self::Coordinates(e.to_string()),
        }
    }
}

impl From<PlotArgsError> for WarpError {
    fn from(e: PlotArgsError) -> Self {
        match e {
            PlotArgsError::Catalog(e) => Self::from(e),
            PlotArgsError::Pl(e) => Self::from(e),
            PlotArgsError::Frame(e) => Self::from(e),
            _ => Self::Plot(e.to_string()),
        }
    }
}

// External errors.

impl From<std::io::Error> for WarpError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}
