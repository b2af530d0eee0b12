// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parameters that are kept modular to be used in multiple aspects of
//! `cepheid_warp`.
//!
//! The code here is kind of "mirroring" the code within the `cli` module; the
//! idea is that `cli` is unparsed, user-facing code, whereas parameters have
//! been parsed and are ready to be used directly. The code here should be
//! public to the entire `cepheid_warp` crate.

mod distances;
mod plot;
mod transform;

pub(crate) use distances::{DistancesParams, DistancesParamsError};
pub(crate) use plot::{PlotParams, PlotParamsError};
pub(crate) use transform::{TransformParams, TransformParamsError};

use std::path::PathBuf;

use log::info;

use crate::{
    catalog::{read_catalog_file, Catalog, Column, ReadCatalogError},
    distance::{compute_distances, DistanceConfig, DistanceError},
};

/// An input catalog, and how to give it distances if it doesn't have any.
#[derive(Debug, Clone)]
pub(crate) struct InputCatalogParams {
    pub(crate) path: PathBuf,
    pub(crate) distance_config: DistanceConfig,
}

impl InputCatalogParams {
    /// Read the catalog. If it has no "Distance_pc" column, distances are
    /// computed with the Period-Luminosity relation.
    pub(crate) fn load_with_distances<E>(&self) -> Result<Catalog, E>
    where
        E: From<ReadCatalogError> + From<DistanceError>,
    {
        info!("Reading catalog {}", self.path.display());
        let catalog = read_catalog_file(&self.path)?;
        info!("Read {} stars", catalog.len());

        if catalog.has_column(Column::DistancePc) {
            Ok(catalog)
        } else {
            info!("The catalog has no distances; computing them");
            Ok(compute_distances(&catalog, &self.distance_config)?)
        }
    }
}
