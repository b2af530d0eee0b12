// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use log::info;
use thiserror::Error;

use crate::{
    catalog::{read_catalog_file, write_catalog_file, ReadCatalogError, WriteCatalogError},
    cli::display_warnings,
    distance::{compute_distances, DistanceConfig, DistanceError},
};

pub(crate) struct DistancesParams {
    pub(crate) input_catalog: PathBuf,
    pub(crate) output_catalog: PathBuf,
    pub(crate) distance_config: DistanceConfig,
}

impl DistancesParams {
    pub(crate) fn run(&self) -> Result<(), DistancesParamsError> {
        let Self {
            input_catalog,
            output_catalog,
            distance_config,
        } = self;

        info!("Reading catalog {}", input_catalog.display());
        let catalog = read_catalog_file(input_catalog)?;
        info!("Computing distances for {} stars", catalog.len());
        let catalog = compute_distances(&catalog, distance_config)?;
        display_warnings();

        match catalog.summary().distance_stats {
            Some((min, median, max)) => {
                info!("Distances [pc]: min {min:.1}, median {median:.1}, max {max:.1}")
            }
            None => info!("No star got a finite distance"),
        }

        write_catalog_file(output_catalog, &catalog)?;
        info!("Wrote {}", output_catalog.display());

        Ok(())
    }
}

#[derive(Error, Debug)]
pub(crate) enum DistancesParamsError {
    #[error(transparent)]
    Read(#[from] ReadCatalogError),

    #[error(transparent)]
    Distance(#[from] DistanceError),

    #[error(transparent)]
    Write(#[from] WriteCatalogError),
}
