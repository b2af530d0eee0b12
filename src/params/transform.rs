// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use log::{debug, info};
use thiserror::Error;

use super::InputCatalogParams;
use crate::{
    catalog::{write_catalog_file, ReadCatalogError, WriteCatalogError},
    cli::display_warnings,
    coord::{transform_catalog, GalacticFrame, Origin, TransformError},
    distance::DistanceError,
};

pub(crate) struct TransformParams {
    pub(crate) input: InputCatalogParams,
    pub(crate) output_catalog: PathBuf,
    pub(crate) frame: GalacticFrame,
    pub(crate) origin: Origin,
}

impl TransformParams {
    pub(crate) fn run(&self) -> Result<(), TransformParamsError> {
        let Self {
            input,
            output_catalog,
            frame,
            origin,
        } = self;

        let catalog = input.load_with_distances::<TransformParamsError>()?;
        let catalog = transform_catalog(&catalog, frame, *origin)?;
        display_warnings();

        let num_positions = catalog
            .iter()
            .filter(|r| r.position.map(|p| p.is_finite()).unwrap_or(false))
            .count();
        debug!("Sun position: {:?}", frame.transform().sun_position());
        info!(
            "{num_positions} of {} stars have finite {origin} positions",
            catalog.len()
        );

        write_catalog_file(output_catalog, &catalog)?;
        info!("Wrote {}", output_catalog.display());

        Ok(())
    }
}

#[derive(Error, Debug)]
pub(crate) enum TransformParamsError {
    #[error(transparent)]
    Read(#[from] ReadCatalogError),

    #[error(transparent)]
    Distance(#[from] DistanceError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Write(#[from] WriteCatalogError),
}
