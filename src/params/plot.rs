// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use log::info;
use thiserror::Error;

use super::InputCatalogParams;
use crate::{
    catalog::ReadCatalogError,
    cli::display_warnings,
    coord::GalacticFrame,
    distance::DistanceError,
    plot::{PlotError, PlotOptions, ScatterPlot},
};

pub(crate) struct PlotParams {
    pub(crate) input: InputCatalogParams,
    pub(crate) output_image: PathBuf,
    pub(crate) frame: GalacticFrame,
    pub(crate) options: PlotOptions,
}

impl PlotParams {
    pub(crate) fn run(&self) -> Result<ScatterPlot, PlotParamsError> {
        let Self {
            input,
            output_image,
            frame,
            options,
        } = self;

        let catalog = input.load_with_distances::<PlotParamsError>()?;
        let plot = ScatterPlot::new(&catalog, frame, options.clone())?;
        display_warnings();

        let extent = plot.extent();
        info!(
            "Plotting {} stars coloured by {} ({} frame)",
            plot.points().len(),
            plot.colour_by(),
            options.origin
        );
        info!(
            "X: [{:.0}, {:.0}] pc, Y: [{:.0}, {:.0}] pc, Z: [{:.0}, {:.0}] pc",
            extent.x.0, extent.x.1, extent.y.0, extent.y.1, extent.z.0, extent.z.1
        );

        plot.save(output_image)?;
        info!("Saved {}", output_image.display());

        Ok(plot)
    }
}

#[derive(Error, Debug)]
pub(crate) enum PlotParamsError {
    #[error(transparent)]
    Read(#[from] ReadCatalogError),

    #[error(transparent)]
    Distance(#[from] DistanceError),

    #[error(transparent)]
    Plot(#[from] PlotError),
}
