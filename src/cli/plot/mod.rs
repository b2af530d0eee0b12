// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.


use std::{path::PathBuf, str::FromStr};

use clap::Parser;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::common::{
    check_input_catalog, display_warnings, distance_config_block, frame_block, CatalogArgsError,
    FrameArgs, FrameArgsError, InfoPrinter, PlArgs, PlArgsError, ARG_FILE_HELP,
};
use crate::{
    constants::{DEFAULT_PLOT_HEIGHT, DEFAULT_PLOT_OUTPUT, DEFAULT_PLOT_WIDTH},
    coord::{Origin, ORIGINS_COMMA_SEPARATED},
    params::{InputCatalogParams, PlotParams},
    plot::{ColourBy, PlotOptions, COLOUR_BYS_COMMA_SEPARATED},
    WarpError,
};

lazy_static::lazy_static! {
    static ref OUTPUT_HELP: String =
        format!("The path to the output image. Only PNG is supported. Default: {DEFAULT_PLOT_OUTPUT}");

    static ref ORIGIN_HELP: String =
        format!("Where the origin of the plot is. Supported origins: {}. Default: {}", *ORIGINS_COMMA_SEPARATED, Origin::default());

    static ref COLOUR_BY_HELP: String =
        format!("The quantity that colours the points. Supported: {}. Default: period if the catalog has periods, otherwise distance", *COLOUR_BYS_COMMA_SEPARATED);

    static ref WIDTH_HELP: String =
        format!("The width of the image [pixels]. Default: {DEFAULT_PLOT_WIDTH}");

    static ref HEIGHT_HELP: String =
        format!("The height of the image [pixels]. Default: {DEFAULT_PLOT_HEIGHT}");
}

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct PlotArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    /// Path to the input Cepheid catalog. If it doesn't have a "Distance_pc"
    /// column, distances are computed first.
    #[clap(short, long, parse(from_os_str), help_heading = "INPUT AND OUTPUT")]
    pub(super) catalog: Option<PathBuf>,

    #[clap(short, long, parse(from_os_str), help = OUTPUT_HELP.as_str(), help_heading = "INPUT AND OUTPUT")]
    pub(super) output: Option<PathBuf>,

    #[clap(long, help = WIDTH_HELP.as_str(), help_heading = "PLOT")]
    pub(super) width: Option<u32>,

    #[clap(long, help = HEIGHT_HELP.as_str(), help_heading = "PLOT")]
    pub(super) height: Option<u32>,

    /// The title of the plot.
    #[clap(long, help_heading = "PLOT")]
    pub(super) title: Option<String>,

    #[clap(long, help = ORIGIN_HELP.as_str(), help_heading = "PLOT")]
    pub(super) origin: Option<String>,

    #[clap(long, help = COLOUR_BY_HELP.as_str(), help_heading = "PLOT")]
    pub(super) colour_by: Option<String>,

    /// Don't draw the Z = 0 reference plane.
    #[clap(long, help_heading = "PLOT")]
    #[serde(default)]
    pub(super) no_reference_plane: bool,

    #[clap(flatten)]
    #[serde(rename = "pl")]
    #[serde(default)]
    pub(super) pl_args: PlArgs,

    #[clap(flatten)]
    #[serde(rename = "frame")]
    #[serde(default)]
    pub(super) frame_args: FrameArgs,
}

impl PlotArgs {
    pub(super) fn merge(self) -> Result<PlotArgs, WarpError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            let PlotArgs {
                args_file: _,
                catalog,
                output,
                width,
                height,
                title,
                origin,
                colour_by,
                no_reference_plane,
                pl_args,
                frame_args,
            } = unpack_arg_file!(arg_file);

            Ok(PlotArgs {
                args_file: None,
                catalog: cli_args.catalog.or(catalog),
                output: cli_args.output.or(output),
                width: cli_args.width.or(width),
                height: cli_args.height.or(height),
                title: cli_args.title.or(title),
                origin: cli_args.origin.or(origin),
                colour_by: cli_args.colour_by.or(colour_by),
                no_reference_plane: cli_args.no_reference_plane || no_reference_plane,
                pl_args: cli_args.pl_args.merge(pl_args),
                frame_args: cli_args.frame_args.merge(frame_args),
            })
        } else {
            Ok(cli_args)
        }
    }

    fn parse(self) -> Result<PlotParams, PlotArgsError> {
        debug!("{:#?}", self);

        let Self {
            args_file: _,
            catalog,
            output,
            width,
            height,
            title,
            origin,
            colour_by,
            no_reference_plane,
            pl_args,
            frame_args,
        } = self;

        let path = check_input_catalog(catalog)?;
        let output_image = output.unwrap_or_else(|| PathBuf::from(DEFAULT_PLOT_OUTPUT));
        let is_png = output_image
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("png"))
            .unwrap_or(false);
        if !is_png {
            return Err(PlotArgsError::InvalidOutput(output_image));
        }

        let defaults = PlotOptions::default();
        let width = width.unwrap_or(defaults.width);
        let height = height.unwrap_or(defaults.height);
        if width == 0 || height == 0 {
            return Err(PlotArgsError::ZeroSize { width, height });
        }
        let origin = match origin {
            Some(s) => Origin::from_str(&s).map_err(|_| PlotArgsError::InvalidOrigin(s))?,
            None => Origin::default(),
        };
        let colour_by = match colour_by {
            Some(s) => Some(ColourBy::from_str(&s).map_err(|_| PlotArgsError::InvalidColourBy(s))?),
            None => None,
        };
        let options = PlotOptions {
            width,
            height,
            title: title.unwrap_or(defaults.title),
            origin,
            reference_plane: !no_reference_plane,
            colour_by,
        };
        let distance_config = pl_args.parse()?;
        let frame = frame_args.parse()?;

        let mut printer = InfoPrinter::new("Plotting Cepheids".into());
        printer.push_line(format!("Input catalog: {}", path.display()).into());
        printer.push_block(vec![
            format!("Output image: {}", output_image.display()).into(),
            format!("{width}x{height} pixels, origin: {origin}").into(),
            match colour_by {
                Some(c) => format!("Coloured by {c}").into(),
                None => "Coloured by period (or distance without periods)".into(),
            },
            if options.reference_plane {
                "Drawing the Z = 0 plane".into()
            } else {
                "Not drawing the Z = 0 plane".into()
            },
        ]);
        printer.push_block(frame_block(&frame));
        printer.push_block(distance_config_block(&distance_config));
        printer.display();

        display_warnings();

        Ok(PlotParams {
            input: InputCatalogParams {
                path,
                distance_config,
            },
            output_image,
            frame,
            options,
        })
    }

    pub(super) fn run(self, dry_run: bool) -> Result<(), WarpError> {
        debug!("Converting arguments into parameters");
        trace!("{:#?}", self);
        let params = self.parse()?;

        if dry_run {
            info!("Dry run -- exiting now.");
            return Ok(());
        }

        params.run()?;
        Ok(())
    }
}

#[derive(Error, Debug)]
pub(super) enum PlotArgsError {
    #[error("Cannot write a plot to '{0}'; only PNG images are supported")]
    InvalidOutput(PathBuf),

    #[error("The plot size ({width}x{height} pixels) must not be zero")]
    ZeroSize { width: u32, height: u32 },

    #[error("Unrecognised origin '{0}'; supported origins: {}", *ORIGINS_COMMA_SEPARATED)]
    InvalidOrigin(String),

    #[error("Cannot colour by '{0}'; supported: {}", *COLOUR_BYS_COMMA_SEPARATED)]
    InvalidColourBy(String),

    #[error(transparent)]
    Catalog(#[from] CatalogArgsError),

    #[error(transparent)]
    Pl(#[from] PlArgsError),

    #[error(transparent)]
    Frame(#[from] FrameArgsError),
}
