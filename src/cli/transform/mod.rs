// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.


use std::{path::PathBuf, str::FromStr};

use clap::Parser;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::common::{
    check_input_catalog, check_output_catalog, display_warnings, distance_config_block,
    frame_block, CatalogArgsError, FrameArgs, FrameArgsError, InfoPrinter, PlArgs, PlArgsError,
    ARG_FILE_HELP, CATALOG_OUTPUT_HELP,
};
use crate::{
    constants::DEFAULT_TRANSFORM_OUTPUT,
    coord::{Origin, ORIGINS_COMMA_SEPARATED},
    params::{InputCatalogParams, TransformParams},
    WarpError,
};

lazy_static::lazy_static! {
    static ref ORIGIN_HELP: String =
        format!("Where the origin of the output positions is. Supported origins: {}. Default: {}", *ORIGINS_COMMA_SEPARATED, Origin::default());
}

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct TransformArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    /// Path to the input Cepheid catalog. If it doesn't have a "Distance_pc"
    /// column, distances are computed first.
    #[clap(short, long, parse(from_os_str), help_heading = "INPUT AND OUTPUT")]
    pub(super) catalog: Option<PathBuf>,

    #[clap(short, long, parse(from_os_str), help = CATALOG_OUTPUT_HELP.as_str(), help_heading = "INPUT AND OUTPUT")]
    pub(super) output: Option<PathBuf>,

    #[clap(long, help = ORIGIN_HELP.as_str(), help_heading = "INPUT AND OUTPUT")]
    pub(super) origin: Option<String>,

    #[clap(flatten)]
    #[serde(rename = "pl")]
    #[serde(default)]
    pub(super) pl_args: PlArgs,

    #[clap(flatten)]
    #[serde(rename = "frame")]
    #[serde(default)]
    pub(super) frame_args: FrameArgs,
}

impl TransformArgs {
    pub(super) fn merge(self) -> Result<TransformArgs, WarpError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            let TransformArgs {
                args_file: _,
                catalog,
                output,
                origin,
                pl_args,
                frame_args,
            } = unpack_arg_file!(arg_file);

            Ok(TransformArgs {
                args_file: None,
                catalog: cli_args.catalog.or(catalog),
                output: cli_args.output.or(output),
                origin: cli_args.origin.or(origin),
                pl_args: cli_args.pl_args.merge(pl_args),
                frame_args: cli_args.frame_args.merge(frame_args),
            })
        } else {
            Ok(cli_args)
        }
    }

    fn parse(self) -> Result<TransformParams, TransformArgsError> {
        debug!("{:#?}", self);

        let Self {
            args_file: _,
            catalog,
            output,
            origin,
            pl_args,
            frame_args,
        } = self;

        let path = check_input_catalog(catalog)?;
        let output_catalog = output.unwrap_or_else(|| PathBuf::from(DEFAULT_TRANSFORM_OUTPUT));
        check_output_catalog(&output_catalog)?;
        let origin = match origin {
            Some(s) => Origin::from_str(&s).map_err(|_| TransformArgsError::InvalidOrigin(s))?,
            None => Origin::default(),
        };
        let distance_config = pl_args.parse()?;
        let frame = frame_args.parse()?;

        let mut printer = InfoPrinter::new("Transforming positions".into());
        printer.push_line(format!("Input catalog: {}", path.display()).into());
        printer.push_line(format!("Output catalog: {}", output_catalog.display()).into());
        printer.push_line(format!("Origin: {origin}").into());
        printer.push_block(frame_block(&frame));
        printer.push_block(distance_config_block(&distance_config));
        printer.display();

        display_warnings();

        Ok(TransformParams {
            input: InputCatalogParams {
                path,
                distance_config,
            },
            output_catalog,
            frame,
            origin,
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
pub(super) enum TransformArgsError {
    #[error("Unrecognised origin '{0}'; supported origins: {}", *ORIGINS_COMMA_SEPARATED)]
    InvalidOrigin(String),

    #[error(transparent)]
    Catalog(#[from] CatalogArgsError),

    #[error(transparent)]
    Pl(#[from] PlArgsError),

    #[error(transparent)]
    Frame(#[from] FrameArgsError),
}
