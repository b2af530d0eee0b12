// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.


use std::path::PathBuf;

use clap::Parser;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::common::{
    check_input_catalog, check_output_catalog, display_warnings, distance_config_block,
    CatalogArgsError, InfoPrinter, PlArgs, PlArgsError, ARG_FILE_HELP, CATALOG_OUTPUT_HELP,
};
use crate::{constants::DEFAULT_DISTANCES_OUTPUT, params::DistancesParams, WarpError};

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct DistancesArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    /// Path to the input Cepheid catalog. It must have "RA", "Dec", "Period"
    /// and "Extinction" columns.
    #[clap(short, long, parse(from_os_str), help_heading = "INPUT AND OUTPUT")]
    pub(super) catalog: Option<PathBuf>,

    #[clap(short, long, parse(from_os_str), help = CATALOG_OUTPUT_HELP.as_str(), help_heading = "INPUT AND OUTPUT")]
    pub(super) output: Option<PathBuf>,

    #[clap(flatten)]
    #[serde(rename = "pl")]
    #[serde(default)]
    pub(super) pl_args: PlArgs,
}

impl DistancesArgs {
    /// Both command-line and file arguments overlap in terms of what is
    /// available; this function consolidates everything that was specified into
    /// a single struct. Where applicable, it will prefer CLI parameters over
    /// those in the file.
    ///
    /// This function should only ever merge arguments, and not try to make
    /// sense of them.
    pub(super) fn merge(self) -> Result<DistancesArgs, WarpError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            // Ensure all of the file args are accounted for by pattern
            // matching.
            let DistancesArgs {
                args_file: _,
                catalog,
                output,
                pl_args,
            } = unpack_arg_file!(arg_file);

            Ok(DistancesArgs {
                args_file: None,
                catalog: cli_args.catalog.or(catalog),
                output: cli_args.output.or(output),
                pl_args: cli_args.pl_args.merge(pl_args),
            })
        } else {
            Ok(cli_args)
        }
    }

    fn parse(self) -> Result<DistancesParams, DistancesArgsError> {
        debug!("{:#?}", self);

        let Self {
            args_file: _,
            catalog,
            output,
            pl_args,
        } = self;

        let input_catalog = check_input_catalog(catalog)?;
        let output_catalog = output.unwrap_or_else(|| PathBuf::from(DEFAULT_DISTANCES_OUTPUT));
        check_output_catalog(&output_catalog)?;
        let distance_config = pl_args.parse()?;

        let mut printer = InfoPrinter::new("Computing distances".into());
        printer.push_line(format!("Input catalog: {}", input_catalog.display()).into());
        printer.push_line(format!("Output catalog: {}", output_catalog.display()).into());
        printer.push_block(distance_config_block(&distance_config));
        printer.display();

        display_warnings();

        Ok(DistancesParams {
            input_catalog,
            output_catalog,
            distance_config,
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
pub(super) enum DistancesArgsError {
    #[error(transparent)]
    Catalog(#[from] CatalogArgsError),

    #[error(transparent)]
    Pl(#[from] PlArgsError),
}
