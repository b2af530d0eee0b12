// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to verify Cepheid catalogs.

use std::path::{Path, PathBuf};

use clap::Parser;
use itertools::Itertools;
use log::info;
use thiserror::Error;

use crate::{
    catalog::{read_catalog_file, Catalog, CatalogSummary, Column},
    WarpError,
};

/// Verify that Cepheid catalogs can be read, and print some statistics about
/// them.
#[derive(Parser, Debug)]
pub(super) struct CatalogVerifyArgs {
    /// Path to the catalog(s) to be verified.
    #[clap(name = "CATALOGS", parse(from_os_str))]
    catalogs: Vec<PathBuf>,
}

impl CatalogVerifyArgs {
    pub(super) fn run(&self) -> Result<(), WarpError> {
        let num_readable = verify(&self.catalogs)?;
        info!(
            "{num_readable} of {} catalogs could be read",
            self.catalogs.len()
        );
        Ok(())
    }
}

/// Read and print stats out for each input catalog. If a catalog couldn't be
/// read, print the error, and continue trying to read the other catalogs.
/// Returns the number of catalogs that could be read.
fn verify<P: AsRef<Path>>(catalogs: &[P]) -> Result<usize, CatalogVerifyArgsError> {
    if catalogs.is_empty() {
        return Err(CatalogVerifyArgsError::NoCatalogs);
    }

    let mut num_readable = 0;
    for catalog in catalogs {
        let catalog = catalog.as_ref();
        info!("{}:", catalog.display());

        let cat = match read_catalog_file(catalog) {
            Ok(c) => c,
            Err(e) => {
                info!("{}", e);
                info!("");
                continue;
            }
        };
        num_readable += 1;
        for line in describe(&cat) {
            info!("    {line}");
        }
        info!("");
    }

    Ok(num_readable)
}

fn describe(catalog: &Catalog) -> Vec<String> {
    let CatalogSummary {
        num_rows,
        num_invalid_periods,
        num_apparent_magnitudes,
        distance_stats,
    } = catalog.summary();

    let optional = Column::OPTIONAL_INPUTS
        .iter()
        .chain(Column::DISTANCES.iter())
        .chain(Column::POSITIONS.iter())
        .filter(|c| catalog.has_column(**c))
        .join(", ");
    let passthrough = catalog.passthrough_names().join(", ");

    let mut lines = vec![
        format!("{num_rows} stars"),
        if optional.is_empty() {
            "No optional columns".to_string()
        } else {
            format!("Optional columns: {optional}")
        },
    ];
    if !passthrough.is_empty() {
        lines.push(format!("Other columns: {passthrough}"));
    }
    lines.push(format!(
        "{num_invalid_periods} stars without a positive period, {num_apparent_magnitudes} with an apparent magnitude"
    ));
    if let Some((min, median, max)) = distance_stats {
        lines.push(format!(
            "Distances [pc]: min {min:.1}, median {median:.1}, max {max:.1}"
        ));
    }
    lines
}

#[derive(Error, Debug)]
pub(super) enum CatalogVerifyArgsError {
    #[error("No catalogs were supplied")]
    NoCatalogs,
}
