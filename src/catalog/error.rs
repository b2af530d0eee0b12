// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use thiserror::Error;

use super::{Column, CATALOG_OUTPUT_TYPES_COMMA_SEPARATED};

/// A column needed by an operation is not in the catalog. This is fatal for
/// the whole catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("The catalog is missing the required column '{column}'")]
pub struct MissingColumnError {
    pub column: Column,
}

/// Errors associated with reading in a catalog.
#[derive(Error, Debug)]
pub enum ReadCatalogError {
    #[error(transparent)]
    MissingColumn(#[from] MissingColumnError),

    #[error("Catalog line {line_num}: Could not parse '{string}' as a number for column '{column}'")]
    Parse {
        line_num: usize,
        column: Column,
        string: String,
    },

    #[error("Catalog line {line_num}: Expected {expected} values (one for each column), but got {got}")]
    RowLength {
        line_num: usize,
        expected: usize,
        got: usize,
    },

    #[error("Catalog line {line_num}: The column '{name}' appears more than once in the header")]
    DuplicateColumn { line_num: usize, name: String },

    #[error("The catalog has no header line")]
    EmptyFile,

    #[error(transparent)]
    IO(#[from] std::io::Error),
}

/// Errors associated with writing out a catalog.
#[derive(Error, Debug)]
pub enum WriteCatalogError {
    #[error("Cannot determine the output catalog type of '{0}'. Supported formats: {}", *CATALOG_OUTPUT_TYPES_COMMA_SEPARATED)]
    InvalidOutputType(PathBuf),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
