// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Catalogs of Cepheid measurements: reading, writing and summarising.
//!
//! A catalog file is delimited text with a header line naming at least the
//! columns `RA`, `Dec`, `Period` and `Extinction`. Columns we don't recognise
//! are carried along untouched.

mod error;
pub(crate) mod read;
mod summary;
mod types;
pub(crate) mod write;

pub use error::*;
pub use read::{parse_catalog, read_catalog_file, Delimiter};
pub use summary::CatalogSummary;
pub use types::*;
pub use write::write_catalog_file;

use itertools::Itertools;
use strum::IntoEnumIterator;

/// All of the supported output catalog types.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::Display,
    strum_macros::EnumIter,
    strum_macros::EnumString,
)]
pub enum CatalogOutputType {
    #[strum(serialize = "csv")]
    Csv,

    #[strum(serialize = "tsv")]
    Tsv,

    #[strum(serialize = "json")]
    Json,
}

lazy_static::lazy_static! {
    pub(crate) static ref CATALOG_OUTPUT_TYPES_COMMA_SEPARATED: String = CatalogOutputType::iter().join(", ");
}
