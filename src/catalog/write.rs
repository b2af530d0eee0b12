// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code for writing catalogs.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    str::FromStr,
};

use log::debug;
use serde_json::{Map, Value};

use super::{Catalog, CatalogColumn, CatalogOutputType, Delimiter, WriteCatalogError};

/// Write a [`Catalog`] to a file. The type of file written is determined by the
/// file extension.
pub fn write_catalog_file<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<(), WriteCatalogError> {
    fn inner(path: &Path, catalog: &Catalog) -> Result<(), WriteCatalogError> {
        let output_type = path
            .extension()
            .and_then(|os_str| os_str.to_str())
            .and_then(|s| CatalogOutputType::from_str(&s.to_lowercase()).ok())
            .ok_or_else(|| WriteCatalogError::InvalidOutputType(path.to_path_buf()))?;
        debug!(
            "Writing {} rows to '{}' ({output_type})",
            catalog.len(),
            path.display()
        );

        let mut f = BufWriter::new(File::create(path)?);
        match output_type {
            CatalogOutputType::Csv => write_delimited(&mut f, catalog, Delimiter::Comma)?,
            CatalogOutputType::Tsv => write_delimited(&mut f, catalog, Delimiter::Tab)?,
            CatalogOutputType::Json => write_json(&mut f, catalog)?,
        }
        f.flush()?;
        Ok(())
    }
    inner(path.as_ref(), catalog)
}

/// Write a [`Catalog`] as delimited text. Columns are written in schema order.
/// Values not supplied are written as empty cells, and NaNs are written as
/// "NaN", which is read back as NaN.
pub fn write_delimited<W: Write>(
    buf: &mut W,
    catalog: &Catalog,
    delimiter: Delimiter,
) -> Result<(), std::io::Error> {
    let delimiter = delimiter.as_char();
    let sep = delimiter.to_string();

    let header = catalog
        .header()
        .iter()
        .map(|c| quote_if_needed(c.name(), delimiter))
        .collect::<Vec<_>>()
        .join(&sep);
    writeln!(buf, "{header}")?;

    for record in catalog {
        let mut passthrough = record.passthrough.iter();
        let cells = catalog
            .header()
            .iter()
            .map(|c| match c {
                CatalogColumn::Known(c) => record.get(*c).map(|v| v.to_string()).unwrap_or_default(),
                CatalogColumn::Passthrough(_) => passthrough
                    .next()
                    .map(|s| quote_if_needed(s, delimiter))
                    .unwrap_or_default(),
            })
            .collect::<Vec<_>>()
            .join(&sep);
        writeln!(buf, "{cells}")?;
    }

    Ok(())
}

/// Write a [`Catalog`] as a JSON array of objects, one per row. Keys are
/// column names. NaNs and values not supplied are written as `null`.
pub fn write_json<W: Write>(buf: &mut W, catalog: &Catalog) -> Result<(), serde_json::Error> {
    let rows: Vec<Value> = catalog
        .iter()
        .map(|record| {
            let mut passthrough = record.passthrough.iter();
            let mut row = Map::new();
            for column in catalog.header() {
                let value = match column {
                    CatalogColumn::Known(c) => record
                        .get(*c)
                        .and_then(serde_json::Number::from_f64)
                        .map(Value::Number)
                        .unwrap_or(Value::Null),
                    CatalogColumn::Passthrough(_) => passthrough
                        .next()
                        .map(|s| Value::String(s.clone()))
                        .unwrap_or(Value::Null),
                };
                row.insert(column.name().to_string(), value);
            }
            Value::Object(row)
        })
        .collect();

    serde_json::to_writer_pretty(buf, &rows)
}

fn quote_if_needed(s: &str, delimiter: char) -> String {
    if s.contains(delimiter) {
        format!("\"{s}\"")
    } else {
        s.to_string()
    }
}
