// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code for reading catalogs from delimited text files (e.g. CSV).

use std::{
    collections::HashSet,
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    str::FromStr,
};

use log::{debug, trace};

use super::{Catalog, CatalogColumn, Column, MissingColumnError, ReadCatalogError, StarRecord};

/// The character separating cells in a catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Tab,
    Semicolon,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Semicolon => ';',
        }
    }

    /// Work out the delimiter of a file. A "tsv" extension means tabs,
    /// otherwise the most common candidate in the first few lines wins, with
    /// commas winning ties.
    pub fn detect(path: Option<&Path>, contents: &str) -> Delimiter {
        let ext = path
            .and_then(|p| p.extension())
            .and_then(|os_str| os_str.to_str())
            .map(|s| s.to_lowercase());
        if ext.as_deref() == Some("tsv") {
            return Delimiter::Tab;
        }

        let (mut commas, mut tabs, mut semicolons) = (0, 0, 0);
        for line in contents
            .lines()
            .filter(|l| !l.trim().is_empty() && !l.starts_with('#'))
            .take(5)
        {
            commas += line.matches(',').count();
            tabs += line.matches('\t').count();
            semicolons += line.matches(';').count();
        }

        if tabs > commas && tabs > semicolons {
            Delimiter::Tab
        } else if semicolons > commas {
            Delimiter::Semicolon
        } else {
            Delimiter::Comma
        }
    }
}

/// Given the path to a catalog file, return a [`Catalog`]. The delimiter is
/// detected from the file; see [`Delimiter::detect`].
pub fn read_catalog_file<P: AsRef<Path>>(path: P) -> Result<Catalog, ReadCatalogError> {
    fn inner(path: &Path) -> Result<Catalog, ReadCatalogError> {
        debug!("Attempting to read catalog '{}'", path.display());

        let mut contents = String::new();
        BufReader::new(File::open(path)?).read_to_string(&mut contents)?;
        let delimiter = Delimiter::detect(Some(path), &contents);
        trace!("Catalog delimiter: {delimiter:?}");

        let catalog = parse_catalog(&mut contents.as_bytes(), delimiter)?;
        debug!(
            "Read {} rows with columns: {}",
            catalog.len(),
            catalog.header().iter().map(|c| c.name()).collect::<Vec<_>>().join(", ")
        );
        Ok(catalog)
    }
    inner(path.as_ref())
}

/// Parse a buffer containing a delimited catalog into a [`Catalog`]. The first
/// line that isn't blank or a comment (starting with '#') is the header. Either
/// the whole catalog is returned, or an error; never a partial catalog.
pub fn parse_catalog<T: BufRead>(
    buf: &mut T,
    delimiter: Delimiter,
) -> Result<Catalog, ReadCatalogError> {
    let delimiter = delimiter.as_char();
    let mut line = String::new();
    let mut line_num: usize = 0;
    let mut header: Option<Vec<CatalogColumn>> = None;
    let mut records = vec![];

    while buf.read_line(&mut line)? > 0 {
        line_num += 1;

        let content = line
            .trim_start_matches('\u{feff}')
            .trim_end_matches(['\n', '\r']);
        if content.trim().is_empty() || content.starts_with('#') {
            line.clear();
            continue;
        }

        let cells = split_line(content, delimiter);
        match header.as_deref() {
            None => header = Some(parse_header(&cells, line_num)?),
            Some(h) => records.push(parse_row(h, &cells, line_num)?),
        }
        line.clear();
    }

    let header = header.ok_or(ReadCatalogError::EmptyFile)?;
    Ok(Catalog { header, records })
}

fn parse_header(cells: &[&str], line_num: usize) -> Result<Vec<CatalogColumn>, ReadCatalogError> {
    let mut seen = HashSet::new();
    let mut header = Vec::with_capacity(cells.len());
    for &name in cells {
        if !seen.insert(name) {
            return Err(ReadCatalogError::DuplicateColumn {
                line_num,
                name: name.to_string(),
            });
        }
        header.push(match Column::from_str(name) {
            Ok(c) => CatalogColumn::Known(c),
            Err(_) => {
                trace!("Passing through unrecognised column '{name}'");
                CatalogColumn::Passthrough(name.to_string())
            }
        });
    }

    for column in Column::REQUIRED {
        if !header.contains(&CatalogColumn::Known(column)) {
            return Err(MissingColumnError { column }.into());
        }
    }

    Ok(header)
}

fn parse_row(
    header: &[CatalogColumn],
    cells: &[&str],
    line_num: usize,
) -> Result<StarRecord, ReadCatalogError> {
    if cells.len() != header.len() {
        return Err(ReadCatalogError::RowLength {
            line_num,
            expected: header.len(),
            got: cells.len(),
        });
    }

    let mut record = StarRecord::default();
    for (column, &cell) in header.iter().zip(cells) {
        match column {
            // An empty optional input is simply not supplied.
            CatalogColumn::Known(c) if cell.is_empty() && c.is_optional_input() => (),

            CatalogColumn::Known(c) => {
                let value: f64 = cell.parse().map_err(|_| ReadCatalogError::Parse {
                    line_num,
                    column: *c,
                    string: cell.to_string(),
                })?;
                record.set(*c, value);
            }

            CatalogColumn::Passthrough(_) => record.passthrough.push(cell.to_string()),
        }
    }

    Ok(record)
}

/// Split a line into its cells. Delimiters inside double quotes don't split,
/// and the quotes surrounding a cell are removed.
fn split_line(line: &str, delimiter: char) -> Vec<&str> {
    let mut cells = vec![];
    let mut start = 0;
    let mut in_quotes = false;
    for (i, c) in line.char_indices() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c == delimiter && !in_quotes {
            cells.push(unquote(&line[start..i]));
            start = i + c.len_utf8();
        }
    }
    cells.push(unquote(&line[start..]));
    cells
}

fn unquote(cell: &str) -> &str {
    let cell = cell.trim();
    cell.strip_prefix('"')
        .and_then(|c| c.strip_suffix('"'))
        .unwrap_or(cell)
}
