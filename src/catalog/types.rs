// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The strongly-typed catalog of Cepheid measurements.

use itertools::Itertools;
use strum::IntoEnumIterator;

use super::MissingColumnError;
use crate::{coord::GalacticXYZ, distance::DistanceEstimate};

/// All of the columns that carry meaning. Any other column in a catalog file is
/// passed through untouched.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumIter,
    strum_macros::EnumString,
    strum_macros::IntoStaticStr,
)]
pub enum Column {
    #[strum(serialize = "RA")]
    Ra,

    #[strum(serialize = "Dec")]
    Dec,

    #[strum(serialize = "Period")]
    Period,

    #[strum(serialize = "Extinction")]
    Extinction,

    #[strum(serialize = "Period_err")]
    PeriodErr,

    #[strum(serialize = "Extinction_err")]
    ExtinctionErr,

    #[strum(serialize = "Apparent_Magnitude")]
    ApparentMagnitude,

    #[strum(serialize = "Apparent_Magnitude_err")]
    ApparentMagnitudeErr,

    #[strum(serialize = "Absolute_Magnitude")]
    AbsoluteMagnitude,

    #[strum(serialize = "Distance_modulus")]
    DistanceModulus,

    #[strum(serialize = "Distance_pc")]
    DistancePc,

    #[strum(serialize = "Distance_error_pc")]
    DistanceErrorPc,

    #[strum(serialize = "X_pc")]
    XPc,

    #[strum(serialize = "Y_pc")]
    YPc,

    #[strum(serialize = "Z_pc")]
    ZPc,
}

impl Column {
    /// The columns every catalog file must have.
    pub const REQUIRED: [Column; 4] = [Column::Ra, Column::Dec, Column::Period, Column::Extinction];

    /// Per-row inputs that may or may not be supplied.
    pub const OPTIONAL_INPUTS: [Column; 4] = [
        Column::PeriodErr,
        Column::ExtinctionErr,
        Column::ApparentMagnitude,
        Column::ApparentMagnitudeErr,
    ];

    /// The columns added by the distance engine.
    pub const DISTANCES: [Column; 4] = [
        Column::AbsoluteMagnitude,
        Column::DistanceModulus,
        Column::DistancePc,
        Column::DistanceErrorPc,
    ];

    /// The columns added by the coordinate transform.
    pub const POSITIONS: [Column; 3] = [Column::XPc, Column::YPc, Column::ZPc];

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }

    pub fn is_optional_input(self) -> bool {
        Self::OPTIONAL_INPUTS.contains(&self)
    }
}

lazy_static::lazy_static! {
    pub(crate) static ref KNOWN_COLUMNS_COMMA_SEPARATED: String = Column::iter().join(", ");
}

/// A column of a [`Catalog`], in the order it appeared in the input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogColumn {
    Known(Column),

    /// A column without meaning to us. The values live in
    /// [`StarRecord::passthrough`].
    Passthrough(String),
}

impl CatalogColumn {
    pub fn name(&self) -> &str {
        match self {
            CatalogColumn::Known(c) => (*c).into(),
            CatalogColumn::Passthrough(s) => s.as_str(),
        }
    }
}

/// A single Cepheid measurement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StarRecord {
    /// Right ascension [degrees]
    pub ra: f64,
    /// Declination [degrees]
    pub dec: f64,
    /// Pulsation period [days]. Only positive values yield distances.
    pub period: f64,
    /// Extinction [magnitudes]
    pub extinction: f64,

    pub period_err: Option<f64>,
    pub extinction_err: Option<f64>,
    pub apparent_magnitude: Option<f64>,
    pub apparent_magnitude_err: Option<f64>,

    /// Filled in by the distance engine.
    pub distance: Option<DistanceEstimate>,

    /// Filled in by the coordinate transform.
    pub position: Option<GalacticXYZ>,

    /// Values of the passthrough columns, in header order.
    pub passthrough: Vec<String>,
}

impl StarRecord {
    pub fn new(ra: f64, dec: f64, period: f64, extinction: f64) -> StarRecord {
        StarRecord {
            ra,
            dec,
            period,
            extinction,
            ..Default::default()
        }
    }

    /// Get the value of a known column for this record. `None` means that the
    /// value was not supplied.
    pub fn get(&self, column: Column) -> Option<f64> {
        let distance = self.distance.as_ref();
        let position = self.position.as_ref();
        match column {
            Column::Ra => Some(self.ra),
            Column::Dec => Some(self.dec),
            Column::Period => Some(self.period),
            Column::Extinction => Some(self.extinction),
            Column::PeriodErr => self.period_err,
            Column::ExtinctionErr => self.extinction_err,
            Column::ApparentMagnitude => self.apparent_magnitude,
            Column::ApparentMagnitudeErr => self.apparent_magnitude_err,
            Column::AbsoluteMagnitude => distance.map(|d| d.absolute_magnitude),
            Column::DistanceModulus => distance.map(|d| d.distance_modulus),
            Column::DistancePc => distance.map(|d| d.distance_pc),
            Column::DistanceErrorPc => distance.map(|d| d.distance_error_pc),
            Column::XPc => position.map(|p| p.x),
            Column::YPc => position.map(|p| p.y),
            Column::ZPc => position.map(|p| p.z),
        }
    }

    /// Set the value of a known column for this record. Derived quantities
    /// that haven't been set yet are NaN.
    pub(crate) fn set(&mut self, column: Column, value: f64) {
        match column {
            Column::Ra => self.ra = value,
            Column::Dec => self.dec = value,
            Column::Period => self.period = value,
            Column::Extinction => self.extinction = value,
            Column::PeriodErr => self.period_err = Some(value),
            Column::ExtinctionErr => self.extinction_err = Some(value),
            Column::ApparentMagnitude => self.apparent_magnitude = Some(value),
            Column::ApparentMagnitudeErr => self.apparent_magnitude_err = Some(value),
            Column::AbsoluteMagnitude => {
                self.distance.get_or_insert_with(DistanceEstimate::nan).absolute_magnitude = value
            }
            Column::DistanceModulus => {
                self.distance.get_or_insert_with(DistanceEstimate::nan).distance_modulus = value
            }
            Column::DistancePc => {
                self.distance.get_or_insert_with(DistanceEstimate::nan).distance_pc = value
            }
            Column::DistanceErrorPc => {
                self.distance.get_or_insert_with(DistanceEstimate::nan).distance_error_pc = value
            }
            Column::XPc => self.position.get_or_insert_with(GalacticXYZ::nan).x = value,
            Column::YPc => self.position.get_or_insert_with(GalacticXYZ::nan).y = value,
            Column::ZPc => self.position.get_or_insert_with(GalacticXYZ::nan).z = value,
        }
    }
}

/// An ordered collection of [`StarRecord`]s sharing a schema. The order of the
/// records is the order they were read in; it is preserved by every operation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    pub(crate) header: Vec<CatalogColumn>,
    pub(crate) records: Vec<StarRecord>,
}

impl Catalog {
    /// Make a [`Catalog`] out of in-memory records. The schema is the required
    /// columns, followed by any optional or derived columns that *every* record
    /// has. Passthrough values are discarded, as there are no names for them.
    pub fn from_records(mut records: Vec<StarRecord>) -> Catalog {
        let mut header: Vec<CatalogColumn> = Column::REQUIRED
            .iter()
            .copied()
            .map(CatalogColumn::Known)
            .collect();
        if !records.is_empty() {
            for column in Column::OPTIONAL_INPUTS
                .iter()
                .chain(Column::DISTANCES.iter())
                .chain(Column::POSITIONS.iter())
            {
                if records.iter().all(|r| r.get(*column).is_some()) {
                    header.push(CatalogColumn::Known(*column));
                }
            }
        }
        records.iter_mut().for_each(|r| r.passthrough.clear());

        Catalog { header, records }
    }

    pub fn header(&self) -> &[CatalogColumn] {
        &self.header
    }

    pub fn records(&self) -> &[StarRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<StarRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_column(&self, column: Column) -> bool {
        self.header.contains(&CatalogColumn::Known(column))
    }

    /// The names of the columns that are carried along without meaning.
    pub fn passthrough_names(&self) -> impl Iterator<Item = &str> {
        self.header.iter().filter_map(|c| match c {
            CatalogColumn::Passthrough(s) => Some(s.as_str()),
            CatalogColumn::Known(_) => None,
        })
    }

    /// Check that all of the specified columns are present, returning an
    /// error for the first one that isn't.
    pub fn require(&self, columns: &[Column]) -> Result<(), MissingColumnError> {
        match columns.iter().find(|c| !self.has_column(**c)) {
            Some(&column) => Err(MissingColumnError { column }),
            None => Ok(()),
        }
    }

    /// Append a known column to the schema, if it isn't already there.
    pub(crate) fn push_column(&mut self, column: Column) {
        if !self.has_column(column) {
            self.header.push(CatalogColumn::Known(column));
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a StarRecord;
    type IntoIter = std::slice::Iter<'a, StarRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
