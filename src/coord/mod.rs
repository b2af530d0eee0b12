// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Coordinate transformations from the equatorial frame to Galactic frames.

The galactocentric frame has its origin at the Galactic Centre, +X pointing
from the Sun's projection towards the Galactic Centre, +Y towards Galactic
longitude 90° and +Z towards the North Galactic Pole. The Sun sits at
`(-sqrt(R0² - z0²), 0, z0)`, where `R0` is the Sun's distance to the Galactic
Centre and `z0` is its height above the mid-plane.

The heliocentric frame uses the same axes without the tilt, with the Sun at
the origin.
 */

mod error;
mod frame;

pub use error::*;
pub use frame::*;

use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::catalog::{Catalog, Column};

/// A Cartesian position in one of the Galactic frames [parsecs].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GalacticXYZ {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl GalacticXYZ {
    pub fn nan() -> GalacticXYZ {
        GalacticXYZ {
            x: f64::NAN,
            y: f64::NAN,
            z: f64::NAN,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Galactic longitude and latitude [degrees].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalacticLB {
    pub l: f64,
    pub b: f64,
}

/// Equatorial coordinates with a distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equatorial {
    /// [degrees]
    pub ra: f64,
    /// [degrees]
    pub dec: f64,
    /// [parsecs]
    pub distance_pc: f64,
}

/// Where the origin of a Galactic Cartesian frame is.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumIter,
    strum_macros::EnumString,
)]
pub enum Origin {
    /// The Galactic Centre.
    #[default]
    #[strum(serialize = "galactocentric")]
    #[serde(rename = "galactocentric")]
    Galactocentric,

    /// The Sun.
    #[strum(serialize = "heliocentric")]
    #[serde(rename = "heliocentric")]
    Heliocentric,
}

lazy_static::lazy_static! {
    pub(crate) static ref ORIGINS_COMMA_SEPARATED: String = Origin::iter().join(", ");
}

/// Convert equatorial coordinates [degrees, degrees, parsecs] to galactocentric
/// Cartesian coordinates [parsecs].
pub fn equatorial_to_galactocentric(
    ra_deg: f64,
    dec_deg: f64,
    distance_pc: f64,
    frame: &GalacticFrame,
) -> GalacticXYZ {
    frame
        .transform()
        .to_galactocentric(ra_deg, dec_deg, distance_pc)
}

/// The inverse of [`equatorial_to_galactocentric`].
pub fn galactocentric_to_equatorial(xyz: GalacticXYZ, frame: &GalacticFrame) -> Equatorial {
    frame.transform().galactocentric_to_equatorial(xyz)
}

/// Give each row of a catalog a Cartesian position, added as the columns
/// `X_pc`, `Y_pc` and `Z_pc`. A new catalog is returned; the input is
/// untouched. Rows with non-finite distances get NaN positions, but are
/// retained.
pub fn transform_catalog(
    catalog: &Catalog,
    frame: &GalacticFrame,
    origin: Origin,
) -> Result<Catalog, TransformError> {
    catalog.require(&[Column::Ra, Column::Dec, Column::DistancePc])?;
    debug!("Transforming positions ({origin}) with {frame:?}");

    let transform = frame.transform();
    let mut out = catalog.clone();
    for record in out.records.iter_mut() {
        let distance = record.get(Column::DistancePc).unwrap_or(f64::NAN);
        record.position = Some(transform.to_frame(origin, record.ra, record.dec, distance));
    }
    for column in Column::POSITIONS {
        out.push_column(column);
    }

    Ok(out)
}
