// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Distances to Galactic Cepheids from the Period-Luminosity relation, and their
3D distribution in the Milky Way.

A [`Catalog`] is read with [`read_catalog_file`], given distances with
[`compute_distances`], placed in a Galactic frame with [`transform_catalog`]
or [`FrameTransform`], and drawn with [`ScatterPlot`].
 */

pub mod catalog;
mod cli;
pub mod constants;
pub mod coord;
pub mod distance;
mod params;
pub mod plot;

// Re-exports.
pub use catalog::{read_catalog_file, write_catalog_file, Catalog, Column, StarRecord};
pub use cli::{Warp, WarpError};
pub use coord::{transform_catalog, FrameTransform, GalacticFrame, GalacticXYZ, Origin};
pub use distance::{compute_distances, estimate_distance, DistanceConfig, PlRelation};
pub use plot::{PlotOptions, ScatterPlot};
