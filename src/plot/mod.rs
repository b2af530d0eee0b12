// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! 3D scatter plots of Cepheid positions.
//!
//! A [`ScatterPlot`] is built from a catalog with distances without touching
//! any files; it can then be rendered into an RGB buffer or saved as an
//! image. Galactic X and Y span the horizontal plane of the plot and Galactic
//! Z is vertical.

mod colourmap;
mod error;
#[cfg(test)]
mod tests;

pub use colourmap::ColourMap;
pub use error::*;

use std::path::Path;

use itertools::Itertools;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::{
    catalog::{Catalog, Column},
    cli::Warn,
    constants::{DEFAULT_PLOT_HEIGHT, DEFAULT_PLOT_WIDTH},
    coord::{GalacticFrame, GalacticXYZ, Origin},
};

/// The quantity used to colour the points of a plot.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumIter,
    strum_macros::EnumString,
)]
pub enum ColourBy {
    #[strum(serialize = "period")]
    #[serde(rename = "period")]
    Period,

    #[strum(serialize = "distance")]
    #[serde(rename = "distance")]
    Distance,
}

lazy_static::lazy_static! {
    pub(crate) static ref COLOUR_BYS_COMMA_SEPARATED: String = ColourBy::iter().join(", ");
}

impl ColourBy {
    pub fn colour_map(self) -> ColourMap {
        match self {
            ColourBy::Period => ColourMap::Viridis,
            ColourBy::Distance => ColourMap::Plasma,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ColourBy::Period => "Period (days)",
            ColourBy::Distance => "Distance (pc)",
        }
    }

    fn column(self) -> Column {
        match self {
            ColourBy::Period => Column::Period,
            ColourBy::Distance => Column::DistancePc,
        }
    }
}

/// How a [`ScatterPlot`] should look.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotOptions {
    /// [pixels]
    pub width: u32,
    /// [pixels]
    pub height: u32,
    pub title: String,
    /// Where the origin of the plotted frame is.
    pub origin: Origin,
    /// Draw a translucent plane at Z = 0.
    pub reference_plane: bool,
    /// If `None`, points are coloured by period when the catalog has periods,
    /// otherwise by distance.
    pub colour_by: Option<ColourBy>,
}

impl Default for PlotOptions {
    fn default() -> Self {
        PlotOptions {
            width: DEFAULT_PLOT_WIDTH,
            height: DEFAULT_PLOT_HEIGHT,
            title: "3D distribution of Galactic Cepheids".to_string(),
            origin: Origin::default(),
            reference_plane: true,
            colour_by: None,
        }
    }
}

/// The range of each axis of a plot [parsecs].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub x: (f64, f64),
    pub y: (f64, f64),
    pub z: (f64, f64),
}

/// A 3D scatter plot of Cepheid positions, ready to render.
#[derive(Debug, Clone)]
pub struct ScatterPlot {
    points: Vec<GalacticXYZ>,
    colour_values: Vec<f64>,
    colour_by: ColourBy,
    num_skipped: usize,
    options: PlotOptions,
}

impl ScatterPlot {
    /// Build a plot from a catalog with `RA`, `Dec` and `Distance_pc` columns.
    /// Rows without a finite position (e.g. a NaN distance) are left out of
    /// the plot, with a warning.
    pub fn new(
        catalog: &Catalog,
        frame: &GalacticFrame,
        options: PlotOptions,
    ) -> Result<ScatterPlot, PlotError> {
        catalog.require(&[Column::Ra, Column::Dec, Column::DistancePc])?;

        let colour_by = options.colour_by.unwrap_or(if catalog.has_column(Column::Period) {
            ColourBy::Period
        } else {
            ColourBy::Distance
        });
        catalog.require(&[colour_by.column()])?;
        debug!("Plotting {} rows coloured by {colour_by}", catalog.len());

        let transform = frame.transform();
        let mut points = Vec::with_capacity(catalog.len());
        let mut colour_values = Vec::with_capacity(catalog.len());
        let mut num_skipped = 0;
        for record in catalog {
            let distance = record.get(Column::DistancePc).unwrap_or(f64::NAN);
            let point = transform.to_frame(options.origin, record.ra, record.dec, distance);
            if !point.is_finite() {
                num_skipped += 1;
                continue;
            }
            points.push(point);
            colour_values.push(record.get(colour_by.column()).unwrap_or(f64::NAN));
        }

        if num_skipped > 0 {
            format!("{num_skipped} rows don't have a usable distance and were left out of the plot")
                .warn();
        }
        trace!("{} points to plot", points.len());

        Ok(ScatterPlot {
            points,
            colour_values,
            colour_by,
            num_skipped,
            options,
        })
    }

    pub fn points(&self) -> &[GalacticXYZ] {
        &self.points
    }

    /// The value colouring each point, in the same order as
    /// [`ScatterPlot::points`].
    pub fn colour_values(&self) -> &[f64] {
        &self.colour_values
    }

    pub fn colour_by(&self) -> ColourBy {
        self.colour_by
    }

    /// The number of catalog rows that aren't in the plot.
    pub fn num_skipped(&self) -> usize {
        self.num_skipped
    }

    pub fn options(&self) -> &PlotOptions {
        &self.options
    }

    /// The axis ranges covering every point. Axes without any spread are
    /// widened by a parsec either side, and the Z axis always includes 0 when
    /// the reference plane is drawn.
    pub fn extent(&self) -> Extent {
        let range = |values: &mut dyn Iterator<Item = f64>| -> (f64, f64) {
            let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
            if min > max {
                (-1.0, 1.0)
            } else if min == max {
                (min - 1.0, max + 1.0)
            } else {
                (min, max)
            }
        };

        let x = range(&mut self.points.iter().map(|p| p.x));
        let y = range(&mut self.points.iter().map(|p| p.y));
        let mut z = range(&mut self.points.iter().map(|p| p.z));
        if self.options.reference_plane {
            z = (z.0.min(0.0), z.1.max(0.0));
        }
        Extent { x, y, z }
    }

    /// The minimum and maximum finite colour values. If there aren't any, the
    /// range is (0, 1).
    pub fn colour_range(&self) -> (f64, f64) {
        self.colour_values
            .iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, &v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
            .unwrap_or((0.0, 1.0))
    }

    /// The corners of the Z = 0 plane covering the X and Y extent of the
    /// plot, if the plane is to be drawn.
    pub fn reference_plane(&self) -> Option<[GalacticXYZ; 4]> {
        if !self.options.reference_plane {
            return None;
        }
        let Extent { x, y, .. } = self.extent();
        let corner = |x, y| GalacticXYZ { x, y, z: 0.0 };
        Some([
            corner(x.0, y.0),
            corner(x.1, y.0),
            corner(x.1, y.1),
            corner(x.0, y.1),
        ])
    }

    /// Draw the plot into a new RGB buffer (3 bytes per pixel, row-major).
    #[cfg(feature = "plotting")]
    pub fn render(&self) -> Result<Vec<u8>, PlotError> {
        use plotters::prelude::*;

        let (width, height) = (self.options.width, self.options.height);
        let mut buffer = vec![0; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            drawing::draw(self, &root)?;
            root.present().map_err(|e| DrawError(e.to_string()))?;
        }
        Ok(buffer)
    }

    /// Render the plot and save it as an image. The image format is taken
    /// from the file extension (e.g. "png").
    #[cfg(feature = "plotting")]
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PlotError> {
        use plotters::prelude::*;

        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        debug!("Saving plot to '{}'", path.display());

        let root = BitMapBackend::new(path, (self.options.width, self.options.height))
            .into_drawing_area();
        drawing::draw(self, &root)?;
        root.present().map_err(|e| DrawError(e.to_string()))?;
        Ok(())
    }

    #[cfg(not(feature = "plotting"))]
    pub fn render(&self) -> Result<Vec<u8>, PlotError> {
        Err(PlotError::NoPlottingFeature)
    }

    #[cfg(not(feature = "plotting"))]
    pub fn save<P: AsRef<Path>>(&self, _path: P) -> Result<(), PlotError> {
        Err(PlotError::NoPlottingFeature)
    }
}

#[cfg(feature = "plotting")]
mod drawing {
    use plotters::{coord::Shift, prelude::*};

    use super::{colourmap::normalise, ColourMap, DrawError, ScatterPlot};

    const POINT_SIZE: i32 = 4;
    const COLOUR_BAR_WIDTH: u32 = 220;
    const COLOUR_BAR_STEPS: i32 = 128;
    const PLANE_COLOUR: RGBColor = RGBColor(120, 120, 120);

    fn rgb(map: ColourMap, frac: f64) -> RGBColor {
        let (r, g, b) = map.rgb(frac);
        RGBColor(r, g, b)
    }

    pub(super) fn draw<DB: DrawingBackend>(
        plot: &ScatterPlot,
        root: &DrawingArea<DB, Shift>,
    ) -> Result<(), DrawError> {
        root.fill(&WHITE).map_err(|e| DrawError(e.to_string()))?;
        let (width, _) = root.dim_in_pixel();
        let (chart_area, bar_area) =
            root.split_horizontally(width.saturating_sub(COLOUR_BAR_WIDTH));

        let extent = plot.extent();
        let mut chart = ChartBuilder::on(&chart_area)
            .caption(&plot.options.title, ("sans-serif", 40))
            .margin(30)
            .build_cartesian_3d(
                extent.x.0..extent.x.1,
                extent.z.0..extent.z.1,
                extent.y.0..extent.y.1,
            )
            .map_err(|e| DrawError(e.to_string()))?;
        chart.with_projection(|mut pb| {
            pb.yaw = 0.7;
            pb.pitch = 0.35;
            pb.scale = 0.8;
            pb.into_matrix()
        });
        chart
            .configure_axes()
            .light_grid_style(BLACK.mix(0.1))
            .max_light_lines(3)
            .draw()
            .map_err(|e| DrawError(e.to_string()))?;

        if let Some(corners) = plot.reference_plane() {
            chart
                .draw_series(std::iter::once(Polygon::new(
                    corners.iter().map(|c| (c.x, c.z, c.y)).collect::<Vec<_>>(),
                    PLANE_COLOUR.mix(0.2).filled(),
                )))
                .map_err(|e| DrawError(e.to_string()))?;
        }

        let map = plot.colour_by.colour_map();
        let (lo, hi) = plot.colour_range();
        chart
            .draw_series(
                plot.points
                    .iter()
                    .zip(plot.colour_values.iter())
                    .map(|(p, &v)| {
                        let colour = rgb(map, normalise(v, lo, hi));
                        EmptyElement::at((p.x, p.z, p.y))
                            + Circle::new((0, 0), POINT_SIZE, colour.mix(0.8).filled())
                    }),
            )
            .map_err(|e| DrawError(e.to_string()))?;

        chart_area
            .draw_text(
                &format!("{} frame; X, Y and Z (vertical) in pc", plot.options.origin),
                &("sans-serif", 24).into_font().color(&BLACK),
                (20, 60),
            )
            .map_err(|e| DrawError(e.to_string()))?;

        draw_colour_bar(&bar_area, map, (lo, hi), plot.colour_by.label())
    }

    fn draw_colour_bar<DB: DrawingBackend>(
        area: &DrawingArea<DB, Shift>,
        map: ColourMap,
        (lo, hi): (f64, f64),
        label: &str,
    ) -> Result<(), DrawError> {
        let (width, height) = area.dim_in_pixel();
        let (width, height) = (width as i32, height as i32);
        let top = height / 6;
        let bottom = height - height / 6;
        let left = 20;
        let right = (left + 50).min(width);
        let step = (bottom - top) as f64 / COLOUR_BAR_STEPS as f64;

        for i in 0..COLOUR_BAR_STEPS {
            let frac = i as f64 / (COLOUR_BAR_STEPS - 1) as f64;
            let y_low = bottom - (i as f64 * step) as i32;
            let y_high = bottom - ((i + 1) as f64 * step) as i32;
            area.draw(&Rectangle::new(
                [(left, y_high), (right, y_low)],
                rgb(map, frac).filled(),
            ))
            .map_err(|e| DrawError(e.to_string()))?;
        }

        let font = ("sans-serif", 24).into_font().color(&BLACK);
        for (text, y) in [
            (label.to_string(), top - 50),
            (format!("{hi:.1}"), top),
            (format!("{lo:.1}"), bottom - 24),
        ] {
            let x = if y < top { left } else { right + 8 };
            area.draw_text(&text, &font, (x, y))
                .map_err(|e| DrawError(e.to_string()))?;
        }

        Ok(())
    }
}
