// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::str::FromStr;

use approx::assert_abs_diff_eq;

use super::{colourmap::normalise, *};
use crate::{
    catalog::{CatalogColumn, MissingColumnError, StarRecord},
    distance::{compute_distances, DistanceConfig},
};

fn catalog_with_distances() -> Catalog {
    let records = [
        (10.0, 20.0, 10.0, 0.2, 10.0),
        (120.0, -40.0, 5.0, 0.5, 9.0),
        (266.4, -29.0, 30.0, 2.0, 14.0),
        (300.0, 10.0, -1.0, 0.1, 10.0),
    ]
    .into_iter()
    .map(|(ra, dec, period, extinction, m)| StarRecord {
        apparent_magnitude: Some(m),
        ..StarRecord::new(ra, dec, period, extinction)
    })
    .collect();
    compute_distances(&Catalog::from_records(records), &DistanceConfig::default()).unwrap()
}

#[test]
fn test_colour_map_ends() {
    assert_eq!(ColourMap::Viridis.rgb(0.0), (68, 1, 84));
    assert_eq!(ColourMap::Viridis.rgb(1.0), (253, 231, 37));
    assert_eq!(ColourMap::Plasma.rgb(0.0), (13, 8, 135));
    assert_eq!(ColourMap::Plasma.rgb(1.0), (240, 249, 33));

    // Clamped.
    assert_eq!(ColourMap::Viridis.rgb(-3.0), ColourMap::Viridis.rgb(0.0));
    assert_eq!(ColourMap::Viridis.rgb(7.0), ColourMap::Viridis.rgb(1.0));
    assert_eq!(ColourMap::Plasma.rgb(f64::NAN), colourmap::BAD_VALUE_RGB);
}

#[test]
fn test_colour_map_interpolates() {
    // Halfway between the first two samples.
    let (r, g, b) = ColourMap::Viridis.rgb(0.5 / 8.0);
    assert_eq!((r, g, b), (70, 23, 103));
}

#[test]
fn test_normalise() {
    assert_abs_diff_eq!(normalise(5.0, 0.0, 10.0), 0.5);
    assert_abs_diff_eq!(normalise(-5.0, 0.0, 10.0), 0.0);
    assert_abs_diff_eq!(normalise(15.0, 0.0, 10.0), 1.0);
    assert_abs_diff_eq!(normalise(3.0, 3.0, 3.0), 0.5);
    assert!(normalise(f64::NAN, 0.0, 1.0).is_nan());
}

#[test]
fn test_scatter_plot_skips_unusable_rows() {
    let catalog = catalog_with_distances();
    let plot = ScatterPlot::new(&catalog, &GalacticFrame::default(), PlotOptions::default())
        .unwrap();

    assert_eq!(plot.points().len(), 3);
    assert_eq!(plot.colour_values().len(), 3);
    assert_eq!(plot.num_skipped(), 1);
    assert!(plot.points().iter().all(|p| p.is_finite()));
}

#[test]
fn test_scatter_plot_colours_by_period_by_default() {
    let catalog = catalog_with_distances();
    let plot = ScatterPlot::new(&catalog, &GalacticFrame::default(), PlotOptions::default())
        .unwrap();
    assert_eq!(plot.colour_by(), ColourBy::Period);
    assert_eq!(plot.colour_values(), &[10.0, 5.0, 30.0]);
    assert_eq!(plot.colour_range(), (5.0, 30.0));

    let plot = ScatterPlot::new(
        &catalog,
        &GalacticFrame::default(),
        PlotOptions {
            colour_by: Some(ColourBy::Distance),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(plot.colour_by(), ColourBy::Distance);
    let expected: Vec<f64> = catalog
        .iter()
        .filter_map(|r| r.get(Column::DistancePc))
        .filter(|d| d.is_finite())
        .collect();
    assert_eq!(plot.colour_values(), expected.as_slice());
}

#[test]
fn test_scatter_plot_colours_by_distance_without_periods() {
    let catalog = catalog_with_distances();
    let without_period = Catalog {
        header: catalog
            .header()
            .iter()
            .filter(|c| **c != CatalogColumn::Known(Column::Period))
            .cloned()
            .collect(),
        records: catalog.records().to_vec(),
    };
    let plot = ScatterPlot::new(
        &without_period,
        &GalacticFrame::default(),
        PlotOptions::default(),
    )
    .unwrap();
    assert_eq!(plot.colour_by(), ColourBy::Distance);
}

#[test]
fn test_scatter_plot_needs_distances() {
    let catalog = Catalog::from_records(vec![StarRecord::new(1.0, 2.0, 3.0, 4.0)]);
    let result = ScatterPlot::new(&catalog, &GalacticFrame::default(), PlotOptions::default());
    assert!(matches!(
        result,
        Err(PlotError::MissingColumn(MissingColumnError {
            column: Column::DistancePc
        }))
    ));
}

#[test]
fn test_heliocentric_plot_matches_frame() {
    let catalog = catalog_with_distances();
    let frame = GalacticFrame::default();
    let plot = ScatterPlot::new(
        &catalog,
        &frame,
        PlotOptions {
            origin: Origin::Heliocentric,
            ..Default::default()
        },
    )
    .unwrap();
    let record = &catalog.records()[0];
    let expected = frame.transform().to_heliocentric(
        record.ra,
        record.dec,
        record.get(Column::DistancePc).unwrap(),
    );
    assert_eq!(plot.points()[0], expected);
}

#[test]
fn test_extent_and_reference_plane() {
    let catalog = catalog_with_distances();
    let plot = ScatterPlot::new(&catalog, &GalacticFrame::default(), PlotOptions::default())
        .unwrap();
    let extent = plot.extent();
    for p in plot.points() {
        assert!(extent.x.0 <= p.x && p.x <= extent.x.1);
        assert!(extent.y.0 <= p.y && p.y <= extent.y.1);
        assert!(extent.z.0 <= p.z && p.z <= extent.z.1);
    }
    assert!(extent.z.0 <= 0.0 && 0.0 <= extent.z.1);

    let corners = plot.reference_plane().unwrap();
    assert!(corners.iter().all(|c| c.z == 0.0));
    assert_eq!(corners[0].x, extent.x.0);
    assert_eq!(corners[2].x, extent.x.1);
    assert_eq!(corners[0].y, extent.y.0);
    assert_eq!(corners[2].y, extent.y.1);

    let plot = ScatterPlot::new(
        &catalog,
        &GalacticFrame::default(),
        PlotOptions {
            reference_plane: false,
            ..Default::default()
        },
    )
    .unwrap();
    assert!(plot.reference_plane().is_none());
}

#[test]
fn test_extent_of_empty_plot() {
    let catalog = compute_distances(&Catalog::from_records(vec![]), &DistanceConfig::default())
        .unwrap();
    let plot = ScatterPlot::new(&catalog, &GalacticFrame::default(), PlotOptions::default())
        .unwrap();
    assert!(plot.points().is_empty());
    let extent = plot.extent();
    assert_eq!(extent.x, (-1.0, 1.0));
    assert_eq!(extent.y, (-1.0, 1.0));
    assert_eq!(extent.z, (-1.0, 1.0));
    assert_eq!(plot.colour_range(), (0.0, 1.0));
}

#[test]
fn test_parse_colour_by() {
    assert_eq!(ColourBy::from_str("period").unwrap(), ColourBy::Period);
    assert_eq!(ColourBy::from_str("distance").unwrap(), ColourBy::Distance);
    assert!(ColourBy::from_str("magnitude").is_err());
}

#[test]
#[cfg(feature = "plotting")]
#[ignore = "needs a system font"]
fn test_render_and_save() {
    let catalog = catalog_with_distances();
    let options = PlotOptions {
        width: 400,
        height: 300,
        ..Default::default()
    };
    let plot = ScatterPlot::new(&catalog, &GalacticFrame::default(), options).unwrap();

    let buffer = plot.render().unwrap();
    assert_eq!(buffer.len(), 400 * 300 * 3);
    // Something other than the white background was drawn.
    assert!(buffer.iter().any(|&b| b != 255));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plots").join("cepheids.png");
    plot.save(&path).unwrap();
    assert!(path.exists());
}

#[test]
#[cfg(not(feature = "plotting"))]
fn test_no_plotting_feature() {
    let catalog = catalog_with_distances();
    let plot = ScatterPlot::new(&catalog, &GalacticFrame::default(), PlotOptions::default())
        .unwrap();
    assert!(matches!(plot.render(), Err(PlotError::NoPlottingFeature)));
}
