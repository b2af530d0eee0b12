// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fs;

use approx::assert_abs_diff_eq;
use tempfile::TempDir;

use crate::{get_cmd_output, get_test_catalog, warp, NUM_TEST_STARS};
use cepheid_warp::{read_catalog_file, Column, GalacticFrame};

#[test]
fn test_transform_galactocentric() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let output = tmp_dir.path().join("positions.csv");
    let catalog = get_test_catalog();

    #[rustfmt::skip]
    let cmd = warp()
        .args([
            "transform",
            "--catalog", &catalog,
            "--output", &output.display().to_string(),
        ])
        .ok();
    assert!(cmd.is_ok(), "transform failed: {}", cmd.err().unwrap());

    let written = read_catalog_file(&output).unwrap();
    assert_eq!(written.len(), NUM_TEST_STARS);
    let sun = GalacticFrame::default().transform().sun_position();
    for record in written.records() {
        let x = record.get(Column::XPc).unwrap();
        let y = record.get(Column::YPc).unwrap();
        let z = record.get(Column::ZPc).unwrap();
        let d = record.get(Column::DistancePc).unwrap();
        // Every star is as far from the Sun as its distance.
        let from_sun = ((x - sun.x).powi(2) + (y - sun.y).powi(2) + (z - sun.z).powi(2)).sqrt();
        assert_abs_diff_eq!(from_sun, d, epsilon = d * 1e-9);
    }
}

#[test]
fn test_transform_json_heliocentric() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let output = tmp_dir.path().join("positions.json");
    let catalog = get_test_catalog();

    #[rustfmt::skip]
    let cmd = warp()
        .args([
            "transform",
            "--catalog", &catalog,
            "--output", &output.display().to_string(),
            "--origin", "heliocentric",
        ])
        .ok();
    assert!(cmd.is_ok(), "transform failed: {}", cmd.err().unwrap());

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    for row in json.as_array().unwrap() {
        let x = row["X_pc"].as_f64().unwrap();
        let y = row["Y_pc"].as_f64().unwrap();
        let z = row["Z_pc"].as_f64().unwrap();
        let d = row["Distance_pc"].as_f64().unwrap();
        assert_abs_diff_eq!((x * x + y * y + z * z).sqrt(), d, epsilon = d * 1e-9);
    }
}

#[test]
fn test_transform_bad_frame() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let catalog = get_test_catalog();

    #[rustfmt::skip]
    let cmd = warp()
        .args([
            "transform",
            "--catalog", &catalog,
            "--output", &tmp_dir.path().join("out.csv").display().to_string(),
            "--galactic-pole", "192.0", "95.0",
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("declination"), "{stderr}");
}
