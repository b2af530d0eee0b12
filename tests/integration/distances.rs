// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fs;

use approx::assert_relative_eq;
use tempfile::TempDir;

use crate::{get_cmd_output, get_test_catalog, warp, NUM_TEST_STARS};
use cepheid_warp::{read_catalog_file, Column};

#[test]
fn test_distances() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let output = tmp_dir.path().join("distances.csv");
    let catalog = get_test_catalog();

    #[rustfmt::skip]
    let cmd = warp()
        .args([
            "distances",
            "--catalog", &catalog,
            "--output", &output.display().to_string(),
        ])
        .ok();
    assert!(cmd.is_ok(), "distances failed: {}", cmd.err().unwrap());

    let written = read_catalog_file(&output).unwrap();
    assert_eq!(written.len(), NUM_TEST_STARS);
    assert_eq!(written.passthrough_names().collect::<Vec<_>>(), ["Name"]);
    for column in Column::DISTANCES {
        assert!(written.has_column(column));
    }

    // delta Cep: M = -2.43 log10(5.366) - 1.43, d = 10^((m - M - A + 5) / 5).
    let delta_cep = &written.records()[0];
    assert_eq!(delta_cep.passthrough, ["delta Cep"]);
    let abs_mag = -2.43 * 5.366_f64.log10() - 1.43;
    assert_relative_eq!(
        delta_cep.get(Column::AbsoluteMagnitude).unwrap(),
        abs_mag,
        max_relative = 1e-6
    );
    let expected = 10_f64.powf((3.95 - abs_mag - 0.23 + 5.0) / 5.0);
    assert_relative_eq!(
        delta_cep.get(Column::DistancePc).unwrap(),
        expected,
        max_relative = 1e-6
    );
}

#[test]
fn test_distances_dry_run() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let output = tmp_dir.path().join("distances.csv");
    let catalog = get_test_catalog();

    #[rustfmt::skip]
    let cmd = warp()
        .args([
            "distances",
            "--catalog", &catalog,
            "--output", &output.display().to_string(),
            "--dry-run",
        ])
        .ok();
    assert!(cmd.is_ok(), "dry run failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Dry run"), "{stdout}");
    assert!(!output.exists());
}

#[test]
fn test_missing_period_column_is_an_error() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let catalog = tmp_dir.path().join("no_periods.csv");
    fs::write(&catalog, "RA,Dec,Extinction\n10.0,20.0,0.5\n").unwrap();

    #[rustfmt::skip]
    let cmd = warp()
        .args([
            "distances",
            "--catalog", &catalog.display().to_string(),
            "--output", &tmp_dir.path().join("out.csv").display().to_string(),
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("Period"), "{stderr}");
}

#[test]
fn test_unparseable_cell_is_an_error() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let catalog = tmp_dir.path().join("bad.csv");
    fs::write(
        &catalog,
        "RA,Dec,Period,Extinction\n10.0,20.0,5.0,0.5\n11.0,21.0,five,0.5\n",
    )
    .unwrap();

    #[rustfmt::skip]
    let cmd = warp()
        .args([
            "distances",
            "--catalog", &catalog.display().to_string(),
            "--output", &tmp_dir.path().join("out.csv").display().to_string(),
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("line 3"), "{stderr}");
    assert!(stderr.contains("five"), "{stderr}");
}

#[test]
fn test_save_toml_and_reuse() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let output = tmp_dir.path().join("distances.json");
    let args_toml = tmp_dir.path().join("args.toml");
    let catalog = get_test_catalog();

    #[rustfmt::skip]
    let cmd = warp()
        .args([
            "distances",
            "--catalog", &catalog,
            "--output", &output.display().to_string(),
            "--pl-slope", "-2.5",
            "--save-toml", &args_toml.display().to_string(),
            "--dry-run",
        ])
        .ok();
    assert!(cmd.is_ok(), "saving toml failed: {}", cmd.err().unwrap());
    assert!(args_toml.exists());
    assert!(!output.exists());

    let saved = fs::read_to_string(&args_toml).unwrap();
    assert!(saved.contains("pl_slope = -2.5"), "{saved}");

    // Run with only the arguments file.
    let cmd = warp()
        .args(["distances", &args_toml.display().to_string()])
        .ok();
    assert!(cmd.is_ok(), "distances failed: {}", cmd.err().unwrap());
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), NUM_TEST_STARS);
    let abs_mag = rows[0]["Absolute_Magnitude"].as_f64().unwrap();
    assert_relative_eq!(abs_mag, -2.5 * 5.366_f64.log10() - 1.43, max_relative = 1e-6);
}
