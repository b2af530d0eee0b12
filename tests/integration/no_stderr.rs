// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests to ensure there is no stderr output for successful commands.

use std::fs;

use tempfile::TempDir;

use crate::{get_cmd_output, get_test_catalog, warp};

#[test]
fn test_distances_no_stderr() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let catalog = get_test_catalog();

    #[rustfmt::skip]
    let cmd = warp()
        .args([
            "distances",
            "--catalog", &catalog,
            "--output", &tmp_dir.path().join("out.tsv").display().to_string(),
        ])
        .ok();
    assert!(cmd.is_ok(), "distances failed: {}", cmd.err().unwrap());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
}

#[test]
fn test_warnings_go_to_stdout() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let catalog = tmp_dir.path().join("cepheids.csv");
    fs::write(
        &catalog,
        "RA,Dec,Period,Extinction\n10.0,20.0,5.0,0.5\n11.0,21.0,-2.0,0.5\n",
    )
    .unwrap();

    #[rustfmt::skip]
    let cmd = warp()
        .args([
            "transform",
            "--catalog", &catalog.display().to_string(),
            "--output", &tmp_dir.path().join("out.csv").display().to_string(),
            "--apparent-magnitude", "10.0",
        ])
        .ok();
    assert!(cmd.is_ok(), "transform failed: {}", cmd.err().unwrap());
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
    assert!(stdout.contains("Warnings"), "{stdout}");
    assert!(stdout.contains("positive period"), "{stdout}");
}
