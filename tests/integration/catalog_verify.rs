// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fs;

use tempfile::TempDir;

use crate::{get_cmd_output, get_test_catalog, warp, NUM_TEST_STARS};

#[test]
fn test_verify_good_and_bad_catalogs() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let bad = tmp_dir.path().join("bad.csv");
    fs::write(&bad, "RA,Dec,Period\n1,2,3\n").unwrap();
    let missing = tmp_dir.path().join("missing.csv");
    let catalog = get_test_catalog();

    let cmd = warp()
        .args([
            "catalog-verify",
            &catalog,
            &bad.display().to_string(),
            &missing.display().to_string(),
        ])
        .ok();
    assert!(cmd.is_ok(), "catalog-verify failed: {}", cmd.err().unwrap());
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
    assert!(stdout.contains(&format!("{NUM_TEST_STARS} stars")), "{stdout}");
    assert!(stdout.contains("Extinction"), "{stdout}");
    assert!(stdout.contains("1 of 3 catalogs could be read"), "{stdout}");
}

#[test]
fn test_verify_needs_a_catalog() {
    let cmd = warp().args(["catalog-verify"]).ok();
    assert!(cmd.is_err());
}
