// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests.
//!
//! Some help for laying out these tests was taken from:
//! https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html

mod catalog_verify;
mod distances;
mod no_stderr;
mod plot;
mod transform;

use std::{path::PathBuf, process::Output, str::from_utf8};

use assert_cmd::{output::OutputError, Command};

fn warp() -> Command {
    Command::cargo_bin("cepheid_warp").unwrap()
}

fn get_cmd_output(result: Result<Output, OutputError>) -> (String, String) {
    let output = match result {
        Ok(o) => o,
        Err(o) => o.as_output().unwrap().clone(),
    };
    (
        from_utf8(&output.stdout).unwrap().to_string(),
        from_utf8(&output.stderr).unwrap().to_string(),
    )
}

/// The number of stars in the test catalog.
const NUM_TEST_STARS: usize = 10;

/// Get the absolute path to the test catalog of bright Galactic Cepheids.
fn get_test_catalog() -> String {
    let catalog = PathBuf::from("test_files/cepheids.csv")
        .canonicalize()
        .unwrap();
    assert!(
        catalog.exists(),
        "Could not find {}, which is required for this test",
        catalog.display()
    );
    catalog.display().to_string()
}
