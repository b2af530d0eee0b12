// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use tempfile::TempDir;

use crate::{get_cmd_output, get_test_catalog, warp};

#[test]
fn test_plot_dry_run() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let output = tmp_dir.path().join("cepheids.png");
    let catalog = get_test_catalog();

    #[rustfmt::skip]
    let cmd = warp()
        .args([
            "plot",
            "--catalog", &catalog,
            "--output", &output.display().to_string(),
            "--colour-by", "distance",
            "--dry-run",
        ])
        .ok();
    assert!(cmd.is_ok(), "plot dry run failed: {}", cmd.err().unwrap());
    assert!(!output.exists());
}

#[test]
fn test_plot_rejects_other_image_types() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let catalog = get_test_catalog();

    #[rustfmt::skip]
    let cmd = warp()
        .args([
            "plot",
            "--catalog", &catalog,
            "--output", &tmp_dir.path().join("cepheids.svg").display().to_string(),
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("PNG"), "{stderr}");
}

#[test]
#[cfg(feature = "plotting")]
#[ignore = "needs a system font"]
fn test_plot() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let output = tmp_dir.path().join("cepheids.png");
    let catalog = get_test_catalog();

    #[rustfmt::skip]
    let cmd = warp()
        .args([
            "plot",
            "--catalog", &catalog,
            "--output", &output.display().to_string(),
            "--width", "600",
            "--height", "400",
        ])
        .ok();
    assert!(cmd.is_ok(), "plot failed: {}", cmd.err().unwrap());
    assert!(output.exists());
}
