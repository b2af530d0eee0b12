// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The main cepheid_warp binary.

use clap::Parser;

fn main() {
    // Run cepheid_warp, only reporting the error if there is one.
    if let Err(e) = cepheid_warp::Warp::parse().run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
