// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Perceptually-uniform colour maps, as piecewise-linear interpolations
//! between a few samples of the real maps.

/// The colour given to values that can't be mapped (e.g. NaN).
pub(crate) const BAD_VALUE_RGB: (u8, u8, u8) = (160, 160, 160);

const VIRIDIS: [(u8, u8, u8); 9] = [
    (68, 1, 84),
    (71, 44, 122),
    (59, 81, 139),
    (44, 113, 142),
    (33, 144, 141),
    (39, 173, 129),
    (92, 200, 99),
    (170, 220, 50),
    (253, 231, 37),
];

const PLASMA: [(u8, u8, u8); 9] = [
    (13, 8, 135),
    (84, 2, 163),
    (139, 10, 165),
    (185, 50, 137),
    (219, 92, 104),
    (244, 136, 73),
    (254, 188, 43),
    (248, 233, 33),
    (240, 249, 33),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourMap {
    Viridis,
    Plasma,
}

impl ColourMap {
    fn samples(self) -> &'static [(u8, u8, u8)] {
        match self {
            ColourMap::Viridis => &VIRIDIS,
            ColourMap::Plasma => &PLASMA,
        }
    }

    /// The colour at `frac`, where 0 is the bottom of the map and 1 is the
    /// top. Values outside [0, 1] are clamped.
    pub fn rgb(self, frac: f64) -> (u8, u8, u8) {
        if frac.is_nan() {
            return BAD_VALUE_RGB;
        }
        let samples = self.samples();
        let pos = frac.clamp(0.0, 1.0) * (samples.len() - 1) as f64;
        let i = (pos.floor() as usize).min(samples.len() - 2);
        let t = pos - i as f64;

        let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        let (r0, g0, b0) = samples[i];
        let (r1, g1, b1) = samples[i + 1];
        (lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
    }
}

/// Where `value` sits between `min` and `max`, in [0, 1]. A degenerate range
/// puts everything in the middle.
pub(crate) fn normalise(value: f64, min: f64, max: f64) -> f64 {
    if !value.is_finite() {
        return f64::NAN;
    }
    if max - min <= 0.0 {
        return 0.5;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}
