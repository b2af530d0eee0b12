// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The calibration constants of the Galactic frames, and the rotations made
//! from them.

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use super::{Equatorial, FrameError, GalacticLB, GalacticXYZ, Origin};
use crate::constants::*;

/// The constants defining the Galactic frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GalacticFrame {
    /// Right ascension of the North Galactic Pole [degrees]
    pub pole_ra_deg: f64,
    /// Declination of the North Galactic Pole [degrees]
    pub pole_dec_deg: f64,
    /// Galactic longitude of the North Celestial Pole [degrees]
    pub node_longitude_deg: f64,
    /// Distance from the Sun to the Galactic Centre [parsecs]
    pub sun_distance_pc: f64,
    /// Height of the Sun above the Galactic mid-plane [parsecs]
    pub sun_height_pc: f64,
}

impl Default for GalacticFrame {
    fn default() -> Self {
        GalacticFrame {
            pole_ra_deg: DEFAULT_POLE_RA_DEG,
            pole_dec_deg: DEFAULT_POLE_DEC_DEG,
            node_longitude_deg: DEFAULT_NODE_LONGITUDE_DEG,
            sun_distance_pc: DEFAULT_SUN_DISTANCE_PC,
            sun_height_pc: DEFAULT_SUN_HEIGHT_PC,
        }
    }
}

impl GalacticFrame {
    /// Check that the constants describe a usable frame.
    pub fn validate(&self) -> Result<(), FrameError> {
        let all = [
            self.pole_ra_deg,
            self.pole_dec_deg,
            self.node_longitude_deg,
            self.sun_distance_pc,
            self.sun_height_pc,
        ];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(FrameError::NotFinite);
        }
        if !(-90.0..=90.0).contains(&self.pole_dec_deg) {
            return Err(FrameError::InvalidPoleDec(self.pole_dec_deg));
        }
        if self.sun_distance_pc < 0.0 {
            return Err(FrameError::NegativeSunDistance(self.sun_distance_pc));
        }
        if self.sun_height_pc.abs() > self.sun_distance_pc {
            return Err(FrameError::SunHeightTooLarge {
                height: self.sun_height_pc,
                distance: self.sun_distance_pc,
            });
        }
        Ok(())
    }

    /// The rotation taking equatorial unit vectors to Galactic unit vectors.
    /// Its rows are the Galactic axes expressed in the equatorial frame.
    pub fn equatorial_to_galactic(&self) -> Matrix3<f64> {
        let (sin_ra, cos_ra) = self.pole_ra_deg.to_radians().sin_cos();
        let (sin_dec, cos_dec) = self.pole_dec_deg.to_radians().sin_cos();
        let (sin_node, cos_node) = self.node_longitude_deg.to_radians().sin_cos();

        // Towards the pole, and the two directions perpendicular to it; one in
        // the plane of the pole's hour circle, the other along increasing RA.
        let pole = Vector3::new(cos_dec * cos_ra, cos_dec * sin_ra, sin_dec);
        let meridian = Vector3::new(-sin_dec * cos_ra, -sin_dec * sin_ra, cos_dec);
        let east = Vector3::new(-sin_ra, cos_ra, 0.0);

        let x = meridian * cos_node + east * sin_node;
        let y = meridian * sin_node - east * cos_node;
        Matrix3::from_rows(&[x.transpose(), y.transpose(), pole.transpose()])
    }

    /// The rotation about the Y axis that puts the Sun at its height above
    /// the mid-plane.
    pub fn tilt(&self) -> Matrix3<f64> {
        let theta = if self.sun_distance_pc > 0.0 {
            (self.sun_height_pc / self.sun_distance_pc).asin()
        } else {
            0.0
        };
        let (s, c) = theta.sin_cos();
        Matrix3::new(c, 0.0, s, 0.0, 1.0, 0.0, -s, 0.0, c)
    }

    /// Precompute the rotations for this frame.
    pub fn transform(&self) -> FrameTransform {
        FrameTransform {
            equatorial_to_galactic: self.equatorial_to_galactic(),
            tilt: self.tilt(),
            sun_distance_pc: self.sun_distance_pc,
        }
    }
}

/// The rotations of a [`GalacticFrame`], ready to be applied many times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTransform {
    equatorial_to_galactic: Matrix3<f64>,
    tilt: Matrix3<f64>,
    sun_distance_pc: f64,
}

impl FrameTransform {
    fn unit_vector(ra_deg: f64, dec_deg: f64) -> Vector3<f64> {
        let (sin_ra, cos_ra) = ra_deg.to_radians().sin_cos();
        let (sin_dec, cos_dec) = dec_deg.to_radians().sin_cos();
        Vector3::new(cos_dec * cos_ra, cos_dec * sin_ra, sin_dec)
    }

    fn galactic_vector(&self, ra_deg: f64, dec_deg: f64) -> Vector3<f64> {
        self.equatorial_to_galactic * Self::unit_vector(ra_deg, dec_deg)
    }

    /// Galactic longitude and latitude [degrees] of an equatorial direction.
    /// The longitude is in [0°, 360°).
    pub fn to_galactic(&self, ra_deg: f64, dec_deg: f64) -> GalacticLB {
        let v = self.galactic_vector(ra_deg, dec_deg);
        GalacticLB {
            l: v.y.atan2(v.x).to_degrees().rem_euclid(360.0),
            b: v.z.clamp(-1.0, 1.0).asin().to_degrees(),
        }
    }

    /// Sun-centred Galactic Cartesian coordinates [parsecs]; +X points towards
    /// the Galactic Centre.
    pub fn to_heliocentric(&self, ra_deg: f64, dec_deg: f64, distance_pc: f64) -> GalacticXYZ {
        let v = self.galactic_vector(ra_deg, dec_deg) * distance_pc;
        GalacticXYZ {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }

    /// Galactocentric Cartesian coordinates [parsecs].
    pub fn to_galactocentric(&self, ra_deg: f64, dec_deg: f64, distance_pc: f64) -> GalacticXYZ {
        let helio = self.galactic_vector(ra_deg, dec_deg) * distance_pc;
        let v = self.tilt * (helio - Vector3::new(self.sun_distance_pc, 0.0, 0.0));
        GalacticXYZ {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }

    pub fn to_frame(
        &self,
        origin: Origin,
        ra_deg: f64,
        dec_deg: f64,
        distance_pc: f64,
    ) -> GalacticXYZ {
        match origin {
            Origin::Galactocentric => self.to_galactocentric(ra_deg, dec_deg, distance_pc),
            Origin::Heliocentric => self.to_heliocentric(ra_deg, dec_deg, distance_pc),
        }
    }

    /// Where the Sun is in the galactocentric frame.
    pub fn sun_position(&self) -> GalacticXYZ {
        self.to_galactocentric(0.0, 0.0, 0.0)
    }

    /// Undo [`FrameTransform::to_galactocentric`]. A position on the Sun has
    /// RA and Dec of 0.
    pub fn galactocentric_to_equatorial(&self, xyz: GalacticXYZ) -> Equatorial {
        let v = Vector3::new(xyz.x, xyz.y, xyz.z);
        let helio = self.tilt.transpose() * v + Vector3::new(self.sun_distance_pc, 0.0, 0.0);
        let distance_pc = helio.norm();
        if distance_pc == 0.0 {
            return Equatorial {
                ra: 0.0,
                dec: 0.0,
                distance_pc,
            };
        }

        let eq = self.equatorial_to_galactic.transpose() * (helio / distance_pc);
        Equatorial {
            ra: eq.y.atan2(eq.x).to_degrees().rem_euclid(360.0),
            dec: eq.z.clamp(-1.0, 1.0).asin().to_degrees(),
            distance_pc,
        }
    }
}
