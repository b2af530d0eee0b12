// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Common arguments for command-line interfaces. e.g. the `distances`, `plot`
//! and `transform` subcommands all need a Period-Luminosity relation, so the
//! same arguments are shared between them.

mod printers;

pub(super) use printers::InfoPrinter;
pub(crate) use printers::{display_warnings, Warn};

use std::{
    borrow::Cow,
    path::{Path, PathBuf},
    str::FromStr,
};

use clap::Parser;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;

use crate::{
    catalog::{CatalogOutputType, CATALOG_OUTPUT_TYPES_COMMA_SEPARATED},
    constants::*,
    coord::GalacticFrame,
    distance::{
        DistanceConfig, InputUncertainties, PlCalibration, PL_CALIBRATIONS_COMMA_SEPARATED,
    },
};

lazy_static::lazy_static! {
    pub(super) static ref ARG_FILE_TYPES_COMMA_SEPARATED: String = ArgFileTypes::iter().join(", ");

    pub(super) static ref ARG_FILE_HELP: String =
        format!("All arguments may be specified in a file. Any CLI arguments override arguments set in the file. Supported formats: {}", *ARG_FILE_TYPES_COMMA_SEPARATED);

    pub(super) static ref PL_CALIBRATION_HELP: String =
        format!("The named Period-Luminosity calibration to use. Individual coefficients given below override its values. Supported calibrations: {}. Default: {} ({DEFAULT_PL_SLOPE} log10(P) {DEFAULT_PL_INTERCEPT})",
                *PL_CALIBRATIONS_COMMA_SEPARATED, PlCalibration::default());

    pub(super) static ref CATALOG_OUTPUT_HELP: String =
        format!("The path to the output catalog. The type is determined by the extension. Supported formats: {}", *CATALOG_OUTPUT_TYPES_COMMA_SEPARATED);

    pub(super) static ref POLE_HELP: String =
        format!("The right ascension and declination of the North Galactic Pole [degrees]. Default: ({DEFAULT_POLE_RA_DEG}°, {DEFAULT_POLE_DEC_DEG}°)");

    pub(super) static ref NODE_LONGITUDE_HELP: String =
        format!("The Galactic longitude of the North Celestial Pole [degrees]. Default: {DEFAULT_NODE_LONGITUDE_DEG}°");

    pub(super) static ref SUN_DISTANCE_HELP: String =
        format!("The distance from the Sun to the Galactic Centre [parsecs]. Default: {DEFAULT_SUN_DISTANCE_PC}");

    pub(super) static ref SUN_HEIGHT_HELP: String =
        format!("The height of the Sun above the Galactic mid-plane [parsecs]. Default: {DEFAULT_SUN_HEIGHT_PC}");
}

#[derive(Debug, Display, EnumIter, EnumString)]
pub(super) enum ArgFileTypes {
    #[strum(serialize = "toml")]
    Toml,
    #[strum(serialize = "json")]
    Json,
}

/// Read an arguments file into the type of the surrounding `let` binding. The
/// file type comes from the extension.
macro_rules! unpack_arg_file {
    ($arg_file:expr) => ({
        use std::{fs::File, io::Read, str::FromStr};

        use crate::cli::common::{ArgFileTypes, ARG_FILE_TYPES_COMMA_SEPARATED};

        debug!("Attempting to parse argument file {}", $arg_file.display());

        let mut contents = String::new();
        let arg_file_type = $arg_file
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .and_then(|e| ArgFileTypes::from_str(&e).ok());

        match arg_file_type {
            Some(ArgFileTypes::Toml) => {
                debug!("Parsing toml file...");
                File::open(&$arg_file)?.read_to_string(&mut contents)?;
                toml::from_str(&contents).map_err(|err| {
                    WarpError::ArgFile(format!(
                        "Couldn't decode toml structure from {}:\n{err}",
                        $arg_file.display()
                    ))
                })?
            }

            Some(ArgFileTypes::Json) => {
                debug!("Parsing json file...");
                File::open(&$arg_file)?.read_to_string(&mut contents)?;
                serde_json::from_str(&contents).map_err(|err| {
                    WarpError::ArgFile(format!(
                        "Couldn't decode json structure from {}:\n{err}",
                        $arg_file.display()
                    ))
                })?
            }

            None => {
                return Err(WarpError::ArgFile(format!(
                    "Argument file '{}' doesn't have a recognised file extension! Valid extensions are: {}",
                    $arg_file.display(),
                    *ARG_FILE_TYPES_COMMA_SEPARATED
                )))
            }
        }
    });
}

/// Check that an input catalog was given and that it exists.
pub(super) fn check_input_catalog(catalog: Option<PathBuf>) -> Result<PathBuf, CatalogArgsError> {
    let catalog = catalog.ok_or(CatalogArgsError::NoCatalog)?;
    if !catalog.exists() {
        return Err(CatalogArgsError::CatalogDoesntExist(catalog));
    }
    Ok(catalog)
}

/// Check that an output catalog has a type we can write.
pub(super) fn check_output_catalog(output: &Path) -> Result<(), CatalogArgsError> {
    let ok = output
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| CatalogOutputType::from_str(&e.to_lowercase()).is_ok())
        .unwrap_or(false);
    if ok {
        Ok(())
    } else {
        Err(CatalogArgsError::InvalidOutput(output.to_path_buf()))
    }
}

#[derive(Error, Debug)]
pub(super) enum CatalogArgsError {
    #[error("No input catalog was supplied")]
    NoCatalog,

    #[error("The input catalog '{0}' doesn't exist")]
    CatalogDoesntExist(PathBuf),

    #[error("Cannot write a catalog to '{0}'; supported formats: {}", *CATALOG_OUTPUT_TYPES_COMMA_SEPARATED)]
    InvalidOutput(PathBuf),
}

/// Lines describing a [`DistanceConfig`], for an [`InfoPrinter`].
pub(super) fn distance_config_block(config: &DistanceConfig) -> Vec<Cow<'static, str>> {
    let DistanceConfig {
        pl_relation: pl,
        uncertainties,
        apparent_magnitude,
    } = config;
    vec![
        format!("PL relation: M = {} log10(P) + {}", pl.a, pl.b).into(),
        format!("    sigma_a = {}, sigma_b = {}", pl.sigma_a, pl.sigma_b).into(),
        format!(
            "Default uncertainties: period {} d, extinction {} mag, apparent magnitude {} mag",
            uncertainties.period, uncertainties.extinction, uncertainties.apparent_magnitude
        )
        .into(),
        match apparent_magnitude {
            Some(m) => format!("Fallback apparent magnitude: {m}").into(),
            None => "No fallback apparent magnitude".into(),
        },
    ]
}

/// Lines describing a [`GalacticFrame`], for an [`InfoPrinter`].
pub(super) fn frame_block(frame: &GalacticFrame) -> Vec<Cow<'static, str>> {
    vec![
        format!(
            "Galactic pole: RA {}°, Dec {}°; node longitude {}°",
            frame.pole_ra_deg, frame.pole_dec_deg, frame.node_longitude_deg
        )
        .into(),
        format!(
            "Sun: {} pc from the Galactic Centre, {} pc above the plane",
            frame.sun_distance_pc, frame.sun_height_pc
        )
        .into(),
    ]
}

/// Arguments describing the Period-Luminosity relation and the uncertainties
/// of the inputs to it.
#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct PlArgs {
    #[clap(long, help = PL_CALIBRATION_HELP.as_str(), help_heading = "PERIOD-LUMINOSITY RELATION")]
    pub(super) pl_calibration: Option<String>,

    /// The slope of the Period-Luminosity relation [mag / dex].
    #[clap(long, allow_hyphen_values = true, help_heading = "PERIOD-LUMINOSITY RELATION")]
    pub(super) pl_slope: Option<f64>,

    /// The zero-point of the Period-Luminosity relation [mag].
    #[clap(long, allow_hyphen_values = true, help_heading = "PERIOD-LUMINOSITY RELATION")]
    pub(super) pl_intercept: Option<f64>,

    /// The uncertainty on the slope [mag / dex].
    #[clap(long, help_heading = "PERIOD-LUMINOSITY RELATION")]
    pub(super) pl_slope_err: Option<f64>,

    /// The uncertainty on the zero-point [mag].
    #[clap(long, help_heading = "PERIOD-LUMINOSITY RELATION")]
    pub(super) pl_intercept_err: Option<f64>,

    /// The apparent magnitude to use for stars without an
    /// "Apparent_Magnitude" value. Without this, such stars only get an
    /// absolute magnitude.
    #[clap(short = 'm', long, allow_hyphen_values = true, help_heading = "INPUTS")]
    pub(super) apparent_magnitude: Option<f64>,

    /// The period uncertainty for stars without a "Period_err" value [days].
    /// Default: 0
    #[clap(long, help_heading = "INPUTS")]
    pub(super) period_err: Option<f64>,

    /// The extinction uncertainty for stars without an "Extinction_err" value
    /// [mag]. Default: 0
    #[clap(long, help_heading = "INPUTS")]
    pub(super) extinction_err: Option<f64>,

    /// The apparent magnitude uncertainty for stars without an
    /// "Apparent_Magnitude_err" value [mag]. Default: 0
    #[clap(long, help_heading = "INPUTS")]
    pub(super) apparent_magnitude_err: Option<f64>,
}

impl PlArgs {
    /// Merge these arguments with those from an arguments file, preferring
    /// these.
    pub(super) fn merge(self, other: PlArgs) -> PlArgs {
        PlArgs {
            pl_calibration: self.pl_calibration.or(other.pl_calibration),
            pl_slope: self.pl_slope.or(other.pl_slope),
            pl_intercept: self.pl_intercept.or(other.pl_intercept),
            pl_slope_err: self.pl_slope_err.or(other.pl_slope_err),
            pl_intercept_err: self.pl_intercept_err.or(other.pl_intercept_err),
            apparent_magnitude: self.apparent_magnitude.or(other.apparent_magnitude),
            period_err: self.period_err.or(other.period_err),
            extinction_err: self.extinction_err.or(other.extinction_err),
            apparent_magnitude_err: self.apparent_magnitude_err.or(other.apparent_magnitude_err),
        }
    }

    pub(super) fn parse(self) -> Result<DistanceConfig, PlArgsError> {
        let PlArgs {
            pl_calibration,
            pl_slope,
            pl_intercept,
            pl_slope_err,
            pl_intercept_err,
            apparent_magnitude,
            period_err,
            extinction_err,
            apparent_magnitude_err,
        } = self;

        let calibration = match pl_calibration {
            Some(s) => PlCalibration::from_str(&s).map_err(|_| PlArgsError::InvalidCalibration(s))?,
            None => PlCalibration::default(),
        };
        let mut pl_relation = calibration.relation();

        let finite = |name: &'static str, value: Option<f64>| match value {
            Some(v) if !v.is_finite() => Err(PlArgsError::NotFinite { name, value: v }),
            _ => Ok(value),
        };
        let uncertainty = |name: &'static str, value: Option<f64>| match finite(name, value)? {
            Some(v) if v < 0.0 => Err(PlArgsError::NegativeUncertainty { name, value: v }),
            v => Ok(v),
        };

        if let Some(a) = finite("pl_slope", pl_slope)? {
            pl_relation.a = a;
        }
        if let Some(b) = finite("pl_intercept", pl_intercept)? {
            pl_relation.b = b;
        }
        if let Some(sigma_a) = uncertainty("pl_slope_err", pl_slope_err)? {
            pl_relation.sigma_a = sigma_a;
        }
        if let Some(sigma_b) = uncertainty("pl_intercept_err", pl_intercept_err)? {
            pl_relation.sigma_b = sigma_b;
        }

        let defaults = InputUncertainties::default();
        Ok(DistanceConfig {
            pl_relation,
            uncertainties: InputUncertainties {
                period: uncertainty("period_err", period_err)?.unwrap_or(defaults.period),
                extinction: uncertainty("extinction_err", extinction_err)?
                    .unwrap_or(defaults.extinction),
                apparent_magnitude: uncertainty("apparent_magnitude_err", apparent_magnitude_err)?
                    .unwrap_or(defaults.apparent_magnitude),
            },
            apparent_magnitude: finite("apparent_magnitude", apparent_magnitude)?,
        })
    }
}

#[derive(Error, Debug, PartialEq)]
pub(super) enum PlArgsError {
    #[error("Unrecognised Period-Luminosity calibration '{0}'; supported calibrations: {}", *PL_CALIBRATIONS_COMMA_SEPARATED)]
    InvalidCalibration(String),

    #[error("The value of {name} ({value}) must be finite")]
    NotFinite { name: &'static str, value: f64 },

    #[error("The uncertainty {name} ({value}) cannot be negative")]
    NegativeUncertainty { name: &'static str, value: f64 },
}

/// Arguments describing the Galactic frames.
#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct FrameArgs {
    #[clap(long, number_of_values = 2, allow_hyphen_values = true, help = POLE_HELP.as_str(), help_heading = "GALACTIC FRAME")]
    pub(super) galactic_pole: Option<Vec<f64>>,

    #[clap(long, allow_hyphen_values = true, help = NODE_LONGITUDE_HELP.as_str(), help_heading = "GALACTIC FRAME")]
    pub(super) node_longitude: Option<f64>,

    #[clap(long, help = SUN_DISTANCE_HELP.as_str(), help_heading = "GALACTIC FRAME")]
    pub(super) sun_distance: Option<f64>,

    #[clap(long, allow_hyphen_values = true, help = SUN_HEIGHT_HELP.as_str(), help_heading = "GALACTIC FRAME")]
    pub(super) sun_height: Option<f64>,
}

impl FrameArgs {
    pub(super) fn merge(self, other: FrameArgs) -> FrameArgs {
        FrameArgs {
            galactic_pole: self.galactic_pole.or(other.galactic_pole),
            node_longitude: self.node_longitude.or(other.node_longitude),
            sun_distance: self.sun_distance.or(other.sun_distance),
            sun_height: self.sun_height.or(other.sun_height),
        }
    }

    pub(super) fn parse(self) -> Result<GalacticFrame, FrameArgsError> {
        let mut frame = GalacticFrame::default();
        match self.galactic_pole.as_deref() {
            Some(&[ra, dec]) => {
                frame.pole_ra_deg = ra;
                frame.pole_dec_deg = dec;
            }
            Some(other) => return Err(FrameArgsError::BadPole(other.len())),
            None => (),
        }
        if let Some(l) = self.node_longitude {
            frame.node_longitude_deg = l;
        }
        if let Some(r0) = self.sun_distance {
            frame.sun_distance_pc = r0;
        }
        if let Some(z0) = self.sun_height {
            frame.sun_height_pc = z0;
        }

        frame.validate()?;
        Ok(frame)
    }
}

#[derive(Error, Debug, PartialEq)]
pub(super) enum FrameArgsError {
    #[error("The Galactic pole needs exactly 2 values (RA and Dec), but {0} were given")]
    BadPole(usize),

    #[error(transparent)]
    Frame(#[from] crate::coord::FrameError),
}
