// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Colour and spectrum types for white-spectrum bulbs.
//!
//! Trådfri white-spectrum bulbs express their colour temperature on a 1-100
//! scale, where 1 is the coolest and 100 the warmest. Three positions on
//! that scale carry well-known names: "white" (1), "warm" (62) and
//! "glow" (97).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// The light spectrum a bulb supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spectrum {
    /// Adjustable white colour temperature.
    White,
    /// Full RGB colour.
    Rgb,
    /// Fixed colour, no adjustment.
    None,
}

impl fmt::Display for Spectrum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::White => write!(f, "white"),
            Self::Rgb => write!(f, "rgb"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Colour temperature setting of a white-spectrum bulb.
///
/// Reading a bulb's colour yields the named variant when the raw value
/// matches one of the named settings (1, 62 or 97), and
/// [`Colour::Temperature`] otherwise.
///
/// Values are expected to be canonical: every constructor on this type
/// ([`from_temperature`](Self::from_temperature), `FromStr`, serde) maps a
/// raw value onto the named variant when one exists, so
/// `Colour::Temperature(62)` never arises from them and compares unequal
/// to [`Colour::Warm`]. Build colours through a constructor rather than
/// the `Temperature` variant directly; gateways canonicalize incoming
/// values and refuse out-of-range temperatures.
///
/// # Examples
///
/// ```
/// use tradfri_lib::Colour;
///
/// assert_eq!(Colour::from_temperature(62).unwrap(), Colour::Warm);
/// assert_eq!(Colour::from_temperature(40).unwrap(), Colour::Temperature(40));
/// assert_eq!(Colour::Warm.temperature(), 62);
///
/// // Names from the gateway app are accepted too
/// assert_eq!("warm white".parse::<Colour>().unwrap(), Colour::Warm);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Colour {
    /// Coolest white (temperature 1).
    White,
    /// Warm white (temperature 62).
    Warm,
    /// Warm glow (temperature 97).
    Glow,
    /// An unnamed position on the 1-100 temperature scale.
    ///
    /// Holds only values that match no named setting; use
    /// [`Colour::from_temperature`] to construct.
    Temperature(u8),
}

impl Colour {
    /// Temperature value of the "white" setting.
    pub const WHITE_TEMPERATURE: u8 = 1;

    /// Temperature value of the "warm" setting.
    pub const WARM_TEMPERATURE: u8 = 62;

    /// Temperature value of the "glow" setting.
    pub const GLOW_TEMPERATURE: u8 = 97;

    /// Creates a colour from a raw temperature value (1-100).
    ///
    /// Values matching a named setting yield the named variant.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the value is outside 1-100.
    pub fn from_temperature(value: u8) -> Result<Self, ValueError> {
        match value {
            Self::WHITE_TEMPERATURE => Ok(Self::White),
            Self::WARM_TEMPERATURE => Ok(Self::Warm),
            Self::GLOW_TEMPERATURE => Ok(Self::Glow),
            2..=100 => Ok(Self::Temperature(value)),
            _ => Err(ValueError::OutOfRange {
                min: 1,
                max: 100,
                actual: u16::from(value),
            }),
        }
    }

    /// Returns the raw temperature value (1-100) of this setting.
    #[must_use]
    pub const fn temperature(&self) -> u8 {
        match self {
            Self::White => Self::WHITE_TEMPERATURE,
            Self::Warm => Self::WARM_TEMPERATURE,
            Self::Glow => Self::GLOW_TEMPERATURE,
            Self::Temperature(value) => *value,
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::White => write!(f, "white"),
            Self::Warm => write!(f, "warm"),
            Self::Glow => write!(f, "glow"),
            Self::Temperature(value) => write!(f, "{value}"),
        }
    }
}

impl FromStr for Colour {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "white" => Ok(Self::White),
            "warm" | "warm white" => Ok(Self::Warm),
            "glow" | "warm glow" => Ok(Self::Glow),
            other => other
                .parse::<u8>()
                .map_err(|_| ValueError::InvalidColour(s.to_string()))
                .and_then(Self::from_temperature),
        }
    }
}

impl TryFrom<u8> for Colour {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_temperature(value)
    }
}

impl From<Colour> for u8 {
    fn from(value: Colour) -> Self {
        value.temperature()
    }
}
