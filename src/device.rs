// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device model for Trådfri gateways.
//!
//! The gateway reports every paired device as one of four variants: bulbs,
//! plugs, remotes and sensors. Variants share an identity block (instance
//! id, display name, liveness) and carry variant-specific state on top.
//! The gateway owns the authoritative device list; values of these types
//! are snapshots of its last known state.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Brightness, Colour, Spectrum};

/// Identity and liveness shared by all device variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// Instance id assigned by the gateway.
    pub id: u32,
    /// Display name, the usual way to address a device.
    pub name: String,
    /// Whether the gateway believes the device is powered and reachable.
    pub alive: bool,
    /// When the gateway last heard from the device.
    pub last_seen: DateTime<Utc>,
}

impl DeviceInfo {
    /// Creates an identity block for a device that is alive now.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            alive: true,
            last_seen: Utc::now(),
        }
    }
}

/// Discriminant of a [`Device`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceKind {
    /// A light bulb.
    Bulb,
    /// A switchable power plug.
    Plug,
    /// A remote control.
    Remote,
    /// A motion or ambient sensor.
    Sensor,
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bulb => write!(f, "Bulb"),
            Self::Plug => write!(f, "Plug"),
            Self::Remote => write!(f, "Remote"),
            Self::Sensor => write!(f, "Sensor"),
        }
    }
}

/// A light bulb paired with the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bulb {
    /// Shared identity block.
    #[serde(flatten)]
    pub info: DeviceInfo,
    /// Whether the bulb is currently on.
    pub is_on: bool,
    /// Whether the bulb accepts switch commands.
    pub switchable: bool,
    /// Whether the bulb accepts brightness commands.
    pub dimmable: bool,
    /// Current brightness.
    pub brightness: Brightness,
    /// The colour range this bulb supports.
    pub spectrum: Spectrum,
    /// Current colour temperature setting.
    pub colour: Colour,
}

impl Bulb {
    /// Creates a switched-off, fully dimmable white-spectrum bulb.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            info: DeviceInfo::new(id, name),
            is_on: false,
            switchable: true,
            dimmable: true,
            brightness: Brightness::MAX,
            spectrum: Spectrum::White,
            colour: Colour::Warm,
        }
    }

    /// Sets the on/off state.
    #[must_use]
    pub fn with_on(mut self, is_on: bool) -> Self {
        self.is_on = is_on;
        self
    }

    /// Sets the brightness.
    #[must_use]
    pub fn with_brightness(mut self, brightness: Brightness) -> Self {
        self.brightness = brightness;
        self
    }

    /// Sets the colour temperature.
    #[must_use]
    pub fn with_colour(mut self, colour: Colour) -> Self {
        self.colour = colour;
        self
    }
}

/// A switchable power plug paired with the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plug {
    /// Shared identity block.
    #[serde(flatten)]
    pub info: DeviceInfo,
    /// Whether the plug is currently on.
    pub is_on: bool,
    /// Whether the plug accepts switch commands.
    pub switchable: bool,
}

impl Plug {
    /// Creates a switched-off plug.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            info: DeviceInfo::new(id, name),
            is_on: false,
            switchable: true,
        }
    }

    /// Sets the on/off state.
    #[must_use]
    pub fn with_on(mut self, is_on: bool) -> Self {
        self.is_on = is_on;
        self
    }
}

/// A remote control paired with the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remote {
    /// Shared identity block.
    #[serde(flatten)]
    pub info: DeviceInfo,
}

impl Remote {
    /// Creates a remote control.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            info: DeviceInfo::new(id, name),
        }
    }
}

/// A sensor paired with the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sensor {
    /// Shared identity block.
    #[serde(flatten)]
    pub info: DeviceInfo,
}

impl Sensor {
    /// Creates a sensor.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            info: DeviceInfo::new(id, name),
        }
    }
}

/// A device as reported by the gateway.
///
/// # Examples
///
/// ```
/// use tradfri_lib::device::{Bulb, Device, DeviceKind};
///
/// let device = Device::from(Bulb::new(65537, "Desk lamp").with_on(true));
/// assert_eq!(device.kind(), DeviceKind::Bulb);
/// assert_eq!(device.name(), "Desk lamp");
/// assert!(device.as_bulb().unwrap().is_on);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Device {
    /// A light bulb.
    Bulb(Bulb),
    /// A switchable power plug.
    Plug(Plug),
    /// A remote control.
    Remote(Remote),
    /// A motion or ambient sensor.
    Sensor(Sensor),
}

impl Device {
    /// Returns the shared identity block.
    #[must_use]
    pub fn info(&self) -> &DeviceInfo {
        match self {
            Self::Bulb(bulb) => &bulb.info,
            Self::Plug(plug) => &plug.info,
            Self::Remote(remote) => &remote.info,
            Self::Sensor(sensor) => &sensor.info,
        }
    }

    /// Returns the gateway instance id.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.info().id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.info().name
    }

    /// Returns whether the gateway believes the device is reachable.
    #[must_use]
    pub fn alive(&self) -> bool {
        self.info().alive
    }

    /// Returns the variant discriminant.
    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        match self {
            Self::Bulb(_) => DeviceKind::Bulb,
            Self::Plug(_) => DeviceKind::Plug,
            Self::Remote(_) => DeviceKind::Remote,
            Self::Sensor(_) => DeviceKind::Sensor,
        }
    }

    /// Returns `true` if this device is a bulb.
    #[must_use]
    pub fn is_bulb(&self) -> bool {
        matches!(self, Self::Bulb(_))
    }

    /// Returns the bulb state if this device is a bulb.
    #[must_use]
    pub fn as_bulb(&self) -> Option<&Bulb> {
        match self {
            Self::Bulb(bulb) => Some(bulb),
            _ => None,
        }
    }

    /// Returns the plug state if this device is a plug.
    #[must_use]
    pub fn as_plug(&self) -> Option<&Plug> {
        match self {
            Self::Plug(plug) => Some(plug),
            _ => None,
        }
    }

    /// Returns whether this device accepts switch commands.
    #[must_use]
    pub fn is_switchable(&self) -> bool {
        match self {
            Self::Bulb(bulb) => bulb.switchable,
            Self::Plug(plug) => plug.switchable,
            Self::Remote(_) | Self::Sensor(_) => false,
        }
    }
}

impl From<Bulb> for Device {
    fn from(bulb: Bulb) -> Self {
        Self::Bulb(bulb)
    }
}

impl From<Plug> for Device {
    fn from(plug: Plug) -> Self {
        Self::Plug(plug)
    }
}

impl From<Remote> for Device {
    fn from(remote: Remote) -> Self {
        Self::Remote(remote)
    }
}

impl From<Sensor> for Device {
    fn from(sensor: Sensor) -> Self {
        Self::Sensor(sensor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Device::from(Bulb::new(1, "b")).kind(), DeviceKind::Bulb);
        assert_eq!(Device::from(Plug::new(2, "p")).kind(), DeviceKind::Plug);
        assert_eq!(Device::from(Remote::new(3, "r")).kind(), DeviceKind::Remote);
        assert_eq!(Device::from(Sensor::new(4, "s")).kind(), DeviceKind::Sensor);
    }

    #[test]
    fn shared_info_accessors() {
        let device = Device::from(Sensor::new(65540, "Hallway sensor"));
        assert_eq!(device.id(), 65540);
        assert_eq!(device.name(), "Hallway sensor");
        assert!(device.alive());
    }

    #[test]
    fn as_bulb_only_for_bulbs() {
        let bulb = Device::from(Bulb::new(1, "b").with_on(true));
        assert!(bulb.as_bulb().is_some());
        assert!(bulb.as_plug().is_none());

        let remote = Device::from(Remote::new(3, "r"));
        assert!(remote.as_bulb().is_none());
    }

    #[test]
    fn switchable_variants() {
        assert!(Device::from(Bulb::new(1, "b")).is_switchable());
        assert!(Device::from(Plug::new(2, "p")).is_switchable());
        assert!(!Device::from(Remote::new(3, "r")).is_switchable());
        assert!(!Device::from(Sensor::new(4, "s")).is_switchable());
    }

    #[test]
    fn serde_tags_variant() {
        let device = Device::from(Plug::new(2, "Fan plug").with_on(true));
        let json = serde_json::to_string(&device).unwrap();
        assert!(json.contains("\"type\":\"Plug\""));
        let back: Device = serde_json::from_str(&json).unwrap();
        assert_eq!(back, device);
    }

    #[test]
    fn bulb_builder_defaults() {
        let bulb = Bulb::new(1, "b");
        assert!(!bulb.is_on);
        assert!(bulb.switchable);
        assert!(bulb.dimmable);
        assert_eq!(bulb.brightness, Brightness::MAX);
        assert_eq!(bulb.spectrum, Spectrum::White);
    }
}
