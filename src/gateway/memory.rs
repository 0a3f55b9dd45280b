// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory gateway implementation.
//!
//! [`MemoryGateway`] reproduces the observable behavior of a real gateway
//! client against seeded device and group tables: idempotent single-flight
//! connect, snapshot reads, per-device commands that mutate the authoritative
//! state, and session teardown. Failures can be scripted per call site so
//! tests can exercise every error path deterministically.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use parking_lot::Mutex;
use uuid::Uuid;

use crate::config::GatewayConfig;
use crate::device::Device;
use crate::error::{CommandError, ConnectionError, TeardownError};
use crate::group::Group;
use crate::types::{Brightness, Colour, Credentials, Spectrum};

use super::Gateway;

/// A command accepted by a [`MemoryGateway`], in issue order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssuedCommand {
    /// A device switch command.
    Switch {
        /// Addressed device instance id.
        device: u32,
        /// Requested on/off state.
        on: bool,
    },
    /// A bulb brightness command.
    SetBrightness {
        /// Addressed device instance id.
        device: u32,
        /// Requested brightness.
        level: Brightness,
    },
    /// A bulb colour command.
    SetColour {
        /// Addressed device instance id.
        device: u32,
        /// Requested colour setting.
        colour: Colour,
    },
    /// A group switch command.
    SwitchGroup {
        /// Addressed group instance id.
        group: u32,
        /// Requested on/off state.
        on: bool,
    },
    /// A group level command.
    SetGroupLevel {
        /// Addressed group instance id.
        group: u32,
        /// Requested group-wide brightness.
        level: Brightness,
    },
    /// A group scene command.
    SetScene {
        /// Addressed group instance id.
        group: u32,
        /// Requested scene name.
        scene: String,
    },
    /// A session close.
    Close,
    /// A session reset.
    Reset,
}

#[derive(Debug, Default)]
struct Inner {
    session: Option<Uuid>,
    devices: Vec<Device>,
    groups: Vec<Group>,
    log: Vec<IssuedCommand>,
    sessions_established: u32,
    connect_failure: Option<String>,
    command_failures: HashMap<u32, String>,
    command_rejections: HashSet<u32>,
    close_failure: Option<String>,
}

/// Deterministic in-memory [`Gateway`] implementation.
///
/// # Examples
///
/// ```
/// use tradfri_lib::device::Bulb;
/// use tradfri_lib::gateway::{Gateway, MemoryGateway};
/// use tradfri_lib::{Credentials, GatewayConfig};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> tradfri_lib::Result<()> {
/// let config = GatewayConfig::new("192.168.178.28", Credentials::new("id", "psk"));
/// let gateway = MemoryGateway::new(config).with_device(Bulb::new(65537, "Desk lamp"));
///
/// gateway.connect().await?;
/// let changed = gateway.switch(65537, true).await?;
/// assert!(changed);
/// gateway.close().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct MemoryGateway {
    config: GatewayConfig,
    inner: Mutex<Inner>,
}

impl MemoryGateway {
    /// Creates a gateway with empty device and group tables.
    #[must_use]
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            config,
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Seeds a device into the gateway's table.
    #[must_use]
    pub fn with_device(self, device: impl Into<Device>) -> Self {
        self.inner.lock().devices.push(device.into());
        self
    }

    /// Seeds a group into the gateway's table.
    #[must_use]
    pub fn with_group(self, group: Group) -> Self {
        self.inner.lock().groups.push(group);
        self
    }

    /// Scripts every connect attempt to be refused with the given reason.
    pub fn refuse_connect(&self, reason: impl Into<String>) {
        self.inner.lock().connect_failure = Some(reason.into());
    }

    /// Scripts commands addressed to `device` to fail with the given reason.
    pub fn fail_commands_for(&self, device: u32, reason: impl Into<String>) {
        self.inner.lock().command_failures.insert(device, reason.into());
    }

    /// Scripts commands addressed to `device` to resolve as no-ops.
    pub fn reject_commands_for(&self, device: u32) {
        self.inner.lock().command_rejections.insert(device);
    }

    /// Scripts session teardown to fail with the given reason.
    pub fn fail_close(&self, reason: impl Into<String>) {
        self.inner.lock().close_failure = Some(reason.into());
    }

    /// Returns every command accepted so far, in issue order.
    #[must_use]
    pub fn issued_commands(&self) -> Vec<IssuedCommand> {
        self.inner.lock().log.clone()
    }

    /// Returns how many close commands have been accepted.
    #[must_use]
    pub fn close_count(&self) -> usize {
        self.inner
            .lock()
            .log
            .iter()
            .filter(|cmd| matches!(cmd, IssuedCommand::Close))
            .count()
    }

    /// Returns how many sessions have actually been established.
    ///
    /// Repeated connects on a live session do not establish a new one.
    #[must_use]
    pub fn sessions_established(&self) -> u32 {
        self.inner.lock().sessions_established
    }

    /// Returns `true` while a session is live.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.inner.lock().session.is_some()
    }

    fn establish(&self, inner: &mut Inner) -> Result<(), ConnectionError> {
        if let Some(reason) = &inner.connect_failure {
            return Err(ConnectionError::Refused {
                host: self.config.host.clone(),
                reason: reason.clone(),
            });
        }
        let session = Uuid::new_v4();
        inner.session = Some(session);
        inner.sessions_established += 1;
        tracing::info!(host = %self.config.host, session = %session, "Session established");
        Ok(())
    }

    /// Logs a state update when the config's debug flag is set.
    fn log_update(&self, target: &str, detail: &str) {
        if self.config.debug {
            tracing::debug!(target = %target, detail = %detail, "State updated");
        }
    }

    fn command_precheck(inner: &Inner, device: u32) -> Result<(), CommandError> {
        if inner.session.is_none() {
            return Err(CommandError::SessionLost);
        }
        if let Some(reason) = inner.command_failures.get(&device) {
            return Err(CommandError::Rejected {
                device,
                reason: reason.clone(),
            });
        }
        Ok(())
    }
}

impl Gateway for MemoryGateway {
    async fn connect(&self) -> Result<Credentials, ConnectionError> {
        let mut inner = self.inner.lock();
        if inner.session.is_none() {
            self.establish(&mut inner)?;
        } else {
            tracing::debug!(host = %self.config.host, "Connect on live session, reusing");
        }
        Ok(self.config.credentials.clone())
    }

    fn devices(&self) -> Vec<Device> {
        let inner = self.inner.lock();
        if inner.session.is_none() {
            tracing::warn!("Device snapshot requested without a session");
            return Vec::new();
        }
        inner.devices.clone()
    }

    fn device(&self, name: &str) -> Option<Device> {
        self.inner
            .lock()
            .devices
            .iter()
            .find(|device| device.name() == name)
            .cloned()
    }

    fn group(&self, name: &str) -> Option<Group> {
        self.inner
            .lock()
            .groups
            .iter()
            .find(|group| group.name == name)
            .cloned()
    }

    async fn switch(&self, device: u32, on: bool) -> Result<bool, CommandError> {
        let mut inner = self.inner.lock();
        inner.log.push(IssuedCommand::Switch { device, on });
        Self::command_precheck(&inner, device)?;
        if inner.command_rejections.contains(&device) {
            return Ok(false);
        }

        let entry = inner
            .devices
            .iter_mut()
            .find(|entry| entry.id() == device)
            .ok_or(CommandError::DeviceNotFound(device))?;

        match entry {
            Device::Bulb(bulb) if bulb.switchable => {
                let changed = bulb.is_on != on;
                bulb.is_on = on;
                bulb.info.last_seen = Utc::now();
                self.log_update(&bulb.info.name, if on { "switched on" } else { "switched off" });
                Ok(changed)
            }
            Device::Plug(plug) if plug.switchable => {
                let changed = plug.is_on != on;
                plug.is_on = on;
                plug.info.last_seen = Utc::now();
                self.log_update(&plug.info.name, if on { "switched on" } else { "switched off" });
                Ok(changed)
            }
            other => Err(CommandError::NotSwitchable {
                device,
                kind: other.kind(),
            }),
        }
    }

    async fn set_brightness(&self, device: u32, level: Brightness) -> Result<bool, CommandError> {
        let mut inner = self.inner.lock();
        inner.log.push(IssuedCommand::SetBrightness { device, level });
        Self::command_precheck(&inner, device)?;
        if inner.command_rejections.contains(&device) {
            return Ok(false);
        }

        let entry = inner
            .devices
            .iter_mut()
            .find(|entry| entry.id() == device)
            .ok_or(CommandError::DeviceNotFound(device))?;

        match entry {
            Device::Bulb(bulb) if bulb.dimmable => {
                let changed = bulb.brightness != level;
                bulb.brightness = level;
                // Brightness 0 doubles as an off switch on the gateway.
                if level.is_off() {
                    bulb.is_on = false;
                }
                bulb.info.last_seen = Utc::now();
                self.log_update(&bulb.info.name, &format!("brightness {level}"));
                Ok(changed)
            }
            other => Err(CommandError::Rejected {
                device,
                reason: format!("{} is not a dimmable bulb", other.kind()),
            }),
        }
    }

    async fn set_colour(&self, device: u32, colour: Colour) -> Result<bool, CommandError> {
        let mut inner = self.inner.lock();
        inner.log.push(IssuedCommand::SetColour { device, colour });
        Self::command_precheck(&inner, device)?;
        if inner.command_rejections.contains(&device) {
            return Ok(false);
        }

        // Canonicalize so that a hand-built Temperature value matching a
        // named setting is stored as the named variant, and out-of-range
        // values never reach the device table.
        let colour =
            Colour::from_temperature(colour.temperature()).map_err(|e| CommandError::Rejected {
                device,
                reason: e.to_string(),
            })?;

        let entry = inner
            .devices
            .iter_mut()
            .find(|entry| entry.id() == device)
            .ok_or(CommandError::DeviceNotFound(device))?;

        match entry {
            Device::Bulb(bulb) if bulb.spectrum == Spectrum::White => {
                let changed = bulb.colour != colour;
                bulb.colour = colour;
                bulb.info.last_seen = Utc::now();
                self.log_update(&bulb.info.name, &format!("colour {colour}"));
                Ok(changed)
            }
            Device::Bulb(bulb) => Err(CommandError::Rejected {
                device,
                reason: format!("colour control not available for {} spectrum", bulb.spectrum),
            }),
            other => Err(CommandError::Rejected {
                device,
                reason: format!("{} has no colour control", other.kind()),
            }),
        }
    }

    async fn switch_group(&self, group: u32, on: bool) -> Result<bool, CommandError> {
        let mut inner = self.inner.lock();
        inner.log.push(IssuedCommand::SwitchGroup { group, on });
        if inner.session.is_none() {
            return Err(CommandError::SessionLost);
        }

        let entry = inner
            .groups
            .iter_mut()
            .find(|entry| entry.id == group)
            .ok_or(CommandError::GroupNotFound(group))?;

        let changed = entry.is_on != on;
        entry.is_on = on;
        self.log_update(&entry.name, if on { "switched on" } else { "switched off" });
        Ok(changed)
    }

    async fn set_group_level(&self, group: u32, level: Brightness) -> Result<bool, CommandError> {
        let mut inner = self.inner.lock();
        inner.log.push(IssuedCommand::SetGroupLevel { group, level });
        if inner.session.is_none() {
            return Err(CommandError::SessionLost);
        }

        let entry = inner
            .groups
            .iter_mut()
            .find(|entry| entry.id == group)
            .ok_or(CommandError::GroupNotFound(group))?;

        let changed = entry.level != level;
        entry.level = level;
        // Level 0 doubles as an off switch, as for single bulbs.
        if level.is_off() {
            entry.is_on = false;
        }
        self.log_update(&entry.name, &format!("level {level}"));
        Ok(changed)
    }

    async fn set_scene(&self, group: u32, scene: &str) -> Result<bool, CommandError> {
        let mut inner = self.inner.lock();
        inner.log.push(IssuedCommand::SetScene {
            group,
            scene: scene.to_string(),
        });
        if inner.session.is_none() {
            return Err(CommandError::SessionLost);
        }

        let entry = inner
            .groups
            .iter_mut()
            .find(|entry| entry.id == group)
            .ok_or(CommandError::GroupNotFound(group))?;

        if !entry.scenes.iter().any(|known| known == scene) {
            tracing::debug!(group = %entry.name, scene = %scene, "Unknown scene, ignoring");
            return Ok(false);
        }

        let changed = entry.scene.as_deref() != Some(scene);
        entry.scene = Some(scene.to_string());
        self.log_update(&entry.name, &format!("scene {scene}"));
        Ok(changed)
    }

    async fn reset(&self) -> Result<(), ConnectionError> {
        let mut inner = self.inner.lock();
        inner.log.push(IssuedCommand::Reset);
        inner.session = None;
        self.establish(&mut inner)
    }

    async fn close(&self) -> Result<(), TeardownError> {
        let mut inner = self.inner.lock();
        if inner.session.is_none() {
            return Err(TeardownError::NotConnected);
        }
        inner.log.push(IssuedCommand::Close);
        if let Some(reason) = &inner.close_failure {
            return Err(TeardownError::Incomplete(reason.clone()));
        }
        inner.session = None;
        tracing::info!(host = %self.config.host, "Session closed");
        Ok(())
    }
}
