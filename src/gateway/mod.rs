// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The gateway client contract.
//!
//! A [`Gateway`] is a handle to one Trådfri gateway session. It owns the
//! authoritative device list; callers read snapshots and issue commands,
//! never mutating local copies. The network client that actually speaks to
//! the hub (CoAP over DTLS) lives outside this crate; any such client can
//! participate by implementing [`Gateway`]. The crate ships
//! [`MemoryGateway`], a deterministic in-memory implementation used by the
//! tests and the demo.

mod memory;

pub use memory::{IssuedCommand, MemoryGateway};

use crate::device::Device;
use crate::error::{CommandError, ConnectionError, TeardownError};
use crate::group::Group;
use crate::types::{Brightness, Colour, Credentials};

/// Trait for gateway client implementations.
///
/// One value of this trait represents one session handle. The session
/// moves through `unconnected → connected → closed`; commands are only
/// meaningful while connected.
#[allow(async_fn_in_trait)]
pub trait Gateway {
    /// Establishes the session with the gateway.
    ///
    /// Safe to call multiple times on one handle: the first call performs
    /// the actual connect, later calls resolve once that connect has
    /// completed. Returns the (possibly refreshed) credentials; callers
    /// should persist them for the next session.
    ///
    /// # Errors
    ///
    /// Returns `ConnectionError` if the session cannot be established.
    async fn connect(&self) -> Result<Credentials, ConnectionError>;

    /// Returns a snapshot of all detected devices.
    ///
    /// This is a point-in-time copy, not a live stream; the gateway may
    /// apply background updates after the snapshot is taken. Iteration
    /// order is whatever the gateway reports.
    fn devices(&self) -> Vec<Device>;

    /// Looks up a device by display name.
    fn device(&self, name: &str) -> Option<Device>;

    /// Looks up a group by display name.
    fn group(&self, name: &str) -> Option<Group>;

    /// Switches a device on or off.
    ///
    /// Returns `Ok(true)` if the state was changed and `Ok(false)` if the
    /// gateway treated the command as a no-op.
    ///
    /// # Errors
    ///
    /// Returns `CommandError` if the device is unknown, not switchable, or
    /// the gateway rejects the command.
    async fn switch(&self, device: u32, on: bool) -> Result<bool, CommandError>;

    /// Sets the brightness of a dimmable bulb.
    ///
    /// A brightness of 0 turns the bulb off. Returns `Ok(true)` if the
    /// setting was changed.
    ///
    /// # Errors
    ///
    /// Returns `CommandError` if the device is unknown, not a dimmable
    /// bulb, or the gateway rejects the command.
    async fn set_brightness(&self, device: u32, level: Brightness) -> Result<bool, CommandError>;

    /// Sets the colour temperature of a white-spectrum bulb.
    ///
    /// Returns `Ok(true)` if the setting was changed.
    ///
    /// # Errors
    ///
    /// Returns `CommandError` if the device is unknown, not a
    /// white-spectrum bulb, or the gateway rejects the command.
    async fn set_colour(&self, device: u32, colour: Colour) -> Result<bool, CommandError>;

    /// Switches every bulb in a group on or off.
    ///
    /// Returns `Ok(true)` if the group state was changed.
    ///
    /// # Errors
    ///
    /// Returns `CommandError` if the group is unknown or the gateway
    /// rejects the command.
    async fn switch_group(&self, group: u32, on: bool) -> Result<bool, CommandError>;

    /// Sets the brightness of every bulb in a group.
    ///
    /// A level of 0 switches the group off. Returns `Ok(true)` if the
    /// group level was changed.
    ///
    /// # Errors
    ///
    /// Returns `CommandError` if the group is unknown or the gateway
    /// rejects the command.
    async fn set_group_level(&self, group: u32, level: Brightness) -> Result<bool, CommandError>;

    /// Activates a scene on a group.
    ///
    /// Only scenes the group reports in its scene list can be activated;
    /// an unknown scene name resolves to `Ok(false)` without changing the
    /// group. Returns `Ok(true)` if the active scene was changed.
    ///
    /// # Errors
    ///
    /// Returns `CommandError` if the group is unknown or the gateway
    /// rejects the command.
    async fn set_scene(&self, group: u32, scene: &str) -> Result<bool, CommandError>;

    /// Drops the session and establishes a fresh one.
    ///
    /// # Errors
    ///
    /// Returns `ConnectionError` if the new session cannot be established.
    async fn reset(&self) -> Result<(), ConnectionError>;

    /// Closes the session and releases gateway resources.
    ///
    /// The gateway side may take longer to fully settle than this call.
    ///
    /// # Errors
    ///
    /// Returns `TeardownError` if the session cannot be torn down cleanly.
    async fn close(&self) -> Result<(), TeardownError>;
}
