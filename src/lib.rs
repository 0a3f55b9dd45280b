// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Trådfri Lib - session orchestration for IKEA Trådfri gateways.
//!
//! This library models the client surface of a Trådfri lighting gateway
//! (devices, groups, credentials, session lifecycle) and provides a runner
//! that toggles the power state of every detected bulb in one pass.
//!
//! # Supported Features
//!
//! - **Session lifecycle**: idempotent connect, reset, close
//! - **Device model**: bulbs, plugs, remotes and sensors as tagged variants
//! - **Bulb control**: on/off switching, brightness, white-spectrum colour
//! - **Groups**: lookup and group-wide switching
//! - **Toggle runner**: one sequential toggle pass with per-bulb outcomes
//!
//! The network client that speaks CoAP/DTLS to the hub is out of scope;
//! any such client plugs in by implementing the [`Gateway`] trait. The
//! bundled [`MemoryGateway`] is a deterministic in-memory implementation
//! for tests and demos.
//!
//! # Quick Start
//!
//! ```
//! use tradfri_lib::device::Bulb;
//! use tradfri_lib::gateway::MemoryGateway;
//! use tradfri_lib::{Credentials, GatewayConfig, ToggleRunner};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> tradfri_lib::Result<()> {
//!     let config = GatewayConfig::new(
//!         "192.168.178.28",
//!         Credentials::new("tradfri_0001", "8kVc2plyV7zBqE4m"),
//!     );
//!
//!     let gateway = MemoryGateway::new(config)
//!         .with_device(Bulb::new(65537, "Desk lamp").with_on(true))
//!         .with_device(Bulb::new(65538, "Shelf light"));
//!
//!     let report = ToggleRunner::new(gateway).run().await?;
//!     println!("Toggled {} of {} bulbs", report.applied(), report.attempted());
//!     Ok(())
//! }
//! ```
//!
//! # Loading Configuration
//!
//! Configuration is an explicit value, loaded once at process start and
//! passed into construction by value:
//!
//! ```no_run
//! use tradfri_lib::GatewayConfig;
//!
//! # fn example() -> tradfri_lib::Result<()> {
//! let config = GatewayConfig::load("/etc/tradfri/gateway.json")?;
//! # Ok(())
//! # }
//! ```

mod config;
pub mod device;
pub mod error;
pub mod gateway;
pub mod group;
mod runner;
pub mod types;

pub use config::GatewayConfig;
pub use device::{Device, DeviceInfo, DeviceKind};
pub use error::{
    CommandError, ConfigError, ConnectionError, Error, Result, TeardownError, ValueError,
};
pub use gateway::{Gateway, MemoryGateway};
pub use group::Group;
pub use runner::{ToggleOutcome, ToggleReport, ToggleResult, ToggleRunner};
pub use types::{Brightness, Colour, Credentials, Spectrum};
