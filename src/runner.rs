// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The toggle runner.
//!
//! One pass over a gateway's device list that inverts the on/off state of
//! every bulb: connect, snapshot, one switch command per bulb (awaited
//! sequentially, snapshot order), close. There is no retry at any step; a
//! failing bulb does not abort the pass, its failure is carried in the
//! returned [`ToggleReport`] instead.

use crate::device::Device;
use crate::error::{CommandError, Error, Result};
use crate::gateway::Gateway;

/// How a single bulb responded to its switch command.
#[derive(Debug)]
pub enum ToggleResult {
    /// The gateway applied the requested state.
    Applied,
    /// The gateway treated the command as a no-op.
    Unchanged,
    /// The command failed; the pass continued with the next bulb.
    Failed(CommandError),
}

/// Outcome of the switch command issued to one bulb.
#[derive(Debug)]
pub struct ToggleOutcome {
    /// Instance id of the bulb.
    pub device: u32,
    /// Display name of the bulb.
    pub name: String,
    /// The on/off state that was requested (negation of the snapshot state).
    pub requested_on: bool,
    /// What the gateway did with the command.
    pub result: ToggleResult,
}

impl ToggleOutcome {
    /// Returns `true` if the command failed.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self.result, ToggleResult::Failed(_))
    }
}

/// Aggregate result of one toggle pass.
#[derive(Debug, Default)]
pub struct ToggleReport {
    /// Per-bulb outcomes, in command issue order.
    pub outcomes: Vec<ToggleOutcome>,
}

impl ToggleReport {
    /// Returns how many bulbs received a switch command.
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    /// Returns how many bulbs changed state.
    #[must_use]
    pub fn applied(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome.result, ToggleResult::Applied))
            .count()
    }

    /// Returns the outcomes whose commands failed.
    #[must_use]
    pub fn failures(&self) -> Vec<&ToggleOutcome> {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.is_failed())
            .collect()
    }

    /// Returns `true` if every issued command was applied.
    #[must_use]
    pub fn is_complete_success(&self) -> bool {
        self.outcomes
            .iter()
            .all(|outcome| matches!(outcome.result, ToggleResult::Applied))
    }
}

/// Runs one toggle pass against a gateway.
///
/// The runner exclusively owns its session handle for the duration of a
/// run; concurrent runs against the same session are not supported.
///
/// # Examples
///
/// ```
/// use tradfri_lib::device::Bulb;
/// use tradfri_lib::gateway::MemoryGateway;
/// use tradfri_lib::{Credentials, GatewayConfig, ToggleRunner};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> tradfri_lib::Result<()> {
/// let config = GatewayConfig::new("192.168.178.28", Credentials::new("id", "psk"));
/// let gateway = MemoryGateway::new(config).with_device(Bulb::new(65537, "Desk lamp"));
///
/// let runner = ToggleRunner::new(gateway);
/// let report = runner.run().await?;
/// assert_eq!(report.attempted(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ToggleRunner<G: Gateway> {
    gateway: G,
}

impl<G: Gateway> ToggleRunner<G> {
    /// Creates a runner over the given gateway handle.
    #[must_use]
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Returns the underlying gateway handle.
    #[must_use]
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Consumes the runner, returning the gateway handle.
    #[must_use]
    pub fn into_gateway(self) -> G {
        self.gateway
    }

    /// Performs one toggle pass.
    ///
    /// Connects, snapshots the device list, issues one switch command per
    /// bulb (the negation of its snapshot state, each awaited before the
    /// next), then closes the session. Non-bulb devices are left untouched.
    ///
    /// # Errors
    ///
    /// Returns `Error::Connection` if the session cannot be established
    /// (in which case no commands are issued and the session is not
    /// closed), or `Error::Teardown` if closing fails after the pass.
    /// Individual command failures do not fail the run; they are recorded
    /// in the returned [`ToggleReport`].
    pub async fn run(&self) -> Result<ToggleReport> {
        let credentials = self.gateway.connect().await?;
        tracing::info!(identity = %credentials.identity(), "Gateway session established");

        let snapshot = self.gateway.devices();
        tracing::info!(count = snapshot.len(), "Took device snapshot");

        let mut outcomes = Vec::new();
        for device in &snapshot {
            match device {
                Device::Bulb(bulb) => {
                    let requested_on = !bulb.is_on;
                    let result = match self.gateway.switch(bulb.info.id, requested_on).await {
                        Ok(true) => {
                            tracing::debug!(device = %bulb.info.name, on = requested_on, "Bulb toggled");
                            ToggleResult::Applied
                        }
                        Ok(false) => {
                            tracing::debug!(device = %bulb.info.name, "Toggle was a no-op");
                            ToggleResult::Unchanged
                        }
                        Err(e) => {
                            tracing::warn!(device = %bulb.info.name, error = %e, "Toggle failed, continuing");
                            ToggleResult::Failed(e)
                        }
                    };
                    outcomes.push(ToggleOutcome {
                        device: bulb.info.id,
                        name: bulb.info.name.clone(),
                        requested_on,
                        result,
                    });
                }
                Device::Plug(_) | Device::Remote(_) | Device::Sensor(_) => {
                    tracing::debug!(device = %device.name(), kind = %device.kind(), "Skipping non-bulb device");
                }
            }
        }

        let report = ToggleReport { outcomes };
        tracing::info!(
            attempted = report.attempted(),
            applied = report.applied(),
            failed = report.failures().len(),
            "Toggle pass complete"
        );

        self.gateway.close().await.map_err(Error::Teardown)?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_is_complete_success() {
        let report = ToggleReport::default();
        assert_eq!(report.attempted(), 0);
        assert!(report.is_complete_success());
    }

    #[test]
    fn report_counts() {
        let report = ToggleReport {
            outcomes: vec![
                ToggleOutcome {
                    device: 1,
                    name: "a".to_string(),
                    requested_on: true,
                    result: ToggleResult::Applied,
                },
                ToggleOutcome {
                    device: 2,
                    name: "b".to_string(),
                    requested_on: false,
                    result: ToggleResult::Unchanged,
                },
                ToggleOutcome {
                    device: 3,
                    name: "c".to_string(),
                    requested_on: true,
                    result: ToggleResult::Failed(CommandError::SessionLost),
                },
            ],
        };

        assert_eq!(report.attempted(), 3);
        assert_eq!(report.applied(), 1);
        assert_eq!(report.failures().len(), 1);
        assert_eq!(report.failures()[0].device, 3);
        assert!(!report.is_complete_success());
    }
}
