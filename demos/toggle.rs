// SPDX-License-Identifier: MPL-2.0

//! Demo: toggle every bulb the gateway knows about, once.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example toggle
//! ```
//!
//! The demo runs against the bundled in-memory gateway seeded with a few
//! devices. To drive a real hub, construct your gateway client of choice
//! (anything implementing `Gateway`) from a `GatewayConfig` loaded with
//! `GatewayConfig::load("gateway.json")` and hand it to the runner instead.

use tradfri_lib::device::{Bulb, Plug, Remote};
use tradfri_lib::gateway::MemoryGateway;
use tradfri_lib::{Credentials, GatewayConfig, ToggleRunner};

#[tokio::main]
async fn main() {
    let config = GatewayConfig::new(
        "192.168.178.28",
        Credentials::new("tradfri_0001", "8kVc2plyV7zBqE4m"),
    );

    let gateway = MemoryGateway::new(config)
        .with_device(Bulb::new(65537, "Desk lamp").with_on(true))
        .with_device(Plug::new(65538, "Fan plug"))
        .with_device(Bulb::new(65539, "Shelf light"))
        .with_device(Remote::new(65540, "Remote"));

    let runner = ToggleRunner::new(gateway);

    match runner.run().await {
        Ok(report) => {
            for outcome in &report.outcomes {
                println!(
                    "{} -> {} ({:?})",
                    outcome.name,
                    if outcome.requested_on { "on" } else { "off" },
                    outcome.result
                );
            }
            println!(
                "Toggled {} of {} bulbs",
                report.applied(),
                report.attempted()
            );
        }
        Err(e) => eprintln!("{e}"),
    }
}
