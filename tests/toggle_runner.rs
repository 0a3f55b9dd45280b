// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the toggle runner against an in-memory gateway.

use tradfri_lib::device::{Bulb, Plug, Remote, Sensor};
use tradfri_lib::gateway::{Gateway, IssuedCommand, MemoryGateway};
use tradfri_lib::{Credentials, Error, GatewayConfig, ToggleRunner};

fn test_config() -> GatewayConfig {
    GatewayConfig::new(
        "192.168.178.28",
        Credentials::new("tradfri_test", "test_psk"),
    )
}

/// Returns only the switch commands from a gateway's command log.
fn switch_commands(gateway: &MemoryGateway) -> Vec<(u32, bool)> {
    gateway
        .issued_commands()
        .into_iter()
        .filter_map(|cmd| match cmd {
            IssuedCommand::Switch { device, on } => Some((device, on)),
            _ => None,
        })
        .collect()
}

// ============================================================================
// Command Selection
// ============================================================================

#[tokio::test]
async fn one_switch_per_bulb_and_none_for_other_variants() {
    let gateway = MemoryGateway::new(test_config())
        .with_device(Bulb::new(1, "Desk lamp").with_on(true))
        .with_device(Plug::new(2, "Fan plug"))
        .with_device(Remote::new(3, "Remote"))
        .with_device(Sensor::new(4, "Motion sensor"))
        .with_device(Bulb::new(5, "Shelf light"));

    let runner = ToggleRunner::new(gateway);
    let report = runner.run().await.unwrap();

    assert_eq!(report.attempted(), 2);
    let commands = switch_commands(runner.gateway());
    assert_eq!(commands.len(), 2);
    assert!(commands.iter().all(|(id, _)| *id == 1 || *id == 5));
}

#[tokio::test]
async fn requested_state_is_pure_negation() {
    let gateway = MemoryGateway::new(test_config())
        .with_device(Bulb::new(1, "On bulb").with_on(true))
        .with_device(Bulb::new(2, "Off bulb").with_on(false));

    let runner = ToggleRunner::new(gateway);
    runner.run().await.unwrap();

    assert_eq!(
        switch_commands(runner.gateway()),
        vec![(1, false), (2, true)]
    );
    // No brightness or colour commands are ever issued by the runner.
    assert!(!runner.gateway().issued_commands().iter().any(|cmd| matches!(
        cmd,
        IssuedCommand::SetBrightness { .. } | IssuedCommand::SetColour { .. }
    )));
}

#[tokio::test]
async fn mixed_snapshot_scenario() {
    // Snapshot [Bulb on, Plug off, Bulb off] must yield switch(false) for
    // the first bulb and switch(true) for the second, plug untouched.
    let gateway = MemoryGateway::new(test_config())
        .with_device(Bulb::new(1, "First bulb").with_on(true))
        .with_device(Plug::new(2, "Plug").with_on(false))
        .with_device(Bulb::new(3, "Second bulb").with_on(false));

    let runner = ToggleRunner::new(gateway);
    let report = runner.run().await.unwrap();

    assert_eq!(
        switch_commands(runner.gateway()),
        vec![(1, false), (3, true)]
    );
    assert!(report.is_complete_success());

    let gateway = runner.into_gateway();
    gateway.connect().await.unwrap();
    assert!(!gateway.device("Plug").unwrap().as_plug().unwrap().is_on);
    assert!(!gateway.device("First bulb").unwrap().as_bulb().unwrap().is_on);
    assert!(gateway.device("Second bulb").unwrap().as_bulb().unwrap().is_on);
}

#[tokio::test]
async fn empty_snapshot_completes_successfully() {
    let gateway = MemoryGateway::new(test_config());
    let runner = ToggleRunner::new(gateway);

    let report = runner.run().await.unwrap();

    assert_eq!(report.attempted(), 0);
    assert!(report.is_complete_success());
    assert_eq!(runner.gateway().close_count(), 1);
    assert_eq!(
        runner.gateway().issued_commands(),
        vec![IssuedCommand::Close]
    );
}

// ============================================================================
// Session Lifecycle
// ============================================================================

#[tokio::test]
async fn close_is_issued_once_after_all_commands() {
    let gateway = MemoryGateway::new(test_config())
        .with_device(Bulb::new(1, "a"))
        .with_device(Bulb::new(2, "b"));

    let runner = ToggleRunner::new(gateway);
    runner.run().await.unwrap();

    let log = runner.gateway().issued_commands();
    assert_eq!(runner.gateway().close_count(), 1);
    assert_eq!(log.last(), Some(&IssuedCommand::Close));
}

#[tokio::test]
async fn connect_failure_issues_nothing() {
    let gateway = MemoryGateway::new(test_config()).with_device(Bulb::new(1, "a"));
    gateway.refuse_connect("handshake aborted");

    let runner = ToggleRunner::new(gateway);
    let err = runner.run().await.unwrap_err();

    assert!(matches!(err, Error::Connection(_)));
    assert!(runner.gateway().issued_commands().is_empty());
    assert_eq!(runner.gateway().close_count(), 0);
}

#[tokio::test]
async fn teardown_failure_surfaces_after_commands() {
    let gateway = MemoryGateway::new(test_config()).with_device(Bulb::new(1, "a").with_on(true));
    gateway.fail_close("timers still running");

    let runner = ToggleRunner::new(gateway);
    let err = runner.run().await.unwrap_err();

    assert!(matches!(err, Error::Teardown(_)));
    // The toggle itself still went through before close failed.
    assert_eq!(switch_commands(runner.gateway()), vec![(1, false)]);
}

#[tokio::test]
async fn idempotence_two_runs_restore_original_state() {
    let gateway = MemoryGateway::new(test_config())
        .with_device(Bulb::new(1, "On bulb").with_on(true))
        .with_device(Bulb::new(2, "Off bulb").with_on(false));

    let runner = ToggleRunner::new(gateway);
    runner.run().await.unwrap();
    runner.run().await.unwrap();

    let gateway = runner.into_gateway();
    gateway.connect().await.unwrap();
    assert!(gateway.device("On bulb").unwrap().as_bulb().unwrap().is_on);
    assert!(!gateway.device("Off bulb").unwrap().as_bulb().unwrap().is_on);
}

// ============================================================================
// Per-Device Failure Policy
// ============================================================================

#[tokio::test]
async fn failing_bulb_does_not_abort_the_pass() {
    let gateway = MemoryGateway::new(test_config())
        .with_device(Bulb::new(1, "First").with_on(true))
        .with_device(Bulb::new(2, "Broken"))
        .with_device(Bulb::new(3, "Last"));
    gateway.fail_commands_for(2, "device unreachable");

    let runner = ToggleRunner::new(gateway);
    let report = runner.run().await.unwrap();

    assert_eq!(report.attempted(), 3);
    assert_eq!(report.applied(), 2);
    let failures = report.failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].device, 2);
    assert!(!report.is_complete_success());

    // The bulb after the failure still received its command and close ran.
    assert_eq!(
        switch_commands(runner.gateway()),
        vec![(1, false), (2, true), (3, true)]
    );
    assert_eq!(runner.gateway().close_count(), 1);
}

#[tokio::test]
async fn rejected_command_is_reported_as_unchanged() {
    let gateway = MemoryGateway::new(test_config()).with_device(Bulb::new(1, "Stubborn"));
    gateway.reject_commands_for(1);

    let runner = ToggleRunner::new(gateway);
    let report = runner.run().await.unwrap();

    assert_eq!(report.attempted(), 1);
    assert_eq!(report.applied(), 0);
    assert!(report.failures().is_empty());
    assert!(!report.is_complete_success());
}
