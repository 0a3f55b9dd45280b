// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the Trådfri library.
//!
//! This module provides the error hierarchy for failures across the library:
//! session establishment, per-device commands, session teardown, value
//! validation, and configuration loading.

use thiserror::Error;

use crate::device::DeviceKind;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when working
/// with a Trådfri gateway session.
#[derive(Debug, Error)]
pub enum Error {
    /// Session establishment with the gateway failed.
    #[error("connection error: {0}")]
    Connection(#[from] ConnectionError),

    /// A per-device command failed or was rejected.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// Closing the gateway session failed.
    #[error("teardown error: {0}")]
    Teardown(#[from] TeardownError),

    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while loading configuration.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while establishing (or re-establishing) a gateway session.
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// The gateway refused the connection attempt.
    #[error("gateway {host} refused connection: {reason}")]
    Refused {
        /// The gateway host that was contacted.
        host: String,
        /// Description of the refusal.
        reason: String,
    },

    /// The supplied credentials were not accepted by the gateway.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Session establishment timed out.
    #[error("connection timed out after {0} ms")]
    Timeout(u64),

    /// The configured host is not a usable address.
    #[error("invalid gateway address: {0}")]
    InvalidAddress(String),
}

/// Errors raised by per-device control commands.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The addressed device is no longer known to the gateway.
    #[error("device {0} not found on gateway")]
    DeviceNotFound(u32),

    /// The addressed group is no longer known to the gateway.
    #[error("group {0} not found on gateway")]
    GroupNotFound(u32),

    /// The addressed device does not accept switch commands.
    #[error("device {device} ({kind}) is not switchable")]
    NotSwitchable {
        /// Instance id of the addressed device.
        device: u32,
        /// Variant of the addressed device.
        kind: DeviceKind,
    },

    /// The gateway rejected the command.
    #[error("command rejected for device {device}: {reason}")]
    Rejected {
        /// Instance id of the addressed device.
        device: u32,
        /// Description of the rejection.
        reason: String,
    },

    /// The session was lost before the command could complete.
    #[error("gateway session lost")]
    SessionLost,
}

/// Errors raised while closing a gateway session.
#[derive(Debug, Error)]
pub enum TeardownError {
    /// The gateway could not release all session resources.
    #[error("session teardown incomplete: {0}")]
    Incomplete(String),

    /// Close was requested on a handle with no established session.
    #[error("no session to close")]
    NotConnected,
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// An invalid colour setting string was provided.
    #[error("invalid colour setting: {0}")]
    InvalidColour(String),
}

/// Errors related to loading the gateway configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the configuration file failed.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid JSON.
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration does not name a gateway host.
    #[error("configuration is missing the gateway host")]
    MissingHost,
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_error_display() {
        let err = ConnectionError::Refused {
            host: "192.168.178.28".to_string(),
            reason: "DTLS handshake aborted".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "gateway 192.168.178.28 refused connection: DTLS handshake aborted"
        );
    }

    #[test]
    fn command_error_display() {
        let err = CommandError::NotSwitchable {
            device: 65537,
            kind: DeviceKind::Remote,
        };
        assert_eq!(err.to_string(), "device 65537 (Remote) is not switchable");
    }

    #[test]
    fn value_error_display() {
        let err = ValueError::OutOfRange {
            min: 0,
            max: 100,
            actual: 150,
        };
        assert_eq!(err.to_string(), "value 150 is out of range [0, 100]");
    }

    #[test]
    fn error_from_connection_error() {
        let err: Error = ConnectionError::AuthenticationFailed.into();
        assert!(matches!(
            err,
            Error::Connection(ConnectionError::AuthenticationFailed)
        ));
    }

    #[test]
    fn error_from_teardown_error() {
        let err: Error = TeardownError::NotConnected.into();
        assert!(matches!(err, Error::Teardown(TeardownError::NotConnected)));
    }
}
