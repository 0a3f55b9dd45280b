// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Gateway credentials.
//!
//! A Trådfri gateway authorizes sessions with an identity string and a
//! pre-shared key. Both are obtained out-of-band (the initial pairing
//! exchange against the gateway's security code) and supplied to this
//! library as configuration; this library never generates them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity and pre-shared key authorizing a gateway session.
///
/// Credentials are immutable for the lifetime of a session. A successful
/// connect may hand back a refreshed pair, which callers should persist for
/// the next session.
///
/// The pre-shared key is redacted from `Debug` output so that credentials
/// can appear in logs without leaking the secret.
///
/// # Examples
///
/// ```
/// use tradfri_lib::Credentials;
///
/// let creds = Credentials::new("tradfri_0001", "8kVc2plyV7zBqE4m");
/// assert_eq!(creds.identity(), "tradfri_0001");
/// assert!(!format!("{creds:?}").contains("8kVc2plyV7zBqE4m"));
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    identity: String,
    psk: String,
}

impl Credentials {
    /// Creates credentials from an identity and a pre-shared key.
    #[must_use]
    pub fn new(identity: impl Into<String>, psk: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            psk: psk.into(),
        }
    }

    /// Returns the identity string.
    #[must_use]
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Returns the pre-shared key.
    #[must_use]
    pub fn psk(&self) -> &str {
        &self.psk
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identity", &self.identity)
            .field("psk", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let creds = Credentials::new("ident", "secret");
        assert_eq!(creds.identity(), "ident");
        assert_eq!(creds.psk(), "secret");
    }

    #[test]
    fn debug_redacts_psk() {
        let creds = Credentials::new("ident", "secret");
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("ident"));
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn serde_round_trip() {
        let creds = Credentials::new("ident", "secret");
        let json = serde_json::to_string(&creds).unwrap();
        let back: Credentials = serde_json::from_str(&json).unwrap();
        assert_eq!(back, creds);
    }
}
