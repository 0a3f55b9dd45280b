// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Group model for Trådfri gateways.
//!
//! The gateway organizes bulbs into groups (one per room in the app).
//! Switching a group switches every bulb in it; the level is the last
//! group-wide brightness applied.

use serde::{Deserialize, Serialize};

use crate::types::Brightness;

/// A device group as reported by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Instance id assigned by the gateway.
    pub id: u32,
    /// Display name, the usual way to address a group.
    pub name: String,
    /// Whether the gateway believes the group is on.
    pub is_on: bool,
    /// Name of the active scene, if any.
    pub scene: Option<String>,
    /// Scenes available to this group.
    pub scenes: Vec<String>,
    /// Last group-wide brightness applied.
    pub level: Brightness,
}

impl Group {
    /// Creates a switched-off group with no scenes.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_on: false,
            scene: None,
            scenes: Vec::new(),
            level: Brightness::MAX,
        }
    }

    /// Sets the on/off state.
    #[must_use]
    pub fn with_on(mut self, is_on: bool) -> Self {
        self.is_on = is_on;
        self
    }

    /// Sets the available scenes.
    #[must_use]
    pub fn with_scenes(mut self, scenes: Vec<String>) -> Self {
        self.scenes = scenes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let group = Group::new(131073, "Living room");
        assert_eq!(group.id, 131073);
        assert!(!group.is_on);
        assert!(group.scene.is_none());
        assert!(group.scenes.is_empty());
    }

    #[test]
    fn serde_round_trip() {
        let group = Group::new(131073, "Living room")
            .with_on(true)
            .with_scenes(vec!["Relax".to_string(), "Focus".to_string()]);
        let json = serde_json::to_string(&group).unwrap();
        let back: Group = serde_json::from_str(&json).unwrap();
        assert_eq!(back, group);
    }
}
