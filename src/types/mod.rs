// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for gateway sessions and bulb control.
//!
//! This module provides type-safe representations of the values exchanged
//! with a Trådfri gateway. Each type ensures values are within their valid
//! ranges at construction time, preventing runtime errors.
//!
//! # Types
//!
//! - [`Credentials`] - identity and pre-shared key for a session
//! - [`Brightness`] - brightness level (0-100%)
//! - [`Spectrum`] - the colour range a bulb supports
//! - [`Colour`] - white-spectrum colour temperature setting

mod brightness;
mod colour;
mod credentials;

pub use brightness::Brightness;
pub use colour::{Colour, Spectrum};
pub use credentials::Credentials;
