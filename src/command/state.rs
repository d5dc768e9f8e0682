// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State write commands.
//!
//! Power, color, and brightness are all fields of the panel's `state`
//! resource; one command sets one logical aspect of it.

use serde_json::json;

use crate::command::{Command, Method};
use crate::types::{Brightness, ColorTemperature, HslColor, RgbColor};

/// A write to the panel's `state` resource.
///
/// Exactly one variant per invocation. The inputs are validated value
/// objects, so encoding itself cannot fail; the body is produced by one
/// exhaustive match.
///
/// # Examples
///
/// ```
/// use leafctl::command::{Command, StateCommand};
/// use leafctl::types::{HslColor, RgbColor};
///
/// let cmd = StateCommand::SetRgb(RgbColor::new(255, 0, 0));
/// assert_eq!(
///     cmd.body(),
///     Some(serde_json::json!({"rgb": {"value": "#FF0000"}}))
/// );
///
/// // HSL is one combined state write; lightness maps to the brightness field
/// let cmd = StateCommand::SetHsl(HslColor::new(120, 100, 50).unwrap());
/// assert_eq!(
///     cmd.body(),
///     Some(serde_json::json!({
///         "hue": {"value": 120},
///         "sat": {"value": 100},
///         "brightness": {"value": 50},
///     }))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateCommand {
    /// Turn the panel on or off.
    SetOn(bool),
    /// Set hue, saturation, and lightness together.
    SetHsl(HslColor),
    /// Set an RGB color.
    SetRgb(RgbColor),
    /// Set the white color temperature in Kelvin.
    SetColorTemperature(ColorTemperature),
    /// Set the brightness percentage.
    SetBrightness(Brightness),
}

impl StateCommand {
    /// Creates a command that turns the panel on.
    #[must_use]
    pub const fn on() -> Self {
        Self::SetOn(true)
    }

    /// Creates a command that turns the panel off.
    #[must_use]
    pub const fn off() -> Self {
        Self::SetOn(false)
    }
}

impl Command for StateCommand {
    fn method(&self) -> Method {
        Method::Put
    }

    fn path(&self) -> String {
        "state".to_string()
    }

    fn body(&self) -> Option<serde_json::Value> {
        let body = match self {
            Self::SetOn(on) => json!({"on": {"value": on}}),
            Self::SetHsl(color) => json!({
                "hue": {"value": color.hue()},
                "sat": {"value": color.saturation()},
                "brightness": {"value": color.lightness()},
            }),
            Self::SetRgb(color) => json!({"rgb": {"value": color.to_hex()}}),
            Self::SetColorTemperature(ct) => json!({"ct": {"value": ct.value()}}),
            Self::SetBrightness(b) => json!({"brightness": {"value": b.value()}}),
        };
        Some(body)
    }
}
