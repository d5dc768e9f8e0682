// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Effect commands.
//!
//! Stored effects are listed and selected by name; a custom effect carries
//! an animation-data payload through the `write` envelope, which switches
//! the panel into external-control mode for the supplied frames.

use serde_json::json;

use crate::command::{Command, Method};
use crate::effect::EffectStream;

/// An operation on the panel's `effects` resource.
///
/// # Examples
///
/// ```
/// use leafctl::command::{Command, EffectCommand, Method};
///
/// let cmd = EffectCommand::Select("Aurora".to_string());
/// assert_eq!(cmd.method(), Method::Put);
/// assert_eq!(cmd.path(), "effects");
/// assert_eq!(cmd.body(), Some(serde_json::json!({"select": "Aurora"})));
///
/// let list = EffectCommand::List;
/// assert_eq!(list.method(), Method::Get);
/// assert_eq!(list.path(), "effects/effectsList");
/// assert_eq!(list.body(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectCommand {
    /// Query the names of the stored effects.
    List,
    /// Activate a stored effect by name.
    Select(String),
    /// Display an externally supplied custom effect.
    DisplayCustom(EffectStream),
}

impl Command for EffectCommand {
    fn method(&self) -> Method {
        match self {
            Self::List => Method::Get,
            Self::Select(_) | Self::DisplayCustom(_) => Method::Put,
        }
    }

    fn path(&self) -> String {
        match self {
            Self::List => "effects/effectsList".to_string(),
            Self::Select(_) | Self::DisplayCustom(_) => "effects".to_string(),
        }
    }

    fn body(&self) -> Option<serde_json::Value> {
        match self {
            Self::List => None,
            Self::Select(name) => Some(json!({"select": name})),
            Self::DisplayCustom(stream) => Some(json!({
                "write": {
                    "command": "display",
                    "animType": "custom",
                    "animData": stream.to_anim_data(),
                    "loop": false,
                }
            })),
        }
    }
}
