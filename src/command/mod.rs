// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Panel command definitions.
//!
//! This module provides typed representations of the requests a panel
//! accepts. Building a command is pure: each one names the HTTP method, the
//! resource path under the authenticated API root, and the JSON body, and
//! the transport layer performs the actual I/O.
//!
//! # Available Commands
//!
//! | Command Type | Purpose | Resource |
//! |-------------|---------|----------|
//! | [`StateCommand`] | Power, color, brightness writes | `state` |
//! | [`EffectCommand`] | Stored and custom effects | `effects` |
//! | [`InfoCommand`] | Full panel info document | API root |
//!
//! # Examples
//!
//! ```
//! use leafctl::command::{Command, Method, StateCommand};
//! use leafctl::types::Brightness;
//!
//! let cmd = StateCommand::SetBrightness(Brightness::new(75).unwrap());
//! assert_eq!(cmd.method(), Method::Put);
//! assert_eq!(cmd.path(), "state");
//! assert_eq!(
//!     cmd.body(),
//!     Some(serde_json::json!({"brightness": {"value": 75}}))
//! );
//! ```

mod effect;
mod info;
mod state;

pub use effect::EffectCommand;
pub use info::InfoCommand;
pub use state::StateCommand;

use std::fmt;

/// HTTP method a command is sent with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Read a resource.
    Get,
    /// Write a resource.
    Put,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Put => write!(f, "PUT"),
        }
    }
}

/// A request that can be sent to a panel.
///
/// Commands are addressed relative to the authenticated API root
/// (`http://{host}/api/v1/{accessToken}`); the transport builds the full URL.
pub trait Command {
    /// Returns the HTTP method for this command.
    fn method(&self) -> Method;

    /// Returns the resource path relative to the API root.
    ///
    /// The empty string addresses the root itself (the full info document).
    fn path(&self) -> String;

    /// Returns the JSON request body, if any.
    ///
    /// Read commands carry no body.
    fn body(&self) -> Option<serde_json::Value>;
}
