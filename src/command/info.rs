// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Panel info query.

use crate::command::{Command, Method};

/// Query for the full panel info document at the API root.
///
/// # Examples
///
/// ```
/// use leafctl::command::{Command, InfoCommand, Method};
///
/// let cmd = InfoCommand;
/// assert_eq!(cmd.method(), Method::Get);
/// assert_eq!(cmd.path(), "");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InfoCommand;

impl Command for InfoCommand {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> String {
        String::new()
    }

    fn body(&self) -> Option<serde_json::Value> {
        None
    }
}
