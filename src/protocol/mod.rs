// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport implementations for communicating with panels.
//!
//! This module provides the transport seam between typed commands and the
//! device: [`HttpTransport`] speaks the panel's REST API, and the
//! [`Transport`] trait lets the client stay independent of it.

mod http;

pub use http::HttpTransport;

use crate::command::Command;
use crate::error::{Error, ParseError};

/// Response from a panel request.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// The raw response body.
    body: String,
}

impl ApiResponse {
    /// Creates a new response with the given body.
    #[must_use]
    pub fn new(body: String) -> Self {
        Self { body }
    }

    /// Returns the raw response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parses the response as a specific type.
    ///
    /// # Errors
    ///
    /// Returns error if the body cannot be parsed into the target type.
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> Result<T, ParseError> {
        serde_json::from_str(&self.body).map_err(Into::into)
    }
}

/// Trait for transports that can carry commands to a panel.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Sends a command to the panel and returns the response.
    ///
    /// # Arguments
    ///
    /// * `command` - The command to send
    ///
    /// # Errors
    ///
    /// Returns `Error::Transport` when the request cannot be carried out and
    /// `Error::Device` when the panel answers with a non-success status.
    async fn send<C: Command + Sync>(&self, command: &C) -> Result<ApiResponse, Error>;

    /// Sends a read request for an arbitrary sub-path of the API root.
    ///
    /// # Arguments
    ///
    /// * `path` - The resource path, e.g. `"state/brightness"`
    ///
    /// # Errors
    ///
    /// Same failure modes as [`send`](Self::send).
    async fn get_raw(&self, path: &str) -> Result<ApiResponse, Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_exposes_body() {
        let response = ApiResponse::new("{}".to_string());
        assert_eq!(response.body(), "{}");
    }

    #[test]
    fn response_parses_typed() {
        let response = ApiResponse::new(r#"["Aurora","Flow"]"#.to_string());
        let names: Vec<String> = response.parse().unwrap();
        assert_eq!(names, vec!["Aurora", "Flow"]);
    }

    #[test]
    fn response_parse_failure() {
        let response = ApiResponse::new("not json".to_string());
        let result: Result<Vec<String>, _> = response.parse();
        assert!(result.is_err());
    }
}
