// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the panel REST API.

use std::time::Duration;

use reqwest::Client;

use crate::command::{Command, Method};
use crate::error::{DeviceError, Error, TransportError};
use crate::protocol::{ApiResponse, Transport};

/// HTTP transport for one panel.
///
/// Every request is addressed under the authenticated API root
/// `http://{host}/api/v1/{accessToken}`. HTTP is stateless here: each
/// command is one independent request with no connection kept open between
/// invocations.
///
/// # Examples
///
/// ```no_run
/// use leafctl::command::StateCommand;
/// use leafctl::protocol::{HttpTransport, Transport};
///
/// # async fn example() -> leafctl::Result<()> {
/// let transport = HttpTransport::new("192.168.1.31:16021", "5Euks2liarBxGnEC")?;
/// transport.send(&StateCommand::on()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    client: Client,
}

impl HttpTransport {
    /// Default device API port.
    pub const DEFAULT_PORT: u16 = 16021;

    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a transport for the given host and access token.
    ///
    /// # Arguments
    ///
    /// * `host` - Hostname or IP of the panel, with an optional `:port`
    ///   (the device default 16021 is appended when absent)
    /// * `access_token` - API access token; percent-encoded into the URL
    ///
    /// # Errors
    ///
    /// Returns `TransportError::InvalidAddress` for an empty or scheme-
    /// prefixed host, or `TransportError::Http` if the HTTP client cannot
    /// be created.
    pub fn new(
        host: impl Into<String>,
        access_token: impl AsRef<str>,
    ) -> Result<Self, TransportError> {
        let host = host.into();
        if host.is_empty() {
            return Err(TransportError::InvalidAddress(
                "host must not be empty".to_string(),
            ));
        }
        if host.contains("://") {
            return Err(TransportError::InvalidAddress(format!(
                "host must not carry a scheme: {host}"
            )));
        }

        let authority = if host.contains(':') {
            host
        } else {
            format!("{host}:{}", Self::DEFAULT_PORT)
        };
        let token = urlencoding::encode(access_token.as_ref()).into_owned();

        let client = Client::builder()
            .timeout(Self::DEFAULT_TIMEOUT)
            .build()
            .map_err(TransportError::Http)?;

        Ok(Self {
            base_url: format!("http://{authority}/api/v1/{token}"),
            client,
        })
    }

    /// Replaces the request timeout.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Http` if the HTTP client cannot be rebuilt.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, TransportError> {
        self.client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(TransportError::Http)?;
        Ok(self)
    }

    /// Returns the authenticated API root this transport addresses.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the URL for a resource path relative to the API root.
    fn build_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    async fn into_api_response(response: reqwest::Response) -> Result<ApiResponse, Error> {
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(DeviceError::Unauthorized.into());
        }

        // The body is read before the status check so device failures carry it.
        let body = response.text().await.map_err(TransportError::Http)?;

        if !status.is_success() {
            return Err(DeviceError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        tracing::debug!(status = status.as_u16(), body = %body, "Received panel response");

        Ok(ApiResponse::new(body))
    }
}

impl Transport for HttpTransport {
    async fn send<C: Command + Sync>(&self, command: &C) -> Result<ApiResponse, Error> {
        let url = self.build_url(&command.path());

        tracing::debug!(method = %command.method(), url = %url, "Sending panel request");

        let request = match command.method() {
            Method::Get => self.client.get(&url),
            Method::Put => self.client.put(&url),
        };
        let request = match command.body() {
            Some(body) => request.json(&body),
            None => request,
        };

        let response = request.send().await.map_err(TransportError::Http)?;
        Self::into_api_response(response).await
    }

    async fn get_raw(&self, path: &str) -> Result<ApiResponse, Error> {
        let url = self.build_url(path);

        tracing::debug!(url = %url, "Sending panel request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(TransportError::Http)?;
        Self::into_api_response(response).await
    }
}
