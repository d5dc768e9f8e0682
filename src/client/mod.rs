// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level client for one panel.
//!
//! This module provides the typed operations of the panel API: power,
//! color, brightness, effects, and state queries. A client binds exactly
//! one endpoint; controlling several panels means constructing several
//! independent clients.
//!
//! ```no_run
//! use leafctl::{PanelClient, PanelEndpoint};
//! use leafctl::types::Brightness;
//!
//! # async fn example() -> leafctl::Result<()> {
//! let endpoint = PanelEndpoint::new("living-room", "192.168.1.31:16021", "5Euks2liarBxGnEC");
//! let client = PanelClient::http(&endpoint)?;
//!
//! client.power_on().await?;
//! client.set_brightness(Brightness::new(60)?).await?;
//! # Ok(())
//! # }
//! ```

use crate::command::{Command, EffectCommand, InfoCommand, StateCommand};
use crate::effect::{EffectFrame, EffectStream};
use crate::error::Error;
use crate::protocol::{ApiResponse, HttpTransport, Transport};
use crate::response::PanelInfo;
use crate::types::{Brightness, ColorTemperature, HslColor, RgbColor};

/// Identity and connection info for one panel.
///
/// Endpoints come from the configuration layer and live for one
/// invocation; the client never persists them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelEndpoint {
    panel_name: String,
    host: String,
    access_token: String,
}

impl PanelEndpoint {
    /// Creates a new endpoint.
    ///
    /// # Arguments
    ///
    /// * `panel_name` - Human-readable name the configuration knows the panel by
    /// * `host` - `host` or `host:port` of the panel on the local network
    /// * `access_token` - API access token provisioned on the device
    pub fn new(
        panel_name: impl Into<String>,
        host: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            panel_name: panel_name.into(),
            host: host.into(),
            access_token: access_token.into(),
        }
    }

    /// Returns the configured panel name.
    #[must_use]
    pub fn panel_name(&self) -> &str {
        &self.panel_name
    }

    /// Returns the host (and optional port).
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the access token.
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

/// A light panel controlled over a [`Transport`].
///
/// Every operation validates its input, encodes one command, issues one
/// request, and waits for the response; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct PanelClient<P: Transport> {
    transport: P,
}

impl PanelClient<HttpTransport> {
    /// Creates an HTTP client for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns error if the endpoint host is invalid or the HTTP transport
    /// cannot be created.
    pub fn http(endpoint: &PanelEndpoint) -> Result<Self, Error> {
        let transport = HttpTransport::new(endpoint.host(), endpoint.access_token())?;
        Ok(Self::new(transport))
    }
}

impl<P: Transport> PanelClient<P> {
    /// Creates a client over an existing transport.
    #[must_use]
    pub const fn new(transport: P) -> Self {
        Self { transport }
    }

    /// Sends a prepared command to the panel.
    ///
    /// The typed operations below cover the full command surface; this is
    /// the escape hatch for sending one directly.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the panel reports a failure.
    pub async fn send<C: Command + Sync>(&self, command: &C) -> Result<ApiResponse, Error> {
        self.transport.send(command).await
    }

    // ========== Power ==========

    /// Turns the panel on.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn power_on(&self) -> Result<(), Error> {
        self.set_power(true).await
    }

    /// Turns the panel off.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn power_off(&self) -> Result<(), Error> {
        self.set_power(false).await
    }

    /// Sets the panel power state.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn set_power(&self, on: bool) -> Result<(), Error> {
        self.send(&StateCommand::SetOn(on)).await?;
        Ok(())
    }

    // ========== Color & Brightness ==========

    /// Sets hue, saturation, and lightness in one state write.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn set_hsl(&self, color: HslColor) -> Result<(), Error> {
        self.send(&StateCommand::SetHsl(color)).await?;
        Ok(())
    }

    /// Sets an RGB color.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn set_rgb(&self, color: RgbColor) -> Result<(), Error> {
        self.send(&StateCommand::SetRgb(color)).await?;
        Ok(())
    }

    /// Sets the white color temperature.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn set_color_temperature(&self, temperature: ColorTemperature) -> Result<(), Error> {
        self.send(&StateCommand::SetColorTemperature(temperature))
            .await?;
        Ok(())
    }

    /// Sets the brightness percentage.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn set_brightness(&self, brightness: Brightness) -> Result<(), Error> {
        self.send(&StateCommand::SetBrightness(brightness)).await?;
        Ok(())
    }

    // ========== Effects ==========

    /// Returns the names of the stored effects, in device order.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails or the response cannot be parsed.
    pub async fn list_effects(&self) -> Result<Vec<String>, Error> {
        let response = self.send(&EffectCommand::List).await?;
        response.parse().map_err(Error::Parse)
    }

    /// Activates a stored effect by name.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn select_effect(&self, name: &str) -> Result<(), Error> {
        self.send(&EffectCommand::Select(name.to_string())).await?;
        Ok(())
    }

    /// Displays a custom effect built from the given frames.
    ///
    /// The frames are validated and encoded before any request is issued:
    /// an empty slice fails with [`EffectError::Empty`] and the panel is
    /// never contacted.
    ///
    /// [`EffectError::Empty`]: crate::error::EffectError::Empty
    ///
    /// # Errors
    ///
    /// Returns error if the frames are not a valid stream or the command
    /// fails.
    pub async fn set_custom_effect(&self, frames: &[EffectFrame]) -> Result<(), Error> {
        let stream = EffectStream::new(frames.to_vec())?;
        self.send(&EffectCommand::DisplayCustom(stream)).await?;
        Ok(())
    }

    // ========== State ==========

    /// Fetches and decodes the full panel info document.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails or the document is malformed.
    pub async fn panel_info(&self) -> Result<PanelInfo, Error> {
        let response = self.send(&InfoCommand).await?;
        response.parse().map_err(Error::Parse)
    }

    /// Reads an arbitrary sub-path of the API root and returns the raw body.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn get_raw(&self, path: &str) -> Result<String, Error> {
        let response = self.transport.get_raw(path).await?;
        Ok(response.body().to_string())
    }
}
