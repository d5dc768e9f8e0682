// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `leafctl` - A Rust library to control Nanoleaf light panels.
//!
//! This library provides async APIs to interact with Nanoleaf panels over
//! their local HTTP API, plus a binary frame codec for streaming custom
//! effects.
//!
//! # Supported Features
//!
//! - **Power control**: Turn panels on/off
//! - **Color control**: HSL, RGB, color temperature, brightness
//! - **Effects**: List stored effects, select by name, display custom
//!   per-panel frame animations
//! - **State queries**: Full panel info document with layout and rhythm
//!   module details
//!
//! # Quick Start
//!
//! ```no_run
//! use leafctl::{PanelClient, PanelEndpoint};
//! use leafctl::types::{Brightness, HslColor};
//!
//! #[tokio::main]
//! async fn main() -> leafctl::Result<()> {
//!     let endpoint = PanelEndpoint::new(
//!         "living-room",
//!         "192.168.1.31:16021",
//!         "5Euks2liarBxGnEC",
//!     );
//!     let client = PanelClient::http(&endpoint)?;
//!
//!     client.power_on().await?;
//!     client.set_hsl(HslColor::new(120, 100, 50)?).await?;
//!     client.set_brightness(Brightness::new(75)?).await?;
//!
//!     let info = client.panel_info().await?;
//!     println!("{} is on: {}", info.name, info.is_on());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Custom Effects
//!
//! ```no_run
//! use leafctl::{EffectFrame, PanelClient, PanelEndpoint};
//!
//! #[tokio::main]
//! async fn main() -> leafctl::Result<()> {
//!     let endpoint = PanelEndpoint::new("office", "192.168.1.31", "token");
//!     let client = PanelClient::http(&endpoint)?;
//!
//!     // Fade panel 7 to red over one second (transition units are 100ms).
//!     let frames = [EffectFrame::new(7, 255, 0, 0, 10)];
//!     client.set_custom_effect(&frames).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod command;
pub mod effect;
pub mod error;
pub mod protocol;
pub mod response;
pub mod types;

pub use client::{PanelClient, PanelEndpoint};
pub use command::{Command, EffectCommand, InfoCommand, StateCommand};
pub use effect::{EffectFrame, EffectStream};
pub use error::{
    DeviceError, EffectError, Error, ParseError, Result, TransportError, ValueError,
};
pub use protocol::{ApiResponse, HttpTransport, Transport};
pub use response::{PanelInfo, PanelState};
pub use types::{Brightness, ColorTemperature, HslColor, RangedValue, RgbColor};
