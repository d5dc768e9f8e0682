// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for panel control.
//!
//! This module provides type-safe representations of values used in panel
//! commands and state. Each constrained type ensures values are within their
//! valid ranges at construction time, preventing runtime errors.
//!
//! # Types
//!
//! - [`HslColor`] - HSL color (Hue 0-360, Saturation 0-100, Lightness 0-100)
//! - [`RgbColor`] - RGB color (each channel 0-255)
//! - [`ColorTemperature`] - Color temperature in Kelvin (1200-6500)
//! - [`Brightness`] - Brightness level (0-100%)
//! - [`RangedValue`] - A reported value with optional device-reported bounds

mod brightness;
mod color;
mod ranged;
mod rgb_color;

pub use brightness::Brightness;
pub use color::{ColorTemperature, HslColor};
pub use ranged::RangedValue;
pub use rgb_color::RgbColor;
