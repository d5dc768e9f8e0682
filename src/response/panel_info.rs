// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Panel info document parsing.
//!
//! The info document is the panel's full state snapshot: identity, light
//! state, stored effects, layout geometry, and rhythm-module status. Only
//! the identity core (`name`, `model`, `serialNo`) and `state.on` are
//! required; every other section tolerates absence, and range bounds the
//! device did not report stay `None`.

use serde::Deserialize;

use crate::types::RangedValue;

/// Complete info document returned by the API root.
///
/// # Examples
///
/// ```
/// use leafctl::response::PanelInfo;
///
/// let json = r#"{
///     "name": "Living Room",
///     "serialNo": "S17062BA877",
///     "manufacturer": "Nanoleaf",
///     "firmwareVersion": "3.3.3",
///     "model": "NL22",
///     "state": {
///         "on": {"value": true},
///         "brightness": {"value": 100, "max": 100, "min": 0},
///         "colorMode": "effect"
///     },
///     "effects": {"select": "Flow", "effectsList": ["Color Burst", "Flow"]}
/// }"#;
/// let info: PanelInfo = serde_json::from_str(json).unwrap();
/// assert!(info.is_on());
/// assert_eq!(info.model, "NL22");
/// assert_eq!(info.effects.list, vec!["Color Burst", "Flow"]);
/// assert_eq!(info.state.brightness.bounds(), Some((0, 100)));
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelInfo {
    /// User-assigned panel name.
    pub name: String,

    /// Manufacturer name.
    #[serde(default)]
    pub manufacturer: String,

    /// Hardware model identifier.
    pub model: String,

    /// Serial number.
    pub serial_no: String,

    /// Panel firmware version.
    #[serde(default)]
    pub firmware_version: String,

    /// Current light state.
    pub state: PanelState,

    /// Stored effects.
    #[serde(default)]
    pub effects: Effects,

    /// Physical layout geometry.
    #[serde(default)]
    pub panel_layout: PanelLayout,

    /// Rhythm (sound) module status.
    #[serde(default)]
    pub rhythm: Rhythm,
}

impl PanelInfo {
    /// Returns whether the panel is currently on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.state.on.value
    }
}

/// Light state section of the info document.
///
/// The on/off flag is the one field every document carries; the color
/// fields appear as the device reports them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelState {
    /// Whether the panel is on.
    pub on: RangedValue<bool>,

    /// Active color mode (`"hs"`, `"ct"`, or `"effect"`).
    #[serde(default)]
    pub color_mode: String,

    /// Hue in degrees.
    #[serde(default)]
    pub hue: RangedValue<u16>,

    /// Saturation percentage.
    #[serde(rename = "sat", default)]
    pub saturation: RangedValue<u16>,

    /// Brightness percentage.
    #[serde(default)]
    pub brightness: RangedValue<u16>,

    /// White color temperature in Kelvin.
    #[serde(rename = "ct", default)]
    pub color_temperature: RangedValue<u16>,
}

/// Stored-effect section of the info document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Effects {
    /// Name of the active effect.
    #[serde(rename = "select", default)]
    pub selected: String,

    /// Names of all stored effects, in device order.
    #[serde(rename = "effectsList", default)]
    pub list: Vec<String>,
}

/// Layout section of the info document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelLayout {
    /// Rotation applied to the whole layout.
    #[serde(default)]
    pub global_orientation: RangedValue<i32>,

    /// Panel arrangement.
    #[serde(default)]
    pub layout: Layout,
}

/// Panel arrangement within the layout section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// Number of connected panels.
    #[serde(default)]
    pub num_panels: u32,

    /// Triangle side length in millimeters.
    #[serde(default)]
    pub side_length: u32,

    /// Per-panel positions; empty when the device reported none.
    #[serde(default)]
    pub position_data: Vec<PanelPosition>,
}

/// One panel's position and orientation.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelPosition {
    /// Panel address, as used in custom-effect frames.
    #[serde(default)]
    pub panel_id: u16,

    /// X coordinate in millimeters.
    #[serde(default)]
    pub x: i32,

    /// Y coordinate in millimeters.
    #[serde(default)]
    pub y: i32,

    /// Orientation in degrees.
    #[serde(default)]
    pub o: i32,
}

/// Rhythm-module section of the info document.
///
/// Devices without a module attached report `null` for most of these
/// fields, so they decode as `None` rather than failing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rhythm {
    /// Module identifier.
    #[serde(rename = "rhythmId", default)]
    pub id: Option<i32>,

    /// Module position within the layout.
    #[serde(rename = "rhythmPos", default)]
    pub position: Option<RhythmPosition>,

    /// Whether a module is attached.
    #[serde(rename = "rhythmConnected", default)]
    pub connected: bool,

    /// Whether the auxiliary (line-in) input is available.
    #[serde(default)]
    pub aux_available: Option<bool>,

    /// Whether the module is actively driving the panels.
    #[serde(rename = "rhythmActive", default)]
    pub active: bool,

    /// Microphone/aux mode.
    #[serde(rename = "rhythmMode", default)]
    pub mode: Option<i32>,

    /// Module hardware version.
    #[serde(default)]
    pub hardware_version: Option<String>,

    /// Module firmware version.
    #[serde(default)]
    pub firmware_version: Option<String>,
}

/// Rhythm-module position and orientation.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RhythmPosition {
    /// X coordinate in millimeters.
    #[serde(default)]
    pub x: f64,

    /// Y coordinate in millimeters.
    #[serde(default)]
    pub y: f64,

    /// Orientation in degrees.
    #[serde(default)]
    pub o: f64,
}
