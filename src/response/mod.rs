// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for panel JSON documents.
//!
//! This module provides structures for deserializing the panel's nested
//! info document and the smaller read responses into typed models.

mod panel_info;

pub use panel_info::{
    Effects, Layout, PanelInfo, PanelLayout, PanelPosition, PanelState, Rhythm, RhythmPosition,
};
