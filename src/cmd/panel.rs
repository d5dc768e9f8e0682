// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `panel` subcommand: render sections of the info document.

use std::fmt::Display;

use clap::{Args, Subcommand};

use leafctl::PanelClient;
use leafctl::protocol::HttpTransport;
use leafctl::response::{PanelInfo, PanelLayout, PanelState, Rhythm};
use leafctl::types::RangedValue;

#[derive(Args, Debug)]
pub struct PanelArgs {
    #[command(subcommand)]
    pub section: PanelSection,
}

#[derive(Subcommand, Debug)]
pub enum PanelSection {
    /// Show the full info document
    Info,
    /// Show layout geometry and panel positions
    Layout,
    /// Show the hardware model
    Model,
    /// Show the user-assigned name
    Name,
    /// Show the light state
    State,
    /// Show panel and rhythm firmware versions
    Version,
}

pub async fn run(client: &PanelClient<HttpTransport>, args: PanelArgs) -> anyhow::Result<()> {
    let info = client.panel_info().await?;

    match args.section {
        PanelSection::Info => print_info(&info),
        PanelSection::Layout => print_layout(&info.panel_layout),
        PanelSection::Model => println!("{}", info.model),
        PanelSection::Name => println!("{}", info.name),
        PanelSection::State => print_state(&info.state),
        PanelSection::Version => print_versions(&info),
    }

    Ok(())
}

fn print_info(info: &PanelInfo) {
    println!("Name: {}", info.name);
    println!();
    println!("Manufacturer: {}", info.manufacturer);
    println!("Model:        {}", info.model);
    println!("Serial No:    {}", info.serial_no);
    println!();
    println!("Firmware Version: {}", info.firmware_version);
    println!();
    println!("State:");
    println!("  On:   {}", info.state.on.value);
    println!("  Mode: {}", info.state.color_mode);
    println!();
    println!("  Hue:        {}", ranged(&info.state.hue, "°"));
    println!("  Saturation: {}", ranged(&info.state.saturation, ""));
    println!("  Brightness: {}", ranged(&info.state.brightness, ""));
    println!();
    println!(
        "  Color Temperature: {}",
        ranged(&info.state.color_temperature, "K")
    );
    println!();
    println!("Effects:");
    println!("  Selected: {}", info.effects.selected);
    println!("  Available:");
    for effect in &info.effects.list {
        println!("  - {effect}");
    }
    println!();
    println!("Layout:");
    println!(
        "  Orientation: {}",
        ranged(&info.panel_layout.global_orientation, "°")
    );
    println!("  Panels:      {}", info.panel_layout.layout.num_panels);
    println!("  Side Length: {}", info.panel_layout.layout.side_length);
    println!();
    println!("  Panel Positions:");
    for panel in &info.panel_layout.layout.position_data {
        println!(
            "  - {:3}: ({}, {}, {}°)",
            panel.panel_id, panel.x, panel.y, panel.o
        );
    }
    println!();
    print_rhythm(&info.rhythm);
}

fn print_layout(layout: &PanelLayout) {
    println!("Orientation: {}", ranged(&layout.global_orientation, "°"));
    println!("Panels:      {}", layout.layout.num_panels);
    println!("Side Length: {}", layout.layout.side_length);
    println!();
    println!("Positions:");
    for panel in &layout.layout.position_data {
        println!(
            "- {:3}: ({}, {}, {}°)",
            panel.panel_id, panel.x, panel.y, panel.o
        );
    }
}

fn print_state(state: &PanelState) {
    println!("On:   {}", state.on.value);
    println!("Mode: {}", state.color_mode);
    println!();
    println!("Brightness: {}", ranged(&state.brightness, ""));
    println!("Hue:        {}", ranged(&state.hue, ""));
    println!("Saturation: {}", ranged(&state.saturation, ""));
    println!();
    println!(
        "Color Temperature: {}",
        ranged(&state.color_temperature, "K")
    );
}

fn print_versions(info: &PanelInfo) {
    println!("Panel Firmware: {}", info.firmware_version);
    println!();
    println!("Rhythm:");
    println!("  Hardware: {}", optional(info.rhythm.hardware_version.as_ref()));
    println!("  Firmware: {}", optional(info.rhythm.firmware_version.as_ref()));
}

fn print_rhythm(rhythm: &Rhythm) {
    println!("Rhythm:");
    println!("  ID:       {}", optional(rhythm.id.as_ref()));
    if let Some(pos) = &rhythm.position {
        println!("  Position: ({:.0}, {:.0}, {:.0}°)", pos.x, pos.y, pos.o);
    }
    println!();
    println!("  Connected:     {}", rhythm.connected);
    println!("  Aux Available: {}", optional(rhythm.aux_available.as_ref()));
    println!("  Active:        {}", rhythm.active);
    println!("  Mode:          {}", optional(rhythm.mode.as_ref()));
    println!();
    println!("  Versions:");
    println!("    Hardware: {}", optional(rhythm.hardware_version.as_ref()));
    println!("    Firmware: {}", optional(rhythm.firmware_version.as_ref()));
}

/// Renders a value with its device-reported range, `120° [0°-360°]`.
/// The bracket is omitted when the device reported no bounds.
fn ranged<T: Display + Copy>(value: &RangedValue<T>, unit: &str) -> String {
    match value.bounds() {
        Some((min, max)) => format!("{:3}{unit} [{min}{unit}-{max}{unit}]", value.value),
        None => format!("{:3}{unit}", value.value),
    }
}

/// Renders an absent value as `-`.
fn optional<T: Display>(value: Option<&T>) -> String {
    value.map_or_else(|| "-".to_string(), ToString::to_string)
}
