// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `leafctl` - command-line control of Nanoleaf light panels.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;

use leafctl::types::{Brightness, ColorTemperature, HslColor, RgbColor};
use leafctl::PanelClient;

mod cmd;
mod config;

#[derive(Parser)]
#[command(name = "leafctl")]
#[command(version, about = "Control Nanoleaf light panels over the local network")]
struct Cli {
    /// Panel name from the config file (defaults to the only configured panel)
    #[arg(short = 'n', long = "panel", global = true)]
    panel: Option<String>,

    /// Path to the config file
    #[arg(short = 'f', long = "config", global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log requests and responses
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Turn the panel on
    On,

    /// Turn the panel off
    Off,

    /// Set hue, saturation, and lightness
    Hsl {
        /// Hue in degrees, 0-360
        #[arg(value_parser = clap::value_parser!(u16).range(0..=360))]
        hue: u16,

        /// Saturation percentage, 0-100
        #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
        saturation: u8,

        /// Lightness percentage, 0-100
        #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
        lightness: u8,
    },

    /// Set an RGB color
    Rgb {
        /// Red component, 0-255
        red: u8,

        /// Green component, 0-255
        green: u8,

        /// Blue component, 0-255
        blue: u8,
    },

    /// Set the white color temperature
    Temp {
        /// Temperature in Kelvin, 1200-6500
        #[arg(value_parser = clap::value_parser!(u16).range(1200..=6500))]
        kelvin: u16,
    },

    /// Set the brightness
    Brightness {
        /// Brightness percentage, 0-100
        #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
        value: u8,
    },

    /// List, select, or display effects
    Effect(cmd::effect::EffectArgs),

    /// Show sections of the panel info document
    Panel(cmd::panel::PanelArgs),

    /// Send a GET request to an API sub-path and print the raw body
    Get {
        /// Path below the API root, for example `state/brightness`
        path: String,
    },
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = config::Config::load(cli.config.as_deref())?;
    let endpoint = config.resolve(cli.panel.as_deref())?;
    let client = PanelClient::http(&endpoint)?;

    match cli.command {
        Commands::On => client.power_on().await?,
        Commands::Off => client.power_off().await?,
        Commands::Hsl {
            hue,
            saturation,
            lightness,
        } => {
            client
                .set_hsl(HslColor::new(hue, saturation, lightness)?)
                .await?;
        }
        Commands::Rgb { red, green, blue } => {
            client.set_rgb(RgbColor::new(red, green, blue)).await?;
        }
        Commands::Temp { kelvin } => {
            client
                .set_color_temperature(ColorTemperature::new(kelvin)?)
                .await?;
        }
        Commands::Brightness { value } => {
            client.set_brightness(Brightness::new(value)?).await?;
        }
        Commands::Effect(args) => cmd::effect::run(&client, args).await?,
        Commands::Panel(args) => cmd::panel::run(&client, args).await?,
        Commands::Get { path } => println!("{}", client.get_raw(&path).await?),
    }

    Ok(())
}
