// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `effect` subcommand: list, select, and display effects.

use clap::{Args, Subcommand};

use leafctl::protocol::HttpTransport;
use leafctl::{EffectFrame, PanelClient};

#[derive(Args, Debug)]
pub struct EffectArgs {
    #[command(subcommand)]
    pub action: EffectAction,
}

#[derive(Subcommand, Debug)]
pub enum EffectAction {
    /// List the effects stored on the panel
    List,

    /// Activate a stored effect by name
    Select {
        /// Effect name, as shown by `effect list`
        name: String,
    },

    /// Display a custom effect, one frame per group of five values
    Custom {
        /// <panelId> <red> <green> <blue> <transitionTime>, repeated
        #[arg(value_name = "VALUE", num_args = 5.., required = true)]
        values: Vec<String>,
    },
}

pub async fn run(client: &PanelClient<HttpTransport>, args: EffectArgs) -> anyhow::Result<()> {
    match args.action {
        EffectAction::List => {
            for name in client.list_effects().await? {
                println!("{name}");
            }
        }
        EffectAction::Select { name } => client.select_effect(&name).await?,
        EffectAction::Custom { values } => {
            let frames = parse_frames(&values)?;
            client.set_custom_effect(&frames).await?;
        }
    }

    Ok(())
}

/// Parses command-line values into effect frames, five values per frame.
fn parse_frames(values: &[String]) -> anyhow::Result<Vec<EffectFrame>> {
    if values.len() % 5 != 0 {
        anyhow::bail!(
            "custom effect values come in groups of five: <panelId> <red> <green> <blue> <transitionTime>"
        );
    }

    let mut frames = Vec::with_capacity(values.len() / 5);
    for group in values.chunks_exact(5) {
        let panel_id = parse_value(&group[0], "panel ID", u64::from(u16::MAX))?;
        let red = parse_value(&group[1], "red", u64::from(u8::MAX))?;
        let green = parse_value(&group[2], "green", u64::from(u8::MAX))?;
        let blue = parse_value(&group[3], "blue", u64::from(u8::MAX))?;
        let transition = parse_value(&group[4], "transition time", u64::from(u16::MAX))?;

        frames.push(EffectFrame::new(panel_id, red, green, blue, transition));
    }

    Ok(frames)
}

fn parse_value<T: std::str::FromStr>(raw: &str, field: &str, max: u64) -> anyhow::Result<T> {
    raw.parse()
        .map_err(|_| anyhow::anyhow!("expected {field} between 0 and {max}, got '{raw}'"))
}
