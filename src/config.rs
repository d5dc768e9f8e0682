// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Configuration file handling for the CLI.
//!
//! Panels are configured in a JSON file listing a name, host, and access
//! token per panel. The file is read once per invocation and resolves to
//! exactly one [`PanelEndpoint`]; there is no global state.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use serde::Deserialize;

use leafctl::PanelEndpoint;

/// Parsed contents of the configuration file.
///
/// ```json
/// {
///   "panels": [
///     {
///       "panel_name": "living-room",
///       "host": "192.168.1.31:16021",
///       "access_token": "5Euks2liarBxGnEC"
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    panels: Vec<PanelRecord>,
}

#[derive(Debug, Clone, Deserialize)]
struct PanelRecord {
    panel_name: String,
    host: String,
    access_token: String,
}

impl Config {
    /// Returns the default configuration file path.
    fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("leafctl");
            path.push("config.json");
            path
        })
    }

    /// Loads the configuration from `path`, or from the default location
    /// when no override was given.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_path().context("could not determine the user config directory")?,
        };

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;

        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Resolves a panel to an endpoint.
    ///
    /// With a name, the match must be exact. Without one, the configuration
    /// must contain exactly one panel.
    ///
    /// # Errors
    ///
    /// Returns an error if no panel matches or the choice is ambiguous.
    pub fn resolve(&self, panel_name: Option<&str>) -> anyhow::Result<PanelEndpoint> {
        let record = match panel_name {
            Some(name) => self
                .panels
                .iter()
                .find(|record| record.panel_name == name)
                .with_context(|| format!("no panel named '{name}' in the configuration"))?,
            None => match self.panels.as_slice() {
                [record] => record,
                [] => bail!("the configuration contains no panels"),
                _ => bail!("multiple panels configured, pick one with --panel"),
            },
        };

        Ok(PanelEndpoint::new(
            &record.panel_name,
            &record.host,
            &record.access_token,
        ))
    }
}
