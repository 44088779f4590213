/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cfg::cli_options::OutputFormat;

const DEFAULT_CONFIG_FILE: &str = ".config/xclarity_cli.toml";

/// Config is the optional TOML file holding connection defaults.
/// Command-line flags and environment variables take precedence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default = "Defaults::verify_tls")]
    pub verify_tls: bool,
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

pub struct Defaults;

impl Defaults {
    pub fn verify_tls() -> bool {
        true
    }

    pub fn config_path() -> Option<PathBuf> {
        std::env::var_os("HOME").map(|home| PathBuf::from(home).join(DEFAULT_CONFIG_FILE))
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file: {path}: {error}")]
    CouldNotRead { path: String, error: std::io::Error },
    #[error("Invalid TOML in config file: {path}: {error}")]
    InvalidToml {
        path: String,
        error: toml::de::Error,
    },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: None,
            user: None,
            verify_tls: Defaults::verify_tls(),
            format: None,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let cfg = std::fs::read_to_string(path).map_err(|error| ConfigError::CouldNotRead {
            path: path.to_string_lossy().to_string(),
            error,
        })?;
        toml::from_str::<Self>(&cfg).map_err(|error| ConfigError::InvalidToml {
            path: path.to_string_lossy().to_string(),
            error,
        })
    }

    /// Loads the file at the default location, or returns the defaults
    /// when there is none.
    pub fn load_default() -> Result<Self, ConfigError> {
        match Defaults::config_path() {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "Loading config file");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}
