// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Run configuration and detected capabilities

use crate::cli::Runner;
use crate::geometry::{DEFAULT_NORMALS_SEED, DEFAULT_SAMPLE_SEED};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default cap on faces drawn per panel
pub const DEFAULT_MAX_PLOT_FACES: usize = 12_000;

/// Run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory scanned for input models
    pub models_dir: PathBuf,
    /// Output directory for figures and the animation
    pub media_dir: PathBuf,
    /// Output directory for converted meshes
    pub converted_dir: PathBuf,
    /// Output directory for the CSV/JSON reports
    pub report_dir: PathBuf,
    /// Faces drawn per panel before down-sampling kicks in
    pub max_plot_faces: usize,
    /// Whether to encode the rotation GIF
    pub build_gif: bool,
    /// Cross-check with the secondary mesh library
    pub with_secondary: bool,
    /// Query the external inspection tool
    pub with_external_info: bool,
    /// Verbose output
    pub verbose: bool,
    /// Seed for face down-sampling
    pub sample_seed: u64,
    /// Seed for normal-vector down-sampling
    pub normals_seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            models_dir: PathBuf::from("models"),
            media_dir: PathBuf::from("media"),
            converted_dir: PathBuf::from("converted_models"),
            report_dir: PathBuf::from("."),
            max_plot_faces: DEFAULT_MAX_PLOT_FACES,
            build_gif: true,
            with_secondary: false,
            with_external_info: false,
            verbose: false,
            sample_seed: DEFAULT_SAMPLE_SEED,
            normals_seed: DEFAULT_NORMALS_SEED,
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load an optional config file, then apply environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `MESHSCOPE_*` overrides read through `lookup`
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(models_dir) = lookup("MESHSCOPE_MODELS_DIR") {
            self.models_dir = PathBuf::from(models_dir);
        }

        if let Some(media_dir) = lookup("MESHSCOPE_MEDIA_DIR") {
            self.media_dir = PathBuf::from(media_dir);
        }

        if let Some(max_faces) = lookup("MESHSCOPE_MAX_PLOT_FACES") {
            self.max_plot_faces = max_faces
                .trim()
                .parse()
                .with_context(|| format!("Invalid MESHSCOPE_MAX_PLOT_FACES: {max_faces:?}"))?;
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }
}

/// Optional integrations, resolved once at startup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// Secondary mesh library compiled in
    pub secondary_library: bool,
    /// Location of the external inspection tool
    pub external_tool: Option<PathBuf>,
}

impl Capabilities {
    pub fn detect() -> Self {
        Self {
            secondary_library: cfg!(feature = "secondary"),
            external_tool: Runner::locate().map(|runner| runner.program().to_path_buf()),
        }
    }

    /// No optional integrations at all
    pub fn none() -> Self {
        Self::default()
    }
}
