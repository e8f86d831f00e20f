// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! meshscope CLI

use anyhow::Result;
use clap::Parser;
use meshscope::cli::Reporter;
use meshscope::{pipeline, Capabilities, Config};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "meshscope")]
#[command(
    about = "Compare, convert and visualize OBJ/STL/GLB/GLTF meshes",
    long_about = None,
    version
)]
struct Cli {
    /// Directory holding the source models [default: models]
    #[arg(long, value_name = "DIR")]
    models_dir: Option<PathBuf>,

    /// Directory for figures and the rotation GIF [default: media]
    #[arg(long, value_name = "DIR")]
    media_dir: Option<PathBuf>,

    /// Directory for converted meshes [default: converted_models]
    #[arg(long, value_name = "DIR")]
    converted_dir: Option<PathBuf>,

    /// Directory for the CSV/JSON reports [default: .]
    #[arg(long, value_name = "DIR")]
    report_dir: Option<PathBuf>,

    /// Most faces drawn per model in figures (sampled) [default: 12000]
    #[arg(long, value_name = "N")]
    max_plot_faces: Option<usize>,

    /// Do not build the rotation GIF
    #[arg(long)]
    skip_gif: bool,

    /// Cross-check counts with the secondary mesh library
    #[arg(long)]
    with_secondary: bool,

    /// Add the first line of `assimp info` when assimp is installed
    #[arg(long)]
    with_assimp: bool,

    /// TOML configuration file; flags override its values
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Layer command-line flags over file and environment settings
    fn into_config(self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;

        if let Some(dir) = self.models_dir {
            config.models_dir = dir;
        }
        if let Some(dir) = self.media_dir {
            config.media_dir = dir;
        }
        if let Some(dir) = self.converted_dir {
            config.converted_dir = dir;
        }
        if let Some(dir) = self.report_dir {
            config.report_dir = dir;
        }
        if let Some(max_faces) = self.max_plot_faces {
            config.max_plot_faces = max_faces;
        }
        if self.skip_gif {
            config.build_gif = false;
        }
        config.with_secondary |= self.with_secondary;
        config.with_external_info |= self.with_assimp;
        config.verbose |= self.verbose;

        Ok(config)
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        Reporter::report_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.into_config()?;
    let capabilities = Capabilities::detect();

    if config.verbose {
        Reporter::report_info(&format!(
            "secondary library: {}, assimp: {}",
            if capabilities.secondary_library { "available" } else { "not compiled in" },
            capabilities
                .external_tool
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "not found".to_string())
        ));
    }

    let summary = pipeline::run(&config, &capabilities)?;

    if config.verbose {
        Reporter::success(&format!(
            "Processed {} models, wrote {} conversions and {} figures",
            summary.metrics.len(),
            summary.converted.len(),
            summary.figures.len() + usize::from(summary.animation.is_some())
        ));
    }
    Ok(())
}
