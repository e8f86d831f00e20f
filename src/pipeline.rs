// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! End-to-end run: discover, load, measure, convert, report, render

use crate::cli::Reporter;
use crate::config::{Capabilities, Config};
use crate::io::{discover_models, export_conversions, load_mesh, LoadedMesh};
use crate::metrics::{enrich_with_external_info, enrich_with_secondary, extract_all, sort_metrics, MeshMetrics};
use crate::render::{
    build_rotation_gif, plot_grid, plot_metrics_bars, PanelStyle, PlotOptions, BAR_CHART_FIGURE, NORMALS_FIGURE,
    ROTATION_GIF, SOLID_FIGURE, WIREFRAME_FIGURE,
};
use crate::report::{print_summary_table, write_metrics_report};
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Instant;

/// Everything a run produced
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Records sorted by (format, file name)
    pub metrics: Vec<MeshMetrics>,
    pub converted: Vec<PathBuf>,
    pub csv_report: PathBuf,
    pub json_report: PathBuf,
    /// PNG figures in the order they were written
    pub figures: Vec<PathBuf>,
    pub animation: Option<PathBuf>,
}

/// Run the whole comparison
pub fn run(config: &Config, capabilities: &Capabilities) -> Result<RunSummary> {
    if config.verbose {
        Reporter::progress(&format!("Scanning {}", config.models_dir.display()));
    }
    let files = discover_models(&config.models_dir).context("Model discovery failed")?;

    let meshes = load_all(&files, config.verbose)?;

    let mut metrics = extract_all(&meshes);
    enrich(&mut metrics, &meshes, config, capabilities);
    sort_metrics(&mut metrics);

    print_summary_table(&metrics);

    let converted = export_conversions(&meshes, &config.converted_dir)
        .with_context(|| format!("Failed to write conversions to {}", config.converted_dir.display()))?;
    Reporter::report_conversions(&converted);

    let (csv_report, json_report) = write_metrics_report(&metrics, &config.report_dir)
        .with_context(|| format!("Failed to write reports to {}", config.report_dir.display()))?;
    Reporter::report_outputs(&csv_report, &json_report);

    std::fs::create_dir_all(&config.media_dir)
        .with_context(|| format!("Failed to create media directory {}", config.media_dir.display()))?;

    let options = PlotOptions::from_config(config);
    let mut figures = Vec::with_capacity(4);
    for (style, title, name) in [
        (PanelStyle::Solid, "Format comparison (solid)", SOLID_FIGURE),
        (PanelStyle::Wireframe, "Format comparison (wireframe)", WIREFRAME_FIGURE),
        (PanelStyle::Normals, "Face normals comparison", NORMALS_FIGURE),
    ] {
        let path = config.media_dir.join(name);
        if config.verbose {
            Reporter::progress(&format!("Rendering {}", path.display()));
        }
        plot_grid(&meshes, style, title, &options, &path)?;
        figures.push(path);
    }

    let bar_chart = config.media_dir.join(BAR_CHART_FIGURE);
    plot_metrics_bars(&metrics, &bar_chart)?;
    figures.push(bar_chart);

    let animation = if config.build_gif {
        let path = config.media_dir.join(ROTATION_GIF);
        if config.verbose {
            Reporter::progress("Rendering rotation frames");
        }
        build_rotation_gif(&meshes, &options, &path)?;
        Reporter::report_animation(&path);
        Some(path)
    } else {
        None
    };

    Ok(RunSummary {
        metrics,
        converted,
        csv_report,
        json_report,
        figures,
        animation,
    })
}

/// Load every file in discovery order
fn load_all(files: &[PathBuf], verbose: bool) -> Result<Vec<LoadedMesh>> {
    let bar = Reporter::progress_bar(files.len(), verbose);
    let mut meshes = Vec::with_capacity(files.len());

    for path in files {
        bar.set_message(path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default());
        let start = Instant::now();
        let loaded = load_mesh(path).with_context(|| format!("Failed to load {}", path.display()))?;
        bar.inc(1);
        if verbose {
            bar.suspend(|| Reporter::report_loaded(&loaded, start.elapsed()));
        }
        meshes.push(loaded);
    }

    bar.finish_and_clear();
    Ok(meshes)
}

/// Apply the requested enrichments; `metrics` and `meshes` share an order here
fn enrich(metrics: &mut [MeshMetrics], meshes: &[LoadedMesh], config: &Config, capabilities: &Capabilities) {
    let secondary = config.with_secondary && capabilities.secondary_library;
    if config.with_secondary && !capabilities.secondary_library {
        Reporter::report_warning("secondary mesh library not compiled in; skipping cross-check");
    }

    let external_tool = if config.with_external_info {
        capabilities.external_tool.as_deref()
    } else {
        None
    };
    if config.with_external_info && external_tool.is_none() {
        Reporter::report_warning("assimp not found in PATH; skipping external info");
    }

    if !secondary && external_tool.is_none() {
        return;
    }

    for (record, mesh) in metrics.iter_mut().zip(meshes) {
        enrich_with_secondary(record, &mesh.path, secondary);
        enrich_with_external_info(record, &mesh.path, external_tool);
    }
}
