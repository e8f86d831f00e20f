// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::io::LoadedMesh;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Report a loaded mesh (verbose mode)
    pub fn report_loaded(mesh: &LoadedMesh, duration: Duration) {
        println!(
            "  {} {} {} {} {} {}",
            mesh.format.label().bold(),
            mesh.file_name().cyan(),
            "V=".bright_black(),
            mesh.mesh.vertex_count().to_string().cyan(),
            "F=".bright_black(),
            format!("{} ({})", mesh.mesh.triangle_count(), Self::format_duration(duration)).cyan()
        );
    }

    /// Report the converted files
    pub fn report_conversions(paths: &[impl AsRef<Path>]) {
        println!("\nConverted files: {}", paths.len());
        for path in paths {
            println!("- {}", path.as_ref().display());
        }
    }

    /// Report where the CSV and JSON reports were written
    pub fn report_outputs(csv: &Path, json: &Path) {
        println!("\nCSV report:  {}", csv.display());
        println!("JSON report: {}", json.display());
    }

    /// Report where the rotation animation was written
    pub fn report_animation(gif: &Path) {
        println!("GIF written to: {}", gif.display());
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report warning
    pub fn report_warning(message: &str) {
        println!("\n{} {}", "⚠️  Warning:".yellow().bold(), message);
    }

    /// Report info
    pub fn report_info(message: &str) {
        println!("{} {}", "ℹ️".bright_blue(), message);
    }

    /// Format duration for display
    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }

    /// Print progress message
    pub fn progress(message: &str) {
        println!("{} {}...", "⏳".bright_blue(), message.bright_black());
    }

    /// Progress bar over `len` items; hidden unless `visible`
    pub fn progress_bar(len: usize, visible: bool) -> ProgressBar {
        if !visible {
            return ProgressBar::hidden();
        }

        let bar = ProgressBar::new(len as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        bar.set_style(style);
        bar
    }

    /// Print success message
    pub fn success(message: &str) {
        println!("{} {}", "✅".green(), message.green());
    }
}
