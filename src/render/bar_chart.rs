// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Grouped bar chart of per-mesh counts

use super::canvas::{Canvas, BACKGROUND, INK};
use super::figures::save_png;
use super::font::{draw_text, draw_text_centered, text_width, GLYPH_HEIGHT};
use super::palette::series_color;
use crate::error::MeshResult;
use crate::metrics::MeshMetrics;
use image::Rgb;
use std::path::Path;

pub const CHART_WIDTH: u32 = 1200;
pub const CHART_HEIGHT: u32 = 500;

/// Category labels, matching `MeshMetrics::bar_values`
pub const CATEGORIES: [&str; 5] = ["Vertices", "Faces", "Edges", "Duplicates", "Vertex normals"];

const TITLE: &str = "Quantitative comparison by format";

const MARGIN_LEFT: i32 = 90;
const MARGIN_RIGHT: i32 = 30;
const MARGIN_TOP: i32 = 60;
const MARGIN_BOTTOM: i32 = 50;

const GRID_COLOR: Rgb<u8> = Rgb([225, 225, 225]);

/// Tick spacing of 1, 2 or 5 times a power of ten, at least 1
pub fn nice_step(max_value: f64, target_ticks: u32) -> f64 {
    let raw = max_value / target_ticks.max(1) as f64;
    if raw <= 1.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Render the chart for records in display order
pub fn render_metrics_bars(metrics: &[MeshMetrics]) -> Canvas {
    let mut canvas = Canvas::new(CHART_WIDTH, CHART_HEIGHT, BACKGROUND);
    draw_text_centered(&mut canvas, (CHART_WIDTH / 2) as i32, 16, TITLE, 3, INK);

    let plot_left = MARGIN_LEFT;
    let plot_right = CHART_WIDTH as i32 - MARGIN_RIGHT;
    let plot_top = MARGIN_TOP;
    let plot_bottom = CHART_HEIGHT as i32 - MARGIN_BOTTOM;
    let plot_width = (plot_right - plot_left) as f64;
    let plot_height = (plot_bottom - plot_top) as f64;

    let max_value = metrics
        .iter()
        .flat_map(|m| m.bar_values())
        .max()
        .unwrap_or(0)
        .max(1) as f64;
    let step = nice_step(max_value, 5);
    let y_max = (max_value / step).ceil() * step;
    let to_y = |value: f64| plot_bottom - (value / y_max * plot_height).round() as i32;

    // Horizontal grid lines and tick labels
    let mut tick = 0.0;
    while tick <= y_max + step * 0.5 {
        let y = to_y(tick);
        canvas.fill_rect(plot_left, y, (plot_right - plot_left) as u32, 1, GRID_COLOR);
        let label = format!("{}", tick as u64);
        let x = plot_left - 8 - text_width(&label, 1) as i32;
        draw_text(&mut canvas, x, y - (GLYPH_HEIGHT / 2) as i32, &label, 1, INK);
        tick += step;
    }
    draw_text(&mut canvas, 8, plot_top - 24, "Count", 2, INK);

    // Bars: each group spans one unit, bars fill 0.8 of it
    let group_width = plot_width / CATEGORIES.len() as f64;
    let bar_width = 0.8 / metrics.len().max(1) as f64;
    for (series, item) in metrics.iter().enumerate() {
        let color = series_color(series);
        for (category, value) in item.bar_values().into_iter().enumerate() {
            let left = category as f64 + 0.5 - 0.4 + series as f64 * bar_width;
            let x0 = plot_left + (left * group_width).round() as i32;
            let x1 = plot_left + ((left + bar_width) * group_width).round() as i32;
            let top = to_y(value as f64);
            canvas.fill_rect(x0, top, (x1 - x0).max(1) as u32, (plot_bottom - top) as u32, color);
        }
    }

    // Axes
    canvas.fill_rect(plot_left, plot_top, 1, (plot_bottom - plot_top) as u32, INK);
    canvas.fill_rect(plot_left, plot_bottom, (plot_right - plot_left) as u32, 1, INK);

    for (category, label) in CATEGORIES.iter().enumerate() {
        let center = plot_left + ((category as f64 + 0.5) * group_width).round() as i32;
        draw_text_centered(&mut canvas, center, plot_bottom + 14, label, 2, INK);
    }

    // Legend in the top-right corner of the plot
    let legend_x = plot_right - 160;
    for (series, item) in metrics.iter().enumerate() {
        let y = plot_top + 10 + series as i32 * 22;
        canvas.fill_rect(legend_x, y, 24, 14, series_color(series));
        draw_text(&mut canvas, legend_x + 32, y, item.format.label(), 2, INK);
    }

    canvas
}

/// Render the chart and save it as PNG
pub fn plot_metrics_bars(metrics: &[MeshMetrics], output: &Path) -> MeshResult<()> {
    save_png(render_metrics_bars(metrics), output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Primitive;
    use crate::io::{LoadedMesh, MeshFormat};
    use crate::metrics::extract_metrics;
    use std::path::PathBuf;

    #[test]
    fn test_nice_step() {
        assert_eq!(nice_step(3.0, 5), 1.0);
        assert_eq!(nice_step(36.0, 5), 10.0);
        assert_eq!(nice_step(12_000.0, 5), 5_000.0);
        assert_eq!(nice_step(800.0, 5), 200.0);
    }

    #[test]
    fn test_chart_draws_series_colors() {
        let metrics: Vec<_> = [MeshFormat::Obj, MeshFormat::Stl]
            .into_iter()
            .map(|format| {
                extract_metrics(&LoadedMesh {
                    path: PathBuf::from(format!("cube.{}", format.extension())),
                    format,
                    mesh: Primitive::indexed_cube(1.0).to_mesh(),
                })
            })
            .collect();

        let canvas = render_metrics_bars(&metrics);
        assert_eq!(canvas.width(), CHART_WIDTH);
        assert_eq!(canvas.height(), CHART_HEIGHT);
        for series in 0..2 {
            assert!(canvas.image().pixels().any(|p| *p == series_color(series)));
        }
    }
}
