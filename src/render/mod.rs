// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Software rendering of comparison figures and the rotation animation

mod animation;
mod bar_chart;
mod camera;
mod canvas;
mod figures;
mod font;
mod palette;

pub use animation::{build_rotation_gif, encode_gif, frame_azimuths, render_rotation_frames, FRAME_COUNT};
pub use bar_chart::{nice_step, plot_metrics_bars, render_metrics_bars, CATEGORIES};
pub use camera::{Camera, Projector, Viewport};
pub use canvas::Canvas;
pub use figures::{
    counts_title, draw_mesh, plot_grid, render_grid, render_panel, PanelSource, PanelStyle, PlotOptions,
    GRID_CAMERA, MAX_NORMAL_VECTORS, PANEL_HEIGHT, PANEL_WIDTH,
};
pub use font::{draw_text, text_width};
pub use palette::{color_for_label, series_color};

pub const SOLID_FIGURE: &str = "format_comparison.png";
pub const WIREFRAME_FIGURE: &str = "wireframe_comparison.png";
pub const NORMALS_FIGURE: &str = "normals_comparison.png";
pub const BAR_CHART_FIGURE: &str = "metrics_bar.png";
pub const ROTATION_GIF: &str = "rotation.gif";
