// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Side-by-side mesh panels: solid, wireframe and face normals

use super::camera::{Camera, Viewport};
use super::canvas::{shade, Canvas, BACKGROUND, INK};
use super::font::draw_text_centered;
use super::palette::color_for_label;
use crate::config::Config;
use crate::error::{MeshError, MeshResult};
use crate::geometry::{sample_indices, Mesh};
use crate::io::LoadedMesh;
use image::Rgb;
use nalgebra::Vector2;
use rayon::prelude::*;
use std::path::Path;

pub const PANEL_WIDTH: u32 = 500;
pub const PANEL_HEIGHT: u32 = 440;
pub const FIGURE_TITLE_HEIGHT: u32 = 40;
const PANEL_TITLE_HEIGHT: u32 = 36;

/// Most normal vectors drawn per panel
pub const MAX_NORMAL_VECTORS: usize = 900;

/// Normal length as a fraction of the bounding diagonal
const NORMAL_LENGTH_RATIO: f64 = 0.03;

/// View used by the static grid figures
pub const GRID_CAMERA: Camera = Camera {
    elevation: 30.0,
    azimuth: -60.0,
};

/// How a panel draws its mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelStyle {
    Solid,
    Wireframe,
    Normals,
}

/// Sampling limits shared by every figure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotOptions {
    pub max_faces: usize,
    pub sample_seed: u64,
    pub normals_seed: u64,
}

impl PlotOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_faces: config.max_plot_faces,
            sample_seed: config.sample_seed,
            normals_seed: config.normals_seed,
        }
    }
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// A mesh and the label that picks its color
#[derive(Debug, Clone, Copy)]
pub struct PanelSource<'a> {
    pub label: &'a str,
    pub mesh: &'a Mesh,
}

impl<'a> From<&'a LoadedMesh> for PanelSource<'a> {
    fn from(loaded: &'a LoadedMesh) -> Self {
        Self {
            label: loaded.format.label(),
            mesh: &loaded.mesh,
        }
    }
}

/// Draw a mesh into `viewport`, down-sampled to `options.max_faces` faces
pub fn draw_mesh(
    canvas: &mut Canvas,
    mesh: &Mesh,
    color: Rgb<u8>,
    style: PanelStyle,
    camera: &Camera,
    viewport: Viewport,
    options: &PlotOptions,
) {
    let sampled = mesh.downsample(options.max_faces, options.sample_seed);
    let bounds = sampled.bounding_box();
    let projector = camera.projector(&bounds, viewport);

    match style {
        PanelStyle::Solid => {
            let projected: Vec<Vector2<f32>> = sampled.vertices.iter().map(|p| projector.project(p)).collect();
            let depths: Vec<f32> = sampled.vertices.iter().map(|p| projector.depth(p)).collect();
            let light = projector.view_direction();

            for triangle in &sampled.triangles {
                let intensity = sampled.face_normal(triangle).dot(&light).abs() as f32;
                canvas.rasterize_triangle(
                    triangle.indices.map(|i| projected[i]),
                    triangle.indices.map(|i| depths[i]),
                    shade(color, 0.35 + 0.65 * intensity),
                );
            }
        }
        PanelStyle::Wireframe => {
            for [a, b] in sampled.unique_edges() {
                canvas.draw_line(
                    projector.project(&sampled.vertices[a]),
                    projector.project(&sampled.vertices[b]),
                    color,
                );
            }
        }
        PanelStyle::Normals => {
            let centers = sampled.triangle_centers();
            let normals = sampled.face_normals();
            let length = match bounds.diagonal() * NORMAL_LENGTH_RATIO {
                l if l > 0.0 => l,
                _ => 1.0,
            };

            for i in sample_indices(centers.len(), MAX_NORMAL_VECTORS, options.normals_seed) {
                let tip = centers[i] + normals[i] * length;
                canvas.draw_line(projector.project(&centers[i]), projector.project(&tip), color);
            }
        }
    }
}

/// One titled panel
pub fn render_panel(
    source: PanelSource<'_>,
    title: &str,
    style: PanelStyle,
    camera: &Camera,
    options: &PlotOptions,
) -> Canvas {
    let mut canvas = Canvas::new(PANEL_WIDTH, PANEL_HEIGHT, BACKGROUND);
    draw_text_centered(&mut canvas, (PANEL_WIDTH / 2) as i32, 12, title, 2, INK);

    let viewport = Viewport {
        x: 0.0,
        y: PANEL_TITLE_HEIGHT as f32,
        width: PANEL_WIDTH as f32,
        height: (PANEL_HEIGHT - PANEL_TITLE_HEIGHT) as f32,
    };
    draw_mesh(
        &mut canvas,
        source.mesh,
        color_for_label(source.label),
        style,
        camera,
        viewport,
        options,
    );
    canvas
}

/// Panels side by side under a figure title. `panel_title` names each panel.
pub fn render_grid(
    sources: &[PanelSource<'_>],
    title: &str,
    style: PanelStyle,
    camera: &Camera,
    options: &PlotOptions,
    panel_title: impl Fn(&PanelSource<'_>) -> String + Sync,
) -> Canvas {
    let width = PANEL_WIDTH * sources.len().max(1) as u32;
    let mut figure = Canvas::new(width, FIGURE_TITLE_HEIGHT + PANEL_HEIGHT, BACKGROUND);
    draw_text_centered(&mut figure, (width / 2) as i32, 10, title, 3, INK);

    let panels: Vec<Canvas> = sources
        .par_iter()
        .map(|source| render_panel(*source, &panel_title(source), style, camera, options))
        .collect();

    for (i, panel) in panels.iter().enumerate() {
        figure.blit(panel, i as i64 * PANEL_WIDTH as i64, FIGURE_TITLE_HEIGHT as i64);
    }
    figure
}

/// Per-panel title with vertex and face counts
pub fn counts_title(source: &PanelSource<'_>) -> String {
    format!(
        "{}  V={} F={}",
        source.label,
        source.mesh.vertex_count(),
        source.mesh.triangle_count()
    )
}

/// Render a grid figure and save it as PNG
pub fn plot_grid(
    meshes: &[LoadedMesh],
    style: PanelStyle,
    title: &str,
    options: &PlotOptions,
    output: &Path,
) -> MeshResult<()> {
    let sources: Vec<PanelSource<'_>> = meshes.iter().map(PanelSource::from).collect();
    let figure = render_grid(&sources, title, style, &GRID_CAMERA, options, counts_title);
    save_png(figure, output)
}

pub(crate) fn save_png(canvas: Canvas, output: &Path) -> MeshResult<()> {
    canvas
        .into_image()
        .save(output)
        .map_err(|e| MeshError::render(output, e))
}
