// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Turntable GIF of every mesh's solid view

use super::camera::Camera;
use super::figures::{render_grid, PanelSource, PanelStyle, PlotOptions};
use crate::error::{MeshError, MeshResult};
use crate::io::LoadedMesh;
use gif::{Encoder, Frame, Repeat};
use image::RgbImage;
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const FRAME_COUNT: usize = 48;
pub const ELEVATION: f64 = 22.0;
/// Delay between frames in hundredths of a second
pub const FRAME_DELAY: u16 = 7;

const TITLE: &str = "Rotation";
/// NeuQuant speed passed to the GIF quantizer
const QUANTIZE_SPEED: i32 = 10;

/// Evenly spaced azimuths over a full turn, excluding 360
pub fn frame_azimuths(count: usize) -> Vec<f64> {
    (0..count).map(|i| 360.0 * i as f64 / count as f64).collect()
}

/// Render one image per azimuth
pub fn render_rotation_frames(meshes: &[LoadedMesh], options: &PlotOptions, count: usize) -> Vec<RgbImage> {
    let sources: Vec<PanelSource<'_>> = meshes.iter().map(PanelSource::from).collect();
    frame_azimuths(count)
        .into_par_iter()
        .map(|azimuth| {
            let camera = Camera::new(ELEVATION, azimuth);
            render_grid(&sources, TITLE, PanelStyle::Solid, &camera, options, |s| {
                s.label.to_string()
            })
            .into_image()
        })
        .collect()
}

/// Encode frames as an infinitely looping GIF
pub fn encode_gif(frames: &[RgbImage], output: &Path) -> MeshResult<()> {
    let Some(first) = frames.first() else {
        return Err(MeshError::render(output, "no frames to encode"));
    };
    let width = u16::try_from(first.width()).map_err(|_| MeshError::render(output, "frame too wide for GIF"))?;
    let height = u16::try_from(first.height()).map_err(|_| MeshError::render(output, "frame too tall for GIF"))?;

    // Palette quantization is the slow part; do it per frame in parallel
    let encoded: Vec<Frame<'static>> = frames
        .par_iter()
        .map(|image| {
            let mut frame = Frame::from_rgb_speed(width, height, image.as_raw(), QUANTIZE_SPEED);
            frame.delay = FRAME_DELAY;
            frame
        })
        .collect();

    let file = BufWriter::new(File::create(output)?);
    let mut encoder = Encoder::new(file, width, height, &[]).map_err(|e| MeshError::render(output, e))?;
    encoder
        .set_repeat(Repeat::Infinite)
        .map_err(|e| MeshError::render(output, e))?;
    for frame in &encoded {
        encoder.write_frame(frame).map_err(|e| MeshError::render(output, e))?;
    }
    encoder.into_inner()?.flush()?;
    Ok(())
}

/// Render and write the rotation animation
pub fn build_rotation_gif(meshes: &[LoadedMesh], options: &PlotOptions, output: &Path) -> MeshResult<()> {
    let frames = render_rotation_frames(meshes, options, FRAME_COUNT);
    encode_gif(&frames, output)
}
