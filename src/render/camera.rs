// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Orthographic view set by elevation and azimuth

use crate::geometry::BoundingBox;
use nalgebra::{Point3, Vector2, Vector3};

/// Rectangle of a canvas in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Orthographic camera looking at the origin. Angles are in degrees; z is up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub elevation: f64,
    pub azimuth: f64,
}

impl Camera {
    pub fn new(elevation: f64, azimuth: f64) -> Self {
        Self { elevation, azimuth }
    }

    /// Unit vectors (right, up, toward-viewer) of the view
    pub fn basis(&self) -> (Vector3<f64>, Vector3<f64>, Vector3<f64>) {
        let (sin_e, cos_e) = self.elevation.to_radians().sin_cos();
        let (sin_a, cos_a) = self.azimuth.to_radians().sin_cos();

        let eye = Vector3::new(cos_e * cos_a, cos_e * sin_a, sin_e);
        let right = Vector3::new(-sin_a, cos_a, 0.0);
        let up = Vector3::new(-sin_e * cos_a, -sin_e * sin_a, cos_e);
        (right, up, eye)
    }

    /// Map world space into `viewport`, framing a cube around `bounds`
    pub fn projector(&self, bounds: &BoundingBox, viewport: Viewport) -> Projector {
        let (right, up, eye) = self.basis();
        let radius = bounds.cube_radius();
        // The cube's diagonal stays inside the viewport at any angle
        let scale = 0.5 * viewport.width.min(viewport.height) as f64 / (radius * 3f64.sqrt());

        Projector {
            right,
            up,
            eye,
            center: bounds.center(),
            scale,
            origin: Vector2::new(
                viewport.x + viewport.width / 2.0,
                viewport.y + viewport.height / 2.0,
            ),
        }
    }
}

/// World-to-pixel transform for one panel
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    right: Vector3<f64>,
    up: Vector3<f64>,
    eye: Vector3<f64>,
    center: Point3<f64>,
    scale: f64,
    origin: Vector2<f32>,
}

impl Projector {
    /// Pixel position of a point
    pub fn project(&self, point: &Point3<f64>) -> Vector2<f32> {
        let d = point - self.center;
        Vector2::new(
            self.origin.x + (d.dot(&self.right) * self.scale) as f32,
            self.origin.y - (d.dot(&self.up) * self.scale) as f32,
        )
    }

    /// Distance toward the viewer; larger is nearer
    pub fn depth(&self, point: &Point3<f64>) -> f32 {
        (point - self.center).dot(&self.eye) as f32
    }

    /// Direction toward the viewer
    pub fn view_direction(&self) -> Vector3<f64> {
        self.eye
    }
}
