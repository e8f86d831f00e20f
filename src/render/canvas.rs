// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! RGB raster with a depth buffer and primitive drawing

use image::{Rgb, RgbImage};
use nalgebra::Vector2;

/// Figure background
pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Text and axis color
pub const INK: Rgb<u8> = Rgb([32, 32, 32]);

/// Image plus per-pixel depth for hidden-surface removal
pub struct Canvas {
    image: RgbImage,
    depth_buffer: Vec<f32>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background),
            depth_buffer: vec![f32::NEG_INFINITY; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Set a pixel, ignoring coordinates outside the canvas
    pub fn put(&mut self, x: i32, y: i32, color: Rgb<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height() {
            self.image.put_pixel(x as u32, y as u32, color);
        }
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb<u8>) {
        for dy in 0..height as i32 {
            for dx in 0..width as i32 {
                self.put(x + dx, y + dy, color);
            }
        }
    }

    /// Bresenham line between two points in pixel space
    pub fn draw_line(&mut self, from: Vector2<f32>, to: Vector2<f32>, color: Rgb<u8>) {
        if !(from.x.is_finite() && from.y.is_finite() && to.x.is_finite() && to.y.is_finite()) {
            return;
        }

        let (mut x0, mut y0) = (from.x.round() as i32, from.y.round() as i32);
        let (x1, y1) = (to.x.round() as i32, to.y.round() as i32);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.put(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Fill a triangle, keeping pixels whose interpolated depth is nearest
    pub fn rasterize_triangle(&mut self, points: [Vector2<f32>; 3], depths: [f32; 3], color: Rgb<u8>) {
        let width = self.width() as i32;
        let height = self.height() as i32;

        let min_x = points
            .iter()
            .fold(f32::INFINITY, |acc, p| acc.min(p.x))
            .floor()
            .max(0.0) as i32;
        let max_x = points
            .iter()
            .fold(f32::NEG_INFINITY, |acc, p| acc.max(p.x))
            .ceil()
            .min((width - 1) as f32) as i32;
        let min_y = points
            .iter()
            .fold(f32::INFINITY, |acc, p| acc.min(p.y))
            .floor()
            .max(0.0) as i32;
        let max_y = points
            .iter()
            .fold(f32::NEG_INFINITY, |acc, p| acc.max(p.y))
            .ceil()
            .min((height - 1) as f32) as i32;

        if min_x > max_x || min_y > max_y {
            return;
        }

        let area = edge(points[0], points[1], points[2]);
        if area.abs() < 1e-4 {
            return;
        }
        let inv_area = 1.0 / area;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = Vector2::new(x as f32 + 0.5, y as f32 + 0.5);
                let w0 = edge(points[1], points[2], p);
                let w1 = edge(points[2], points[0], p);
                let w2 = edge(points[0], points[1], p);

                let same_sign = (w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0)
                    || (w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0);

                if !same_sign {
                    continue;
                }

                let depth = (w0 * depths[0] + w1 * depths[1] + w2 * depths[2]) * inv_area;

                let idx = (y as u32 * self.width() + x as u32) as usize;
                if depth > self.depth_buffer[idx] {
                    self.depth_buffer[idx] = depth;
                    self.image.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }

    /// Copy another canvas into this one with its top-left corner at (x, y)
    pub fn blit(&mut self, other: &Canvas, x: i64, y: i64) {
        image::imageops::replace(&mut self.image, &other.image, x, y);
    }
}

fn edge(a: Vector2<f32>, b: Vector2<f32>, p: Vector2<f32>) -> f32 {
    (p.x - a.x) * (b.y - a.y) - (p.y - a.y) * (b.x - a.x)
}

/// Scale a color's brightness by `factor` in 0..=1
pub fn shade(color: Rgb<u8>, factor: f32) -> Rgb<u8> {
    let factor = factor.clamp(0.0, 1.0);
    Rgb(color.0.map(|c| (c as f32 * factor).round() as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_triangle_wins() {
        let mut canvas = Canvas::new(20, 20, BACKGROUND);
        let tri = [
            Vector2::new(0.0, 0.0),
            Vector2::new(20.0, 0.0),
            Vector2::new(0.0, 20.0),
        ];
        canvas.rasterize_triangle(tri, [1.0; 3], Rgb([255, 0, 0]));
        canvas.rasterize_triangle(tri, [0.0; 3], Rgb([0, 0, 255]));

        assert_eq!(*canvas.image().get_pixel(2, 2), Rgb([255, 0, 0]));
        assert_eq!(*canvas.image().get_pixel(19, 19), BACKGROUND);
    }

    #[test]
    fn test_line_endpoints_are_drawn() {
        let mut canvas = Canvas::new(10, 10, BACKGROUND);
        canvas.draw_line(Vector2::new(1.0, 1.0), Vector2::new(8.0, 5.0), INK);
        assert_eq!(*canvas.image().get_pixel(1, 1), INK);
        assert_eq!(*canvas.image().get_pixel(8, 5), INK);
    }

    #[test]
    fn test_out_of_bounds_is_clipped() {
        let mut canvas = Canvas::new(4, 4, BACKGROUND);
        canvas.fill_rect(-2, -2, 10, 10, INK);
        canvas.draw_line(Vector2::new(-5.0, 2.0), Vector2::new(50.0, 2.0), BACKGROUND);
        assert_eq!(*canvas.image().get_pixel(3, 3), INK);
    }

    #[test]
    fn test_shade() {
        assert_eq!(shade(Rgb([200, 100, 0]), 0.5), Rgb([100, 50, 0]));
    }
}
