// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Indexed primitive meshes used for fixtures and benchmarks

use super::{Mesh, Triangle};
use nalgebra::Point3;
use std::f64::consts::PI;

/// Geometric primitives
pub enum Primitive {
    /// Axis-aligned cube centred on the origin, 8 shared vertices
    Cube { size: f64 },
    /// Latitude/longitude sphere with a UV seam
    Sphere { r: f64, segments: u32 },
    /// Flat square grid in the XY plane (open surface)
    Plane { size: f64, divisions: u32 },
}

impl Primitive {
    pub fn indexed_cube(size: f64) -> Self {
        Self::Cube { size }
    }

    pub fn uv_sphere(r: f64, segments: u32) -> Self {
        let segments = if segments >= 3 { segments } else { 32 };
        Self::Sphere { r, segments }
    }

    pub fn plane(size: f64, divisions: u32) -> Self {
        Self::Plane {
            size,
            divisions: divisions.max(1),
        }
    }

    pub fn to_mesh(&self) -> Mesh {
        match self {
            Self::Cube { size } => generate_cube_mesh(*size),
            Self::Sphere { r, segments } => generate_sphere_mesh(*r, *segments),
            Self::Plane { size, divisions } => generate_plane_mesh(*size, *divisions),
        }
    }
}

fn generate_cube_mesh(size: f64) -> Mesh {
    let h = size / 2.0;

    let positions = vec![
        Point3::new(-h, -h, -h),
        Point3::new(h, -h, -h),
        Point3::new(h, h, -h),
        Point3::new(-h, h, -h),
        Point3::new(-h, -h, h),
        Point3::new(h, -h, h),
        Point3::new(h, h, h),
        Point3::new(-h, h, h),
    ];

    // Outward winding
    let faces = [
        [4, 5, 6],
        [4, 6, 7],
        [1, 0, 3],
        [1, 3, 2],
        [5, 1, 2],
        [5, 2, 6],
        [0, 4, 7],
        [0, 7, 3],
        [7, 6, 2],
        [7, 2, 3],
        [0, 1, 5],
        [0, 5, 4],
    ];

    Mesh::from_parts(positions, faces.into_iter().map(Triangle::new).collect())
}

fn generate_sphere_mesh(radius: f64, segments: u32) -> Mesh {
    let stacks = segments;
    let slices = segments;
    let mut mesh = Mesh::with_capacity(
        ((stacks + 1) * (slices + 1)) as usize,
        (stacks * slices * 2) as usize,
    );
    let mut uvs = Vec::with_capacity(mesh.vertices.capacity());

    for i in 0..=stacks {
        let v = i as f64 / stacks as f64;
        let phi = PI * v;
        let z = radius * phi.cos();
        let r = radius * phi.sin();

        for j in 0..=slices {
            let u = j as f64 / slices as f64;
            let theta = 2.0 * PI * u;
            mesh.add_vertex(Point3::new(r * theta.cos(), r * theta.sin(), z));
            uvs.push([u, 1.0 - v]);
        }
    }

    let row = slices as usize + 1;
    for i in 0..stacks as usize {
        for j in 0..slices as usize {
            let a = i * row + j;
            let b = a + row;
            // Skip the zero-area triangles at the poles
            if i != 0 {
                mesh.add_triangle(Triangle::new([a, b, a + 1]));
            }
            if i != stacks as usize - 1 {
                mesh.add_triangle(Triangle::new([a + 1, b, b + 1]));
            }
        }
    }

    mesh.uvs = Some(uvs);
    mesh
}

fn generate_plane_mesh(size: f64, divisions: u32) -> Mesh {
    let n = divisions as usize;
    let step = size / divisions as f64;
    let mut mesh = Mesh::with_capacity((n + 1) * (n + 1), n * n * 2);

    for y in 0..=n {
        for x in 0..=n {
            mesh.add_vertex(Point3::new(x as f64 * step, y as f64 * step, 0.0));
        }
    }

    for y in 0..n {
        for x in 0..n {
            let a = y * (n + 1) + x;
            let b = a + n + 1;
            mesh.add_triangle(Triangle::new([a, a + 1, b + 1]));
            mesh.add_triangle(Triangle::new([a, b + 1, b]));
        }
    }

    mesh
}
