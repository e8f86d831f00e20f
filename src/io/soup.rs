// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Raw triangle-soup readers.
//!
//! These read a file a second time without any of the loader's
//! normalization, so metrics from an independent mesh library can be
//! compared against the primary ones.

use super::import_gltf::{open_document, triangulate};
use super::MeshFormat;
use crate::error::{MeshError, MeshResult};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Positions and index triples exactly as stored in the file
#[derive(Debug, Clone, Default)]
pub struct TriangleSoup {
    pub positions: Vec<[f32; 3]>,
    pub indices: Vec<[u32; 3]>,
    /// Whether the file stores per-vertex normals
    pub has_vertex_normals: bool,
}

/// Read the raw geometry of any supported file
pub fn read_triangle_soup(path: &Path) -> MeshResult<TriangleSoup> {
    match MeshFormat::from_path(path) {
        Some(MeshFormat::Obj) => read_obj(path),
        Some(MeshFormat::Stl) => read_stl(path),
        Some(MeshFormat::Glb | MeshFormat::Gltf) => read_gltf(path),
        None => Err(MeshError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

fn read_stl(path: &Path) -> MeshResult<TriangleSoup> {
    let mut reader = BufReader::new(File::open(path)?);
    let triangles = stl_io::create_stl_reader(&mut reader).map_err(|e| MeshError::parse(path, e))?;

    let mut soup = TriangleSoup::default();
    for triangle in triangles {
        let triangle = triangle.map_err(|e| MeshError::parse(path, e))?;
        let base = soup.positions.len() as u32;
        for vertex in triangle.vertices {
            soup.positions.push([vertex[0], vertex[1], vertex[2]]);
        }
        soup.indices.push([base, base + 1, base + 2]);
    }
    Ok(soup)
}

fn read_obj(path: &Path) -> MeshResult<TriangleSoup> {
    let (models, _materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: false,
            ignore_points: true,
            ignore_lines: true,
            ..Default::default()
        },
    )
    .map_err(|e| MeshError::parse(path, e))?;

    let mut soup = TriangleSoup::default();
    for model in &models {
        let obj = &model.mesh;
        let base = soup.positions.len() as u32;
        soup.positions.extend(obj.positions.chunks_exact(3).map(|c| [c[0], c[1], c[2]]));
        soup.indices.extend(
            obj.indices
                .chunks_exact(3)
                .map(|c| [base + c[0], base + c[1], base + c[2]]),
        );
        soup.has_vertex_normals |= !obj.normals.is_empty();
    }
    Ok(soup)
}

fn read_gltf(path: &Path) -> MeshResult<TriangleSoup> {
    let (document, buffers) = open_document(path)?;

    let mut soup = TriangleSoup::default();
    for mesh in document.meshes() {
        for primitive in mesh.primitives() {
            let reader = primitive.reader(|buffer| {
                buffers.get(buffer.index()).map(|data| data.0.as_slice())
            });
            let Some(positions) = reader.read_positions() else {
                continue;
            };
            let positions: Vec<[f32; 3]> = positions.collect();
            let indices: Vec<usize> = match reader.read_indices() {
                Some(indices) => indices.into_u32().map(|i| i as usize).collect(),
                None => (0..positions.len()).collect(),
            };
            let Some(triangles) = triangulate(primitive.mode(), &indices) else {
                continue;
            };
            if triangles.iter().flatten().any(|&i| i >= positions.len()) {
                return Err(MeshError::parse(path, "primitive index out of range"));
            }

            let base = soup.positions.len() as u32;
            soup.positions.extend(positions);
            soup.indices
                .extend(triangles.into_iter().map(|t| t.map(|i| base + i as u32)));
            soup.has_vertex_normals |= reader.read_normals().is_some();
        }
    }
    Ok(soup)
}
