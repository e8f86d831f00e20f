// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! GLTF/GLB importer

use crate::error::{MeshError, MeshResult};
use crate::geometry::Mesh;
use gltf::buffer::Data;
use gltf::mesh::Mode;
use nalgebra::{Matrix4, Point3};
use std::path::Path;

/// Open a glTF document and resolve its buffers (GLB blob, data URIs or
/// external `.bin` files next to the document).
pub(crate) fn open_document(path: &Path) -> MeshResult<(gltf::Document, Vec<Data>)> {
    let gltf::Gltf { document, blob } =
        gltf::Gltf::open(path).map_err(|e| MeshError::parse(path, e))?;
    let buffers = gltf::import_buffers(&document, path.parent(), blob)
        .map_err(|e| MeshError::parse(path, e))?;
    Ok((document, buffers))
}

/// Read every triangle primitive of the default scene into one mesh, with
/// node transforms applied. Documents without scenes contribute all meshes
/// untransformed.
pub fn import(path: &Path) -> MeshResult<Mesh> {
    let (document, buffers) = open_document(path)?;
    let mut mesh = Mesh::new();

    match document.default_scene().or_else(|| document.scenes().next()) {
        Some(scene) => {
            for node in scene.nodes() {
                append_node(&mut mesh, path, &node, &Matrix4::identity(), &buffers)?;
            }
        }
        None => {
            for gltf_mesh in document.meshes() {
                append_mesh(&mut mesh, path, &gltf_mesh, &Matrix4::identity(), &buffers)?;
            }
        }
    }

    if mesh.triangles.is_empty() {
        return Err(MeshError::shape(
            path,
            "document has no triangle primitives",
        ));
    }

    Ok(mesh)
}

fn append_node(
    mesh: &mut Mesh,
    path: &Path,
    node: &gltf::Node,
    parent: &Matrix4<f64>,
    buffers: &[Data],
) -> MeshResult<()> {
    let local = node.transform().matrix();
    let world = parent * Matrix4::from_fn(|row, col| local[col][row] as f64);

    if let Some(gltf_mesh) = node.mesh() {
        append_mesh(mesh, path, &gltf_mesh, &world, buffers)?;
    }
    for child in node.children() {
        append_node(mesh, path, &child, &world, buffers)?;
    }
    Ok(())
}

fn append_mesh(
    mesh: &mut Mesh,
    path: &Path,
    gltf_mesh: &gltf::Mesh,
    transform: &Matrix4<f64>,
    buffers: &[Data],
) -> MeshResult<()> {
    for primitive in gltf_mesh.primitives() {
        let reader = primitive.reader(|buffer| {
            buffers.get(buffer.index()).map(|data| data.0.as_slice())
        });

        let Some(positions) = reader.read_positions() else {
            continue;
        };
        let vertices: Vec<Point3<f64>> = positions
            .map(|[x, y, z]| {
                transform.transform_point(&Point3::new(x as f64, y as f64, z as f64))
            })
            .collect();

        let indices: Vec<usize> = match reader.read_indices() {
            Some(indices) => indices.into_u32().map(|i| i as usize).collect(),
            None => (0..vertices.len()).collect(),
        };

        let Some(triangles) = triangulate(primitive.mode(), &indices) else {
            continue;
        };
        if triangles.iter().flatten().any(|&i| i >= vertices.len()) {
            return Err(MeshError::parse(path, "primitive index out of range"));
        }

        let uvs = reader.read_tex_coords(0).map(|coords| {
            coords
                .into_f32()
                .map(|[u, v]| [u as f64, v as f64])
                .collect::<Vec<_>>()
        });

        mesh.append(vertices, triangles, uvs);
    }
    Ok(())
}

/// Expand an index stream into triangles; `None` for point and line modes
pub(crate) fn triangulate(mode: Mode, indices: &[usize]) -> Option<Vec<[usize; 3]>> {
    let triangles = match mode {
        Mode::Triangles => indices
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect(),
        Mode::TriangleStrip => indices
            .windows(3)
            .enumerate()
            .map(|(i, w)| {
                if i % 2 == 0 {
                    [w[0], w[1], w[2]]
                } else {
                    [w[1], w[0], w[2]]
                }
            })
            .collect(),
        Mode::TriangleFan => indices
            .windows(2)
            .skip(1)
            .map(|w| [indices[0], w[0], w[1]])
            .collect(),
        Mode::Points | Mode::Lines | Mode::LineLoop | Mode::LineStrip => return None,
    };
    Some(triangles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{export_conversions, load_mesh, read_triangle_soup};
    use serde_json::{json, Value};
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Three positions followed by the index triples [0, 1, 2] and [0, 1, 7]
    const BUFFER_DATA_URI: &str = "data:application/octet-stream;base64,\
        AAAAAAAAAAAAAAAAAACAPwAAAAAAAAAAAAAAAAAAgD8AAAAAAAAAAAEAAAACAAAAAAAAAAEAAAAHAAAA";

    fn buffer_bytes() -> Vec<u8> {
        let mut bytes = Vec::new();
        for value in [0.0f32, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0] {
            bytes.extend_from_slice(&value.to_le_bytes());
        }
        for index in [0u32, 1, 2, 0, 1, 7] {
            bytes.extend_from_slice(&index.to_le_bytes());
        }
        bytes
    }

    fn document(uri: &str, nodes: Value, primitives: Value) -> Value {
        json!({
            "asset": { "version": "2.0" },
            "scene": 0,
            "scenes": [{ "nodes": [0] }],
            "nodes": nodes,
            "meshes": [{ "primitives": primitives }],
            "accessors": [
                {
                    "bufferView": 0,
                    "componentType": 5126,
                    "count": 3,
                    "type": "VEC3",
                    "min": [0.0, 0.0, 0.0],
                    "max": [1.0, 1.0, 0.0]
                },
                { "bufferView": 1, "componentType": 5125, "count": 3, "type": "SCALAR" },
                {
                    "bufferView": 1,
                    "byteOffset": 12,
                    "componentType": 5125,
                    "count": 3,
                    "type": "SCALAR"
                }
            ],
            "bufferViews": [
                { "buffer": 0, "byteOffset": 0, "byteLength": 36 },
                { "buffer": 0, "byteOffset": 36, "byteLength": 24 }
            ],
            "buffers": [{ "uri": uri, "byteLength": 60 }]
        })
    }

    fn triangle_primitive(indices: usize) -> Value {
        json!({ "attributes": { "POSITION": 0 }, "indices": indices, "mode": 4 })
    }

    fn write_document(dir: &TempDir, name: &str, document: &Value) -> anyhow::Result<PathBuf> {
        let path = dir.path().join(name);
        std::fs::write(&path, serde_json::to_string_pretty(document)?)?;
        Ok(path)
    }

    #[test]
    fn test_data_uri_buffer_with_translation() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let doc = document(
            BUFFER_DATA_URI,
            json!([{ "mesh": 0, "translation": [10.0, 0.0, 0.0] }]),
            json!([triangle_primitive(1)]),
        );
        let path = write_document(&dir, "tri.gltf", &doc)?;

        let mesh = import(&path)?;
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.bounding_box().min.x, 10.0);
        assert_eq!(mesh.bounding_box().max.x, 11.0);
        Ok(())
    }

    #[test]
    fn test_external_buffer_with_nested_transforms() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        std::fs::write(dir.path().join("tri.bin"), buffer_bytes())?;
        let doc = document(
            "tri.bin",
            json!([
                { "translation": [0.0, 0.0, 5.0], "children": [1] },
                { "mesh": 0, "scale": [2.0, 2.0, 2.0] }
            ]),
            json!([triangle_primitive(1)]),
        );
        let path = write_document(&dir, "nested.gltf", &doc)?;

        let mesh = import(&path)?;
        let bounds = mesh.bounding_box();
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!([bounds.min.x, bounds.min.y, bounds.min.z], [0.0, 0.0, 5.0]);
        assert_eq!([bounds.max.x, bounds.max.y, bounds.max.z], [2.0, 2.0, 5.0]);
        Ok(())
    }

    #[test]
    fn test_points_only_asset_is_rejected() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        std::fs::write(dir.path().join("tri.bin"), buffer_bytes())?;
        let doc = document(
            "tri.bin",
            json!([{ "mesh": 0 }]),
            json!([{ "attributes": { "POSITION": 0 }, "mode": 0 }]),
        );
        let path = write_document(&dir, "points.gltf", &doc)?;

        let err = import(&path).err();
        assert!(matches!(err, Some(MeshError::UnsupportedMeshShape { .. })));
        Ok(())
    }

    #[test]
    fn test_out_of_range_index_is_a_parse_error() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        std::fs::write(dir.path().join("tri.bin"), buffer_bytes())?;
        let doc = document(
            "tri.bin",
            json!([{ "mesh": 0 }]),
            json!([triangle_primitive(1), triangle_primitive(2)]),
        );
        let path = write_document(&dir, "broken.gltf", &doc)?;

        assert!(matches!(import(&path).err(), Some(MeshError::MeshParse { .. })));
        assert!(matches!(
            read_triangle_soup(&path).err(),
            Some(MeshError::MeshParse { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_gltf_source_converts_to_obj_and_stl_only() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let doc = document(
            BUFFER_DATA_URI,
            json!([{ "mesh": 0 }]),
            json!([triangle_primitive(1)]),
        );
        let path = write_document(&dir, "tri.gltf", &doc)?;

        let loaded = load_mesh(&path)?;
        let written = export_conversions(&[loaded], &dir.path().join("converted"))?;
        let names: Vec<String> = written
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["tri_from_gltf.obj", "tri_from_gltf.stl"]);
        Ok(())
    }

    #[test]
    fn test_triangulate_modes() {
        let indices = [0, 1, 2, 3];
        assert_eq!(triangulate(Mode::Triangles, &indices), Some(vec![[0, 1, 2]]));
        assert_eq!(
            triangulate(Mode::TriangleStrip, &indices),
            Some(vec![[0, 1, 2], [2, 1, 3]])
        );
        assert_eq!(
            triangulate(Mode::TriangleFan, &indices),
            Some(vec![[0, 1, 2], [0, 2, 3]])
        );
        assert_eq!(triangulate(Mode::Points, &indices), None);
    }
}
