// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! GLB (binary glTF 2.0) exporter

use crate::geometry::Mesh;
use anyhow::Result;
use serde_json::{json, Value};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const GLB_MAGIC: u32 = 0x4654_6C67; // "glTF"
const CHUNK_JSON: u32 = 0x4E4F_534A; // "JSON"
const CHUNK_BIN: u32 = 0x004E_4942; // "BIN\0"

const COMPONENT_FLOAT: u32 = 5126;
const COMPONENT_UNSIGNED_INT: u32 = 5125;
const TARGET_ARRAY_BUFFER: u32 = 34962;
const TARGET_ELEMENT_ARRAY_BUFFER: u32 = 34963;

/// Export mesh to a single-buffer GLB file
pub fn export(mesh: &Mesh, path: &Path) -> Result<()> {
    let (gltf_json_val, buffer_data) = create_gltf_json(mesh);

    let json_string = serde_json::to_string(&gltf_json_val)?;
    let json_length = align_to_multiple_of_four(json_string.len());
    let json_padding = json_length - json_string.len();

    let buffer_length = align_to_multiple_of_four(buffer_data.len());
    let buffer_padding = buffer_length - buffer_data.len();

    let total_length = 12 + 8 + json_length + 8 + buffer_length;

    let mut file = BufWriter::new(File::create(path)?);

    // GLB header
    file.write_all(&GLB_MAGIC.to_le_bytes())?;
    file.write_all(&2u32.to_le_bytes())?; // version
    file.write_all(&(total_length as u32).to_le_bytes())?;

    // JSON chunk, padded with spaces
    file.write_all(&(json_length as u32).to_le_bytes())?;
    file.write_all(&CHUNK_JSON.to_le_bytes())?;
    file.write_all(json_string.as_bytes())?;
    file.write_all(&b"   "[..json_padding])?;

    // BIN chunk, padded with zeros
    file.write_all(&(buffer_length as u32).to_le_bytes())?;
    file.write_all(&CHUNK_BIN.to_le_bytes())?;
    file.write_all(&buffer_data)?;
    file.write_all(&[0u8; 3][..buffer_padding])?;

    file.flush()?;
    Ok(())
}

/// A region of the binary buffer plus the accessor describing it
struct Section {
    offset: usize,
    length: usize,
    target: u32,
    accessor: Value,
}

fn create_gltf_json(mesh: &Mesh) -> (Value, Vec<u8>) {
    let mut buffer_data = Vec::new();
    let mut sections = Vec::new();
    let mut attributes = serde_json::Map::new();
    let vertex_count = mesh.vertex_count();

    // Positions
    let offset = buffer_data.len();
    for v in &mesh.vertices {
        push_f32s(&mut buffer_data, &[v.x, v.y, v.z]);
    }
    let (min_pos, max_pos) = calculate_bounds(mesh);
    attributes.insert("POSITION".into(), json!(sections.len()));
    sections.push(Section {
        offset,
        length: buffer_data.len() - offset,
        target: TARGET_ARRAY_BUFFER,
        accessor: json!({
            "componentType": COMPONENT_FLOAT,
            "count": vertex_count,
            "type": "VEC3",
            "min": min_pos,
            "max": max_pos
        }),
    });

    // Normals
    let offset = buffer_data.len();
    for n in mesh.vertex_normals() {
        push_f32s(&mut buffer_data, &[n.x, n.y, n.z]);
    }
    attributes.insert("NORMAL".into(), json!(sections.len()));
    sections.push(Section {
        offset,
        length: buffer_data.len() - offset,
        target: TARGET_ARRAY_BUFFER,
        accessor: json!({
            "componentType": COMPONENT_FLOAT,
            "count": vertex_count,
            "type": "VEC3"
        }),
    });

    // Texture coordinates
    if let Some(uvs) = mesh.uvs.as_deref().filter(|uv| uv.len() == vertex_count && !uv.is_empty()) {
        let offset = buffer_data.len();
        for [u, v] in uvs {
            push_f32s(&mut buffer_data, &[*u, *v]);
        }
        attributes.insert("TEXCOORD_0".into(), json!(sections.len()));
        sections.push(Section {
            offset,
            length: buffer_data.len() - offset,
            target: TARGET_ARRAY_BUFFER,
            accessor: json!({
                "componentType": COMPONENT_FLOAT,
                "count": vertex_count,
                "type": "VEC2"
            }),
        });
    }

    // Indices
    let offset = buffer_data.len();
    for triangle in &mesh.triangles {
        for index in triangle.indices {
            buffer_data.extend_from_slice(&(index as u32).to_le_bytes());
        }
    }
    let indices_accessor = sections.len();
    sections.push(Section {
        offset,
        length: buffer_data.len() - offset,
        target: TARGET_ELEMENT_ARRAY_BUFFER,
        accessor: json!({
            "componentType": COMPONENT_UNSIGNED_INT,
            "count": mesh.triangle_count() * 3,
            "type": "SCALAR"
        }),
    });

    let mut accessors = Vec::with_capacity(sections.len());
    let mut buffer_views = Vec::with_capacity(sections.len());
    for (view, section) in sections.into_iter().enumerate() {
        let mut accessor = section.accessor;
        accessor["bufferView"] = json!(view);
        accessor["byteOffset"] = json!(0);
        accessors.push(accessor);
        buffer_views.push(json!({
            "buffer": 0,
            "byteOffset": section.offset,
            "byteLength": section.length,
            "target": section.target
        }));
    }

    let gltf = json!({
        "asset": {
            "generator": "meshscope",
            "version": "2.0"
        },
        "scene": 0,
        "scenes": [{ "nodes": [0] }],
        "nodes": [{ "mesh": 0 }],
        "meshes": [{
            "primitives": [{
                "attributes": attributes,
                "indices": indices_accessor,
                "mode": 4
            }]
        }],
        "accessors": accessors,
        "bufferViews": buffer_views,
        "buffers": [{ "byteLength": buffer_data.len() }]
    });

    (gltf, buffer_data)
}

fn push_f32s(buffer: &mut Vec<u8>, values: &[f64]) {
    for value in values {
        buffer.extend_from_slice(&(*value as f32).to_le_bytes());
    }
}

fn calculate_bounds(mesh: &Mesh) -> ([f32; 3], [f32; 3]) {
    if mesh.vertices.is_empty() {
        return ([0.0; 3], [0.0; 3]);
    }

    let mut min = [f32::MAX; 3];
    let mut max = [f32::MIN; 3];
    for vertex in &mesh.vertices {
        for (axis, value) in [vertex.x, vertex.y, vertex.z].into_iter().enumerate() {
            min[axis] = min[axis].min(value as f32);
            max[axis] = max[axis].max(value as f32);
        }
    }
    (min, max)
}

fn align_to_multiple_of_four(n: usize) -> usize {
    (n + 3) & !3
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Primitive;
    use tempfile::NamedTempFile;

    #[test]
    fn test_export_glb() -> Result<()> {
        let mesh = Primitive::indexed_cube(10.0).to_mesh();

        let file = NamedTempFile::with_suffix(".glb")?;
        export(&mesh, file.path())?;

        let file_content = std::fs::read(file.path())?;
        assert_eq!(&file_content[0..4], b"glTF");
        assert_eq!(file_content.len() % 4, 0);

        let declared = u32::from_le_bytes([
            file_content[8],
            file_content[9],
            file_content[10],
            file_content[11],
        ]);
        assert_eq!(declared as usize, file_content.len());

        Ok(())
    }

    #[test]
    fn test_texcoords_only_when_present() {
        let cube = Primitive::indexed_cube(1.0).to_mesh();
        let (json, _) = create_gltf_json(&cube);
        assert!(json["meshes"][0]["primitives"][0]["attributes"]
            .get("TEXCOORD_0")
            .is_none());

        let sphere = Primitive::uv_sphere(1.0, 8).to_mesh();
        let (json, buffer) = create_gltf_json(&sphere);
        let attributes = &json["meshes"][0]["primitives"][0]["attributes"];
        assert_eq!(attributes["TEXCOORD_0"], json!(2));
        assert_eq!(json["accessors"].as_array().map(Vec::len), Some(4));
        assert_eq!(json["buffers"][0]["byteLength"], json!(buffer.len()));
    }

    #[test]
    fn test_alignment() {
        assert_eq!(align_to_multiple_of_four(0), 0);
        assert_eq!(align_to_multiple_of_four(5), 8);
        assert_eq!(align_to_multiple_of_four(8), 8);
    }
}
