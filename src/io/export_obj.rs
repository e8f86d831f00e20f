// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Wavefront OBJ exporter

use crate::geometry::Mesh;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a mesh as an indexed OBJ file.
///
/// Each vertex carries its normal and, when present, its UV under the same
/// index, so reading the file back yields the same vertex count.
pub fn export(mesh: &Mesh, path: &Path) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);

    writeln!(file, "# meshscope OBJ export")?;
    writeln!(file, "# Vertices: {}", mesh.vertex_count())?;
    writeln!(file, "# Triangles: {}", mesh.triangle_count())?;

    for v in &mesh.vertices {
        writeln!(file, "v {} {} {}", v.x, v.y, v.z)?;
    }

    let uvs = mesh.uvs.as_deref().filter(|uv| !uv.is_empty());
    if let Some(uvs) = uvs {
        for [u, v] in uvs {
            writeln!(file, "vt {} {}", u, v)?;
        }
    }

    for n in mesh.vertex_normals() {
        writeln!(file, "vn {} {} {}", n.x, n.y, n.z)?;
    }

    // Faces are 1-indexed; position, texcoord and normal share the index
    for triangle in &mesh.triangles {
        let [a, b, c] = triangle.indices.map(|i| i + 1);
        if uvs.is_some() {
            writeln!(file, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
        } else {
            writeln!(file, "f {a}//{a} {b}//{b} {c}//{c}")?;
        }
    }

    file.flush()
}
