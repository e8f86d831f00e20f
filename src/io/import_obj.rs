// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Wavefront OBJ importer

use crate::error::{MeshError, MeshResult};
use crate::geometry::Mesh;
use nalgebra::Point3;
use std::path::Path;

/// Read an OBJ file as one triangulated mesh.
///
/// Every object/group is concatenated. Vertices are split per unique
/// position/texcoord/normal combination, so texture coordinates map one to
/// one onto vertices.
pub fn import(path: &Path) -> MeshResult<Mesh> {
    let (models, _materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ignore_points: true,
            ignore_lines: true,
            ..Default::default()
        },
    )
    .map_err(|e| MeshError::parse(path, e))?;

    let mut mesh = Mesh::new();

    for model in &models {
        let obj = &model.mesh;

        let vertices: Vec<Point3<f64>> = obj
            .positions
            .chunks_exact(3)
            .map(|c| Point3::new(c[0] as f64, c[1] as f64, c[2] as f64))
            .collect();

        let uvs = (!obj.texcoords.is_empty()).then(|| {
            obj.texcoords
                .chunks_exact(2)
                .map(|c| [c[0] as f64, c[1] as f64])
                .collect::<Vec<_>>()
        });

        let triangles = obj
            .indices
            .chunks_exact(3)
            .map(|c| [c[0] as usize, c[1] as usize, c[2] as usize]);

        mesh.append(vertices, triangles, uvs);
    }

    if mesh.triangles.is_empty() {
        return Err(MeshError::shape(path, "OBJ file contains no faces"));
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_quad_is_triangulated_with_uvs() -> anyhow::Result<()> {
        let mut file = NamedTempFile::with_suffix(".obj")?;
        writeln!(file, "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0")?;
        writeln!(file, "vt 0 0\nvt 1 0\nvt 1 1\nvt 0 1")?;
        writeln!(file, "f 1/1 2/2 3/3 4/4")?;

        let mesh = import(file.path())?;
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(mesh.has_uv());
        Ok(())
    }

    #[test]
    fn test_point_cloud_is_rejected() -> anyhow::Result<()> {
        let mut file = NamedTempFile::with_suffix(".obj")?;
        writeln!(file, "v 0 0 0\nv 1 0 0\nv 1 1 0")?;

        let err = import(file.path()).unwrap_err();
        assert!(matches!(err, MeshError::UnsupportedMeshShape { .. }));
        Ok(())
    }
}
