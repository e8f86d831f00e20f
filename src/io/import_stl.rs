// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! STL importer (ASCII and binary)

use crate::error::{MeshError, MeshResult};
use crate::geometry::{Mesh, Triangle};
use nalgebra::Point3;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read an STL file into an indexed mesh.
///
/// Corners with bit-identical coordinates share one vertex, as produced by
/// the indexed reader. STL has no texture coordinates.
pub fn import(path: &Path) -> MeshResult<Mesh> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let stl = stl_io::read_stl(&mut reader).map_err(|e| MeshError::parse(path, e))?;

    if stl.faces.is_empty() {
        return Err(MeshError::shape(path, "STL file contains no facets"));
    }

    let vertices = stl
        .vertices
        .iter()
        .map(|v| Point3::new(v[0] as f64, v[1] as f64, v[2] as f64))
        .collect();
    let triangles = stl
        .faces
        .iter()
        .map(|face| Triangle::new(face.vertices))
        .collect();

    Ok(Mesh::from_parts(vertices, triangles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_ascii_facets_share_vertices() -> anyhow::Result<()> {
        let mut file = NamedTempFile::with_suffix(".stl")?;
        write!(
            file,
            "solid quad
facet normal 0 0 1
outer loop
vertex 0 0 0
vertex 1 0 0
vertex 1 1 0
endloop
endfacet
facet normal 0 0 1
outer loop
vertex 0 0 0
vertex 1 1 0
vertex 0 1 0
endloop
endfacet
endsolid quad
"
        )?;

        let mesh = import(file.path())?;
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.vertex_count(), 4);
        assert!(!mesh.has_uv());
        Ok(())
    }
}
