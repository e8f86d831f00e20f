// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry metrics computed from a loaded mesh

use super::record::{Measurement, MeshMetrics};
use crate::io::LoadedMesh;
use rayon::prelude::*;

/// Decimal places used when matching duplicate vertices
pub const DUPLICATE_DECIMALS: i32 = 6;

/// Compute every primary metric for one mesh. Optional fields start empty.
pub fn extract_metrics(loaded: &LoadedMesh) -> MeshMetrics {
    let mesh = &loaded.mesh;
    let vertices = mesh.vertex_count();

    let (duplicate_vertices, _unique) = mesh.duplicate_vertex_stats(DUPLICATE_DECIMALS);
    let duplicate_ratio = if vertices > 0 {
        round_to(duplicate_vertices as f64 / vertices as f64, DUPLICATE_DECIMALS)
    } else {
        0.0
    };

    let extents = mesh.bounding_box().size();

    MeshMetrics {
        file_name: loaded.file_name(),
        format: loaded.format,
        vertices,
        faces: mesh.triangle_count(),
        edges_unique: mesh.unique_edges().len(),
        vertex_normals: mesh.vertex_normals().len(),
        face_normals: mesh.face_normals().len(),
        duplicate_vertices,
        duplicate_ratio,
        watertight: mesh.is_watertight(),
        has_uv: mesh.has_uv(),
        bbox_x: extents.x,
        bbox_y: extents.y,
        bbox_z: extents.z,
        surface_area: mesh.surface_area(),
        secondary_vertices: Measurement::NotAttempted,
        secondary_faces: Measurement::NotAttempted,
        secondary_has_vertex_normals: Measurement::NotAttempted,
        external_info: Measurement::NotAttempted,
    }
}

/// Extract metrics for every mesh in parallel, keeping input order
pub fn extract_all(meshes: &[LoadedMesh]) -> Vec<MeshMetrics> {
    meshes.par_iter().map(extract_metrics).collect()
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Mesh, Primitive, Triangle};
    use crate::io::MeshFormat;
    use approx::assert_relative_eq;
    use nalgebra::Point3;
    use std::path::PathBuf;

    fn loaded(mesh: Mesh) -> LoadedMesh {
        LoadedMesh {
            path: PathBuf::from("models/cube.obj"),
            format: MeshFormat::Obj,
            mesh,
        }
    }

    #[test]
    fn test_cube_metrics() {
        let metrics = extract_metrics(&loaded(Primitive::indexed_cube(2.0).to_mesh()));

        assert_eq!(metrics.file_name, "cube.obj");
        assert_eq!(metrics.vertices, 8);
        assert_eq!(metrics.faces, 12);
        assert_eq!(metrics.edges_unique, 18);
        assert_eq!(metrics.vertex_normals, 8);
        assert_eq!(metrics.face_normals, 12);
        assert_eq!(metrics.duplicate_vertices, 0);
        assert!(metrics.watertight);
        assert!(!metrics.has_uv);
        assert_relative_eq!(metrics.bbox_x, 2.0);
        assert_relative_eq!(metrics.surface_area, 24.0, epsilon = 1e-9);
        assert_eq!(metrics.external_info, Measurement::NotAttempted);
    }

    #[test]
    fn test_empty_mesh_metrics() {
        let metrics = extract_metrics(&loaded(Mesh::empty()));

        assert_eq!(metrics.vertices, 0);
        assert_eq!(metrics.duplicate_ratio, 0.0);
        assert!(!metrics.watertight);
        assert_eq!((metrics.bbox_x, metrics.bbox_y, metrics.bbox_z), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_duplicate_ratio_is_rounded() {
        // Two triangles sharing an edge, stored unwelded: 6 vertices, 2 duplicates
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0000001),
        ];
        let triangles = vec![Triangle::new([0, 1, 2]), Triangle::new([3, 4, 5])];
        let metrics = extract_metrics(&loaded(Mesh::from_parts(vertices, triangles)));

        assert_eq!(metrics.duplicate_vertices, 2);
        assert_eq!(metrics.duplicate_ratio, 0.333333);
        assert!(!metrics.watertight);
    }

    #[test]
    fn test_rounding_ties_go_to_even() {
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(3.5, 0), 4.0);
        assert_eq!(round_to(-0.5, 0), 0.0);
        assert_eq!(round_to(0.25, 1), 0.2);
    }

    #[test]
    fn test_extract_all_keeps_order() {
        let meshes = vec![
            loaded(Primitive::indexed_cube(1.0).to_mesh()),
            loaded(Primitive::plane(1.0, 2).to_mesh()),
        ];
        let metrics = extract_all(&meshes);
        assert_eq!(metrics[0].faces, 12);
        assert_eq!(metrics[1].faces, 8);
    }
}
