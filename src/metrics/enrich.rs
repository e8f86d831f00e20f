// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Optional cross-checks against a second mesh library and an external tool.
//!
//! Nothing here aborts a run: failures become `Measurement::Failed`.

use super::record::{Measurement, MeshMetrics};
use crate::cli::Runner;
use crate::error::MeshError;
use std::path::Path;

/// Counts reported by the secondary mesh library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecondaryCounts {
    pub vertices: usize,
    pub faces: usize,
    pub has_vertex_normals: bool,
}

/// Re-read `path` with the secondary library when `available`
pub fn enrich_with_secondary(metrics: &mut MeshMetrics, path: &Path, available: bool) {
    if !available {
        return;
    }

    match secondary_counts(path) {
        Ok(Some(counts)) => {
            metrics.secondary_vertices = Measurement::Measured(counts.vertices);
            metrics.secondary_faces = Measurement::Measured(counts.faces);
            metrics.secondary_has_vertex_normals = Measurement::Measured(counts.has_vertex_normals);
        }
        Ok(None) => {}
        Err(_) => {
            metrics.secondary_vertices = Measurement::Failed;
            metrics.secondary_faces = Measurement::Failed;
            metrics.secondary_has_vertex_normals = Measurement::Failed;
        }
    }
}

/// Build a parry3d trimesh from the raw file contents, merging duplicate
/// vertices and dropping degenerate or repeated triangles.
#[cfg(feature = "secondary")]
pub fn secondary_counts(path: &Path) -> Result<Option<SecondaryCounts>, MeshError> {
    use crate::io::read_triangle_soup;
    use parry3d::math::Point;
    use parry3d::shape::{TriMesh, TriMeshFlags};

    let soup = read_triangle_soup(path)?;
    if soup.indices.is_empty() || soup.positions.is_empty() {
        return Ok(Some(SecondaryCounts {
            vertices: soup.positions.len(),
            faces: 0,
            has_vertex_normals: soup.has_vertex_normals,
        }));
    }

    let vertices = soup
        .positions
        .iter()
        .map(|p| Point::new(p[0], p[1], p[2]))
        .collect();
    let flags = TriMeshFlags::MERGE_DUPLICATE_VERTICES
        | TriMeshFlags::DELETE_DEGENERATE_TRIANGLES
        | TriMeshFlags::DELETE_DUPLICATE_TRIANGLES;
    let trimesh = TriMesh::with_flags(vertices, soup.indices, flags);

    Ok(Some(SecondaryCounts {
        vertices: trimesh.vertices().len(),
        faces: trimesh.indices().len(),
        has_vertex_normals: soup.has_vertex_normals,
    }))
}

/// Without the library compiled in there is nothing to measure
#[cfg(not(feature = "secondary"))]
pub fn secondary_counts(_path: &Path) -> Result<Option<SecondaryCounts>, MeshError> {
    Ok(None)
}

/// Record the first info line of the external tool, if one was found
pub fn enrich_with_external_info(metrics: &mut MeshMetrics, path: &Path, tool: Option<&Path>) {
    let Some(program) = tool else {
        return;
    };

    metrics.external_info = match Runner::new(program).run_info(path) {
        Ok(result) => result.line.into(),
        Err(MeshError::ExternalToolMissing { .. }) => Measurement::NotAttempted,
        Err(_) => Measurement::Failed,
    };
}
