// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Mesh representation and utilities

use super::BoundingBox;
use ahash::{AHashMap, AHashSet};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Triangle defined by three vertex indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triangle {
    pub indices: [usize; 3],
}

impl Triangle {
    pub fn new(indices: [usize; 3]) -> Self {
        Self { indices }
    }

    /// The three undirected edges, each with the smaller index first
    pub fn edges(&self) -> [[usize; 2]; 3] {
        let [a, b, c] = self.indices;
        [sorted_edge(a, b), sorted_edge(b, c), sorted_edge(c, a)]
    }
}

fn sorted_edge(a: usize, b: usize) -> [usize; 2] {
    if a <= b {
        [a, b]
    } else {
        [b, a]
    }
}

/// Triangular mesh with optional per-vertex texture coordinates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Mesh {
    pub vertices: Vec<Point3<f64>>,
    pub triangles: Vec<Triangle>,
    /// One UV pair per vertex when the source carried texture coordinates
    pub uvs: Option<Vec<[f64; 2]>>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn empty() -> Self {
        Self::new()
    }

    pub fn from_parts(vertices: Vec<Point3<f64>>, triangles: Vec<Triangle>) -> Self {
        Self {
            vertices,
            triangles,
            uvs: None,
        }
    }

    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            uvs: None,
        }
    }

    /// Add a vertex and return its index
    pub fn add_vertex(&mut self, position: Point3<f64>) -> usize {
        let index = self.vertices.len();
        self.vertices.push(position);
        index
    }

    /// Add a triangle
    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Append another block of geometry, offsetting its indices.
    ///
    /// UVs survive only when every appended block carries them.
    pub fn append(
        &mut self,
        vertices: Vec<Point3<f64>>,
        triangles: impl IntoIterator<Item = [usize; 3]>,
        uvs: Option<Vec<[f64; 2]>>,
    ) {
        let offset = self.vertices.len();
        let uvs = uvs.filter(|uv| uv.len() == vertices.len());

        self.uvs = match (self.uvs.take(), uvs) {
            (Some(mut existing), Some(extra)) => {
                existing.extend(extra);
                Some(existing)
            }
            (None, Some(extra)) if offset == 0 => Some(extra),
            _ => None,
        };

        self.vertices.extend(vertices);
        self.triangles.extend(
            triangles
                .into_iter()
                .map(|[a, b, c]| Triangle::new([a + offset, b + offset, c + offset])),
        );
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// True when a non-empty UV array is present
    pub fn has_uv(&self) -> bool {
        self.uvs.as_ref().map_or(false, |uv| !uv.is_empty())
    }

    /// Compute bounding box
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(&self.vertices)
    }

    /// Corner positions of a triangle
    pub fn triangle_points(&self, triangle: &Triangle) -> [Point3<f64>; 3] {
        triangle.indices.map(|i| self.vertices[i])
    }

    /// Unnormalized normal of a triangle; its length is twice the area
    fn triangle_cross(&self, triangle: &Triangle) -> Vector3<f64> {
        let [p0, p1, p2] = self.triangle_points(triangle);
        (p1 - p0).cross(&(p2 - p0))
    }

    /// Unit normal of a triangle, zero for degenerate triangles
    pub fn face_normal(&self, triangle: &Triangle) -> Vector3<f64> {
        self.triangle_cross(triangle)
            .try_normalize(f64::EPSILON)
            .unwrap_or_else(Vector3::zeros)
    }

    /// One unit normal per face
    pub fn face_normals(&self) -> Vec<Vector3<f64>> {
        self.triangles.iter().map(|t| self.face_normal(t)).collect()
    }

    /// One unit normal per vertex, averaged from incident faces weighted by area
    pub fn vertex_normals(&self) -> Vec<Vector3<f64>> {
        let mut sums = vec![Vector3::zeros(); self.vertices.len()];

        for triangle in &self.triangles {
            let cross = self.triangle_cross(triangle);
            for &index in &triangle.indices {
                sums[index] += cross;
            }
        }

        sums.into_iter()
            .map(|n| n.try_normalize(f64::EPSILON).unwrap_or_else(Vector3::zeros))
            .collect()
    }

    /// Centroid of every face
    pub fn triangle_centers(&self) -> Vec<Point3<f64>> {
        self.triangles
            .iter()
            .map(|t| {
                let [p0, p1, p2] = self.triangle_points(t);
                Point3::from((p0.coords + p1.coords + p2.coords) / 3.0)
            })
            .collect()
    }

    /// Sum of triangle areas
    pub fn surface_area(&self) -> f64 {
        self.triangles
            .iter()
            .map(|t| self.triangle_cross(t).norm() * 0.5)
            .sum()
    }

    /// How many faces use each undirected edge
    pub fn edge_face_counts(&self) -> AHashMap<[usize; 2], usize> {
        let mut counts = AHashMap::with_capacity(self.triangles.len() * 3 / 2);
        for triangle in &self.triangles {
            for edge in triangle.edges() {
                *counts.entry(edge).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Unique undirected edges in first-seen order
    pub fn unique_edges(&self) -> Vec<[usize; 2]> {
        let mut seen = AHashSet::with_capacity(self.triangles.len() * 3 / 2);
        let mut edges = Vec::new();
        for triangle in &self.triangles {
            for edge in triangle.edges() {
                if seen.insert(edge) {
                    edges.push(edge);
                }
            }
        }
        edges
    }

    /// Closed 2-manifold test: every edge is shared by exactly two faces
    pub fn is_watertight(&self) -> bool {
        if self.triangles.is_empty() {
            return false;
        }
        self.edge_face_counts().values().all(|&count| count == 2)
    }

    /// Count vertices whose coordinates, rounded to `decimals` places,
    /// repeat an earlier vertex. Returns `(duplicates, unique)`.
    pub fn duplicate_vertex_stats(&self, decimals: i32) -> (usize, usize) {
        if self.vertices.is_empty() {
            return (0, 0);
        }

        let scale = 10f64.powi(decimals);
        let unique: AHashSet<[u64; 3]> = self
            .vertices
            .iter()
            .map(|p| [p.x, p.y, p.z].map(|c| round_key(c, scale)))
            .collect();

        (self.vertices.len() - unique.len(), unique.len())
    }

    /// Remove orphaned vertices (vertices not referenced by any triangle)
    /// Returns the number of vertices removed
    pub fn remove_unreferenced_vertices(&mut self) -> usize {
        let mut used_vertices = vec![false; self.vertices.len()];
        for triangle in &self.triangles {
            for &index in &triangle.indices {
                used_vertices[index] = true;
            }
        }

        // Build remapping: old_index -> new_index
        let mut new_indices = vec![0; self.vertices.len()];
        let mut new_vertices = Vec::with_capacity(self.vertices.len());
        let mut new_uvs = self.uvs.as_ref().map(|uv| Vec::with_capacity(uv.len()));

        for (old_idx, &used) in used_vertices.iter().enumerate() {
            if used {
                new_indices[old_idx] = new_vertices.len();
                new_vertices.push(self.vertices[old_idx]);
                if let (Some(new_uvs), Some(uvs)) = (new_uvs.as_mut(), self.uvs.as_ref()) {
                    new_uvs.push(uvs[old_idx]);
                }
            }
        }

        for triangle in &mut self.triangles {
            triangle.indices = triangle.indices.map(|i| new_indices[i]);
        }

        let removed = self.vertices.len() - new_vertices.len();
        self.vertices = new_vertices;
        self.uvs = new_uvs;
        removed
    }
}

/// Hashable key for a coordinate rounded half-to-even at `scale`
fn round_key(value: f64, scale: f64) -> u64 {
    let rounded = (value * scale).round_ties_even() / scale;
    // Collapse -0.0 onto 0.0 so both hash identically
    (rounded + 0.0).to_bits()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Primitive;

    fn single_triangle() -> Mesh {
        Mesh::from_parts(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            vec![Triangle::new([0, 1, 2])],
        )
    }

    #[test]
    fn test_indexed_cube_is_watertight() {
        let mesh = Primitive::indexed_cube(2.0).to_mesh();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 12);
        assert_eq!(mesh.unique_edges().len(), 18);
        assert!(mesh.is_watertight());
        assert!((mesh.surface_area() - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_open_surface_is_not_watertight() {
        let mut mesh = Primitive::indexed_cube(1.0).to_mesh();
        mesh.triangles.pop();
        assert!(!mesh.is_watertight());
        assert!(!Mesh::empty().is_watertight());
    }

    #[test]
    fn test_face_and_vertex_normals() {
        let mesh = single_triangle();
        assert_eq!(mesh.face_normals(), vec![Vector3::new(0.0, 0.0, 1.0)]);
        assert!(mesh
            .vertex_normals()
            .iter()
            .all(|n| *n == Vector3::new(0.0, 0.0, 1.0)));
        assert!((mesh.surface_area() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_duplicate_vertices_rounded_to_six_decimals() {
        let mut mesh = single_triangle();
        mesh.vertices.push(Point3::new(1.0000000004, 0.0, 0.0));
        mesh.vertices.push(Point3::new(1.0000000004, -0.0, 0.0));
        mesh.vertices.push(Point3::new(1.00001, 0.0, 0.0));

        let (duplicates, unique) = mesh.duplicate_vertex_stats(6);
        assert_eq!(duplicates, 2);
        assert_eq!(unique, 4);
    }

    #[test]
    fn test_remove_unreferenced_vertices_keeps_uvs_aligned() {
        let mut mesh = Mesh::from_parts(
            vec![
                Point3::new(9.0, 9.0, 9.0),
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            vec![Triangle::new([1, 2, 3])],
        );
        mesh.uvs = Some(vec![[0.9, 0.9], [0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);

        assert_eq!(mesh.remove_unreferenced_vertices(), 1);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangles[0].indices, [0, 1, 2]);
        assert_eq!(mesh.uvs.as_deref(), Some(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]][..]));
    }

    #[test]
    fn test_append_drops_uvs_when_a_block_lacks_them() {
        let mut mesh = Mesh::new();
        let block = single_triangle();
        mesh.append(block.vertices.clone(), [[0, 1, 2]], Some(vec![[0.0, 0.0]; 3]));
        assert!(mesh.has_uv());

        mesh.append(block.vertices.clone(), [[0, 1, 2]], None);
        assert!(!mesh.has_uv());
        assert_eq!(mesh.triangles[1].indices, [3, 4, 5]);
    }
}
