// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Seeded face sampling for display

use super::Mesh;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use std::borrow::Cow;

/// Seed for down-sampling dense meshes before drawing
pub const DEFAULT_SAMPLE_SEED: u64 = 7;

/// Seed for thinning out drawn normal vectors
pub const DEFAULT_NORMALS_SEED: u64 = 13;

/// Create a reproducible generator for a seed
pub fn create_rng(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Pick `amount` distinct indices out of `0..total`.
///
/// Returns every index in order when `total <= amount`. The same seed always
/// yields the same selection.
pub fn sample_indices(total: usize, amount: usize, seed: u64) -> Vec<usize> {
    if total <= amount {
        return (0..total).collect();
    }
    let mut rng = create_rng(seed);
    rand::seq::index::sample(&mut rng, total, amount).into_vec()
}

impl Mesh {
    /// Keep a random subset of at most `max_faces` faces for display.
    ///
    /// Vertices no sampled face refers to are dropped, so the bounds of the
    /// result cover the sampled faces only. Meshes under the cap are borrowed
    /// as-is.
    pub fn downsample(&self, max_faces: usize, seed: u64) -> Cow<'_, Mesh> {
        if self.triangles.len() <= max_faces {
            return Cow::Borrowed(self);
        }

        let triangles = sample_indices(self.triangles.len(), max_faces, seed)
            .into_iter()
            .map(|i| self.triangles[i])
            .collect();

        let mut sampled = Mesh {
            vertices: self.vertices.clone(),
            triangles,
            uvs: self.uvs.clone(),
        };
        sampled.remove_unreferenced_vertices();
        Cow::Owned(sampled)
    }
}
