// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Per-file metric record

use crate::io::MeshFormat;
use serde::{Serialize, Serializer};

/// Value of an optional metric.
///
/// Keeps "not measured" apart from a measured zero or `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Measurement<T> {
    /// Enrichment was disabled or its capability is unavailable
    #[default]
    NotAttempted,
    Measured(T),
    /// Enrichment ran and failed
    Failed,
}

impl<T> Measurement<T> {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Self::Measured(value) => Some(value),
            Self::NotAttempted | Self::Failed => None,
        }
    }
}

impl<T> From<Option<T>> for Measurement<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NotAttempted, Self::Measured)
    }
}

/// `NotAttempted` is null, `Failed` is the string `"error"`
impl<T: Serialize> Serialize for Measurement<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::NotAttempted => serializer.serialize_none(),
            Self::Measured(value) => value.serialize(serializer),
            Self::Failed => serializer.serialize_str("error"),
        }
    }
}

/// Metrics for one input file.
///
/// Field order is the column order of the CSV report and the key order of
/// the JSON report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshMetrics {
    pub file_name: String,
    pub format: MeshFormat,
    pub vertices: usize,
    pub faces: usize,
    pub edges_unique: usize,
    pub vertex_normals: usize,
    pub face_normals: usize,
    pub duplicate_vertices: usize,
    pub duplicate_ratio: f64,
    pub watertight: bool,
    pub has_uv: bool,
    pub bbox_x: f64,
    pub bbox_y: f64,
    pub bbox_z: f64,
    pub surface_area: f64,
    pub secondary_vertices: Measurement<usize>,
    pub secondary_faces: Measurement<usize>,
    pub secondary_has_vertex_normals: Measurement<bool>,
    pub external_info: Measurement<String>,
}

impl MeshMetrics {
    /// Sort key used before any reporting
    pub fn sort_key(&self) -> (&'static str, &str) {
        (self.format.label(), self.file_name.as_str())
    }

    /// Counts drawn in the bar chart, in category order
    pub fn bar_values(&self) -> [usize; 5] {
        [
            self.vertices,
            self.faces,
            self.edges_unique,
            self.duplicate_vertices,
            self.vertex_normals,
        ]
    }
}

/// Order records by (format, file name)
pub fn sort_metrics(metrics: &mut [MeshMetrics]) {
    metrics.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
}
