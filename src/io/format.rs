// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Supported mesh formats

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Mesh container formats accepted as input
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MeshFormat {
    Obj,
    Stl,
    Glb,
    Gltf,
}

impl MeshFormat {
    /// Every readable format
    pub const ALL: [MeshFormat; 4] = [Self::Obj, Self::Stl, Self::Glb, Self::Gltf];

    /// Formats the converter writes, in output order. There is no gltf writer.
    pub const EXPORT_TARGETS: [MeshFormat; 3] = [Self::Obj, Self::Stl, Self::Glb];

    /// Detect format from a file extension, ignoring case
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "obj" => Some(Self::Obj),
            "stl" => Some(Self::Stl),
            "glb" => Some(Self::Glb),
            "gltf" => Some(Self::Gltf),
            _ => None,
        }
    }

    /// Lower-case file extension without the dot
    pub fn extension(self) -> &'static str {
        match self {
            Self::Obj => "obj",
            Self::Stl => "stl",
            Self::Glb => "glb",
            Self::Gltf => "gltf",
        }
    }

    /// Upper-case tag used in reports and figures
    pub fn label(self) -> &'static str {
        match self {
            Self::Obj => "OBJ",
            Self::Stl => "STL",
            Self::Glb => "GLB",
            Self::Gltf => "GLTF",
        }
    }

    /// Whether a mesh read from `self` should be written as `target`
    pub fn converts_to(self, target: MeshFormat) -> bool {
        if self == target {
            return false;
        }
        // The gltf/glb containers overlap; this pair is not converted
        !(self == Self::Gltf && target == Self::Glb)
    }
}

impl fmt::Display for MeshFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
