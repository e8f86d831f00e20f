// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Format-dispatching mesh loader

use super::{import_gltf, import_obj, import_stl, MeshFormat};
use crate::error::{MeshError, MeshResult};
use crate::geometry::Mesh;
use std::path::{Path, PathBuf};

/// A mesh read from disk together with where it came from
#[derive(Debug, Clone)]
pub struct LoadedMesh {
    pub path: PathBuf,
    pub format: MeshFormat,
    pub mesh: Mesh,
}

impl LoadedMesh {
    /// File name including extension
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// File name without its extension
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Lower-cased extension of the source file
    pub fn source_extension(&self) -> String {
        self.path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_else(|| self.format.extension().to_string())
    }
}

/// Load a mesh file and drop vertices no face refers to.
///
/// Vertices are never welded; what the reader produced is what metrics see.
pub fn load_mesh(path: &Path) -> MeshResult<LoadedMesh> {
    let format = MeshFormat::from_path(path).ok_or_else(|| MeshError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let mut mesh = match format {
        MeshFormat::Obj => import_obj::import(path)?,
        MeshFormat::Stl => import_stl::import(path)?,
        MeshFormat::Glb | MeshFormat::Gltf => import_gltf::import(path)?,
    };
    mesh.remove_unreferenced_vertices();

    Ok(LoadedMesh {
        path: path.to_path_buf(),
        format,
        mesh,
    })
}
