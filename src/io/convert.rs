// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Cross-format conversion of loaded meshes

use super::{export_gltf, export_obj, export_stl, LoadedMesh, MeshFormat};
use crate::error::{MeshError, MeshResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Output path for `source` converted to `target` inside `out_dir`
pub fn conversion_path(source: &LoadedMesh, target: MeshFormat, out_dir: &Path) -> PathBuf {
    out_dir.join(format!(
        "{}_from_{}.{}",
        source.stem(),
        source.source_extension(),
        target.extension()
    ))
}

/// Write every loaded mesh to every other exportable format.
///
/// Targets are visited in OBJ, STL, GLB order. A source is never written to
/// its own format, and glTF sources are not repackaged as GLB.
pub fn export_conversions(meshes: &[LoadedMesh], out_dir: &Path) -> MeshResult<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;

    let mut written = Vec::new();
    for source in meshes {
        for target in MeshFormat::EXPORT_TARGETS {
            if !source.format.converts_to(target) {
                continue;
            }

            let path = conversion_path(source, target, out_dir);
            export_to(source, target, &path)?;
            written.push(path);
        }
    }
    Ok(written)
}

fn export_to(source: &LoadedMesh, target: MeshFormat, path: &Path) -> MeshResult<()> {
    match target {
        MeshFormat::Obj => export_obj::export(&source.mesh, path).map_err(|e| MeshError::export(path, e)),
        MeshFormat::Stl => export_stl::export(&source.mesh, path).map_err(|e| MeshError::export(path, e)),
        MeshFormat::Glb => export_gltf::export(&source.mesh, path).map_err(|e| MeshError::export(path, e)),
        MeshFormat::Gltf => Err(MeshError::export(path, "glTF text output is not supported")),
    }
}
