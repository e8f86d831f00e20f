// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Model file discovery

use super::MeshFormat;
use crate::error::{MeshError, MeshResult};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// List supported mesh files directly inside `dir`, sorted by lower-cased name.
///
/// Subdirectories are not searched. A missing directory or an empty result
/// is an error.
pub fn discover_models(dir: &Path) -> MeshResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(MeshError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|path| MeshFormat::from_path(path).is_some())
        .collect();

    if files.is_empty() {
        return Err(MeshError::NoSupportedFiles {
            path: dir.to_path_buf(),
        });
    }

    files.sort_by_cached_key(|path| sort_key(path));
    Ok(files)
}

fn sort_key(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_filters_and_sorts_by_lowercase_name() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        for name in ["b.STL", "A.obj", "c.gltf", "d.GLB", "notes.txt", "mesh.ply", "noext"] {
            fs::write(dir.path().join(name), b"")?;
        }
        fs::create_dir(dir.path().join("nested.obj"))?;
        fs::create_dir(dir.path().join("sub"))?;
        fs::write(dir.path().join("sub").join("deep.obj"), b"")?;

        let names: Vec<String> = discover_models(dir.path())?
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["A.obj", "b.STL", "c.gltf", "d.GLB"]);
        Ok(())
    }

    #[test]
    fn test_missing_directory() {
        let err = discover_models(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, MeshError::DirectoryNotFound { .. }));
    }

    #[test]
    fn test_no_supported_files() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("readme.md"), b"")?;
        let err = discover_models(dir.path()).unwrap_err();
        assert!(matches!(err, MeshError::NoSupportedFiles { .. }));
        Ok(())
    }
}
