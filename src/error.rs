// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for discovery, loading, conversion and rendering

use std::path::PathBuf;
use thiserror::Error;

/// Result type used across the library
pub type MeshResult<T> = Result<T, MeshError>;

/// Errors raised while processing a batch of meshes
#[derive(Debug, Error)]
pub enum MeshError {
    /// Models directory is missing or not a directory
    #[error("models directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    /// Models directory contains no .obj/.stl/.glb/.gltf file
    #[error(
        "no supported models found in {}; expected .obj, .stl, .glb or .gltf files",
        path.display()
    )]
    NoSupportedFiles { path: PathBuf },

    /// Extension is not one of the supported formats
    #[error("unsupported mesh format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// The underlying reader rejected the file
    #[error("failed to parse {}: {details}", path.display())]
    MeshParse { path: PathBuf, details: String },

    /// File parsed but holds no single triangle surface
    #[error("{} could not be loaded as a triangle mesh: {reason}", path.display())]
    UnsupportedMeshShape { path: PathBuf, reason: String },

    /// External tool ran but exited unsuccessfully
    #[error("{tool} exited with status {status}")]
    ExternalToolFailure { tool: String, status: String },

    /// External tool is not on PATH
    #[error("{tool} is not installed or not in PATH")]
    ExternalToolMissing { tool: String },

    /// Writing a converted mesh failed
    #[error("failed to export {}: {details}", path.display())]
    Export { path: PathBuf, details: String },

    /// Encoding an image or animation failed
    #[error("failed to render {}: {details}", path.display())]
    Render { path: PathBuf, details: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    pub(crate) fn parse(path: impl Into<PathBuf>, details: impl ToString) -> Self {
        Self::MeshParse {
            path: path.into(),
            details: details.to_string(),
        }
    }

    pub(crate) fn shape(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::UnsupportedMeshShape {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn export(path: impl Into<PathBuf>, details: impl ToString) -> Self {
        Self::Export {
            path: path.into(),
            details: details.to_string(),
        }
    }

    pub(crate) fn render(path: impl Into<PathBuf>, details: impl ToString) -> Self {
        Self::Render {
            path: path.into(),
            details: details.to_string(),
        }
    }

    /// Whether the run must stop on this error
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Self::ExternalToolFailure { .. } | Self::ExternalToolMissing { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enrichment_errors_are_not_fatal() {
        let failure = MeshError::ExternalToolFailure {
            tool: "assimp".to_string(),
            status: "exit status: 1".to_string(),
        };
        let missing = MeshError::ExternalToolMissing {
            tool: "assimp".to_string(),
        };
        assert!(!failure.is_fatal());
        assert!(!missing.is_fatal());
        assert!(MeshError::shape("a.obj", "no faces").is_fatal());
    }

    #[test]
    fn test_error_messages_name_the_path() {
        let err = MeshError::NoSupportedFiles {
            path: PathBuf::from("models"),
        };
        assert!(err.to_string().contains("models"));
        assert!(err.to_string().contains(".gltf"));
    }
}
