// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Subprocess runner for the external mesh inspection tool

use crate::error::{MeshError, MeshResult};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Name of the inspection tool looked up on PATH
pub const EXTERNAL_TOOL: &str = "assimp";

/// Longest info line kept in the report
pub const MAX_INFO_CHARS: usize = 120;

/// Result of an info query
pub struct InfoResult {
    /// First non-blank stdout line, if the tool printed one
    pub line: Option<String>,
}

/// Runner for the external inspection tool
pub struct Runner {
    program: PathBuf,
}

impl Runner {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Runner for the tool found on PATH, if any
    pub fn locate() -> Option<Self> {
        which::which(EXTERNAL_TOOL).ok().map(Self::new)
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Run `<tool> info <file>` synchronously
    pub fn run_info(&self, file: &Path) -> MeshResult<InfoResult> {
        let output = Command::new(&self.program)
            .arg("info")
            .arg(file)
            .output()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => MeshError::ExternalToolMissing {
                    tool: self.tool_name(),
                },
                _ => MeshError::Io(e),
            })?;

        if !output.status.success() {
            return Err(MeshError::ExternalToolFailure {
                tool: self.tool_name(),
                status: output.status.to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(InfoResult {
            line: first_meaningful_line(&stdout, MAX_INFO_CHARS),
        })
    }

    fn tool_name(&self) -> String {
        self.program
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| EXTERNAL_TOOL.to_string())
    }
}

/// First non-blank line, trimmed and cut to `max_chars` characters
pub fn first_meaningful_line(text: &str, max_chars: usize) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| line.chars().take(max_chars).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_meaningful_line() {
        assert_eq!(
            first_meaningful_line("\n   \n  Launching asset import  \nmore", 120),
            Some("Launching asset import".to_string())
        );
        assert_eq!(first_meaningful_line(" \n\t\n", 120), None);

        let long = "x".repeat(200);
        assert_eq!(first_meaningful_line(&long, 120).map(|l| l.len()), Some(120));
    }

    #[test]
    fn test_missing_program() {
        let runner = Runner::new("/nonexistent/bin/assimp");
        let err = runner.run_info(Path::new("model.obj")).err();
        assert!(matches!(err, Some(MeshError::ExternalToolMissing { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_info_with_script() -> anyhow::Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::TempDir::new()?;
        let ok = dir.path().join("ok-tool");
        std::fs::write(&ok, "#!/bin/sh\necho\necho \"  info for $2  \"\n")?;
        std::fs::set_permissions(&ok, std::fs::Permissions::from_mode(0o755))?;

        let result = Runner::new(&ok).run_info(Path::new("cube.obj"))?;
        assert_eq!(result.line.as_deref(), Some("info for cube.obj"));

        let failing = dir.path().join("bad-tool");
        std::fs::write(&failing, "#!/bin/sh\nexit 3\n")?;
        std::fs::set_permissions(&failing, std::fs::Permissions::from_mode(0o755))?;

        let err = Runner::new(&failing).run_info(Path::new("cube.obj")).err();
        assert!(matches!(err, Some(MeshError::ExternalToolFailure { .. })));
        Ok(())
    }
}
