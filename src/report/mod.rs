// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Metric reports: CSV, JSON and the console summary table

mod csv;
mod table;

pub use self::csv::{csv_escape, format_csv, format_csv_value};
pub use table::{format_summary_table, print_summary_table};

use crate::error::{MeshError, MeshResult};
use crate::metrics::MeshMetrics;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

pub const CSV_REPORT_NAME: &str = "comparison_metrics.csv";
pub const JSON_REPORT_NAME: &str = "comparison_metrics.json";

/// Serialize every record to a JSON object, keeping field order
pub fn metric_rows(metrics: &[MeshMetrics]) -> Result<Vec<Value>, serde_json::Error> {
    metrics.iter().map(serde_json::to_value).collect()
}

/// Write the CSV and JSON reports into `dir`, returning their paths
pub fn write_metrics_report(metrics: &[MeshMetrics], dir: &Path) -> MeshResult<(PathBuf, PathBuf)> {
    fs::create_dir_all(dir)?;
    let csv_path = dir.join(CSV_REPORT_NAME);
    let json_path = dir.join(JSON_REPORT_NAME);

    let rows = metric_rows(metrics).map_err(|e| MeshError::export(&csv_path, e))?;

    fs::write(&csv_path, format_csv(&rows))?;

    let json = serde_json::to_string_pretty(&rows).map_err(|e| MeshError::export(&json_path, e))?;
    fs::write(&json_path, json)?;

    Ok((csv_path, json_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Primitive;
    use crate::io::{LoadedMesh, MeshFormat};
    use crate::metrics::{extract_metrics, Measurement};
    use tempfile::TempDir;

    #[test]
    fn test_reports_agree() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let mut metrics = extract_metrics(&LoadedMesh {
            path: PathBuf::from("cube.stl"),
            format: MeshFormat::Stl,
            mesh: Primitive::indexed_cube(1.0).to_mesh(),
        });
        metrics.external_info = Measurement::Failed;

        let (csv_path, json_path) = write_metrics_report(&[metrics], dir.path())?;
        assert_eq!(csv_path.file_name().and_then(|n| n.to_str()), Some(CSV_REPORT_NAME));

        let csv = fs::read_to_string(&csv_path)?;
        let json: Vec<Value> = serde_json::from_str(&fs::read_to_string(&json_path)?)?;

        let header: Vec<&str> = csv.lines().next().unwrap_or_default().split(',').collect();
        assert_eq!(header.len(), 19);
        assert_eq!(header[0], "file_name");
        assert_eq!(header[18], "external_info");

        let row: Vec<&str> = csv.lines().nth(1).unwrap_or_default().split(',').collect();
        assert_eq!(row[1], "STL");
        assert_eq!(row[9], "true");
        assert_eq!(row[15], "");
        assert_eq!(row[18], "error");

        assert_eq!(json.len(), 1);
        assert_eq!(json[0]["format"], "STL");
        assert_eq!(json[0]["secondary_vertices"], Value::Null);
        assert_eq!(json[0]["external_info"], "error");
        Ok(())
    }
}
