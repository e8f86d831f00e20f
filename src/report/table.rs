// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Plain-text summary table

use crate::metrics::MeshMetrics;

const HEADERS: [&str; 7] = ["Format", "File", "Vertices", "Faces", "Duplicates", "Watertight", "UV"];

/// Render the summary table, one line per record, without a trailing newline
pub fn format_summary_table(metrics: &[MeshMetrics]) -> String {
    let rows: Vec<[String; 7]> = metrics
        .iter()
        .map(|m| {
            [
                m.format.label().to_string(),
                m.file_name.clone(),
                m.vertices.to_string(),
                m.faces.to_string(),
                m.duplicate_vertices.to_string(),
                m.watertight.to_string(),
                m.has_uv.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(join_cells(HEADERS, &widths));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &rows {
        lines.push(join_cells(row.iter().map(String::as_str), &widths));
    }
    lines.join("\n")
}

fn join_cells<'a>(cells: impl IntoIterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .into_iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn print_summary_table(metrics: &[MeshMetrics]) {
    println!("{}", format_summary_table(metrics));
}
