// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Mesh metrics: extraction, optional enrichment and the record type

mod enrich;
mod extract;
mod record;

pub use enrich::{enrich_with_external_info, enrich_with_secondary, secondary_counts, SecondaryCounts};
pub use extract::{extract_all, extract_metrics, DUPLICATE_DECIMALS};
pub use record::{sort_metrics, Measurement, MeshMetrics};
