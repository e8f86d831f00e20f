// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! meshscope
//!
//! Loads OBJ, STL, GLB and glTF meshes, measures them side by side, converts
//! each one to the other formats, and renders comparison figures plus a
//! rotation animation.

pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod metrics;
pub mod pipeline;
pub mod render;
pub mod report;

pub use config::{Capabilities, Config};
pub use error::{MeshError, MeshResult};
pub use geometry::{Mesh, Primitive};
pub use io::{load_mesh, LoadedMesh, MeshFormat};
pub use metrics::{Measurement, MeshMetrics};
pub use pipeline::{run, RunSummary};
