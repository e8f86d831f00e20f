// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - discovery, loading, and exporting

mod convert;
mod discovery;
mod export_gltf;
mod export_obj;
mod export_stl;
mod format;
mod import_gltf;
mod import_obj;
mod import_stl;
mod loader;
mod soup;

pub use convert::{conversion_path, export_conversions};
pub use discovery::discover_models;
pub use export_gltf::export as export_glb;
pub use export_obj::export as export_obj;
pub use export_stl::export as export_stl;
pub use format::MeshFormat;
pub use loader::{load_mesh, LoadedMesh};
pub use soup::{read_triangle_soup, TriangleSoup};
