// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - mesh representation and queries

mod bbox;
mod mesh;
mod primitives;
pub mod sampling;

pub use bbox::BoundingBox;
pub use mesh::{Mesh, Triangle};
pub use primitives::Primitive;
pub use sampling::{sample_indices, DEFAULT_NORMALS_SEED, DEFAULT_SAMPLE_SEED};
