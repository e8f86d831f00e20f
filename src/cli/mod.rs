// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI subsystem: console reporting and the external tool runner

pub mod reporter;
pub mod runner;

pub use reporter::Reporter;
pub use runner::{first_meaningful_line, InfoResult, Runner};
