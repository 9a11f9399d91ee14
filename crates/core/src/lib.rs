//! triage-core
//!
//! Core library for capability tagging of disassembled binaries.
//!
//! This crate defines the call-graph snapshot IR (model), the capability
//! taxonomy, the reference resolver, the label assembler, the tagging run
//! coordinator, and the project database integration.
//!
//! The goal is to keep all substantive logic here so it is fully testable
//! and reusable from multiple frontends (CLI, Python bindings, etc.).

pub mod model;
pub mod taxonomy;
pub mod analysis;
pub mod labeling;
pub mod services;
pub mod db;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
