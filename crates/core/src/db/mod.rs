//! Project database integration and project layout definitions.
//!
//! This module wraps a SQLite database storing:
//! - Registered call-graph snapshots and their metadata
//! - Tagging run histories (taxonomy version, status, counts, timestamps)
//! - Per-run label rows (address, old/new name, xref count)
//!
//! Alongside it live the on-disk project definitions:
//! - `DbConfig` / `ProjectConfig`: serializable project metadata.
//! - `ProjectLayout`: computed paths for project directories/files.
//! - `ProjectContext`: layout + config + open DB bundle.

mod config;
mod context;
mod layout;
mod models;
mod project_db;

pub use config::{DbConfig, ProjectConfig};
pub use context::{load_project_config, open_project_db, ProjectContext};
pub use layout::ProjectLayout;
pub use models::{GraphRecord, LabelRecord, TagRunRecord, TagRunStatus};
pub use project_db::{DbError, DbResult, ProjectDb, CURRENT_SCHEMA_VERSION};
