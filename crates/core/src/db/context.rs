use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::db::{ProjectConfig, ProjectDb, ProjectLayout};

/// Everything a command needs to operate on an initialized triage project:
/// the computed layout, the parsed `.triage/project.json`, the resolved
/// database path, and an open connection with migrations applied.
#[derive(Debug)]
pub struct ProjectContext {
    pub layout: ProjectLayout,
    pub config: ProjectConfig,
    pub db_path: PathBuf,
    pub db: ProjectDb,
}

impl ProjectContext {
    /// Open the project rooted at `root`. Fails if the project was never
    /// initialized (no `.triage/project.json`) or the database schema is
    /// newer than this build understands.
    pub fn from_root(root: impl AsRef<Path>) -> Result<Self> {
        let layout = ProjectLayout::new(root);
        let (config, db_path, db) = open_project_db(&layout)?;
        Ok(Self { layout, config, db_path, db })
    }
}

/// Read and parse `.triage/project.json` for the given layout.
pub fn load_project_config(layout: &ProjectLayout) -> Result<ProjectConfig> {
    let path = &layout.project_config_path;
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read project config at {}", path.display()))?;
    serde_json::from_str(&raw).context("Failed to parse project config JSON")
}

/// Open the project database named by the config.
///
/// The configured db path is taken as-is when absolute; a relative path
/// (the default, `.triage/project.db`) is resolved against the project
/// root so commands work from any working directory.
pub fn open_project_db(layout: &ProjectLayout) -> Result<(ProjectConfig, PathBuf, ProjectDb)> {
    let config = load_project_config(layout)?;
    let configured = Path::new(&config.db.path);
    let db_path = if configured.is_absolute() {
        configured.to_path_buf()
    } else {
        layout.root.join(configured)
    };
    let db = ProjectDb::open(&db_path)
        .with_context(|| format!("Failed to open project database at {}", db_path.display()))?;
    Ok((config, db_path, db))
}
