use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use triage_core::db::{ProjectConfig, ProjectDb, ProjectLayout};

use crate::{canonicalize_or_current, infer_project_name};

/// Initialize a new func-triage project at `root`.
///
/// Creates the `.triage` metadata directory, the `graphs`, `taxonomies`, and
/// `reports` directories, a `project.json` config, and an empty project DB.
pub fn init_project_command(root: &str, name: Option<String>) -> Result<()> {
    let root_path = canonicalize_or_current(root)?;
    let layout = ProjectLayout::new(&root_path);

    // Derive project name if not provided.
    let project_name = match name {
        Some(n) => n,
        None => infer_project_name(&root_path),
    };

    // Ensure directories exist.
    fs::create_dir_all(&layout.meta_dir)
        .with_context(|| format!("Failed to create meta dir: {}", layout.meta_dir.display()))?;
    fs::create_dir_all(&layout.graphs_dir)
        .with_context(|| format!("Failed to create graphs dir: {}", layout.graphs_dir.display()))?;
    fs::create_dir_all(&layout.taxonomies_dir).with_context(|| {
        format!("Failed to create taxonomies dir: {}", layout.taxonomies_dir.display())
    })?;
    fs::create_dir_all(&layout.reports_dir).with_context(|| {
        format!("Failed to create reports dir: {}", layout.reports_dir.display())
    })?;

    // Build project config.
    let db_path_rel = layout.db_path_relative_string();
    let config = ProjectConfig::new(&project_name, db_path_rel);

    // Serialize and write config JSON.
    let json = serde_json::to_string_pretty(&config)?;
    fs::write(&layout.project_config_path, json).with_context(|| {
        format!("Failed to write project config: {}", layout.project_config_path.display())
    })?;

    // Create the project database immediately so follow-on commands (and tests)
    // can rely on its presence.
    ProjectDb::open(&layout.db_path).with_context(|| {
        format!("Failed to initialize project database at {}", layout.db_path.display())
    })?;

    println!("Initialized func-triage project:");
    println!("  Name: {}", project_name);
    println!("  Root: {}", layout.root.display());
    println!("  Config: {}", layout.project_config_path.display());
    println!("  DB path (relative): {}", config.db.path);
    println!("  Graphs dir: {}", layout.graphs_dir.display());
    println!("  Taxonomies dir: {}", layout.taxonomies_dir.display());
    println!("  Reports dir: {}", layout.reports_dir.display());

    Ok(())
}

/// Show basic information about an existing project.
pub fn project_info_command(root: &str) -> Result<()> {
    let root_path = canonicalize_or_current(root)?;
    let layout = ProjectLayout::new(&root_path);

    let config = triage_core::db::load_project_config(&layout)?;

    println!("func-triage Project Info");
    println!("========================");
    println!("Name: {}", config.name);
    println!("Root: {}", layout.root.display());
    println!("Config file: {}", layout.project_config_path.display());
    println!("Config version: {}", config.config_version);
    println!("DB path (config): {}", config.db.path);
    if let Some(taxonomy) = &config.default_taxonomy {
        println!("Default taxonomy: {}", taxonomy);
    }
    println!();

    // Basic directory existence checks.
    println!("Directories:");
    print_dir_status("Meta dir (.triage)", &layout.meta_dir);
    print_dir_status("Graphs dir", &layout.graphs_dir);
    print_dir_status("Taxonomies dir", &layout.taxonomies_dir);
    print_dir_status("Reports dir", &layout.reports_dir);

    Ok(())
}

/// Helper to print whether a directory exists.
fn print_dir_status(label: &str, path: &Path) {
    let exists = path.is_dir();
    println!("- {label}: {} ({})", if exists { "OK" } else { "MISSING" }, path.display());
}
