use anyhow::{Context, Result};
use triage_core::db::ProjectLayout;

use crate::canonicalize_or_current;

/// List recorded tagging runs, newest first, optionally filtered by graph.
pub fn list_runs_command(root: &str, graph: Option<&str>, json: bool) -> Result<()> {
    let root_path = canonicalize_or_current(root)?;
    let layout = ProjectLayout::new(&root_path);
    let (_config, _db_path, db) = triage_core::db::open_project_db(&layout)?;

    let runs = db.list_tag_runs(graph).context("Failed to list tag runs")?;

    if json {
        let serialized =
            serde_json::to_string_pretty(&runs).context("Failed to serialize runs to JSON")?;
        println!("{}", serialized);
    } else {
        println!("Tag runs ({}):", runs.len());
        if runs.is_empty() {
            println!("  (none)");
            return Ok(());
        }

        for run in runs {
            println!(
                "  - {} [{}] taxonomy={} renamed={} finished={}",
                run.graph,
                run.status.as_str(),
                run.taxonomy_version,
                run.functions_tagged,
                run.finished_at
            );
        }
    }

    Ok(())
}
