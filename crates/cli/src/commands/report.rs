use anyhow::{anyhow, Context, Result};
use triage_core::db::ProjectLayout;

use crate::canonicalize_or_current;

/// Show the labeled functions from the latest tagging run for a graph,
/// highest cross-reference count first.
///
/// The xref ordering is the triage signal: heavily-called tagged functions
/// are usually the interesting ones to read first.
pub fn report_command(root: &str, graph: &str, json: bool) -> Result<()> {
    let root_path = canonicalize_or_current(root)?;
    let layout = ProjectLayout::new(&root_path);
    let (_config, _db_path, db) = triage_core::db::open_project_db(&layout)?;

    let run_id = db
        .latest_run_id(graph)
        .context("Failed to query tag runs")?
        .ok_or_else(|| anyhow!("No recorded tag runs for graph '{}'", graph))?;
    let labels = db.labels_for_run(run_id).context("Failed to load labels")?;

    if json {
        let serialized =
            serde_json::to_string_pretty(&labels).context("Failed to serialize labels to JSON")?;
        println!("{}", serialized);
    } else {
        println!("Labeled functions for '{}' ({}):", graph, labels.len());
        if labels.is_empty() {
            println!("  (none)");
            return Ok(());
        }

        for label in labels {
            println!(
                "  {:#x} xref={} {} (was {})",
                label.address, label.xref_count, label.new_name, label.old_name
            );
        }
    }

    Ok(())
}
