use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use triage_core::db::ProjectContext;
use triage_core::model::{load_call_graph, save_call_graph};
use triage_core::services::tagging::{TagRequest, TagRunner};

use crate::{canonicalize_or_current, sha256_file};

/// Run the capability tagging engine over a registered snapshot (by name) or
/// an explicit snapshot file.
///
/// Without `--apply` this is a dry run: the rename plan is printed (or
/// emitted as JSON) and recorded in the project database, but the snapshot is
/// untouched. With `--apply`, the plan is committed back into the snapshot
/// file as the explicit write-back step.
pub fn tag_command(
    root: &str,
    graph: Option<&str>,
    file: Option<&str>,
    taxonomy: Option<&str>,
    apply: bool,
    json: bool,
) -> Result<()> {
    let root_path = canonicalize_or_current(root)?;
    let ctx = ProjectContext::from_root(&root_path)?;

    let (graph_name, graph_path) = resolve_graph(&ctx, &root_path, graph, file)?;

    let taxonomy_path = taxonomy
        .map(|t| resolve_from_root(&root_path, t))
        .or_else(|| {
            ctx.config.default_taxonomy.as_ref().map(|t| resolve_from_root(&root_path, t))
        });

    let graph_hash = sha256_file(&graph_path).ok();
    let request = TagRequest { graph_name, graph_path: graph_path.clone(), taxonomy_path, graph_hash };

    let runner = TagRunner::new(&ctx);
    let outcome = runner.run(&request)?;

    if apply && !outcome.plan.is_empty() {
        let mut graph = load_call_graph(&graph_path)?;
        graph.apply_names(&outcome.plan.as_name_map());
        save_call_graph(&graph_path, &graph)?;
    }

    if json {
        let serialized = serde_json::to_string_pretty(&outcome.plan)
            .context("Failed to serialize rename plan to JSON")?;
        println!("{}", serialized);
        return Ok(());
    }

    println!("Tagging run (taxonomy {}):", outcome.taxonomy_version);
    println!("  Snapshot: {}", graph_path.display());
    println!("  Functions renamed: {}", outcome.functions_tagged);
    for rename in &outcome.plan.renames {
        println!("  {:#x}: {} -> {}", rename.address, rename.old, rename.new);
    }
    if outcome.plan.is_empty() {
        println!("  (no changes)");
    } else if apply {
        println!("Applied plan to snapshot.");
    } else {
        println!("Dry run; re-run with --apply to commit names into the snapshot.");
    }

    Ok(())
}

/// Resolve which snapshot to tag: an explicit `--file`, or a registered
/// graph name looked up in the project database.
fn resolve_graph(
    ctx: &ProjectContext,
    root_path: &Path,
    graph: Option<&str>,
    file: Option<&str>,
) -> Result<(String, PathBuf)> {
    if let Some(file) = file {
        let path = resolve_from_root(root_path, file);
        let name = path
            .file_name()
            .and_then(|os| os.to_str())
            .unwrap_or(file)
            .to_string();
        return Ok((name, path));
    }

    let name = graph.ok_or_else(|| anyhow!("Provide either --graph <name> or --file <path>"))?;
    let graphs = ctx.db.list_graphs().context("Failed to list graphs")?;
    let record = graphs
        .into_iter()
        .find(|g| g.name == name)
        .ok_or_else(|| anyhow!("No registered graph named '{}'", name))?;
    Ok((record.name.clone(), resolve_from_root(root_path, &record.path)))
}

fn resolve_from_root(root_path: &Path, path: &str) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        root_path.join(p)
    }
}
