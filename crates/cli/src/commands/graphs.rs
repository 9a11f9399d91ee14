use std::path::Path;

use anyhow::{anyhow, Context, Result};
use triage_core::db::{GraphRecord, ProjectContext, ProjectLayout};
use triage_core::model::load_call_graph;

use crate::{canonicalize_or_current, sha256_file};

/// Register a call-graph snapshot file in the project database.
///
/// This does not run the tagging engine; it records that the snapshot exists,
/// where it lives relative to the project root, and what it contained.
pub fn add_graph_command(
    root: &str,
    path: &str,
    name: Option<String>,
    skip_hash: bool,
) -> Result<()> {
    let root_path = canonicalize_or_current(root)?;
    let ctx = ProjectContext::from_root(&root_path)?;

    // Normalize the snapshot path.
    let input_path = Path::new(path);
    let abs_path = if input_path.is_absolute() {
        input_path.to_path_buf()
    } else {
        root_path.join(input_path)
    };

    if !abs_path.exists() {
        return Err(anyhow!("Snapshot file does not exist: {}", abs_path.display()));
    }

    // Parse the snapshot up front so registration fails loudly on garbage
    // input instead of at tag time.
    let graph = load_call_graph(&abs_path)?;

    // Store path relative to project root when possible.
    let rel_path = abs_path
        .canonicalize()
        .ok()
        .and_then(|abs_canon| {
            root_path.canonicalize().ok().and_then(|root_canon| {
                abs_canon.strip_prefix(&root_canon).ok().map(|p| p.to_path_buf())
            })
        })
        .or_else(|| abs_path.strip_prefix(&root_path).ok().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| abs_path.clone());
    let rel_path_str = rel_path.to_string_lossy().to_string();

    let graph_name = name.unwrap_or_else(|| {
        input_path.file_name().and_then(|os| os.to_str()).unwrap_or(path).to_string()
    });

    let hash = if skip_hash { None } else { Some(sha256_file(&abs_path)?) };

    let record = GraphRecord {
        name: graph_name,
        path: rel_path_str,
        hash,
        function_count: Some(graph.functions.len() as u32),
        import_count: Some(graph.imports.len() as u32),
    };

    let id = ctx.db.insert_graph(&record).context("Failed to insert graph record")?;

    println!("Added call-graph snapshot:");
    println!("  Id: {}", id);
    println!("  Name: {}", record.name);
    println!("  Path (relative): {}", record.path);
    println!("  Functions: {}", graph.functions.len());
    println!("  Imports: {}", graph.imports.len());

    Ok(())
}

/// List all call-graph snapshots registered in the project database.
pub fn list_graphs_command(root: &str, json: bool) -> Result<()> {
    let root_path = canonicalize_or_current(root)?;
    let layout = ProjectLayout::new(&root_path);
    let (_config, _db_path, db) = triage_core::db::open_project_db(&layout)?;

    let graphs = db.list_graphs().context("Failed to list graphs")?;

    if json {
        let serialized =
            serde_json::to_string_pretty(&graphs).context("Failed to serialize graphs to JSON")?;
        println!("{}", serialized);
    } else {
        println!("Graphs ({}):", graphs.len());
        if graphs.is_empty() {
            println!("  (none)");
            return Ok(());
        }

        for graph in graphs {
            let hash_display = graph.hash.as_deref().unwrap_or("-");
            let functions = graph.function_count.map(|c| c.to_string()).unwrap_or("-".into());
            let imports = graph.import_count.map(|c| c.to_string()).unwrap_or("-".into());
            println!(
                "  - {} path={} functions={} imports={} hash={}",
                graph.name, graph.path, functions, imports, hash_display
            );
        }
    }

    Ok(())
}
