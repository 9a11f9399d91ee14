//! Tagging run coordination: snapshot + taxonomy -> rename plan + run record.

use std::path::PathBuf;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::db::{LabelRecord, ProjectContext, TagRunRecord, TagRunStatus};
use crate::labeling::{plan, NamingConvention, RenamePlan};
use crate::model::{load_call_graph, CallGraph};
use crate::taxonomy::{Taxonomy, TaxonomyError};

/// Request to run the tagging engine over one call-graph snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagRequest {
    /// Name the snapshot is registered under (used for run bookkeeping).
    pub graph_name: String,
    /// Path to the snapshot file on disk.
    pub graph_path: PathBuf,
    /// Optional external taxonomy table; the builtin table is used when absent.
    pub taxonomy_path: Option<PathBuf>,
    /// Optional content hash of the snapshot for provenance.
    pub graph_hash: Option<String>,
}

#[derive(Debug, Error)]
pub enum TaggingError {
    #[error("Call-graph snapshot not found at {0}")]
    MissingSnapshot(PathBuf),
    #[error("Failed to load call-graph snapshot: {0}")]
    Snapshot(String),
    #[error(transparent)]
    Taxonomy(#[from] TaxonomyError),
}

/// Result of one tagging run, before any write-back.
#[derive(Debug, Clone)]
pub struct TagOutcome {
    pub plan: RenamePlan,
    pub taxonomy_version: String,
    /// Number of functions whose names would change.
    pub functions_tagged: usize,
}

/// Coordinator that ties project context + naming convention to persist runs.
pub struct TagRunner<'a> {
    pub ctx: &'a ProjectContext,
    pub convention: NamingConvention,
}

impl<'a> TagRunner<'a> {
    pub fn new(ctx: &'a ProjectContext) -> Self {
        Self { ctx, convention: NamingConvention::default() }
    }

    /// Load the snapshot and taxonomy, compute the rename plan, and record
    /// the run in the project database. Committing the plan back into the
    /// snapshot is left to the caller as an explicit write-back step.
    pub fn run(&self, request: &TagRequest) -> Result<TagOutcome, TaggingError> {
        if !request.graph_path.is_file() {
            return Err(TaggingError::MissingSnapshot(request.graph_path.clone()));
        }

        let graph = load_call_graph(&request.graph_path)
            .map_err(|e| TaggingError::Snapshot(e.to_string()))?;
        let taxonomy = match &request.taxonomy_path {
            Some(path) => Taxonomy::from_path(path)?,
            None => Taxonomy::builtin()?,
        };

        let plan = plan(&taxonomy, &graph, &self.convention);
        let outcome = TagOutcome {
            functions_tagged: plan.len(),
            taxonomy_version: taxonomy.version().to_string(),
            plan,
        };

        // Best-effort persistence; a bookkeeping failure never fails the run.
        let now = Utc::now().to_rfc3339();
        let record = TagRunRecord {
            graph: request.graph_name.clone(),
            graph_hash: request.graph_hash.clone(),
            taxonomy_version: outcome.taxonomy_version.clone(),
            status: TagRunStatus::Succeeded,
            functions_tagged: outcome.functions_tagged as u32,
            started_at: now.clone(),
            finished_at: now,
        };
        if let Ok(run_id) = self.ctx.db.insert_tag_run(&record) {
            let labels = label_records(&graph, &outcome.plan);
            let _ = self.ctx.db.insert_labels(run_id, &labels);
        }

        Ok(outcome)
    }
}

/// Build label rows for persistence, pairing each rename with its final
/// distinct-caller count.
fn label_records(graph: &CallGraph, plan: &RenamePlan) -> Vec<LabelRecord> {
    plan.renames
        .iter()
        .map(|rename| LabelRecord {
            address: rename.address,
            old_name: rename.old.clone(),
            new_name: rename.new.clone(),
            xref_count: graph.callers_of(rename.address).len() as u32,
        })
        .collect()
}
