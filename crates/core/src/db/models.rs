use serde::{Deserialize, Serialize};

/// Record describing a registered call-graph snapshot.
///
/// Snapshots are exported by the host analysis platform; the project only
/// records where they live and what they contained when registered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphRecord {
    /// Human-friendly name (e.g., "dropper.exe (x86)").
    pub name: String,
    /// Path to the snapshot file, relative to the project root if possible.
    pub path: String,
    /// Optional content hash for identity (e.g., SHA-256).
    pub hash: Option<String>,
    /// Function count at registration time.
    pub function_count: Option<u32>,
    /// Imported-symbol count at registration time.
    pub import_count: Option<u32>,
}

impl GraphRecord {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            hash: None,
            function_count: None,
            import_count: None,
        }
    }
}

/// Allowed status values for tagging runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TagRunStatus {
    Pending,
    Running,
    Succeeded,
    Failed,
}

impl TagRunStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagRunStatus::Pending => "pending",
            TagRunStatus::Running => "running",
            TagRunStatus::Succeeded => "succeeded",
            TagRunStatus::Failed => "failed",
        }
    }

    /// Decode a status string stored in SQLite; unknown values degrade to
    /// `Failed` rather than erroring.
    pub fn parse(value: &str) -> Self {
        match value {
            "pending" => TagRunStatus::Pending,
            "running" => TagRunStatus::Running,
            "succeeded" => TagRunStatus::Succeeded,
            _ => TagRunStatus::Failed,
        }
    }
}

/// Record describing one tagging run for bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagRunRecord {
    pub graph: String,
    pub graph_hash: Option<String>,
    pub taxonomy_version: String,
    pub status: TagRunStatus,
    pub functions_tagged: u32,
    pub started_at: String,
    pub finished_at: String,
}

/// One committed (or planned) rename, persisted per run for reporting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabelRecord {
    pub address: u64,
    pub old_name: String,
    pub new_name: String,
    /// Distinct-caller count at the time the run completed.
    pub xref_count: u32,
}
