//! Call-graph snapshot IR: functions, call-sites, and imported symbols.
//!
//! A snapshot is exported by the host analysis platform (Binary Ninja,
//! Ghidra, rizin, ...) and consumed here read-only. The engine never mutates
//! a snapshot; renames are computed as a plan and written back by the caller.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A single instruction-level reference from one function to a target address.
///
/// The target may be another function or an imported symbol. A call-site
/// belongs to exactly one caller (the function whose `call_sites` list it
/// appears in).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSite {
    /// Address of the call instruction itself.
    pub address: u64,
    /// Address the call resolves to.
    pub target: u64,
}

/// Minimal IR for a function as exported by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionInfo {
    /// Stable identity: the function's start address.
    pub address: u64,
    /// Current display name (platform state; rewritten on commit).
    pub name: String,
    /// Call-sites originating in this function, ordered by address.
    #[serde(default)]
    pub call_sites: Vec<CallSite>,
}

impl FunctionInfo {
    pub fn new(address: u64, name: impl Into<String>) -> Self {
        Self { address, name: name.into(), call_sites: Vec::new() }
    }
}

/// An entry in the binary's import table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedSymbol {
    /// Canonical API name (e.g. `CreateFileW`).
    pub name: String,
    /// Resolved address in the import table.
    pub address: u64,
}

/// Immutable view of a binary's call graph at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallGraph {
    pub functions: Vec<FunctionInfo>,
    #[serde(default)]
    pub imports: Vec<ImportedSymbol>,
}

impl CallGraph {
    pub fn new(functions: Vec<FunctionInfo>, imports: Vec<ImportedSymbol>) -> Self {
        Self { functions, imports }
    }

    /// Look up a function by its start address.
    pub fn function_at(&self, address: u64) -> Option<&FunctionInfo> {
        self.functions.iter().find(|f| f.address == address)
    }

    /// Look up an imported symbol by its import-table address.
    pub fn import_at(&self, address: u64) -> Option<&ImportedSymbol> {
        self.imports.iter().find(|i| i.address == address)
    }

    /// Enumerate all call-sites that target `address`, paired with the
    /// address of the owning (caller) function.
    pub fn call_sites_targeting(&self, address: u64) -> Vec<(u64, CallSite)> {
        let mut out = Vec::new();
        for func in &self.functions {
            for site in &func.call_sites {
                if site.target == address {
                    out.push((func.address, *site));
                }
            }
        }
        out
    }

    /// Distinct caller addresses for the function at `address`.
    ///
    /// This is the xref source of truth: it counts every caller recorded in
    /// the snapshot, whether or not that caller is itself tagged.
    pub fn callers_of(&self, address: u64) -> BTreeSet<u64> {
        self.call_sites_targeting(address).into_iter().map(|(caller, _)| caller).collect()
    }

    /// Distinct callers for every call target in the snapshot, built in a
    /// single pass. Equivalent to `callers_of` per target but avoids
    /// rescanning the graph once per function.
    pub fn caller_map(&self) -> BTreeMap<u64, BTreeSet<u64>> {
        let mut map: BTreeMap<u64, BTreeSet<u64>> = BTreeMap::new();
        for func in &self.functions {
            for site in &func.call_sites {
                map.entry(site.target).or_default().insert(func.address);
            }
        }
        map
    }

    /// Current display names keyed by function address.
    pub fn current_names(&self) -> BTreeMap<u64, String> {
        self.functions.iter().map(|f| (f.address, f.name.clone())).collect()
    }

    /// Apply renames in place. Unknown addresses are ignored.
    pub fn apply_names(&mut self, names: &BTreeMap<u64, String>) {
        for func in &mut self.functions {
            if let Some(name) = names.get(&func.address) {
                func.name = name.clone();
            }
        }
    }
}

/// Load a call-graph snapshot from disk (JSON or YAML based on extension).
pub fn load_call_graph(path: &Path) -> Result<CallGraph> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read call-graph snapshot at {}", path.display()))?;
    let graph: CallGraph = if is_yaml(path) {
        serde_yaml::from_str(&contents).with_context(|| {
            format!("Failed to parse call-graph snapshot YAML at {}", path.display())
        })?
    } else {
        serde_json::from_str(&contents).with_context(|| {
            format!("Failed to parse call-graph snapshot JSON at {}", path.display())
        })?
    };
    Ok(graph)
}

/// Write a call-graph snapshot back to disk in the format its extension implies.
pub fn save_call_graph(path: &Path, graph: &CallGraph) -> Result<()> {
    let contents = if is_yaml(path) {
        serde_yaml::to_string(graph).context("Failed to serialize call-graph snapshot to YAML")?
    } else {
        serde_json::to_string_pretty(graph)
            .context("Failed to serialize call-graph snapshot to JSON")?
    };
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write call-graph snapshot at {}", path.display()))?;
    Ok(())
}

fn is_yaml(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("yaml") | Some("yml"))
}
