//! Capability taxonomy: the mapping from API symbol names to capability codes.
//!
//! The taxonomy is pure data, versioned independently of the engine.
//! Extending capability coverage means adding entries, never changing engine
//! logic. Several API names intentionally map to the same code (ANSI/wide/
//! legacy variants are normalized, e.g. `CreateFile`/`CreateFileA`/
//! `CreateFileW` all map to `fileH`).

mod builtin;

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Known capability family prefixes.
const FAMILY_PREFIXES: [&str; 7] = ["netw", "reg", "file", "proc", "serv", "thread", "str"];

/// A short opaque token denoting one inferred behavior category
/// (e.g. `netwC` = "opens a network connection").
///
/// The engine interprets nothing beyond equality and the family prefix.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilityCode(pub String);

impl CapabilityCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The functional family this code belongs to, if its prefix is one of
    /// the known families.
    pub fn family(&self) -> Option<&'static str> {
        FAMILY_PREFIXES.iter().find(|p| self.0.starts_with(**p)).copied()
    }
}

impl std::fmt::Display for CapabilityCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error type for taxonomy construction and loading.
#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("Failed to read taxonomy file at {path}: {source}")]
    Io { path: String, source: std::io::Error },

    #[error("Failed to parse taxonomy file at {path}: {message}")]
    Parse { path: String, message: String },

    /// Duplicate API keys are rejected at load time rather than resolved by
    /// silent last-write-wins.
    #[error("Duplicate taxonomy entry for API '{api}': '{first}' vs '{second}'")]
    DuplicateApi { api: String, first: String, second: String },
}

/// Convenience result type for taxonomy operations.
pub type TaxonomyResult<T> = Result<T, TaxonomyError>;

/// One API-name-to-code row in a taxonomy table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyEntry {
    pub api: String,
    pub code: String,
}

/// One functional family's worth of entries in a taxonomy file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyFamily {
    pub name: String,
    pub entries: Vec<TaxonomyEntry>,
}

/// On-disk representation of an externally curated taxonomy table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyFile {
    /// Version string of the table itself, independent of the engine version.
    pub version: String,
    pub families: Vec<TaxonomyFamily>,
}

/// A validated, immutable API-name-to-capability-code mapping.
///
/// Lookup is total over the table's domain and partial over all possible API
/// names; an unknown name is not an error, simply no attribution.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    version: String,
    entries: HashMap<String, CapabilityCode>,
}

impl Taxonomy {
    /// Build a taxonomy from `(api, code)` pairs, rejecting duplicate keys.
    pub fn from_pairs<I, S, T>(version: impl Into<String>, pairs: I) -> TaxonomyResult<Self>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut entries: HashMap<String, CapabilityCode> = HashMap::new();
        for (api, code) in pairs {
            let api = api.into();
            let code = CapabilityCode::new(code);
            if let Some(existing) = entries.get(&api) {
                return Err(TaxonomyError::DuplicateApi {
                    api,
                    first: existing.as_str().to_string(),
                    second: code.as_str().to_string(),
                });
            }
            entries.insert(api, code);
        }
        Ok(Self { version: version.into(), entries })
    }

    /// The curated table shipped with the crate.
    pub fn builtin() -> TaxonomyResult<Self> {
        Self::from_pairs(builtin::BUILTIN_VERSION, builtin::BUILTIN_ENTRIES.iter().copied())
    }

    /// Load an external taxonomy table (JSON or YAML based on extension).
    pub fn from_path(path: &Path) -> TaxonomyResult<Self> {
        let path_str = path.display().to_string();
        let contents = std::fs::read_to_string(path)
            .map_err(|source| TaxonomyError::Io { path: path_str.clone(), source })?;

        let is_json = path.extension().and_then(|e| e.to_str()) == Some("json");
        let file: TaxonomyFile = if is_json {
            serde_json::from_str(&contents)
                .map_err(|e| TaxonomyError::Parse { path: path_str.clone(), message: e.to_string() })?
        } else {
            serde_yaml::from_str(&contents)
                .map_err(|e| TaxonomyError::Parse { path: path_str.clone(), message: e.to_string() })?
        };

        Self::from_file(file)
    }

    /// Flatten a parsed taxonomy file into a validated taxonomy.
    pub fn from_file(file: TaxonomyFile) -> TaxonomyResult<Self> {
        let pairs = file
            .families
            .into_iter()
            .flat_map(|family| family.entries)
            .map(|entry| (entry.api, entry.code));
        Self::from_pairs(file_version_or_default(file.version), pairs)
    }

    /// Capability code for an API name, if the table covers it.
    pub fn lookup(&self, api_name: &str) -> Option<&CapabilityCode> {
        self.entries.get(api_name)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn file_version_or_default(version: String) -> String {
    if version.trim().is_empty() {
        "unversioned".to_string()
    } else {
        version
    }
}
