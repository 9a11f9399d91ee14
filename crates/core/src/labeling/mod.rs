//! Label assembler: turns resolved capabilities into final display names.
//!
//! Names carry the only persistent tagging state the platform keeps, so an
//! existing auto-assigned name is decoded once into a structured [`AutoLabel`],
//! merged as a set of codes, and re-rendered. The rendered string is never
//! scanned for code substrings; that containment-style dedup would misfire on
//! codes that happen to be substrings of other codes.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::analysis::DirectCapabilities;
use crate::model::CallGraph;
use crate::taxonomy::{CapabilityCode, Taxonomy};

/// Naming format contract shared with the platform.
///
/// This must be bit-exact across runs for idempotence to hold:
/// `f_<4 hex digits>_<code>[_<code>...]` and, after [`finalize`],
/// a trailing `_xref<N>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConvention {
    /// Prefix the platform gives unanalyzed functions (e.g. `sub_`).
    pub unanalyzed_prefix: String,
    /// Prefix this engine gives auto-labeled functions (e.g. `f_`).
    pub auto_prefix: String,
    /// Marker introducing the cross-reference count suffix.
    pub xref_marker: String,
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self {
            unanalyzed_prefix: "sub_".to_string(),
            auto_prefix: "f_".to_string(),
            xref_marker: "xref".to_string(),
        }
    }
}

impl NamingConvention {
    /// Classify a current display name.
    pub fn classify(&self, name: &str) -> NameKind {
        if name.starts_with(&self.auto_prefix) {
            NameKind::AutoLabeled
        } else if name.starts_with(&self.unanalyzed_prefix) {
            NameKind::Unanalyzed
        } else {
            NameKind::Analyst
        }
    }

    /// Low-order four hex digits of a call-site address, used to keep fresh
    /// names distinct when several functions earn the same codes.
    pub fn disambiguator(&self, site: u64) -> String {
        format!("{:04x}", site & 0xffff)
    }
}

/// What a function's current display name says about its analysis state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    /// Platform default name; eligible for a fresh auto label.
    Unanalyzed,
    /// Previously auto-labeled by this engine; eligible for appends.
    AutoLabeled,
    /// Named by an analyst; never touched.
    Analyst,
}

/// Structured form of an auto-assigned name: the source of truth for which
/// codes a function carries. Display strings are generated from this, never
/// the other way around (beyond the initial decode of platform state).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoLabel {
    pub disambiguator: String,
    pub codes: Vec<CapabilityCode>,
    /// Distinct-caller count; present only after finalization.
    pub xref: Option<usize>,
}

impl AutoLabel {
    /// Mint a fresh label for a previously unanalyzed function.
    pub fn mint(convention: &NamingConvention, seed_site: u64, codes: Vec<CapabilityCode>) -> Self {
        Self { disambiguator: convention.disambiguator(seed_site), codes, xref: None }
    }

    /// Decode an existing auto-assigned name.
    ///
    /// Returns `None` for names that carry the auto prefix but do not follow
    /// the format contract; such names are left untouched downstream.
    pub fn parse(name: &str, convention: &NamingConvention) -> Option<Self> {
        let rest = name.strip_prefix(&convention.auto_prefix)?;
        let mut tokens = rest.split('_');

        let disambiguator = tokens.next()?;
        if disambiguator.len() != 4 || !disambiguator.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let mut codes = Vec::new();
        let mut xref = None;
        for token in tokens {
            if token.is_empty() {
                return None;
            }
            if let Some(digits) = token.strip_prefix(convention.xref_marker.as_str()) {
                if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
                    // The xref suffix is only valid once, in final position.
                    if xref.is_some() {
                        return None;
                    }
                    xref = Some(digits.parse().ok()?);
                    continue;
                }
            }
            if xref.is_some() {
                return None;
            }
            codes.push(CapabilityCode::new(token));
        }

        Some(Self { disambiguator: disambiguator.to_string(), codes, xref })
    }

    /// Append a code unless the label already carries it. Returns whether the
    /// label changed.
    pub fn merge_code(&mut self, code: &CapabilityCode) -> bool {
        if self.codes.contains(code) {
            return false;
        }
        self.codes.push(code.clone());
        true
    }

    /// Pure rendering step producing the display name.
    pub fn render(&self, convention: &NamingConvention) -> String {
        let mut name = format!("{}{}", convention.auto_prefix, self.disambiguator);
        for code in &self.codes {
            name.push('_');
            name.push_str(code.as_str());
        }
        if let Some(count) = self.xref {
            name.push('_');
            name.push_str(&convention.xref_marker);
            name.push_str(&count.to_string());
        }
        name
    }
}

/// A single proposed rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rename {
    pub address: u64,
    pub old: String,
    pub new: String,
}

/// The full, pure output of one tagging pass: every name that would change.
///
/// Committing the plan (writing names back into the platform's function
/// table or snapshot) is the caller's explicit, isolated step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamePlan {
    pub renames: Vec<Rename>,
}

impl RenamePlan {
    pub fn is_empty(&self) -> bool {
        self.renames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.renames.len()
    }

    /// The plan as an address-to-new-name map, for applying to a snapshot.
    pub fn as_name_map(&self) -> BTreeMap<u64, String> {
        self.renames.iter().map(|r| (r.address, r.new.clone())).collect()
    }
}

/// First pass: decide each tagged function's new name (without xref suffix).
///
/// Only functions present in the resolver output are considered. Analyst
/// names and malformed auto-prefixed names are skipped; unanalyzed names are
/// minted fresh; existing auto labels get codes they lack appended in
/// encounter order. Any stale xref suffix is dropped here and recomputed by
/// [`finalize`].
pub fn assign(
    direct: &BTreeMap<u64, DirectCapabilities>,
    current_names: &BTreeMap<u64, String>,
    convention: &NamingConvention,
) -> BTreeMap<u64, String> {
    let mut out = BTreeMap::new();
    for (&address, caps) in direct {
        let name = match current_names.get(&address) {
            Some(name) => name,
            None => continue,
        };
        match convention.classify(name) {
            NameKind::Unanalyzed => {
                let seed = match caps.seed_site() {
                    Some(site) => site,
                    None => continue,
                };
                let label = AutoLabel::mint(convention, seed, caps.codes().cloned().collect());
                out.insert(address, label.render(convention));
            }
            NameKind::AutoLabeled => {
                let mut label = match AutoLabel::parse(name, convention) {
                    Some(label) => label,
                    None => continue,
                };
                for code in caps.codes() {
                    label.merge_code(code);
                }
                label.xref = None;
                out.insert(address, label.render(convention));
            }
            NameKind::Analyst => {}
        }
    }
    out
}

/// Second pass, strictly after assignment: append the cross-reference count
/// to every auto-labeled function.
///
/// The count is the number of distinct callers in the whole call graph,
/// whether or not those callers are themselves tagged, including zero.
pub fn finalize(
    graph: &CallGraph,
    current_names: &BTreeMap<u64, String>,
    convention: &NamingConvention,
) -> BTreeMap<u64, String> {
    let callers = graph.caller_map();
    let mut out = BTreeMap::new();
    for func in &graph.functions {
        let name = match current_names.get(&func.address) {
            Some(name) => name,
            None => continue,
        };
        if convention.classify(name) != NameKind::AutoLabeled {
            continue;
        }
        let mut label = match AutoLabel::parse(name, convention) {
            Some(label) => label,
            None => continue,
        };
        label.xref = Some(callers.get(&func.address).map_or(0, BTreeSet::len));
        out.insert(func.address, label.render(convention));
    }
    out
}

/// One full tagging pass as a pure function of the snapshot and taxonomy.
///
/// Planning twice over a committed snapshot yields the same final names:
/// codes are never duplicated and the xref suffix is replaced, not stacked.
pub fn plan(taxonomy: &Taxonomy, graph: &CallGraph, convention: &NamingConvention) -> RenamePlan {
    let original = graph.current_names();
    let direct = crate::analysis::resolve_direct_capabilities(taxonomy, graph);

    let mut working = original.clone();
    for (address, name) in assign(&direct, &original, convention) {
        working.insert(address, name);
    }
    for (address, name) in finalize(graph, &working, convention) {
        working.insert(address, name);
    }

    let mut renames = Vec::new();
    for func in &graph.functions {
        if let (Some(old), Some(new)) = (original.get(&func.address), working.get(&func.address)) {
            if old != new {
                renames.push(Rename { address: func.address, old: old.clone(), new: new.clone() });
            }
        }
    }
    RenamePlan { renames }
}
