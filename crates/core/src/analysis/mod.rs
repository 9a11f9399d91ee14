//! Reference resolver: which capability codes does each function directly earn?
//!
//! Attribution is strictly single-hop. A function earns a code only by
//! containing a call-site that targets a tagged imported symbol; calling an
//! internal helper that itself calls a tagged API propagates nothing. This
//! keeps labels precise to direct API use.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::model::CallGraph;
use crate::taxonomy::{CapabilityCode, Taxonomy};

/// One qualifying attribution: a capability code together with the address of
/// the call-site that earned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityHit {
    pub code: CapabilityCode,
    /// Address of the call instruction that referenced the tagged import.
    pub site: u64,
}

/// The capability codes one function directly earns, ordered by the address
/// of the first call-site that earned each code and deduplicated per code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectCapabilities {
    pub hits: Vec<CapabilityHit>,
}

impl DirectCapabilities {
    /// Earned codes in encounter order.
    pub fn codes(&self) -> impl Iterator<Item = &CapabilityCode> {
        self.hits.iter().map(|h| &h.code)
    }

    /// Address of the first qualifying call-site; seeds the disambiguator
    /// when minting a fresh name. `None` only for an empty hit list, which
    /// the resolver never emits.
    pub fn seed_site(&self) -> Option<u64> {
        self.hits.first().map(|h| h.site)
    }

    fn record(&mut self, code: &CapabilityCode, site: u64) {
        // A code is attributed at most once per function, regardless of how
        // many call-sites produced it.
        if self.hits.iter().any(|h| &h.code == code) {
            return;
        }
        self.hits.push(CapabilityHit { code: code.clone(), site });
    }
}

/// Resolve every function's directly earned capability codes.
///
/// Functions with no qualifying call-site are absent from the result.
/// Call-sites whose target resolves to nothing tagged (another function, an
/// unknown address, an import outside the taxonomy) are skipped, never fatal.
pub fn resolve_direct_capabilities(
    taxonomy: &Taxonomy,
    graph: &CallGraph,
) -> BTreeMap<u64, DirectCapabilities> {
    // Import-table address -> code, for the imports the taxonomy covers.
    let tagged_imports: HashMap<u64, &CapabilityCode> = graph
        .imports
        .iter()
        .filter_map(|import| taxonomy.lookup(&import.name).map(|code| (import.address, code)))
        .collect();

    let mut out: BTreeMap<u64, DirectCapabilities> = BTreeMap::new();
    for func in &graph.functions {
        // Walk call-sites in address order so the earned-code order (and the
        // seed site) is deterministic even if the snapshot is unsorted.
        let mut sites = func.call_sites.clone();
        sites.sort_by_key(|s| s.address);

        let mut direct = DirectCapabilities::default();
        for site in &sites {
            if let Some(code) = tagged_imports.get(&site.target) {
                direct.record(code, site.address);
            }
        }
        if !direct.hits.is_empty() {
            out.insert(func.address, direct);
        }
    }
    out
}
