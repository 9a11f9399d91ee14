use triage_core::labeling::{plan, AutoLabel, NameKind, NamingConvention};
use triage_core::model::{CallGraph, CallSite, FunctionInfo, ImportedSymbol};
use triage_core::taxonomy::Taxonomy;

fn taxonomy() -> Taxonomy {
    Taxonomy::from_pairs("test", [("connect", "netwC"), ("send", "netwS")]).expect("taxonomy")
}

fn func(address: u64, name: &str, sites: &[(u64, u64)]) -> FunctionInfo {
    FunctionInfo {
        address,
        name: name.to_string(),
        call_sites: sites.iter().map(|&(address, target)| CallSite { address, target }).collect(),
    }
}

fn import(name: &str, address: u64) -> ImportedSymbol {
    ImportedSymbol { name: name.to_string(), address }
}

fn apply(graph: &mut CallGraph, taxonomy: &Taxonomy, convention: &NamingConvention) -> usize {
    let p = plan(taxonomy, graph, convention);
    let count = p.len();
    graph.apply_names(&p.as_name_map());
    count
}

#[test]
fn fresh_mint_combines_codes_and_xref() {
    // sub_1000 calls connect and send; three other functions call sub_1000.
    let mut graph = CallGraph::new(
        vec![
            func(0x1000, "sub_1000", &[(0x1000, 0x9000), (0x1008, 0x9008)]),
            func(0x2000, "sub_2000", &[(0x2010, 0x1000)]),
            func(0x3000, "sub_3000", &[(0x3010, 0x1000)]),
            func(0x4000, "caller_three", &[(0x4010, 0x1000)]),
        ],
        vec![import("connect", 0x9000), import("send", 0x9008)],
    );

    let convention = NamingConvention::default();
    apply(&mut graph, &taxonomy(), &convention);
    assert_eq!(graph.function_at(0x1000).map(|f| f.name.as_str()), Some("f_1000_netwC_netwS_xref3"));
}

#[test]
fn appends_new_codes_without_duplicating_existing_ones() {
    // Previously labeled run found connect only; this run also sees send.
    let mut graph = CallGraph::new(
        vec![
            func(0x2000, "f_2000_netwC_xref1", &[(0x2000, 0x9000), (0x2008, 0x9008)]),
            func(0x5000, "analyst_main", &[(0x5010, 0x2000)]),
        ],
        vec![import("connect", 0x9000), import("send", 0x9008)],
    );

    let convention = NamingConvention::default();
    apply(&mut graph, &taxonomy(), &convention);
    assert_eq!(graph.function_at(0x2000).map(|f| f.name.as_str()), Some("f_2000_netwC_netwS_xref1"));
}

#[test]
fn plan_is_idempotent() {
    let mut graph = CallGraph::new(
        vec![
            func(0x1000, "sub_1000", &[(0x1000, 0x9000), (0x1008, 0x9008)]),
            func(0x2000, "sub_2000", &[(0x2010, 0x1000)]),
        ],
        vec![import("connect", 0x9000), import("send", 0x9008)],
    );

    let taxonomy = taxonomy();
    let convention = NamingConvention::default();
    apply(&mut graph, &taxonomy, &convention);
    let first = graph.clone();

    let second_changes = apply(&mut graph, &taxonomy, &convention);
    assert_eq!(second_changes, 0, "second pass must be a no-op");
    assert_eq!(graph, first);
}

#[test]
fn analyst_names_are_never_touched() {
    let mut graph = CallGraph::new(
        vec![func(0x1000, "decrypt_config", &[(0x1010, 0x9000)])],
        vec![import("connect", 0x9000)],
    );

    apply(&mut graph, &taxonomy(), &NamingConvention::default());
    assert_eq!(graph.function_at(0x1000).map(|f| f.name.as_str()), Some("decrypt_config"));
}

#[test]
fn xref_zero_is_recorded() {
    let mut graph = CallGraph::new(
        vec![func(0x1000, "sub_1000", &[(0x1010, 0x9000)])],
        vec![import("connect", 0x9000)],
    );

    apply(&mut graph, &taxonomy(), &NamingConvention::default());
    assert_eq!(graph.function_at(0x1000).map(|f| f.name.as_str()), Some("f_1010_netwC_xref0"));
}

#[test]
fn xref_counts_untagged_callers_and_dedupes_per_caller() {
    // Two call-sites from the same caller count once; the analyst-named
    // caller still counts even though it is never renamed.
    let mut graph = CallGraph::new(
        vec![
            func(0x1000, "sub_1000", &[(0x1010, 0x9000)]),
            func(0x2000, "dispatch_table_walker", &[(0x2010, 0x1000), (0x2020, 0x1000)]),
        ],
        vec![import("connect", 0x9000)],
    );

    apply(&mut graph, &taxonomy(), &NamingConvention::default());
    assert_eq!(graph.function_at(0x1000).map(|f| f.name.as_str()), Some("f_1010_netwC_xref1"));
}

#[test]
fn stale_xref_suffix_is_replaced_not_stacked() {
    // Caller set changed since the previous run: xref must be recomputed.
    let mut graph = CallGraph::new(
        vec![
            func(0x1000, "f_1010_netwC_xref5", &[(0x1010, 0x9000)]),
            func(0x2000, "sub_2000", &[(0x2010, 0x1000)]),
        ],
        vec![import("connect", 0x9000)],
    );

    apply(&mut graph, &taxonomy(), &NamingConvention::default());
    assert_eq!(graph.function_at(0x1000).map(|f| f.name.as_str()), Some("f_1010_netwC_xref1"));
}

#[test]
fn structured_dedup_is_not_substring_containment() {
    // "netwS" is a prefix of the invented token "netwSx"; containment-based
    // dedup would wrongly suppress the append.
    let convention = NamingConvention::default();
    let mut label = AutoLabel::parse("f_1010_netwSx", &convention).expect("parse");
    assert!(label.merge_code(&triage_core::taxonomy::CapabilityCode::new("netwS")));
    assert_eq!(label.render(&convention), "f_1010_netwSx_netwS");
}

#[test]
fn malformed_auto_prefixed_names_are_left_alone() {
    let mut graph = CallGraph::new(
        vec![func(0x1000, "f_main_loop", &[(0x1010, 0x9000)])],
        vec![import("connect", 0x9000)],
    );

    apply(&mut graph, &taxonomy(), &NamingConvention::default());
    assert_eq!(graph.function_at(0x1000).map(|f| f.name.as_str()), Some("f_main_loop"));
}

#[test]
fn duplicate_xref_suffix_marks_the_name_malformed() {
    let convention = NamingConvention::default();
    assert!(AutoLabel::parse("f_1000_netwC_xref1_xref2", &convention).is_none());

    // Such a name degrades to no tag applied rather than silent repair.
    let mut graph = CallGraph::new(
        vec![func(0x1000, "f_1000_netwC_xref1_xref2", &[(0x1010, 0x9000)])],
        vec![import("connect", 0x9000)],
    );
    apply(&mut graph, &taxonomy(), &convention);
    assert_eq!(
        graph.function_at(0x1000).map(|f| f.name.as_str()),
        Some("f_1000_netwC_xref1_xref2")
    );
}

#[test]
fn classify_distinguishes_the_three_name_kinds() {
    let convention = NamingConvention::default();
    assert_eq!(convention.classify("sub_401000"), NameKind::Unanalyzed);
    assert_eq!(convention.classify("f_1010_netwC"), NameKind::AutoLabeled);
    assert_eq!(convention.classify("WinMain"), NameKind::Analyst);
}

#[test]
fn auto_label_round_trips_through_render_and_parse() {
    let convention = NamingConvention::default();
    let label = AutoLabel::parse("f_3a2c_netwB_netwS_xref7", &convention).expect("parse");
    assert_eq!(label.disambiguator, "3a2c");
    assert_eq!(label.codes.iter().map(|c| c.as_str()).collect::<Vec<_>>(), vec!["netwB", "netwS"]);
    assert_eq!(label.xref, Some(7));
    assert_eq!(label.render(&convention), "f_3a2c_netwB_netwS_xref7");
}

#[test]
fn disambiguator_uses_low_order_hex_digits() {
    let convention = NamingConvention::default();
    assert_eq!(convention.disambiguator(0x40_3a2c), "3a2c");
    assert_eq!(convention.disambiguator(0x10), "0010");
}
