use triage_core::db::{
    GraphRecord, LabelRecord, ProjectDb, ProjectLayout, TagRunRecord, TagRunStatus,
};

fn open_temp_db(temp: &tempfile::TempDir) -> ProjectDb {
    let layout = ProjectLayout::new(temp.path());
    std::fs::create_dir_all(&layout.meta_dir).expect("meta dir");
    ProjectDb::open(&layout.db_path).expect("open db")
}

#[test]
fn graphs_round_trip() {
    let temp = tempfile::tempdir().expect("tempdir");
    let db = open_temp_db(&temp);

    let record = GraphRecord {
        name: "dropper.exe".into(),
        path: "graphs/dropper.json".into(),
        hash: Some("abc123".into()),
        function_count: Some(42),
        import_count: Some(7),
    };
    let id = db.insert_graph(&record).expect("insert");
    assert!(id > 0);

    let listed = db.list_graphs().expect("list");
    assert_eq!(listed, vec![record]);
}

#[test]
fn tag_runs_list_newest_first_and_filter_by_graph() {
    let temp = tempfile::tempdir().expect("tempdir");
    let db = open_temp_db(&temp);

    let mut run = TagRunRecord {
        graph: "a.json".into(),
        graph_hash: None,
        taxonomy_version: "builtin-1".into(),
        status: TagRunStatus::Succeeded,
        functions_tagged: 3,
        started_at: "2026-01-01T00:00:00Z".into(),
        finished_at: "2026-01-01T00:00:01Z".into(),
    };
    db.insert_tag_run(&run).expect("insert a");
    run.graph = "b.json".into();
    run.functions_tagged = 9;
    db.insert_tag_run(&run).expect("insert b");

    let all = db.list_tag_runs(None).expect("list all");
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].graph, "b.json");

    let only_a = db.list_tag_runs(Some("a.json")).expect("list a");
    assert_eq!(only_a.len(), 1);
    assert_eq!(only_a[0].functions_tagged, 3);
}

#[test]
fn labels_are_stored_per_run_and_ordered_by_xref() {
    let temp = tempfile::tempdir().expect("tempdir");
    let db = open_temp_db(&temp);

    let run = TagRunRecord {
        graph: "a.json".into(),
        graph_hash: None,
        taxonomy_version: "builtin-1".into(),
        status: TagRunStatus::Succeeded,
        functions_tagged: 2,
        started_at: "2026-01-01T00:00:00Z".into(),
        finished_at: "2026-01-01T00:00:01Z".into(),
    };
    let run_id = db.insert_tag_run(&run).expect("insert run");

    let labels = vec![
        LabelRecord {
            address: 0x1000,
            old_name: "sub_1000".into(),
            new_name: "f_1000_netwC_xref1".into(),
            xref_count: 1,
        },
        LabelRecord {
            address: 0x2000,
            old_name: "sub_2000".into(),
            new_name: "f_2010_fileW_xref9".into(),
            xref_count: 9,
        },
    ];
    db.insert_labels(run_id, &labels).expect("insert labels");

    let loaded = db.labels_for_run(run_id).expect("load labels");
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].address, 0x2000, "highest xref first");
    assert_eq!(loaded[1].new_name, "f_1000_netwC_xref1");

    assert_eq!(db.latest_run_id("a.json").expect("latest"), Some(run_id));
    assert_eq!(db.latest_run_id("missing.json").expect("latest"), None);
}

#[test]
fn newer_schema_versions_are_rejected() {
    let temp = tempfile::tempdir().expect("tempdir");
    let layout = ProjectLayout::new(temp.path());
    std::fs::create_dir_all(&layout.meta_dir).expect("meta dir");

    {
        let conn = rusqlite::Connection::open(&layout.db_path).expect("raw open");
        conn.execute_batch("PRAGMA user_version = 99;").expect("bump version");
    }

    let err = ProjectDb::open(&layout.db_path).expect_err("must reject");
    let message = err.to_string();
    assert!(message.contains("Unsupported schema version 99"), "got: {message}");
}

#[test]
fn reopening_an_existing_db_is_a_no_op_migration() {
    let temp = tempfile::tempdir().expect("tempdir");
    let layout = ProjectLayout::new(temp.path());
    std::fs::create_dir_all(&layout.meta_dir).expect("meta dir");

    let db = ProjectDb::open(&layout.db_path).expect("first open");
    drop(db);
    let db = ProjectDb::open(&layout.db_path).expect("second open");
    let version: i32 = db
        .connection()
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .expect("version");
    assert_eq!(version, triage_core::db::CURRENT_SCHEMA_VERSION);
}
