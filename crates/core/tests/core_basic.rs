use triage_core::db::ProjectLayout;

#[test]
fn version_matches_manifest() {
    assert_eq!(triage_core::version(), env!("CARGO_PKG_VERSION"));
}

#[test]
fn layout_paths_hang_off_the_root() {
    let layout = ProjectLayout::new("/tmp/proj");
    assert_eq!(layout.meta_dir, std::path::Path::new("/tmp/proj/.triage"));
    assert_eq!(layout.project_config_path, std::path::Path::new("/tmp/proj/.triage/project.json"));
    assert_eq!(layout.db_path, std::path::Path::new("/tmp/proj/.triage/project.db"));
    assert_eq!(layout.graphs_dir, std::path::Path::new("/tmp/proj/graphs"));
    assert_eq!(layout.db_path_relative_string(), ".triage/project.db");
}

#[test]
fn project_context_loads_config_and_opens_db() {
    let temp = tempfile::tempdir().expect("tempdir");
    let layout = ProjectLayout::new(temp.path());
    std::fs::create_dir_all(&layout.meta_dir).expect("meta dir");
    let config =
        triage_core::db::ProjectConfig::new("CtxProject", layout.db_path_relative_string());
    std::fs::write(&layout.project_config_path, serde_json::to_string_pretty(&config).expect("json"))
        .expect("write config");

    let ctx = triage_core::db::ProjectContext::from_root(temp.path()).expect("ctx");
    assert_eq!(ctx.config.name, "CtxProject");
    assert!(ctx.db_path.ends_with(".triage/project.db"));
    assert!(ctx.db.list_graphs().expect("graphs").is_empty());
}

#[test]
fn absolute_db_path_in_config_is_respected() {
    let temp = tempfile::tempdir().expect("tempdir");
    let layout = ProjectLayout::new(temp.path());
    std::fs::create_dir_all(&layout.meta_dir).expect("meta dir");
    let db_path = temp.path().join("elsewhere.db");
    let config = triage_core::db::ProjectConfig::new(
        "AbsProject",
        db_path.to_string_lossy().into_owned(),
    );
    std::fs::write(&layout.project_config_path, serde_json::to_string_pretty(&config).expect("json"))
        .expect("write config");

    let ctx = triage_core::db::ProjectContext::from_root(temp.path()).expect("ctx");
    assert_eq!(ctx.db_path, db_path);
    assert!(db_path.is_file());
}

#[test]
fn missing_config_fails_with_context() {
    let temp = tempfile::tempdir().expect("tempdir");
    let err = triage_core::db::ProjectContext::from_root(temp.path()).expect_err("no config");
    assert!(format!("{err:#}").contains("Failed to read project config"));
}
