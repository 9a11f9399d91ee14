use std::fs;
use std::path::Path;

use func_triage::{canonicalize_or_current, infer_project_name, sha256_bytes, sha256_file};
use tempfile::tempdir;

#[test]
fn canonicalize_or_current_returns_cwd_for_dot() {
    let original = std::env::current_dir().expect("cwd");
    let tmp = tempdir().expect("tempdir");
    std::env::set_current_dir(tmp.path()).expect("chdir tmp");

    let result = canonicalize_or_current(".").expect("canonicalize").canonicalize().expect("canon");
    let expected = tmp.path().canonicalize().expect("canon tmp");
    assert_eq!(result, expected);

    std::env::set_current_dir(original).expect("restore cwd");
}

#[test]
fn canonicalize_or_current_keeps_nonexistent_paths_absolute() {
    let result = canonicalize_or_current("definitely/not/created/yet").expect("canonicalize");
    assert!(result.is_absolute());
    assert!(result.ends_with("definitely/not/created/yet"));
}

#[test]
fn infer_project_name_uses_last_path_component() {
    assert_eq!(infer_project_name(Path::new("/work/func-triage")), "func-triage");
    assert_eq!(infer_project_name(Path::new("/tmp/project-root")), "project-root");
}

#[test]
fn infer_project_name_falls_back_when_missing() {
    assert_eq!(infer_project_name(Path::new("/")), "unnamed-project");
}

#[test]
fn sha256_file_matches_sha256_bytes() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("snapshot.json");
    fs::write(&path, b"{\"functions\":[]}").expect("write");

    let from_file = sha256_file(&path).expect("hash file");
    assert_eq!(from_file, sha256_bytes(b"{\"functions\":[]}"));
    assert_eq!(from_file.len(), 64);
}
