//! Repository Indexer Integration Tests

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use airis_runtime::{generate_repo_index, IndexMode, RepoIndexError, RepoIndexRequest};

/// Build a small mixed-language repository fixture
fn create_fixture_repo() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    write(root, "README.md", "# Fixture\n");
    write(root, "Cargo.toml", "[package]\nname = \"fixture\"\n");
    write(root, "config.yaml", "debug: false\n");
    write(root, "src/main.rs", "fn main() {}\n");
    write(root, "src/lib.rs", "pub fn answer() -> u32 { 42 }\n");
    write(root, "docs/guide.md", "# Guide\n");
    write(root, "tests/test_api.py", "def test_ok():\n    assert True\n");
    write(root, "node_modules/pkg/junk.js", "module.exports = {};\n");
    write(root, "a/b/c/deeply_nested.txt", "below the quick-mode horizon\n");

    temp
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn index_finds_entry_points_docs_configs_and_tests() {
    let repo = create_fixture_repo();
    let response = generate_repo_index(&RepoIndexRequest::new(repo.path())).unwrap();

    let data = &response.data;
    let entry_files: Vec<&str> = data["entry_points"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["file"].as_str().unwrap())
        .collect();
    assert!(entry_files.contains(&"src/main.rs"));
    assert!(entry_files.contains(&"src/lib.rs"));

    let docs: Vec<&str> = data["documentation"]
        .as_array()
        .unwrap()
        .iter()
        .map(|doc| doc.as_str().unwrap())
        .collect();
    assert!(docs.contains(&"README.md"));
    assert!(docs.contains(&"docs/guide.md"));

    let configs: Vec<&str> = data["configuration"]
        .as_array()
        .unwrap()
        .iter()
        .map(|cfg| cfg.as_str().unwrap())
        .collect();
    assert!(configs.contains(&"Cargo.toml"));
    assert!(configs.contains(&"config.yaml"));

    let tests: Vec<&str> = data["tests"]
        .as_array()
        .unwrap()
        .iter()
        .map(|test| test.as_str().unwrap())
        .collect();
    assert!(tests.contains(&"tests"));
    assert!(tests.contains(&"tests/test_api.py"));
}

#[test]
fn ignored_directories_are_skipped() {
    let repo = create_fixture_repo();
    let response = generate_repo_index(&RepoIndexRequest::new(repo.path())).unwrap();

    assert!(!response.markdown.contains("node_modules"));
    let all_json = serde_json::to_string(&response.data).unwrap();
    assert!(!all_json.contains("junk.js"));
}

#[test]
fn quick_mode_stops_above_deep_files() {
    let repo = create_fixture_repo();

    let full = generate_repo_index(&RepoIndexRequest::new(repo.path())).unwrap();
    let quick = generate_repo_index(
        &RepoIndexRequest::new(repo.path()).with_mode(IndexMode::Quick),
    )
    .unwrap();

    let full_json = serde_json::to_string(&full.data).unwrap();
    let quick_json = serde_json::to_string(&quick.data).unwrap();
    assert!(full_json.contains("deeply_nested.txt"));
    assert!(!quick_json.contains("deeply_nested.txt"));
    assert!(quick.stats.total_files < full.stats.total_files);
}

#[test]
fn max_entries_caps_the_structure_snapshot() {
    let repo = create_fixture_repo();
    let response = generate_repo_index(
        &RepoIndexRequest::new(repo.path()).with_max_entries(2),
    )
    .unwrap();

    assert_eq!(response.data["structure"].as_array().unwrap().len(), 2);
}

#[test]
fn output_dir_receives_markdown_and_json() {
    let repo = create_fixture_repo();
    let out = TempDir::new().unwrap();
    let response = generate_repo_index(
        &RepoIndexRequest::new(repo.path()).with_output_dir(out.path()),
    )
    .unwrap();

    assert_eq!(response.output_paths.len(), 2);
    let md = out.path().join("PROJECT_INDEX.md");
    let json = out.path().join("PROJECT_INDEX.json");
    assert!(md.exists());
    assert!(json.exists());

    let written = fs::read_to_string(md).unwrap();
    assert_eq!(written, response.markdown);
    let decoded: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(json).unwrap()).unwrap();
    assert_eq!(decoded, response.data);
}

#[test]
fn markdown_has_the_expected_sections() {
    let repo = create_fixture_repo();
    let response = generate_repo_index(&RepoIndexRequest::new(repo.path())).unwrap();

    assert!(response.markdown.starts_with("# Project Index:"));
    assert!(response.markdown.contains("## 📁 Structure Snapshot"));
    assert!(response.markdown.contains("## 🚀 Entry Points"));
    assert!(response.markdown.contains("## 📚 Documentation"));
    assert!(response.markdown.contains("## ⚙️ Configuration"));
    assert!(response.markdown.contains("## 🧪 Tests"));
}

#[test]
fn docs_and_tests_can_be_excluded() {
    let repo = create_fixture_repo();
    let mut request = RepoIndexRequest::new(repo.path());
    request.include_docs = false;
    request.include_tests = false;
    let response = generate_repo_index(&request).unwrap();

    assert!(response.data["documentation"].as_array().unwrap().is_empty());
    assert!(response.data["tests"].as_array().unwrap().is_empty());
    assert!(!response.markdown.contains("## 📚 Documentation"));
    assert!(!response.markdown.contains("## 🧪 Tests"));
}

#[test]
fn missing_repository_reports_path_not_found() {
    let err = generate_repo_index(&RepoIndexRequest::new("/no/such/repo")).unwrap_err();
    assert!(matches!(err, RepoIndexError::PathNotFound { .. }));
    assert!(err.to_string().contains("/no/such/repo"));
}
