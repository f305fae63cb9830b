//! Repository structure indexing.
//!
//! Walks a repository tree and produces a compact PROJECT_INDEX in markdown
//! and JSON form: top-level structure, entry points, documentation,
//! configuration, and test locations. Intended as cheap context for coding
//! agents instead of feeding them the whole tree.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

/// Directories never descended into
const DEFAULT_IGNORE: &[&str] = &[
    ".git",
    ".venv",
    ".idea",
    "__pycache__",
    "node_modules",
    "dist",
    "build",
    ".claude",
    ".pytest_cache",
    "target",
];

/// Filenames treated as entry points, with their display hints
const ENTRY_POINTS: &[(&str, &str)] = &[
    ("main.py", "Python main entry"),
    ("cli.py", "CLI entry"),
    ("__main__.py", "Package entry"),
    ("manage.py", "Django management"),
    ("index.ts", "TypeScript entry"),
    ("index.js", "JavaScript entry"),
    ("main.rs", "Rust binary entry"),
    ("lib.rs", "Rust library root"),
];

/// Errors that can occur during repository indexing
#[derive(Debug, Error)]
pub enum RepoIndexError {
    #[error("Repository path not found: {}", path.display())]
    PathNotFound { path: PathBuf },

    #[error("Unknown index mode '{mode}' (expected full, update, or quick)")]
    InvalidMode { mode: String },

    #[error("Index I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize index data: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Indexing depth mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexMode {
    #[default]
    Full,
    Update,
    Quick,
}

impl IndexMode {
    /// Maximum directory depth walked in this mode
    pub fn max_depth(self) -> usize {
        match self {
            IndexMode::Full => 6,
            IndexMode::Update => 4,
            IndexMode::Quick => 2,
        }
    }
}

impl FromStr for IndexMode {
    type Err = RepoIndexError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "full" => Ok(IndexMode::Full),
            "update" => Ok(IndexMode::Update),
            "quick" => Ok(IndexMode::Quick),
            other => Err(RepoIndexError::InvalidMode {
                mode: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for IndexMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexMode::Full => write!(f, "full"),
            IndexMode::Update => write!(f, "update"),
            IndexMode::Quick => write!(f, "quick"),
        }
    }
}

/// Repository indexing request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoIndexRequest {
    pub repo_path: PathBuf,
    #[serde(default)]
    pub mode: IndexMode,
    #[serde(default = "default_true")]
    pub include_docs: bool,
    #[serde(default = "default_true")]
    pub include_tests: bool,
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

fn default_max_entries() -> usize {
    10
}

impl RepoIndexRequest {
    pub fn new(repo_path: impl Into<PathBuf>) -> Self {
        Self {
            repo_path: repo_path.into(),
            mode: IndexMode::default(),
            include_docs: true,
            include_tests: true,
            max_entries: default_max_entries(),
            output_dir: None,
        }
    }

    pub fn with_mode(mut self, mode: IndexMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(output_dir.into());
        self
    }
}

/// Walk statistics echoed back to the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexStats {
    pub repo: String,
    pub total_files: usize,
    pub mode: IndexMode,
}

/// Generated index
#[derive(Debug, Clone)]
pub struct RepoIndexResponse {
    pub markdown: String,
    pub data: serde_json::Value,
    pub stats: IndexStats,
    pub output_paths: Vec<PathBuf>,
}

/// Generate a repository index.
///
/// Optionally writes `PROJECT_INDEX.md` and `PROJECT_INDEX.json` into
/// `output_dir` when one is given.
pub fn generate_repo_index(request: &RepoIndexRequest) -> Result<RepoIndexResponse, RepoIndexError> {
    let root = &request.repo_path;
    if !root.exists() {
        return Err(RepoIndexError::PathNotFound { path: root.clone() });
    }

    let walk = collect_files(root, request.mode.max_depth())?;
    let stats = IndexStats {
        repo: root.display().to_string(),
        total_files: walk.files.len(),
        mode: request.mode,
    };

    let structure = summarize_structure(root, &walk.files, request.max_entries)?;
    let entry_points = find_entry_points(&walk.files);
    let docs = if request.include_docs {
        find_docs(&walk.files)
    } else {
        Vec::new()
    };
    let tests = if request.include_tests {
        find_tests(&walk)
    } else {
        Vec::new()
    };
    let configs = find_configs(&walk.files);

    let data = json!({
        "metadata": &stats,
        "structure": structure,
        "entry_points": entry_points,
        "documentation": docs,
        "configuration": configs,
        "tests": tests,
    });

    let repo_name = root
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| stats.repo.clone());
    let markdown = render_markdown(&repo_name, &stats, &data);

    let mut output_paths = Vec::new();
    if let Some(output_dir) = &request.output_dir {
        fs::create_dir_all(output_dir)?;
        let md_path = output_dir.join("PROJECT_INDEX.md");
        let json_path = output_dir.join("PROJECT_INDEX.json");
        fs::write(&md_path, &markdown)?;
        fs::write(&json_path, serde_json::to_string_pretty(&data)?)?;
        output_paths.push(md_path);
        output_paths.push(json_path);
    }

    tracing::debug!(
        repo = %stats.repo,
        total_files = stats.total_files,
        mode = %request.mode,
        "repository index generated"
    );

    Ok(RepoIndexResponse {
        markdown,
        data,
        stats,
        output_paths,
    })
}

/// Result of the depth-limited walk, all paths relative to the root
struct WalkResult {
    files: Vec<PathBuf>,
    test_dirs: Vec<PathBuf>,
}

fn collect_files(root: &Path, max_depth: usize) -> Result<WalkResult, RepoIndexError> {
    let mut files = Vec::new();
    let mut test_dirs = Vec::new();
    let mut stack: Vec<(PathBuf, usize)> = vec![(root.to_path_buf(), 0)];

    while let Some((dir, depth)) = stack.pop() {
        let mut entries: Vec<fs::DirEntry> = fs::read_dir(&dir)?.filter_map(Result::ok).collect();
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();
            if path.is_dir() {
                if DEFAULT_IGNORE.contains(&name.as_str()) {
                    continue;
                }
                if name == "tests" {
                    test_dirs.push(relative_to(root, &path));
                }
                if depth < max_depth {
                    stack.push((path, depth + 1));
                }
            } else {
                files.push(relative_to(root, &path));
            }
        }
    }

    files.sort();
    test_dirs.sort();
    Ok(WalkResult { files, test_dirs })
}

fn relative_to(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

fn summarize_structure(
    root: &Path,
    files: &[PathBuf],
    max_entries: usize,
) -> Result<Vec<serde_json::Value>, RepoIndexError> {
    let mut entries: Vec<fs::DirEntry> = fs::read_dir(root)?.filter_map(Result::ok).collect();
    entries.sort_by_key(|entry| entry.file_name());

    let mut categories = Vec::new();
    for entry in entries {
        let name = entry.file_name().to_string_lossy().to_string();
        if DEFAULT_IGNORE.contains(&name.as_str()) {
            continue;
        }
        let path = entry.path();
        if path.is_dir() {
            let file_count = files
                .iter()
                .filter(|file| file.starts_with(&name))
                .count();
            categories.push(json!({
                "path": name,
                "type": "dir",
                "file_count": file_count,
            }));
        } else {
            let size = entry.metadata().map(|meta| meta.len()).unwrap_or(0);
            categories.push(json!({
                "path": name,
                "type": "file",
                "size": size,
            }));
        }
        if categories.len() >= max_entries {
            break;
        }
    }
    Ok(categories)
}

fn find_entry_points(files: &[PathBuf]) -> Vec<serde_json::Value> {
    files
        .iter()
        .filter_map(|file| {
            let name = file.file_name()?.to_string_lossy();
            let hint = ENTRY_POINTS
                .iter()
                .find(|(candidate, _)| *candidate == name)
                .map(|(_, hint)| *hint)?;
            Some(json!({
                "file": file.to_string_lossy(),
                "hint": hint,
            }))
        })
        .collect()
}

fn find_docs(files: &[PathBuf]) -> Vec<String> {
    let docs: BTreeSet<String> = files
        .iter()
        .filter(|file| {
            let is_readme = file.as_os_str() == "README.md";
            let is_docs_md = file.starts_with("docs")
                && file.extension().is_some_and(|ext| ext == "md");
            is_readme || is_docs_md
        })
        .map(|file| file.to_string_lossy().to_string())
        .collect();
    docs.into_iter().collect()
}

fn find_configs(files: &[PathBuf]) -> Vec<String> {
    let configs: BTreeSet<String> = files
        .iter()
        .filter(|file| {
            let top_level_config = file.parent().is_some_and(|parent| parent.as_os_str().is_empty())
                && file
                    .extension()
                    .is_some_and(|ext| ext == "toml" || ext == "yaml" || ext == "yml" || ext == "json");
            let manifest = file
                .file_name()
                .is_some_and(|name| name == "pyproject.toml" || name == "Cargo.toml");
            top_level_config || manifest
        })
        .map(|file| file.to_string_lossy().to_string())
        .collect();
    configs.into_iter().collect()
}

fn find_tests(walk: &WalkResult) -> Vec<String> {
    let mut tests: BTreeSet<String> = walk
        .test_dirs
        .iter()
        .map(|dir| dir.to_string_lossy().to_string())
        .collect();

    for file in &walk.files {
        let Some(name) = file.file_name().map(|name| name.to_string_lossy()) else {
            continue;
        };
        let is_python_test = name.starts_with("test_") && name.ends_with(".py");
        let is_rust_test = name.ends_with("_test.rs") || name.ends_with("_tests.rs");
        if is_python_test || is_rust_test {
            tests.insert(file.to_string_lossy().to_string());
        }
    }

    tests.into_iter().collect()
}

fn render_markdown(repo_name: &str, stats: &IndexStats, data: &serde_json::Value) -> String {
    let mut lines = vec![
        format!("# Project Index: {}", repo_name),
        String::new(),
        format!("- Total files: {}", stats.total_files),
        format!("- Mode: {}", stats.mode),
        String::new(),
        "## 📁 Structure Snapshot".to_string(),
    ];

    for item in json_array(data, "structure") {
        let path = json_str(item, "path");
        if json_str(item, "type") == "dir" {
            let count = item.get("file_count").and_then(|v| v.as_u64()).unwrap_or(0);
            lines.push(format!("- 📁 `{}` ({} files)", path, count));
        } else {
            let size = item.get("size").and_then(|v| v.as_u64()).unwrap_or(0);
            lines.push(format!("- 📄 `{}` ({} bytes)", path, size));
        }
    }

    lines.push(String::new());
    lines.push("## 🚀 Entry Points".to_string());
    for entry in json_array(data, "entry_points") {
        lines.push(format!(
            "- `{}` — {}",
            json_str(entry, "file"),
            json_str(entry, "hint")
        ));
    }

    push_listing(&mut lines, "## 📚 Documentation", json_array(data, "documentation"));
    push_listing(&mut lines, "## ⚙️ Configuration", json_array(data, "configuration"));
    push_listing(&mut lines, "## 🧪 Tests", json_array(data, "tests"));

    lines.push(String::new());
    lines.join("\n")
}

fn push_listing(lines: &mut Vec<String>, header: &str, items: &[serde_json::Value]) {
    if items.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push(header.to_string());
    for item in items.iter().take(15) {
        lines.push(format!("- `{}`", item.as_str().unwrap_or_default()));
    }
    if items.len() > 15 {
        lines.push(format!("- ... ({} more)", items.len() - 15));
    }
}

fn json_array<'a>(data: &'a serde_json::Value, key: &str) -> &'a [serde_json::Value] {
    data.get(key)
        .and_then(|value| value.as_array())
        .map(|array| array.as_slice())
        .unwrap_or(&[])
}

fn json_str<'a>(value: &'a serde_json::Value, key: &str) -> &'a str {
    value.get(key).and_then(|v| v.as_str()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parses_and_falls_over_on_garbage() {
        assert_eq!("quick".parse::<IndexMode>().unwrap(), IndexMode::Quick);
        assert!("bottomless".parse::<IndexMode>().is_err());
    }

    #[test]
    fn mode_controls_walk_depth() {
        assert_eq!(IndexMode::Full.max_depth(), 6);
        assert_eq!(IndexMode::Update.max_depth(), 4);
        assert_eq!(IndexMode::Quick.max_depth(), 2);
    }

    #[test]
    fn missing_path_is_rejected() {
        let request = RepoIndexRequest::new("/definitely/not/a/repo");
        let err = generate_repo_index(&request).unwrap_err();
        assert!(matches!(err, RepoIndexError::PathNotFound { .. }));
    }
}
