use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

fn root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// A source line matching a forbidden pattern.
pub struct Hit {
    pub file: String,
    pub line: usize,
    pub text: String,
}

impl fmt::Debug for Hit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.file, self.line, self.text.trim())
    }
}

fn relative_path(path: &Path) -> String {
    path.strip_prefix(root())
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) {
    let entries =
        fs::read_dir(dir).unwrap_or_else(|e| panic!("failed to read dir {}: {e}", dir.display()));

    for entry in entries {
        let path = entry
            .unwrap_or_else(|e| panic!("failed to read dir entry: {e}"))
            .path();
        if path.is_dir() {
            walk(&path, files);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
}

/// Every `.rs` file under `relative`, which may be a directory or a file.
pub fn rust_files(relative: &str) -> Vec<PathBuf> {
    let base = root().join(relative);
    if base.is_file() {
        return vec![base];
    }
    let mut files = Vec::new();
    walk(&base, &mut files);
    files.sort();
    files
}

/// Code lines outside `#[cfg(test)]` modules that contain any of
/// `patterns`. Comments, including doc examples, are not searched.
///
/// Test modules are assumed to sit at the end of a file, as they do here.
pub fn find_lines_containing(relative: &str, patterns: &[&str]) -> Vec<Hit> {
    let mut hits = Vec::new();

    for file in rust_files(relative) {
        let content = fs::read_to_string(&file)
            .unwrap_or_else(|e| panic!("failed to read {}: {e}", file.display()));

        for (idx, line) in content.lines().enumerate() {
            let trimmed = line.trim_start();
            if trimmed.starts_with("#[cfg(test)]") {
                break;
            }
            if trimmed.starts_with("//") {
                continue;
            }
            if patterns.iter().any(|p| line.contains(p)) {
                hits.push(Hit {
                    file: relative_path(&file),
                    line: idx + 1,
                    text: line.to_string(),
                });
            }
        }
    }

    hits
}

pub fn path_exists(relative: &str) -> bool {
    root().join(relative).exists()
}

pub fn read_relative(relative: &str) -> String {
    fs::read_to_string(root().join(relative))
        .unwrap_or_else(|e| panic!("failed to read {relative}: {e}"))
}
