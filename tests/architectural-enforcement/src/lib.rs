//! Architectural Enforcement Integration Tests
//!
//! This package contains integration tests that enforce architectural principles:
//! - The plan core stays headless (no terminal crates)
//! - No blocking sleep() calls in production code
//!
//! These tests are designed to catch violations early in the development cycle.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Workspace root (two levels above this package)
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// All `.rs` files under a directory, with their contents
pub fn rust_sources(dir: &Path) -> Vec<(PathBuf, String)> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .filter_map(|e| {
            let content = fs::read_to_string(e.path()).ok()?;
            Some((e.path().to_path_buf(), content))
        })
        .collect()
}

/// Source text with `#[cfg(test)]` modules cut off
///
/// Test modules sit at the end of each file, so everything from the first
/// `#[cfg(test)]` onwards is dropped.
pub fn production_code(source: &str) -> &str {
    match source.find("#[cfg(test)]") {
        Some(idx) => &source[..idx],
        None => source,
    }
}

/// Lines of production code containing `needle`, as `path:line` strings
pub fn find_violations(dir: &Path, needle: &str) -> Vec<String> {
    rust_sources(dir)
        .iter()
        .flat_map(|(path, content)| {
            production_code(content)
                .lines()
                .enumerate()
                .filter(|(_, line)| {
                    let code = line.trim_start();
                    !code.starts_with("//") && code.contains(needle)
                })
                .map(|(n, _)| format!("{}:{}", path.display(), n + 1))
                .collect::<Vec<_>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_code_strips_tests() {
        let src = "fn a() {}\n#[cfg(test)]\nmod tests { fn b() {} }\n";
        assert_eq!(production_code(src), "fn a() {}\n");
        assert_eq!(production_code("fn a() {}"), "fn a() {}");
    }
}
