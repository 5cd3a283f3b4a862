//! Exported website validators (HTML structure, links, coverage).

pub mod coverage;
pub mod html;
pub mod links;

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Lists every `.html` file under `root` as `(relative path, full path)`,
/// sorted by relative path. Relative paths use `/` separators.
pub(crate) fn html_files(root: &Path) -> Vec<(String, PathBuf)> {
    let mut files: Vec<(String, PathBuf)> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some("html"))
        .map(|e| {
            let rel = e
                .path()
                .strip_prefix(root)
                .unwrap_or(e.path())
                .to_string_lossy()
                .replace('\\', "/");
            (rel, e.into_path())
        })
        .collect();
    files.sort();
    files
}
