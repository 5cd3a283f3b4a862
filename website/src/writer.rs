//! Writes exported site files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Maps a route path to the file that serves it from a static host.
///
/// `/` becomes `index.html`; `/a/b` becomes `a/b/index.html`, so that the
/// exported tree answers the same URLs as the server.
#[must_use]
pub fn route_file(out_dir: &Path, route_path: &str) -> PathBuf {
    route_path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .fold(out_dir.to_path_buf(), |dir, segment| dir.join(segment))
        .join("index.html")
}

/// Writes content to a file, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if directories cannot be created or the file cannot be written.
pub fn write(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create directory: {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Cannot write file: {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_routes_to_index_files() {
        let out = Path::new("public");
        assert_eq!(route_file(out, "/"), out.join("index.html"));
        assert_eq!(
            route_file(out, "/certification/green-business"),
            out.join("certification").join("green-business").join("index.html")
        );
    }
}
