use crate::usecase::config::ConvertConfig;
use anyhow::{Context, Result};
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Non-recursive scan of `dir` for conversion candidates, sorted by file name.
pub async fn discover_candidates(dir: &Path, config: &ConvertConfig) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)
        .await
        .with_context(|| format!("listing directory {}", dir.display()))?;

    let mut out = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("listing directory {}", dir.display()))?
    {
        let path = entry.path();
        if !config.is_candidate(&path) {
            continue;
        }
        // Follows symlinks; dangling links and directories named *.html are skipped.
        match fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => out.push(path),
            _ => {}
        }
    }

    out.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(out)
}

/// Reads a bookmark export as text. Invalid UTF-8 sequences are replaced
/// rather than rejected.
pub async fn read_markup(path: &Path) -> io::Result<String> {
    let raw = fs::read(path).await?;
    Ok(String::from_utf8_lossy(&raw).into_owned())
}

pub async fn write_page(path: &Path, page: &str) -> io::Result<()> {
    fs::write(path, page).await
}

/// True when both paths resolve to the same file. Paths that do not exist
/// yet are compared as given.
pub fn is_same_file(a: &Path, b: &Path) -> bool {
    let a = std::fs::canonicalize(a).unwrap_or_else(|_| a.to_path_buf());
    let b = std::fs::canonicalize(b).unwrap_or_else(|_| b.to_path_buf());
    a == b
}
