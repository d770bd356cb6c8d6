use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use scoring::dto::tournament::TournamentSheet;

pub fn load_sheet(path: &Path) -> Result<TournamentSheet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read tournament sheet {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid tournament sheet {}", path.display()))
}

/// Every `*.json` file directly inside `directory`, sorted by path.
pub fn sheet_files(directory: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let entries = std::fs::read_dir(directory)
        .with_context(|| format!("Cannot read directory {}", directory.display()))?;

    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

pub fn load_directory(directory: &Path) -> Result<Vec<TournamentSheet>> {
    let files = sheet_files(directory)?;
    if files.is_empty() {
        tracing::warn!("No JSON files found in {}", directory.display());
    } else {
        tracing::info!("Found {} tournament sheet(s)", files.len());
    }

    files.iter().map(|path| load_sheet(path)).collect()
}
