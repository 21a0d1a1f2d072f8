//! Research artifact writing.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    Ok(())
}

/// Write pretty-printed JSON, creating parent directories as needed.
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    ensure_parent(path)?;
    let body = serde_json::to_string_pretty(data).context("failed to serialize JSON")?;
    fs::write(path, body).with_context(|| format!("failed to write {}", path.display()))?;
    eprintln!("  Written: {}", path.display());
    Ok(())
}

/// Write a text document, creating parent directories as needed.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    eprintln!("  Written: {}", path.display());
    Ok(())
}
