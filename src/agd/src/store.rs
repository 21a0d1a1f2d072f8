//! On-disk corpus access with per-process memoization.
//!
//! [`DataStore`] is the one stateful object in the crate. It owns the paths
//! to the `ExcelBinOutput` and `TextMap` directories and caches every table
//! and text map it has loaded; a cache entry is only ever "unloaded" or
//! "loaded". The store is constructed explicitly and passed by reference, so
//! there is no hidden global state.
//!
//! A missing or unparseable source file is not fatal: the store logs a
//! `[WARN]` line and serves an empty table, and callers are expected to
//! tolerate empty results.

use crate::record::Table;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Prefix of the placeholder produced for a text hash that has no entry in
/// the loaded text map. Downstream consumers detect unresolved text by
/// prefix instead of handling an error.
pub const UNRESOLVED_PREFIX: &str = "[hash:";

/// True for strings produced by the unresolved-hash fallback.
pub fn is_unresolved(text: &str) -> bool {
    text.starts_with(UNRESOLVED_PREFIX)
}

/// Hash → localized display string for one language.
pub type TextMap = HashMap<String, String>;

/// File-level load failure. Degrades to an empty result at the store API;
/// surfaced as a type only so the read path can use `?` internally.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn read_json(path: &Path) -> Result<serde_json::Value, StoreError> {
    let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Memoizing loader for the tabular exports and text maps.
pub struct DataStore {
    excel_dir: PathBuf,
    textmap_dir: PathBuf,
    tables: RefCell<HashMap<String, Arc<Table>>>,
    textmaps: RefCell<HashMap<String, Arc<TextMap>>>,
}

impl DataStore {
    /// Store rooted at an `AnimeGameData` checkout: tables under
    /// `<root>/ExcelBinOutput`, text maps under `<root>/TextMap`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self::with_dirs(root.join("ExcelBinOutput"), root.join("TextMap"))
    }

    /// Store with explicitly separated directories (used by tests).
    pub fn with_dirs(excel_dir: impl Into<PathBuf>, textmap_dir: impl Into<PathBuf>) -> Self {
        Self {
            excel_dir: excel_dir.into(),
            textmap_dir: textmap_dir.into(),
            tables: RefCell::new(HashMap::new()),
            textmaps: RefCell::new(HashMap::new()),
        }
    }

    /// Load a table by file name, e.g. `AvatarExcelConfigData.json`.
    ///
    /// The first call reads and parses the file; subsequent calls return the
    /// cached result without touching the disk. A file that cannot be read
    /// or parsed yields an empty table and a `[WARN]` on stderr.
    pub fn excel(&self, name: &str) -> Arc<Table> {
        if let Some(cached) = self.tables.borrow().get(name) {
            return Arc::clone(cached);
        }
        let path = self.excel_dir.join(name);
        let table = match read_json(&path) {
            Ok(doc) => Table::from_json(name, doc),
            Err(err) => {
                eprintln!("[WARN] {err}");
                Table::empty(name)
            }
        };
        let table = Arc::new(table);
        self.tables
            .borrow_mut()
            .insert(name.to_string(), Arc::clone(&table));
        table
    }

    /// Load the text map for a language code (`"EN"`, `"CHS"`, ...).
    ///
    /// Looks for `TextMap<LANG>.json`; when absent, merges the split
    /// `TextMap<LANG>_0.json` / `TextMap<LANG>_1.json` parts. Cached per
    /// language for the process lifetime.
    pub fn textmap(&self, lang: &str) -> Arc<TextMap> {
        if let Some(cached) = self.textmaps.borrow().get(lang) {
            return Arc::clone(cached);
        }
        let map = Arc::new(self.read_textmap(lang));
        self.textmaps
            .borrow_mut()
            .insert(lang.to_string(), Arc::clone(&map));
        map
    }

    fn read_textmap(&self, lang: &str) -> TextMap {
        let path = self.textmap_dir.join(format!("TextMap{lang}.json"));
        if path.exists() {
            return match read_json(&path).map(serde_json::from_value::<TextMap>) {
                Ok(Ok(map)) => map,
                Ok(Err(err)) => {
                    eprintln!("[WARN] failed to parse {}: {err}", path.display());
                    TextMap::new()
                }
                Err(err) => {
                    eprintln!("[WARN] {err}");
                    TextMap::new()
                }
            };
        }

        // Large languages ship split into _0 and _1 parts.
        let mut merged = TextMap::new();
        for suffix in ["_0", "_1"] {
            let part = self.textmap_dir.join(format!("TextMap{lang}{suffix}.json"));
            if !part.exists() {
                continue;
            }
            match read_json(&part).map(serde_json::from_value::<TextMap>) {
                Ok(Ok(map)) => merged.extend(map),
                Ok(Err(err)) => eprintln!("[WARN] failed to parse {}: {err}", part.display()),
                Err(err) => eprintln!("[WARN] {err}"),
            }
        }
        if merged.is_empty() {
            eprintln!("[WARN] no text map found for language {lang}");
        }
        merged
    }

    /// Resolve a text hash for a language.
    ///
    /// Hash `0` means "no text" and resolves to the empty string; an absent
    /// hash resolves to the deterministic `[hash:<value>]` placeholder.
    pub fn text(&self, hash: i64, lang: &str) -> String {
        if hash == 0 {
            return String::new();
        }
        self.textmap(lang)
            .get(&hash.to_string())
            .cloned()
            .unwrap_or_else(|| format!("{UNRESOLVED_PREFIX}{hash}]"))
    }

    pub fn text_en(&self, hash: i64) -> String {
        self.text(hash, "EN")
    }

    pub fn text_chs(&self, hash: i64) -> String {
        self.text(hash, "CHS")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    fn store_with(files: &[(&str, serde_json::Value)]) -> (tempfile::TempDir, DataStore) {
        let dir = tempfile::tempdir().unwrap();
        for (name, doc) in files {
            fs::write(dir.path().join(name), serde_json::to_string(doc).unwrap()).unwrap();
        }
        let store = DataStore::with_dirs(dir.path(), dir.path());
        (dir, store)
    }

    #[test]
    fn test_excel_is_cached_and_reference_stable() {
        let (_dir, store) = store_with(&[("Foo.json", json!([{"id": 1}]))]);
        let first = store.excel("Foo.json");
        let second = store.excel("Foo.json");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn test_missing_file_yields_empty_table() {
        let (_dir, store) = store_with(&[]);
        let table = store.excel("Nope.json");
        assert!(table.is_empty());
        // the miss is cached too
        assert!(Arc::ptr_eq(&table, &store.excel("Nope.json")));
    }

    #[test]
    fn test_malformed_file_yields_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Bad.json"), "{not json").unwrap();
        let store = DataStore::with_dirs(dir.path(), dir.path());
        assert!(store.excel("Bad.json").is_empty());
    }

    #[test]
    fn test_text_zero_hash_is_empty() {
        let (_dir, store) = store_with(&[]);
        assert_eq!(store.text(0, "EN"), "");
    }

    #[test]
    fn test_text_missing_hash_is_placeholder() {
        let (_dir, store) = store_with(&[("TextMapEN.json", json!({"1": "One"}))]);
        assert_eq!(store.text(1, "EN"), "One");
        assert_eq!(store.text(12345, "EN"), "[hash:12345]");
        assert!(is_unresolved(&store.text(12345, "EN")));
    }

    #[test]
    fn test_split_textmap_is_merged() {
        let (_dir, store) = store_with(&[
            ("TextMapCHS_0.json", json!({"10": "甲"})),
            ("TextMapCHS_1.json", json!({"20": "乙"})),
        ]);
        assert_eq!(store.text(10, "CHS"), "甲");
        assert_eq!(store.text(20, "CHS"), "乙");
    }

    #[test]
    fn test_textmap_cached_per_language() {
        let (_dir, store) = store_with(&[("TextMapEN.json", json!({"1": "One"}))]);
        let a = store.textmap("EN");
        let b = store.textmap("EN");
        assert!(Arc::ptr_eq(&a, &b));
    }
}
