//! The sectioned key-value file underneath the cache.
//!
//! One TOML document: a table per disc section, string values only. A
//! `Store` is a plain value with no handle on the file; callers open,
//! mutate, save and drop it within a single cache operation.

use std::fs;
use std::io;
use std::path::Path;

use log::warn;
use toml::{Table, Value};

/// In-memory copy of one cache file.
#[derive(Debug, Default)]
pub struct Store {
    root: Table,
}

impl Store {
    /// Empty store, for the first write before any file exists.
    pub fn new() -> Self {
        Self { root: Table::new() }
    }

    /// Load the store from `path`.
    ///
    /// `None` when the file does not exist. An unreadable or unparsable
    /// file also yields `None`, with a warning; the next save simply
    /// recreates it, since stale metadata is never worth failing over.
    pub fn open(path: &Path) -> Option<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
            Err(err) => {
                warn!("cannot read cache file {}: {err}", path.display());
                return None;
            }
        };
        match text.parse::<Table>() {
            Ok(root) => Some(Self { root }),
            Err(err) => {
                warn!("ignoring malformed cache file {}: {err}", path.display());
                None
            }
        }
    }

    /// String value of `key` within `section`, if both exist.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.root.get(section)?.as_table()?.get(key)?.as_str()
    }

    /// Set `key` within `section`, creating the section on demand.
    /// Existing values are overwritten, never removed.
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        let entry = self
            .root
            .entry(section.to_string())
            .or_insert_with(|| Value::Table(Table::new()));
        if !entry.is_table() {
            // A non-section value squatting on the name is discarded.
            *entry = Value::Table(Table::new());
        }
        if let Value::Table(table) = entry {
            table.insert(key.to_string(), Value::String(value.to_string()));
        }
    }

    /// Names of all sections.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.root
            .iter()
            .filter(|(_, value)| value.is_table())
            .map(|(name, _)| name.as_str())
    }

    /// Write the whole store to `path`, creating the parent directory
    /// when missing.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, self.root.to_string())
    }
}
