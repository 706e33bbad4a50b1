// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Key-value preference stores.
//!
//! The learned map and its epoch marker are persisted as two opaque string
//! settings. The navigator only needs get/set by name; how the values reach
//! disk is up to the store.
//!
//! Two stores are provided:
//! - [`MemoryStore`]: a plain map, for tests and embedding
//! - [`TomlFileStore`]: a flat TOML table of strings, rewritten on every set

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Setting holding the epoch the persisted layout belongs to.
pub const EPOCH_KEY: &str = "lastLouvreMap";

/// Setting holding the serialized learned map.
pub const LAYOUT_KEY: &str = "louvreLayout";

/// Errors raised by a preference store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot access preference file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse preference file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot write preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// A string-valued preference store.
pub trait PreferenceStore {
    /// Get the value of a setting, or None if it has never been set.
    fn get(&self, key: &str) -> Option<String>;

    /// Set a setting, persisting it if the store is backed by storage.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory preference store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
struct Preferences {
    values: BTreeMap<String, String>,
}

/// Preference store persisted as a TOML file.
///
/// The file is read once on open; every `set` rewrites it in full.
#[derive(Debug)]
pub struct TomlFileStore {
    path: PathBuf,
    prefs: Preferences,
}

impl TomlFileStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let prefs = match fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents).map_err(|source| StoreError::Parse {
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Preferences::default(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        Ok(Self { path, prefs })
    }

    fn flush(&self) -> Result<(), StoreError> {
        let contents = toml::to_string(&self.prefs)?;
        fs::write(&self.path, contents).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl PreferenceStore for TomlFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.prefs.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.prefs.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}
