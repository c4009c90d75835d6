//! # Preference Storage
//!
//! Scoped key-value persistence injected into the language settings.

use anyhow::Result;
use ini::Ini;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const PREFERENCES_SECTION: &str = "preferences";

/// Read and write single string preferences
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Preferences kept in one section of an INI file
#[derive(Debug, Clone)]
pub struct IniPreferenceStore {
    path: PathBuf,
}

impl IniPreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Option<Ini>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(Ini::load_from_file(&self.path)?))
    }
}

impl PreferenceStore for IniPreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let Some(ini) = self.load()? else {
            tracing::debug!("No preferences file at '{}'", self.path.display());
            return Ok(None);
        };
        Ok(ini
            .get_from(Some(PREFERENCES_SECTION), key)
            .map(str::to_string))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let mut ini = self.load()?.unwrap_or_else(Ini::new);
        ini.with_section(Some(PREFERENCES_SECTION)).set(key, value);

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        ini.write_to_file(&self.path)?;
        tracing::debug!("Stored preference '{}' in '{}'", key, self.path.display());
        Ok(())
    }
}

/// In-process store, used when nothing should touch the disk
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
