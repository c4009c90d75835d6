//! Configuration constants and profile loading for pokedex
//!
//! Profiles live in an INI file, one section per profile name. A missing file
//! or section yields a blank profile pointing at the public catalog.

use crate::api::DEFAULT_BASE_URL;
use crate::i18n::Language;
use anyhow::Result;
use ini::Ini;
use std::path::{Path, PathBuf};

/// Default profile file path for pokedex
pub const DEFAULT_PROFILE_PATH: &str = "~/.pokedex/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "POKEDEX_PROFILE_PATH";

/// Default file holding persisted UI preferences
pub const DEFAULT_PREFERENCES_PATH: &str = "~/.pokedex/preferences";

/// Environment variable name for overriding the preferences path
pub const PREFERENCES_PATH_ENV_VAR: &str = "POKEDEX_PREFERENCES_PATH";

pub const BASE_URL_KEY: &str = "base_url";
pub const LANGUAGE_KEY: &str = "language";

fn path_from_env(var: &str, default: &str) -> String {
    std::env::var_os(var)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| default.to_string())
}

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    path_from_env(PROFILE_PATH_ENV_VAR, DEFAULT_PROFILE_PATH)
}

/// Get the preferences file path, checking environment variable first, then falling back to default
pub fn get_preferences_path() -> String {
    path_from_env(PREFERENCES_PATH_ENV_VAR, DEFAULT_PREFERENCES_PATH)
}

/// Expand a leading `~` to the home directory
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// Connection and display settings for one named profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    name: String,
    base_url: String,
    language: Option<Language>,
}

impl Profile {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn language(&self) -> Option<Language> {
        self.language
    }
}

/// Profile used when nothing is configured
pub fn get_blank_profile(name: &str) -> Profile {
    Profile {
        name: name.to_string(),
        base_url: DEFAULT_BASE_URL.to_string(),
        language: None,
    }
}

/// Reads profiles from an INI file
#[derive(Debug, Clone)]
pub struct IniProfileStore {
    path: PathBuf,
}

impl IniProfileStore {
    pub fn new(path: impl AsRef<str>) -> Self {
        Self {
            path: expand_path(path.as_ref()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up `name`; `Ok(None)` when the file or the section is missing
    pub fn get_profile(&self, name: &str) -> Result<Option<Profile>> {
        if !self.path.exists() {
            tracing::debug!("Profile file '{}' does not exist", self.path.display());
            return Ok(None);
        }

        let ini = Ini::load_from_file(&self.path)?;
        let Some(section) = ini.section(Some(name)) else {
            return Ok(None);
        };

        let base_url = section
            .get(BASE_URL_KEY)
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
            .to_string();

        let language = section.get(LANGUAGE_KEY).and_then(|code| {
            code.parse::<Language>()
                .inspect_err(|e| tracing::warn!("Profile '{}': {}", name, e))
                .ok()
        });

        Ok(Some(Profile {
            name: name.to_string(),
            base_url,
            language,
        }))
    }

    /// Like `get_profile`, falling back to a blank profile
    pub fn get_profile_or_blank(&self, name: &str) -> Result<Profile> {
        match self.get_profile(name)? {
            Some(profile) => {
                tracing::debug!("Profile loaded successfully, base_url: {}", profile.base_url);
                Ok(profile)
            }
            None => {
                tracing::debug!("Profile '{}' not found, using blank profile", name);
                Ok(get_blank_profile(name))
            }
        }
    }
}
