//! Configuration constants and profile loading for userhub
//!
//! Profiles live in an INI file, one section per profile:
//!
//! ```ini
//! [default]
//! base_url = https://b83x3s56f1.execute-api.us-west-2.amazonaws.com/prod
//!
//! [local]
//! base_url = http://localhost:3000
//! ```

use anyhow::{Context, Result};
use ini::Ini;
use std::path::Path;

/// Default profile file path for userhub
pub const DEFAULT_PROFILE_PATH: &str = "~/.userhub/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "USERHUB_PROFILE_PATH";

/// Base URL used when no profile provides one
pub const DEFAULT_BASE_URL: &str = "https://b83x3s56f1.execute-api.us-west-2.amazonaws.com/prod";

/// Profile key holding the API base URL
pub const BASE_URL_KEY: &str = "base_url";

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubProfile {
    name: String,
    base_url: String,
}

impl HubProfile {
    pub fn new(name: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
        }
    }

    /// Profile pointing at the built-in base URL
    pub fn blank(name: impl Into<String>) -> Self {
        Self::new(name, DEFAULT_BASE_URL)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Reads profiles from an INI file
pub struct IniProfileStore {
    path: String,
}

impl IniProfileStore {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Look up a profile; `None` when the file, section or base URL is missing
    pub fn get_profile(&self, name: &str) -> Result<Option<HubProfile>> {
        let expanded = shellexpand::tilde(&self.path);
        let path = Path::new(expanded.as_ref());
        if !path.exists() {
            tracing::debug!("Profile file '{}' does not exist", path.display());
            return Ok(None);
        }

        let ini = Ini::load_from_file(path)
            .with_context(|| format!("Failed to read profile file '{}'", path.display()))?;

        let base_url = ini
            .section(Some(name))
            .and_then(|section| section.get(BASE_URL_KEY))
            .map(str::trim)
            .filter(|url| !url.is_empty());

        Ok(base_url.map(|url| HubProfile::new(name, url)))
    }
}

/// Load a profile, falling back to the built-in base URL when it is not configured
pub fn load_profile(profile_name: &str, profile_path: &str) -> Result<HubProfile> {
    tracing::debug!("Loading profile '{}' from '{}'", profile_name, profile_path);

    let profile = match IniProfileStore::new(profile_path).get_profile(profile_name)? {
        Some(p) => {
            tracing::debug!("Profile loaded successfully, base URL: {}", p.base_url());
            p
        }
        None => {
            tracing::debug!("Profile '{}' not found, using blank profile", profile_name);
            HubProfile::blank(profile_name)
        }
    };

    Ok(profile)
}
