//! Serializable language profile definitions.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::InterchangeError;
use crate::profile::LanguageProfile;

/// Serializable definition of a language profile.
///
/// The on-disk shape is deliberately flat — a name plus two word lists —
/// so profiles stay hand-editable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDef {
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub builtins: Vec<String>,
}

impl ProfileDef {
    /// Parse a definition from JSON text.
    pub fn from_json(text: &str) -> Result<Self, InterchangeError> {
        serde_json::from_str(text).map_err(|e| InterchangeError::json(e.to_string()))
    }

    /// Parse a definition from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self, InterchangeError> {
        serde_yaml::from_str(text).map_err(|e| InterchangeError::yaml(e.to_string()))
    }

    /// Load a definition from a file, choosing the format by extension
    /// (`.json`, `.yaml`, `.yml`).
    pub fn from_path(path: &Path) -> Result<Self, InterchangeError> {
        let text = fs::read_to_string(path)?;
        let def = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&text),
            Some("yaml") | Some("yml") => Self::from_yaml(&text),
            other => Err(InterchangeError::unsupported_format(other.unwrap_or(""))),
        }?;
        tracing::debug!("Loaded profile `{}` from {}", def.name, path.display());
        Ok(def)
    }

    /// Serialize to JSON text.
    pub fn to_json(&self) -> Result<String, InterchangeError> {
        serde_json::to_string_pretty(self).map_err(|e| InterchangeError::json(e.to_string()))
    }

    /// Serialize to YAML text.
    pub fn to_yaml(&self) -> Result<String, InterchangeError> {
        serde_yaml::to_string(self).map_err(|e| InterchangeError::yaml(e.to_string()))
    }

    /// Build the runtime profile.
    pub fn into_profile(self) -> LanguageProfile {
        LanguageProfile::new(self.name.as_str(), self.keywords.iter(), self.builtins.iter())
    }
}

impl From<&LanguageProfile> for ProfileDef {
    fn from(profile: &LanguageProfile) -> Self {
        // Sets are unordered; sort so serialized output is stable.
        let mut def = Self {
            name: profile.name().to_string(),
            keywords: profile.keywords().map(str::to_string).collect(),
            builtins: profile.builtins().map(str::to_string).collect(),
        };
        def.keywords.sort();
        def.builtins.sort();
        def
    }
}
