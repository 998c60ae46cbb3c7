//! System default coordinates
//!
//! The compiled-in defaults mirror the conventional view of a freshly
//! provisioned terminology store: latest revisions on the development path,
//! active content only, English with US-then-GB dialects and FSN-then-synonym
//! description preference, stated premise.
//!
//! Deployments override individual values through a YAML defaults file
//! ([`DefaultsFile`]); unset fields keep their compiled-in value. Bad values
//! in the file are configuration errors reported at load, never silently
//! replaced.

use crate::coordinate::{
    CoordinateSpec, LanguageSpec, LogicSpec, Precedence, PremiseType, StampSpec, StampTime, Status,
};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

// ============================================================================
// Compiled-in default ids
// ============================================================================

/// Development versioning path
pub const DEFAULT_PATH_ID: u32 = 1;

/// English language concept
pub const DEFAULT_LANGUAGE_ID: u32 = 11;

/// Dialect preference order: US English, then GB English
pub const DEFAULT_DIALECT_PREFS: [u32; 2] = [21, 22];

/// Description-type preference order: fully specified name, then synonym
pub const DEFAULT_DESCRIPTION_TYPE_PREFS: [u32; 2] = [31, 32];

/// EL++ stated form assemblage
pub const DEFAULT_STATED_ASSEMBLAGE_ID: u32 = 41;

/// EL++ inferred form assemblage
pub const DEFAULT_INFERRED_ASSEMBLAGE_ID: u32 = 42;

/// EL++ description-logic profile
pub const DEFAULT_DESCRIPTION_PROFILE_ID: u32 = 43;

/// SnoRocket classifier
pub const DEFAULT_CLASSIFIER_ID: u32 = 44;

/// The compiled-in system default coordinates
pub fn builtin_defaults() -> CoordinateSpec {
    CoordinateSpec {
        stamp: StampSpec {
            time: StampTime::Latest,
            path_id: DEFAULT_PATH_ID,
            precedence: Precedence::Path,
            modules: BTreeSet::new(),
            allowed_states: [Status::Active].into_iter().collect(),
        },
        language: LanguageSpec {
            language_id: DEFAULT_LANGUAGE_ID,
            dialect_prefs: DEFAULT_DIALECT_PREFS.to_vec(),
            description_type_prefs: DEFAULT_DESCRIPTION_TYPE_PREFS.to_vec(),
        },
        logic: LogicSpec {
            stated_assemblage_id: DEFAULT_STATED_ASSEMBLAGE_ID,
            inferred_assemblage_id: DEFAULT_INFERRED_ASSEMBLAGE_ID,
            description_profile_id: DEFAULT_DESCRIPTION_PROFILE_ID,
            classifier_id: DEFAULT_CLASSIFIER_ID,
        },
        premise: PremiseType::Stated,
    }
}

// ============================================================================
// Defaults file
// ============================================================================

/// YAML document overriding individual system defaults
///
/// Every field is optional; unset fields fall back to the compiled-in value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsFile {
    /// Time position: "latest" or epoch millis
    #[serde(default)]
    pub time: Option<String>,

    /// Versioning path concept id
    #[serde(default)]
    pub path_id: Option<u32>,

    /// Tie-break order: "path" or "time"
    #[serde(default)]
    pub precedence: Option<String>,

    /// Module restriction; empty list means unrestricted
    #[serde(default)]
    pub modules: Option<Vec<u32>>,

    /// Allowed lifecycle state names; must be non-empty when present
    #[serde(default)]
    pub allowed_states: Option<Vec<String>>,

    /// Language concept id
    #[serde(default)]
    pub language_id: Option<u32>,

    /// Dialect assemblages in preference order
    #[serde(default)]
    pub dialect_prefs: Option<Vec<u32>>,

    /// Description types in preference order
    #[serde(default)]
    pub description_type_prefs: Option<Vec<u32>>,

    /// Stated logical-definition assemblage
    #[serde(default)]
    pub stated_assemblage_id: Option<u32>,

    /// Inferred logical-definition assemblage
    #[serde(default)]
    pub inferred_assemblage_id: Option<u32>,

    /// Description-logic profile concept id
    #[serde(default)]
    pub description_profile_id: Option<u32>,

    /// Classifier concept id
    #[serde(default)]
    pub classifier_id: Option<u32>,

    /// Taxonomy premise: "stated" or "inferred"
    #[serde(default)]
    pub premise: Option<String>,
}

impl DefaultsFile {
    /// Load a defaults file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&contents)
    }

    /// Parse a defaults document from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Overlay this file onto the compiled-in defaults
    pub fn resolve(&self) -> Result<CoordinateSpec> {
        let mut spec = builtin_defaults();

        if let Some(raw) = &self.time {
            spec.stamp.time = raw
                .parse()
                .map_err(|e| Error::config(format!("invalid default time '{raw}': {e}")))?;
        }
        if let Some(path_id) = self.path_id {
            spec.stamp.path_id = path_id;
        }
        if let Some(raw) = &self.precedence {
            spec.stamp.precedence = raw
                .parse()
                .map_err(|e| Error::config(format!("invalid default precedence '{raw}': {e}")))?;
        }
        if let Some(modules) = &self.modules {
            spec.stamp.modules = modules.iter().copied().collect();
        }
        if let Some(states) = &self.allowed_states {
            let mut parsed = BTreeSet::new();
            for raw in states {
                let status: Status = raw.parse().map_err(|e| {
                    Error::config(format!("invalid default allowed state '{raw}': {e}"))
                })?;
                parsed.insert(status);
            }
            if parsed.is_empty() {
                return Err(Error::config(
                    "default allowed states must not be empty".to_string(),
                ));
            }
            spec.stamp.allowed_states = parsed;
        }
        if let Some(language_id) = self.language_id {
            spec.language.language_id = language_id;
        }
        if let Some(dialects) = &self.dialect_prefs {
            spec.language.dialect_prefs = dialects.clone();
        }
        if let Some(types) = &self.description_type_prefs {
            spec.language.description_type_prefs = types.clone();
        }
        if let Some(id) = self.stated_assemblage_id {
            spec.logic.stated_assemblage_id = id;
        }
        if let Some(id) = self.inferred_assemblage_id {
            spec.logic.inferred_assemblage_id = id;
        }
        if let Some(id) = self.description_profile_id {
            spec.logic.description_profile_id = id;
        }
        if let Some(id) = self.classifier_id {
            spec.logic.classifier_id = id;
        }
        if let Some(raw) = &self.premise {
            spec.premise = raw
                .parse()
                .map_err(|e| Error::config(format!("invalid default premise '{raw}': {e}")))?;
        }

        Ok(spec)
    }
}
