//! Effective-coordinate resolution
//!
//! Merges the explicit parameters of the current request, an optionally
//! supplied coordinate token, and the system defaults into one effective
//! [`CoordinateSpec`], then canonicalizes the result through the registry.
//!
//! Precedence per field, highest first:
//!
//! 1. an explicit parameter on the current request
//! 2. the value carried by the supplied `coordToken`
//! 3. the system default
//!
//! The token acts as a reusable profile that explicit parameters may
//! selectively override without repeating the whole profile. A parameter
//! that fails to parse is a client error naming the parameter and raw
//! value; it is never silently replaced by a default.

use super::names;
use crate::coordinate::{CoordinateSpec, PremiseType, StampTime, Status};
use crate::error::{Error, Result};
use crate::token::{CanonicalToken, TokenRegistry};
use std::collections::{BTreeSet, HashMap};

/// Explicit parameters of the current request
///
/// A plain name-to-raw-value map; repeated names keep the last value. This
/// is an explicit context value handed to [`resolve`], not ambient state,
/// so resolution stays independently testable.
#[derive(Debug, Clone, Default)]
pub struct RequestParams {
    values: HashMap<String, String>,
}

impl RequestParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a parameter set from name/value pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Set a parameter, replacing any previous value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Raw value of a parameter, if present
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Check whether any parameter is set
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of parameters set
    pub fn len(&self) -> usize {
        self.values.len()
    }
}

/// Resolve the effective coordinates for a request
///
/// Applies the per-field precedence described in the module docs and
/// returns the canonical token for the effective context, so repeated use
/// of the same effective context always yields the same instance and
/// string. An unparseable explicit parameter fails with
/// [`Error::Parameter`]; an unparseable supplied token surfaces the codec
/// error unmodified.
pub fn resolve(params: &RequestParams, registry: &TokenRegistry) -> Result<CanonicalToken> {
    let supplied = match params.get(names::COORD_TOKEN) {
        Some(raw) => Some(registry.get_or_create_str(raw)?),
        None => None,
    };
    let base = supplied
        .as_ref()
        .map_or_else(|| registry.default_token().spec(), CanonicalToken::spec);

    let mut spec = base.clone();
    apply_explicit(&mut spec, params)?;

    Ok(registry.get_or_create(&spec))
}

/// Overlay explicit request parameters onto a base spec, field by field
fn apply_explicit(spec: &mut CoordinateSpec, params: &RequestParams) -> Result<()> {
    // stamp
    if let Some(raw) = params.get(names::TIME) {
        spec.stamp.time = parse_typed::<StampTime>(names::TIME, raw)?;
    }
    if let Some(raw) = params.get(names::PATH) {
        spec.stamp.path_id = parse_id(names::PATH, raw)?;
    }
    if let Some(raw) = params.get(names::PRECEDENCE) {
        spec.stamp.precedence = parse_typed(names::PRECEDENCE, raw)?;
    }
    if let Some(raw) = params.get(names::MODULES) {
        spec.stamp.modules = parse_id_list(names::MODULES, raw)?.into_iter().collect();
    }
    if let Some(raw) = params.get(names::ALLOWED_STATES) {
        spec.stamp.allowed_states = parse_states(names::ALLOWED_STATES, raw)?;
    }

    // language
    if let Some(raw) = params.get(names::LANGUAGE) {
        spec.language.language_id = parse_id(names::LANGUAGE, raw)?;
    }
    if let Some(raw) = params.get(names::DIALECT_PREFS) {
        spec.language.dialect_prefs = parse_id_list(names::DIALECT_PREFS, raw)?;
    }
    if let Some(raw) = params.get(names::DESCRIPTION_TYPE_PREFS) {
        spec.language.description_type_prefs = parse_id_list(names::DESCRIPTION_TYPE_PREFS, raw)?;
    }

    // logic
    if let Some(raw) = params.get(names::LOGIC_STATED_ASSEMBLAGE) {
        spec.logic.stated_assemblage_id = parse_id(names::LOGIC_STATED_ASSEMBLAGE, raw)?;
    }
    if let Some(raw) = params.get(names::LOGIC_INFERRED_ASSEMBLAGE) {
        spec.logic.inferred_assemblage_id = parse_id(names::LOGIC_INFERRED_ASSEMBLAGE, raw)?;
    }
    if let Some(raw) = params.get(names::DESCRIPTION_LOGIC_PROFILE) {
        spec.logic.description_profile_id = parse_id(names::DESCRIPTION_LOGIC_PROFILE, raw)?;
    }
    if let Some(raw) = params.get(names::CLASSIFIER) {
        spec.logic.classifier_id = parse_id(names::CLASSIFIER, raw)?;
    }

    // premise
    if let Some(raw) = params.get(names::STATED) {
        spec.premise = parse_stated(names::STATED, raw)?;
    }

    Ok(())
}

// ============================================================================
// Field parsers
// ============================================================================

fn parse_typed<T>(name: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr<Err = String>,
{
    raw.parse()
        .map_err(|message: String| Error::parameter(name, raw, message))
}

fn parse_id(name: &str, raw: &str) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| Error::parameter(name, raw, "expected an integer concept id"))
}

/// Parse a comma-separated id list; the empty string is the empty list
fn parse_id_list(name: &str, raw: &str) -> Result<Vec<u32>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    raw.split(',')
        .map(|part| {
            part.trim().parse::<u32>().map_err(|_| {
                Error::parameter(name, raw, format!("'{}' is not an integer id", part.trim()))
            })
        })
        .collect()
}

fn parse_states(name: &str, raw: &str) -> Result<BTreeSet<Status>> {
    let mut states = BTreeSet::new();
    for part in raw.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let status: Status = part
            .parse()
            .map_err(|message: String| Error::parameter(name, raw, message))?;
        states.insert(status);
    }
    if states.is_empty() {
        return Err(Error::parameter(
            name,
            raw,
            "at least one lifecycle state is required",
        ));
    }
    Ok(states)
}

fn parse_stated(name: &str, raw: &str) -> Result<PremiseType> {
    match raw.to_ascii_lowercase().as_str() {
        "true" => Ok(PremiseType::Stated),
        "false" => Ok(PremiseType::Inferred),
        _ => Err(Error::parameter(name, raw, "expected 'true' or 'false'")),
    }
}
