//! Core coordinate records
//!
//! Plain data: every type here is an immutable value with full structural
//! equality, including the order of preference lists.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Stamp
// ============================================================================

/// Position on the time axis of a stamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StampTime {
    /// The most recent qualifying revision
    Latest,
    /// A fixed point in time, epoch milliseconds
    At(i64),
}

impl fmt::Display for StampTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StampTime::Latest => write!(f, "latest"),
            StampTime::At(millis) => write!(f, "{millis}"),
        }
    }
}

impl FromStr for StampTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("latest") {
            return Ok(StampTime::Latest);
        }
        s.parse::<i64>()
            .map(StampTime::At)
            .map_err(|_| "expected 'latest' or an epoch millis value".to_string())
    }
}

/// Tie-break order when multiple revisions qualify
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precedence {
    /// Prefer the revision on the nearer path
    Path,
    /// Prefer the most recent revision
    Time,
}

impl Precedence {
    /// Canonical lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Precedence::Path => "path",
            Precedence::Time => "time",
        }
    }
}

impl fmt::Display for Precedence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Precedence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "path" => Ok(Precedence::Path),
            "time" => Ok(Precedence::Time),
            _ => Err("expected 'path' or 'time'".to_string()),
        }
    }
}

/// Lifecycle state of a revision
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Current content
    Active,
    /// Retired content
    Inactive,
    /// Bootstrap content predating version accounting
    Primordial,
    /// Withdrawn content
    Canceled,
}

impl Status {
    /// All states, in wire-code order
    pub const ALL: [Status; 4] = [
        Status::Active,
        Status::Inactive,
        Status::Primordial,
        Status::Canceled,
    ];

    /// Canonical lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
            Status::Primordial => "primordial",
            Status::Canceled => "canceled",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(Status::Active),
            "inactive" => Ok(Status::Inactive),
            "primordial" => Ok(Status::Primordial),
            "canceled" => Ok(Status::Canceled),
            _ => Err("expected 'active', 'inactive', 'primordial' or 'canceled'".to_string()),
        }
    }
}

/// Revision-selection filter: which revision of an entity is visible
///
/// A stamp restricts visibility by time, versioning path, authoring module
/// and lifecycle state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StampSpec {
    /// Time position; revisions newer than this are invisible
    pub time: StampTime,

    /// Versioning path the view follows
    pub path_id: u32,

    /// Tie-break order when multiple revisions qualify
    pub precedence: Precedence,

    /// Authoring modules to restrict to; empty means unrestricted
    pub modules: BTreeSet<u32>,

    /// Lifecycle states a visible revision may carry; never empty
    pub allowed_states: BTreeSet<Status>,
}

// ============================================================================
// Language
// ============================================================================

/// Language and dialect preference for choosing display descriptions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguageSpec {
    /// Language concept id
    pub language_id: u32,

    /// Dialect assemblages in preference order, first wins
    pub dialect_prefs: Vec<u32>,

    /// Description types in preference order, first wins
    pub description_type_prefs: Vec<u32>,
}

// ============================================================================
// Logic
// ============================================================================

/// Assemblages backing logical-definition retrieval and classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogicSpec {
    /// Assemblage holding stated logical definitions
    pub stated_assemblage_id: u32,

    /// Assemblage holding inferred (classified) logical definitions
    pub inferred_assemblage_id: u32,

    /// Description-logic profile concept id
    pub description_profile_id: u32,

    /// Classifier concept id
    pub classifier_id: u32,
}

// ============================================================================
// Premise
// ============================================================================

/// Whether taxonomy views use human-asserted or machine-computed relationships
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PremiseType {
    /// Human-asserted relationships
    Stated,
    /// Classifier-computed relationships
    Inferred,
}

impl PremiseType {
    /// Canonical lowercase name
    pub fn name(self) -> &'static str {
        match self {
            PremiseType::Stated => "stated",
            PremiseType::Inferred => "inferred",
        }
    }
}

impl fmt::Display for PremiseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PremiseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stated" => Ok(PremiseType::Stated),
            "inferred" => Ok(PremiseType::Inferred),
            _ => Err("expected 'stated' or 'inferred'".to_string()),
        }
    }
}

// ============================================================================
// Composite
// ============================================================================

/// A complete query context: stamp, language, logic and premise
///
/// Two specs are equal iff every field is equal, including the order of
/// preference lists. This is the value that coordinate tokens encode and
/// that the registry canonicalizes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoordinateSpec {
    /// Revision-selection filter
    pub stamp: StampSpec,

    /// Language and dialect preference
    pub language: LanguageSpec,

    /// Logical-definition assemblages
    pub logic: LogicSpec,

    /// Taxonomy premise
    pub premise: PremiseType,
}
