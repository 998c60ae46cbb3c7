//! Canonical request-parameter names
//!
//! The wire-level query-parameter vocabulary shared by every endpoint, with
//! the documented default spellings. Defaults are spellings, not parsed
//! values; the parsed compiled-in defaults live in [`crate::config`].

/// Serialized coordinate token to resolve against
pub const COORD_TOKEN: &str = "coordToken";

// ============================================================================
// Stamp
// ============================================================================

/// Time position: "latest" or epoch millis
pub const TIME: &str = "time";
/// Default time spelling
pub const TIME_DEFAULT: &str = "latest";

/// Versioning path concept id
pub const PATH: &str = "path";

/// Tie-break order: "path" or "time"
pub const PRECEDENCE: &str = "precedence";
/// Default precedence spelling
pub const PRECEDENCE_DEFAULT: &str = "path";

/// Comma-separated module ids; empty means unrestricted
pub const MODULES: &str = "modules";
/// Default modules spelling
pub const MODULES_DEFAULT: &str = "";

/// Comma-separated lifecycle state names
pub const ALLOWED_STATES: &str = "allowedStates";
/// Default allowed-states spelling
pub const ALLOWED_STATES_DEFAULT: &str = "active";

// ============================================================================
// Language
// ============================================================================

/// Language concept id
pub const LANGUAGE: &str = "language";

/// Comma-separated dialect ids in preference order
pub const DIALECT_PREFS: &str = "dialectPrefs";

/// Comma-separated description-type ids in preference order
pub const DESCRIPTION_TYPE_PREFS: &str = "descriptionTypePrefs";

// ============================================================================
// Logic
// ============================================================================

/// Stated logical-definition assemblage id
pub const LOGIC_STATED_ASSEMBLAGE: &str = "logicStatedAssemblage";

/// Inferred logical-definition assemblage id
pub const LOGIC_INFERRED_ASSEMBLAGE: &str = "logicInferredAssemblage";

/// Description-logic profile concept id
pub const DESCRIPTION_LOGIC_PROFILE: &str = "descriptionLogicProfile";

/// Classifier concept id
pub const CLASSIFIER: &str = "classifier";

// ============================================================================
// Premise
// ============================================================================

/// Taxonomy premise selector: true = stated, false = inferred
pub const STATED: &str = "stated";
/// Default stated spelling
pub const STATED_DEFAULT: &str = "true";

// ============================================================================
// Pagination
// ============================================================================

/// Page number, starting at 1
pub const PAGE_NUM: &str = "pageNum";
/// Default page number spelling
pub const PAGE_NUM_DEFAULT: &str = "1";

/// Maximum results per page
pub const MAX_PAGE_SIZE: &str = "maxPageSize";
/// Default page size spelling
pub const MAX_PAGE_SIZE_DEFAULT: &str = "10";
