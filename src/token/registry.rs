//! Token registry
//!
//! Process-wide cache mapping each distinct coordinate spec to one canonical
//! instance and one canonical string. The registry only ever grows; the
//! number of distinct contexts a deployment uses is set by operator
//! configuration, not by request volume.

use super::codec;
use crate::coordinate::CoordinateSpec;
use crate::error::Result;
use crate::provider::CoordinateProvider;
use dashmap::DashMap;
use std::fmt;
use std::sync::Arc;

/// A canonical, registered coordinate token
///
/// Holds shared ownership of the one canonical [`CoordinateSpec`] instance
/// for its context and of the serialized string clients replay. Cloning is
/// cheap and preserves identity: clones of the same registry entry report
/// [`same_instance`](CanonicalToken::same_instance).
#[derive(Debug, Clone)]
pub struct CanonicalToken {
    spec: Arc<CoordinateSpec>,
    serialized: Arc<str>,
}

impl CanonicalToken {
    /// The coordinate spec this token encodes
    pub fn spec(&self) -> &CoordinateSpec {
        &self.spec
    }

    /// The URL-safe serialized form, suitable for a query parameter
    pub fn serialized(&self) -> &str {
        &self.serialized
    }

    /// Check whether two handles refer to the same canonical instance
    pub fn same_instance(&self, other: &CanonicalToken) -> bool {
        Arc::ptr_eq(&self.spec, &other.spec)
    }
}

impl PartialEq for CanonicalToken {
    fn eq(&self, other: &Self) -> bool {
        self.spec == other.spec
    }
}

impl Eq for CanonicalToken {}

impl fmt::Display for CanonicalToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialized)
    }
}

/// Process-wide coordinate token cache
///
/// Lookup and insert are safe under concurrent callers; when two threads
/// race to register an equal spec, exactly one entry wins and both observe
/// it. Entries are never mutated or evicted.
#[derive(Debug)]
pub struct TokenRegistry {
    by_spec: DashMap<CoordinateSpec, CanonicalToken>,
    by_string: DashMap<Arc<str>, CanonicalToken>,
    default: CanonicalToken,
}

impl TokenRegistry {
    /// Create a registry, eagerly seeding the default token
    pub fn new(defaults: CoordinateSpec) -> Self {
        let serialized: Arc<str> = codec::encode(&defaults).into();
        let default = CanonicalToken {
            spec: Arc::new(defaults.clone()),
            serialized: Arc::clone(&serialized),
        };
        tracing::debug!(token = %default.serialized, "seeded default coordinate token");

        let by_spec = DashMap::new();
        by_spec.insert(defaults, default.clone());
        let by_string = DashMap::new();
        by_string.insert(serialized, default.clone());

        Self {
            by_spec,
            by_string,
            default,
        }
    }

    /// Create a registry seeded from a provider's system defaults
    pub fn from_provider(provider: &dyn CoordinateProvider) -> Result<Self> {
        Ok(Self::new(provider.system_defaults()?))
    }

    /// Create a registry seeded with the compiled-in defaults
    pub fn with_builtin_defaults() -> Self {
        Self::new(crate::config::builtin_defaults())
    }

    /// The default token, available without any string round trip
    pub fn default_token(&self) -> &CanonicalToken {
        &self.default
    }

    /// Look up or register the canonical token for a spec
    ///
    /// Equality is full structural equality, not string equality, so a
    /// future re-encoding of previously issued tokens still converges on one
    /// canonical entry per context.
    pub fn get_or_create(&self, spec: &CoordinateSpec) -> CanonicalToken {
        if let Some(existing) = self.by_spec.get(spec) {
            return existing.clone();
        }

        // entry() serializes racing inserters of an equal spec; the loser
        // observes the winner's value
        let token = self
            .by_spec
            .entry(spec.clone())
            .or_insert_with(|| {
                let serialized: Arc<str> = codec::encode(spec).into();
                tracing::debug!(token = %serialized, "registered new coordinate token");
                CanonicalToken {
                    spec: Arc::new(spec.clone()),
                    serialized,
                }
            })
            .clone();

        self.by_string
            .entry(Arc::clone(&token.serialized))
            .or_insert_with(|| token.clone());

        token
    }

    /// Look up or register the canonical token for a serialized string
    ///
    /// The hot path: a string seen before returns its entry without
    /// decoding. A fresh string is decoded and canonicalized through the
    /// spec map, so a caller presenting a token minted elsewhere for an
    /// already-known context still receives the one canonical instance.
    pub fn get_or_create_str(&self, token: &str) -> Result<CanonicalToken> {
        if let Some(existing) = self.by_string.get(token) {
            return Ok(existing.clone());
        }
        let spec = codec::decode(token)?;
        Ok(self.get_or_create(&spec))
    }

    /// Number of distinct contexts registered
    pub fn len(&self) -> usize {
        self.by_spec.len()
    }

    /// Check whether the registry has no entries
    ///
    /// Always false in practice: the default token is seeded at
    /// construction.
    pub fn is_empty(&self) -> bool {
        self.by_spec.is_empty()
    }
}
