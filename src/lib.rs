//! # termctx
//!
//! Query-context coordinate tokens and pagination for terminology services.
//!
//! A terminology knowledge base answers every request against a *query
//! context*: which revisions are visible (stamp), which language and
//! dialect descriptions are preferred, which assemblages back logical
//! definitions, and whether taxonomy follows stated or inferred
//! relationships. This crate turns that context into a compact, opaque,
//! URL-safe token a client can replay instead of re-sending a dozen
//! parameters, and computes the previous/next links for paged results.
//!
//! ## Features
//!
//! - **Coordinate tokens**: deterministic, versioned, round-trippable
//!   encoding of a full query context into one string
//! - **Canonical registry**: equal contexts share one instance and one
//!   string, process-wide, safe under concurrent request handlers
//! - **Layered resolution**: explicit parameter > supplied token > system
//!   default, per field, with strict client-error reporting
//! - **Pagination arithmetic**: previous/next links from page number, page
//!   size and a possibly unknown approximate total
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use termctx::{resolve, RequestParams, TokenRegistry};
//!
//! let registry = TokenRegistry::with_builtin_defaults();
//!
//! // first call: explicit preferences
//! let mut params = RequestParams::new();
//! params.set("language", "12");
//! params.set("stated", "false");
//! let token = resolve(&params, &registry)?;
//!
//! // follow-up calls: replay the token, override selectively
//! let mut params = RequestParams::new();
//! params.set("coordToken", token.serialized());
//! params.set("pageNum", "2"); // handled by the surrounding layer
//! let same = resolve(&params, &registry)?;
//! assert!(token.same_instance(&same));
//! # Ok::<(), termctx::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Request-handling layer                   │
//! │   resolve(params) → CanonicalToken    paginate(...) → URLs  │
//! └─────────────────────────────────────────────────────────────┘
//!                │                                  │
//! ┌──────────────┴───────────────┐   ┌──────────────┴───────────┐
//! │        Token registry        │   │  Pagination calculator   │
//! │  one canonical entry per     │   │  pure page arithmetic    │
//! │  distinct context            │   └──────────────────────────┘
//! ├──────────────────────────────┤
//! │         Token codec          │
//! │  versioned URL-safe string   │
//! ├──────────────────────────────┤
//! │    Coordinate value types    │
//! │  stamp, language, logic,     │
//! │  premise                     │
//! └──────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for termctx
pub mod error;

/// Coordinate value types
pub mod coordinate;

/// Token codec and registry
pub mod token;

/// Request parameters and coordinate resolution
pub mod params;

/// Pagination arithmetic
pub mod pagination;

/// System default coordinates
pub mod config;

/// System-defaults provider seam
pub mod provider;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use coordinate::{
    CoordinateSpec, LanguageSpec, LogicSpec, Precedence, PremiseType, StampSpec, StampTime, Status,
};
pub use error::{Error, Result};
pub use pagination::{paginate, Pagination};
pub use params::{resolve, RequestParams};
pub use provider::{BuiltinProvider, CoordinateProvider, FileProvider};
pub use token::{CanonicalToken, TokenRegistry};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
