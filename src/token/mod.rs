//! Coordinate tokens
//!
//! A coordinate token is a compact, URL-safe string carrying a complete
//! [`CoordinateSpec`](crate::coordinate::CoordinateSpec). Clients receive a
//! token once and replay it on follow-up calls instead of re-sending a dozen
//! preference parameters; the string is opaque to them and never constructed
//! by hand.
//!
//! Two pieces live here:
//!
//! - [`codec`] — the pure, versioned wire format (`encode` / `decode`)
//! - [`registry`] — the process-wide cache that gives equal contexts one
//!   canonical instance and one canonical string

pub mod codec;
mod registry;

pub use codec::{decode, encode, FORMAT_VERSION};
pub use registry::{CanonicalToken, TokenRegistry};

#[cfg(test)]
mod tests;
