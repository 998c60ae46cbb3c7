//! Request parameters and coordinate resolution
//!
//! Every request is evaluated against an effective coordinate context built
//! from three layers: explicit query parameters, an optional reusable
//! coordinate token, and the system defaults. [`resolve`] merges the layers
//! with explicit-wins precedence and hands back the canonical token for the
//! result.
//!
//! [`names`] holds the wire-level parameter vocabulary.

pub mod names;
mod resolver;

pub use resolver::{resolve, RequestParams};
