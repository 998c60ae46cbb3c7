//! Coordinate value types
//!
//! A *query context* is described by four immutable components: a stamp
//! (which revision of the data is visible), a language preference, a logic
//! profile, and a taxonomy premise. Together they form a [`CoordinateSpec`],
//! the value that coordinate tokens encode.
//!
//! These types carry no behavior beyond structural equality, hashing and
//! display; encoding lives in [`crate::token`] and parsing of request
//! parameter spellings lives in [`crate::params`].

mod types;

pub use types::{
    CoordinateSpec, LanguageSpec, LogicSpec, Precedence, PremiseType, StampSpec, StampTime, Status,
};
