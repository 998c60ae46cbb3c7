//! Result-set pagination
//!
//! Derives previous/next page links from a page number, a page size and a
//! possibly unknown approximate total. A pure calculation, performed fresh
//! per response; no state is carried between pages and no snapshot
//! isolation is assumed. When the underlying result set changes between
//! requests the links are best-effort, not transactionally consistent.

mod calc;
mod types;

pub use calc::paginate;
pub use types::Pagination;

#[cfg(test)]
mod tests;
