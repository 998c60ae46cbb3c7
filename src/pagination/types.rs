//! Pagination result record

use serde::{Deserialize, Serialize};

/// Pagination links for one page of a result set
///
/// Built by [`paginate`](super::paginate) and embedded in paged API
/// responses. The URLs carry the `pageNum` and `maxPageSize` query
/// parameters and are complete as returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Link to the previous result-set page
    pub previous_url: String,

    /// Link to the next result-set page
    pub next_url: String,

    /// The page being described, starting at 1
    pub page_num: u32,

    /// Estimated size of the whole matching set; negative iff unknown
    pub approximate_total: i64,
}
