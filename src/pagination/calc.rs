//! Previous/next link arithmetic

use super::types::Pagination;
use crate::error::{Error, Result};
use crate::params::names;

/// Compute pagination links for the current page
///
/// `approximate_total` is the estimated size of the whole matching set,
/// negative when unknown. `result_count` is the number of results actually
/// materialized for this page; it only matters when the total is unknown,
/// where a short page means the end was reached and no next page is
/// advertised.
///
/// A "no page" link points back at the current page with size 0: page 1's
/// previous link, and the next link once the current page reaches or passes
/// the end.
pub fn paginate(
    page_num: u32,
    max_page_size: u32,
    approximate_total: i64,
    result_count: usize,
    base_url: &str,
) -> Result<Pagination> {
    if page_num < 1 {
        return Err(Error::InvalidPageNum { value: page_num });
    }
    if max_page_size < 1 {
        return Err(Error::InvalidPageSize { value: max_page_size });
    }

    let page = u64::from(page_num);
    let size = u64::from(max_page_size);

    let (previous_page, previous_size) = if page_num == 1 {
        (1, 0)
    } else {
        (page - 1, size)
    };

    let consumed = page * size;
    let (next_page, next_size, approximate_total) = if approximate_total < 0 {
        if result_count < max_page_size as usize {
            // short page: the true end was just discovered
            (page, 0, -1)
        } else {
            // optimistic; the caller finds the end when a page comes up short
            (page + 1, size, -1)
        }
    } else {
        let total = approximate_total as u64;
        if consumed >= total {
            // current page reaches or passes the end
            (page, 0, approximate_total)
        } else if (page + 1) * size >= total {
            // next page is the last one; its size is the remainder
            (page + 1, total - consumed, approximate_total)
        } else {
            (page + 1, size, approximate_total)
        }
    };

    Ok(Pagination {
        previous_url: page_url(base_url, previous_page, previous_size),
        next_url: page_url(base_url, next_page, next_size),
        page_num,
        approximate_total,
    })
}

/// Append page parameters to a base URL, extending an existing query string
fn page_url(base_url: &str, page_num: u64, page_size: u64) -> String {
    let separator = if base_url.contains('?') { '&' } else { '?' };
    format!(
        "{base_url}{separator}{}={page_num}&{}={page_size}",
        names::PAGE_NUM,
        names::MAX_PAGE_SIZE
    )
}
