//! Tests for pagination arithmetic

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use test_case::test_case;

fn page_params(url: &str) -> (u64, u64) {
    let query = url.split_once('?').expect("url has a query string").1;
    let mut page_num = None;
    let mut page_size = None;
    for pair in query.split('&') {
        let (name, value) = pair.split_once('=').expect("name=value pair");
        match name {
            "pageNum" => page_num = Some(value.parse().unwrap()),
            "maxPageSize" => page_size = Some(value.parse().unwrap()),
            _ => {}
        }
    }
    (page_num.expect("pageNum present"), page_size.expect("maxPageSize present"))
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_zero_page_num_rejected() {
    assert!(matches!(
        paginate(0, 10, 95, 10, "http://x"),
        Err(Error::InvalidPageNum { value: 0 })
    ));
}

#[test]
fn test_zero_page_size_rejected() {
    assert!(matches!(
        paginate(1, 0, 95, 0, "http://x"),
        Err(Error::InvalidPageSize { value: 0 })
    ));
}

// ============================================================================
// Previous page
// ============================================================================

#[test]
fn test_first_page_previous_is_noop() {
    let pagination = paginate(1, 10, 95, 10, "http://x").unwrap();
    assert_eq!(page_params(&pagination.previous_url), (1, 0));
}

#[test]
fn test_later_page_previous_is_full_page() {
    let pagination = paginate(5, 10, 95, 10, "http://x").unwrap();
    assert_eq!(page_params(&pagination.previous_url), (4, 10));
}

#[test]
fn test_previous_rule_is_uniform_past_the_estimate() {
    // the previous page is pageNum - 1 at full size regardless of where the
    // page sits relative to the estimated total
    let pagination = paginate(50, 10, 95, 0, "http://x").unwrap();
    assert_eq!(page_params(&pagination.previous_url), (49, 10));
}

// ============================================================================
// Next page, known total
// ============================================================================

#[test_case(1, 10, 95, 10, (2, 10) ; "first page advances a full page")]
#[test_case(5, 10, 95, 10, (6, 10) ; "middle page advances a full page")]
#[test_case(9, 10, 95, 10, (10, 5) ; "next page is the last, size is the remainder")]
#[test_case(10, 10, 95, 5, (10, 0) ; "current page reaches the end, no advance")]
#[test_case(11, 10, 95, 0, (11, 0) ; "past the end, no advance")]
#[test_case(1, 10, 10, 10, (1, 0) ; "single exact page, no advance")]
#[test_case(1, 10, 0, 0, (1, 0) ; "empty result set, no advance")]
#[test_case(2, 10, 20, 10, (2, 0) ; "second exact page consumes the total")]
#[test_case(1, 10, 15, 10, (2, 5) ; "short second page gets the remainder")]
fn test_next_page_with_known_total(
    page_num: u32,
    max_page_size: u32,
    approximate_total: i64,
    result_count: usize,
    expected: (u64, u64),
) {
    let pagination = paginate(
        page_num,
        max_page_size,
        approximate_total,
        result_count,
        "http://x",
    )
    .unwrap();
    assert_eq!(page_params(&pagination.next_url), expected);
    assert_eq!(pagination.approximate_total, approximate_total);
    assert_eq!(pagination.page_num, page_num);
}

// ============================================================================
// Next page, unknown total
// ============================================================================

#[test]
fn test_unknown_total_advertises_next_page() {
    let pagination = paginate(3, 10, -1, 10, "http://x").unwrap();
    assert_eq!(page_params(&pagination.next_url), (4, 10));
    assert_eq!(pagination.approximate_total, -1);
}

#[test]
fn test_unknown_total_short_page_means_no_next() {
    let pagination = paginate(3, 10, -1, 4, "http://x").unwrap();
    assert_eq!(page_params(&pagination.next_url), (3, 0));
}

#[test]
fn test_unknown_total_empty_page_means_no_next() {
    let pagination = paginate(3, 10, -1, 0, "http://x").unwrap();
    assert_eq!(page_params(&pagination.next_url), (3, 0));
}

#[test]
fn test_any_negative_total_normalized_to_unknown() {
    let pagination = paginate(3, 10, -37, 10, "http://x").unwrap();
    assert_eq!(pagination.approximate_total, -1);
}

// ============================================================================
// URL construction
// ============================================================================

#[test]
fn test_url_without_query_string() {
    let pagination = paginate(1, 10, 95, 10, "http://x/api/search").unwrap();
    assert_eq!(
        pagination.next_url,
        "http://x/api/search?pageNum=2&maxPageSize=10"
    );
    assert_eq!(
        pagination.previous_url,
        "http://x/api/search?pageNum=1&maxPageSize=0"
    );
}

#[test]
fn test_url_with_existing_query_string_is_extended() {
    let pagination = paginate(2, 10, 95, 10, "http://x/api/search?query=heart").unwrap();
    assert_eq!(
        pagination.next_url,
        "http://x/api/search?query=heart&pageNum=3&maxPageSize=10"
    );
    assert_eq!(
        pagination.previous_url,
        "http://x/api/search?query=heart&pageNum=1&maxPageSize=10"
    );
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_pagination_serializes_for_responses() {
    let pagination = paginate(9, 10, 95, 10, "http://x").unwrap();
    let json = serde_json::to_value(&pagination).unwrap();

    assert_eq!(json["page_num"], 9);
    assert_eq!(json["approximate_total"], 95);
    assert!(json["next_url"].as_str().unwrap().contains("pageNum=10"));
}
