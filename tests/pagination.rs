//! Pagination parameter handling and last-page clamping.

use std::collections::HashMap;

use opensearch_filterset::{FilterSet, FilterSpec, Pagination, TextLookup, DEFAULT_PAGE_SIZE};
use rstest::rstest;
use serde_json::json;

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
	pairs
		.iter()
		.map(|(k, v)| (k.to_string(), v.to_string()))
		.collect()
}

fn articles() -> FilterSet {
	FilterSet::builder("articles")
		.filter(FilterSpec::text("title", TextLookup::Match))
		.build()
		.unwrap()
}

#[tokio::test]
async fn from_and_size_reflect_page_parameters() {
	let set = articles();
	let bound = set
		.bind(params(&[("page", "2"), ("page_size", "2")]))
		.await;
	let body = bound.query_body();
	assert_eq!(body["from"], json!(2));
	assert_eq!(body["size"], json!(2));
}

#[tokio::test]
async fn defaults_apply_when_parameters_absent() {
	let set = articles();
	let bound = set.bind(params(&[])).await;
	assert_eq!(bound.pagination(), Pagination::default());
	let body = bound.query_body();
	assert_eq!(body["from"], json!(0));
	assert_eq!(body["size"], json!(DEFAULT_PAGE_SIZE));
}

#[rstest]
#[case(&[("page", "0")])]
#[case(&[("page", "-2")])]
#[case(&[("page_size", "-10")])]
#[case(&[("page", "first"), ("page_size", "lots")])]
#[tokio::test]
async fn invalid_parameters_fall_back_to_defaults(#[case] pairs: &[(&str, &str)]) {
	let set = articles();
	let bound = set.bind(params(pairs)).await;

	// Recovered, not fatal: the query is well-formed with default paging
	// and the bad parameter is reported.
	assert!(!bound.is_valid());
	assert_eq!(bound.pagination(), Pagination::default());
	let body = bound.query_body();
	assert_eq!(body["from"], json!(0));
	assert_eq!(body["size"], json!(DEFAULT_PAGE_SIZE));
}

#[tokio::test]
async fn custom_default_page_size() {
	let set = FilterSet::builder("articles")
		.default_page_size(25)
		.build()
		.unwrap();
	let bound = set.bind(params(&[])).await;
	assert_eq!(bound.query_body()["size"], json!(25));
}

#[rstest]
// 15 results, size 10: page 3 redirects to page 2
#[case(3, 10, 15, (10, 20))]
// 25 results, size 5: page 10 redirects to page 5
#[case(10, 5, 25, (20, 25))]
// valid page numbers are unchanged
#[case(2, 10, 30, (10, 20))]
// exact page boundary
#[case(2, 10, 20, (10, 20))]
// one page beyond the boundary
#[case(3, 10, 20, (10, 20))]
// single result, absurdly high page request
#[case(100, 10, 1, (0, 10))]
// empty results default to page one
#[case(5, 10, 0, (0, 10))]
fn page_beyond_max_redirects_to_last_page(
	#[case] page: usize,
	#[case] page_size: usize,
	#[case] total: usize,
	#[case] expected: (usize, usize),
) {
	let pagination = Pagination { page, page_size }.clamp(total);
	assert_eq!(pagination.slice(), expected);
}

#[tokio::test]
async fn clamping_a_bound_request() {
	let set = articles();
	let bound = set
		.bind(params(&[("page", "9"), ("page_size", "10")]))
		.await;
	// The caller executed the query, learned there are 15 hits, and re-slices.
	let pagination = bound.pagination().clamp(15);
	assert_eq!(pagination.slice(), (10, 20));
}
