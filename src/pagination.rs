//! Page-number pagination in backend-native `from`/`size` terms
//!
//! Invalid `page`/`page_size` values never fail the request: they fall back
//! to the defaults and the error is reported through the bound set's error
//! mapping. When the caller knows the result total, [`Pagination::clamp`]
//! redirects past-the-end pages to the last non-empty page.

use std::collections::HashMap;
use tracing::warn;

use crate::error::FilterError;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A validated page request
///
/// # Examples
///
/// ```
/// use opensearch_filterset::Pagination;
///
/// let pagination = Pagination { page: 2, page_size: 10 };
/// assert_eq!(pagination.from(), 10);
///
/// // Page 3 of 15 results at 10 per page redirects to page 2.
/// assert_eq!(pagination.clamp(15).page, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
	/// 1-indexed page number
	pub page: usize,
	pub page_size: usize,
}

impl Default for Pagination {
	fn default() -> Self {
		Self {
			page: 1,
			page_size: DEFAULT_PAGE_SIZE,
		}
	}
}

fn parse_positive(
	params: &HashMap<String, String>,
	param: &str,
) -> Result<Option<usize>, FilterError> {
	let Some(raw) = params.get(param).map(|value| value.trim()) else {
		return Ok(None);
	};
	if raw.is_empty() {
		return Ok(None);
	}
	match raw.parse::<usize>() {
		Ok(value) if value >= 1 => Ok(Some(value)),
		_ => Err(FilterError::InvalidPagination {
			param: param.to_string(),
			reason: format!("'{raw}' is not a positive integer"),
		}),
	}
}

impl Pagination {
	/// Parse `page`/`page_size`, falling back to defaults on invalid input
	/// and returning the errors for display.
	pub(crate) fn from_params(
		params: &HashMap<String, String>,
		default_page_size: usize,
	) -> (Self, Vec<FilterError>) {
		let mut errors = Vec::new();
		let page = match parse_positive(params, "page") {
			Ok(Some(page)) => page,
			Ok(None) => 1,
			Err(err) => {
				warn!(error = %err, "falling back to first page");
				errors.push(err);
				1
			}
		};
		let page_size = match parse_positive(params, "page_size") {
			Ok(Some(size)) => size,
			Ok(None) => default_page_size,
			Err(err) => {
				warn!(error = %err, "falling back to default page size");
				errors.push(err);
				default_page_size
			}
		};
		(Self { page, page_size }, errors)
	}

	/// Offset of the first item on this page.
	pub fn from(&self) -> usize {
		(self.page - 1) * self.page_size
	}

	/// Redirect a past-the-end page to the last non-empty page for a known
	/// result total. An empty result set pins to page 1.
	pub fn clamp(self, total: usize) -> Self {
		if total == 0 {
			return Self { page: 1, ..self };
		}
		let max_page = total.div_ceil(self.page_size);
		Self {
			page: self.page.min(max_page),
			..self
		}
	}

	/// The `[start, end)` item window of this page.
	pub fn slice(&self) -> (usize, usize) {
		(self.from(), self.from() + self.page_size)
	}
}
