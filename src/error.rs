use thiserror::Error;

/// Recoverable, per-field errors raised while validating request parameters.
///
/// These never abort the whole request: the offending field is dropped from
/// the built query and the error is reported back through the bound set's
/// error mapping for display.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
	#[error("Invalid value for '{param}': {reason}")]
	InvalidValue { param: String, reason: String },
	#[error("Invalid pagination parameter '{param}': {reason}")]
	InvalidPagination { param: String, reason: String },
}

impl FilterError {
	/// The request parameter the error belongs to.
	pub fn param(&self) -> &str {
		match self {
			FilterError::InvalidValue { param, .. } => param,
			FilterError::InvalidPagination { param, .. } => param,
		}
	}
}

pub type FilterResult<T> = Result<T, FilterError>;

/// Declaration-time errors in a FilterSet definition.
///
/// Unlike [`FilterError`], these signal a programming mistake and fail hard
/// from [`FilterSetBuilder::build`](crate::FilterSetBuilder::build).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
	#[error("Duplicate filter name '{0}'")]
	DuplicateFilter(String),
	#[error("nested_path is required for nested sort field '{0}'")]
	MissingNestedPath(String),
	#[error("Nested sort field '{field}' is not under nested path '{path}'")]
	FieldOutsideNestedPath { field: String, path: String },
	#[error("Geo filter '{0}' declared without a geocoder")]
	MissingGeocoder(String),
}

/// Postcode resolution failures.
///
/// Callers do not distinguish further: any variant means "no location
/// constraint this time" and the query degrades to unfiltered-by-location.
#[derive(Debug, Error)]
pub enum GeocodeError {
	#[error("Geocoding request failed: {0}")]
	Http(#[from] reqwest::Error),
	#[error("No coordinates found for postcode '{0}'")]
	NotFound(String),
	#[error("Invalid geocoder base URL '{0}'")]
	InvalidBaseUrl(String),
}
