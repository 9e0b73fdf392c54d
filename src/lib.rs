//! Declarative query-parameter filtering for OpenSearch
//!
//! Mirrors the django-filter idiom against a document-search backend: a
//! [`FilterSet`] declares named filters, sort choices, and pagination
//! defaults for one index; binding it to a request's parameters yields a
//! validated form snapshot and a ready-to-execute search body.
//!
//! # Examples
//!
//! ```
//! use opensearch_filterset::{
//! 	CompareLookup, FilterSet, FilterSpec, SortConfig, TextLookup,
//! };
//!
//! let books = FilterSet::builder("books")
//! 	.filter(FilterSpec::text("title", TextLookup::Match))
//! 	.filter(FilterSpec::range("price_range").field("price"))
//! 	.filter(FilterSpec::boolean("in_stock"))
//! 	.sort(
//! 		SortConfig::new()
//! 			.choice("", "Default")
//! 			.choice("price", "Price (Low to High)")
//! 			.choice("-price", "Price (High to Low)"),
//! 	)
//! 	.build()
//! 	.unwrap();
//!
//! # async fn example(books: FilterSet) {
//! let mut params = std::collections::HashMap::new();
//! params.insert("title".to_string(), "django".to_string());
//! params.insert("sort".to_string(), "-price".to_string());
//!
//! let bound = books.bind(params).await;
//! let body = bound.query_body();
//! let form = bound.form();
//! # }
//! ```
//!
//! User-input errors never abort a request: invalid fields are dropped from
//! the query and reported through the bound set's error mapping, and an
//! unresolvable postcode degrades to an unfiltered-by-location query with a
//! note. Only definition-time misconfiguration fails hard, from
//! [`FilterSetBuilder::build`].

pub mod error;
pub mod filter;
pub mod filterset;
pub mod form;
pub mod geocode;
pub mod lookup;
pub mod pagination;
pub mod sort;

// Core exports
pub use error::{ConfigError, FilterError, FilterResult, GeocodeError};
pub use filterset::{BoundFilterSet, FilterSet, FilterSetBuilder};

// Filter declaration exports
pub use filter::{FilterKind, FilterSpec, FilterValue};
pub use lookup::{CompareLookup, DistanceUnit, TextLookup};

// Sort and pagination exports
pub use pagination::{Pagination, DEFAULT_PAGE_SIZE};
pub use sort::{NestedSortField, SortConfig, SortMode};

// Form exports
pub use form::{FieldKind, FilterForm, FormField};

// Geocoding exports
pub use geocode::{GeoPoint, Geocoder, PostcodesIoGeocoder};
