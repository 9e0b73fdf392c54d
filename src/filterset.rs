//! FilterSet definition and per-request binding
//!
//! A [`FilterSet`] binds a group of filters to a target index together with
//! sort and pagination configuration. It is declared once, validated at
//! build time, and shared read-only across requests. Each incoming request
//! is bound into a [`BoundFilterSet`], which validates every filter
//! independently and builds the composite search body lazily.

use once_cell::sync::OnceCell;
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

use crate::error::ConfigError;
use crate::filter::{FilterKind, FilterSpec, FilterValue, ParsedInput};
use crate::form::{FieldKind, FilterForm, FormField};
use crate::geocode::Geocoder;
use crate::pagination::{Pagination, DEFAULT_PAGE_SIZE};
use crate::sort::SortConfig;

/// A named collection of filters bound to one document index
///
/// # Examples
///
/// ```
/// use opensearch_filterset::{
/// 	CompareLookup, FilterSet, FilterSpec, SortConfig, TextLookup,
/// };
///
/// let books = FilterSet::builder("books")
/// 	.filter(FilterSpec::text("title", TextLookup::Match))
/// 	.filter(FilterSpec::numeric("price_min", CompareLookup::Gte).field("price"))
/// 	.sort(SortConfig::new().choice("", "Default").choice("price", "Price"))
/// 	.build()
/// 	.unwrap();
///
/// # async fn example(books: FilterSet) {
/// let mut params = std::collections::HashMap::new();
/// params.insert("title".to_string(), "django".to_string());
///
/// let bound = books.bind(params).await;
/// assert!(bound.is_valid());
/// let body = bound.query_body();
/// assert!(body["query"]["bool"]["filter"].is_array());
/// # }
/// ```
pub struct FilterSet {
	index: String,
	filters: Vec<FilterSpec>,
	sort: SortConfig,
	default_page_size: usize,
	geocoder: Option<Arc<dyn Geocoder>>,
}

impl FilterSet {
	pub fn builder(index: impl Into<String>) -> FilterSetBuilder {
		FilterSetBuilder {
			index: index.into(),
			filters: Vec::new(),
			sort: SortConfig::default(),
			default_page_size: DEFAULT_PAGE_SIZE,
			geocoder: None,
		}
	}

	/// Target index name.
	pub fn index(&self) -> &str {
		&self.index
	}

	pub fn filters(&self) -> &[FilterSpec] {
		&self.filters
	}

	pub fn sort_config(&self) -> &SortConfig {
		&self.sort
	}

	/// Validate the parameter map against every declared filter and bind
	/// the result.
	///
	/// Validation never short-circuits: each field succeeds or fails on its
	/// own, and a failed geocoder lookup degrades to a note instead of an
	/// error. The only I/O performed is the postcode resolution for a geo
	/// filter that actually received input.
	pub async fn bind(&self, params: HashMap<String, String>) -> BoundFilterSet<'_> {
		let mut values = HashMap::new();
		let mut errors = HashMap::new();
		let mut notes = Vec::new();

		for spec in &self.filters {
			match spec.parse(&params) {
				Ok(None) => {}
				Ok(Some(ParsedInput::Ready(value))) => {
					values.insert(spec.name().to_string(), value);
				}
				Ok(Some(ParsedInput::PendingGeo {
					postcode,
					distance_km,
				})) => match &self.geocoder {
					Some(geocoder) => match geocoder.resolve(&postcode).await {
						Ok(point) => {
							values.insert(
								spec.name().to_string(),
								FilterValue::Geo { point, distance_km },
							);
						}
						Err(err) => {
							warn!(
								postcode = %postcode,
								error = %err,
								"postcode resolution failed; dropping location filter"
							);
							notes.push(format!("Could not resolve location '{postcode}'"));
						}
					},
					// Unreachable: build() rejects geo filters without a
					// geocoder.
					None => notes.push(format!("Could not resolve location '{postcode}'")),
				},
				Err(err) => {
					errors.insert(err.param().to_string(), err.to_string());
				}
			}
		}

		let (pagination, pagination_errors) =
			Pagination::from_params(&params, self.default_page_size);
		for err in pagination_errors {
			errors.insert(err.param().to_string(), err.to_string());
		}

		BoundFilterSet {
			set: self,
			params,
			values,
			errors,
			notes,
			pagination,
			body: OnceCell::new(),
		}
	}
}

/// Builder for a [`FilterSet`]; `build` is the definition-time fail-hard
/// point.
pub struct FilterSetBuilder {
	index: String,
	filters: Vec<FilterSpec>,
	sort: SortConfig,
	default_page_size: usize,
	geocoder: Option<Arc<dyn Geocoder>>,
}

impl FilterSetBuilder {
	pub fn filter(mut self, spec: FilterSpec) -> Self {
		self.filters.push(spec);
		self
	}

	pub fn sort(mut self, sort: SortConfig) -> Self {
		self.sort = sort;
		self
	}

	pub fn default_page_size(mut self, page_size: usize) -> Self {
		self.default_page_size = page_size;
		self
	}

	pub fn geocoder(mut self, geocoder: Arc<dyn Geocoder>) -> Self {
		self.geocoder = Some(geocoder);
		self
	}

	pub fn build(self) -> Result<FilterSet, ConfigError> {
		let mut seen = std::collections::HashSet::new();
		for spec in &self.filters {
			if !seen.insert(spec.name().to_string()) {
				return Err(ConfigError::DuplicateFilter(spec.name().to_string()));
			}
			if matches!(spec.kind(), FilterKind::GeoDistance { .. }) && self.geocoder.is_none() {
				return Err(ConfigError::MissingGeocoder(spec.name().to_string()));
			}
		}
		self.sort.validate()?;
		Ok(FilterSet {
			index: self.index,
			filters: self.filters,
			sort: self.sort,
			default_page_size: self.default_page_size,
			geocoder: self.geocoder,
		})
	}
}

/// A FilterSet bound to one request's parameters.
///
/// Moves linearly through unvalidated -> validated -> query-built; the body
/// is a pure function of the validated state, cached on first access.
pub struct BoundFilterSet<'a> {
	set: &'a FilterSet,
	params: HashMap<String, String>,
	values: HashMap<String, FilterValue>,
	errors: HashMap<String, String>,
	notes: Vec<String>,
	pagination: Pagination,
	body: OnceCell<Value>,
}

impl BoundFilterSet<'_> {
	/// True when no submitted parameter failed validation. Filters that
	/// received no input do not count against validity.
	pub fn is_valid(&self) -> bool {
		self.errors.is_empty()
	}

	/// Validation errors keyed by request parameter name.
	pub fn errors(&self) -> &HashMap<String, String> {
		&self.errors
	}

	/// Non-fatal notices (unresolvable locations).
	pub fn notes(&self) -> &[String] {
		&self.notes
	}

	/// The validated value a filter received, if any.
	pub fn value(&self, name: &str) -> Option<&FilterValue> {
		self.values.get(name)
	}

	pub fn pagination(&self) -> Pagination {
		self.pagination
	}

	/// The complete OpenSearch request body: filter clauses ANDed under a
	/// `bool` query (or `match_all` when nothing constrains), the sort
	/// clause, and `from`/`size` pagination.
	///
	/// Built on first access and cached; repeated calls return the same
	/// body.
	pub fn query_body(&self) -> &Value {
		self.body.get_or_init(|| self.build_body())
	}

	fn build_body(&self) -> Value {
		let clauses: Vec<Value> = self
			.set
			.filters
			.iter()
			.filter_map(|spec| {
				self.values
					.get(spec.name())
					.and_then(|value| spec.clause(value))
			})
			.collect();

		let query = if clauses.is_empty() {
			json!({ "match_all": {} })
		} else {
			json!({ "bool": { "filter": clauses } })
		};

		let mut body = Map::new();
		body.insert("query".to_string(), query);
		if let Some(sort) = self.sort_clause() {
			body.insert("sort".to_string(), Value::Array(vec![sort]));
		}
		body.insert("from".to_string(), json!(self.pagination.from()));
		body.insert("size".to_string(), json!(self.pagination.page_size));
		Value::Object(body)
	}

	fn sort_clause(&self) -> Option<Value> {
		let key = self
			.params
			.get("sort")
			.map(|value| value.trim())
			.unwrap_or("");
		self.set.sort.clause(key)
	}

	fn raw_value(&self, param: &str) -> Option<String> {
		self.params
			.get(param)
			.map(|value| value.trim().to_string())
			.filter(|value| !value.is_empty())
	}

	fn control_field(&self, name: &str, label: &str, kind: FieldKind) -> FormField {
		FormField {
			name: name.to_string(),
			label: label.to_string(),
			kind,
			value: self.raw_value(name),
			error: self.errors.get(name).cloned(),
		}
	}

	/// The renderable form mirror of this bound set. Available whether or
	/// not validation succeeded.
	pub fn form(&self) -> FilterForm {
		let mut fields = Vec::new();
		for spec in &self.set.filters {
			for (param, label, kind) in spec.form_entries() {
				fields.push(FormField {
					value: self.raw_value(&param),
					error: self.errors.get(&param).cloned(),
					name: param,
					label,
					kind,
				});
			}
		}
		fields.push(self.control_field("sort", "Sort By", FieldKind::Select));
		fields.push(self.control_field("page", "Page", FieldKind::Number));
		fields.push(self.control_field("page_size", "Page Size", FieldKind::Number));

		FilterForm {
			fields,
			sort_choices: self.set.sort.choices().to_vec(),
			notes: self.notes.clone(),
		}
	}
}
