//! Filter declarations and their translation to OpenSearch clauses
//!
//! A [`FilterSpec`] is the immutable declaration of one queryable attribute:
//! a request parameter name, a target document field path, a display label,
//! and a [`FilterKind`] variant carrying the lookup operator and any
//! variant-specific extras. Validation coerces raw parameter strings into a
//! typed [`FilterValue`]; clause emission turns a validated value into a
//! `serde_json::Value` fragment of the OpenSearch query DSL.
//!
//! All variants are pure functions of their input except the geo-distance
//! filter, whose postcode resolution happens in the FilterSet binding step
//! through the [`Geocoder`](crate::Geocoder) seam.

use chrono::NaiveDate;
use serde_json::{json, Map, Value};
use std::collections::HashMap;

use crate::error::{FilterError, FilterResult};
use crate::form::FieldKind;
use crate::geocode::GeoPoint;
use crate::lookup::{CompareLookup, DistanceUnit, TextLookup};

/// Build `{outer: value}`.
pub(crate) fn keyed(outer: &str, value: Value) -> Value {
	let mut map = Map::new();
	map.insert(outer.to_string(), value);
	Value::Object(map)
}

/// Build `{outer: {field: value}}`, the shape of most leaf clauses.
fn wrap(outer: &str, field: &str, value: Value) -> Value {
	keyed(outer, keyed(field, value))
}

/// Humanize a parameter name into a default label
/// ("publication_date" -> "Publication Date").
pub(crate) fn humanize(name: &str) -> String {
	name.split('_')
		.filter(|part| !part.is_empty())
		.map(|part| {
			let mut chars = part.chars();
			match chars.next() {
				Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
				None => String::new(),
			}
		})
		.collect::<Vec<_>>()
		.join(" ")
}

/// Pull a parameter, treating empty and whitespace-only values as absent.
fn present<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
	params
		.get(key)
		.map(|value| value.trim())
		.filter(|value| !value.is_empty())
}

const TRUTHY: [&str; 4] = ["true", "1", "yes", "on"];
const FALSY: [&str; 4] = ["false", "0", "no", "off"];

/// The variant family of supported filters.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterKind {
	Text {
		lookup: TextLookup,
		/// Lowercase the submitted value before matching
		lowercase: bool,
	},
	Numeric {
		lookup: CompareLookup,
	},
	/// Min/max endpoints under `{name}_min_value` / `{name}_max_value`
	Range {
		min_label: Option<String>,
		max_label: Option<String>,
	},
	Date {
		lookup: CompareLookup,
	},
	Boolean,
	/// Postcode plus radius under `{name}_postcode` / `{name}_distance`
	GeoDistance {
		unit: DistanceUnit,
		postcode_label: Option<String>,
		distance_label: Option<String>,
	},
}

/// A validated, typed filter value.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
	Text(String),
	Number(f64),
	Range { min: Option<f64>, max: Option<f64> },
	Date(NaiveDate),
	Bool(bool),
	Geo { point: GeoPoint, distance_km: f64 },
}

/// A geo filter's parsed input, waiting on postcode resolution.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ParsedInput {
	Ready(FilterValue),
	PendingGeo { postcode: String, distance_km: f64 },
}

/// Immutable declaration of one queryable attribute
///
/// # Examples
///
/// ```
/// use opensearch_filterset::{CompareLookup, FilterSpec, TextLookup};
///
/// let title = FilterSpec::text("title", TextLookup::Match);
/// assert_eq!(title.label_text(), "Title");
/// assert_eq!(title.field_path(), "title");
///
/// let min_price = FilterSpec::numeric("price_min", CompareLookup::Gte)
/// 	.field("price")
/// 	.label("Min Price");
/// assert_eq!(min_price.field_path(), "price");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
	name: String,
	field: String,
	label: Option<String>,
	kind: FilterKind,
}

impl FilterSpec {
	fn new(name: &str, kind: FilterKind) -> Self {
		Self {
			name: name.to_string(),
			field: name.to_string(),
			label: None,
			kind,
		}
	}

	/// Text filter with the given lookup.
	pub fn text(name: &str, lookup: TextLookup) -> Self {
		Self::new(
			name,
			FilterKind::Text {
				lookup,
				lowercase: false,
			},
		)
	}

	/// Numeric filter with the given comparison.
	pub fn numeric(name: &str, lookup: CompareLookup) -> Self {
		Self::new(name, FilterKind::Numeric { lookup })
	}

	/// Two-endpoint numeric range filter.
	pub fn range(name: &str) -> Self {
		Self::new(
			name,
			FilterKind::Range {
				min_label: None,
				max_label: None,
			},
		)
	}

	/// ISO date filter with the given comparison.
	pub fn date(name: &str, lookup: CompareLookup) -> Self {
		Self::new(name, FilterKind::Date { lookup })
	}

	/// Boolean filter over a recognized truthy/falsy token set.
	pub fn boolean(name: &str) -> Self {
		Self::new(name, FilterKind::Boolean)
	}

	/// Geo-distance filter: postcode plus radius, resolved via the
	/// FilterSet's geocoder. Radii are submitted in `unit` and emitted in
	/// kilometers.
	pub fn geo_distance(name: &str, unit: DistanceUnit) -> Self {
		Self::new(
			name,
			FilterKind::GeoDistance {
				unit,
				postcode_label: None,
				distance_label: None,
			},
		)
	}

	/// Override the target document field path (defaults to the parameter
	/// name).
	pub fn field(mut self, field: impl Into<String>) -> Self {
		self.field = field.into();
		self
	}

	/// Override the display label (defaults to the humanized parameter
	/// name).
	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Lowercase submitted text before matching. No effect on non-text
	/// filters.
	pub fn lowercase(mut self) -> Self {
		if let FilterKind::Text { lowercase, .. } = &mut self.kind {
			*lowercase = true;
		}
		self
	}

	/// Override the minimum-endpoint label of a range filter.
	pub fn min_label(mut self, label: impl Into<String>) -> Self {
		if let FilterKind::Range { min_label, .. } = &mut self.kind {
			*min_label = Some(label.into());
		}
		self
	}

	/// Override the maximum-endpoint label of a range filter.
	pub fn max_label(mut self, label: impl Into<String>) -> Self {
		if let FilterKind::Range { max_label, .. } = &mut self.kind {
			*max_label = Some(label.into());
		}
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn field_path(&self) -> &str {
		&self.field
	}

	pub fn label_text(&self) -> String {
		self.label.clone().unwrap_or_else(|| humanize(&self.name))
	}

	pub fn kind(&self) -> &FilterKind {
		&self.kind
	}

	/// The range filter's minimum-endpoint parameter.
	pub fn min_param(&self) -> String {
		format!("{}_min_value", self.name)
	}

	/// The range filter's maximum-endpoint parameter.
	pub fn max_param(&self) -> String {
		format!("{}_max_value", self.name)
	}

	/// The geo filter's postcode parameter.
	pub fn postcode_param(&self) -> String {
		format!("{}_postcode", self.name)
	}

	/// The geo filter's radius parameter.
	pub fn distance_param(&self) -> String {
		format!("{}_distance", self.name)
	}

	fn invalid(&self, param: impl Into<String>, reason: impl Into<String>) -> FilterError {
		FilterError::InvalidValue {
			param: param.into(),
			reason: reason.into(),
		}
	}

	fn parse_number(&self, param: &str, raw: &str) -> FilterResult<f64> {
		raw.parse::<f64>()
			.map_err(|_| self.invalid(param, format!("'{raw}' is not a number")))
	}

	/// Validate this filter against the parameter map.
	///
	/// `Ok(None)` means the filter received no input and contributes
	/// nothing; an error marks only this field invalid.
	pub(crate) fn parse(
		&self,
		params: &HashMap<String, String>,
	) -> FilterResult<Option<ParsedInput>> {
		match &self.kind {
			FilterKind::Text { lowercase, .. } => {
				let Some(raw) = present(params, &self.name) else {
					return Ok(None);
				};
				let value = if *lowercase {
					raw.to_lowercase()
				} else {
					raw.to_string()
				};
				Ok(Some(ParsedInput::Ready(FilterValue::Text(value))))
			}
			FilterKind::Numeric { .. } => {
				let Some(raw) = present(params, &self.name) else {
					return Ok(None);
				};
				let number = self.parse_number(&self.name, raw)?;
				Ok(Some(ParsedInput::Ready(FilterValue::Number(number))))
			}
			FilterKind::Range { .. } => {
				let min = match present(params, &self.min_param()) {
					Some(raw) => Some(self.parse_number(&self.min_param(), raw)?),
					None => None,
				};
				let max = match present(params, &self.max_param()) {
					Some(raw) => Some(self.parse_number(&self.max_param(), raw)?),
					None => None,
				};
				if min.is_none() && max.is_none() {
					return Ok(None);
				}
				Ok(Some(ParsedInput::Ready(FilterValue::Range { min, max })))
			}
			FilterKind::Date { .. } => {
				let Some(raw) = present(params, &self.name) else {
					return Ok(None);
				};
				let date = raw.parse::<NaiveDate>().map_err(|_| {
					self.invalid(self.name.as_str(), format!("'{raw}' is not an ISO date"))
				})?;
				Ok(Some(ParsedInput::Ready(FilterValue::Date(date))))
			}
			FilterKind::Boolean => {
				let Some(raw) = present(params, &self.name) else {
					return Ok(None);
				};
				let token = raw.to_lowercase();
				if TRUTHY.contains(&token.as_str()) {
					Ok(Some(ParsedInput::Ready(FilterValue::Bool(true))))
				} else if FALSY.contains(&token.as_str()) {
					Ok(Some(ParsedInput::Ready(FilterValue::Bool(false))))
				} else {
					Err(self.invalid(self.name.as_str(), format!("'{raw}' is not a boolean")))
				}
			}
			FilterKind::GeoDistance { unit, .. } => {
				let postcode = present(params, &self.postcode_param());
				let distance = present(params, &self.distance_param());
				match (postcode, distance) {
					(None, None) => Ok(None),
					(Some(postcode), Some(raw)) => {
						let distance = self.parse_number(&self.distance_param(), raw)?;
						if distance <= 0.0 {
							return Err(self.invalid(
								self.distance_param(),
								"distance must be positive",
							));
						}
						Ok(Some(ParsedInput::PendingGeo {
							postcode: postcode.to_string(),
							distance_km: unit.to_kilometers(distance),
						}))
					}
					(Some(_), None) => Err(self.invalid(
						self.distance_param(),
						"a distance is required with a postcode",
					)),
					(None, Some(_)) => Err(self.invalid(
						self.postcode_param(),
						"a postcode is required with a distance",
					)),
				}
			}
		}
	}

	/// Emit the OpenSearch clause for a validated value, or `None` when the
	/// value constrains nothing.
	pub(crate) fn clause(&self, value: &FilterValue) -> Option<Value> {
		match (&self.kind, value) {
			(FilterKind::Text { lookup, .. }, FilterValue::Text(text)) => {
				let outer = match lookup {
					TextLookup::Match => "match",
					TextLookup::Term => "term",
					TextLookup::Wildcard => "wildcard",
				};
				Some(wrap(outer, &self.field, json!(text)))
			}
			(FilterKind::Numeric { lookup }, FilterValue::Number(number)) => {
				Some(match lookup.range_bound() {
					None => wrap("term", &self.field, json!(number)),
					Some(bound) => wrap("range", &self.field, keyed(bound, json!(number))),
				})
			}
			(FilterKind::Range { .. }, FilterValue::Range { min, max }) => {
				let mut bounds = Map::new();
				if let Some(min) = min {
					bounds.insert("gte".to_string(), json!(min));
				}
				if let Some(max) = max {
					bounds.insert("lte".to_string(), json!(max));
				}
				if bounds.is_empty() {
					return None;
				}
				Some(wrap("range", &self.field, Value::Object(bounds)))
			}
			(FilterKind::Date { lookup }, FilterValue::Date(date)) => {
				let formatted = date.format("%Y-%m-%d").to_string();
				Some(match lookup.range_bound() {
					None => wrap("term", &self.field, json!(formatted)),
					Some(bound) => wrap("range", &self.field, keyed(bound, json!(formatted))),
				})
			}
			(FilterKind::Boolean, FilterValue::Bool(flag)) => {
				Some(wrap("term", &self.field, json!(flag)))
			}
			(FilterKind::GeoDistance { .. }, FilterValue::Geo { point, distance_km }) => {
				let mut geo = Map::new();
				geo.insert("distance".to_string(), json!(format!("{distance_km}km")));
				geo.insert(
					self.field.clone(),
					json!({ "lat": point.lat, "lon": point.lon }),
				);
				Some(keyed("geo_distance", Value::Object(geo)))
			}
			// A value can only be produced by this filter's own parse, so a
			// kind/value mismatch cannot occur.
			_ => None,
		}
	}

	/// The form fields this filter contributes: `(param, label, kind)`.
	pub(crate) fn form_entries(&self) -> Vec<(String, String, FieldKind)> {
		let label = self.label_text();
		match &self.kind {
			FilterKind::Text { .. } => vec![(self.name.clone(), label, FieldKind::Text)],
			FilterKind::Numeric { .. } => vec![(self.name.clone(), label, FieldKind::Number)],
			FilterKind::Range {
				min_label,
				max_label,
			} => vec![
				(
					self.min_param(),
					min_label.clone().unwrap_or_else(|| format!("Min {label}")),
					FieldKind::Number,
				),
				(
					self.max_param(),
					max_label.clone().unwrap_or_else(|| format!("Max {label}")),
					FieldKind::Number,
				),
			],
			FilterKind::Date { .. } => vec![(self.name.clone(), label, FieldKind::Date)],
			FilterKind::Boolean => vec![(self.name.clone(), label, FieldKind::Checkbox)],
			FilterKind::GeoDistance {
				postcode_label,
				distance_label,
				..
			} => vec![
				(
					self.postcode_param(),
					postcode_label
						.clone()
						.unwrap_or_else(|| format!("{label} Postcode")),
					FieldKind::Text,
				),
				(
					self.distance_param(),
					distance_label
						.clone()
						.unwrap_or_else(|| format!("{label} Distance")),
					FieldKind::Number,
				),
			],
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	#[test]
	fn test_humanize() {
		assert_eq!(humanize("title"), "Title");
		assert_eq!(humanize("publication_date"), "Publication Date");
		assert_eq!(humanize("in_stock"), "In Stock");
	}

	#[test]
	fn test_default_label_and_field() {
		let spec = FilterSpec::text("publication_date", TextLookup::Match);
		assert_eq!(spec.label_text(), "Publication Date");
		assert_eq!(spec.field_path(), "publication_date");
	}

	#[test]
	fn test_custom_label_and_field() {
		let spec = FilterSpec::numeric("price_min", CompareLookup::Gte)
			.field("price")
			.label("Minimum Price");
		assert_eq!(spec.label_text(), "Minimum Price");
		assert_eq!(spec.field_path(), "price");
	}

	#[test]
	fn test_text_match_clause() {
		let spec = FilterSpec::text("title", TextLookup::Match);
		let parsed = spec.parse(&params(&[("title", "Django")])).unwrap().unwrap();
		let ParsedInput::Ready(value) = parsed else {
			panic!("expected ready value");
		};
		assert_eq!(
			spec.clause(&value).unwrap(),
			json!({ "match": { "title": "Django" } })
		);
	}

	#[test]
	fn test_text_term_and_wildcard_clauses() {
		let term = FilterSpec::text("isbn", TextLookup::Term);
		let ParsedInput::Ready(value) = term
			.parse(&params(&[("isbn", "9781735467207")]))
			.unwrap()
			.unwrap()
		else {
			panic!("expected ready value");
		};
		assert_eq!(
			term.clause(&value).unwrap(),
			json!({ "term": { "isbn": "9781735467207" } })
		);

		let wildcard = FilterSpec::text("title", TextLookup::Wildcard);
		let ParsedInput::Ready(value) = wildcard
			.parse(&params(&[("title", "djan*")]))
			.unwrap()
			.unwrap()
		else {
			panic!("expected ready value");
		};
		assert_eq!(
			wildcard.clause(&value).unwrap(),
			json!({ "wildcard": { "title": "djan*" } })
		);
	}

	#[test]
	fn test_text_lowercase_normalization() {
		let spec = FilterSpec::text("author", TextLookup::Term).lowercase();
		let ParsedInput::Ready(value) = spec
			.parse(&params(&[("author", "Eric Matthes")]))
			.unwrap()
			.unwrap()
		else {
			panic!("expected ready value");
		};
		assert_eq!(value, FilterValue::Text("eric matthes".to_string()));
	}

	#[test]
	fn test_numeric_eq_and_comparison_clauses() {
		let eq = FilterSpec::numeric("price", CompareLookup::Eq);
		let ParsedInput::Ready(value) =
			eq.parse(&params(&[("price", "39.99")])).unwrap().unwrap()
		else {
			panic!("expected ready value");
		};
		assert_eq!(
			eq.clause(&value).unwrap(),
			json!({ "term": { "price": 39.99 } })
		);

		let gte = FilterSpec::numeric("price_min", CompareLookup::Gte).field("price");
		let ParsedInput::Ready(value) = gte
			.parse(&params(&[("price_min", "40")]))
			.unwrap()
			.unwrap()
		else {
			panic!("expected ready value");
		};
		assert_eq!(
			gte.clause(&value).unwrap(),
			json!({ "range": { "price": { "gte": 40.0 } } })
		);
	}

	#[test]
	fn test_numeric_invalid_value() {
		let spec = FilterSpec::numeric("price", CompareLookup::Eq);
		let err = spec.parse(&params(&[("price", "abc")])).unwrap_err();
		assert_eq!(err.param(), "price");
	}

	#[rstest]
	#[case("true", true)]
	#[case("1", true)]
	#[case("Yes", true)]
	#[case("on", true)]
	#[case("false", false)]
	#[case("0", false)]
	#[case("No", false)]
	#[case("off", false)]
	fn test_boolean_tokens(#[case] raw: &str, #[case] expected: bool) {
		let spec = FilterSpec::boolean("in_stock");
		let ParsedInput::Ready(value) =
			spec.parse(&params(&[("in_stock", raw)])).unwrap().unwrap()
		else {
			panic!("expected ready value");
		};
		assert_eq!(value, FilterValue::Bool(expected));
	}

	#[test]
	fn test_boolean_unrecognized_token() {
		let spec = FilterSpec::boolean("in_stock");
		assert!(spec.parse(&params(&[("in_stock", "maybe")])).is_err());
	}

	#[test]
	fn test_date_parse_and_clause() {
		let spec = FilterSpec::date("publication_date", CompareLookup::Eq);
		let ParsedInput::Ready(value) = spec
			.parse(&params(&[("publication_date", "2022-01-01")]))
			.unwrap()
			.unwrap()
		else {
			panic!("expected ready value");
		};
		assert_eq!(
			spec.clause(&value).unwrap(),
			json!({ "term": { "publication_date": "2022-01-01" } })
		);

		assert!(spec
			.parse(&params(&[("publication_date", "01/02/2022")]))
			.is_err());
	}

	#[test]
	fn test_date_comparison_clause() {
		let spec = FilterSpec::date("published_after", CompareLookup::Gt).field("publication_date");
		let ParsedInput::Ready(value) = spec
			.parse(&params(&[("published_after", "2021-06-15")]))
			.unwrap()
			.unwrap()
		else {
			panic!("expected ready value");
		};
		assert_eq!(
			spec.clause(&value).unwrap(),
			json!({ "range": { "publication_date": { "gt": "2021-06-15" } } })
		);
	}

	#[test]
	fn test_range_one_sided_and_two_sided() {
		let spec = FilterSpec::range("price_range").field("price");

		let ParsedInput::Ready(value) = spec
			.parse(&params(&[("price_range_min_value", "40")]))
			.unwrap()
			.unwrap()
		else {
			panic!("expected ready value");
		};
		assert_eq!(
			spec.clause(&value).unwrap(),
			json!({ "range": { "price": { "gte": 40.0 } } })
		);

		let ParsedInput::Ready(value) = spec
			.parse(&params(&[
				("price_range_min_value", "30"),
				("price_range_max_value", "50"),
			]))
			.unwrap()
			.unwrap()
		else {
			panic!("expected ready value");
		};
		assert_eq!(
			spec.clause(&value).unwrap(),
			json!({ "range": { "price": { "gte": 30.0, "lte": 50.0 } } })
		);
	}

	#[test]
	fn test_range_empty_strings_are_absent() {
		let spec = FilterSpec::range("price_range").field("price");
		let result = spec
			.parse(&params(&[
				("price_range_min_value", ""),
				("price_range_max_value", ""),
			]))
			.unwrap();
		assert!(result.is_none());
	}

	#[test]
	fn test_range_preserves_bounds_without_reordering() {
		// min > max is passed through untouched; the backend decides what
		// an inverted range matches.
		let spec = FilterSpec::range("price_range").field("price");
		let ParsedInput::Ready(value) = spec
			.parse(&params(&[
				("price_range_min_value", "50"),
				("price_range_max_value", "30"),
			]))
			.unwrap()
			.unwrap()
		else {
			panic!("expected ready value");
		};
		assert_eq!(
			spec.clause(&value).unwrap(),
			json!({ "range": { "price": { "gte": 50.0, "lte": 30.0 } } })
		);
	}

	#[test]
	fn test_geo_parse_converts_miles() {
		let spec = FilterSpec::geo_distance("location", DistanceUnit::Miles);
		let parsed = spec
			.parse(&params(&[
				("location_postcode", "SW1A 1AA"),
				("location_distance", "5"),
			]))
			.unwrap()
			.unwrap();
		let ParsedInput::PendingGeo {
			postcode,
			distance_km,
		} = parsed
		else {
			panic!("expected pending geo input");
		};
		assert_eq!(postcode, "SW1A 1AA");
		assert!((distance_km - 8.0467).abs() < 1e-9);
	}

	#[test]
	fn test_geo_requires_both_subkeys() {
		let spec = FilterSpec::geo_distance("location", DistanceUnit::Miles);
		let err = spec
			.parse(&params(&[("location_postcode", "SW1A 1AA")]))
			.unwrap_err();
		assert_eq!(err.param(), "location_distance");

		let err = spec
			.parse(&params(&[("location_distance", "5")]))
			.unwrap_err();
		assert_eq!(err.param(), "location_postcode");
	}

	#[test]
	fn test_geo_rejects_nonpositive_distance() {
		let spec = FilterSpec::geo_distance("location", DistanceUnit::Miles);
		assert!(spec
			.parse(&params(&[
				("location_postcode", "SW1A 1AA"),
				("location_distance", "-2"),
			]))
			.is_err());
	}

	#[test]
	fn test_geo_clause_shape() {
		let spec = FilterSpec::geo_distance("location", DistanceUnit::Kilometers);
		let value = FilterValue::Geo {
			point: GeoPoint {
				lat: 51.501009,
				lon: -0.141588,
			},
			distance_km: 5.0,
		};
		assert_eq!(
			spec.clause(&value).unwrap(),
			json!({
				"geo_distance": {
					"distance": "5km",
					"location": { "lat": 51.501009, "lon": -0.141588 }
				}
			})
		);
	}

	#[test]
	fn test_absent_parameter_contributes_nothing() {
		let spec = FilterSpec::text("title", TextLookup::Match);
		assert!(spec.parse(&params(&[])).unwrap().is_none());
		assert!(spec.parse(&params(&[("title", "   ")])).unwrap().is_none());
	}

	#[test]
	fn test_form_entries_for_range_and_geo() {
		let range = FilterSpec::range("price_range").field("price");
		let entries = range.form_entries();
		assert_eq!(
			entries[0],
			(
				"price_range_min_value".to_string(),
				"Min Price Range".to_string(),
				FieldKind::Number
			)
		);
		assert_eq!(entries[1].0, "price_range_max_value");

		let geo = FilterSpec::geo_distance("location", DistanceUnit::Miles);
		let entries = geo.form_entries();
		assert_eq!(entries[0].0, "location_postcode");
		assert_eq!(entries[0].2, FieldKind::Text);
		assert_eq!(entries[1].0, "location_distance");
		assert_eq!(entries[1].2, FieldKind::Number);
	}
}
