//! Sort-key translation
//!
//! A FilterSet declares its sortable keys as `(value, display)` choices plus
//! an optional map of nested entries. A submitted `sort` key translates to
//! either a direct field sort or a nested-path sort with an aggregation
//! mode; a leading `-` flips the order. Unrecognized keys fall back to the
//! first declared choice, conventionally `""` for no explicit sort.

use serde_json::{json, Map, Value};
use std::collections::HashMap;

use crate::error::ConfigError;
use crate::filter::keyed;

/// Aggregation mode for sorting on a field inside a repeated sub-object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
	Max,
	Min,
	#[default]
	Avg,
	Sum,
	Median,
}

impl SortMode {
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			SortMode::Max => "max",
			SortMode::Min => "min",
			SortMode::Avg => "avg",
			SortMode::Sum => "sum",
			SortMode::Median => "median",
		}
	}
}

/// A sort key backed by a field nested under a repeated sub-object
///
/// # Examples
///
/// ```
/// use opensearch_filterset::{NestedSortField, SortMode};
///
/// let entry = NestedSortField::new("departments.employee_count", "departments")
/// 	.mode(SortMode::Max);
/// assert_eq!(entry.field, "departments.employee_count");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NestedSortField {
	/// Full document path of the sorted field
	pub field: String,
	/// The nested object path the field lives under
	pub nested_path: String,
	/// Aggregation across the repeated objects; defaults to `avg`
	pub mode: SortMode,
}

impl NestedSortField {
	pub fn new(field: impl Into<String>, nested_path: impl Into<String>) -> Self {
		Self {
			field: field.into(),
			nested_path: nested_path.into(),
			mode: SortMode::default(),
		}
	}

	pub fn mode(mut self, mode: SortMode) -> Self {
		self.mode = mode;
		self
	}
}

/// Declared sort choices and nested sort entries for a FilterSet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortConfig {
	choices: Vec<(String, String)>,
	nested: HashMap<String, NestedSortField>,
}

impl SortConfig {
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a `(value, display)` sort choice. The first declared choice is
	/// the default, applied when the submitted key is empty or not among
	/// the choices; by convention it is `("", "Default")`.
	pub fn choice(mut self, value: impl Into<String>, display: impl Into<String>) -> Self {
		self.choices.push((value.into(), display.into()));
		self
	}

	/// Register a nested entry under a sort key.
	pub fn nested(mut self, key: impl Into<String>, entry: NestedSortField) -> Self {
		self.nested.insert(key.into(), entry);
		self
	}

	pub fn choices(&self) -> &[(String, String)] {
		&self.choices
	}

	/// Definition-time invariants: every nested entry needs a non-empty
	/// path, and its field must actually live under that path.
	pub(crate) fn validate(&self) -> Result<(), ConfigError> {
		for (key, entry) in &self.nested {
			if entry.nested_path.is_empty() {
				return Err(ConfigError::MissingNestedPath(key.clone()));
			}
			if !entry.field.starts_with(&format!("{}.", entry.nested_path)) {
				return Err(ConfigError::FieldOutsideNestedPath {
					field: entry.field.clone(),
					path: entry.nested_path.clone(),
				});
			}
		}
		Ok(())
	}

	/// Translate a submitted sort key into a sort clause, or `None` for the
	/// default ordering.
	///
	/// With declared choices, the choice values are the allowlist: a key
	/// outside them (nested or not) is replaced by the first declared
	/// choice, as is an empty submission.
	pub(crate) fn clause(&self, sort_key: &str) -> Option<Value> {
		if let Some((default, _)) = self.choices.first() {
			if !self.choices.iter().any(|(value, _)| value == sort_key) {
				return self.translate(default);
			}
		}
		self.translate(sort_key)
	}

	fn translate(&self, sort_key: &str) -> Option<Value> {
		if sort_key.is_empty() {
			return None;
		}
		let (key, order) = match sort_key.strip_prefix('-') {
			Some(rest) => (rest, "desc"),
			None => (sort_key, "asc"),
		};

		if let Some(entry) = self.nested.get(key) {
			let mut spec = Map::new();
			spec.insert("order".to_string(), json!(order));
			spec.insert("mode".to_string(), json!(entry.mode.as_str()));
			spec.insert("nested".to_string(), json!({ "path": entry.nested_path }));
			return Some(keyed(&entry.field, Value::Object(spec)));
		}

		if order == "desc" {
			Some(keyed(key, json!({ "order": "desc" })))
		} else {
			Some(Value::String(key.to_string()))
		}
	}
}
