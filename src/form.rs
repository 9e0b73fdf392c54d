//! Renderable form mirror of a bound FilterSet
//!
//! A [`FilterForm`] pairs every declared filter parameter with its label,
//! submitted value, and validation error, plus the sort and pagination
//! controls. It is a plain data structure: rendering it into markup is the
//! host application's job, so the snapshot stays decoupled from any
//! templating engine and remains available even when validation failed.

use serde::Serialize;

/// Widget hint for a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
	Text,
	Number,
	Date,
	Checkbox,
	Select,
}

/// One renderable field: label, submitted value, and validation error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormField {
	/// Request parameter name (also the HTML input name)
	pub name: String,
	pub label: String,
	pub kind: FieldKind,
	/// The raw submitted value, if any
	pub value: Option<String>,
	/// Validation error message, if the submitted value was rejected
	pub error: Option<String>,
}

/// Form snapshot for a bound FilterSet
///
/// # Examples
///
/// ```
/// use opensearch_filterset::{FilterForm, FormField, FieldKind};
///
/// let form = FilterForm {
/// 	fields: vec![FormField {
/// 		name: "title".to_string(),
/// 		label: "Title".to_string(),
/// 		kind: FieldKind::Text,
/// 		value: Some("django".to_string()),
/// 		error: None,
/// 	}],
/// 	sort_choices: vec![("".to_string(), "Default".to_string())],
/// 	notes: vec![],
/// };
///
/// assert_eq!(form.field("title").unwrap().label, "Title");
/// assert!(!form.has_errors());
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct FilterForm {
	pub fields: Vec<FormField>,
	/// Declared sort choices as `(value, display)` pairs
	pub sort_choices: Vec<(String, String)>,
	/// Non-fatal notices, e.g. an unresolvable location
	pub notes: Vec<String>,
}

impl FilterForm {
	/// Look up a field by parameter name.
	pub fn field(&self, name: &str) -> Option<&FormField> {
		self.fields.iter().find(|field| field.name == name)
	}

	/// True if any field carries a validation error.
	pub fn has_errors(&self) -> bool {
		self.fields.iter().any(|field| field.error.is_some())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn field(name: &str, error: Option<&str>) -> FormField {
		FormField {
			name: name.to_string(),
			label: name.to_string(),
			kind: FieldKind::Text,
			value: None,
			error: error.map(str::to_string),
		}
	}

	#[test]
	fn test_field_lookup() {
		let form = FilterForm {
			fields: vec![field("title", None), field("author", None)],
			..Default::default()
		};
		assert!(form.field("author").is_some());
		assert!(form.field("missing").is_none());
	}

	#[test]
	fn test_has_errors() {
		let clean = FilterForm {
			fields: vec![field("title", None)],
			..Default::default()
		};
		assert!(!clean.has_errors());

		let invalid = FilterForm {
			fields: vec![field("title", None), field("price", Some("not a number"))],
			..Default::default()
		};
		assert!(invalid.has_errors());
	}

	#[test]
	fn test_serializes_to_json() {
		let form = FilterForm {
			fields: vec![field("title", None)],
			sort_choices: vec![("".to_string(), "Default".to_string())],
			notes: vec![],
		};
		let value = serde_json::to_value(&form).unwrap();
		assert_eq!(value["fields"][0]["name"], "title");
		assert_eq!(value["fields"][0]["kind"], "text");
	}
}
