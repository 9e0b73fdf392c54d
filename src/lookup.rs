//! Lookup operators and distance units for filter declarations.
//!
//! Each filter family has its own closed operator enumeration, matched
//! exhaustively when clauses are built. Adding an operator means adding a
//! variant here, not parsing a lookup string at runtime.

/// Comparison operator for text filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextLookup {
	/// Full-text `match` query (analyzed)
	#[default]
	Match,
	/// Exact `term` query (not analyzed)
	Term,
	/// `wildcard` query with `*`/`?` patterns
	Wildcard,
}

/// Comparison operator for numeric and date filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompareLookup {
	/// Exact equality (`term` query)
	#[default]
	Eq,
	Gt,
	Gte,
	Lt,
	Lte,
}

impl CompareLookup {
	/// The `range` clause bound this operator maps to, or `None` for equality.
	pub(crate) fn range_bound(self) -> Option<&'static str> {
		match self {
			CompareLookup::Eq => None,
			CompareLookup::Gt => Some("gt"),
			CompareLookup::Gte => Some("gte"),
			CompareLookup::Lt => Some("lt"),
			CompareLookup::Lte => Some("lte"),
		}
	}
}

/// Unit for user-supplied search radii
///
/// # Examples
///
/// ```
/// use opensearch_filterset::DistanceUnit;
///
/// assert!((DistanceUnit::Miles.to_kilometers(5.0) - 8.0467).abs() < 1e-9);
/// assert_eq!(DistanceUnit::Kilometers.to_kilometers(3.0), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceUnit {
	Kilometers,
	Meters,
	/// Statute miles; the default for user-facing radius input
	#[default]
	Miles,
}

impl DistanceUnit {
	/// Convert a distance in this unit to kilometers, the unit the backend
	/// clause is emitted in.
	pub fn to_kilometers(self, distance: f64) -> f64 {
		match self {
			DistanceUnit::Kilometers => distance,
			DistanceUnit::Meters => distance / 1000.0,
			DistanceUnit::Miles => distance * 1.60934,
		}
	}
}
