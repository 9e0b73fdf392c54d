//! Postcode geocoding for the geo-distance filter
//!
//! The [`Geocoder`] trait is the seam the geo filter resolves postcodes
//! through; [`PostcodesIoGeocoder`] is the default implementation against the
//! free postcodes.io lookup service. Every call is a single outbound GET with
//! no retry and no caching; failures of any shape collapse to
//! [`GeocodeError`] and the caller degrades to an unfiltered-by-location
//! query.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::error::GeocodeError;

#[cfg(test)]
use mockall::automock;

/// A resolved coordinate pair (WGS84 degrees).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
	pub lat: f64,
	pub lon: f64,
}

/// Resolves a postal code to geographic coordinates.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Geocoder: Send + Sync {
	async fn resolve(&self, postcode: &str) -> Result<GeoPoint, GeocodeError>;
}

const POSTCODES_IO_URL: &str = "https://api.postcodes.io";

/// Geocoder backed by the postcodes.io UK postcode API
///
/// # Examples
///
/// ```no_run
/// use opensearch_filterset::{Geocoder, PostcodesIoGeocoder};
///
/// # async fn example() {
/// let geocoder = PostcodesIoGeocoder::new();
/// let point = geocoder.resolve("SW1A 1AA").await.unwrap();
/// assert!(point.lat > 51.0 && point.lat < 52.0);
/// # }
/// ```
pub struct PostcodesIoGeocoder {
	base_url: String,
	client: Client,
}

#[derive(Deserialize)]
struct PostcodeResponse {
	result: Option<PostcodeResult>,
}

#[derive(Deserialize)]
struct PostcodeResult {
	latitude: Option<f64>,
	longitude: Option<f64>,
}

impl PostcodesIoGeocoder {
	/// Create a geocoder against the public postcodes.io endpoint with a
	/// 30 second request timeout.
	pub fn new() -> Self {
		Self::with_base_url(POSTCODES_IO_URL)
	}

	/// Create a geocoder against a custom base URL (self-hosted instance or
	/// a test server).
	pub fn with_base_url(base_url: impl Into<String>) -> Self {
		let client = Client::builder()
			.timeout(Duration::from_secs(30))
			.build()
			.expect("Failed to create HTTP client");
		Self::with_client(base_url, client)
	}

	/// Create a geocoder with a custom `reqwest` client, e.g. to control
	/// timeouts or proxying.
	pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
		let mut base_url = base_url.into();
		while base_url.ends_with('/') {
			base_url.pop();
		}
		Self { base_url, client }
	}

	/// Lookup URL for a postcode, with the postcode percent-encoded as a
	/// single path segment.
	fn lookup_url(&self, postcode: &str) -> Result<Url, GeocodeError> {
		let mut url = Url::parse(&self.base_url)
			.map_err(|_| GeocodeError::InvalidBaseUrl(self.base_url.clone()))?;
		url.path_segments_mut()
			.map_err(|_| GeocodeError::InvalidBaseUrl(self.base_url.clone()))?
			.pop_if_empty()
			.extend(["postcodes", postcode.trim()]);
		Ok(url)
	}
}

impl Default for PostcodesIoGeocoder {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl Geocoder for PostcodesIoGeocoder {
	async fn resolve(&self, postcode: &str) -> Result<GeoPoint, GeocodeError> {
		let url = self.lookup_url(postcode)?;
		debug!(postcode, "resolving postcode");

		let response = self.client.get(url).send().await?;
		if !response.status().is_success() {
			return Err(GeocodeError::NotFound(postcode.to_string()));
		}

		let body: PostcodeResponse = response.json().await?;
		let result = body
			.result
			.ok_or_else(|| GeocodeError::NotFound(postcode.to_string()))?;
		match (result.latitude, result.longitude) {
			(Some(lat), Some(lon)) => Ok(GeoPoint { lat, lon }),
			_ => Err(GeocodeError::NotFound(postcode.to_string())),
		}
	}
}
