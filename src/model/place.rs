//! Places, addresses, and place lookup responses.

// self
use crate::{
	_prelude::*,
	model::{Coordinate, MapRegion, PoiCategory},
};

/// A place returned by geocoding, search, directions, or place lookups.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
	/// Opaque place identifier.
	pub id: Option<String>,
	/// Alternate identifiers for the same place.
	pub alternate_ids: Option<Vec<String>>,
	/// Localized place name.
	pub name: Option<String>,
	/// Country name.
	pub country: Option<String>,
	/// ISO 3166 country code.
	pub country_code: Option<String>,
	/// Region suitable for displaying the place on a map.
	pub display_map_region: Option<MapRegion>,
	/// Address lines ready for display.
	pub formatted_address_lines: Option<Vec<String>>,
	/// Location of the place.
	pub coordinate: Option<Location>,
	/// Address broken into components.
	pub structured_address: Option<StructuredAddress>,
	/// Category of the place when it is a point of interest.
	pub poi_category: Option<PoiCategory>,
}

/// A latitude/longitude pair as reported by the API; either half may be missing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
	/// Latitude in degrees.
	pub latitude: Option<f64>,
	/// Longitude in degrees.
	pub longitude: Option<f64>,
}
impl Location {
	/// Returns the coordinate when both halves are present.
	pub fn coordinate(&self) -> Option<Coordinate> {
		Some(Coordinate::new(self.latitude?, self.longitude?))
	}
}

/// Address components of a place.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredAddress {
	/// State or province.
	pub administrative_area: Option<String>,
	/// Short code of the administrative area.
	pub administrative_area_code: Option<String>,
	/// Notable areas the address belongs to.
	pub areas_of_interest: Option<Vec<String>>,
	/// Neighborhoods or districts.
	pub dependent_localities: Option<Vec<String>>,
	/// Street number and name.
	pub full_thoroughfare: Option<String>,
	/// City or town.
	pub locality: Option<String>,
	/// Postal code.
	pub post_code: Option<String>,
	/// District within the locality.
	pub sub_locality: Option<String>,
	/// Street number.
	pub sub_thoroughfare: Option<String>,
	/// Street name.
	pub thoroughfare: Option<String>,
}

/// Response of the batch place lookup.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlacesResponse {
	/// Identifiers that could not be resolved.
	#[serde(default)]
	pub errors: Vec<PlaceLookupError>,
	/// Resolved places.
	#[serde(default)]
	pub places: Vec<Place>,
}

/// A failed identifier in a batch lookup.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceLookupError {
	/// Identifier that failed.
	pub id: Option<String>,
	/// Reason code, such as `FAILED_INVALID_ID` or `FAILED_NOT_FOUND`.
	pub error_code: Option<String>,
}

/// Response of the alternate identifier lookup.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternateIdsResponse {
	/// Identifiers that could not be resolved.
	#[serde(default)]
	pub errors: Vec<PlaceLookupError>,
	/// Alternate identifiers per requested identifier.
	#[serde(default)]
	pub results: Vec<AlternateIds>,
}

/// Alternate identifiers known for one place.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternateIds {
	/// Requested identifier.
	pub id: Option<String>,
	/// Other identifiers for the same place.
	#[serde(default)]
	pub alternate_ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaceResults {
	#[serde(default)]
	pub(crate) results: Vec<Place>,
}
