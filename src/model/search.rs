//! Geocoding, search, and autocomplete requests and responses.

// self
use crate::{
	_prelude::*,
	model::{self, Coordinate, Location, MapRegion, Place, PoiCategory, Query, StructuredAddress},
};

def_str_enum! {
	/// Kinds of results a search or autocomplete request may return.
	SearchResultType {
		Poi => "poi",
		Address => "address",
		PhysicalFeature => "physicalFeature",
		PointOfInterest => "pointOfInterest",
		Query => "query",
	}
}

def_str_enum! {
	/// How strictly results are confined to the search region.
	SearchRegionPriority {
		Default => "default",
		Required => "required",
	}
}

def_str_enum! {
	/// Address granularities accepted by address category filters.
	AddressCategory {
		Country => "Country",
		AdministrativeArea => "AdministrativeArea",
		SubAdministrativeArea => "SubAdministrativeArea",
		Locality => "Locality",
		SubLocality => "SubLocality",
		PostalCode => "PostalCode",
	}
}

/// Options of a forward geocoding request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeocodeRequest {
	/// Address to geocode.
	pub address: String,
	/// ISO 3166 country codes results are limited to.
	pub limit_to_countries: Vec<String>,
	/// BCP 47 language of the results.
	pub lang: Option<String>,
	/// Hint location; exclusive with `search_region`.
	pub search_location: Option<Coordinate>,
	/// Hint region; exclusive with `search_location`.
	pub search_region: Option<MapRegion>,
	/// Location of the user.
	pub user_location: Option<Coordinate>,
}
impl GeocodeRequest {
	/// Creates a request for `address` with no further options.
	pub fn new(address: impl Into<String>) -> Self {
		Self { address: address.into(), ..Default::default() }
	}

	pub(crate) fn to_query(&self) -> Result<Query> {
		model::ensure_exclusive(
			&self.search_location,
			&self.search_region,
			"searchLocation",
			"searchRegion",
		)?;

		let mut query = Query::default();

		query.push("q", &self.address);
		query.push_list("limitToCountries", &self.limit_to_countries, ",");
		query.push_opt("lang", self.lang.as_ref());
		query.push_opt("searchLocation", self.search_location);
		query.push_opt("searchRegion", self.search_region.and_then(|r| r.to_query()));
		query.push_opt("userLocation", self.user_location);

		Ok(query)
	}
}
impl From<&str> for GeocodeRequest {
	fn from(address: &str) -> Self {
		Self::new(address)
	}
}
impl From<String> for GeocodeRequest {
	fn from(address: String) -> Self {
		Self::new(address)
	}
}

/// Options of a reverse geocoding request.
#[derive(Clone, Debug, PartialEq)]
pub struct ReverseGeocodeRequest {
	/// Coordinate to resolve.
	pub location: Coordinate,
	/// BCP 47 language of the results.
	pub lang: Option<String>,
}
impl ReverseGeocodeRequest {
	/// Creates a request for `location`.
	pub fn new(location: impl Into<Coordinate>) -> Self {
		Self { location: location.into(), lang: None }
	}

	pub(crate) fn to_query(&self) -> Query {
		let mut query = Query::default();

		query.push("loc", self.location);
		query.push_opt("lang", self.lang.as_ref());

		query
	}
}
impl From<Coordinate> for ReverseGeocodeRequest {
	fn from(location: Coordinate) -> Self {
		Self::new(location)
	}
}

/// Options of a place search.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchRequest {
	/// Free-form query.
	pub query: String,
	/// Categories to exclude.
	pub exclude_poi_categories: Vec<PoiCategory>,
	/// Categories to restrict results to.
	pub include_poi_categories: Vec<PoiCategory>,
	/// ISO 3166 country codes results are limited to.
	pub limit_to_countries: Vec<String>,
	/// Result kinds to return; [`SearchResultType::Query`] is rejected.
	pub result_type_filter: Vec<SearchResultType>,
	/// BCP 47 language of the results.
	pub lang: Option<String>,
	/// Hint location; exclusive with `search_region`.
	pub search_location: Option<Coordinate>,
	/// Hint region; exclusive with `search_location`.
	pub search_region: Option<MapRegion>,
	/// Location of the user.
	pub user_location: Option<Coordinate>,
	/// How strictly results stay inside the search region.
	pub search_region_priority: Option<SearchRegionPriority>,
	/// Requests paginated results.
	pub enable_pagination: Option<bool>,
	/// Page token from a previous [`PaginationInfo`].
	pub page_token: Option<String>,
	/// Address categories to restrict results to.
	pub include_address_categories: Vec<AddressCategory>,
	/// Address categories to exclude.
	pub exclude_address_categories: Vec<AddressCategory>,
}
impl SearchRequest {
	/// Creates a search for `query` with no further options.
	pub fn new(query: impl Into<String>) -> Self {
		Self { query: query.into(), ..Default::default() }
	}

	pub(crate) fn to_query(&self) -> Result<Query> {
		if let Some(result_type) =
			self.result_type_filter.iter().find(|t| **t == SearchResultType::Query)
		{
			return Err(Error::InvalidSearchResultType { result_type: result_type.as_str() });
		}

		model::ensure_exclusive(
			&self.search_location,
			&self.search_region,
			"searchLocation",
			"searchRegion",
		)?;

		let mut query = Query::default();

		query.push("q", &self.query);
		query.push_list("excludePoiCategories", &self.exclude_poi_categories, ",");
		query.push_list("includePoiCategories", &self.include_poi_categories, ",");
		query.push_list("limitToCountries", &self.limit_to_countries, ",");
		query.push_list("resultTypeFilter", &self.result_type_filter, ",");
		query.push_opt("lang", self.lang.as_ref());
		query.push_opt("searchLocation", self.search_location);
		query.push_opt("searchRegion", self.search_region.and_then(|r| r.to_query()));
		query.push_opt("userLocation", self.user_location);
		query.push_opt("searchRegionPriority", self.search_region_priority);
		query.push_opt("enablePagination", self.enable_pagination);
		query.push_opt("pageToken", self.page_token.as_ref());
		query.push_list("includeAddressCategories", &self.include_address_categories, ",");
		query.push_list("excludeAddressCategories", &self.exclude_address_categories, ",");

		Ok(query)
	}
}
impl From<&str> for SearchRequest {
	fn from(query: &str) -> Self {
		Self::new(query)
	}
}

/// Options of a search autocomplete request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AutocompleteRequest {
	/// Partial query.
	pub query: String,
	/// Categories to exclude.
	pub exclude_poi_categories: Vec<PoiCategory>,
	/// Categories to restrict results to.
	pub include_poi_categories: Vec<PoiCategory>,
	/// ISO 3166 country codes results are limited to.
	pub limit_to_countries: Vec<String>,
	/// Result kinds to return, including [`SearchResultType::Query`].
	pub result_type_filter: Vec<SearchResultType>,
	/// BCP 47 language of the results.
	pub lang: Option<String>,
	/// Hint location; exclusive with `search_region`.
	pub search_location: Option<Coordinate>,
	/// Hint region; exclusive with `search_location`.
	pub search_region: Option<MapRegion>,
	/// Location of the user.
	pub user_location: Option<Coordinate>,
	/// How strictly results stay inside the search region.
	pub search_region_priority: Option<SearchRegionPriority>,
	/// Address categories to restrict results to.
	pub include_address_categories: Vec<AddressCategory>,
	/// Address categories to exclude.
	pub exclude_address_categories: Vec<AddressCategory>,
}
impl AutocompleteRequest {
	/// Creates an autocomplete request for `query` with no further options.
	pub fn new(query: impl Into<String>) -> Self {
		Self { query: query.into(), ..Default::default() }
	}

	pub(crate) fn to_query(&self) -> Result<Query> {
		model::ensure_exclusive(
			&self.search_location,
			&self.search_region,
			"searchLocation",
			"searchRegion",
		)?;

		let mut query = Query::default();

		query.push("q", &self.query);
		query.push_list("excludePoiCategories", &self.exclude_poi_categories, ",");
		query.push_list("includePoiCategories", &self.include_poi_categories, ",");
		query.push_list("limitToCountries", &self.limit_to_countries, ",");
		query.push_list("resultTypeFilter", &self.result_type_filter, ",");
		query.push_opt("lang", self.lang.as_ref());
		query.push_opt("searchLocation", self.search_location);
		query.push_opt("searchRegion", self.search_region.and_then(|r| r.to_query()));
		query.push_opt("userLocation", self.user_location);
		query.push_opt("searchRegionPriority", self.search_region_priority);
		query.push_list("includeAddressCategories", &self.include_address_categories, ",");
		query.push_list("excludeAddressCategories", &self.exclude_address_categories, ",");

		Ok(query)
	}
}
impl From<&str> for AutocompleteRequest {
	fn from(query: &str) -> Self {
		Self::new(query)
	}
}

/// Response of a place search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
	/// Region that encloses the results.
	pub display_map_region: Option<MapRegion>,
	/// Paging state when pagination was requested.
	pub pagination_info: Option<PaginationInfo>,
	/// Matching places.
	#[serde(default)]
	pub results: Vec<Place>,
}

/// Paging state of a search response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
	/// Token of the next page.
	pub next_page_token: Option<String>,
	/// Token of the previous page.
	pub prev_page_token: Option<String>,
	/// Number of pages available.
	pub total_page_count: Option<u32>,
	/// Number of results available.
	pub total_results: Option<u32>,
}

/// One autocomplete suggestion.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteResult {
	/// Relative URL that runs the completed search.
	pub completion_url: Option<String>,
	/// Lines to display for the suggestion.
	pub display_lines: Option<Vec<String>>,
	/// Location of the suggestion.
	pub location: Option<Location>,
	/// Address of the suggestion.
	pub structured_address: Option<StructuredAddress>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AutocompleteResponse {
	#[serde(default)]
	pub(crate) results: Vec<AutocompleteResult>,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn geocode_query_formats_options() {
		let request = GeocodeRequest {
			limit_to_countries: vec!["US".into(), "CA".into()],
			lang: Some("en-US".into()),
			search_region: Some(MapRegion::new(38.0, -122.1, 37.5, -122.5)),
			user_location: Some(Coordinate::new(37.78, -122.42)),
			..GeocodeRequest::new("1 Apple Park Way")
		};
		let query = request.to_query().expect("Geocode options should validate.");

		assert_eq!(query.get("q"), Some("1 Apple Park Way"));
		assert_eq!(query.get("limitToCountries"), Some("US,CA"));
		assert_eq!(query.get("lang"), Some("en-US"));
		assert_eq!(query.get("searchRegion"), Some("38,-122.1,37.5,-122.5"));
		assert_eq!(query.get("userLocation"), Some("37.78,-122.42"));
		assert_eq!(query.get("searchLocation"), None);
	}

	#[test]
	fn search_rejects_query_result_type() {
		let request = SearchRequest {
			result_type_filter: vec![SearchResultType::Poi, SearchResultType::Query],
			..SearchRequest::new("coffee")
		};
		let err = request.to_query().expect_err("Query result type must be rejected.");

		assert!(matches!(err, Error::InvalidSearchResultType { result_type: "query" }));

		let autocomplete = AutocompleteRequest {
			result_type_filter: vec![SearchResultType::Query],
			..AutocompleteRequest::new("cof")
		};

		let query = autocomplete.to_query().expect("Autocomplete accepts query results.");

		assert_eq!(query.get("resultTypeFilter"), Some("query"));
	}

	#[test]
	fn search_query_formats_filters_and_paging() {
		let request = SearchRequest {
			include_poi_categories: vec![PoiCategory::Cafe, PoiCategory::Bakery],
			result_type_filter: vec![SearchResultType::Poi, SearchResultType::Address],
			search_region_priority: Some(SearchRegionPriority::Required),
			enable_pagination: Some(true),
			page_token: Some("next".into()),
			exclude_address_categories: vec![AddressCategory::PostalCode],
			..SearchRequest::new("coffee")
		};
		let query = request.to_query().expect("Search options should validate.");

		assert_eq!(query.get("includePoiCategories"), Some("Cafe,Bakery"));
		assert_eq!(query.get("resultTypeFilter"), Some("poi,address"));
		assert_eq!(query.get("searchRegionPriority"), Some("required"));
		assert_eq!(query.get("enablePagination"), Some("true"));
		assert_eq!(query.get("pageToken"), Some("next"));
		assert_eq!(query.get("excludeAddressCategories"), Some("PostalCode"));
		assert_eq!(query.get("excludePoiCategories"), None);
	}

	#[test]
	fn search_location_and_region_are_exclusive() {
		let request = SearchRequest {
			search_location: Some(Coordinate::new(1.0, 2.0)),
			search_region: Some(MapRegion::new(2.0, 3.0, 1.0, 2.0)),
			..SearchRequest::new("coffee")
		};

		assert!(matches!(request.to_query(), Err(Error::InvalidRequest { .. })));
	}

	#[test]
	fn search_response_tolerates_missing_fields() {
		let response: SearchResponse = serde_json::from_str(
			r#"{
				"paginationInfo": {"nextPageToken": "abc", "totalResults": 42},
				"results": [{"name": "Cafe"}]
			}"#,
		)
		.expect("Search payload should decode.");

		assert_eq!(response.results.len(), 1);
		assert_eq!(
			response.pagination_info.and_then(|info| info.next_page_token).as_deref(),
			Some("abc")
		);
		assert!(response.display_map_region.is_none());
	}
}
