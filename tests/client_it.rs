#![cfg(feature = "reqwest")]

mod common;

// std
use std::time::Duration;
// crates.io
use httpmock::prelude::*;
use time::macros;
// self
use apple_maps_kit::{
	error::{AuthError, Error, RemoteError},
	model::{
		AddressEtaRequest, AutocompleteRequest, Coordinate, DirectionsRequest,
		DirectionsTransportType, EtaRequest, EtaTransportType, GeocodeRequest, PoiCategory,
		SearchRequest, SearchResultType,
	},
};
use common::*;

#[tokio::test]
async fn geocode_sends_bearer_and_decodes_places() {
	let server = MockServer::start_async().await;
	let token_mock = mock_token(&server).await;
	let geocode_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v1/geocode")
				.query_param("q", "1 Apple Park Way")
				.query_param("limitToCountries", "US,CA")
				.query_param("lang", "en-US")
				.header("authorization", bearer());
			then.status(200).header("content-type", "application/json").body(
				r#"{"results":[{
					"name": "Apple Park",
					"countryCode": "US",
					"coordinate": {"latitude": 37.3349, "longitude": -122.009}
				}]}"#,
			);
		})
		.await;
	let reverse_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v1/reverseGeocode")
				.query_param("loc", "37.3349,-122.009")
				.header("authorization", bearer());
			then.status(200).header("content-type", "application/json").body("{}");
		})
		.await;
	let client = build_client(&server);
	let places = client
		.geocode(GeocodeRequest {
			limit_to_countries: vec!["US".into(), "CA".into()],
			lang: Some("en-US".into()),
			..GeocodeRequest::new("1 Apple Park Way")
		})
		.await
		.expect("Geocoding should succeed.");

	assert_eq!(places.len(), 1);
	assert_eq!(places[0].name.as_deref(), Some("Apple Park"));

	let nearby = client
		.reverse_geocode(Coordinate::new(37.3349, -122.009))
		.await
		.expect("Reverse geocoding should succeed.");

	assert!(nearby.is_empty());

	geocode_mock.assert_calls_async(1).await;
	reverse_mock.assert_calls_async(1).await;
	token_mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn api_errors_surface_remote_payload() {
	let server = MockServer::start_async().await;
	let _token = mock_token(&server).await;
	let _search = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/search");
			then.status(400)
				.header("content-type", "application/json")
				.body(r#"{"error":{"message":"Invalid query","details":["q is too long"]}}"#);
		})
		.await;
	let client = build_client(&server);
	let err = client.search("coffee").await.expect_err("Status 400 must fail the call.");

	match err {
		Error::Api(remote) => assert_eq!(
			remote,
			RemoteError {
				status: 400,
				message: Some("Invalid query".into()),
				details: vec!["q is too long".into()],
			}
		),
		other => panic!("Expected an API error, got {other:?}."),
	}
}

#[tokio::test]
async fn token_failure_prevents_api_calls() {
	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/token");
			then.status(500).body("upstream unavailable");
		})
		.await;
	let geocode_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/geocode");
			then.status(200).body("{}");
		})
		.await;
	let client = build_client(&server);
	let err = client.geocode("Cupertino").await.expect_err("Token failures must propagate.");

	assert!(matches!(err, Error::Auth(AuthError::Remote(RemoteError { status: 500, .. }))));

	token_mock.assert_calls_async(1).await;
	geocode_mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn invalid_options_fail_before_any_request() {
	let server = MockServer::start_async().await;
	let token_mock = mock_token(&server).await;
	let client = build_client(&server);
	let err = client
		.search(SearchRequest {
			result_type_filter: vec![SearchResultType::Query],
			..SearchRequest::new("coffee")
		})
		.await
		.expect_err("Query result type is rejected by search.");

	assert!(matches!(err, Error::InvalidSearchResultType { result_type: "query" }));

	let err = client
		.eta(EtaRequest::new((37.33, -122.03), Vec::<Coordinate>::new()))
		.await
		.expect_err("ETA requests need a destination.");

	assert!(matches!(err, Error::InvalidRequest { .. }));

	let err = client
		.places::<&str>(&[], None)
		.await
		.expect_err("Batch lookups need an identifier.");

	assert!(matches!(err, Error::InvalidRequest { .. }));

	token_mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn search_and_autocomplete_forward_filters() {
	let server = MockServer::start_async().await;
	let _token = mock_token(&server).await;
	let search_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v1/search")
				.query_param("q", "coffee")
				.query_param("includePoiCategories", "Cafe,Bakery")
				.query_param("enablePagination", "true");
			then.status(200).header("content-type", "application/json").body(
				r#"{
					"paginationInfo": {"nextPageToken": "page-2", "totalPageCount": 3},
					"results": [{"name": "Blue Bottle", "poiCategory": "Cafe"}]
				}"#,
			);
		})
		.await;
	let autocomplete_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v1/searchAutocomplete")
				.query_param("q", "cof")
				.query_param("resultTypeFilter", "query");
			then.status(200).header("content-type", "application/json").body(
				r#"{"results":[{"completionUrl":"/v1/search?q=coffee","displayLines":["coffee"]}]}"#,
			);
		})
		.await;
	let client = build_client(&server);
	let response = client
		.search(SearchRequest {
			include_poi_categories: vec![PoiCategory::Cafe, PoiCategory::Bakery],
			enable_pagination: Some(true),
			..SearchRequest::new("coffee")
		})
		.await
		.expect("Search should succeed.");

	assert_eq!(response.results[0].poi_category, Some(PoiCategory::Cafe));
	assert_eq!(
		response.pagination_info.and_then(|info| info.next_page_token).as_deref(),
		Some("page-2")
	);

	let suggestions = client
		.search_autocomplete(AutocompleteRequest {
			result_type_filter: vec![SearchResultType::Query],
			..AutocompleteRequest::new("cof")
		})
		.await
		.expect("Autocomplete should succeed.");

	assert_eq!(suggestions[0].completion_url.as_deref(), Some("/v1/search?q=coffee"));

	search_mock.assert_calls_async(1).await;
	autocomplete_mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn directions_format_dates_and_enums() {
	let server = MockServer::start_async().await;
	let _token = mock_token(&server).await;
	let directions_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v1/directions")
				.query_param("origin", "Cupertino")
				.query_param("destination", "37.78,-122.42")
				.query_param("departureDate", "2024-10-12T14:30:00.000Z")
				.query_param("transportType", "Walking");
			then.status(200).header("content-type", "application/json").body(
				r#"{
					"routes": [{"distanceMeters": 1200, "durationSeconds": 900, "stepIndexes": [0]}],
					"steps": [{"instructions": "Head north", "transportType": "Walking"}]
				}"#,
			);
		})
		.await;
	let client = build_client(&server);
	let response = client
		.directions(DirectionsRequest {
			departure_date: Some(macros::datetime!(2024-10-12 16:30 +02:00)),
			transport_type: Some(DirectionsTransportType::Walking),
			..DirectionsRequest::new("Cupertino", Coordinate::new(37.78, -122.42).to_string())
		})
		.await
		.expect("Directions should succeed.");
	let route = &response.routes[0];

	assert_eq!(route.distance_meters, Some(1200));
	assert_eq!(
		response.steps_of(route).map(|step| step.instructions.as_deref()).collect::<Vec<_>>(),
		vec![Some("Head north")]
	);

	directions_mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn eta_between_addresses_geocodes_then_estimates() {
	let server = MockServer::start_async().await;
	let token_mock = mock_token(&server).await;
	let mut geocode_mocks = Vec::new();

	for (address, lat, lng) in
		[("Cupertino", 37.33, -122.03), ("San Francisco", 37.78, -122.42), ("Palo Alto", 37.44, -122.16)]
	{
		geocode_mocks.push(
			server
				.mock_async(move |when, then| {
					when.method(GET).path("/v1/geocode").query_param("q", address);
					then.status(200).header("content-type", "application/json").body(format!(
						r#"{{"results":[{{"coordinate":{{"latitude":{lat},"longitude":{lng}}}}}]}}"#
					));
				})
				.await,
		);
	}

	let eta_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v1/etas")
				.query_param("origin", "37.33,-122.03")
				.query_param("destinations", "37.78,-122.42|37.44,-122.16")
				.query_param("transportType", "Automobile");
			then.status(200).header("content-type", "application/json").body(
				r#"{"etas":[
					{"destination": {"latitude": 37.78, "longitude": -122.42}, "expectedTravelTimeSeconds": 2700},
					{"destination": {"latitude": 37.44, "longitude": -122.16}, "expectedTravelTimeSeconds": 1200}
				]}"#,
			);
		})
		.await;
	let client = build_client(&server);
	let etas = client
		.eta_between_addresses(AddressEtaRequest {
			transport_type: Some(EtaTransportType::Automobile),
			..AddressEtaRequest::new("Cupertino", ["San Francisco", "Palo Alto"])
		})
		.await
		.expect("Address ETAs should succeed.");

	assert_eq!(
		etas.iter().map(|eta| eta.expected_travel_time_seconds).collect::<Vec<_>>(),
		vec![Some(2700), Some(1200)]
	);

	for mock in geocode_mocks {
		mock.assert_calls_async(1).await;
	}

	eta_mock.assert_calls_async(1).await;
	token_mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn eta_between_addresses_reports_first_unknown_address_in_order() {
	let server = MockServer::start_async().await;
	let _token = mock_token(&server).await;

	// Earlier addresses answer last, so completion order differs from request order.
	for (address, delay_ms, body) in [
		("Cupertino", 0, r#"{"results":[{"coordinate":{"latitude":37.33,"longitude":-122.03}}]}"#),
		("Atlantis", 300, r#"{"results":[]}"#),
		("El Dorado", 200, r#"{"results":[]}"#),
		("Shangri La", 0, r#"{"results":[{"name":"No coordinate"}]}"#),
	] {
		server
			.mock_async(move |when, then| {
				when.method(GET).path("/v1/geocode").query_param("q", address);
				then.status(200)
					.delay(Duration::from_millis(delay_ms))
					.header("content-type", "application/json")
					.body(body);
			})
			.await;
	}

	let eta_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/etas");
			then.status(200).body("{}");
		})
		.await;
	let client = build_client(&server);

	for (origin, destinations, expected) in [
		("Atlantis", vec!["Shangri La"], "Atlantis"),
		("Cupertino", vec!["El Dorado", "Shangri La"], "El Dorado"),
	] {
		let err = client
			.eta_between_addresses(AddressEtaRequest::new(origin, destinations))
			.await
			.expect_err("Unknown addresses must fail.");

		match err {
			Error::NoPlacesFound { address } => assert_eq!(address, expected),
			other => panic!("Expected a missing place, got {other:?}."),
		}
	}

	eta_mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn place_lookups_hit_expected_paths() {
	let server = MockServer::start_async().await;
	let _token = mock_token(&server).await;
	let place_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/place/I7C250D2CDCB364A").query_param("lang", "fr");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"id":"I7C250D2CDCB364A","name":"Apple Park"}"#);
		})
		.await;
	let places_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/place").query_param("ids", "A1,B2");
			then.status(200).header("content-type", "application/json").body(
				r#"{"places":[{"id":"A1"}],"errors":[{"id":"B2","errorCode":"FAILED_NOT_FOUND"}]}"#,
			);
		})
		.await;
	let alternate_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/place/alternateIds").query_param("ids", "A1");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"results":[{"id":"A1","alternateIds":["Z9"]}]}"#);
		})
		.await;
	let client = build_client(&server);
	let place =
		client.place("I7C250D2CDCB364A", Some("fr")).await.expect("Place lookup should succeed.");

	assert_eq!(place.name.as_deref(), Some("Apple Park"));

	let batch = client.places(&["A1", "B2"], None).await.expect("Batch lookup should succeed.");

	assert_eq!(batch.places.len(), 1);
	assert_eq!(batch.errors[0].error_code.as_deref(), Some("FAILED_NOT_FOUND"));

	let alternates =
		client.alternate_place_ids(&["A1"]).await.expect("Alternate lookup should succeed.");

	assert_eq!(alternates.results[0].alternate_ids, vec!["Z9".to_owned()]);
	assert!(alternates.errors.is_empty());

	place_mock.assert_calls_async(1).await;
	places_mock.assert_calls_async(1).await;
	alternate_mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn unexpected_payload_reports_json_path() {
	let server = MockServer::start_async().await;
	let _token = mock_token(&server).await;
	let _eta = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/etas");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"etas":[{"transportType":"Teleport"}]}"#);
		})
		.await;
	let client = build_client(&server);
	let err = client
		.eta(EtaRequest::new((37.33, -122.03), [Coordinate::new(37.78, -122.42)]))
		.await
		.expect_err("Unknown enum values must fail decoding.");

	match err {
		Error::Decode(decode) => {
			assert_eq!(decode.source.path().to_string(), "etas[0].transportType");
			assert_eq!(decode.endpoint, "/v1/etas");
		},
		other => panic!("Expected a decode error, got {other:?}."),
	}
}
