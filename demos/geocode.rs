//! Geocodes an address against the live Apple Maps Server API, then lists nearby coffee shops.
//!
//! Reads credentials from `APPLE_MAPS_TEAM_ID`, `APPLE_MAPS_KEY_ID`, and either
//! `APPLE_MAPS_PRIVATE_KEY` or `APPLE_MAPS_PRIVATE_KEY_PATH`.
//!
//! ```sh
//! cargo run --example geocode -- "1 Apple Park Way, Cupertino"
//! ```

// crates.io
use color_eyre::{Result, eyre::eyre};
// self
use apple_maps_kit::{
	client::ReqwestMapsClient,
	model::{PoiCategory, SearchRequest},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let address = std::env::args().nth(1).unwrap_or_else(|| "1 Apple Park Way, Cupertino".into());
	let client = ReqwestMapsClient::from_env()?;
	let places = client.geocode(address.as_str()).await?;
	let coordinate = places
		.iter()
		.find_map(|place| place.coordinate.and_then(|location| location.coordinate()))
		.ok_or_else(|| eyre!("No coordinate found for `{address}`."))?;

	println!("{address} is at {coordinate}.");

	let nearby = client
		.search(SearchRequest {
			include_poi_categories: vec![PoiCategory::Cafe],
			search_location: Some(coordinate),
			..SearchRequest::new("coffee")
		})
		.await?;

	for place in nearby.results.iter().take(5) {
		println!(
			"- {} ({})",
			place.name.as_deref().unwrap_or("unnamed"),
			place.formatted_address_lines.as_deref().unwrap_or_default().join(", ")
		);
	}

	Ok(())
}
