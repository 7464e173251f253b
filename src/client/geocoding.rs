// self
use crate::{
	_prelude::*,
	client::MapsClient,
	http::MapsHttpClient,
	model::{Coordinate, GeocodeRequest, Place, ReverseGeocodeRequest, place::PlaceResults},
	obs::Operation,
};

const GEOCODE_ENDPOINT: &str = "/v1/geocode";
const REVERSE_GEOCODE_ENDPOINT: &str = "/v1/reverseGeocode";

impl<C> MapsClient<C>
where
	C: ?Sized + MapsHttpClient,
{
	/// Resolves an address to the places that match it.
	pub async fn geocode(&self, request: impl Into<GeocodeRequest>) -> Result<Vec<Place>> {
		let url = self.endpoint(GEOCODE_ENDPOINT, &request.into().to_query()?)?;
		let results: PlaceResults = self.get(Operation::Geocode, GEOCODE_ENDPOINT, url).await?;

		Ok(results.results)
	}

	/// Resolves a coordinate to the places at that location.
	pub async fn reverse_geocode(
		&self,
		request: impl Into<ReverseGeocodeRequest>,
	) -> Result<Vec<Place>> {
		let url = self.endpoint(REVERSE_GEOCODE_ENDPOINT, &request.into().to_query())?;
		let results: PlaceResults =
			self.get(Operation::ReverseGeocode, REVERSE_GEOCODE_ENDPOINT, url).await?;

		Ok(results.results)
	}

	/// Geocodes `address` and returns the coordinate of the first match.
	pub(crate) async fn coordinate_of(&self, address: &str) -> Result<Coordinate> {
		self.geocode(address)
			.await?
			.first()
			.and_then(|place| place.coordinate)
			.and_then(|location| location.coordinate())
			.ok_or_else(|| Error::NoPlacesFound { address: address.to_owned() })
	}
}
