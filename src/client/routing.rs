// crates.io
use futures::future;
// self
use crate::{
	_prelude::*,
	client::MapsClient,
	http::MapsHttpClient,
	model::{
		AddressEtaRequest, DirectionsRequest, DirectionsResponse, Eta, EtaRequest, eta::EtaResponse,
	},
	obs::Operation,
};

const DIRECTIONS_ENDPOINT: &str = "/v1/directions";
const ETA_ENDPOINT: &str = "/v1/etas";

impl<C> MapsClient<C>
where
	C: ?Sized + MapsHttpClient,
{
	/// Computes routes between two places.
	pub async fn directions(&self, request: DirectionsRequest) -> Result<DirectionsResponse> {
		let url = self.endpoint(DIRECTIONS_ENDPOINT, &request.to_query()?)?;

		self.get(Operation::Directions, DIRECTIONS_ENDPOINT, url).await
	}

	/// Estimates travel time from one origin to up to ten destinations.
	pub async fn eta(&self, request: EtaRequest) -> Result<Vec<Eta>> {
		let url = self.endpoint(ETA_ENDPOINT, &request.to_query()?)?;
		let response: EtaResponse = self.get(Operation::Eta, ETA_ENDPOINT, url).await?;

		Ok(response.etas)
	}

	/// Geocodes the origin and every destination concurrently, then estimates travel time between
	/// them.
	///
	/// Fails with [`Error::NoPlacesFound`] naming the first address, in request order, that has
	/// no coordinate.
	pub async fn eta_between_addresses(&self, request: AddressEtaRequest) -> Result<Vec<Eta>> {
		request.validate()?;

		let (origin, destinations) = future::join(
			self.coordinate_of(&request.origin),
			future::join_all(request.destinations.iter().map(|address| self.coordinate_of(address))),
		)
		.await;
		let origin = origin?;
		let destinations = destinations.into_iter().collect::<Result<Vec<_>>>()?;

		self.eta(request.resolve(origin, destinations)).await
	}
}
