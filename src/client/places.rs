// self
use crate::{
	_prelude::*,
	client::MapsClient,
	error::ConfigError,
	http::MapsHttpClient,
	model::{AlternateIdsResponse, Place, PlacesResponse, Query},
	obs::Operation,
};

const PLACE_ENDPOINT: &str = "/v1/place";
const PLACE_BY_ID_ENDPOINT: &str = "/v1/place/{id}";
const ALTERNATE_IDS_ENDPOINT: &str = "/v1/place/alternateIds";

impl<C> MapsClient<C>
where
	C: ?Sized + MapsHttpClient,
{
	/// Looks up one place by identifier.
	pub async fn place(&self, id: &str, lang: Option<&str>) -> Result<Place> {
		if id.trim().is_empty() {
			return Err(Error::invalid_request("place identifier must not be empty"));
		}

		let mut query = Query::default();

		query.push_opt("lang", lang);

		let mut url = self.endpoint(PLACE_ENDPOINT, &query)?;

		url.path_segments_mut()
			.map_err(|_| ConfigError::CannotBeABase { url: self.api_server.to_string() })?
			.push(id);

		self.get(Operation::Place, PLACE_BY_ID_ENDPOINT, url).await
	}

	/// Looks up several places by identifier; unresolved identifiers are listed in
	/// [`PlacesResponse::errors`].
	pub async fn places<I>(&self, ids: &[I], lang: Option<&str>) -> Result<PlacesResponse>
	where
		I: AsRef<str>,
	{
		let mut query = ids_query(ids)?;

		query.push_opt("lang", lang);

		let url = self.endpoint(PLACE_ENDPOINT, &query)?;

		self.get(Operation::Place, PLACE_ENDPOINT, url).await
	}

	/// Returns the alternate identifiers known for each place identifier.
	pub async fn alternate_place_ids<I>(&self, ids: &[I]) -> Result<AlternateIdsResponse>
	where
		I: AsRef<str>,
	{
		let url = self.endpoint(ALTERNATE_IDS_ENDPOINT, &ids_query(ids)?)?;

		self.get(Operation::AlternatePlaceIds, ALTERNATE_IDS_ENDPOINT, url).await
	}
}

fn ids_query<I>(ids: &[I]) -> Result<Query>
where
	I: AsRef<str>,
{
	if ids.is_empty() {
		return Err(Error::invalid_request("at least one place identifier is required"));
	}

	let ids = ids.iter().map(AsRef::as_ref).collect::<Vec<_>>();
	let mut query = Query::default();

	query.push_list("ids", &ids, ",");

	Ok(query)
}
