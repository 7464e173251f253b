//! Directions requests and responses.

// self
use crate::{
	_prelude::*,
	model::{self, Coordinate, Location, MapRegion, Place, Query},
};

def_str_enum! {
	/// Modes of transport for directions.
	DirectionsTransportType {
		Automobile => "Automobile",
		Walking => "Walking",
	}
}

def_str_enum! {
	/// Route features directions should avoid.
	DirectionsAvoid {
		Tolls => "Tolls",
	}
}

/// Options of a directions request.
///
/// Origin and destination accept either an address or a `lat,lng` pair; a [`Coordinate`]
/// converts into the latter through [`ToString`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DirectionsRequest {
	/// Starting point.
	pub origin: String,
	/// End point.
	pub destination: String,
	/// Desired arrival instant; exclusive with `departure_date`.
	pub arrival_date: Option<OffsetDateTime>,
	/// Route features to avoid.
	pub avoid: Vec<DirectionsAvoid>,
	/// Desired departure instant; exclusive with `arrival_date`.
	pub departure_date: Option<OffsetDateTime>,
	/// BCP 47 language of the instructions.
	pub lang: Option<String>,
	/// Requests more than one route when available.
	pub requests_alternate_routes: Option<bool>,
	/// Hint location used to resolve addresses.
	pub search_location: Option<Coordinate>,
	/// Hint region used to resolve addresses.
	pub search_region: Option<MapRegion>,
	/// Mode of transport.
	pub transport_type: Option<DirectionsTransportType>,
	/// Location of the user.
	pub user_location: Option<Coordinate>,
}
impl DirectionsRequest {
	/// Creates a request between `origin` and `destination` with no further options.
	pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
		Self { origin: origin.into(), destination: destination.into(), ..Default::default() }
	}

	pub(crate) fn to_query(&self) -> Result<Query> {
		model::ensure_exclusive(
			&self.arrival_date,
			&self.departure_date,
			"arrivalDate",
			"departureDate",
		)?;

		let mut query = Query::default();

		query.push("origin", &self.origin);
		query.push("destination", &self.destination);
		query.push_date("arrivalDate", self.arrival_date)?;
		query.push_list("avoid", &self.avoid, ",");
		query.push_date("departureDate", self.departure_date)?;
		query.push_opt("lang", self.lang.as_ref());
		query.push_opt("requestsAlternateRoutes", self.requests_alternate_routes);
		query.push_opt("searchLocation", self.search_location);
		query.push_opt("searchRegion", self.search_region.and_then(|r| r.to_query()));
		query.push_opt("transportType", self.transport_type);
		query.push_opt("userLocation", self.user_location);

		Ok(query)
	}
}

/// Response of a directions request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionsResponse {
	/// Resolved origin.
	pub origin: Option<Place>,
	/// Resolved destination.
	pub destination: Option<Place>,
	/// Candidate routes.
	#[serde(default)]
	pub routes: Vec<Route>,
	/// Polyline of each step, indexed by [`Step::step_path_index`].
	#[serde(default)]
	pub step_paths: Vec<Vec<Location>>,
	/// Steps shared by all routes, indexed by [`Route::step_indexes`].
	#[serde(default)]
	pub steps: Vec<Step>,
}
impl DirectionsResponse {
	/// Iterates over the steps of `route` in travel order, skipping dangling indexes.
	pub fn steps_of<'a>(&'a self, route: &'a Route) -> impl Iterator<Item = &'a Step> {
		route.step_indexes.iter().filter_map(|idx| self.steps.get(*idx))
	}
}

/// One route between origin and destination.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
	/// Total distance.
	pub distance_meters: Option<u64>,
	/// Expected travel time.
	pub duration_seconds: Option<u64>,
	/// Whether the route uses toll roads.
	pub has_tolls: Option<bool>,
	/// Route name.
	pub name: Option<String>,
	/// Indexes into [`DirectionsResponse::steps`].
	#[serde(default)]
	pub step_indexes: Vec<usize>,
	/// Mode of transport.
	pub transport_type: Option<DirectionsTransportType>,
}

/// One maneuver of a route.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
	/// Distance covered by the step.
	pub distance_meters: Option<u64>,
	/// Time taken by the step.
	pub duration_seconds: Option<u64>,
	/// Localized instructions.
	pub instructions: Option<String>,
	/// Index into [`DirectionsResponse::step_paths`].
	pub step_path_index: Option<usize>,
	/// Mode of transport.
	pub transport_type: Option<DirectionsTransportType>,
}
