//! Estimated time of arrival requests and responses.

// std
use std::ops::RangeInclusive;
// self
use crate::{
	_prelude::*,
	model::{self, Coordinate, Location, Query},
};

/// Number of destinations one ETA request accepts.
pub const ETA_DESTINATIONS: RangeInclusive<usize> = 1..=10;

def_str_enum! {
	/// Modes of transport for ETAs.
	EtaTransportType {
		Automobile => "Automobile",
		Walking => "Walking",
		Transit => "Transit",
	}
}

/// Options of an ETA request between coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EtaRequest {
	/// Starting point.
	pub origin: Coordinate,
	/// End points; between one and ten.
	pub destinations: Vec<Coordinate>,
	/// Mode of transport.
	pub transport_type: Option<EtaTransportType>,
	/// Desired departure instant; exclusive with `arrival_date`.
	pub departure_date: Option<OffsetDateTime>,
	/// Desired arrival instant; exclusive with `departure_date`.
	pub arrival_date: Option<OffsetDateTime>,
}
impl EtaRequest {
	/// Creates a request from `origin` to `destinations` with no further options.
	pub fn new(
		origin: impl Into<Coordinate>,
		destinations: impl IntoIterator<Item = Coordinate>,
	) -> Self {
		Self {
			origin: origin.into(),
			destinations: destinations.into_iter().collect(),
			..Default::default()
		}
	}

	pub(crate) fn to_query(&self) -> Result<Query> {
		validate_options(self.destinations.len(), &self.departure_date, &self.arrival_date)?;

		let mut query = Query::default();

		query.push("origin", self.origin);
		query.push_list("destinations", &self.destinations, "|");
		query.push_opt("transportType", self.transport_type);
		query.push_date("departureDate", self.departure_date)?;
		query.push_date("arrivalDate", self.arrival_date)?;

		Ok(query)
	}
}

/// Options of an ETA request between addresses, each geocoded before the ETA call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AddressEtaRequest {
	/// Starting address.
	pub origin: String,
	/// Destination addresses; between one and ten.
	pub destinations: Vec<String>,
	/// Mode of transport.
	pub transport_type: Option<EtaTransportType>,
	/// Desired departure instant; exclusive with `arrival_date`.
	pub departure_date: Option<OffsetDateTime>,
	/// Desired arrival instant; exclusive with `departure_date`.
	pub arrival_date: Option<OffsetDateTime>,
}
impl AddressEtaRequest {
	/// Creates a request from `origin` to `destinations` with no further options.
	pub fn new<I>(origin: impl Into<String>, destinations: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		Self {
			origin: origin.into(),
			destinations: destinations.into_iter().map(Into::into).collect(),
			..Default::default()
		}
	}

	pub(crate) fn validate(&self) -> Result<()> {
		validate_options(self.destinations.len(), &self.departure_date, &self.arrival_date)
	}

	pub(crate) fn resolve(&self, origin: Coordinate, destinations: Vec<Coordinate>) -> EtaRequest {
		EtaRequest {
			origin,
			destinations,
			transport_type: self.transport_type,
			departure_date: self.departure_date,
			arrival_date: self.arrival_date,
		}
	}
}

/// Estimated travel to one destination.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Eta {
	/// Destination the estimate refers to.
	pub destination: Option<Location>,
	/// Travel distance.
	pub distance_meters: Option<u64>,
	/// Travel time under current conditions.
	pub expected_travel_time_seconds: Option<u64>,
	/// Travel time without traffic.
	pub static_travel_time_seconds: Option<u64>,
	/// Mode of transport.
	pub transport_type: Option<EtaTransportType>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EtaResponse {
	#[serde(default)]
	pub(crate) etas: Vec<Eta>,
}

fn validate_options(
	destinations: usize,
	departure_date: &Option<OffsetDateTime>,
	arrival_date: &Option<OffsetDateTime>,
) -> Result<()> {
	if !ETA_DESTINATIONS.contains(&destinations) {
		return Err(Error::invalid_request(format!(
			"ETA requests need between {} and {} destinations, got {destinations}",
			ETA_DESTINATIONS.start(),
			ETA_DESTINATIONS.end()
		)));
	}

	model::ensure_exclusive(departure_date, arrival_date, "departureDate", "arrivalDate")
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	#[test]
	fn destinations_are_pipe_joined() {
		let request = EtaRequest {
			transport_type: Some(EtaTransportType::Transit),
			arrival_date: Some(macros::datetime!(2024-10-12 14:30:00.25 UTC)),
			..EtaRequest::new((37.33, -122.03), [
				Coordinate::new(37.78, -122.42),
				Coordinate::new(37.44, -122.16),
			])
		};
		let query = request.to_query().expect("ETA options should validate.");

		assert_eq!(query.get("origin"), Some("37.33,-122.03"));
		assert_eq!(query.get("destinations"), Some("37.78,-122.42|37.44,-122.16"));
		assert_eq!(query.get("transportType"), Some("Transit"));
		assert_eq!(query.get("arrivalDate"), Some("2024-10-12T14:30:00.250Z"));
	}

	#[test]
	fn destination_count_is_bounded() {
		let none = EtaRequest::new((0.0, 0.0), []);

		assert!(matches!(none.to_query(), Err(Error::InvalidRequest { .. })));

		let eleven = EtaRequest::new((0.0, 0.0), (0..11).map(|i| Coordinate::new(i as f64, 0.0)));

		assert!(matches!(eleven.to_query(), Err(Error::InvalidRequest { .. })));

		let ten = EtaRequest::new((0.0, 0.0), (0..10).map(|i| Coordinate::new(i as f64, 0.0)));

		assert!(ten.to_query().is_ok());
	}

	#[test]
	fn address_request_validates_before_geocoding() {
		let request = AddressEtaRequest {
			departure_date: Some(macros::datetime!(2024-10-12 14:00 UTC)),
			arrival_date: Some(macros::datetime!(2024-10-12 15:00 UTC)),
			..AddressEtaRequest::new("Cupertino", ["San Francisco"])
		};

		assert!(matches!(request.validate(), Err(Error::InvalidRequest { .. })));
		assert!(AddressEtaRequest::new("Cupertino", Vec::<String>::new()).validate().is_err());
	}

	#[test]
	fn missing_etas_decode_as_empty() {
		let response: EtaResponse = serde_json::from_str("{}").expect("Empty body should decode.");

		assert!(response.etas.is_empty());
	}
}
