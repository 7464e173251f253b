//! Rectangular map regions.

// self
use crate::_prelude::*;

/// A rectangular region bounded by latitudes and longitudes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapRegion {
	/// Northern boundary.
	pub north_latitude: Option<f64>,
	/// Eastern boundary.
	pub east_longitude: Option<f64>,
	/// Southern boundary.
	pub south_latitude: Option<f64>,
	/// Western boundary.
	pub west_longitude: Option<f64>,
}
impl MapRegion {
	/// Creates a fully bounded region.
	pub const fn new(
		north_latitude: f64,
		east_longitude: f64,
		south_latitude: f64,
		west_longitude: f64,
	) -> Self {
		Self {
			north_latitude: Some(north_latitude),
			east_longitude: Some(east_longitude),
			south_latitude: Some(south_latitude),
			west_longitude: Some(west_longitude),
		}
	}

	/// Renders `north,east,south,west`, or `None` when any boundary is missing.
	pub fn to_query(&self) -> Option<String> {
		let (north, east, south, west) = (
			self.north_latitude?,
			self.east_longitude?,
			self.south_latitude?,
			self.west_longitude?,
		);

		Some(format!("{north},{east},{south},{west}"))
	}
}
