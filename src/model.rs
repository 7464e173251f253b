//! Request options and response payloads of the Apple Maps Server API.
//!
//! Response types mirror the JSON schema field for field; every field is optional because the
//! API omits whatever it does not know. Request types validate themselves before a token is
//! requested or a byte is sent.

macro_rules! def_str_enum {
	(
		$(#[$meta:meta])*
		$name:ident {
			$($variant:ident => $value:literal,)+
		}
	) => {
		$(#[$meta])*
		#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
		pub enum $name {
			$(
				#[doc = concat!("`", $value, "`.")]
				#[serde(rename = $value)]
				$variant,
			)+
		}
		impl $name {
			/// Returns the label sent over the wire.
			pub const fn as_str(self) -> &'static str {
				match self {
					$(Self::$variant => $value,)+
				}
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(self.as_str())
			}
		}
	};
}

pub mod directions;
pub mod eta;
pub mod place;
pub mod poi;
pub mod region;
pub mod search;

pub use directions::*;
pub use eta::*;
pub use place::*;
pub use poi::*;
pub use region::*;
pub use search::*;

// crates.io
use time::{UtcOffset, format_description::BorrowedFormatItem, macros::format_description};
// self
use crate::_prelude::*;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] =
	format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");

/// A latitude/longitude pair, rendered as `lat,lng` in queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
	/// Latitude in degrees.
	pub latitude: f64,
	/// Longitude in degrees.
	pub longitude: f64,
}
impl Coordinate {
	/// Creates a coordinate.
	pub const fn new(latitude: f64, longitude: f64) -> Self {
		Self { latitude, longitude }
	}
}
impl Display for Coordinate {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{},{}", self.latitude, self.longitude)
	}
}
impl From<(f64, f64)> for Coordinate {
	fn from((latitude, longitude): (f64, f64)) -> Self {
		Self { latitude, longitude }
	}
}

/// Ordered query parameters for one API call.
#[derive(Debug, Default)]
pub(crate) struct Query(Vec<(&'static str, String)>);
impl Query {
	pub(crate) fn push(&mut self, name: &'static str, value: impl Display) {
		self.0.push((name, value.to_string()));
	}

	pub(crate) fn push_opt<T>(&mut self, name: &'static str, value: Option<T>)
	where
		T: Display,
	{
		if let Some(value) = value {
			self.push(name, value);
		}
	}

	pub(crate) fn push_list<T>(&mut self, name: &'static str, values: &[T], separator: &str)
	where
		T: Display,
	{
		if values.is_empty() {
			return;
		}

		let joined =
			values.iter().map(ToString::to_string).collect::<Vec<_>>().join(separator);

		self.0.push((name, joined));
	}

	pub(crate) fn push_date(
		&mut self,
		name: &'static str,
		value: Option<OffsetDateTime>,
	) -> Result<()> {
		if let Some(value) = value {
			self.0.push((name, format_date(value)?));
		}

		Ok(())
	}

	pub(crate) fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub(crate) fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(name, value)| (*name, value.as_str()))
	}

	#[cfg(test)]
	pub(crate) fn get(&self, name: &str) -> Option<&str> {
		self.0.iter().find(|(n, _)| *n == name).map(|(_, value)| value.as_str())
	}
}

/// Formats an instant as UTC ISO-8601 with a millisecond fraction.
pub fn format_date(instant: OffsetDateTime) -> Result<String> {
	instant
		.to_offset(UtcOffset::UTC)
		.format(DATE_FORMAT)
		.map_err(|e| Error::invalid_request(format!("date {instant} cannot be formatted: {e}")))
}

pub(crate) fn ensure_exclusive<A, B>(
	a: &Option<A>,
	b: &Option<B>,
	a_name: &str,
	b_name: &str,
) -> Result<()> {
	if a.is_some() && b.is_some() {
		Err(Error::invalid_request(format!("`{a_name}` and `{b_name}` are mutually exclusive")))
	} else {
		Ok(())
	}
}
