//! Optional observability helpers for broker refreshes and API operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `apple_maps_kit.operation` with the
//!   `operation` and `stage` (call site) fields.
//! - Enable `metrics` to increment the `apple_maps_kit_operation_total` counter for every
//!   attempt/success/failure, labeled by `operation` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Operations observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
	/// Credential mint + token exchange.
	TokenRefresh,
	/// Forward geocoding.
	Geocode,
	/// Reverse geocoding.
	ReverseGeocode,
	/// Place search.
	Search,
	/// Search autocomplete.
	SearchAutocomplete,
	/// Directions.
	Directions,
	/// Estimated times of arrival.
	Eta,
	/// Single or batch place lookup.
	Place,
	/// Alternate place identifier lookup.
	AlternatePlaceIds,
}
impl Operation {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Operation::TokenRefresh => "token_refresh",
			Operation::Geocode => "geocode",
			Operation::ReverseGeocode => "reverse_geocode",
			Operation::Search => "search",
			Operation::SearchAutocomplete => "search_autocomplete",
			Operation::Directions => "directions",
			Operation::Eta => "eta",
			Operation::Place => "place",
			Operation::AlternatePlaceIds => "alternate_place_ids",
		}
	}
}
impl Display for Operation {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationOutcome {
	/// Entry to an operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl OperationOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OperationOutcome::Attempt => "attempt",
			OperationOutcome::Success => "success",
			OperationOutcome::Failure => "failure",
		}
	}
}
impl Display for OperationOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Runs `fut` inside an operation span, recording attempt and outcome counters around it.
pub(crate) async fn observe<T, E, Fut>(
	operation: Operation,
	stage: &'static str,
	fut: Fut,
) -> Result<T, E>
where
	Fut: Future<Output = Result<T, E>>,
{
	let span = OperationSpan::new(operation, stage);

	record_operation_outcome(operation, OperationOutcome::Attempt);

	let result = span.instrument(fut).await;

	match &result {
		Ok(_) => record_operation_outcome(operation, OperationOutcome::Success),
		Err(_) => record_operation_outcome(operation, OperationOutcome::Failure),
	}

	result
}
