//! Access token lifecycle helpers and the token endpoint payload.

// self
use crate::{
	_prelude::*,
	auth::token::secret::TokenSecret,
	error::AuthError,
};

/// Safety margin subtracted from a token's declared expiry when deciding staleness.
pub const EXPIRATION_BUFFER: Duration = Duration::seconds(10);

/// Body of a successful `GET /v1/token` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
	/// Bearer token value.
	pub access_token: String,
	/// Lifetime of the token in seconds, counted from receipt.
	pub expires_in_seconds: i64,
}

/// Lifecycle status of an [`AccessToken`] at a given instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenStatus {
	/// Usable; outside the expiration buffer.
	Valid,
	/// Still accepted by the server but inside the expiration buffer; refresh before use.
	Stale,
	/// Past the server-declared expiry.
	Expired,
}

/// Bearer token issued by the token endpoint.
///
/// `issued_expiry` is computed once, at receipt, and never recomputed. Validity checks compare
/// against the wall clock as supplied; a clock that moves backwards simply extends validity.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
	/// Bearer value; callers must avoid logging it.
	pub value: TokenSecret,
	/// Lifetime declared by the server.
	pub expires_in: Duration,
	/// Instant the response was received.
	pub received_at: OffsetDateTime,
	/// Absolute server-side expiry (`received_at + expires_in`).
	pub issued_expiry: OffsetDateTime,
}
impl AccessToken {
	/// Converts a token endpoint payload into a token received at `received_at`.
	pub fn from_response(
		response: TokenResponse,
		received_at: OffsetDateTime,
	) -> Result<Self, AuthError> {
		if response.expires_in_seconds <= 0 {
			return Err(AuthError::NonPositiveExpiresIn {
				expires_in: response.expires_in_seconds,
			});
		}

		let expires_in = Duration::seconds(response.expires_in_seconds);
		let issued_expiry = received_at.checked_add(expires_in).ok_or(
			AuthError::ExpiresInOutOfRange { expires_in: response.expires_in_seconds },
		)?;

		Ok(Self {
			value: TokenSecret::new(response.access_token),
			expires_in,
			received_at,
			issued_expiry,
		})
	}

	/// Returns the bearer value. Callers must avoid logging it.
	pub fn expose(&self) -> &str {
		self.value.expose()
	}

	/// Computes the lifecycle status at a given instant.
	pub fn status_at(&self, instant: OffsetDateTime) -> TokenStatus {
		if instant >= self.issued_expiry {
			TokenStatus::Expired
		} else if instant >= self.issued_expiry - EXPIRATION_BUFFER {
			TokenStatus::Stale
		} else {
			TokenStatus::Valid
		}
	}

	/// Returns `true` iff `instant < issued_expiry - EXPIRATION_BUFFER`.
	pub fn is_valid_at(&self, instant: OffsetDateTime) -> bool {
		matches!(self.status_at(instant), TokenStatus::Valid)
	}

	/// Convenience helper that checks validity using the current UTC instant.
	pub fn is_valid(&self) -> bool {
		self.is_valid_at(OffsetDateTime::now_utc())
	}

	/// Time left before the token turns stale, clamped at zero.
	pub fn remaining_at(&self, instant: OffsetDateTime) -> Duration {
		let remaining = self.issued_expiry - EXPIRATION_BUFFER - instant;

		if remaining.is_negative() { Duration::ZERO } else { remaining }
	}
}
impl Debug for AccessToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AccessToken")
			.field("value", &"<redacted>")
			.field("expires_in", &self.expires_in)
			.field("received_at", &self.received_at)
			.field("issued_expiry", &self.issued_expiry)
			.finish()
	}
}
