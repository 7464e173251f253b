//! Request signing contracts that attach access tokens to arbitrary HTTP requests.

// crates.io
use http::{HeaderValue, header::AUTHORIZATION};
// self
use crate::{_prelude::*, auth::AccessToken, error::ConfigError, http::HttpRequest};

/// Describes how to attach an [`AccessToken`] to an outbound request without constraining the
/// HTTP client type.
pub trait RequestSignerExt<Request, Error>
where
	Self: Send + Sync,
{
	/// Consumes the provided request and injects authorization state derived from `token`.
	fn attach_token(&self, request: Request, token: &AccessToken) -> Result<Request, Error>;
}

/// Signer that sets `Authorization: Bearer {token}`, replacing any existing value.
#[derive(Clone, Copy, Debug, Default)]
pub struct BearerSigner;
impl BearerSigner {
	/// Builds a sensitive `Bearer` header value.
	pub fn header_value(secret: &str) -> Result<HeaderValue, http::header::InvalidHeaderValue> {
		let mut value = HeaderValue::from_str(&format!("Bearer {secret}"))?;

		value.set_sensitive(true);

		Ok(value)
	}
}
impl RequestSignerExt<HttpRequest, Error> for BearerSigner {
	fn attach_token(&self, mut request: HttpRequest, token: &AccessToken) -> Result<HttpRequest> {
		let value = Self::header_value(token.expose())
			.map_err(|e| ConfigError::HttpRequest(http::Error::from(e)))?;

		request.headers_mut().insert(AUTHORIZATION, value);

		Ok(request)
	}
}
