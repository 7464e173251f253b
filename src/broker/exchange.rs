//! Token endpoint collaborator: trades a signed credential for an access token.

// crates.io
use http::{
	StatusCode,
	header::{ACCEPT, AUTHORIZATION},
};
// self
use crate::{
	_prelude::*,
	auth::{Credential, TokenResponse},
	error::{AuthError, ConfigError, DecodeError, RemoteError, TransportError},
	ext::BearerSigner,
	http::MapsHttpClient,
};

/// Path of the token endpoint relative to the API server.
pub const TOKEN_ENDPOINT: &str = "/v1/token";

/// Boxed future returned by [`TokenExchanger::exchange`].
pub type ExchangeFuture<'a> =
	Pin<Box<dyn Future<Output = Result<TokenResponse, AuthError>> + 'a + Send>>;

/// Exchanges a credential for a token payload.
///
/// The broker never retries an exchange; implementations should not either.
pub trait TokenExchanger
where
	Self: 'static + Send + Sync,
{
	/// Performs one exchange round-trip.
	fn exchange<'a>(&'a self, credential: &'a Credential) -> ExchangeFuture<'a>;
}

/// [`TokenExchanger`] that calls `GET {api_server}/v1/token` with the credential as a bearer.
pub struct HttpTokenExchanger<C>
where
	C: ?Sized + MapsHttpClient,
{
	http_client: Arc<C>,
	token_url: Url,
}
impl<C> HttpTokenExchanger<C>
where
	C: ?Sized + MapsHttpClient,
{
	/// Creates an exchanger for the API server at `api_server` (a base URL ending in `/`).
	pub fn new(http_client: impl Into<Arc<C>>, api_server: &Url) -> Result<Self, ConfigError> {
		let token_url = api_server
			.join(TOKEN_ENDPOINT.trim_start_matches('/'))
			.map_err(|source| ConfigError::InvalidApiServer { source })?;

		Ok(Self { http_client: http_client.into(), token_url })
	}

	/// Returns the resolved token endpoint URL.
	pub fn token_url(&self) -> &Url {
		&self.token_url
	}
}
impl<C> TokenExchanger for HttpTokenExchanger<C>
where
	C: ?Sized + MapsHttpClient,
{
	fn exchange<'a>(&'a self, credential: &'a Credential) -> ExchangeFuture<'a> {
		Box::pin(async move {
			let authorization =
				BearerSigner::header_value(credential.expose()).map_err(AuthError::request)?;
			let request = http::Request::get(self.token_url.as_str())
				.header(AUTHORIZATION, authorization)
				.header(ACCEPT, "application/json")
				.body(Vec::new())
				.map_err(AuthError::request)?;
			let response = self
				.http_client
				.execute(request)
				.await
				.map_err(|e| TransportError::network(TOKEN_ENDPOINT, e))?;
			let status = response.status();

			if status != StatusCode::OK {
				return Err(RemoteError::from_body(status.as_u16(), response.body()).into());
			}

			Ok(DecodeError::decode(TOKEN_ENDPOINT, status.as_u16(), response.body())?)
		})
	}
}
impl<C> Debug for HttpTokenExchanger<C>
where
	C: ?Sized + MapsHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("HttpTokenExchanger").field("token_url", &self.token_url.as_str()).finish()
	}
}
