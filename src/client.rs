//! Apple Maps Server API client.
//!
//! Every operation validates its options, obtains a valid token from the [`TokenBroker`], and
//! sends one authorized `GET`. A token failure is reported as [`Error::Auth`] and no API request
//! is sent.

mod geocoding;
mod places;
mod routing;
mod search;

// crates.io
use http::{StatusCode, header::ACCEPT};
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	broker::{HttpTokenExchanger, TokenBroker},
	config::ClientConfig,
	error::{ConfigError, DecodeError, RemoteError, TransportError},
	ext::{BearerSigner, RequestSignerExt},
	http::MapsHttpClient,
	model::Query,
	obs::{self, Operation},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestMapsClient = MapsClient<ReqwestHttpClient>;

/// Typed client for the Apple Maps Server API.
///
/// The client owns its transport and a [`TokenBroker`]; clones share both, so one token serves
/// every clone and every concurrent call.
pub struct MapsClient<C>
where
	C: ?Sized + MapsHttpClient,
{
	http_client: Arc<C>,
	api_server: Url,
	broker: TokenBroker,
}
impl<C> MapsClient<C>
where
	C: ?Sized + MapsHttpClient,
{
	/// Creates a client that reuses the caller-provided transport for token exchanges and API
	/// calls alike.
	pub fn with_http_client(config: ClientConfig, http_client: impl Into<Arc<C>>) -> Result<Self> {
		let http_client = http_client.into();
		let exchanger = <HttpTokenExchanger<C>>::new(http_client.clone(), &config.api_server)?;
		let broker = TokenBroker::new(config.principal, exchanger);

		Ok(Self { http_client, api_server: config.api_server, broker })
	}

	/// Replaces the token broker, e.g. to share one broker between clients or to inject a
	/// custom exchanger or clock.
	pub fn with_broker(mut self, broker: TokenBroker) -> Self {
		self.broker = broker;

		self
	}

	/// Returns the token broker.
	pub fn broker(&self) -> &TokenBroker {
		&self.broker
	}

	/// Returns the API server base URL.
	pub fn api_server(&self) -> &Url {
		&self.api_server
	}

	fn endpoint(&self, path: &str, query: &Query) -> Result<Url> {
		let mut url = self
			.api_server
			.join(path.trim_start_matches('/'))
			.map_err(|source| ConfigError::InvalidApiServer { source })?;

		if !query.is_empty() {
			url.query_pairs_mut().extend_pairs(query.pairs());
		}

		Ok(url)
	}

	async fn get<T>(&self, operation: Operation, endpoint: &'static str, url: Url) -> Result<T>
	where
		T: DeserializeOwned,
	{
		obs::observe(operation, endpoint, async move {
			let token = self.broker.valid_token().await?;
			let request = http::Request::get(url.as_str())
				.header(ACCEPT, "application/json")
				.body(Vec::new())
				.map_err(ConfigError::from)?;
			let request = BearerSigner.attach_token(request, &token)?;
			let response = self
				.http_client
				.execute(request)
				.await
				.map_err(|e| TransportError::network(endpoint, e))?;
			let status = response.status();

			if status != StatusCode::OK {
				return Err(RemoteError::from_body(status.as_u16(), response.body()).into());
			}

			Ok(DecodeError::decode(endpoint, status.as_u16(), response.body())?)
		})
		.await
	}
}
#[cfg(feature = "reqwest")]
impl MapsClient<ReqwestHttpClient> {
	/// Creates a client backed by a fresh reqwest transport honoring `config.timeout`.
	pub fn new(config: ClientConfig) -> Result<Self> {
		let client = ReqwestClient::builder().build().map_err(ConfigError::from)?;
		let http_client = ReqwestHttpClient::with_client(client).with_timeout(config.timeout);

		Self::with_http_client(config, http_client)
	}

	/// Creates a client configured from the `APPLE_MAPS_*` environment variables.
	pub fn from_env() -> Result<Self> {
		Self::new(ClientConfig::from_env()?)
	}
}
impl<C> Clone for MapsClient<C>
where
	C: ?Sized + MapsHttpClient,
{
	fn clone(&self) -> Self {
		Self {
			http_client: self.http_client.clone(),
			api_server: self.api_server.clone(),
			broker: self.broker.clone(),
		}
	}
}
impl<C> Debug for MapsClient<C>
where
	C: ?Sized + MapsHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("MapsClient")
			.field("api_server", &self.api_server.as_str())
			.field("broker", &self.broker)
			.finish()
	}
}
