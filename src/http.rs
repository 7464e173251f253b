//! Transport primitives for the token endpoint and the Maps API.
//!
//! [`MapsHttpClient`] is the crate's only dependency on an HTTP stack. Requests and responses are
//! plain [`http`] values carrying byte bodies, so custom transports (or test doubles) only need to
//! turn one into the other.

// std
use std::{ops::Deref, time::Duration as StdDuration};
// self
use crate::_prelude::*;

/// Outbound request handed to a [`MapsHttpClient`].
pub type HttpRequest = http::Request<Vec<u8>>;
/// Response returned by a [`MapsHttpClient`].
pub type HttpResponse = http::Response<Vec<u8>>;
/// Boxed future returned by [`MapsHttpClient::execute`].
pub type HttpFuture<'a, E> = Pin<Box<dyn Future<Output = Result<HttpResponse, E>> + 'a + Send>>;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: StdDuration = StdDuration::from_secs(30);

/// Abstraction over HTTP transports capable of issuing a request and returning its status,
/// headers, and body.
///
/// Implementations must be `Send + Sync + 'static` so one transport can be shared between the
/// token broker and the API client, and the returned futures must be `Send` so broker refreshes
/// can hop executors.
pub trait MapsHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Executes `request`, resolving once the full body is available.
	///
	/// Non-success statuses are not errors at this layer; only failures to obtain a response are.
	fn execute(&self, request: HttpRequest) -> HttpFuture<'_, Self::TransportError>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone)]
pub struct ReqwestHttpClient {
	client: ReqwestClient,
	timeout: StdDuration,
}
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self { client, timeout: DEFAULT_TIMEOUT }
	}

	/// Overrides the per-request timeout (defaults to 30 seconds).
	pub fn with_timeout(mut self, timeout: StdDuration) -> Self {
		self.timeout = timeout;

		self
	}

	/// Returns the per-request timeout.
	pub fn timeout(&self) -> StdDuration {
		self.timeout
	}
}
#[cfg(feature = "reqwest")]
impl Default for ReqwestHttpClient {
	fn default() -> Self {
		Self::with_client(ReqwestClient::default())
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.client
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.client
	}
}
#[cfg(feature = "reqwest")]
impl Debug for ReqwestHttpClient {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ReqwestHttpClient").field("timeout", &self.timeout).finish()
	}
}
#[cfg(feature = "reqwest")]
impl MapsHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn execute(&self, request: HttpRequest) -> HttpFuture<'_, Self::TransportError> {
		let client = self.client.clone();
		let timeout = self.timeout;

		Box::pin(async move {
			let mut request = reqwest::Request::try_from(request)?;

			*request.timeout_mut() = Some(timeout);

			let response = client.execute(request).await?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let mut response_new = HttpResponse::new(response.bytes().await?.to_vec());

			*response_new.status_mut() = status;
			*response_new.headers_mut() = headers;

			Ok(response_new)
		})
	}
}
