//! Client configuration: API server, principal, and transport timeout.

// std
use std::{net::IpAddr, time::Duration as StdDuration};
// crates.io
use url::Host;
// self
use crate::{
	_prelude::*,
	auth::{KeyId, Principal, PrivateKey, TeamId},
	error::ConfigError,
	http::DEFAULT_TIMEOUT,
};

/// Production Apple Maps Server API base URL.
pub const DEFAULT_API_SERVER: &str = "https://maps-api.apple.com/";

/// Environment variable holding the developer team identifier.
pub const ENV_TEAM_ID: &str = "APPLE_MAPS_TEAM_ID";
/// Environment variable holding the key identifier.
pub const ENV_KEY_ID: &str = "APPLE_MAPS_KEY_ID";
/// Environment variable holding the private key (PEM, `\n`-escaped PEM, or base64 PEM).
pub const ENV_PRIVATE_KEY: &str = "APPLE_MAPS_PRIVATE_KEY";
/// Environment variable pointing at a private key file; consulted when the key itself is unset.
pub const ENV_PRIVATE_KEY_PATH: &str = "APPLE_MAPS_PRIVATE_KEY_PATH";
/// Environment variable overriding the API server.
pub const ENV_API_SERVER: &str = "APPLE_MAPS_API_SERVER";
/// Environment variable overriding the per-request timeout, in seconds.
pub const ENV_TIMEOUT_SECS: &str = "APPLE_MAPS_TIMEOUT_SECS";

/// Validated configuration consumed by [`MapsClient`](crate::client::MapsClient).
#[derive(Clone, Debug)]
pub struct ClientConfig {
	/// Base URL of the API server; always ends in `/`.
	pub api_server: Url,
	/// Identity used to mint credentials.
	pub principal: Principal,
	/// Per-request timeout applied by the default transport.
	pub timeout: StdDuration,
}
impl ClientConfig {
	/// Creates a new builder.
	pub fn builder() -> ClientConfigBuilder {
		ClientConfigBuilder::default()
	}

	/// Loads the configuration from the process environment.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	/// Loads the configuration through `lookup`, which maps variable names to values.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
		let team_id = read(ENV_TEAM_ID).ok_or(ConfigError::Missing { name: ENV_TEAM_ID })?;
		let key_id = read(ENV_KEY_ID).ok_or(ConfigError::Missing { name: ENV_KEY_ID })?;
		let private_key = match (read(ENV_PRIVATE_KEY), read(ENV_PRIVATE_KEY_PATH)) {
			(Some(text), _) => PrivateKey::from_text(&text)?,
			(None, Some(path)) => {
				let text = std::fs::read_to_string(&path)
					.map_err(|source| ConfigError::ReadPrivateKey { path, source })?;

				PrivateKey::from_text(&text)?
			},
			(None, None) => return Err(ConfigError::Missing { name: ENV_PRIVATE_KEY }),
		};
		let mut builder =
			Self::builder().team_id(team_id).key_id(key_id).private_key(private_key);

		if let Some(api_server) = read(ENV_API_SERVER) {
			let url = Url::parse(api_server.trim())
				.map_err(|source| ConfigError::InvalidApiServer { source })?;

			builder = builder.api_server(url);
		}
		if let Some(timeout) = read(ENV_TIMEOUT_SECS) {
			let secs = timeout
				.trim()
				.parse::<u64>()
				.ok()
				.filter(|secs| *secs > 0)
				.ok_or(ConfigError::InvalidTimeout { name: ENV_TIMEOUT_SECS })?;

			builder = builder.timeout(StdDuration::from_secs(secs));
		}

		builder.build()
	}
}

/// Builder for [`ClientConfig`] values.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
	team_id: Option<String>,
	key_id: Option<String>,
	private_key: Option<PrivateKey>,
	principal: Option<Principal>,
	api_server: Option<Url>,
	timeout: Option<StdDuration>,
}
impl ClientConfigBuilder {
	/// Sets the developer team identifier.
	pub fn team_id(mut self, team_id: impl Into<String>) -> Self {
		self.team_id = Some(team_id.into());

		self
	}

	/// Sets the key identifier.
	pub fn key_id(mut self, key_id: impl Into<String>) -> Self {
		self.key_id = Some(key_id.into());

		self
	}

	/// Sets the private key.
	pub fn private_key(mut self, private_key: PrivateKey) -> Self {
		self.private_key = Some(private_key);

		self
	}

	/// Supplies a pre-built principal, taking precedence over the individual parts.
	pub fn principal(mut self, principal: Principal) -> Self {
		self.principal = Some(principal);

		self
	}

	/// Overrides the API server (defaults to [`DEFAULT_API_SERVER`]).
	pub fn api_server(mut self, url: Url) -> Self {
		self.api_server = Some(url);

		self
	}

	/// Overrides the per-request timeout (defaults to 30 seconds).
	pub fn timeout(mut self, timeout: StdDuration) -> Self {
		self.timeout = Some(timeout);

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<ClientConfig, ConfigError> {
		let principal = match self.principal {
			Some(principal) => principal,
			None => Principal::new(
				TeamId::new(self.team_id.ok_or(ConfigError::Missing { name: "team_id" })?)?,
				KeyId::new(self.key_id.ok_or(ConfigError::Missing { name: "key_id" })?)?,
				self.private_key.ok_or(ConfigError::Missing { name: "private_key" })?,
			),
		};
		let api_server = match self.api_server {
			Some(url) => url,
			None => Url::parse(DEFAULT_API_SERVER)
				.map_err(|source| ConfigError::InvalidApiServer { source })?,
		};
		let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);

		if timeout.is_zero() {
			return Err(ConfigError::InvalidTimeout { name: "timeout" });
		}

		Ok(ClientConfig { api_server: normalize_api_server(api_server)?, principal, timeout })
	}
}

fn normalize_api_server(mut url: Url) -> Result<Url, ConfigError> {
	if url.cannot_be_a_base() {
		return Err(ConfigError::CannotBeABase { url: url.to_string() });
	}

	match url.scheme() {
		"https" => {},
		"http" if is_loopback(&url) => {},
		_ => return Err(ConfigError::InsecureApiServer { url: url.to_string() }),
	}

	if !url.path().ends_with('/') {
		let path = format!("{}/", url.path());

		url.set_path(&path);
	}

	url.set_query(None);
	url.set_fragment(None);

	Ok(url)
}

fn is_loopback(url: &Url) -> bool {
	match url.host() {
		Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
		Some(Host::Ipv4(ip)) => IpAddr::V4(ip).is_loopback(),
		Some(Host::Ipv6(ip)) => IpAddr::V6(ip).is_loopback(),
		None => false,
	}
}
