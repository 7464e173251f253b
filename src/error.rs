//! Client-level error types shared across the broker, transport, and API operations.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;
type SharedError = Arc<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Access token acquisition failed; no API request was sent.
	#[error(transparent)]
	Auth(#[from] AuthError),
	/// The Maps API answered with a non-success status.
	#[error(transparent)]
	Api(#[from] RemoteError),
	/// Transport failure (DNS, TCP, TLS, timeout).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// The Maps API returned a body that does not match the expected schema.
	#[error(transparent)]
	Decode(#[from] DecodeError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),

	/// Request options violate an API constraint.
	#[error("Request is invalid: {reason}.")]
	InvalidRequest {
		/// Human-readable constraint that was violated.
		reason: String,
	},
	/// Search requests only accept result type filters that name concrete results.
	#[error("Search result type `{result_type}` is only supported by autocomplete requests.")]
	InvalidSearchResultType {
		/// Offending result type label.
		result_type: &'static str,
	},
	/// An address could not be resolved to a coordinate.
	#[error("No places were found for address `{address}`.")]
	NoPlacesFound {
		/// Address that produced no usable geocoding result.
		address: String,
	},
}
impl Error {
	pub(crate) fn invalid_request(reason: impl Into<String>) -> Self {
		Self::InvalidRequest { reason: reason.into() }
	}
}

/// Failure to obtain a valid access token.
///
/// The type is cheap to clone so a single refresh outcome can be handed to every caller waiting
/// on it.
#[derive(Clone, Debug, ThisError)]
pub enum AuthError {
	/// Credential minting failed.
	#[error(transparent)]
	Signing(#[from] SigningError),
	/// The token endpoint rejected the credential.
	#[error(transparent)]
	Remote(#[from] RemoteError),
	/// The token endpoint could not be reached.
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// The token endpoint returned an unreadable payload.
	#[error(transparent)]
	Decode(#[from] DecodeError),
	/// The token endpoint returned a non-positive lifetime.
	#[error("Token endpoint returned a non-positive expiresInSeconds value: {expires_in}.")]
	NonPositiveExpiresIn {
		/// Raw lifetime reported by the endpoint.
		expires_in: i64,
	},
	/// The token endpoint returned a lifetime that does not fit the calendar.
	#[error("Token endpoint returned an out-of-range expiresInSeconds value: {expires_in}.")]
	ExpiresInOutOfRange {
		/// Raw lifetime reported by the endpoint.
		expires_in: i64,
	},
	/// The refresh panicked; the broker discarded it and stays usable.
	#[error("Token refresh panicked.")]
	RefreshPanicked,
	/// Request construction for the token endpoint failed.
	#[error("Token request could not be constructed.")]
	Request {
		/// Underlying builder failure.
		#[source]
		source: SharedError,
	},
}
impl AuthError {
	pub(crate) fn request(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Request { source: Arc::new(src) }
	}
}

/// Credential minting failures. Fatal for the refresh attempt that triggered them.
#[derive(Clone, Debug, ThisError)]
pub enum SigningError {
	/// The private key is not a parsable PKCS#8 EC PEM document.
	#[error("Private key material is malformed.")]
	InvalidKey {
		/// Underlying key parsing failure.
		#[source]
		source: Arc<jsonwebtoken::errors::Error>,
	},
	/// The signer rejected the key or the claim set.
	#[error("Credential could not be signed.")]
	Sign {
		/// Underlying signing failure.
		#[source]
		source: Arc<jsonwebtoken::errors::Error>,
	},
}

/// Non-success response from the Maps API or its token endpoint.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub struct RemoteError {
	/// HTTP status code.
	pub status: u16,
	/// Server-provided diagnostic message.
	pub message: Option<String>,
	/// Server-provided detail strings.
	pub details: Vec<String>,
}
impl RemoteError {
	/// Creates an error carrying only the HTTP status.
	pub fn from_status(status: u16) -> Self {
		Self { status, message: None, details: Vec::new() }
	}

	/// Builds an error from a response body, tolerating both the flat and the `{"error": ...}`
	/// wrapped payload shapes.
	pub fn from_body(status: u16, body: &[u8]) -> Self {
		#[derive(Deserialize)]
		struct Payload {
			message: Option<String>,
			#[serde(default)]
			details: Option<Vec<String>>,
		}
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum Shape {
			Wrapped { error: Payload },
			Flat(Payload),
		}

		match serde_json::from_slice::<Shape>(body) {
			Ok(Shape::Wrapped { error: payload } | Shape::Flat(payload)) => Self {
				status,
				message: payload.message,
				details: payload.details.unwrap_or_default(),
			},
			Err(_) => Self::from_status(status),
		}
	}
}
impl Display for RemoteError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Apple Maps returned status {}", self.status)?;

		if let Some(message) = &self.message {
			write!(f, ": {message}")?;
		}
		if !self.details.is_empty() {
			f.write_str(" [")?;

			for (idx, detail) in self.details.iter().enumerate() {
				if idx > 0 {
					f.write_str(", ")?;
				}

				write!(f, "\"{detail}\"")?;
			}

			f.write_str("]")?;
		}

		f.write_str(".")
	}
}

/// Transport-level failures (network, TLS, timeouts).
#[derive(Clone, Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling {endpoint}.")]
	Network {
		/// Path of the endpoint being called.
		endpoint: String,
		/// Transport-specific network error.
		#[source]
		source: SharedError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(
		endpoint: impl Into<String>,
		src: impl 'static + Send + Sync + std::error::Error,
	) -> Self {
		Self::Network { endpoint: endpoint.into(), source: Arc::new(src) }
	}
}

/// Response body did not match the expected JSON schema.
#[derive(Clone, Debug, ThisError)]
#[error("Response from {endpoint} could not be decoded at `{}`.", .source.path())]
pub struct DecodeError {
	/// Path of the endpoint that produced the body.
	pub endpoint: String,
	/// HTTP status code of the response.
	pub status: u16,
	/// Structured parsing failure, including the JSON path.
	#[source]
	pub source: Arc<serde_path_to_error::Error<serde_json::Error>>,
}
impl DecodeError {
	/// Decodes `body` into `T`, recording the JSON path of any failure.
	pub fn decode<T>(endpoint: &str, status: u16, body: &[u8]) -> Result<T, Self>
	where
		T: serde::de::DeserializeOwned,
	{
		let mut de = serde_json::Deserializer::from_slice(body);

		serde_path_to_error::deserialize(&mut de).map_err(|source| Self {
			endpoint: endpoint.to_owned(),
			status,
			source: Arc::new(source),
		})
	}
}

/// Configuration and validation failures raised while building a client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] http::Error),
	/// An identifier failed validation.
	#[error(transparent)]
	InvalidIdentifier(#[from] crate::auth::IdentifierError),
	/// The API server URL cannot be parsed.
	#[error("API server URL is invalid.")]
	InvalidApiServer {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// The API server must use HTTPS outside of loopback hosts.
	#[error("The API server must use HTTPS: {url}.")]
	InsecureApiServer {
		/// URL that failed validation.
		url: String,
	},
	/// The API server URL cannot carry path segments.
	#[error("The API server URL cannot be used as a base: {url}.")]
	CannotBeABase {
		/// URL that failed validation.
		url: String,
	},
	/// A required setting was not provided.
	#[error("Missing required setting `{name}`.")]
	Missing {
		/// Setting or environment variable name.
		name: &'static str,
	},
	/// The private key text is neither PEM nor base64-encoded PEM.
	#[error("Private key is neither PEM nor base64-encoded PEM.")]
	UnreadablePrivateKey,
	/// The private key file could not be read.
	#[error("Private key file `{path}` could not be read.")]
	ReadPrivateKey {
		/// Path that failed to load.
		path: String,
		/// Underlying IO failure.
		#[source]
		source: std::io::Error,
	},
	/// A numeric setting could not be parsed.
	#[error("Setting `{name}` must be a positive number of seconds.")]
	InvalidTimeout {
		/// Setting or environment variable name.
		name: &'static str,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}
