//! Signed, short-lived credentials proving the caller's identity to the token endpoint.

// crates.io
use jsonwebtoken::{Algorithm, EncodingKey, Header};
// self
use crate::{_prelude::*, auth::Principal, error::SigningError};

/// Lifetime of every minted credential.
pub const CREDENTIAL_LIFETIME: Duration = Duration::minutes(30);

/// Claim set carried by a credential.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialClaims {
	/// Issuer; the principal's team identifier.
	pub iss: String,
	/// Issued-at instant as Unix seconds.
	pub iat: i64,
	/// Expiry instant as Unix seconds.
	pub exp: i64,
}

/// ES256-signed assertion exchanged for an access token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
	assertion: String,
	expires_at: OffsetDateTime,
}
impl Credential {
	/// Returns the compact JWS string. Callers must avoid logging it.
	pub fn expose(&self) -> &str {
		&self.assertion
	}

	/// Instant after which the token endpoint rejects the credential.
	pub fn expires_at(&self) -> OffsetDateTime {
		self.expires_at
	}
}
impl Debug for Credential {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credential")
			.field("assertion", &"<redacted>")
			.field("expires_at", &self.expires_at)
			.finish()
	}
}

/// Produces credentials for a fixed [`Principal`].
///
/// Minting is a pure function of the principal and the supplied instant; the key is parsed on
/// every call so that malformed material fails the refresh attempt that uses it.
#[derive(Clone, Debug)]
pub struct CredentialMinter {
	principal: Arc<Principal>,
}
impl CredentialMinter {
	/// Creates a minter for `principal`.
	pub fn new(principal: impl Into<Arc<Principal>>) -> Self {
		Self { principal: principal.into() }
	}

	/// Returns the principal credentials are minted for.
	pub fn principal(&self) -> &Principal {
		&self.principal
	}

	/// Mints a credential issued at `now` and valid for [`CREDENTIAL_LIFETIME`].
	pub fn mint(&self, now: OffsetDateTime) -> Result<Credential, SigningError> {
		let key = EncodingKey::from_ec_pem(self.principal.private_key.expose())
			.map_err(|e| SigningError::InvalidKey { source: Arc::new(e) })?;
		let mut header = Header::new(Algorithm::ES256);

		header.kid = Some(self.principal.key_id.to_string());
		header.typ = Some("JWT".into());

		let expires_at = now + CREDENTIAL_LIFETIME;
		let claims = CredentialClaims {
			iss: self.principal.team_id.to_string(),
			iat: now.unix_timestamp(),
			exp: expires_at.unix_timestamp(),
		};
		let assertion = jsonwebtoken::encode(&header, &claims, &key)
			.map_err(|e| SigningError::Sign { source: Arc::new(e) })?;

		Ok(Credential { assertion, expires_at })
	}
}
