//! Private key material and the principal it belongs to.

// crates.io
use base64::{Engine, engine::general_purpose::STANDARD};
// self
use crate::{
	_prelude::*,
	auth::{KeyId, TeamId},
	error::ConfigError,
};

const PEM_PREFIX: &str = "-----BEGIN";

/// PKCS#8 PEM text of the Maps private key (`AuthKey_<KEY_ID>.p8`).
///
/// The text is not parsed here; a malformed key surfaces as a signing failure the first time a
/// credential is minted.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey(String);
impl PrivateKey {
	/// Wraps PEM text as-is.
	pub fn new(pem: impl Into<String>) -> Self {
		Self(pem.into())
	}

	/// Accepts PEM text, PEM with literal `\n` escapes (common in environment variables), or
	/// base64 of the PEM document.
	pub fn from_text(text: &str) -> Result<Self, ConfigError> {
		let trimmed = text.trim();

		if trimmed.starts_with(PEM_PREFIX) {
			return Ok(Self::new(trimmed.replace("\\n", "\n")));
		}

		let decoded = STANDARD
			.decode(trimmed.as_bytes())
			.map_err(|_| ConfigError::UnreadablePrivateKey)?;
		let pem = String::from_utf8(decoded).map_err(|_| ConfigError::UnreadablePrivateKey)?;

		if pem.trim_start().starts_with(PEM_PREFIX) {
			Ok(Self::new(pem))
		} else {
			Err(ConfigError::UnreadablePrivateKey)
		}
	}

	/// Returns the PEM bytes. Callers must avoid logging them.
	pub fn expose(&self) -> &[u8] {
		self.0.as_bytes()
	}
}
impl Debug for PrivateKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("PrivateKey").field(&"<redacted>").finish()
	}
}

/// The (team id, key id, private key) triple identifying the API consumer.
///
/// Immutable once constructed; the broker only reads it to mint credentials.
#[derive(Clone, Debug)]
pub struct Principal {
	/// Developer team identifier.
	pub team_id: TeamId,
	/// Identifier of the private key.
	pub key_id: KeyId,
	/// Private key material.
	pub private_key: PrivateKey,
}
impl Principal {
	/// Creates a principal from its parts.
	pub fn new(team_id: TeamId, key_id: KeyId, private_key: PrivateKey) -> Self {
		Self { team_id, key_id, private_key }
	}
}
