//! Token and verifier value objects handed between the engine and the caller.

// self
use crate::{_prelude::*, error::PreconditionError};

/// Redacted token secret wrapper keeping sensitive material out of logs.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSecret(String);
impl TokenSecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner secret. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for TokenSecret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("TokenSecret").field(&"<redacted>").finish()
	}
}
impl Display for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// An OAuth token (request or access), immutable once extracted.
///
/// OAuth 2.0 tokens carry an empty secret, never an absent one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
	token: String,
	secret: TokenSecret,
	raw_response: Option<String>,
	extra: Option<String>,
}
impl Token {
	/// Creates a token from its value and secret.
	pub fn new(token: impl Into<String>, secret: impl Into<String>) -> Self {
		Self { token: token.into(), secret: TokenSecret::new(secret), raw_response: None, extra: None }
	}

	/// The empty token used to sign exchanges that happen before any token exists.
	pub fn empty() -> Self {
		Self::new("", "")
	}

	/// Attaches the verbatim provider response the token was extracted from.
	pub fn with_raw_response(mut self, raw_response: impl Into<String>) -> Self {
		self.raw_response = Some(raw_response.into());

		self
	}

	/// Attaches a provider-specific extra field (e.g. an OpenID identity token).
	pub fn with_extra(mut self, extra: impl Into<String>) -> Self {
		self.extra = Some(extra.into());

		self
	}

	/// Returns the token value.
	pub fn token(&self) -> &str {
		&self.token
	}

	/// Returns the token secret (empty when the protocol omits it).
	pub fn secret(&self) -> &TokenSecret {
		&self.secret
	}

	/// Returns the verbatim response body the token was extracted from, when known.
	pub fn raw_response(&self) -> Option<&str> {
		self.raw_response.as_deref()
	}

	/// Returns the provider-specific extra field, when present.
	pub fn extra(&self) -> Option<&str> {
		self.extra.as_deref()
	}
}

/// User-supplied proof: the OAuth 1.0a verifier or the OAuth 2.0 authorization code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Verifier(String);
impl Verifier {
	/// Creates a verifier after rejecting empty input.
	pub fn new(value: impl Into<String>) -> Result<Self, PreconditionError> {
		let value = value.into();

		if value.is_empty() {
			return Err(PreconditionError::EmptyInput { what: "Verifier" });
		}

		Ok(Self(value))
	}

	/// Returns the verifier value.
	pub fn value(&self) -> &str {
		&self.0
	}
}
impl TryFrom<String> for Verifier {
	type Error = PreconditionError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}
impl From<Verifier> for String {
	fn from(value: Verifier) -> Self {
		value.0
	}
}
