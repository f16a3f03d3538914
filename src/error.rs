//! Engine-level error types shared across models, extractors, and services.

// self
use crate::{_prelude::*, model::request::Verb};

/// Engine-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical engine error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Invalid or missing required input, detected before any I/O.
	#[error(transparent)]
	Precondition(#[from] PreconditionError),
	/// Extraction or signing was attempted on a request that carries zero OAuth parameters.
	///
	/// Distinct from a generic precondition failure because it identifies the offending
	/// request for diagnostics.
	#[error("Request carries no OAuth parameters: {verb} {url}.")]
	ParametersMissing {
		/// HTTP verb of the offending request.
		verb: Verb,
		/// URL of the offending request.
		url: String,
	},
	/// Response body does not match the expected token pattern.
	#[error(transparent)]
	Extraction(#[from] ExtractionError),
	/// Underlying cryptographic computation failed.
	#[error(transparent)]
	Signature(#[from] SignatureError),
	/// Transport-level failure (DNS, TLS, timeout, I/O).
	#[error(transparent)]
	Connection(#[from] ConnectionError),
}

/// Invalid-argument failures raised before the engine performs any I/O.
#[derive(Debug, ThisError)]
pub enum PreconditionError {
	/// Api key must be a non-empty string.
	#[error("Api key cannot be null or empty.")]
	EmptyApiKey,
	/// Api secret must be a non-empty string.
	#[error("Api secret cannot be null or empty.")]
	EmptyApiSecret,
	/// A required input string was empty.
	#[error("{what} cannot be null or empty.")]
	EmptyInput {
		/// Which input failed validation.
		what: &'static str,
	},
	/// OAuth namespace purity: only `oauth_`-prefixed keys (plus `scope`) are accepted.
	#[error("OAuth parameters must have the `oauth_` prefix: {key}.")]
	NonOAuthParameter {
		/// Key that was rejected.
		key: String,
	},
	/// Request URL cannot be parsed.
	#[error("Request URL is malformed: {url}.")]
	InvalidUrl {
		/// URL that failed to parse.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Request URL carries a querystring that cannot be percent-decoded.
	#[error("Request URL carries an undecodable querystring: {url}.")]
	UndecodableQuerystring {
		/// URL whose querystring failed to decode.
		url: String,
	},
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
}
impl PreconditionError {
	/// Wraps a transport's builder failure inside [`PreconditionError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}

/// Token extraction failures; every variant carries the raw response text for debugging.
#[derive(Debug, ThisError)]
pub enum ExtractionError {
	/// Response body was empty.
	#[error("Cannot extract a token from a null or empty response.")]
	EmptyResponse,
	/// Token value was not found in the response body.
	#[error("Cannot extract token. Response was: {response}.")]
	TokenNotFound {
		/// Verbatim response body.
		response: String,
	},
	/// Token secret was not found in the response body.
	#[error("Cannot extract token secret. Response was: {response}.")]
	SecretNotFound {
		/// Verbatim response body.
		response: String,
	},
	/// A percent-encoded value in the response could not be decoded.
	#[error(transparent)]
	Decode(#[from] crate::model::param::ParameterDecodeError),
}

/// Signature computation failures; carries the base string that failed to sign.
#[derive(Debug, ThisError)]
pub enum SignatureError {
	/// Api secret was empty when a signature was requested.
	#[error("Api secret cannot be null or empty. Base string was: {base_string}.")]
	EmptySecret {
		/// Base string that failed to sign.
		base_string: String,
	},
	/// The keyed digest could not be computed.
	#[error("Failed to compute the signature. Base string was: {base_string}.")]
	Digest {
		/// Base string that failed to sign.
		base_string: String,
		/// Underlying digest failure.
		#[source]
		source: hmac::digest::InvalidLength,
	},
}

/// Transport-level failures (network, IO); never silently swallowed.
#[derive(Debug, ThisError)]
pub enum ConnectionError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while sending the request.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while sending the request.")]
	Io(#[from] std::io::Error),
}
impl ConnectionError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConnectionError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
