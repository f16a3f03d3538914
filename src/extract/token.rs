//! Token extraction strategies, polymorphic over the provider's response shape.

// std
use std::sync::LazyLock;
// crates.io
use regex::Regex;
// self
use crate::{
	_prelude::*,
	error::ExtractionError,
	model::{Token, param},
};

static OAUTH_TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"oauth_token=([^&]+)").expect("OAuth token pattern should compile.")
});
static OAUTH_TOKEN_SECRET_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"oauth_token_secret=([^&]*)").expect("OAuth token secret pattern should compile.")
});
static FORM_ACCESS_TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"access_token=([^&]+)").expect("Access token pattern should compile.")
});
static JSON_ACCESS_TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r#""access_token"\s*:\s*"(\S*?)""#).expect("JSON token pattern should compile.")
});

/// Parses a raw response body into a [`Token`].
///
/// Extractors are stateless and safe for concurrent use; malformed or empty input
/// fails with an extraction error carrying the verbatim response, never a crash.
pub trait TokenExtractor: Send + Sync {
	/// Extracts a token from the contents of a provider response.
	fn extract(&self, response: &str) -> Result<Token>;
}

fn check_response(response: &str) -> Result<(), ExtractionError> {
	if response.is_empty() { Err(ExtractionError::EmptyResponse) } else { Ok(()) }
}

/// OAuth 1.0a extractor for form-encoded bodies carrying `oauth_token` and
/// `oauth_token_secret`; both values are percent-decoded.
#[derive(Clone, Copy, Debug, Default)]
pub struct UrlEncodedTokenExtractor;
impl TokenExtractor for UrlEncodedTokenExtractor {
	fn extract(&self, response: &str) -> Result<Token> {
		check_response(response)?;

		let token = OAUTH_TOKEN_PATTERN
			.captures(response)
			.and_then(|captures| captures.get(1))
			.ok_or_else(|| ExtractionError::TokenNotFound { response: response.to_owned() })?;
		let secret = OAUTH_TOKEN_SECRET_PATTERN
			.captures(response)
			.and_then(|captures| captures.get(1))
			.ok_or_else(|| ExtractionError::SecretNotFound { response: response.to_owned() })?;
		let token = param::decode(token.as_str()).map_err(ExtractionError::from)?;
		let secret = param::decode(secret.as_str()).map_err(ExtractionError::from)?;

		Ok(Token::new(token, secret).with_raw_response(response))
	}
}

/// OAuth 2.0 extractor for form-encoded bodies carrying `access_token`; the
/// resulting token has an empty secret.
#[derive(Clone, Copy, Debug, Default)]
pub struct UrlEncodedAccessTokenExtractor;
impl TokenExtractor for UrlEncodedAccessTokenExtractor {
	fn extract(&self, response: &str) -> Result<Token> {
		check_response(response)?;

		let token = FORM_ACCESS_TOKEN_PATTERN
			.captures(response)
			.and_then(|captures| captures.get(1))
			.ok_or_else(|| ExtractionError::TokenNotFound { response: response.to_owned() })?;
		let token = param::decode(token.as_str()).map_err(ExtractionError::from)?;

		Ok(Token::new(token, "").with_raw_response(response))
	}
}

/// OAuth 2.0 extractor for JSON bodies, matching `"access_token":"..."` by pattern.
///
/// Provider-specific variants are composed, not subclassed: an optional secondary
/// field (e.g. an OpenID identity token) is pulled by an additional pattern and left
/// absent, rather than failing, when the provider omits it.
#[derive(Clone, Debug, Default)]
pub struct JsonTokenExtractor {
	extra_field: Option<&'static str>,
}
impl JsonTokenExtractor {
	/// Creates the plain JSON extractor.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns a variant that also pulls the named string field into [`Token::extra`].
	pub fn with_extra_field(field: &'static str) -> Self {
		Self { extra_field: Some(field) }
	}
}
impl TokenExtractor for JsonTokenExtractor {
	fn extract(&self, response: &str) -> Result<Token> {
		check_response(response)?;

		let token = JSON_ACCESS_TOKEN_PATTERN
			.captures(response)
			.and_then(|captures| captures.get(1))
			.ok_or_else(|| ExtractionError::TokenNotFound { response: response.to_owned() })?
			.as_str()
			.to_owned();
		let mut extracted = Token::new(token, "").with_raw_response(response);

		if let Some(field) = self.extra_field {
			let pattern = Regex::new(&format!(r#""{}"\s*:\s*"([^"]*)""#, regex::escape(field)))
				.expect("Extra field pattern should compile.");

			if let Some(value) = pattern.captures(response).and_then(|captures| captures.get(1)) {
				extracted = extracted.with_extra(value.as_str());
			}
		}

		Ok(extracted)
	}
}
