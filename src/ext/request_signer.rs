//! Request-signing strategies for OAuth 2.0 resource calls.
//!
//! The generic protocol only needs the access token attached somewhere; providers
//! disagree on where. Each strategy here is a value a profile returns from
//! [`request_signer`](crate::provider::OAuth20Profile::request_signer), replacing a
//! service subclass per provider with an injected signing function.

// std
use std::collections::BTreeMap;
// crates.io
use md5::{Digest, Md5};
// self
use crate::{
	_prelude::*,
	error::PreconditionError,
	model::{OAuthConfig, OAuthRequest, Token, consts, param},
};

/// Attaches an access token (and any provider-specific proof) to an outbound request.
pub trait RequestSigner: Send + Sync {
	/// Mutates the request so the provider accepts it as authenticated.
	///
	/// Must not mutate the token; the engine guarantees the request is not aliased.
	fn sign(
		&self,
		config: &OAuthConfig,
		access_token: &Token,
		request: &mut OAuthRequest,
	) -> Result<()>;
}

/// Default strategy: the token travels as a querystring parameter.
#[derive(Clone, Debug)]
pub struct QuerystringTokenSigner {
	parameter: String,
}
impl QuerystringTokenSigner {
	/// Uses a provider-specific parameter name instead of `access_token`.
	pub fn with_parameter(parameter: impl Into<String>) -> Self {
		Self { parameter: parameter.into() }
	}
}
impl Default for QuerystringTokenSigner {
	fn default() -> Self {
		Self::with_parameter(consts::ACCESS_TOKEN)
	}
}
impl RequestSigner for QuerystringTokenSigner {
	fn sign(
		&self,
		_config: &OAuthConfig,
		access_token: &Token,
		request: &mut OAuthRequest,
	) -> Result<()> {
		request.add_querystring_parameter(self.parameter.clone(), access_token.token());

		Ok(())
	}
}

/// Strategy for providers expecting `Authorization: Bearer <token>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BearerHeaderSigner;
impl RequestSigner for BearerHeaderSigner {
	fn sign(
		&self,
		_config: &OAuthConfig,
		access_token: &Token,
		request: &mut OAuthRequest,
	) -> Result<()> {
		request.add_header(consts::HEADER, format!("Bearer {}", access_token.token()));

		Ok(())
	}
}

/// Provider-specific derived-signature strategy: signs the canonicalized querystring
/// with the application secret via a keyed MD5 checksum and attaches the digest as an
/// extra parameter.
///
/// This is a documented provider deviation, not part of the generic protocol; the
/// algorithm is preserved exactly as the provider specifies it and must not be
/// generalized. Steps: attach the session and application parameters, sort the
/// complete querystring by key (later duplicates win), concatenate `k=v` pairs with
/// no separator, URL-decode the concatenation once, append the api secret, MD5-hex
/// the result.
#[derive(Clone, Debug)]
pub struct ChecksumQuerystringSigner {
	session_parameter: String,
	application_parameter: String,
	digest_parameter: String,
}
impl ChecksumQuerystringSigner {
	/// Creates the signer with the provider's parameter names.
	pub fn new(
		session_parameter: impl Into<String>,
		application_parameter: impl Into<String>,
		digest_parameter: impl Into<String>,
	) -> Self {
		Self {
			session_parameter: session_parameter.into(),
			application_parameter: application_parameter.into(),
			digest_parameter: digest_parameter.into(),
		}
	}
}
impl Default for ChecksumQuerystringSigner {
	fn default() -> Self {
		Self::new("session_key", "app_id", "sig")
	}
}
impl RequestSigner for ChecksumQuerystringSigner {
	fn sign(
		&self,
		config: &OAuthConfig,
		access_token: &Token,
		request: &mut OAuthRequest,
	) -> Result<()> {
		request.add_querystring_parameter(self.session_parameter.clone(), access_token.token());
		request.add_querystring_parameter(self.application_parameter.clone(), config.api_key());

		let complete_url = request.complete_url();
		let Some((_, querystring)) = complete_url.split_once('?') else {
			return Ok(());
		};
		let mut sorted = BTreeMap::new();

		for pair in querystring.split('&') {
			// A second raw `=` truncates the value, it is not part of it.
			let mut parts = pair.split('=');
			let key = parts.next().unwrap_or_default();
			let value = parts.next().unwrap_or_default();

			sorted.insert(key.to_owned(), value.to_owned());
		}

		let concatenated =
			sorted.into_iter().map(|(key, value)| format!("{key}={value}")).collect::<String>();
		let decoded = param::decode(&concatenated)
			.map_err(|_| PreconditionError::UndecodableQuerystring { url: complete_url.clone() })?;
		let source = format!("{decoded}{}", config.api_secret().expose());
		let digest = Md5::new_with_prefix(source.as_bytes()).finalize();
		let digest = digest.iter().map(|byte| format!("{byte:02x}")).collect::<String>();

		request.add_querystring_parameter(self.digest_parameter.clone(), digest);

		Ok(())
	}
}
