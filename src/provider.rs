//! Provider profiles: the closed interface the engine consumes instead of any
//! provider's concrete identity.
//!
//! A profile is pure data plus factory calls: endpoint URLs, verb choices, and the
//! extractor/signature/signer variants to use. Profiles never perform network I/O.
//! Per-provider behavior is composed by building [`StaticProfile10a`] /
//! [`StaticProfile20`] values (a registry of values instead of a class hierarchy)
//! or, for deeper quirks, by implementing the traits directly.

// self
use crate::{
	_prelude::*,
	ext::{QuerystringTokenSigner, RequestSigner},
	extract::{JsonTokenExtractor, TokenExtractor, UrlEncodedAccessTokenExtractor,
		UrlEncodedTokenExtractor},
	model::{OAuthConfig, ParameterList, Token, Verb, consts, param},
	signature::{HmacSha1SignatureService, SignatureService},
};

/// OAuth 1.0a provider profile consumed by the three-legged service.
pub trait OAuth10aProfile: Send + Sync {
	/// Endpoint the request-token exchange is sent to.
	fn request_token_endpoint(&self) -> String;

	/// Endpoint the access-token exchange is sent to.
	fn access_token_endpoint(&self) -> String;

	/// URL the user visits to authorize the request token; pure string construction.
	fn authorization_url(&self, request_token: &Token) -> String;

	/// Verb for the request-token exchange.
	fn request_token_verb(&self) -> Verb {
		Verb::Post
	}

	/// Verb for the access-token exchange.
	fn access_token_verb(&self) -> Verb {
		Verb::Post
	}

	/// Signature algorithm the provider expects.
	fn signature_service(&self) -> Arc<dyn SignatureService> {
		Arc::new(HmacSha1SignatureService)
	}

	/// Extractor for request-token response bodies.
	fn request_token_extractor(&self) -> Arc<dyn TokenExtractor> {
		Arc::new(UrlEncodedTokenExtractor)
	}

	/// Extractor for access-token response bodies.
	fn access_token_extractor(&self) -> Arc<dyn TokenExtractor> {
		Arc::new(UrlEncodedTokenExtractor)
	}
}

/// OAuth 2.0 provider profile consumed by the two-step service.
pub trait OAuth20Profile: Send + Sync {
	/// Endpoint the code-for-token exchange is sent to.
	fn access_token_endpoint(&self) -> String;

	/// URL the user visits to grant authorization; pure string construction.
	fn authorization_url(&self, config: &OAuthConfig) -> String;

	/// Verb for the access-token exchange.
	fn access_token_verb(&self) -> Verb {
		Verb::Get
	}

	/// Extractor for access-token response bodies.
	fn access_token_extractor(&self) -> Arc<dyn TokenExtractor> {
		Arc::new(UrlEncodedAccessTokenExtractor)
	}

	/// Strategy that attaches an access token to outbound requests.
	///
	/// The default adds the token as an `access_token` querystring parameter;
	/// providers override the seam to use a bearer header, a renamed parameter, or a
	/// bespoke derived signature.
	fn request_signer(&self) -> Arc<dyn RequestSigner> {
		Arc::new(QuerystringTokenSigner::default())
	}
}

/// Registry-style OAuth 1.0a profile value.
#[derive(Clone)]
pub struct StaticProfile10a {
	request_token_endpoint: String,
	access_token_endpoint: String,
	authorization_base_url: String,
	request_token_verb: Verb,
	access_token_verb: Verb,
	signature_service: Arc<dyn SignatureService>,
	token_extractor: Arc<dyn TokenExtractor>,
}
impl StaticProfile10a {
	/// Creates a profile from its three endpoint URLs.
	pub fn new(
		request_token_endpoint: impl Into<String>,
		access_token_endpoint: impl Into<String>,
		authorization_base_url: impl Into<String>,
	) -> Self {
		Self {
			request_token_endpoint: request_token_endpoint.into(),
			access_token_endpoint: access_token_endpoint.into(),
			authorization_base_url: authorization_base_url.into(),
			request_token_verb: Verb::Post,
			access_token_verb: Verb::Post,
			signature_service: Arc::new(HmacSha1SignatureService),
			token_extractor: Arc::new(UrlEncodedTokenExtractor),
		}
	}

	/// Overrides the verb used for both token exchanges.
	pub fn with_verb(mut self, verb: Verb) -> Self {
		self.request_token_verb = verb;
		self.access_token_verb = verb;

		self
	}

	/// Overrides the signature algorithm.
	pub fn with_signature_service(mut self, service: Arc<dyn SignatureService>) -> Self {
		self.signature_service = service;

		self
	}

	/// Overrides the token extractor used for both exchanges.
	pub fn with_token_extractor(mut self, extractor: Arc<dyn TokenExtractor>) -> Self {
		self.token_extractor = extractor;

		self
	}
}
impl OAuth10aProfile for StaticProfile10a {
	fn request_token_endpoint(&self) -> String {
		self.request_token_endpoint.clone()
	}

	fn access_token_endpoint(&self) -> String {
		self.access_token_endpoint.clone()
	}

	fn authorization_url(&self, request_token: &Token) -> String {
		let separator = if self.authorization_base_url.contains('?') { '&' } else { '?' };

		format!(
			"{}{}{}={}",
			self.authorization_base_url,
			separator,
			consts::TOKEN,
			param::encode(request_token.token()),
		)
	}

	fn request_token_verb(&self) -> Verb {
		self.request_token_verb
	}

	fn access_token_verb(&self) -> Verb {
		self.access_token_verb
	}

	fn signature_service(&self) -> Arc<dyn SignatureService> {
		self.signature_service.clone()
	}

	fn request_token_extractor(&self) -> Arc<dyn TokenExtractor> {
		self.token_extractor.clone()
	}

	fn access_token_extractor(&self) -> Arc<dyn TokenExtractor> {
		self.token_extractor.clone()
	}
}
impl Debug for StaticProfile10a {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("StaticProfile10a")
			.field("request_token_endpoint", &self.request_token_endpoint)
			.field("access_token_endpoint", &self.access_token_endpoint)
			.field("authorization_base_url", &self.authorization_base_url)
			.finish()
	}
}

/// Registry-style OAuth 2.0 profile value.
#[derive(Clone)]
pub struct StaticProfile20 {
	access_token_endpoint: String,
	authorization_base_url: String,
	access_token_verb: Verb,
	token_extractor: Arc<dyn TokenExtractor>,
	request_signer: Arc<dyn RequestSigner>,
}
impl StaticProfile20 {
	/// Creates a profile from its two endpoint URLs.
	pub fn new(
		access_token_endpoint: impl Into<String>,
		authorization_base_url: impl Into<String>,
	) -> Self {
		Self {
			access_token_endpoint: access_token_endpoint.into(),
			authorization_base_url: authorization_base_url.into(),
			access_token_verb: Verb::Get,
			token_extractor: Arc::new(UrlEncodedAccessTokenExtractor),
			request_signer: Arc::new(QuerystringTokenSigner::default()),
		}
	}

	/// Overrides the access-token exchange verb.
	pub fn with_access_token_verb(mut self, verb: Verb) -> Self {
		self.access_token_verb = verb;

		self
	}

	/// Switches the token extractor to the JSON pattern variant.
	pub fn with_json_extractor(mut self) -> Self {
		self.token_extractor = Arc::new(JsonTokenExtractor::new());

		self
	}

	/// Overrides the token extractor.
	pub fn with_token_extractor(mut self, extractor: Arc<dyn TokenExtractor>) -> Self {
		self.token_extractor = extractor;

		self
	}

	/// Overrides the request-signing strategy.
	pub fn with_request_signer(mut self, signer: Arc<dyn RequestSigner>) -> Self {
		self.request_signer = signer;

		self
	}
}
impl OAuth20Profile for StaticProfile20 {
	fn access_token_endpoint(&self) -> String {
		self.access_token_endpoint.clone()
	}

	fn authorization_url(&self, config: &OAuthConfig) -> String {
		let mut params = ParameterList::new();

		params.add(consts::CLIENT_ID, config.api_key());
		params.add(consts::REDIRECT_URI, config.callback());

		if let Some(scope) = config.scope() {
			params.add(consts::SCOPE, scope);
		}
		if let Some(state) = config.state() {
			params.add(consts::STATE, state);
		}

		params.append_to(&self.authorization_base_url)
	}

	fn access_token_verb(&self) -> Verb {
		self.access_token_verb
	}

	fn access_token_extractor(&self) -> Arc<dyn TokenExtractor> {
		self.token_extractor.clone()
	}

	fn request_signer(&self) -> Arc<dyn RequestSigner> {
		self.request_signer.clone()
	}
}
impl Debug for StaticProfile20 {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("StaticProfile20")
			.field("access_token_endpoint", &self.access_token_endpoint)
			.field("authorization_base_url", &self.authorization_base_url)
			.finish()
	}
}
