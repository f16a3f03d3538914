//! The OAuth 1.0a three-legged flow.
//!
//! The service is a thin orchestrator: the profile supplies endpoints and strategy
//! choices, the clock supplies timestamps and nonces, extractors canonicalize and
//! sign, and the transport moves bytes. It holds no mutable state and a single
//! instance may drive any number of concurrent handshakes.

// self
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpTransport;
use crate::{
	_prelude::*,
	clock::{SystemTimestampService, TimestampService},
	extract::{extract_base_string, extract_header},
	http::HttpTransport,
	model::{OAuthConfig, OAuthRequest, SignaturePlacement, Token, Verifier, consts},
	obs::{ExchangeSpan, ExchangeStage},
	provider::OAuth10aProfile,
};

const FLOW: &str = "oauth1.0a";

/// OAuth 1.0a service: request token, user authorization URL, access token, and
/// request signing.
#[derive(Clone)]
pub struct OAuth10aService<T>
where
	T: HttpTransport,
{
	config: OAuthConfig,
	profile: Arc<dyn OAuth10aProfile>,
	transport: Arc<T>,
	clock: Arc<dyn TimestampService>,
}
#[cfg(feature = "reqwest")]
impl OAuth10aService<ReqwestHttpTransport> {
	/// Creates a service with a transport built from the config's timeouts.
	pub fn new(config: OAuthConfig, profile: Arc<dyn OAuth10aProfile>) -> Result<Self> {
		let transport = ReqwestHttpTransport::from_config(&config)?;

		Ok(Self::with_transport(config, profile, transport))
	}
}
impl<T> OAuth10aService<T>
where
	T: HttpTransport,
{
	/// Creates a service over a caller-supplied transport.
	pub fn with_transport(config: OAuthConfig, profile: Arc<dyn OAuth10aProfile>, transport: T) -> Self {
		Self {
			config,
			profile,
			transport: Arc::new(transport),
			clock: Arc::new(SystemTimestampService),
		}
	}

	/// Replaces the timestamp/nonce source.
	pub fn with_clock(mut self, clock: Arc<dyn TimestampService>) -> Self {
		self.clock = clock;

		self
	}

	/// Returns the protocol version implemented by this service.
	pub const fn version(&self) -> &'static str {
		"1.0"
	}

	/// First leg: obtains a request token from the provider.
	///
	/// The `oauth_callback` parameter is part of the signed material, so it is added
	/// before the signature is computed. The request-token exchange signs with an
	/// empty token secret.
	pub async fn request_token(&self) -> Result<Token> {
		let span = ExchangeSpan::new(FLOW, ExchangeStage::RequestToken);

		span.instrument(async {
			let mut request = OAuthRequest::new(
				self.profile.request_token_verb(),
				self.profile.request_token_endpoint(),
			);

			request.add_oauth_parameter(consts::CALLBACK, self.config.callback())?;
			self.add_oauth_parameters(&mut request, &Token::empty())?;
			self.append_signature(&mut request)?;

			let response = self.transport.execute(&request).await?;

			self.profile.request_token_extractor().extract(&response.body)
		})
		.await
	}

	/// Second leg: the URL the user visits to authorize the request token.
	pub fn authorization_url(&self, request_token: &Token) -> String {
		self.profile.authorization_url(request_token)
	}

	/// Third leg: trades the authorized request token plus verifier for an access token.
	pub async fn access_token(&self, request_token: &Token, verifier: &Verifier) -> Result<Token> {
		let span = ExchangeSpan::new(FLOW, ExchangeStage::AccessToken);

		span.instrument(async {
			let mut request = OAuthRequest::new(
				self.profile.access_token_verb(),
				self.profile.access_token_endpoint(),
			);

			request.add_oauth_parameter(consts::TOKEN, request_token.token())?;
			request.add_oauth_parameter(consts::VERIFIER, verifier.value())?;
			self.add_oauth_parameters(&mut request, request_token)?;
			self.append_signature(&mut request)?;

			let response = self.transport.execute(&request).await?;

			self.profile.access_token_extractor().extract(&response.body)
		})
		.await
	}

	/// Signs an arbitrary resource request with the access token.
	pub fn sign_request(&self, access_token: &Token, request: &mut OAuthRequest) -> Result<()> {
		let _guard = ExchangeSpan::new(FLOW, ExchangeStage::SignRequest).entered();

		request.add_oauth_parameter(consts::TOKEN, access_token.token())?;
		self.add_oauth_parameters(request, access_token)?;
		self.append_signature(request)
	}

	// Adds the protocol parameters, then computes and adds the signature keyed on the
	// given token's secret.
	fn add_oauth_parameters(&self, request: &mut OAuthRequest, token: &Token) -> Result<()> {
		let signature_service = self.profile.signature_service();

		request.add_oauth_parameter(consts::TIMESTAMP, self.clock.timestamp_in_seconds())?;
		request.add_oauth_parameter(consts::NONCE, self.clock.nonce())?;
		request.add_oauth_parameter(consts::CONSUMER_KEY, self.config.api_key())?;
		request.add_oauth_parameter(consts::SIGN_METHOD, signature_service.method())?;
		request.add_oauth_parameter(consts::VERSION, self.version())?;

		if let Some(scope) = self.config.scope() {
			request.add_oauth_parameter(consts::SCOPE, scope)?;
		}

		let base_string = extract_base_string(request)?;
		let signature = signature_service.signature(
			&base_string,
			self.config.api_secret().expose(),
			token.secret().expose(),
		)?;

		request.add_oauth_parameter(consts::SIGNATURE, signature)?;

		Ok(())
	}

	// Attaches the completed OAuth namespace where the config says it belongs.
	fn append_signature(&self, request: &mut OAuthRequest) -> Result<()> {
		match self.config.signature_placement() {
			SignaturePlacement::Header => {
				let header = extract_header(request)?;

				request.add_header(consts::HEADER, header);
			},
			SignaturePlacement::QueryString =>
				for parameter in request.oauth_parameters().params().to_vec() {
					request.add_querystring_parameter(parameter.key, parameter.value);
				},
		}

		Ok(())
	}
}
impl<T> Debug for OAuth10aService<T>
where
	T: HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("OAuth10aService").field("config", &self.config).finish()
	}
}
