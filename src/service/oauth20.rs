//! The OAuth 2.0 authorization-code flow.

// self
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpTransport;
use crate::{
	_prelude::*,
	http::HttpTransport,
	model::{OAuthConfig, OAuthRequest, Token, Verifier, consts},
	obs::{ExchangeSpan, ExchangeStage},
	provider::OAuth20Profile,
};

const FLOW: &str = "oauth2.0";

/// OAuth 2.0 service: authorization URL, code-for-token exchange, and request signing.
///
/// The flow carries no request-token leg and no cryptographic signature; the client
/// secret travels as an ordinary parameter over TLS and the access token is attached
/// by the profile's request-signing strategy.
#[derive(Clone)]
pub struct OAuth20Service<T>
where
	T: HttpTransport,
{
	config: OAuthConfig,
	profile: Arc<dyn OAuth20Profile>,
	transport: Arc<T>,
}
#[cfg(feature = "reqwest")]
impl OAuth20Service<ReqwestHttpTransport> {
	/// Creates a service with a transport built from the config's timeouts.
	pub fn new(config: OAuthConfig, profile: Arc<dyn OAuth20Profile>) -> Result<Self> {
		let transport = ReqwestHttpTransport::from_config(&config)?;

		Ok(Self::with_transport(config, profile, transport))
	}
}
impl<T> OAuth20Service<T>
where
	T: HttpTransport,
{
	/// Creates a service over a caller-supplied transport.
	pub fn with_transport(config: OAuthConfig, profile: Arc<dyn OAuth20Profile>, transport: T) -> Self {
		Self { config, profile, transport: Arc::new(transport) }
	}

	/// Returns the protocol version implemented by this service.
	pub const fn version(&self) -> &'static str {
		"2.0"
	}

	/// The URL the user visits to grant authorization.
	pub fn authorization_url(&self) -> String {
		self.profile.authorization_url(&self.config)
	}

	/// Trades the authorization code for an access token.
	///
	/// Parameters ride in the body for POST exchanges and in the querystring for GET
	/// ones; the grant type defaults to `authorization_code` when the config leaves
	/// it unset.
	pub async fn access_token(&self, code: &Verifier) -> Result<Token> {
		let span = ExchangeSpan::new(FLOW, ExchangeStage::AccessToken);

		span.instrument(async {
			let mut request = OAuthRequest::new(
				self.profile.access_token_verb(),
				self.profile.access_token_endpoint(),
			);

			request.add_parameter(consts::CLIENT_ID, self.config.api_key());
			request.add_parameter(consts::CLIENT_SECRET, self.config.api_secret().expose());
			request.add_parameter(consts::CODE, code.value());
			request.add_parameter(consts::REDIRECT_URI, self.config.callback());

			if let Some(scope) = self.config.scope() {
				request.add_parameter(consts::SCOPE, scope);
			}

			request.add_parameter(
				consts::GRANT_TYPE,
				self.config.grant_type().unwrap_or(consts::AUTHORIZATION_CODE),
			);

			let response = self.transport.execute(&request).await?;

			self.profile.access_token_extractor().extract(&response.body)
		})
		.await
	}

	/// Attaches the access token to a resource request via the profile's strategy.
	pub fn sign_request(&self, access_token: &Token, request: &mut OAuthRequest) -> Result<()> {
		let _guard = ExchangeSpan::new(FLOW, ExchangeStage::SignRequest).entered();

		self.profile.request_signer().sign(&self.config, access_token, request)
	}
}
impl<T> Debug for OAuth20Service<T>
where
	T: HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("OAuth20Service").field("config", &self.config).finish()
	}
}
