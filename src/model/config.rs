//! Immutable application credentials and signing policy.

// self
use crate::{_prelude::*, error::PreconditionError, model::consts, model::token::TokenSecret};

/// Where the computed OAuth 1.0a signature is attached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignaturePlacement {
	/// `Authorization: OAuth ...` header (protocol default).
	#[default]
	Header,
	/// Every OAuth parameter injected into the querystring.
	QueryString,
}

/// Immutable application credentials plus signing policy, validated at construction.
///
/// The engine requires the api key and secret to be non-empty and does not re-validate
/// them per call. The callback defaults to the out-of-band sentinel `"oob"`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OAuthConfig {
	api_key: String,
	api_secret: TokenSecret,
	callback: String,
	signature_placement: SignaturePlacement,
	scope: Option<String>,
	state: Option<String>,
	grant_type: Option<String>,
	connect_timeout: Option<Duration>,
	read_timeout: Option<Duration>,
}
impl OAuthConfig {
	/// Creates a config, failing fast on an empty api key or secret.
	pub fn new(
		api_key: impl Into<String>,
		api_secret: impl Into<String>,
	) -> Result<Self, PreconditionError> {
		let api_key = api_key.into();
		let api_secret = api_secret.into();

		if api_key.is_empty() {
			return Err(PreconditionError::EmptyApiKey);
		}
		if api_secret.is_empty() {
			return Err(PreconditionError::EmptyApiSecret);
		}

		Ok(Self {
			api_key,
			api_secret: TokenSecret::new(api_secret),
			callback: consts::OUT_OF_BAND.to_owned(),
			signature_placement: SignaturePlacement::default(),
			scope: None,
			state: None,
			grant_type: None,
			connect_timeout: None,
			read_timeout: None,
		})
	}

	/// Sets the callback URL (replaces the out-of-band sentinel).
	pub fn with_callback(mut self, callback: impl Into<String>) -> Self {
		self.callback = callback.into();

		self
	}

	/// Overrides the signature placement.
	pub fn with_signature_placement(mut self, placement: SignaturePlacement) -> Self {
		self.signature_placement = placement;

		self
	}

	/// Sets the requested scope.
	pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
		self.scope = Some(scope.into());

		self
	}

	/// Sets the anti-forgery state echoed through the 2.0 authorization redirect.
	pub fn with_state(mut self, state: impl Into<String>) -> Self {
		self.state = Some(state.into());

		self
	}

	/// Overrides the 2.0 grant type (defaults to `authorization_code` when unset).
	pub fn with_grant_type(mut self, grant_type: impl Into<String>) -> Self {
		self.grant_type = Some(grant_type.into());

		self
	}

	/// Sets the transport connect timeout.
	pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
		self.connect_timeout = Some(timeout);

		self
	}

	/// Sets the transport read timeout.
	pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
		self.read_timeout = Some(timeout);

		self
	}

	/// Returns the api key.
	pub fn api_key(&self) -> &str {
		&self.api_key
	}

	/// Returns the api secret.
	pub fn api_secret(&self) -> &TokenSecret {
		&self.api_secret
	}

	/// Returns the callback URL or the out-of-band sentinel.
	pub fn callback(&self) -> &str {
		&self.callback
	}

	/// Returns the configured signature placement.
	pub fn signature_placement(&self) -> SignaturePlacement {
		self.signature_placement
	}

	/// Returns the requested scope, when set.
	pub fn scope(&self) -> Option<&str> {
		self.scope.as_deref()
	}

	/// Returns the anti-forgery state, when set.
	pub fn state(&self) -> Option<&str> {
		self.state.as_deref()
	}

	/// Returns the configured grant type, when set.
	pub fn grant_type(&self) -> Option<&str> {
		self.grant_type.as_deref()
	}

	/// Returns the transport connect timeout, when set.
	pub fn connect_timeout(&self) -> Option<Duration> {
		self.connect_timeout
	}

	/// Returns the transport read timeout, when set.
	pub fn read_timeout(&self) -> Option<Duration> {
		self.read_timeout
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::error::PreconditionError;

	#[test]
	fn construction_validates_credentials() {
		assert!(matches!(OAuthConfig::new("", "secret"), Err(PreconditionError::EmptyApiKey)));
		assert!(matches!(OAuthConfig::new("key", ""), Err(PreconditionError::EmptyApiSecret)));

		let config = OAuthConfig::new("key", "secret").expect("Config should build.");

		assert_eq!(config.api_key(), "key");
		assert_eq!(config.api_secret().expose(), "secret");
		assert_eq!(config.callback(), consts::OUT_OF_BAND);
		assert_eq!(config.signature_placement(), SignaturePlacement::Header);
		assert!(config.grant_type().is_none());
	}

	#[test]
	fn setters_override_defaults() {
		let config = OAuthConfig::new("key", "secret")
			.expect("Config should build.")
			.with_callback("https://app.example.com/callback")
			.with_signature_placement(SignaturePlacement::QueryString)
			.with_scope("feeds")
			.with_state("xyzzy")
			.with_grant_type("client_credentials")
			.with_read_timeout(Duration::from_secs(5));

		assert_eq!(config.callback(), "https://app.example.com/callback");
		assert_eq!(config.signature_placement(), SignaturePlacement::QueryString);
		assert_eq!(config.scope(), Some("feeds"));
		assert_eq!(config.state(), Some("xyzzy"));
		assert_eq!(config.grant_type(), Some("client_credentials"));
		assert_eq!(config.read_timeout(), Some(Duration::from_secs(5)));
	}
}
