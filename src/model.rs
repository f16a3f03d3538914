//! Value objects shared by both protocol engines: parameter collections, requests,
//! tokens, and configuration.

pub mod config;
pub mod param;
pub mod request;
pub mod token;

pub use config::*;
pub use param::*;
pub use request::*;
pub use token::*;

/// Protocol parameter names used across both OAuth versions.
pub mod consts {
	/// OAuth 1.0a timestamp parameter.
	pub const TIMESTAMP: &str = "oauth_timestamp";
	/// OAuth 1.0a signature method parameter.
	pub const SIGN_METHOD: &str = "oauth_signature_method";
	/// OAuth 1.0a signature parameter.
	pub const SIGNATURE: &str = "oauth_signature";
	/// OAuth 1.0a consumer key parameter.
	pub const CONSUMER_KEY: &str = "oauth_consumer_key";
	/// OAuth 1.0a callback parameter.
	pub const CALLBACK: &str = "oauth_callback";
	/// OAuth 1.0a version parameter.
	pub const VERSION: &str = "oauth_version";
	/// OAuth 1.0a nonce parameter.
	pub const NONCE: &str = "oauth_nonce";
	/// OAuth 1.0a token parameter.
	pub const TOKEN: &str = "oauth_token";
	/// OAuth 1.0a token secret parameter.
	pub const TOKEN_SECRET: &str = "oauth_token_secret";
	/// OAuth 1.0a verifier parameter.
	pub const VERIFIER: &str = "oauth_verifier";
	/// Scope parameter, shared by both protocol versions.
	pub const SCOPE: &str = "scope";
	/// Out-of-band callback sentinel for clients that cannot receive redirects.
	pub const OUT_OF_BAND: &str = "oob";
	/// Header that carries the OAuth signature or a bearer token.
	pub const HEADER: &str = "Authorization";

	/// OAuth 2.0 client identifier parameter.
	pub const CLIENT_ID: &str = "client_id";
	/// OAuth 2.0 client secret parameter.
	pub const CLIENT_SECRET: &str = "client_secret";
	/// OAuth 2.0 redirect URI parameter.
	pub const REDIRECT_URI: &str = "redirect_uri";
	/// OAuth 2.0 authorization code parameter.
	pub const CODE: &str = "code";
	/// OAuth 2.0 access token parameter.
	pub const ACCESS_TOKEN: &str = "access_token";
	/// OAuth 2.0 grant type parameter.
	pub const GRANT_TYPE: &str = "grant_type";
	/// Default grant type for the code exchange.
	pub const AUTHORIZATION_CODE: &str = "authorization_code";
	/// OAuth 2.0 anti-forgery state parameter.
	pub const STATE: &str = "state";
}
