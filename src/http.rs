//! Transport primitives for sending signed requests.
//!
//! The engine depends only on the narrow [`HttpTransport`] contract: take a fully
//! populated [`OAuthRequest`], perform one network round-trip, and return a
//! [`WireResponse`] or a connection error. Redirect policy, connection pooling,
//! and TLS all belong to the implementation behind the trait.

// std
use std::ops::Deref;
// self
use crate::{_prelude::*, model::OAuthRequest};
#[cfg(feature = "reqwest")]
use crate::{
	error::{ConnectionError, PreconditionError},
	model::{OAuthConfig, Verb},
};

/// Default content type applied when a request carries a body but no explicit
/// `Content-Type` header.
pub const DEFAULT_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Boxed future returned by transport implementations.
pub type TransportFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + 'a + Send>>;

/// Response descriptor handed back by the transport.
///
/// The engine never fails on a non-success status by itself; token extractors
/// surface malformed bodies as extraction errors, which keeps provider error
/// payloads available for diagnostics.
#[derive(Clone, Debug)]
pub struct WireResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response headers, lowercased names.
	pub headers: HashMap<String, String>,
	/// Verbatim response body.
	pub body: String,
}
impl WireResponse {
	/// Returns true for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Abstraction over HTTP stacks capable of executing one blocking-equivalent
/// round-trip per call.
///
/// Implementations must be `Send + Sync + 'static` so services can share them via
/// `Arc` across tasks; the returned future must be `Send` for the lifetime of the
/// in-flight request. The engine performs no retries; every invocation maps to
/// exactly one attempt.
pub trait HttpTransport
where
	Self: 'static + Send + Sync,
{
	/// Sends the request and collects the full response body.
	fn execute<'a>(&'a self, request: &'a OAuthRequest) -> TransportFuture<'a, WireResponse>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// Token exchanges should not follow redirects: endpoints return results directly
/// instead of delegating to another URI, so [`ReqwestHttpTransport::from_config`]
/// disables redirect following. Configure any custom [`ReqwestClient`] the same way.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestHttpTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpTransport {
	/// Wraps an existing [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a transport honoring the config's connect timeout and redirect policy.
	pub fn from_config(config: &OAuthConfig) -> Result<Self, PreconditionError> {
		let mut builder = ReqwestClient::builder().redirect(reqwest::redirect::Policy::none());

		if let Some(timeout) = config.connect_timeout() {
			builder = builder.connect_timeout(timeout);
		}
		if let Some(timeout) = config.read_timeout() {
			builder = builder.timeout(timeout);
		}

		builder.build().map(Self).map_err(PreconditionError::http_client_build)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpTransport {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl HttpTransport for ReqwestHttpTransport {
	fn execute<'a>(&'a self, request: &'a OAuthRequest) -> TransportFuture<'a, WireResponse> {
		Box::pin(async move {
			let method = match request.verb() {
				Verb::Get => reqwest::Method::GET,
				Verb::Post => reqwest::Method::POST,
				Verb::Put => reqwest::Method::PUT,
				Verb::Delete => reqwest::Method::DELETE,
				Verb::Head => reqwest::Method::HEAD,
				Verb::Options => reqwest::Method::OPTIONS,
				Verb::Trace => reqwest::Method::TRACE,
			};
			let mut builder = self.0.request(method, request.complete_url());

			for (key, value) in request.headers() {
				builder = builder.header(key, value);
			}

			if request.has_body_content() {
				if !request.has_header("Content-Type") {
					builder = builder.header("Content-Type", DEFAULT_CONTENT_TYPE);
				}

				builder = builder.body(request.body_contents());
			}

			let response = builder.send().await.map_err(ConnectionError::from)?;
			let status = response.status().as_u16();
			let headers = response
				.headers()
				.iter()
				.filter_map(|(name, value)| {
					value.to_str().ok().map(|value| (name.as_str().to_owned(), value.to_owned()))
				})
				.collect();
			let body = response.text().await.map_err(ConnectionError::from)?;

			Ok(WireResponse { status, headers, body })
		})
	}
}
