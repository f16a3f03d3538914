//! The outbound HTTP request under construction.
//!
//! An [`OAuthRequest`] is a single-use value: the caller constructs it, the engine
//! signs it (adding headers or parameters), the transport sends it, and it is
//! discarded. OAuth parameters live in their own namespace and never intermix with
//! ordinary querystring or body parameters.

// self
use crate::{
	_prelude::*,
	error::PreconditionError,
	model::{consts, param::ParameterList},
};

/// HTTP verbs understood by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
	/// GET request.
	Get,
	/// POST request.
	Post,
	/// PUT request.
	Put,
	/// DELETE request.
	Delete,
	/// HEAD request.
	Head,
	/// OPTIONS request.
	Options,
	/// TRACE request.
	Trace,
}
impl Verb {
	/// Returns the uppercase wire name of the verb.
	pub const fn as_str(self) -> &'static str {
		match self {
			Verb::Get => "GET",
			Verb::Post => "POST",
			Verb::Put => "PUT",
			Verb::Delete => "DELETE",
			Verb::Head => "HEAD",
			Verb::Options => "OPTIONS",
			Verb::Trace => "TRACE",
		}
	}
}
impl Display for Verb {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// One outbound HTTP call under construction.
#[derive(Clone, Debug)]
pub struct OAuthRequest {
	verb: Verb,
	url: String,
	querystring_params: ParameterList,
	body_params: ParameterList,
	headers: Vec<(String, String)>,
	oauth_params: ParameterList,
	payload: Option<String>,
}
impl OAuthRequest {
	/// Creates a new request for the given verb and URL (which may carry a querystring).
	pub fn new(verb: Verb, url: impl Into<String>) -> Self {
		Self {
			verb,
			url: url.into(),
			querystring_params: ParameterList::new(),
			body_params: ParameterList::new(),
			headers: Vec::new(),
			oauth_params: ParameterList::new(),
			payload: None,
		}
	}

	/// Adds a parameter to the OAuth namespace.
	///
	/// Keys must carry the reserved `oauth_` prefix; `scope` is the single permitted
	/// exception. Anything else is rejected to keep the namespace pure.
	pub fn add_oauth_parameter(
		&mut self,
		key: impl Into<String>,
		value: impl Into<String>,
	) -> Result<(), PreconditionError> {
		let key = key.into();

		if !key.starts_with("oauth_") && key != consts::SCOPE {
			return Err(PreconditionError::NonOAuthParameter { key });
		}

		self.oauth_params.add(key, value);

		Ok(())
	}

	/// Adds a querystring parameter (stored raw, encoded at serialization time).
	pub fn add_querystring_parameter(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.querystring_params.add(key, value);
	}

	/// Adds a body parameter for verbs that carry a form body.
	pub fn add_body_parameter(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.body_params.add(key, value);
	}

	/// Adds the parameter to the body when the verb carries one, to the querystring otherwise.
	pub fn add_parameter(&mut self, key: impl Into<String>, value: impl Into<String>) {
		if self.has_body_content() {
			self.body_params.add(key, value);
		} else {
			self.querystring_params.add(key, value);
		}
	}

	/// Adds an ordinary HTTP header.
	pub fn add_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.headers.push((key.into(), value.into()));
	}

	/// Replaces the form body with a raw payload (e.g. XML). The payload is never signed.
	pub fn set_payload(&mut self, payload: impl Into<String>) {
		self.payload = Some(payload.into());
	}

	/// Returns the HTTP verb.
	pub fn verb(&self) -> Verb {
		self.verb
	}

	/// Returns the URL the request was created with.
	pub fn url(&self) -> &str {
		&self.url
	}

	/// Returns the OAuth-namespace parameters in insertion order.
	pub fn oauth_parameters(&self) -> &ParameterList {
		&self.oauth_params
	}

	/// Returns the form body parameters.
	pub fn body_parameters(&self) -> &ParameterList {
		&self.body_params
	}

	/// Returns the regular headers in insertion order.
	pub fn headers(&self) -> &[(String, String)] {
		&self.headers
	}

	/// Returns true when a header with the given name is present.
	pub fn has_header(&self, key: &str) -> bool {
		self.headers.iter().any(|(name, _)| name.eq_ignore_ascii_case(key))
	}

	/// Returns the complete URL: base plus every explicit querystring parameter.
	pub fn complete_url(&self) -> String {
		self.querystring_params.append_to(&self.url)
	}

	/// Returns the OAuth-sanitized URL: querystring removed, default ports 80/443 stripped.
	pub fn sanitized_url(&self) -> Result<String, PreconditionError> {
		Url::parse(&self.url)
			.map_err(|source| PreconditionError::InvalidUrl { url: self.url.clone(), source })?;

		let mut sanitized = self.url.split('?').next().unwrap_or_default().to_owned();

		if sanitized.starts_with("http://")
			&& (sanitized.ends_with(":80") || sanitized.contains(":80/"))
		{
			sanitized = sanitized.replacen(":80", "", 1);
		} else if sanitized.starts_with("https://")
			&& (sanitized.ends_with(":443") || sanitized.contains(":443/"))
		{
			sanitized = sanitized.replacen(":443", "", 1);
		}

		Ok(sanitized)
	}

	/// Returns the merged querystring parameters: pairs parsed from the URL itself
	/// followed by the explicitly added ones.
	pub fn querystring_parameters(&self) -> Result<ParameterList, PreconditionError> {
		let mut merged = ParameterList::new();

		if let Some((_, querystring)) = self.url.split_once('?') {
			merged
				.add_querystring(querystring)
				.map_err(|_| PreconditionError::UndecodableQuerystring { url: self.url.clone() })?;
		}

		merged.add_all(&self.querystring_params);

		Ok(merged)
	}

	/// Returns true when the verb carries a request body.
	pub fn has_body_content(&self) -> bool {
		matches!(self.verb, Verb::Post | Verb::Put)
	}

	/// Returns the body to send: the raw payload when set, the form-encoded
	/// parameters otherwise.
	pub fn body_contents(&self) -> String {
		self.payload.clone().unwrap_or_else(|| self.body_params.as_form_url_encoded_string())
	}

	/// Returns true when a raw payload replaced the form body.
	pub fn has_payload(&self) -> bool {
		self.payload.is_some()
	}
}
impl Display for OAuthRequest {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "@Request({} {})", self.verb, self.url)
	}
}
