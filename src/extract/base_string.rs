//! Signature base string construction for OAuth 1.0a.

// self
use crate::{
	_prelude::*,
	model::{OAuthRequest, ParameterList, param},
};

/// Normalizes verb, URL, and merged parameters into the OAuth 1.0a signature
/// base string: `VERB&encode(sanitized_url)&encode(sorted_params)`.
///
/// The merged parameter string is percent-encoded as a single unit after its
/// keys and values were already encoded individually; the resulting double
/// encoding is intentional per the protocol.
pub fn extract_base_string(request: &OAuthRequest) -> Result<String> {
	if request.oauth_parameters().is_empty() {
		return Err(Error::ParametersMissing {
			verb: request.verb(),
			url: request.url().to_owned(),
		});
	}

	let verb = request.verb().as_str();
	let url = param::encode(&request.sanitized_url()?);
	let params = sorted_and_encoded_params(request)?;

	Ok(format!("{verb}&{url}&{params}"))
}

fn sorted_and_encoded_params(request: &OAuthRequest) -> Result<String> {
	let mut merged = ParameterList::new();

	merged.add_all(&request.querystring_parameters()?);
	merged.add_all(request.body_parameters());
	merged.add_all(request.oauth_parameters());

	Ok(param::encode(&merged.sorted().as_form_url_encoded_string()))
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::model::{Verb, consts};

	fn sample_request() -> OAuthRequest {
		let mut request = OAuthRequest::new(Verb::Get, "http://example.com");

		request
			.add_oauth_parameter(consts::TIMESTAMP, "123456")
			.expect("Timestamp key should be accepted.");
		request
			.add_oauth_parameter(consts::CONSUMER_KEY, "AS#$^*@&")
			.expect("Consumer key should be accepted.");
		request
			.add_oauth_parameter(consts::CALLBACK, "http://example/callback")
			.expect("Callback key should be accepted.");
		request
			.add_oauth_parameter(consts::SIGNATURE, "OAuth-Signature")
			.expect("Signature key should be accepted.");

		request
	}

	#[test]
	fn extracts_the_canonical_base_string() {
		let expected = "GET&http%3A%2F%2Fexample.com&oauth_callback%3Dhttp%253A%252F%252Fexample%252Fcallback%26oauth_consumer_key%3DAS%2523%2524%255E%252A%2540%2526%26oauth_signature%3DOAuth-Signature%26oauth_timestamp%3D123456";

		assert_eq!(
			extract_base_string(&sample_request()).expect("Base string should extract."),
			expected,
		);
	}

	#[test]
	fn double_encodes_whitespace_in_body_parameters() {
		let expected = "GET&http%3A%2F%2Fexample.com&body%3Dthis%2520param%2520has%2520whitespace%26oauth_callback%3Dhttp%253A%252F%252Fexample%252Fcallback%26oauth_consumer_key%3DAS%2523%2524%255E%252A%2540%2526%26oauth_signature%3DOAuth-Signature%26oauth_timestamp%3D123456";
		let mut request = sample_request();

		request.add_body_parameter("body", "this param has whitespace");

		assert_eq!(extract_base_string(&request).expect("Base string should extract."), expected);
	}

	#[test]
	fn merges_url_querystring_parameters_into_the_sort() {
		let mut request = OAuthRequest::new(Verb::Get, "http://example.com?qsparam=value");

		request
			.add_oauth_parameter(consts::TIMESTAMP, "123456")
			.expect("Timestamp key should be accepted.");

		let base_string = extract_base_string(&request).expect("Base string should extract.");

		assert_eq!(
			base_string,
			"GET&http%3A%2F%2Fexample.com&oauth_timestamp%3D123456%26qsparam%3Dvalue",
		);
	}

	#[test]
	fn fails_without_oauth_parameters() {
		let request = OAuthRequest::new(Verb::Get, "http://example.com");
		let err = extract_base_string(&request)
			.expect_err("Requests without OAuth parameters must be rejected.");

		assert!(matches!(err, Error::ParametersMissing { verb: Verb::Get, url } if url == "http://example.com"));
	}
}
