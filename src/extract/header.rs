//! `Authorization` header construction for OAuth 1.0a.

// self
use crate::{
	_prelude::*,
	model::{OAuthRequest, param},
};

const PREAMBLE: &str = "OAuth ";
const PARAM_SEPARATOR: &str = ", ";

/// Serializes a request's OAuth parameters into an `Authorization` header value:
/// `OAuth k1="v1", k2="v2", ...` with percent-encoded values, joined in insertion
/// order. The exact quoting and comma-space separator are mandated by the protocol.
pub fn extract_header(request: &OAuthRequest) -> Result<String> {
	if request.oauth_parameters().is_empty() {
		return Err(Error::ParametersMissing {
			verb: request.verb(),
			url: request.url().to_owned(),
		});
	}

	let segments = request
		.oauth_parameters()
		.params()
		.iter()
		.map(|parameter| format!("{}=\"{}\"", parameter.key, param::encode(&parameter.value)))
		.collect::<Vec<_>>()
		.join(PARAM_SEPARATOR);

	Ok(format!("{PREAMBLE}{segments}"))
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::model::{Verb, consts};

	#[test]
	fn extracts_the_standard_header_in_insertion_order() {
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

		let expected = "OAuth oauth_timestamp=\"123456\", \
			oauth_consumer_key=\"AS%23%24%5E%2A%40%26\", \
			oauth_callback=\"http%3A%2F%2Fexample%2Fcallback\", \
			oauth_signature=\"OAuth-Signature\"";

		assert_eq!(extract_header(&request).expect("Header should extract."), expected);
	}

	#[test]
	fn header_contains_one_segment_per_parameter() {
		let mut request = OAuthRequest::new(Verb::Get, "http://example.com");

		request.add_oauth_parameter(consts::NONCE, "n").expect("Nonce key should be accepted.");
		request.add_oauth_parameter(consts::TOKEN, "t").expect("Token key should be accepted.");

		let header = extract_header(&request).expect("Header should extract.");

		assert!(header.starts_with(PREAMBLE));
		assert_eq!(header.matches('=').count(), 2);
		assert_eq!(header.matches(PARAM_SEPARATOR).count(), 1);
	}

	#[test]
	fn fails_without_oauth_parameters() {
		let request = OAuthRequest::new(Verb::Get, "http://example.com");
		let err =
			extract_header(&request).expect_err("Requests without OAuth parameters must be rejected.");

		assert!(matches!(err, Error::ParametersMissing { .. }));
	}
}
