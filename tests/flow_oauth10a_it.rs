#![cfg(feature = "reqwest")]

// std
use std::sync::Arc;
// crates.io
use httpmock::prelude::*;
use regex::Regex;
// self
use oauth_handshake::{
	clock::TimestampService,
	error::{Error, ExtractionError},
	http::ReqwestHttpTransport,
	model::{OAuthConfig, OAuthRequest, SignaturePlacement, Token, Verb, Verifier},
	provider::StaticProfile10a,
	service::OAuth10aService,
};

const API_KEY: &str = "key-it";
const API_SECRET: &str = "secret-it";

struct FrozenClock;
impl TimestampService for FrozenClock {
	fn timestamp_in_seconds(&self) -> String {
		"123456".to_owned()
	}

	fn nonce(&self) -> String {
		"fixed-nonce".to_owned()
	}
}

fn build_service(
	server: &MockServer,
	config: OAuthConfig,
) -> OAuth10aService<ReqwestHttpTransport> {
	let profile = Arc::new(StaticProfile10a::new(
		server.url("/request_token"),
		server.url("/access_token"),
		"https://www.example.com/authorize",
	));

	OAuth10aService::new(config, profile)
		.expect("Service should build successfully.")
		.with_clock(Arc::new(FrozenClock))
}

#[tokio::test]
async fn three_legged_handshake_signs_and_extracts_tokens() {
	let server = MockServer::start_async().await;
	let config = OAuthConfig::new(API_KEY, API_SECRET)
		.expect("Config should build successfully.")
		.with_callback("https://app.example.com/cb");
	let service = build_service(&server, config);
	let request_token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/request_token").header_matches(
				"authorization",
				Regex::new(concat!(
					"^OAuth oauth_callback=\"https%3A%2F%2Fapp\\.example\\.com%2Fcb\", ",
					"oauth_timestamp=\"123456\", ",
					"oauth_nonce=\"fixed-nonce\", ",
					"oauth_consumer_key=\"key-it\", ",
					"oauth_signature_method=\"HMAC-SHA1\", ",
					"oauth_version=\"1.0\", ",
					"oauth_signature=\"[A-Za-z0-9%.~_-]+\"$",
				))
				.expect("Header pattern should compile."),
			);
			then.status(200)
				.header("content-type", "application/x-www-form-urlencoded")
				.body("oauth_token=hh5s93j4hdidpola&oauth_token_secret=hdhd0244k9j7ao03");
		})
		.await;
	let request_token =
		service.request_token().await.expect("Request token exchange should succeed.");

	request_token_mock.assert_async().await;

	assert_eq!(request_token.token(), "hh5s93j4hdidpola");
	assert_eq!(request_token.secret().expose(), "hdhd0244k9j7ao03");
	assert_eq!(
		service.authorization_url(&request_token),
		"https://www.example.com/authorize?oauth_token=hh5s93j4hdidpola",
	);

	let access_token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/access_token").header_matches(
				"authorization",
				Regex::new(
					"^OAuth oauth_token=\"hh5s93j4hdidpola\", oauth_verifier=\"verifier-it\", ",
				)
				.expect("Header pattern should compile."),
			);
			then.status(200)
				.header("content-type", "application/x-www-form-urlencoded")
				.body("oauth_token=access-token-it&oauth_token_secret=access-secret-it");
		})
		.await;
	let verifier = Verifier::new("verifier-it").expect("Verifier should accept non-empty input.");
	let access_token = service
		.access_token(&request_token, &verifier)
		.await
		.expect("Access token exchange should succeed.");

	access_token_mock.assert_async().await;

	assert_eq!(access_token.token(), "access-token-it");
	assert_eq!(access_token.secret().expose(), "access-secret-it");
	assert_eq!(
		access_token.raw_response(),
		Some("oauth_token=access-token-it&oauth_token_secret=access-secret-it"),
	);
}

#[tokio::test]
async fn querystring_placement_injects_oauth_parameters_into_the_url() {
	let server = MockServer::start_async().await;
	let config = OAuthConfig::new(API_KEY, API_SECRET)
		.expect("Config should build successfully.")
		.with_signature_placement(SignaturePlacement::QueryString);
	let service = build_service(&server, config);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/request_token")
				.query_param("oauth_callback", "oob")
				.query_param("oauth_timestamp", "123456")
				.query_param("oauth_nonce", "fixed-nonce")
				.query_param("oauth_consumer_key", API_KEY)
				.query_param("oauth_signature_method", "HMAC-SHA1")
				.query_param("oauth_version", "1.0")
				.query_param_exists("oauth_signature");
			then.status(200).body("oauth_token=qs-token&oauth_token_secret=qs-secret");
		})
		.await;
	let token = service.request_token().await.expect("Request token exchange should succeed.");

	mock.assert_async().await;

	assert_eq!(token.token(), "qs-token");
	assert_eq!(token.secret().expose(), "qs-secret");
}

#[tokio::test]
async fn provider_error_bodies_surface_as_extraction_failures() {
	let server = MockServer::start_async().await;
	let config = OAuthConfig::new(API_KEY, API_SECRET).expect("Config should build successfully.");
	let service = build_service(&server, config);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/request_token");
			then.status(401).body("error=token_rejected");
		})
		.await;
	let err = service
		.request_token()
		.await
		.expect_err("Malformed provider bodies must fail extraction.");

	mock.assert_async().await;

	assert!(matches!(
		err,
		Error::Extraction(ExtractionError::TokenNotFound { response }) if response == "error=token_rejected",
	));
}

#[test]
fn sign_request_attaches_the_authorization_header() {
	let server = MockServer::start();
	let config = OAuthConfig::new(API_KEY, API_SECRET).expect("Config should build successfully.");
	let service = build_service(&server, config);
	let access_token = Token::new("access-token-it", "access-secret-it");
	let mut request = OAuthRequest::new(Verb::Get, "http://api.example.com/resource");

	service.sign_request(&access_token, &mut request).expect("Signing should succeed.");

	let (name, value) = &request.headers()[0];

	assert_eq!(name, "Authorization");
	assert!(value.starts_with("OAuth oauth_token=\"access-token-it\", oauth_timestamp=\"123456\""));
	assert!(value.contains("oauth_signature=\""));
}

#[test]
fn signatures_are_deterministic_under_a_frozen_clock() {
	let server = MockServer::start();
	let config = OAuthConfig::new(API_KEY, API_SECRET).expect("Config should build successfully.");
	let service = build_service(&server, config);
	let access_token = Token::new("access-token-it", "access-secret-it");
	let mut first = OAuthRequest::new(Verb::Get, "http://api.example.com/resource?page=2");
	let mut second = OAuthRequest::new(Verb::Get, "http://api.example.com/resource?page=2");

	service.sign_request(&access_token, &mut first).expect("Signing should succeed.");
	service.sign_request(&access_token, &mut second).expect("Signing should succeed.");

	assert_eq!(first.headers(), second.headers());
}
