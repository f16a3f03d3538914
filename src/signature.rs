//! Pluggable signature algorithms for OAuth 1.0a exchanges.

// crates.io
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use sha1::Sha1;
// self
use crate::{error::SignatureError, model::param};

type HmacSha1 = Hmac<Sha1>;

/// Turns a base string plus secrets into a signature.
///
/// Implementations must be deterministic: identical (base string, api secret,
/// token secret) triples always yield the identical signature string.
pub trait SignatureService: Send + Sync {
	/// Computes the signature for the given base string and secrets.
	fn signature(
		&self,
		base_string: &str,
		api_secret: &str,
		token_secret: &str,
	) -> Result<String, SignatureError>;

	/// Returns the wire name of the algorithm (`oauth_signature_method` value).
	fn method(&self) -> &'static str;
}

/// HMAC-SHA1 signature service, the OAuth 1.0a default.
///
/// The signing key is `encode(api_secret) + '&' + encode(token_secret)`; the
/// signature is the base64 digest of the base string under that key.
#[derive(Clone, Copy, Debug, Default)]
pub struct HmacSha1SignatureService;
impl SignatureService for HmacSha1SignatureService {
	fn signature(
		&self,
		base_string: &str,
		api_secret: &str,
		token_secret: &str,
	) -> Result<String, SignatureError> {
		if api_secret.is_empty() {
			return Err(SignatureError::EmptySecret { base_string: base_string.to_owned() });
		}

		let key = format!("{}&{}", param::encode(api_secret), param::encode(token_secret));
		let mut mac = HmacSha1::new_from_slice(key.as_bytes()).map_err(|source| {
			SignatureError::Digest { base_string: base_string.to_owned(), source }
		})?;

		mac.update(base_string.as_bytes());

		Ok(BASE64.encode(mac.finalize().into_bytes()))
	}

	fn method(&self) -> &'static str {
		"HMAC-SHA1"
	}
}

/// PLAINTEXT signature service, reserved for providers whose transport is already
/// secured: the signature is the signing key itself, no hashing involved.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlaintextSignatureService;
impl SignatureService for PlaintextSignatureService {
	fn signature(
		&self,
		base_string: &str,
		api_secret: &str,
		token_secret: &str,
	) -> Result<String, SignatureError> {
		if api_secret.is_empty() {
			return Err(SignatureError::EmptySecret { base_string: base_string.to_owned() });
		}

		Ok(format!("{}&{}", param::encode(api_secret), param::encode(token_secret)))
	}

	fn method(&self) -> &'static str {
		"PLAINTEXT"
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	// OAuth 1.0 specification appendix vector.
	const RFC_BASE_STRING: &str = "GET&http%3A%2F%2Fphotos.example.net%2Fphotos&file%3Dvacation.jpg%26oauth_consumer_key%3Ddpf43f3p2l4k3l03%26oauth_nonce%3Dkllo9940pd9333jh%26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1191242096%26oauth_token%3Dnnch734d00sl2jdk%26oauth_version%3D1.0%26size%3Doriginal";

	#[test]
	fn hmac_sha1_matches_the_specification_vector() {
		let signature = HmacSha1SignatureService
			.signature(RFC_BASE_STRING, "kd94hf93k423kf44", "pfkkdhi9sl3r4s00")
			.expect("Signature should compute.");

		assert_eq!(signature, "tR3+Ty81lMeYAr/Fid0kMTYa/WM=");
	}

	#[test]
	fn hmac_sha1_is_deterministic() {
		let service = HmacSha1SignatureService;
		let first = service
			.signature("GET&base&string", "api-secret", "token-secret")
			.expect("Signature should compute.");
		let second = service
			.signature("GET&base&string", "api-secret", "token-secret")
			.expect("Signature should compute.");

		assert_eq!(first, second);
	}

	#[test]
	fn hmac_sha1_encodes_the_signing_key() {
		// Secrets with reserved characters are percent-encoded before keying the digest.
		let plain = HmacSha1SignatureService
			.signature("base", "secret&one", "token secret")
			.expect("Signature should compute.");
		let manual = {
			let mut mac = HmacSha1::new_from_slice(b"secret%26one&token%20secret")
				.expect("HMAC accepts any key size.");

			mac.update(b"base");

			BASE64.encode(mac.finalize().into_bytes())
		};

		assert_eq!(plain, manual);
	}

	#[test]
	fn plaintext_concatenates_encoded_secrets() {
		let signature = PlaintextSignatureService
			.signature("ignored", "api secret", "token/secret")
			.expect("Signature should compute.");

		assert_eq!(signature, "api%20secret&token%2Fsecret");
	}

	#[test]
	fn both_variants_reject_empty_api_secrets() {
		for service in [
			&HmacSha1SignatureService as &dyn SignatureService,
			&PlaintextSignatureService as &dyn SignatureService,
		] {
			let err = service
				.signature("base", "", "token-secret")
				.expect_err("Empty api secrets must be rejected.");

			assert!(matches!(err, SignatureError::EmptySecret { base_string } if base_string == "base"));
		}
	}

	#[test]
	fn method_names_match_the_wire_format() {
		assert_eq!(HmacSha1SignatureService.method(), "HMAC-SHA1");
		assert_eq!(PlaintextSignatureService.method(), "PLAINTEXT");
	}
}
