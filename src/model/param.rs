//! Ordered key/value parameter collections with OAuth-compliant percent encoding.
//!
//! Encoding follows RFC 3986: only the unreserved set (letters, digits, `-._~`)
//! passes through, every other byte is percent-encoded after UTF-8 expansion.
//! Stored order is insertion order; the lexicographic sort required by signature
//! base strings is applied on a copy, never on the stored list.

// crates.io
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
// self
use crate::_prelude::*;

const OAUTH_ENCODE_SET: &AsciiSet =
	&NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Percent-encodes a value with the OAuth unreserved set.
pub fn encode(value: &str) -> String {
	utf8_percent_encode(value, OAUTH_ENCODE_SET).to_string()
}

/// Decodes a percent-encoded value, treating `+` as a space per form semantics.
pub fn decode(value: &str) -> Result<String, ParameterDecodeError> {
	let unplussed = value.replace('+', " ");

	percent_decode_str(&unplussed)
		.decode_utf8()
		.map(|cow| cow.into_owned())
		.map_err(|_| ParameterDecodeError { value: value.to_owned() })
}

/// Error raised when a percent-encoded value is not valid UTF-8 after decoding.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Cannot decode percent-encoded value: {value}.")]
pub struct ParameterDecodeError {
	/// Value that failed to decode.
	pub value: String,
}

/// A single key/value pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
	/// Parameter name, stored raw.
	pub key: String,
	/// Parameter value, stored raw.
	pub value: String,
}
impl Parameter {
	/// Creates a new pair from raw (unencoded) parts.
	pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
		Self { key: key.into(), value: value.into() }
	}

	/// Serializes the pair as `enc(key)=enc(value)`.
	pub fn as_url_encoded_pair(&self) -> String {
		format!("{}={}", encode(&self.key), encode(&self.value))
	}
}
impl PartialOrd for Parameter {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}
impl Ord for Parameter {
	// Base-string order: lexicographic by (encoded key, encoded value).
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		(encode(&self.key), encode(&self.value)).cmp(&(encode(&other.key), encode(&other.value)))
	}
}

/// Insertion-ordered multi-map of request parameters; duplicate keys are permitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterList(Vec<Parameter>);
impl ParameterList {
	/// Creates an empty list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a pair, preserving insertion order.
	pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.0.push(Parameter::new(key, value));
	}

	/// Merges another list, preserving both orders.
	pub fn add_all(&mut self, other: &ParameterList) {
		self.0.extend(other.0.iter().cloned());
	}

	/// Parses a raw querystring (`k=v&k2=v2`), percent-decoding keys and values.
	///
	/// A pair without `=` yields an empty value.
	pub fn add_querystring(&mut self, querystring: &str) -> Result<(), ParameterDecodeError> {
		if querystring.is_empty() {
			return Ok(());
		}

		for pair in querystring.split('&') {
			let (key, value) = pair.split_once('=').unwrap_or((pair, ""));

			self.add(decode(key)?, decode(value)?);
		}

		Ok(())
	}

	/// Returns the pairs in insertion order.
	pub fn params(&self) -> &[Parameter] {
		&self.0
	}

	/// Returns true when the list holds no pairs.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns the number of stored pairs.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns a copy sorted for base-string construction; stored order is untouched.
	pub fn sorted(&self) -> ParameterList {
		let mut params = self.0.clone();

		params.sort();

		ParameterList(params)
	}

	/// Serializes as `k1=v1&k2=v2...` with OAuth percent encoding applied to each part.
	pub fn as_form_url_encoded_string(&self) -> String {
		self.0.iter().map(Parameter::as_url_encoded_pair).collect::<Vec<_>>().join("&")
	}

	/// Appends the encoded pairs to a URL, choosing `?` or `&` as needed.
	pub fn append_to(&self, url: &str) -> String {
		if self.0.is_empty() {
			return url.to_owned();
		}

		let separator = if url.contains('?') { '&' } else { '?' };

		format!("{url}{separator}{}", self.as_form_url_encoded_string())
	}
}
impl FromIterator<(String, String)> for ParameterList {
	fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
		Self(iter.into_iter().map(|(key, value)| Parameter::new(key, value)).collect())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn encode_covers_the_reserved_set() {
		assert_eq!(encode("AS#$^*@&"), "AS%23%24%5E%2A%40%26");
		assert_eq!(encode("this param has whitespace"), "this%20param%20has%20whitespace");
		assert_eq!(encode("safe-._~AZaz09"), "safe-._~AZaz09");
		assert_eq!(encode("häus"), "h%C3%A4us");
	}

	#[test]
	fn decode_inverts_encode() {
		for value in ["plain", "with space", "AS#$^*@&", "http://example/callback", "ünïcode ☃"] {
			assert_eq!(decode(&encode(value)).expect("Round trip should decode."), value);
		}
	}

	#[test]
	fn decode_maps_plus_to_space() {
		assert_eq!(decode("a+b").expect("Plus should decode."), "a b");
	}

	#[test]
	fn decode_rejects_broken_utf8() {
		assert!(decode("%FF%FE").is_err());
	}

	#[test]
	fn serialization_preserves_insertion_order_and_duplicates() {
		let mut list = ParameterList::new();

		list.add("b", "2");
		list.add("a", "1");
		list.add("b", "0");

		assert_eq!(list.as_form_url_encoded_string(), "b=2&a=1&b=0");
		assert_eq!(list.sorted().as_form_url_encoded_string(), "a=1&b=0&b=2");
		// The stored order survives sorting.
		assert_eq!(list.as_form_url_encoded_string(), "b=2&a=1&b=0");
	}

	#[test]
	fn append_to_picks_the_right_separator() {
		let mut list = ParameterList::new();

		assert_eq!(list.append_to("http://www.example.com"), "http://www.example.com");

		list.add("q", "a b");

		assert_eq!(list.append_to("http://www.example.com"), "http://www.example.com?q=a%20b");
		assert_eq!(list.append_to("http://www.example.com?x=1"), "http://www.example.com?x=1&q=a%20b");
	}

	#[test]
	fn querystring_parsing_decodes_pairs() {
		let mut list = ParameterList::new();

		list.add_querystring("one=1&two=a%20b&flag").expect("Querystring should parse.");

		assert_eq!(list.params()[0], Parameter::new("one", "1"));
		assert_eq!(list.params()[1], Parameter::new("two", "a b"));
		assert_eq!(list.params()[2], Parameter::new("flag", ""));
	}
}
