//! Per-request timestamp and nonce generation.
//!
//! The trait exists so tests can inject a frozen clock and a fixed nonce, making
//! signature output fully deterministic.

// crates.io
use rand::RngCore;
use time::OffsetDateTime;

/// Produces the per-request Unix timestamp and a fresh random nonce.
///
/// Implementations must be safe under concurrent invocation; each call is
/// independent and no shared counter is required.
pub trait TimestampService: Send + Sync {
	/// Returns the current Unix time in seconds as a decimal string.
	fn timestamp_in_seconds(&self) -> String;

	/// Returns a practically-unique random string, fresh per call.
	fn nonce(&self) -> String;
}

/// Wall-clock implementation backed by the thread-local random source.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemTimestampService;
impl TimestampService for SystemTimestampService {
	fn timestamp_in_seconds(&self) -> String {
		OffsetDateTime::now_utc().unix_timestamp().to_string()
	}

	fn nonce(&self) -> String {
		let mut bytes = [0_u8; 16];

		rand::rng().fill_bytes(&mut bytes);

		bytes.iter().map(|byte| format!("{byte:02x}")).collect()
	}
}
