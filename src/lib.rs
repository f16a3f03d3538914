//! Client-side OAuth 1.0a and OAuth 2.0 protocol engine: canonical parameter encoding, signature
//! base strings, pluggable signers, and the token-exchange handshakes in one crate.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod clock;
pub mod error;
pub mod ext;
pub mod extract;
pub mod http;
pub mod model;
pub mod obs;
pub mod provider;
pub mod service;
pub mod signature;

mod _prelude {
	pub use std::{
		collections::HashMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
		time::Duration,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {httpmock as _, serde_json as _, tokio as _};
