//! Extractors that turn requests into canonical wire artifacts and response
//! bodies into tokens.

pub mod base_string;
pub mod header;
pub mod token;

pub use base_string::*;
pub use header::*;
pub use token::*;
