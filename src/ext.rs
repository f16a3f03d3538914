//! Extension seams that providers plug into the engine.

pub mod request_signer;

pub use request_signer::*;
