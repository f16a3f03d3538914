//! Flow services orchestrating the token exchanges.

pub mod oauth10a;
pub mod oauth20;

pub use oauth10a::*;
pub use oauth20::*;
