//! HTTP handlers.

pub mod bakery;
pub use bakery::*;
